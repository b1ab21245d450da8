//! Shared router state

use std::sync::Arc;
use tld_guesser_application::{
    GameParams, GameplayDataset, GenerateQuestionUseCase, ListCategoriesUseCase,
    PredictTldUseCase, ScorerCatalog,
};

pub(crate) struct InnerAppState {
    generate_question: GenerateQuestionUseCase<dyn GameplayDataset, dyn ScorerCatalog>,
    predict_tld: PredictTldUseCase<dyn ScorerCatalog>,
    list_categories: ListCategoriesUseCase<dyn GameplayDataset>,
}

/// Use cases wired over the startup-loaded dataset and model catalog.
///
/// Built once and never mutated, so handlers share it without locking.
#[derive(Clone)]
pub struct AppState(Arc<InnerAppState>);

impl AppState {
    pub fn new(
        dataset: Arc<dyn GameplayDataset>,
        catalog: Arc<dyn ScorerCatalog>,
        params: GameParams,
    ) -> Self {
        Self(Arc::new(InnerAppState {
            generate_question: GenerateQuestionUseCase::new(
                Arc::clone(&dataset),
                Arc::clone(&catalog),
            )
            .with_params(params),
            predict_tld: PredictTldUseCase::new(catalog).with_params(params),
            list_categories: ListCategoriesUseCase::new(dataset),
        }))
    }

    pub fn generate_question(
        &self,
    ) -> &GenerateQuestionUseCase<dyn GameplayDataset, dyn ScorerCatalog> {
        &self.0.generate_question
    }

    pub fn predict_tld(&self) -> &PredictTldUseCase<dyn ScorerCatalog> {
        &self.0.predict_tld
    }

    pub fn list_categories(&self) -> &ListCategoriesUseCase<dyn GameplayDataset> {
        &self.0.list_categories
    }
}
