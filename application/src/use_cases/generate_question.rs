//! Generate Question use case
//!
//! Draws a gameplay row, scores it with the joint model and builds a
//! multiple-choice question that is guaranteed to contain the true TLD.

use crate::config::GameParams;
use crate::ports::gameplay_dataset::{DatasetError, GameplayDataset};
use crate::ports::tld_scorer::{ScorerCatalog, ScorerError};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sha2::{Digest, Sha256};
use std::sync::Arc;
use thiserror::Error;
use tld_guesser_domain::{
    DomainError, GameplayRow, ModelVariant, Question, ScoreDistribution, ScoredOption,
};
use tracing::{error, info};

/// Errors that can occur while generating a question
#[derive(Error, Debug)]
pub enum GenerateQuestionError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error(transparent)]
    Scoring(#[from] ScorerError),

    #[error("Question could not be assembled: {0}")]
    InvalidQuestion(#[from] DomainError),
}

/// Use case for generating one question per request
pub struct GenerateQuestionUseCase<D, C>
where
    D: GameplayDataset + ?Sized,
    C: ScorerCatalog + ?Sized,
{
    dataset: Arc<D>,
    catalog: Arc<C>,
    params: GameParams,
}

impl<D, C> GenerateQuestionUseCase<D, C>
where
    D: GameplayDataset + ?Sized,
    C: ScorerCatalog + ?Sized,
{
    pub fn new(dataset: Arc<D>, catalog: Arc<C>) -> Self {
        Self {
            dataset,
            catalog,
            params: GameParams::default(),
        }
    }

    pub fn with_params(mut self, params: GameParams) -> Self {
        self.params = params;
        self
    }

    /// Execute the use case, shuffling options with the thread-local generator
    pub fn execute(&self) -> Result<Question, GenerateQuestionError> {
        self.execute_with_rng(&mut rand::rng())
    }

    /// Execute the use case with a caller-supplied shuffle generator
    pub fn execute_with_rng<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Question, GenerateQuestionError> {
        let row = self
            .dataset
            .sample_row()
            .inspect_err(|e| error!("Could not sample a gameplay row: {}", e))?;

        let distribution = self
            .catalog
            .scorer(ModelVariant::BaseAndCategory)
            .and_then(|scorer| scorer.score(&row.input_text()))
            .inspect_err(|e| {
                error!(
                    "Prediction failed for domain={} category={}: {}",
                    row.base_name(),
                    row.category(),
                    e
                );
            })?;

        let question = compose_question(&row, &distribution, self.params.option_count, rng)
            .inspect_err(|e| {
                error!(
                    "Question rejected for domain={} category={}: {}",
                    row.base_name(),
                    row.category(),
                    e
                );
            })?;
        Ok(question)
    }
}

/// Build a question from a row and its score distribution.
///
/// Options are the top `option_count` classes with the true TLD swapped in
/// when missing, shuffled with `rng`. Each option carries its model score,
/// or 0.0 when the model has no such class.
pub fn compose_question<R: Rng + ?Sized>(
    row: &GameplayRow,
    distribution: &ScoreDistribution,
    option_count: usize,
    rng: &mut R,
) -> Result<Question, DomainError> {
    let top = distribution.top(option_count);
    let mut tlds = select_options(row, &top);
    tlds.shuffle(rng);

    info!(
        "NEW QUESTION: domain={} category={}",
        row.base_name(),
        row.category()
    );
    info!(
        "Top predictions (class -> score): {}",
        top.iter()
            .map(|o| format!("{}:{:.4}", o.tld, o.score))
            .collect::<Vec<_>>()
            .join(", ")
    );
    info!("Returned options: {:?} | true: {}", tlds, row.true_tld());

    let options = tlds
        .into_iter()
        .map(|tld| {
            let score = distribution.score_of(&tld).unwrap_or(0.0);
            ScoredOption::new(tld, score)
        })
        .collect();

    Question::new(row.base_name(), row.category(), options, row.true_tld())
}

/// Unshuffled option TLDs: the ranked `top` list, with one slot overwritten
/// by the true TLD if it is not already there.
pub fn select_options(row: &GameplayRow, top: &[ScoredOption]) -> Vec<String> {
    let mut tlds: Vec<String> = top.iter().map(|o| o.tld.clone()).collect();

    if !tlds.iter().any(|t| t == row.true_tld()) {
        if tlds.is_empty() {
            tlds.push(row.true_tld().to_string());
        } else {
            let slot = replacement_slot(&row.seed_key(), tlds.len());
            tlds[slot] = row.true_tld().to_string();
        }
    }

    tlds
}

/// Slot in `[0, len)` chosen by a generator seeded from `seed_key`.
///
/// The seed is the SHA-256 digest of the key, so a given key always maps to
/// the same slot for a given `len`. `len` must be non-zero.
pub fn replacement_slot(seed_key: &str, len: usize) -> usize {
    let digest = Sha256::digest(seed_key.as_bytes());
    let mut seed = [0u8; 32];
    seed.copy_from_slice(&digest);
    ChaCha8Rng::from_seed(seed).random_range(0..len)
}
