//! Application-level configuration.
//!
//! - [`GameParams`]: option and prediction counts used by the use cases

pub mod game_params;

pub use game_params::GameParams;
