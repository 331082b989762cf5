// Library modules for integration tests
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod text_processing;

pub use error::{NormalizeError, Result};
pub use text_processing::normalization::normalize;
pub use text_processing::numbers::spell;
