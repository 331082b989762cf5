pub mod constants;
pub mod settings;

pub use settings::{CliConfig, OutputFormat};
