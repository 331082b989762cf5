pub mod records;

pub use records::{BatchStats, NormalizedRecord};
