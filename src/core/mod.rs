pub mod analysis;
pub mod disclosure;
pub mod error;
pub mod numbers;

pub use analysis::{Analyzer, FactorialOutcome, Report};
pub use error::NumberError;
