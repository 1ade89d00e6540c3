pub mod engine;
pub mod math;
pub mod report;
pub mod rules;
pub mod types;

pub use engine::evaluate;
pub use rules::default_rules;
pub use types::{Palette, Report, ValidationResult, ValidationRule};
