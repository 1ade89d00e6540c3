use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Mapping of semantic role name (e.g. "background", "text-primary") to a
/// `#RRGGBB` hex color. Loaded once per run and treated as read-only by the
/// engine; nothing mutates it after deserialization.
pub type Palette = HashMap<String, String>;

/// A single contrast requirement: foreground role on background role must
/// reach `required_ratio`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationRule {
    pub name: String,
    pub foreground: String,
    pub background: String,
    pub required_ratio: f64,
}

/// Outcome of evaluating one rule.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResult {
    pub name: String,
    /// Contrast ratio rounded to 2 decimal places. The pass flag is computed
    /// from the full-precision value before rounding.
    pub ratio: f64,
    pub pass: bool,
    pub required_ratio: f64,
    /// Resolved foreground color; `None` when the role was missing from the
    /// palette. An invalid literal is carried through as given.
    pub fg_hex: Option<String>,
    /// Resolved background color; `None` when the role was missing.
    pub bg_hex: Option<String>,
}

/// One validation run: results in rule order plus the aggregate flag.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub results: Vec<ValidationResult>,
    /// True iff every result passed. Vacuously true for an empty rule list.
    pub overall_pass: bool,
}
