use crate::types::ValidationRule;

/// WCAG AA minimum contrast for normal-size text.
pub const AA_NORMAL_TEXT: f64 = 4.5;

fn rule(name: &str, foreground: &str, background: &str) -> ValidationRule {
    ValidationRule {
        name: name.to_string(),
        foreground: foreground.to_string(),
        background: background.to_string(),
        required_ratio: AA_NORMAL_TEXT,
    }
}

/// The built-in rule set checked before a palette ships.
///
/// Some brand colors are known to miss 4.5:1 against white text; they stay in
/// the list and are reported as failures rather than excluded.
pub fn default_rules() -> Vec<ValidationRule> {
    vec![
        rule("text-primary-on-background", "text-primary", "background"),
        rule("text-secondary-on-background", "text-secondary", "background"),
        rule("text-primary-on-card", "text-primary", "card"),
        rule("text-primary-on-surface", "text-primary", "surface"),
        rule("white-on-primary-brand", "white", "primary-brand"),
        rule("white-on-danger", "white", "danger"),
        rule("white-on-success", "white", "success"),
    ]
}
