use tracing::warn;

use crate::math::wcag;
use crate::types::{Palette, Report, ValidationResult, ValidationRule};

/// Look up a role in the palette. A missing role logs a warning and gets the
/// same luminance-0 fallback as an invalid color, so every configured rule
/// still produces a result.
fn resolve<'a>(palette: &'a Palette, role: &str) -> Option<&'a str> {
    let color = palette.get(role).map(String::as_str);
    if color.is_none() {
        warn!(role, "palette role missing, treating luminance as 0");
    }
    color
}

/// Evaluate every rule against the palette, in list order.
///
/// Pure aside from warnings on bad input: identical palette and rules always
/// yield an identical report. Rendering and exit-code decisions belong to the
/// caller.
pub fn evaluate(palette: &Palette, rules: &[ValidationRule]) -> Report {
    let mut results = Vec::with_capacity(rules.len());

    for rule in rules {
        let fg = resolve(palette, &rule.foreground);
        let bg = resolve(palette, &rule.background);

        let l_fg = fg.map_or(0.0, wcag::relative_luminance);
        let l_bg = bg.map_or(0.0, wcag::relative_luminance);

        let ratio_raw = wcag::contrast_ratio_from_luminance(l_fg, l_bg);
        let pass = ratio_raw >= rule.required_ratio;

        results.push(ValidationResult {
            name: rule.name.clone(),
            ratio: (ratio_raw * 100.0).round() / 100.0,
            pass,
            required_ratio: rule.required_ratio,
            fg_hex: fg.map(str::to_string),
            bg_hex: bg.map(str::to_string),
        });
    }

    let overall_pass = results.iter().all(|r| r.pass);
    Report {
        results,
        overall_pass,
    }
}
