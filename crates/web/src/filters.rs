//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Returns the content hash for main.css.
///
/// The hash is computed at build time from the CSS file content.
///
/// Usage in templates: `{{ ""|css_hash }}`
#[askama::filter_fn]
pub fn css_hash(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<&'static str> {
    Ok(env!("CSS_HASH"))
}

/// Formats a weight in kilograms with one decimal place.
///
/// Usage in templates: `{{ order.weight|kg }}` renders `4.5 kg`.
#[askama::filter_fn]
pub fn kg(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(format_kg(&value.to_string()))
}

/// Shared formatting behind the `kg` filter.
fn format_kg(raw: &str) -> String {
    raw.parse::<f64>()
        .map_or_else(|_| format!("{raw} kg"), |w| format!("{w:.1} kg"))
}
