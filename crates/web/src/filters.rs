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

/// Percent-encode a value for use inside a query string.
///
/// Usage in templates: `{{ category|query_encode }}`
#[askama::filter_fn]
pub fn query_encode(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(urlencoding::encode(&value.to_string()).into_owned())
}
