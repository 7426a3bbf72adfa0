//! Locale-aware number formatting for prediction scores.
//!
//! In the browser the score goes through `Number.prototype.toLocaleString`
//! with the navigator's language. Elsewhere (SSR, tests) the shared en-US
//! formatter from `schema::render` is used so markup stays deterministic.

#[cfg(test)]
#[path = "locale_test.rs"]
mod locale_test;

/// Format a score for display.
pub fn format_score(score: f64) -> String {
    #[cfg(feature = "hydrate")]
    {
        let language = web_sys::window()
            .and_then(|w| w.navigator().language())
            .unwrap_or_else(|| "en-US".to_owned());
        let formatted = js_sys::Number::from(score).to_locale_string(&language);
        formatted.as_string().unwrap_or_else(|| schema::render::format_score(score))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        schema::render::format_score(score)
    }
}
