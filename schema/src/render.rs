//! Pure prediction rendering shared by the web client and the CLI.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::CvePrediction;

/// Display-ready view of one prediction.
#[derive(Clone, Debug, PartialEq)]
pub struct PredictionSummary {
    pub headline: &'static str,
    pub score: f64,
    /// Echoed record values in natural attribute order.
    pub attributes: [&'static str; 8],
}

/// Map a prediction to its display text.
#[must_use]
pub fn summarize(prediction: &CvePrediction) -> PredictionSummary {
    PredictionSummary {
        headline: prediction.label.headline(),
        score: prediction.score,
        attributes: prediction.input_model.values(),
    }
}

/// Format a score the way an en-US `Number.toLocaleString()` does: grouped
/// integer digits and at most three fraction digits with trailing zeros
/// dropped. Negative values keep their sign even when they round to zero.
#[must_use]
pub fn format_score(score: f64) -> String {
    if score.is_nan() {
        return "NaN".to_owned();
    }
    if score.is_infinite() {
        return if score > 0.0 { "∞".to_owned() } else { "-∞".to_owned() };
    }

    let fixed = format!("{:.3}", score.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    if score.is_sign_negative() {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// One plain-text line per prediction: headline, score, then the echoed
/// attribute values.
#[must_use]
pub fn render_plain(predictions: &[CvePrediction]) -> String {
    predictions
        .iter()
        .map(|prediction| {
            let summary = summarize(prediction);
            format!(
                "{}\n  Score: {}\n  {}",
                summary.headline,
                format_score(summary.score),
                summary.attributes.join(" ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
