//! Display card for one prediction.

use leptos::prelude::*;
use schema::CvePrediction;
use schema::render::summarize;

use crate::util::locale::format_score;

/// Headline, score, and the echoed record's values (de-emphasized).
#[component]
pub fn CvePredictionRow(prediction: CvePrediction) -> impl IntoView {
    let summary = summarize(&prediction);
    let attributes = summary
        .attributes
        .into_iter()
        .map(|value| view! { <span>{value}</span> })
        .collect_view();

    view! {
        <div class="prediction-row">
            <p class="prediction-row__headline">{summary.headline}</p>
            <p class="prediction-row__score">"Score: " {format_score(summary.score)}</p>
            <div class="prediction-row__inputs">{attributes}</div>
        </div>
    }
}
