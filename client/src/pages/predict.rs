//! Prediction page: record editors on the left, batch results on the right.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form list publishes the whole batch on every change. Each publication
//! is handed to the predictor state, which decides whether a request is
//! needed; the request runs in a spawned task and its response is applied
//! only if no newer batch was issued meanwhile.

#[cfg(test)]
#[path = "predict_test.rs"]
mod predict_test;

use leptos::prelude::*;
use schema::{CveModel, CvePrediction};

use crate::components::cve_form_list::CveFormList;
use crate::components::prediction_row::CvePredictionRow;
use crate::state::predict::{PredictState, PredictTicket};

/// Batch prediction page.
#[component]
pub fn PredictPage() -> impl IntoView {
    let predict = RwSignal::new(PredictState::default());

    let on_batch = Callback::new(move |batch: Vec<CveModel>| {
        let ticket = predict.try_update(|p| p.begin(batch)).flatten();
        run_prediction(predict, ticket);
    });
    let on_retry = move |_| {
        let ticket = predict.try_update(PredictState::retry).flatten();
        run_prediction(predict, ticket);
    };

    let predictions = move || predict.with(|p| p.data().map(<[CvePrediction]>::to_vec).unwrap_or_default());
    let error = move || predict.with(|p| p.error().map(failure_message));

    view! {
        <div class="predict-page">
            <div class="predict-page__forms">
                <CveFormList on_submit=on_batch/>
            </div>
            <div class="predict-page__divider"></div>
            <div class="predict-page__results">
                <Show when=move || predict.with(PredictState::is_loading)>
                    <div class="predict-page__loading">
                        <span class="spinner" aria-label="Loading"></span>
                    </div>
                </Show>
                <Show when=move || error().is_some()>
                    <div class="predict-page__error">
                        <p>{move || error().unwrap_or_default()}</p>
                        <button type="button" class="button" on:click=on_retry>
                            "Retry"
                        </button>
                    </div>
                </Show>
                <Show when=move || predict.with(|p| p.data().is_some())>
                    {move || {
                        let rows = predictions();
                        let count = rows.len();
                        rows.into_iter()
                            .enumerate()
                            .map(|(index, prediction)| {
                                view! {
                                    <div class="predict-page__row">
                                        <CvePredictionRow prediction=prediction/>
                                        <Show when=move || has_separator(index, count)>
                                            <hr class="predict-page__separator"/>
                                        </Show>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </Show>
            </div>
        </div>
    }
}

/// Issue the request for `ticket`, if any, and feed the response back.
fn run_prediction(predict: RwSignal<PredictState>, ticket: Option<PredictTicket>) {
    let Some(ticket) = ticket else {
        return;
    };
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let outcome = crate::net::api::predict(ticket.batch()).await;
        if let Err(e) = &outcome {
            log::warn!("prediction request {} failed: {e}", ticket.generation());
        }
        let applied = predict.try_update(|p| p.resolve(&ticket, outcome)).unwrap_or(false);
        if !applied {
            log::debug!("dropped superseded prediction response {}", ticket.generation());
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (predict, ticket);
}

fn failure_message(error: &str) -> String {
    format!("Prediction failed: {error}")
}

/// Rows are separated by a rule, except after the last one.
fn has_separator(index: usize, count: usize) -> bool {
    index + 1 < count
}
