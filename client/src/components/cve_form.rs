//! Form binding one record's attributes to a set of tab groups.
//!
//! Every valid change is a submission: the full record is handed to
//! `on_submit` right away. Invalid values are dropped here and only logged.

use leptos::prelude::*;
use schema::{Attribute, CveModel, ValidationError};

use crate::components::group_tabs::GroupTabs;
use crate::state::form::RecordFormState;

/// Editor for a single record.
#[component]
pub fn CveForm(#[prop(optional)] initial: Option<CveModel>, on_submit: Callback<CveModel>) -> impl IntoView {
    let form = RwSignal::new(RecordFormState::new(initial));

    let fields = Attribute::FORM_ORDER
        .into_iter()
        .map(|attribute| {
            let value = Signal::derive(move || form.with(|f| f.value(attribute).to_owned()));
            let on_change = Callback::new(move |next: &'static str| {
                match form.try_update(|f| f.change(attribute, next)) {
                    Some(Ok(record)) => on_submit.run(record),
                    Some(Err(err)) => report_invalid(&err),
                    None => {}
                }
            });
            view! {
                <div class=field_class(attribute)>
                    <p class="cve-form__label">{attribute.label()}</p>
                    <GroupTabs values=attribute.values() value=value on_change=on_change/>
                </div>
            }
        })
        .collect_view();

    view! {
        <form class="cve-form" on:submit=|ev: leptos::ev::SubmitEvent| ev.prevent_default()>
            {fields}
        </form>
    }
}

/// Attack vector has four options and gets a wider cell.
fn field_class(attribute: Attribute) -> &'static str {
    match attribute {
        Attribute::AttackVector => "cve-form__field cve-form__field--wide",
        _ => "cve-form__field",
    }
}

fn report_invalid(err: &ValidationError) {
    #[cfg(feature = "hydrate")]
    log::debug!("record not submitted: {err}");
    #[cfg(not(feature = "hydrate"))]
    let _ = err;
}
