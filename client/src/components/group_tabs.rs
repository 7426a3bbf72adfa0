//! Single-select tab group over a fixed, ordered option set.
//!
//! DESIGN
//! ======
//! One-directional binding: the parent passes the current value and a change
//! callback. The highlighted tab is derived from that value on every render,
//! so the control never holds a selection of its own.

use leptos::prelude::*;

use crate::state::choice::{option_label, selected_index};

/// Row of tabs, one per option. Clicking a tab reports its value.
#[component]
pub fn GroupTabs(
    values: &'static [&'static str],
    #[prop(optional)] labels: Option<&'static [&'static str]>,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<&'static str>,
) -> impl IntoView {
    let selected = move || value.with(|v| selected_index(values, v));

    let tabs = values
        .iter()
        .copied()
        .enumerate()
        .map(|(index, option)| {
            let is_selected = move || selected() == index;
            view! {
                <button
                    type="button"
                    role="tab"
                    class="group-tabs__tab"
                    class:group-tabs__tab--selected=is_selected
                    aria-selected=move || if is_selected() { "true" } else { "false" }
                    on:click=move |_| on_change.run(option)
                >
                    {option_label(values, labels, index)}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="group-tabs" role="tablist">
            {tabs}
        </div>
    }
}
