//! Editable list of one to three record forms.
//!
//! ARCHITECTURE
//! ============
//! Owns the record collection signal and is its only writer. Each mutation
//! goes through `RecordListState::apply`; when it changes the collection the
//! resulting batch is published through `on_submit`.

use leptos::prelude::*;
use schema::CveModel;

use crate::components::cve_form::CveForm;
use crate::state::records::{RecordEntry, RecordListEvent, RecordListState};

/// Record forms with add/remove controls.
#[component]
pub fn CveFormList(on_submit: Callback<Vec<CveModel>>) -> impl IntoView {
    let list = RwSignal::new(RecordListState::default());

    let dispatch = move |event: RecordListEvent| {
        if let Some(Some(batch)) = list.try_update(|s| s.apply(event)) {
            on_submit.run(batch);
        }
    };

    // Never render an empty list.
    dispatch(RecordListEvent::Seed);

    let can_add = move || list.with(RecordListState::can_add);
    let can_remove = move || list.with(RecordListState::can_remove);

    view! {
        <div class="cve-form-list">
            <For
                each=move || list.with(|s| s.entries().to_vec())
                key=|entry: &RecordEntry| entry.id
                children=move |entry: RecordEntry| {
                    let id = entry.id;
                    let index_of = move || list.with_untracked(|s| s.position(id));
                    let on_record = Callback::new(move |record: CveModel| {
                        if let Some(index) = index_of() {
                            dispatch(RecordListEvent::Update(index, record));
                        }
                    });
                    let on_remove = move |_| {
                        if let Some(index) = index_of() {
                            dispatch(RecordListEvent::Remove(index));
                        }
                    };
                    let is_last = move || list.with(|s| s.position(id).is_some_and(|i| i + 1 == s.len()));
                    view! {
                        <div class="cve-form-list__entry">
                            <CveForm initial=entry.record on_submit=on_record/>
                            <Show when=can_remove>
                                <button type="button" class="button" on:click=on_remove>
                                    "Remove this CVE (-)"
                                </button>
                            </Show>
                            <Show when=move || !is_last()>
                                <hr class="cve-form-list__separator"/>
                            </Show>
                        </div>
                    }
                }
            />
            <Show when=can_add>
                <div class="cve-form-list__actions">
                    <button type="button" class="button" on:click=move |_| dispatch(RecordListEvent::Add)>
                        "Add another CVE (+)"
                    </button>
                </div>
            </Show>
        </div>
    }
}
