//! Selection logic for single-select choice controls.
//!
//! DESIGN
//! ======
//! A choice control owns no selection state of its own. The parent holds the
//! canonical value and the selected index is derived from it on every render,
//! so there is nothing to re-synchronize when the value changes externally.

#[cfg(test)]
#[path = "choice_test.rs"]
mod choice_test;

/// Index of `value` within `values`.
///
/// A value that is not one of the options selects the first option.
#[must_use]
pub fn selected_index(values: &[&str], value: &str) -> usize {
    values.iter().position(|v| *v == value).unwrap_or(0)
}

/// Text shown for the option at `index`: the parallel label when one exists,
/// otherwise the value itself.
#[must_use]
pub fn option_label<'a>(values: &[&'a str], labels: Option<&[&'a str]>, index: usize) -> &'a str {
    labels
        .and_then(|labels| labels.get(index).copied())
        .or_else(|| values.get(index).copied())
        .unwrap_or_default()
}
