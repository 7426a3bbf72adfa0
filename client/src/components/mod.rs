//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the record editors and prediction results; all state
//! transitions are delegated to `crate::state`.

pub mod cve_form;
pub mod cve_form_list;
pub mod group_tabs;
pub mod prediction_row;
