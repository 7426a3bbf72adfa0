//! Client-side state machines.
//!
//! DESIGN
//! ======
//! State is split by concern (`choice`, `form`, `records`, `predict`) and kept
//! free of Leptos types so each machine is testable on the host. Components
//! wrap these in `RwSignal`s and mutate them only through their methods.

pub mod choice;
pub mod form;
pub mod predict;
pub mod records;
