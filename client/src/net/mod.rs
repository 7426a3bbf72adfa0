//! Networking for the prediction service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the batch request; the wire schema itself lives in the shared
//! `schema` crate so the CLI speaks exactly the same shape.

pub mod api;
