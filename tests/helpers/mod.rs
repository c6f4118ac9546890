//! Test helpers module
//!
//! Shared setup for the integration suites: service contexts over the memory
//! and file backends, generated form data, and an instrumented store.

#![allow(dead_code)]

pub mod counting_store;
pub mod test_context;
pub mod test_data;

pub use counting_store::*;
pub use test_context::*;
pub use test_data::*;
