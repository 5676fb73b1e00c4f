//! Domain rules shared by the store implementations and the HTTP layer.
//!
//! Nothing in this crate performs I/O: it defines the error type, the id
//! alias, the rating clamp and the per-entity field allow-lists used to turn
//! untyped JSON payloads and query strings into typed field values.

pub mod author;
pub mod error;
pub mod fields;
pub mod quote;
pub mod rating;
pub mod types;
