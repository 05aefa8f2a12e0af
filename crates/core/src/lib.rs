//! Domain logic for the bike catalog service.
//!
//! Pure types and functions only — no database or HTTP dependencies. The
//! compatibility table and the validation engine live here so both the API
//! layer and any future consumer share one source of truth.

pub mod catalog;
pub mod error;
pub mod types;
pub mod validation;
