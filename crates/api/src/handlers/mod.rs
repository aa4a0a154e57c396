//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers validate input, delegate to the corresponding repository in
//! `fabtrack_db`, and map errors via [`crate::error::AppError`].

pub mod file;
pub mod ledger;
pub mod project;
pub mod task;
