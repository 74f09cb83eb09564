//! Server application models.
//!
//! Application state shared with every handler and type aliases for the database models
//! generated in the `entity` crate.

pub mod app;
pub mod db;
