//! External JSON representations of stored entities.
//!
//! Each DTO is the flat key/value shape returned by the HTTP API and is built from its
//! database model through a `From` conversion, which is where sensitive columns are left out.

pub mod api;
pub mod favorite;
pub mod person;
pub mod planet;
pub mod user;
