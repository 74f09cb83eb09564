//! Utilities shared by the controllers.

pub mod current_user;
