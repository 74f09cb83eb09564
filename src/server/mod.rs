//! Server application core modules.
//!
//! HTTP routing, request handlers, services and repositories for the Holocron API, along
//! with configuration loading and database startup.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
