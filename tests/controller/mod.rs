//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their extractors to verify status codes and response
//! bodies for the catalog, user and favorite endpoints.

mod person;
mod user;

use holocron_test_utils::prelude::*;

use crate::util::body_json;
