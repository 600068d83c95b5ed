//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their extractors, verifying status codes and the
//! response envelope for each endpoint.

mod group;
mod satellite;

use satdeck_test_utils::prelude::*;

use crate::util::{body_json, TestContextExt};
