//! Tests through the full router.
//!
//! Requests are sent with `tower::ServiceExt::oneshot`, covering routing, extractor
//! rejections and multi-step scenarios across endpoints.

mod rejections;
mod scenarios;

use axum::{
    body::Body,
    http::{header, Method, Request},
};
use satdeck_test_utils::prelude::*;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::util::{body_json, TestContextExt};

/// Builds a request with an optional JSON body
fn request(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);

    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Sends a request through a fresh router and returns status and JSON body
async fn send(test: &TestContext, req: Request<Body>) -> (u16, Value) {
    let resp = test.app().oneshot(req).await.unwrap();
    let status = resp.status().as_u16();

    (status, body_json(resp).await)
}
