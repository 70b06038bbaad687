//! Request and response bodies for the JSON API. One explicit struct per
//! operation; deserialization happens at the boundary, before the core
//! sees the request.

use serde::{Deserialize, Serialize};

/// Create presentation request.
#[derive(Deserialize, Debug)]
pub struct PresentationRequest {
    pub title: String,
    pub authors: Vec<String>,
}

/// Author replacement request. The new list replaces the old one
/// entirely; there is no merge.
#[derive(Deserialize, Debug)]
pub struct AuthorsRequest {
    pub authors: Vec<String>,
}

/// Slide create/replace request.
#[derive(Deserialize, Debug)]
pub struct SlideRequest {
    pub topic: String,
    pub body: String,
}

/// API error response.
#[derive(Serialize, Debug)]
pub struct ApiErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
