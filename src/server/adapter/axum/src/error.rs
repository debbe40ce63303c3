/* src/server/adapter/axum/src/error.rs */

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use tracing::error;
use vitrina_content::ContentError;

/// Wrapper so `ContentError` can flow out of handlers with `?`.
///
/// Content failures reaching this boundary are server faults (unreadable or
/// malformed documents); not-found outcomes never travel as errors.
pub struct AxumError(pub ContentError);

impl From<ContentError> for AxumError {
  fn from(err: ContentError) -> Self {
    Self(err)
  }
}

impl IntoResponse for AxumError {
  fn into_response(self) -> Response {
    error!(error = %self.0, "content error while serving request");
    (
      StatusCode::INTERNAL_SERVER_ERROR,
      Html("<!doctype html><html><body><h1>Something went wrong</h1></body></html>".to_string()),
    )
      .into_response()
  }
}
