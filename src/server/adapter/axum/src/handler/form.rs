/* src/server/adapter/axum/src/handler/form.rs */

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::warn;

use super::AppState;
use crate::mailer::{FormSubmission, MailerError};

#[derive(Debug, Serialize, PartialEq)]
pub struct FieldError {
  pub field: &'static str,
  pub message: &'static str,
}

#[derive(Serialize)]
struct FormResponse {
  success: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  error: Option<&'static str>,
  #[serde(skip_serializing_if = "Option::is_none")]
  fields: Option<Vec<FieldError>>,
}

impl FormResponse {
  fn ok() -> Self {
    Self { success: true, error: None, fields: None }
  }

  fn failed(error: &'static str, fields: Option<Vec<FieldError>>) -> Self {
    Self { success: false, error: Some(error), fields }
  }
}

/// Field-level validation. The email API behind the mailer gets only
/// submissions that pass this.
pub(crate) fn validate(submission: &FormSubmission) -> Vec<FieldError> {
  let mut errors = Vec::new();

  if submission.name.trim().is_empty() {
    errors.push(FieldError { field: "name", message: "name is required" });
  }
  if let Some(email) = submission.email.as_deref()
    && !email.is_empty()
    && !looks_like_email(email)
  {
    errors.push(FieldError { field: "email", message: "invalid email address" });
  }
  let has_email = submission.email.as_deref().is_some_and(|e| !e.trim().is_empty());
  let has_phone = submission.phone.as_deref().is_some_and(|p| !p.trim().is_empty());
  if !has_email && !has_phone {
    errors.push(FieldError { field: "email", message: "email or phone is required" });
  }
  if submission.message.as_deref().is_some_and(|m| m.len() > 5000) {
    errors.push(FieldError { field: "message", message: "message too long" });
  }

  errors
}

fn looks_like_email(email: &str) -> bool {
  let Some((local, domain)) = email.split_once('@') else {
    return false;
  };
  !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

pub(super) async fn handle_form(
  State(state): State<Arc<AppState>>,
  axum::Json(submission): axum::Json<FormSubmission>,
) -> Response {
  // Bots fill the honeypot; answer success and drop the submission so they
  // get no signal to iterate on.
  if !submission.website.trim().is_empty() {
    warn!(form_type = ?submission.form_type, "honeypot tripped, dropping submission");
    return axum::Json(FormResponse::ok()).into_response();
  }

  let errors = validate(&submission);
  if !errors.is_empty() {
    return (
      StatusCode::UNPROCESSABLE_ENTITY,
      axum::Json(FormResponse::failed("VALIDATION", Some(errors))),
    )
      .into_response();
  }

  match state.mailer.send(submission).await {
    Ok(()) => axum::Json(FormResponse::ok()).into_response(),
    Err(MailerError::RateLimited) => (
      StatusCode::TOO_MANY_REQUESTS,
      axum::Json(FormResponse::failed("RATE_LIMITED", None)),
    )
      .into_response(),
    Err(MailerError::Send(reason)) => {
      warn!(reason = %reason, "mailer failed to deliver submission");
      (StatusCode::BAD_GATEWAY, axum::Json(FormResponse::failed("SEND_FAILED", None)))
        .into_response()
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::mailer::FormType;
  use vitrina_content::Locale;

  fn submission() -> FormSubmission {
    FormSubmission {
      name: "Jonas".into(),
      email: Some("jonas@example.com".into()),
      phone: None,
      message: Some("Broken window".into()),
      form_type: FormType::Technician,
      locale: Locale::Lt,
      timestamp: None,
      website: String::new(),
    }
  }

  #[test]
  fn valid_submission_passes() {
    assert!(validate(&submission()).is_empty());
  }

  #[test]
  fn empty_name_is_a_field_error() {
    let mut s = submission();
    s.name = "  ".into();
    let errors = validate(&s);
    assert!(errors.iter().any(|e| e.field == "name"));
  }

  #[test]
  fn needs_email_or_phone() {
    let mut s = submission();
    s.email = None;
    assert!(!validate(&s).is_empty());
    s.phone = Some("+37060000000".into());
    assert!(validate(&s).is_empty());
  }

  #[test]
  fn bad_email_is_rejected() {
    let mut s = submission();
    s.email = Some("not-an-email".into());
    let errors = validate(&s);
    assert!(errors.iter().any(|e| e.field == "email"));
  }
}
