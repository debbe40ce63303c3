/* src/server/adapter/axum/src/mailer.rs */

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use vitrina_content::Locale;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Which form on the site produced the submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormType {
  Technician,
  Contact,
}

/// A validated form submission handed to the mailer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSubmission {
  pub name: String,
  #[serde(default)]
  pub email: Option<String>,
  #[serde(default)]
  pub phone: Option<String>,
  #[serde(default)]
  pub message: Option<String>,
  pub form_type: FormType,
  pub locale: Locale,
  #[serde(default)]
  pub timestamp: Option<String>,
  /// Honeypot field; humans never fill it.
  #[serde(default)]
  pub website: String,
}

#[derive(Debug, Error)]
pub enum MailerError {
  /// The upstream email API refused the request for sending too fast.
  /// Surfaces to the client as a distinguished `RATE_LIMITED` code.
  #[error("rate limited by email service")]
  RateLimited,
  #[error("email delivery failed: {0}")]
  Send(String),
}

/// External collaborator boundary for form submissions. Retry and templating
/// semantics live on the other side of this trait.
pub trait Mailer: Send + Sync {
  fn send(&self, submission: FormSubmission) -> BoxFuture<'_, Result<(), MailerError>>;
}

/// Mailer that only logs. Useful for local runs and as a safe default.
pub struct LogMailer;

impl Mailer for LogMailer {
  fn send(&self, submission: FormSubmission) -> BoxFuture<'_, Result<(), MailerError>> {
    Box::pin(async move {
      tracing::info!(
        name = %submission.name,
        form_type = ?submission.form_type,
        locale = %submission.locale,
        "form submission (log mailer, nothing sent)"
      );
      Ok(())
    })
  }
}
