/* src/server/adapter/axum/src/lib.rs */

mod error;
mod handler;
pub mod mailer;

use std::sync::Arc;

use vitrina_content::Site;

pub use mailer::{FormSubmission, FormType, LogMailer, Mailer, MailerError};

/// Re-export the content core for convenience
pub use vitrina_content;

/// Builder turning a [`Site`] into an axum application.
pub struct SiteApp {
  site: Arc<Site>,
  mailer: Arc<dyn Mailer>,
  base_url: String,
}

impl SiteApp {
  pub fn new(site: Arc<Site>) -> Self {
    Self { site, mailer: Arc::new(LogMailer), base_url: "http://localhost:3000".to_string() }
  }

  /// Wire the email collaborator for form submissions.
  pub fn mailer(mut self, mailer: Arc<dyn Mailer>) -> Self {
    self.mailer = mailer;
    self
  }

  /// Absolute base URL used in sitemap entries.
  pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
    self.base_url = base_url.into();
    self
  }

  pub fn into_router(self) -> axum::Router {
    handler::build_router(self.site, self.mailer, self.base_url)
  }

  pub async fn serve(self, addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    let router = self.into_router();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!("vitrina site running on http://localhost:{}", local_addr.port());
    axum::serve(listener, router).await?;
    Ok(())
  }
}
