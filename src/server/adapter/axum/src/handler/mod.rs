/* src/server/adapter/axum/src/handler/mod.rs */

mod form;
mod page;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use vitrina_content::Site;

use crate::mailer::Mailer;

pub(crate) struct AppState {
  pub site: Arc<Site>,
  pub mailer: Arc<dyn Mailer>,
  pub base_url: String,
}

pub(crate) fn build_router(site: Arc<Site>, mailer: Arc<dyn Mailer>, base_url: String) -> Router {
  let state = Arc::new(AppState { site, mailer, base_url });
  Router::new()
    .route("/", get(page::handle_home))
    .route("/sitemap.xml", get(page::handle_sitemap))
    .route("/api/form", post(form::handle_form))
    .route("/{locale}", get(page::handle_locale_root))
    .route("/{locale}/{*slug}", get(page::handle_page))
    .with_state(state)
}
