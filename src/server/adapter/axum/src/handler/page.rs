/* src/server/adapter/axum/src/handler/page.rs */

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use tracing::warn;
use vitrina_content::{
  ContentError, Locale, ResolvedContent, SeoData, Site, localized, localized_value,
  resolve_component_props,
};
use vitrina_render::{render_component, render_document};

use super::AppState;
use crate::error::AxumError;

pub(super) async fn handle_home(State(state): State<Arc<AppState>>) -> Redirect {
  Redirect::temporary(&format!("/{}", state.site.table().default_locale))
}

pub(super) async fn handle_locale_root(
  State(state): State<Arc<AppState>>,
  Path(locale): Path<String>,
) -> Result<Response, AxumError> {
  serve_page(&state, &locale, "").await
}

pub(super) async fn handle_page(
  State(state): State<Arc<AppState>>,
  Path((locale, slug)): Path<(String, String)>,
) -> Result<Response, AxumError> {
  serve_page(&state, &locale, &slug).await
}

async fn serve_page(state: &AppState, locale: &str, slug: &str) -> Result<Response, AxumError> {
  let parsed = locale.parse::<Locale>();
  let locale = match parsed {
    Ok(locale) if state.site.table().is_supported(locale) => locale,
    _ => {
      warn!(locale, "request with unknown locale");
      return Ok(not_found(state.site.table().default_locale));
    }
  };

  match state.site.resolver().resolve_by_slug(locale, slug).await? {
    Some(resolved) => {
      let html = render_resolved(&state.site, locale, &resolved).await?;
      Ok(Html(html).into_response())
    }
    None => Ok(not_found(locale)),
  }
}

/// Compose the component list, resolve each component's props and render the
/// full document. Unknown component types drop silently inside
/// `render_component`.
async fn render_resolved(
  site: &Site,
  locale: Locale,
  resolved: &ResolvedContent,
) -> Result<String, ContentError> {
  let (components, content_map, seo_map) = match resolved {
    ResolvedContent::Page(page) => {
      (site.composer().final_page_components(page), &page.content, &page.seo)
    }
    ResolvedContent::Item { item, .. } => {
      (site.composer().final_collection_components(item), &item.content, &item.seo)
    }
  };

  let localized_content = localized_value(content_map, locale);

  let mut body = String::from("<main>");
  for component in components.iter() {
    let props = resolve_component_props(site, locale, &localized_content, component).await?;
    if let Some(html) = render_component(&props) {
      body.push_str(&html);
    }
  }
  body.push_str("</main>");

  let seo = localized(seo_map, locale).cloned().unwrap_or_default();
  Ok(render_document(&seo, locale, &body))
}

fn not_found(locale: Locale) -> Response {
  let (title, message) = match locale {
    Locale::En => ("Page not found", "The page you are looking for does not exist."),
    Locale::Lt => ("Puslapis nerastas", "Puslapis, kurio ieškote, neegzistuoja."),
    Locale::Pl => ("Strona nie znaleziona", "Strona, której szukasz, nie istnieje."),
    Locale::Uk => ("Сторінку не знайдено", "Сторінка, яку ви шукаєте, не існує."),
  };
  let seo = SeoData { title: title.to_string(), ..Default::default() };
  let body = format!("<main class=\"not-found\"><h1>{title}</h1><p>{message}</p></main>");
  (StatusCode::NOT_FOUND, Html(render_document(&seo, locale, &body))).into_response()
}

pub(super) async fn handle_sitemap(State(state): State<Arc<AppState>>) -> Response {
  let mut xml =
    String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?><urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">");
  for entry in state.site.table().sitemap_entries(&state.base_url) {
    xml.push_str(&format!(
      "<url><loc>{}</loc><changefreq>{}</changefreq><priority>{:.1}</priority></url>",
      entry.loc, entry.changefreq, entry.priority
    ));
  }
  xml.push_str("</urlset>");
  ([(axum::http::header::CONTENT_TYPE, "application/xml")], xml).into_response()
}
