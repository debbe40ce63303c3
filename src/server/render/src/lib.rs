/* src/server/render/src/lib.rs */

mod components;
mod helpers;

use tracing::warn;
use vitrina_content::{ComponentKind, ComponentProps, Locale, SeoData};

use crate::helpers::escape_html;

/// Render one composed component to an HTML fragment.
///
/// The registry is closed: every named kind has a render function, and
/// `Unknown` logs a warning and renders nothing. A typo in a content file
/// drops one section, never the page.
pub fn render_component(props: &ComponentProps) -> Option<String> {
  let data = &props.data;
  let html = match &props.kind {
    ComponentKind::PageHeader => components::page_header(data),
    ComponentKind::Hero => components::hero(data),
    ComponentKind::Content => components::content(data),
    ComponentKind::RichText => components::rich_text(data),
    ComponentKind::ServiceCards => components::service_cards(data),
    ComponentKind::ServicesListing => components::services_listing(data),
    ComponentKind::BenefitsGrid => components::benefits_grid(data),
    ComponentKind::HowWeWork => components::how_we_work(data),
    ComponentKind::Testimonials => components::testimonials(data),
    ComponentKind::Faq => components::faq(data),
    ComponentKind::CallToAction => components::call_to_action(data),
    ComponentKind::PartnersStrip => components::partners_strip(data),
    ComponentKind::NewsTeaser => components::news_teaser(data),
    ComponentKind::NewsListing => components::news_listing(data),
    ComponentKind::ContactCta => components::contact_cta(data),
    ComponentKind::ContactForm => components::contact_form(data),
    ComponentKind::PrivacyPolicy => components::privacy_policy(data),
    ComponentKind::Gallery => components::gallery(data),
    ComponentKind::PriceTable => components::price_table(data),
    ComponentKind::TeamMembers => components::team_members(data),
    ComponentKind::StatsBar => components::stats_bar(data),
    ComponentKind::MapEmbed => components::map_embed(data),
    ComponentKind::BreadcrumbTrail => components::breadcrumb_trail(data),
    ComponentKind::ImageBanner => components::image_banner(data),
    ComponentKind::SocialLinks => components::social_links(data),
    ComponentKind::Unknown(name) => {
      warn!(component = %name, "unknown component type, rendering nothing");
      return None;
    }
  };
  Some(html)
}

/// Wrap rendered component fragments in the full HTML document shell with
/// the localized SEO head.
pub fn render_document(seo: &SeoData, locale: Locale, body: &str) -> String {
  let mut head = String::new();
  head.push_str(&format!("<title>{}</title>", escape_html(&seo.title)));
  head.push_str(&format!(
    "<meta name=\"description\" content=\"{}\">",
    escape_html(&seo.description)
  ));
  if !seo.keywords.is_empty() {
    head.push_str(&format!("<meta name=\"keywords\" content=\"{}\">", escape_html(&seo.keywords)));
  }
  head.push_str(&format!("<meta property=\"og:title\" content=\"{}\">", escape_html(&seo.title)));
  if let Some(image) = &seo.og_image {
    head.push_str(&format!("<meta property=\"og:image\" content=\"{}\">", escape_html(image)));
    if let Some(alt) = &seo.og_image_alt {
      head
        .push_str(&format!("<meta property=\"og:image:alt\" content=\"{}\">", escape_html(alt)));
    }
  }
  if let Some(structured) = &seo.structured_data {
    // JSON-LD goes in raw; escape closing tags so the script cannot break out
    let json = structured.to_string().replace("</", "<\\/");
    head.push_str(&format!("<script type=\"application/ld+json\">{json}</script>"));
  }

  format!(
    concat!(
      "<!doctype html><html lang=\"{}\"><head><meta charset=\"utf-8\">",
      "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">{}</head>",
      "<body>{}</body></html>"
    ),
    locale, head, body
  )
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn unknown_component_renders_nothing() {
    let props =
      ComponentProps { kind: ComponentKind::Unknown("MegaBanner".into()), data: json!({}) };
    assert!(render_component(&props).is_none());
  }

  #[test]
  fn every_registered_kind_renders_something() {
    for name in [
      "PageHeader",
      "Hero",
      "Content",
      "RichText",
      "ServiceCards",
      "ServicesListing",
      "BenefitsGrid",
      "HowWeWork",
      "Testimonials",
      "Faq",
      "CallToAction",
      "PartnersStrip",
      "NewsTeaser",
      "NewsListing",
      "ContactCta",
      "ContactForm",
      "PrivacyPolicy",
      "Gallery",
      "PriceTable",
      "TeamMembers",
      "StatsBar",
      "MapEmbed",
      "BreadcrumbTrail",
      "ImageBanner",
      "SocialLinks",
    ] {
      let props = ComponentProps { kind: ComponentKind::parse(name), data: json!({}) };
      assert!(render_component(&props).is_some(), "{name} should render");
    }
  }

  #[test]
  fn faq_renders_escaped_entries() {
    let props = ComponentProps {
      kind: ComponentKind::Faq,
      data: json!({
        "translations": {"title": "FAQ", "items": [{"q": "Broken <glass>?", "a": "We fix it."}]},
        "locale": "en"
      }),
    };
    let html = render_component(&props).expect("render");
    assert!(html.contains("Broken &lt;glass&gt;?"));
    assert!(html.contains("<h2>FAQ</h2>"));
  }

  #[test]
  fn news_listing_links_articles() {
    let props = ComponentProps {
      kind: ComponentKind::NewsListing,
      data: json!({
        "articles": [{"href": "/lt/naujienos/pirmas", "title": "Pirmas", "excerpt": "", "publishDate": "2024-01-01", "image": "/img/a.webp"}],
        "locale": "lt"
      }),
    };
    let html = render_component(&props).expect("render");
    assert!(html.contains("href=\"/lt/naujienos/pirmas\""));
    assert!(html.contains("Pirmas"));
  }

  #[test]
  fn document_shell_carries_localized_seo() {
    let seo = SeoData {
      title: "Langų remontas".into(),
      description: "Taisome \"viską\"".into(),
      keywords: "langai".into(),
      og_image: Some("/img/og.webp".into()),
      og_image_alt: Some("Langas".into()),
      structured_data: Some(json!({"@type": "LocalBusiness"})),
    };
    let html = render_document(&seo, Locale::Lt, "<main></main>");
    assert!(html.starts_with("<!doctype html><html lang=\"lt\">"));
    assert!(html.contains("<title>Langų remontas</title>"));
    assert!(html.contains("content=\"Taisome &quot;viską&quot;\""));
    assert!(html.contains("application/ld+json"));
    assert!(html.contains("<main></main>"));
  }
}
