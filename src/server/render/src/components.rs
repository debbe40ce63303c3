/* src/server/render/src/components.rs */

// One render function per registered component kind. All of these are
// presentational: they trust the shaped props from vitrina-content and turn
// missing fields into empty strings, never errors.

use serde_json::Value;

use crate::helpers::{attr, escape_html, items, stringify, text};

fn translations(data: &Value) -> &Value {
  data.get("translations").unwrap_or(&Value::Null)
}

/// Section wrapper shared by the card-style components.
fn section(class: &str, title: &str, inner: &str) -> String {
  let heading = if title.is_empty() { String::new() } else { format!("<h2>{title}</h2>") };
  format!("<section class=\"{class}\">{heading}{inner}</section>")
}

/// Title/description card grid used by several listing components.
fn card_grid(class: &str, t: &Value, item_key: &str) -> String {
  let cards: String = items(t, item_key)
    .iter()
    .map(|item| {
      format!(
        "<article class=\"card\"><h3>{}</h3><p>{}</p></article>",
        text(item, "title"),
        text(item, "description")
      )
    })
    .collect();
  section(class, &text(t, "title"), &format!("<div class=\"cards\">{cards}</div>"))
}

pub(crate) fn page_header(data: &Value) -> String {
  let image = data.get("image").map(stringify).unwrap_or_default();
  let style = if image.is_empty() {
    String::new()
  } else {
    format!(" style=\"background-image:url('{}')\"", escape_html(&image))
  };
  format!(
    "<header class=\"page-header\"{style}><h1>{}</h1><p>{}</p></header>",
    text(data, "title"),
    text(data, "subtitle")
  )
}

pub(crate) fn hero(data: &Value) -> String {
  let t = translations(data);
  format!(
    "<section class=\"hero\"><h1>{}</h1><p>{}</p><a class=\"cta\" href=\"{}\">{}</a></section>",
    text(t, "title"),
    text(t, "subtitle"),
    attr(t, "ctaHref"),
    text(t, "ctaLabel")
  )
}

pub(crate) fn content(data: &Value) -> String {
  let body = data.get("body").unwrap_or(&Value::Null);
  let inner = match body {
    Value::String(s) => format!("<p>{}</p>", escape_html(s)),
    Value::Array(blocks) => blocks
      .iter()
      .map(|block| {
        let heading = text(block, "heading");
        let head = if heading.is_empty() { String::new() } else { format!("<h2>{heading}</h2>") };
        format!("{head}<p>{}</p>", text(block, "text"))
      })
      .collect(),
    other => format!("<p>{}</p>", escape_html(&stringify(other))),
  };
  format!("<section class=\"content\">{inner}</section>")
}

pub(crate) fn rich_text(data: &Value) -> String {
  // Authored HTML from the content store is trusted; rendered unescaped.
  let t = translations(data);
  let html = t.get("body").map(stringify).unwrap_or_default();
  format!("<section class=\"rich-text\">{html}</section>")
}

pub(crate) fn service_cards(data: &Value) -> String {
  card_grid("service-cards", translations(data), "services")
}

pub(crate) fn services_listing(data: &Value) -> String {
  card_grid("services-listing", translations(data), "services")
}

pub(crate) fn benefits_grid(data: &Value) -> String {
  card_grid("benefits-grid", translations(data), "benefits")
}

pub(crate) fn how_we_work(data: &Value) -> String {
  let t = translations(data);
  let steps: String = items(t, "steps")
    .iter()
    .enumerate()
    .map(|(i, step)| {
      format!(
        "<li><span class=\"step-number\">{}</span><h3>{}</h3><p>{}</p></li>",
        i + 1,
        text(step, "title"),
        text(step, "description")
      )
    })
    .collect();
  section("how-we-work", &text(t, "title"), &format!("<ol class=\"steps\">{steps}</ol>"))
}

pub(crate) fn testimonials(data: &Value) -> String {
  let t = translations(data);
  let quotes: String = items(t, "items")
    .iter()
    .map(|item| {
      format!(
        "<blockquote><p>{}</p><cite>{}</cite></blockquote>",
        text(item, "quote"),
        text(item, "author")
      )
    })
    .collect();
  section("testimonials", &text(t, "title"), &quotes)
}

pub(crate) fn faq(data: &Value) -> String {
  let t = translations(data);
  let entries: String = items(t, "items")
    .iter()
    .map(|item| {
      format!(
        "<details><summary>{}</summary><p>{}</p></details>",
        text(item, "q"),
        text(item, "a")
      )
    })
    .collect();
  section("faq", &text(t, "title"), &entries)
}

fn cta_block(class: &str, data: &Value) -> String {
  let t = translations(data);
  format!(
    "<section class=\"{class}\"><h2>{}</h2><p>{}</p><a class=\"cta\" href=\"{}\">{}</a></section>",
    text(t, "title"),
    text(t, "text"),
    attr(t, "ctaHref"),
    text(t, "ctaLabel")
  )
}

pub(crate) fn call_to_action(data: &Value) -> String {
  cta_block("call-to-action", data)
}

pub(crate) fn contact_cta(data: &Value) -> String {
  cta_block("contact-cta", data)
}

pub(crate) fn partners_strip(data: &Value) -> String {
  let t = translations(data);
  let logos: String = items(t, "partners")
    .iter()
    .map(|p| format!("<img src=\"{}\" alt=\"{}\">", attr(p, "logo"), attr(p, "name")))
    .collect();
  section("partners-strip", &text(t, "title"), &logos)
}

fn article_cards(articles: &[Value]) -> String {
  articles
    .iter()
    .map(|a| {
      format!(
        "<article class=\"news-card\"><img src=\"{}\" alt=\"\"><h3><a href=\"{}\">{}</a></h3><p>{}</p><time>{}</time></article>",
        attr(a, "image"),
        attr(a, "href"),
        text(a, "title"),
        text(a, "excerpt"),
        text(a, "publishDate")
      )
    })
    .collect()
}

pub(crate) fn news_teaser(data: &Value) -> String {
  let t = translations(data);
  let cards = article_cards(items(t, "articles"));
  section("news-teaser", &text(t, "title"), &cards)
}

pub(crate) fn news_listing(data: &Value) -> String {
  let cards = article_cards(items(data, "articles"));
  section("news-listing", "", &cards)
}

pub(crate) fn contact_form(data: &Value) -> String {
  let t = translations(data);
  let locale = text(data, "locale");
  format!(
    concat!(
      "<section class=\"contact-form\"><h2>{}</h2>",
      "<form method=\"post\" action=\"/api/form\">",
      "<input type=\"hidden\" name=\"locale\" value=\"{}\">",
      "<input type=\"text\" name=\"website\" class=\"hp-field\" tabindex=\"-1\" autocomplete=\"off\">",
      "<label>{}<input type=\"text\" name=\"name\" required></label>",
      "<label>{}<input type=\"email\" name=\"email\"></label>",
      "<label>{}<input type=\"tel\" name=\"phone\"></label>",
      "<label>{}<textarea name=\"message\"></textarea></label>",
      "<button type=\"submit\">{}</button>",
      "</form></section>"
    ),
    text(t, "title"),
    locale,
    text(t, "nameLabel"),
    text(t, "emailLabel"),
    text(t, "phoneLabel"),
    text(t, "messageLabel"),
    text(t, "submitLabel")
  )
}

pub(crate) fn privacy_policy(data: &Value) -> String {
  let sections: String = items(data, "sections")
    .iter()
    .map(|s| format!("<h2>{}</h2><p>{}</p>", text(s, "heading"), text(s, "text")))
    .collect();
  let updated = text(data, "updatedAt");
  let footer =
    if updated.is_empty() { String::new() } else { format!("<p class=\"updated\">{updated}</p>") };
  format!("<section class=\"privacy-policy\">{sections}{footer}</section>")
}

pub(crate) fn gallery(data: &Value) -> String {
  let t = translations(data);
  let images: String = items(t, "images")
    .iter()
    .map(|img| format!("<figure><img src=\"{}\" alt=\"{}\"></figure>", attr(img, "src"), attr(img, "alt")))
    .collect();
  section("gallery", &text(t, "title"), &images)
}

pub(crate) fn price_table(data: &Value) -> String {
  let t = translations(data);
  let rows: String = items(t, "rows")
    .iter()
    .map(|row| {
      format!("<tr><td>{}</td><td>{}</td></tr>", text(row, "service"), text(row, "price"))
    })
    .collect();
  section("price-table", &text(t, "title"), &format!("<table>{rows}</table>"))
}

pub(crate) fn team_members(data: &Value) -> String {
  let t = translations(data);
  let members: String = items(t, "members")
    .iter()
    .map(|m| {
      format!(
        "<article class=\"member\"><img src=\"{}\" alt=\"{}\"><h3>{}</h3><p>{}</p></article>",
        attr(m, "photo"),
        attr(m, "name"),
        text(m, "name"),
        text(m, "role")
      )
    })
    .collect();
  section("team-members", &text(t, "title"), &members)
}

pub(crate) fn stats_bar(data: &Value) -> String {
  let t = translations(data);
  let stats: String = items(t, "stats")
    .iter()
    .map(|s| {
      format!(
        "<div class=\"stat\"><span class=\"value\">{}</span><span class=\"label\">{}</span></div>",
        text(s, "value"),
        text(s, "label")
      )
    })
    .collect();
  section("stats-bar", "", &stats)
}

pub(crate) fn map_embed(data: &Value) -> String {
  let t = translations(data);
  format!(
    "<section class=\"map-embed\"><iframe src=\"{}\" loading=\"lazy\"></iframe></section>",
    attr(t, "embedUrl")
  )
}

pub(crate) fn breadcrumb_trail(data: &Value) -> String {
  let t = translations(data);
  let crumbs: String = items(t, "crumbs")
    .iter()
    .map(|c| format!("<li><a href=\"{}\">{}</a></li>", attr(c, "href"), text(c, "label")))
    .collect();
  format!("<nav class=\"breadcrumbs\"><ol>{crumbs}</ol></nav>")
}

pub(crate) fn image_banner(data: &Value) -> String {
  let t = translations(data);
  format!(
    "<section class=\"image-banner\"><img src=\"{}\" alt=\"{}\"></section>",
    attr(t, "src"),
    attr(t, "alt")
  )
}

pub(crate) fn social_links(data: &Value) -> String {
  let t = translations(data);
  let links: String = items(t, "links")
    .iter()
    .map(|l| format!("<a href=\"{}\" rel=\"noopener\">{}</a>", attr(l, "href"), text(l, "label")))
    .collect();
  format!("<nav class=\"social-links\">{links}</nav>")
}
