/* src/server/content/src/kind.rs */

use std::fmt;

/// Closed registry of renderable component kinds.
///
/// Content documents name components with free-form strings; parsing is
/// case-insensitive and anything outside the registry becomes
/// [`ComponentKind::Unknown`], which renders nothing (with a warning) rather
/// than failing the page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ComponentKind {
  PageHeader,
  Hero,
  Content,
  RichText,
  ServiceCards,
  ServicesListing,
  BenefitsGrid,
  HowWeWork,
  Testimonials,
  Faq,
  CallToAction,
  PartnersStrip,
  NewsTeaser,
  NewsListing,
  ContactCta,
  ContactForm,
  PrivacyPolicy,
  Gallery,
  PriceTable,
  TeamMembers,
  StatsBar,
  MapEmbed,
  BreadcrumbTrail,
  ImageBanner,
  SocialLinks,
  Unknown(String),
}

const REGISTRY: &[(&str, ComponentKind)] = &[
  ("pageheader", ComponentKind::PageHeader),
  ("hero", ComponentKind::Hero),
  ("content", ComponentKind::Content),
  ("richtext", ComponentKind::RichText),
  ("servicecards", ComponentKind::ServiceCards),
  ("serviceslisting", ComponentKind::ServicesListing),
  ("benefitsgrid", ComponentKind::BenefitsGrid),
  ("howwework", ComponentKind::HowWeWork),
  ("testimonials", ComponentKind::Testimonials),
  ("faq", ComponentKind::Faq),
  ("calltoaction", ComponentKind::CallToAction),
  ("partnersstrip", ComponentKind::PartnersStrip),
  ("newsteaser", ComponentKind::NewsTeaser),
  ("newslisting", ComponentKind::NewsListing),
  ("contactcta", ComponentKind::ContactCta),
  ("contactform", ComponentKind::ContactForm),
  ("privacypolicy", ComponentKind::PrivacyPolicy),
  ("gallery", ComponentKind::Gallery),
  ("pricetable", ComponentKind::PriceTable),
  ("teammembers", ComponentKind::TeamMembers),
  ("statsbar", ComponentKind::StatsBar),
  ("mapembed", ComponentKind::MapEmbed),
  ("breadcrumbtrail", ComponentKind::BreadcrumbTrail),
  ("imagebanner", ComponentKind::ImageBanner),
  ("sociallinks", ComponentKind::SocialLinks),
];

impl ComponentKind {
  /// Case-insensitive lookup against the registry. Never fails: unregistered
  /// names come back as `Unknown` carrying the original string.
  pub fn parse(name: &str) -> ComponentKind {
    let folded = name.to_ascii_lowercase();
    for (key, kind) in REGISTRY {
      if *key == folded {
        return kind.clone();
      }
    }
    ComponentKind::Unknown(name.to_string())
  }

  pub fn canonical_name(&self) -> &str {
    match self {
      Self::PageHeader => "PageHeader",
      Self::Hero => "Hero",
      Self::Content => "Content",
      Self::RichText => "RichText",
      Self::ServiceCards => "ServiceCards",
      Self::ServicesListing => "ServicesListing",
      Self::BenefitsGrid => "BenefitsGrid",
      Self::HowWeWork => "HowWeWork",
      Self::Testimonials => "Testimonials",
      Self::Faq => "Faq",
      Self::CallToAction => "CallToAction",
      Self::PartnersStrip => "PartnersStrip",
      Self::NewsTeaser => "NewsTeaser",
      Self::NewsListing => "NewsListing",
      Self::ContactCta => "ContactCta",
      Self::ContactForm => "ContactForm",
      Self::PrivacyPolicy => "PrivacyPolicy",
      Self::Gallery => "Gallery",
      Self::PriceTable => "PriceTable",
      Self::TeamMembers => "TeamMembers",
      Self::StatsBar => "StatsBar",
      Self::MapEmbed => "MapEmbed",
      Self::BreadcrumbTrail => "BreadcrumbTrail",
      Self::ImageBanner => "ImageBanner",
      Self::SocialLinks => "SocialLinks",
      Self::Unknown(name) => name,
    }
  }
}

impl fmt::Display for ComponentKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.canonical_name())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse_is_case_insensitive() {
    assert_eq!(ComponentKind::parse("servicecards"), ComponentKind::ServiceCards);
    assert_eq!(ComponentKind::parse("ServiceCards"), ComponentKind::ServiceCards);
    assert_eq!(ComponentKind::parse("SERVICECARDS"), ComponentKind::ServiceCards);
  }

  #[test]
  fn parse_unknown_preserves_original_spelling() {
    let kind = ComponentKind::parse("MegaBanner");
    assert_eq!(kind, ComponentKind::Unknown("MegaBanner".to_string()));
    assert_eq!(kind.canonical_name(), "MegaBanner");
  }

  #[test]
  fn registry_round_trips_canonical_names() {
    for (_, kind) in REGISTRY {
      assert_eq!(&ComponentKind::parse(kind.canonical_name()), kind);
    }
  }
}
