/* src/server/content/src/lib.rs */

pub mod compose;
pub mod error;
pub mod kind;
pub mod locale;
pub mod model;
pub mod props;
pub mod resolver;
pub mod routes;
pub mod site;
pub mod store;

// Re-exports for ergonomic use
pub use compose::{Composer, apply_component_overrides, default_components};
pub use error::ContentError;
pub use kind::ComponentKind;
pub use locale::{Locale, LocaleMap, localized, localized_value};
pub use model::{
  CollectionItem, ComponentConfig, ComponentOverride, PageContent, SeoData, SharedDoc,
};
pub use props::{ComponentProps, resolve_component_props};
pub use resolver::{ResolvedContent, Resolver};
pub use routes::{CollectionConfig, RouteEntry, RouteTable, SitemapEntry};
pub use site::Site;
pub use store::ContentStore;
