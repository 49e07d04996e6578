//! # Reinhardt Attributes
//!
//! Build, merge and render the attributes of an HTML element.
//!
//! Attribute values can come from several places at once, typically a base
//! set defined by a component plus overrides supplied by the caller.
//! [`AttributeSet`] combines them with override semantics for every
//! attribute except `class`, whose tokens are accumulated and deduplicated.
//! Rendering escapes each value, drops empty `href`, `class`, `target` and
//! `rel` attributes, and emits a deterministic order so the output is
//! stable across insertion orders.
//!
//! ## Modules
//!
//! - [`attribute_set`]: the mutable [`AttributeSet`]
//! - [`merge`]: merge rules for attribute maps
//! - [`render`]: ordering, skip rule and escaping
//! - [`escaper`]: the [`AttributeEscaper`] capability and its default
//! - `settings`: TOML configuration for the default escaper (feature `settings`)
//!
//! ## Example
//!
//! ```
//! use reinhardt_attributes::AttributeSet;
//!
//! let mut link = AttributeSet::create(Some([
//!     ("href", "https://example.com/?a=1&b=2"),
//!     ("class", "link"),
//! ]));
//! link.set("target", "_blank").add_class(["link external"]);
//!
//! assert_eq!(
//!     link.render_merged([("data-track", "nav"), ("rel", "noopener")]),
//!     r#"href="https://example.com/?a=1&amp;b=2" target="_blank" rel="noopener" class="link external" data-track="nav""#
//! );
//! ```

pub mod attribute_set;
pub mod escaper;
pub mod merge;
pub mod render;
#[cfg(feature = "settings")]
pub mod settings;

pub use attribute_set::AttributeSet;
pub use escaper::{AttributeEscaper, HtmlEscaper};
pub use merge::{Attributes, merge_attributes};
pub use render::render_attributes;
#[cfg(feature = "settings")]
pub use settings::{AttributeSettings, SettingsError};
