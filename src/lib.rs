//! # Reinhardt HTML
//!
//! HTML attribute handling for markup generated in Rust.
//!
//! Markup produced programmatically often draws its attributes from more than
//! one place: a component's defaults plus whatever the caller passes in.
//! Reinhardt HTML merges those sources with predictable rules and renders them
//! into a string ready to splice into an opening tag.
//!
//! ## Core Principles
//!
//! - **Raw until rendered**: values are stored unescaped and escaped exactly once
//! - **Additive classes**: `class` tokens from every source are kept, without duplicates
//! - **Deterministic output**: the same logical attributes always render identically
//! - **Pluggable escaping**: escaping goes through the [`AttributeEscaper`] trait
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `settings` - TOML configuration for the default escaper
//!
//! ## Quick Example
//!
//! ```
//! use reinhardt_html::prelude::*;
//!
//! let mut attributes = AttributeSet::new();
//! attributes
//!     .set("class", "card")
//!     .set("id", "intro")
//!     .add_class(["card highlighted"]);
//!
//! assert_eq!(attributes.render(), r#"id="intro" class="card highlighted""#);
//! ```

pub mod attributes;
pub mod security;

// Re-export attribute types
pub use reinhardt_attributes::{
	AttributeEscaper, AttributeSet, Attributes, HtmlEscaper, merge_attributes, render_attributes,
};

// Re-export settings
#[cfg(feature = "settings")]
pub use reinhardt_attributes::{AttributeSettings, SettingsError};

// Re-export escaping primitives
pub use reinhardt_security::{AllowedProtocols, escape_html_attr, sanitize_url};

/// Prelude module for convenient imports
///
/// Import everything commonly needed with:
/// ```
/// use reinhardt_html::prelude::*;
/// ```
pub mod prelude {
	pub use crate::{
		AllowedProtocols, AttributeEscaper, AttributeSet, Attributes, HtmlEscaper,
	};

	#[cfg(feature = "settings")]
	pub use crate::AttributeSettings;
}
