//! # Reinhardt Security
//!
//! Escaping primitives used when attribute values are spliced into markup.
//!
//! - [`xss`]: attribute-value escaping and URL sanitization
//! - [`protocols`]: URL scheme allow-lists
//!
//! ## Example
//!
//! ```
//! use reinhardt_security::{AllowedProtocols, escape_html_attr, sanitize_url};
//!
//! assert_eq!(escape_html_attr(r#"say "hi""#), "say &quot;hi&quot;");
//!
//! let protocols = AllowedProtocols::default();
//! assert_eq!(sanitize_url("https://example.com/?a=1&b=2", &protocols),
//!            "https://example.com/?a=1&amp;b=2");
//! assert_eq!(sanitize_url("javascript:alert(1)", &protocols), "");
//! ```

pub mod protocols;
pub mod xss;

pub use protocols::{
	AllowedProtocols, DEFAULT_ALLOWED_PROTOCOLS, MESSENGER_PROTOCOL, is_valid_scheme,
};
pub use xss::{escape_html_attr, sanitize_url, url_scheme};
