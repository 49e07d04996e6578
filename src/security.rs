//! Escaping primitives for attribute values and URLs.
//!
//! # Examples
//!
//! ```
//! use reinhardt_html::security::{AllowedProtocols, sanitize_url};
//!
//! assert_eq!(sanitize_url("vbscript:msgbox(1)", &AllowedProtocols::default()), "");
//! ```

pub use reinhardt_security::*;
