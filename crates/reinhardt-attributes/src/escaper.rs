//! Escaping capabilities used while rendering
//!
//! Rendering never escapes on its own; it asks an [`AttributeEscaper`]
//! to escape ordinary values and to sanitize URLs. [`HtmlEscaper`] is the
//! default, backed by `reinhardt-security`.

use reinhardt_security::{AllowedProtocols, MESSENGER_PROTOCOL, escape_html_attr, sanitize_url};

/// Escaping provided by the host environment
pub trait AttributeEscaper {
	/// Escape a raw value for a double-quoted attribute
	fn escape_attribute_value(&self, raw: &str) -> String;

	/// Sanitize a URL, rejecting schemes outside `allowed`
	fn escape_url(&self, raw: &str, allowed: &AllowedProtocols) -> String;

	/// The environment's default URL scheme allow-list
	fn default_protocols(&self) -> AllowedProtocols {
		AllowedProtocols::default()
	}
}

impl<T: AttributeEscaper + ?Sized> AttributeEscaper for &T {
	fn escape_attribute_value(&self, raw: &str) -> String {
		(**self).escape_attribute_value(raw)
	}

	fn escape_url(&self, raw: &str, allowed: &AllowedProtocols) -> String {
		(**self).escape_url(raw, allowed)
	}

	fn default_protocols(&self) -> AllowedProtocols {
		(**self).default_protocols()
	}
}

/// Allow-list passed to the escaper for `href` values
///
/// The messenger scheme is always accepted on top of the escaper's
/// default allow-list.
///
/// # Examples
///
/// ```
/// use reinhardt_attributes::escaper::{HtmlEscaper, href_protocols};
///
/// let protocols = href_protocols(&HtmlEscaper::default());
/// assert!(protocols.contains("fb-messenger"));
/// assert!(protocols.contains("https"));
/// ```
pub fn href_protocols<E: AttributeEscaper + ?Sized>(escaper: &E) -> AllowedProtocols {
	AllowedProtocols::empty()
		.with(MESSENGER_PROTOCOL)
		.union(&escaper.default_protocols())
}

/// Default escaper backed by `reinhardt-security`
///
/// # Examples
///
/// ```
/// use reinhardt_attributes::escaper::{AttributeEscaper, HtmlEscaper};
/// use reinhardt_security::AllowedProtocols;
///
/// let escaper = HtmlEscaper::new(AllowedProtocols::new(["https"]));
/// assert_eq!(escaper.escape_attribute_value("a<b"), "a&lt;b");
/// assert_eq!(escaper.escape_url("ftp://x", &escaper.default_protocols()), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlEscaper {
	protocols: AllowedProtocols,
}

impl HtmlEscaper {
	/// Create an escaper with its own default allow-list
	pub fn new(protocols: AllowedProtocols) -> Self {
		Self { protocols }
	}

	/// Build an escaper from loaded settings
	#[cfg(feature = "settings")]
	pub fn from_settings(settings: &crate::settings::AttributeSettings) -> Self {
		Self::new(settings.protocols())
	}

	pub fn protocols(&self) -> &AllowedProtocols {
		&self.protocols
	}
}

impl AttributeEscaper for HtmlEscaper {
	fn escape_attribute_value(&self, raw: &str) -> String {
		escape_html_attr(raw)
	}

	fn escape_url(&self, raw: &str, allowed: &AllowedProtocols) -> String {
		sanitize_url(raw, allowed)
	}

	fn default_protocols(&self) -> AllowedProtocols {
		self.protocols.clone()
	}
}
