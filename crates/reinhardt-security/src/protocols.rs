//! URL scheme allow-lists

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Schemes accepted in URL attributes unless configured otherwise
pub const DEFAULT_ALLOWED_PROTOCOLS: &[&str] = &[
	"http", "https", "ftp", "ftps", "mailto", "news", "irc", "irc6", "ircs", "gopher", "nntp",
	"feed", "telnet", "mms", "rtsp", "sms", "svn", "tel", "fax", "xmpp", "webcal", "urn",
];

/// Messenger deep-link scheme, always accepted in `href`
pub const MESSENGER_PROTOCOL: &str = "fb-messenger";

/// Check whether `scheme` is syntactically a URL scheme
///
/// A scheme starts with an ASCII letter followed by letters, digits,
/// `+`, `-` or `.`.
///
/// # Examples
///
/// ```
/// use reinhardt_security::protocols::is_valid_scheme;
///
/// assert!(is_valid_scheme("https"));
/// assert!(is_valid_scheme("fb-messenger"));
/// assert!(is_valid_scheme("svn+ssh"));
/// assert!(!is_valid_scheme(""));
/// assert!(!is_valid_scheme("1http"));
/// assert!(!is_valid_scheme("ht tp"));
/// ```
pub fn is_valid_scheme(scheme: &str) -> bool {
	let mut chars = scheme.chars();
	match chars.next() {
		Some(first) if first.is_ascii_alphabetic() => {
			chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
		}
		_ => false,
	}
}

/// Set of URL schemes a sanitizer accepts
///
/// Schemes are stored lowercase and compared case-insensitively.
///
/// # Examples
///
/// ```
/// use reinhardt_security::protocols::AllowedProtocols;
///
/// let protocols = AllowedProtocols::empty().with("HTTPS").with("mailto");
/// assert!(protocols.contains("https"));
/// assert!(protocols.contains("MailTo"));
/// assert!(!protocols.contains("javascript"));
/// assert_eq!(protocols.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct AllowedProtocols {
	schemes: BTreeSet<String>,
}

impl AllowedProtocols {
	/// Create an allow-list from the given schemes
	pub fn new<I, S>(schemes: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		schemes.into_iter().collect()
	}

	/// Create an allow-list that accepts no scheme at all
	pub fn empty() -> Self {
		Self {
			schemes: BTreeSet::new(),
		}
	}

	/// Add a scheme, builder style
	pub fn with(mut self, scheme: impl AsRef<str>) -> Self {
		self.insert(scheme);
		self
	}

	/// Add a scheme
	///
	/// Returns `true` if the scheme was not present before.
	pub fn insert(&mut self, scheme: impl AsRef<str>) -> bool {
		self.schemes.insert(scheme.as_ref().to_ascii_lowercase())
	}

	/// Union of two allow-lists
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_security::protocols::{AllowedProtocols, MESSENGER_PROTOCOL};
	///
	/// let extra = AllowedProtocols::empty().with(MESSENGER_PROTOCOL);
	/// let merged = extra.union(&AllowedProtocols::default());
	/// assert!(merged.contains("fb-messenger"));
	/// assert!(merged.contains("https"));
	/// ```
	pub fn union(&self, other: &AllowedProtocols) -> AllowedProtocols {
		Self {
			schemes: self.schemes.union(&other.schemes).cloned().collect(),
		}
	}

	/// Check whether `scheme` is allowed
	pub fn contains(&self, scheme: &str) -> bool {
		self.schemes.contains(&scheme.to_ascii_lowercase())
	}

	/// Iterate over the allowed schemes in ascending order
	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.schemes.iter().map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.schemes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.schemes.is_empty()
	}
}

impl Default for AllowedProtocols {
	fn default() -> Self {
		Self::new(DEFAULT_ALLOWED_PROTOCOLS)
	}
}

impl<S: AsRef<str>> FromIterator<S> for AllowedProtocols {
	fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
		Self {
			schemes: iter
				.into_iter()
				.map(|s| s.as_ref().to_ascii_lowercase())
				.collect(),
		}
	}
}

impl From<Vec<String>> for AllowedProtocols {
	fn from(schemes: Vec<String>) -> Self {
		schemes.into_iter().collect()
	}
}

impl From<AllowedProtocols> for Vec<String> {
	fn from(protocols: AllowedProtocols) -> Self {
		protocols.schemes.into_iter().collect()
	}
}
