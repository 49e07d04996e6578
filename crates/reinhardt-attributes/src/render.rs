//! Rendering attribute maps into markup
//!
//! Output is byte-for-byte deterministic: `id`, `href`, `target`, `rel`
//! and `class` come first in that order, then every other attribute by
//! name.

use crate::escaper::{AttributeEscaper, href_protocols};
use crate::merge::Attributes;

/// Attributes emitted ahead of all others, in this order
pub const PRIORITY_ORDER: [&str; 5] = ["id", "href", "target", "rel", "class"];

/// Attributes omitted from the output when their value is empty
pub const SKIP_WHEN_EMPTY: [&str; 4] = ["href", "class", "target", "rel"];

const HREF: &str = "href";

/// Whether an attribute is left out of the rendered output
pub fn is_skipped(name: &str, value: &str) -> bool {
	value.is_empty() && SKIP_WHEN_EMPTY.contains(&name)
}

/// Attributes in rendering order
///
/// # Examples
///
/// ```
/// use reinhardt_attributes::merge::Attributes;
/// use reinhardt_attributes::render::ordered_attributes;
///
/// let attributes = Attributes::from([
///     ("data-x".to_string(), "1".to_string()),
///     ("class".to_string(), "c".to_string()),
///     ("alt".to_string(), "a".to_string()),
///     ("id".to_string(), "i".to_string()),
/// ]);
///
/// let names: Vec<&str> = ordered_attributes(&attributes)
///     .into_iter()
///     .map(|(name, _)| name)
///     .collect();
/// assert_eq!(names, vec!["id", "class", "alt", "data-x"]);
/// ```
pub fn ordered_attributes(attributes: &Attributes) -> Vec<(&str, &str)> {
	let mut ordered = Vec::with_capacity(attributes.len());
	for name in PRIORITY_ORDER {
		if let Some((name, value)) = attributes.get_key_value(name) {
			ordered.push((name.as_str(), value.as_str()));
		}
	}
	// BTreeMap iteration is already in ascending byte order
	ordered.extend(
		attributes
			.iter()
			.filter(|(name, _)| !PRIORITY_ORDER.contains(&name.as_str()))
			.map(|(name, value)| (name.as_str(), value.as_str())),
	);
	ordered
}

/// Render attributes as `name="value"` pairs separated by single spaces
///
/// `href` is sanitized as a URL, every other value is escaped as an
/// attribute value. An empty map, or one whose entries are all skipped,
/// renders as an empty string.
///
/// # Examples
///
/// ```
/// use reinhardt_attributes::escaper::HtmlEscaper;
/// use reinhardt_attributes::merge::Attributes;
/// use reinhardt_attributes::render::render_attributes;
///
/// let attributes = Attributes::from([
///     ("title".to_string(), "Say \"hi\"".to_string()),
///     ("href".to_string(), "https://example.com".to_string()),
///     ("rel".to_string(), String::new()),
/// ]);
///
/// assert_eq!(
///     render_attributes(&attributes, &HtmlEscaper::default()),
///     r#"href="https://example.com" title="Say &quot;hi&quot;""#
/// );
/// ```
pub fn render_attributes<E>(attributes: &Attributes, escaper: &E) -> String
where
	E: AttributeEscaper + ?Sized,
{
	if attributes.is_empty() {
		return String::new();
	}

	let mut allowed = None;
	ordered_attributes(attributes)
		.into_iter()
		.filter(|(name, value)| !is_skipped(name, value))
		.map(|(name, value)| {
			let escaped = if name == HREF {
				let allowed = allowed.get_or_insert_with(|| href_protocols(escaper));
				escaper.escape_url(value, allowed)
			} else {
				escaper.escape_attribute_value(value)
			};
			format!(r#"{name}="{escaped}""#)
		})
		.collect::<Vec<_>>()
		.join(" ")
}
