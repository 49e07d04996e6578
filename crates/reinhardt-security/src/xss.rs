//! XSS prevention for attribute values

use crate::protocols::{AllowedProtocols, is_valid_scheme};
use regex::Regex;
use std::sync::OnceLock;

/// Escape a value for use inside a double-quoted HTML attribute
///
/// # Examples
///
/// ```
/// use reinhardt_security::xss::escape_html_attr;
///
/// assert_eq!(escape_html_attr("value"), "value");
/// assert_eq!(escape_html_attr(r#"x" onload="alert('xss')"#),
///            "x&quot; onload=&quot;alert(&#x27;xss&#x27;)&quot;");
/// assert_eq!(escape_html_attr("line\nbreak"), "line&#10;break");
/// assert_eq!(escape_html_attr("tab\there"), "tab&#9;here");
/// ```
pub fn escape_html_attr(input: &str) -> String {
	let mut result = String::with_capacity(input.len() + 10);
	for ch in input.chars() {
		match ch {
			'&' => result.push_str("&amp;"),
			'<' => result.push_str("&lt;"),
			'>' => result.push_str("&gt;"),
			'"' => result.push_str("&quot;"),
			'\'' => result.push_str("&#x27;"),
			'\n' => result.push_str("&#10;"),
			'\r' => result.push_str("&#13;"),
			'\t' => result.push_str("&#9;"),
			_ => result.push(ch),
		}
	}
	result
}

/// Scheme of a URL, if it has one
///
/// The text before the first `:` counts as a scheme only when it is
/// syntactically valid, so paths such as `/a:b` have none.
///
/// # Examples
///
/// ```
/// use reinhardt_security::xss::url_scheme;
///
/// assert_eq!(url_scheme("https://example.com"), Some("https"));
/// assert_eq!(url_scheme("fb-messenger://share"), Some("fb-messenger"));
/// assert_eq!(url_scheme("/path/to:page"), None);
/// assert_eq!(url_scheme("#top"), None);
/// ```
pub fn url_scheme(url: &str) -> Option<&str> {
	let (head, _) = url.split_once(':')?;
	is_valid_scheme(head).then_some(head)
}

static ENCODED_LINE_BREAK: OnceLock<Regex> = OnceLock::new();
static BARE_PHP_FILE: OnceLock<Regex> = OnceLock::new();

fn encoded_line_break() -> &'static Regex {
	ENCODED_LINE_BREAK.get_or_init(|| Regex::new(r"(?i)%0[ad]").unwrap())
}

fn bare_php_file() -> &'static Regex {
	BARE_PHP_FILE.get_or_init(|| Regex::new(r"(?i)^[a-z0-9-]+?\.php").unwrap())
}

fn is_url_char(ch: char) -> bool {
	ch.is_ascii_alphanumeric() || !ch.is_ascii() || "-~+_.?#=!&;,/:%@$|*'()[]".contains(ch)
}

/// Sanitize a URL for an attribute such as `href`
///
/// Characters that never belong in a URL are stripped, encoded line
/// breaks are removed, and a URL whose scheme is not in `allowed` is
/// rejected entirely (the result is empty). Scheme-less host names get
/// an `http://` prefix. The result is escaped for display in markup.
///
/// # Examples
///
/// ```
/// use reinhardt_security::protocols::AllowedProtocols;
/// use reinhardt_security::xss::sanitize_url;
///
/// let protocols = AllowedProtocols::default();
///
/// assert_eq!(sanitize_url("https://example.com/a b", &protocols),
///            "https://example.com/a%20b");
/// assert_eq!(sanitize_url("/relative?x=1&y=2", &protocols),
///            "/relative?x=1&amp;y=2");
/// assert_eq!(sanitize_url("example.com", &protocols), "http://example.com");
/// assert_eq!(sanitize_url("javascript:alert(1)", &protocols), "");
/// assert_eq!(sanitize_url("fb-messenger://share", &protocols), "");
/// assert_eq!(
///     sanitize_url("fb-messenger://share", &protocols.clone().with("fb-messenger")),
///     "fb-messenger://share"
/// );
/// ```
pub fn sanitize_url(input: &str, allowed: &AllowedProtocols) -> String {
	let trimmed = input.trim();
	if trimmed.is_empty() {
		return String::new();
	}

	let mut url: String = trimmed
		.replace(' ', "%20")
		.chars()
		.filter(|&ch| is_url_char(ch))
		.collect();

	// Removal can splice a new `%0a` together, so repeat until stable
	while encoded_line_break().is_match(&url) {
		url = encoded_line_break().replace_all(&url, "").into_owned();
	}

	if url.is_empty() {
		return url;
	}

	url = url.replace(";//", "://");

	if !url.contains(':') && !url.starts_with(['/', '#', '?']) && !bare_php_file().is_match(&url)
	{
		url = format!("http://{url}");
	}

	if let Some(scheme) = url_scheme(&url)
		&& !allowed.contains(scheme)
	{
		tracing::debug!(scheme, "rejecting URL with disallowed scheme");
		return String::new();
	}

	url.replace('&', "&amp;").replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::protocols::MESSENGER_PROTOCOL;
	use rstest::rstest;

	#[rstest]
	fn test_escape_html_attr() {
		let attr = r#"value" onload="alert('xss')"#;
		let escaped = escape_html_attr(attr);
		assert!(escaped.contains("&quot;"));
		assert!(escaped.contains("&#x27;"));
		assert!(!escaped.contains('"'));
	}

	#[rstest]
	fn test_escape_html_attr_control_characters() {
		assert_eq!(escape_html_attr("a\r\nb\tc"), "a&#13;&#10;b&#9;c");
	}

	#[rstest]
	fn test_escape_html_attr_multibyte() {
		assert_eq!(escape_html_attr("こんにちは<>&"), "こんにちは&lt;&gt;&amp;");
	}

	#[rstest]
	#[case("https://example.com", "https://example.com")]
	#[case("HTTPS://Example.com", "HTTPS://Example.com")]
	#[case("mailto:user@example.com", "mailto:user@example.com")]
	#[case("tel:+15551234567", "tel:+15551234567")]
	#[case("/path/to/page", "/path/to/page")]
	#[case("#section", "#section")]
	#[case("?page=2", "?page=2")]
	#[case("index.php?id=1", "index.php?id=1")]
	#[case("example.com/page", "http://example.com/page")]
	fn test_sanitize_url_accepts(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(sanitize_url(input, &AllowedProtocols::default()), expected);
	}

	#[rstest]
	#[case("javascript:alert(1)")]
	#[case("JavaScript:alert(1)")]
	#[case("data:text/html,<script>alert(1)</script>")]
	#[case("vbscript:msgbox(1)")]
	#[case("localhost:8080/admin")]
	fn test_sanitize_url_rejects(#[case] input: &str) {
		assert_eq!(sanitize_url(input, &AllowedProtocols::default()), "");
	}

	#[rstest]
	fn test_sanitize_url_empty_and_whitespace() {
		let protocols = AllowedProtocols::default();
		assert_eq!(sanitize_url("", &protocols), "");
		assert_eq!(sanitize_url("   ", &protocols), "");
		assert_eq!(sanitize_url("<>\"", &protocols), "");
	}

	#[rstest]
	fn test_sanitize_url_strips_markup_characters() {
		// Arrange
		let input = r#"https://example.com/"><script>"#;

		// Act
		let sanitized = sanitize_url(input, &AllowedProtocols::default());

		// Assert
		assert_eq!(sanitized, "https://example.com/script");
	}

	#[rstest]
	fn test_sanitize_url_removes_encoded_line_breaks() {
		let protocols = AllowedProtocols::default();
		assert_eq!(
			sanitize_url("https://example.com/%0d%0aSet-Cookie:x", &protocols),
			"https://example.com/Set-Cookie:x"
		);
		// Nested sequence only appears after the inner one is removed
		assert_eq!(
			sanitize_url("https://example.com/%0%0aa", &protocols),
			"https://example.com/"
		);
	}

	#[rstest]
	#[case("https;//example.com", "https://example.com")]
	#[case("/assets;//logo.png", "/assets://logo.png")]
	fn test_sanitize_url_repairs_semicolon_separator(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(sanitize_url(input, &AllowedProtocols::default()), expected);
	}

	#[rstest]
	fn test_sanitize_url_rejects_repaired_bad_scheme() {
		assert_eq!(sanitize_url("javascript;//alert(1)", &AllowedProtocols::default()), "");
	}

	#[rstest]
	fn test_sanitize_url_escapes_for_display() {
		assert_eq!(
			sanitize_url("https://example.com/?q=it's&x=1", &AllowedProtocols::default()),
			"https://example.com/?q=it&#x27;s&amp;x=1"
		);
	}

	#[rstest]
	fn test_sanitize_url_keeps_non_ascii() {
		assert_eq!(
			sanitize_url("https://example.com/café", &AllowedProtocols::default()),
			"https://example.com/café"
		);
	}

	#[rstest]
	fn test_sanitize_url_custom_scheme_requires_allow_list() {
		let url = "fb-messenger://share?link=https%3A%2F%2Fexample.com";
		let without = AllowedProtocols::default();
		let with = without.clone().with(MESSENGER_PROTOCOL);

		assert_eq!(sanitize_url(url, &without), "");
		assert_eq!(sanitize_url(url, &with), url);
	}

	#[rstest]
	fn test_url_scheme() {
		assert_eq!(url_scheme("http://x"), Some("http"));
		assert_eq!(url_scheme("no-colon"), None);
		assert_eq!(url_scheme(":leading"), None);
		assert_eq!(url_scheme("a b:c"), None);
	}
}

#[cfg(test)]
mod proptests {
	use super::*;
	use proptest::prelude::*;

	proptest! {
		#[test]
		fn prop_escape_html_attr_no_raw_specials(s in "\\PC*") {
			let escaped = escape_html_attr(&s);
			prop_assert!(!escaped.contains('"'));
			prop_assert!(!escaped.contains('<'));
			prop_assert!(!escaped.contains('>'));
			prop_assert!(!escaped.contains('\''));
			prop_assert!(!escaped.contains('\n'));
		}

		#[test]
		fn prop_sanitize_url_never_emits_quotes_or_brackets(s in "\\PC*") {
			let sanitized = sanitize_url(&s, &AllowedProtocols::default());
			prop_assert!(!sanitized.contains('"'));
			prop_assert!(!sanitized.contains('<'));
			prop_assert!(!sanitized.contains('>'));
			prop_assert!(!sanitized.contains(' '));
		}

		#[test]
		fn prop_sanitize_url_rejects_unknown_schemes(path in "[a-z0-9/]{0,20}") {
			let url = format!("javascript:{path}");
			prop_assert_eq!(sanitize_url(&url, &AllowedProtocols::default()), "");
		}
	}
}
