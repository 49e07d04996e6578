//! Merging of attribute maps
//!
//! Every attribute follows last-writer-wins semantics except `class`,
//! whose token lists are concatenated and deduplicated so neither side
//! loses a class.

use std::collections::{BTreeMap, HashSet};

/// Attribute name to raw (unescaped) value
pub type Attributes = BTreeMap<String, String>;

pub(crate) const CLASS: &str = "class";

/// Split a class attribute value into tokens
///
/// The value is trimmed and split on single spaces. Runs of spaces
/// produce empty tokens, which [`normalize_class_list`] discards.
///
/// # Examples
///
/// ```
/// use reinhardt_attributes::merge::class_tokens;
///
/// assert_eq!(class_tokens(" a b ").collect::<Vec<_>>(), vec!["a", "b"]);
/// assert_eq!(class_tokens("a  b").collect::<Vec<_>>(), vec!["a", "", "b"]);
/// ```
pub fn class_tokens(value: &str) -> impl Iterator<Item = &str> {
	value.trim().split(' ')
}

/// Join class tokens, dropping empty and repeated ones
///
/// The first occurrence of each token keeps its position.
///
/// # Examples
///
/// ```
/// use reinhardt_attributes::merge::normalize_class_list;
///
/// assert_eq!(normalize_class_list(["b", "", "a", "b", "c", "a"]), "b a c");
/// assert_eq!(normalize_class_list(["", ""]), "");
/// ```
pub fn normalize_class_list<'a, I>(tokens: I) -> String
where
	I: IntoIterator<Item = &'a str>,
{
	let mut seen = HashSet::new();
	tokens
		.into_iter()
		.filter(|token| !token.is_empty() && seen.insert(*token))
		.collect::<Vec<_>>()
		.join(" ")
}

fn token_count(class: &str) -> usize {
	if class.is_empty() {
		0
	} else {
		class.split(' ').count()
	}
}

/// Merge `incoming` on top of `base`
///
/// Keys from `incoming` replace those in `base`. If either side carries a
/// non-empty `class`, the result's `class` is the base tokens followed by
/// the incoming tokens, deduplicated in first-occurrence order.
///
/// # Examples
///
/// ```
/// use reinhardt_attributes::merge::{Attributes, merge_attributes};
///
/// let base = Attributes::from([
///     ("class".to_string(), "b c".to_string()),
///     ("id".to_string(), "old".to_string()),
/// ]);
/// let incoming = Attributes::from([
///     ("class".to_string(), "a b".to_string()),
///     ("id".to_string(), "new".to_string()),
/// ]);
///
/// let merged = merge_attributes(&base, &incoming);
/// assert_eq!(merged["class"], "b c a");
/// assert_eq!(merged["id"], "new");
/// ```
pub fn merge_attributes(base: &Attributes, incoming: &Attributes) -> Attributes {
	let mut tokens = Vec::new();
	for attributes in [base, incoming] {
		if let Some(class) = attributes.get(CLASS)
			&& !class.is_empty()
		{
			tokens.extend(class_tokens(class));
		}
	}

	let mut merged = base.clone();
	merged.extend(
		incoming
			.iter()
			.map(|(name, value)| (name.clone(), value.clone())),
	);

	// A whitespace-only class still yields one (empty) token and so resets the value
	if !tokens.is_empty() {
		let collected = tokens.len();
		let class = normalize_class_list(tokens);
		let dropped = collected - token_count(&class);
		if dropped > 0 {
			tracing::trace!(dropped, class = %class, "dropped duplicate or empty class tokens");
		}
		merged.insert(CLASS.to_string(), class);
	}

	merged
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn attrs(pairs: &[(&str, &str)]) -> Attributes {
		pairs
			.iter()
			.map(|(name, value)| (name.to_string(), value.to_string()))
			.collect()
	}

	#[rstest]
	#[case("b c", "a b", "b c a")]
	#[case("a", "", "a")]
	#[case("", "a", "a")]
	#[case("a a", "a", "a")]
	#[case("  a   b ", " c ", "a b c")]
	#[case("x\ty", "y", "x\ty y")]
	fn test_merge_class_lists(#[case] base: &str, #[case] incoming: &str, #[case] expected: &str) {
		// Arrange
		let base = attrs(&[("class", base)]);
		let incoming = attrs(&[("class", incoming)]);

		// Act
		let merged = merge_attributes(&base, &incoming);

		// Assert
		assert_eq!(merged.get("class").map(String::as_str), Some(expected));
	}

	#[rstest]
	fn test_merge_incoming_wins_for_other_attributes() {
		let base = attrs(&[("id", "x"), ("title", "keep")]);
		let incoming = attrs(&[("id", "y"), ("rel", "nofollow")]);

		let merged = merge_attributes(&base, &incoming);

		assert_eq!(merged, attrs(&[("id", "y"), ("rel", "nofollow"), ("title", "keep")]));
	}

	#[rstest]
	fn test_merge_class_only_on_one_side() {
		let base = attrs(&[("class", "btn")]);
		let incoming = attrs(&[("id", "go")]);

		let merged = merge_attributes(&base, &incoming);

		assert_eq!(merged, attrs(&[("class", "btn"), ("id", "go")]));
	}

	#[rstest]
	fn test_merge_empty_incoming_class_without_base_class_is_kept() {
		// No tokens are collected, so the plain merge result stands
		let merged = merge_attributes(&Attributes::new(), &attrs(&[("class", "")]));

		assert_eq!(merged.get("class").map(String::as_str), Some(""));
	}

	#[rstest]
	fn test_merge_whitespace_only_class_resets_value() {
		let merged = merge_attributes(&Attributes::new(), &attrs(&[("class", "   ")]));

		assert_eq!(merged.get("class").map(String::as_str), Some(""));
	}

	#[rstest]
	fn test_merge_is_idempotent_for_class() {
		let base = attrs(&[("class", "a b")]);

		let once = merge_attributes(&base, &base);
		let twice = merge_attributes(&once, &base);

		assert_eq!(once["class"], "a b");
		assert_eq!(twice["class"], "a b");
	}

	#[rstest]
	fn test_merge_leaves_inputs_untouched() {
		let base = attrs(&[("class", "a")]);
		let incoming = attrs(&[("class", "b")]);

		let _ = merge_attributes(&base, &incoming);

		assert_eq!(base["class"], "a");
		assert_eq!(incoming["class"], "b");
	}

	#[rstest]
	#[case(&["a", "b"], 0)]
	#[case(&["a", "a", "b"], 1)]
	#[case(&["", "a", ""], 2)]
	#[case(&[""], 1)]
	fn test_dropped_token_count(#[case] tokens: &[&str], #[case] dropped: usize) {
		let class = normalize_class_list(tokens.iter().copied());

		assert_eq!(tokens.len() - token_count(&class), dropped);
	}

	#[rstest]
	fn test_normalize_class_list_preserves_first_occurrence() {
		assert_eq!(normalize_class_list(["c", "a", "c", "b", "a"]), "c a b");
	}
}
