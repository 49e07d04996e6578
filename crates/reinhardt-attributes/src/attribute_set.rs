//! Mutable set of HTML attributes

use crate::escaper::{AttributeEscaper, HtmlEscaper};
use crate::merge::{Attributes, CLASS, merge_attributes};
use crate::render::render_attributes;
use serde::{Deserialize, Serialize};
use std::fmt;

/// HTML attributes for a single element
///
/// Values are stored raw and only escaped when rendered. Mutators merge
/// by default: `class` tokens accumulate without duplicates while every
/// other attribute is overwritten.
///
/// # Examples
///
/// ```
/// use reinhardt_attributes::AttributeSet;
///
/// let mut attributes = AttributeSet::new();
/// attributes
///     .set("class", "btn")
///     .set("id", "submit")
///     .add_class(["btn-primary btn"]);
///
/// assert_eq!(attributes.get("class"), Some("btn btn-primary"));
/// assert_eq!(attributes.render(), r#"id="submit" class="btn btn-primary""#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeSet {
	entries: Attributes,
}

impl AttributeSet {
	/// Create an empty set
	pub fn new() -> Self {
		Self::default()
	}

	/// Create a set seeded with `initial`, or an empty one for `None`
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_attributes::AttributeSet;
	///
	/// let seeded = AttributeSet::create(Some([("id", "main")]));
	/// assert_eq!(seeded.get("id"), Some("main"));
	///
	/// let empty = AttributeSet::create(None::<Vec<(String, String)>>);
	/// assert!(empty.is_empty());
	/// ```
	pub fn create<I, K, V>(initial: Option<I>) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		initial
			.map(|initial| initial.into_iter().collect())
			.unwrap_or_default()
	}

	/// Set one attribute, merging `class` tokens
	pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
		self.set_with(name, value, true)
	}

	/// Set one attribute, overwriting any existing value
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_attributes::AttributeSet;
	///
	/// let mut attributes = AttributeSet::new();
	/// attributes.set("class", "a").replace("class", "b");
	/// assert_eq!(attributes.get("class"), Some("b"));
	/// ```
	pub fn replace(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
		self.set_with(name, value, false)
	}

	/// Set one attribute, merging when `merge` is `true`
	pub fn set_with(
		&mut self,
		name: impl Into<String>,
		value: impl Into<String>,
		merge: bool,
	) -> &mut Self {
		let (name, value) = (name.into(), value.into());
		if merge {
			self.merge_in(Attributes::from([(name, value)]));
		} else {
			self.entries.insert(name, value);
		}
		self
	}

	/// Set many attributes, merging `class` tokens
	pub fn set_all<I, K, V>(&mut self, attributes: I) -> &mut Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		self.set_all_with(attributes, true)
	}

	/// Set many attributes, overwriting existing values
	pub fn replace_all<I, K, V>(&mut self, attributes: I) -> &mut Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		self.set_all_with(attributes, false)
	}

	/// Set many attributes, merging when `merge` is `true`
	///
	/// Without merging, entries are applied in iteration order, so a name
	/// given twice keeps its last value.
	pub fn set_all_with<I, K, V>(&mut self, attributes: I, merge: bool) -> &mut Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		let incoming = attributes
			.into_iter()
			.map(|(name, value)| (name.into(), value.into()));
		if merge {
			self.merge_in(incoming.collect());
		} else {
			self.entries.extend(incoming);
		}
		self
	}

	/// Add class tokens
	///
	/// Each argument may hold several space-separated tokens. Tokens are
	/// merged into the existing class list, so duplicates are dropped.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_attributes::AttributeSet;
	///
	/// let mut attributes = AttributeSet::new();
	/// attributes.add_class(["a b", "c"]).add_class(["b d"]);
	/// assert_eq!(attributes.get("class"), Some("a b c d"));
	/// ```
	pub fn add_class<I>(&mut self, classes: I) -> &mut Self
	where
		I: IntoIterator,
		I::Item: AsRef<str>,
	{
		let joined = classes
			.into_iter()
			.map(|class| class.as_ref().to_owned())
			.collect::<Vec<_>>()
			.join(" ");
		self.set(CLASS, joined)
	}

	/// Value of an attribute, if present
	pub fn get(&self, name: &str) -> Option<&str> {
		self.entries.get(name).map(String::as_str)
	}

	/// All attributes with their raw values
	pub fn get_all(&self) -> &Attributes {
		&self.entries
	}

	pub fn contains(&self, name: &str) -> bool {
		self.entries.contains_key(name)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn into_inner(self) -> Attributes {
		self.entries
	}

	/// Render with the default [`HtmlEscaper`]
	pub fn render(&self) -> String {
		self.render_using(&HtmlEscaper::default())
	}

	/// Render with a custom escaper
	///
	/// The class list is normalized for the output only; the stored value
	/// is left as is.
	pub fn render_using<E>(&self, escaper: &E) -> String
	where
		E: AttributeEscaper + ?Sized,
	{
		render_attributes(&merge_attributes(&self.entries, &Attributes::new()), escaper)
	}

	/// Merge `extra` into this set, then render it
	///
	/// The merge is kept: later calls see the attributes added here.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_attributes::AttributeSet;
	///
	/// let mut attributes = AttributeSet::from_iter([("class", "card")]);
	/// assert_eq!(attributes.render_merged([("class", "active")]), r#"class="card active""#);
	/// assert_eq!(attributes.get("class"), Some("card active"));
	/// ```
	pub fn render_merged<I, K, V>(&mut self, extra: I) -> String
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		self.render_merged_using(extra, &HtmlEscaper::default())
	}

	/// Merge `extra` into this set, then render it with a custom escaper
	pub fn render_merged_using<I, K, V, E>(&mut self, extra: I, escaper: &E) -> String
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
		E: AttributeEscaper + ?Sized,
	{
		self.set_all(extra).render_using(escaper)
	}

	fn merge_in(&mut self, incoming: Attributes) {
		self.entries = merge_attributes(&self.entries, &incoming);
	}
}

impl fmt::Display for AttributeSet {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.render())
	}
}

impl From<Attributes> for AttributeSet {
	fn from(entries: Attributes) -> Self {
		Self { entries }
	}
}

impl From<AttributeSet> for Attributes {
	fn from(set: AttributeSet) -> Self {
		set.entries
	}
}

impl<K, V> FromIterator<(K, V)> for AttributeSet
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self {
			entries: iter
				.into_iter()
				.map(|(name, value)| (name.into(), value.into()))
				.collect(),
		}
	}
}

impl<K, V> Extend<(K, V)> for AttributeSet
where
	K: Into<String>,
	V: Into<String>,
{
	/// Merges like [`AttributeSet::set_all`]
	fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
		self.set_all(iter);
	}
}
