//! Attribute sets and their merge and render rules.
//!
//! # Examples
//!
//! ```
//! use reinhardt_html::attributes::merge::{Attributes, merge_attributes};
//!
//! let base = Attributes::from([("class".to_string(), "a b".to_string())]);
//! let incoming = Attributes::from([("class".to_string(), "b c".to_string())]);
//! assert_eq!(merge_attributes(&base, &incoming)["class"], "a b c");
//! ```

pub use reinhardt_attributes::*;
