//! Escaper configuration loaded from TOML
//!
//! ```toml
//! # Replaces the built-in allow-list
//! allowed_protocols = ["http", "https", "mailto"]
//! # Added on top of it
//! extra_protocols = ["whatsapp"]
//! ```

use crate::escaper::HtmlEscaper;
use reinhardt_security::{AllowedProtocols, is_valid_scheme};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Error type for loading settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	/// IO error while reading a settings file
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	/// Malformed TOML
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// A configured protocol is not a valid URL scheme
	#[error("Invalid protocol: {0:?}")]
	InvalidProtocol(String),
}

pub type Result<T> = std::result::Result<T, SettingsError>;

/// Settings for the default escaper
///
/// # Examples
///
/// ```
/// use reinhardt_attributes::settings::AttributeSettings;
///
/// let settings = AttributeSettings::from_toml_str(r#"extra_protocols = ["whatsapp"]"#).unwrap();
/// let protocols = settings.protocols();
/// assert!(protocols.contains("whatsapp"));
/// assert!(protocols.contains("https"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributeSettings {
	/// Default URL scheme allow-list of the environment
	pub allowed_protocols: AllowedProtocols,
	/// Schemes accepted in addition to `allowed_protocols`
	pub extra_protocols: Vec<String>,
}

impl AttributeSettings {
	/// Parse and validate settings from a TOML document
	pub fn from_toml_str(content: &str) -> Result<Self> {
		let settings: Self = toml::from_str(content)?;
		settings.validate()?;
		tracing::debug!(
			allowed = settings.allowed_protocols.len(),
			extra = settings.extra_protocols.len(),
			"loaded attribute settings"
		);
		Ok(settings)
	}

	/// Read, parse and validate a TOML settings file
	pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		tracing::debug!(path = %path.display(), "reading attribute settings");
		let content = std::fs::read_to_string(path)?;
		Self::from_toml_str(&content)
	}

	/// Reject protocols that are not syntactically URL schemes
	pub fn validate(&self) -> Result<()> {
		self.allowed_protocols
			.iter()
			.chain(self.extra_protocols.iter().map(String::as_str))
			.find(|scheme| !is_valid_scheme(scheme))
			.map_or(Ok(()), |scheme| {
				Err(SettingsError::InvalidProtocol(scheme.to_string()))
			})
	}

	/// Effective allow-list: `allowed_protocols` plus `extra_protocols`
	pub fn protocols(&self) -> AllowedProtocols {
		self.allowed_protocols
			.union(&AllowedProtocols::new(&self.extra_protocols))
	}

	/// Escaper configured with these settings
	pub fn escaper(&self) -> HtmlEscaper {
		HtmlEscaper::from_settings(self)
	}
}
