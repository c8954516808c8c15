//! Site configuration embedded in the host page.
//!
//! The page may carry `<script id="site-config" type="application/json">` with
//! any subset of the fields below; everything missing falls back to defaults.

use log::{info, warn};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::HtmlScriptElement;

use crate::components::ambient::{DustStyle, FlakeStyle};
use crate::components::stats::{StatEntry, default_stats};

/// DOM id of the embedded config script.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
	/// Headline figures on the home page.
	pub stats: Vec<StatEntry>,
	/// Full-screen dust effect.
	pub dust: DustStyle,
	/// CSS flakes drifting over the dust layer.
	pub flakes: FlakeStyle,
}

impl Default for SiteConfig {
	fn default() -> Self {
		Self {
			stats: default_stats(),
			dust: DustStyle::default(),
			flakes: FlakeStyle::default(),
		}
	}
}

impl SiteConfig {
	pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(json)
	}
}

fn config_text() -> Option<String> {
	let document = web_sys::window()?.document()?;
	let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

/// Reads the embedded config. Absent config yields defaults silently; a
/// malformed one is logged and replaced with defaults.
pub fn load_site_config() -> SiteConfig {
	let Some(json) = config_text() else {
		return SiteConfig::default();
	};
	match SiteConfig::parse(&json) {
		Ok(config) => {
			info!(
				"bolt-site: loaded config with {} stats, dust {}",
				config.stats.len(),
				if config.dust.enabled { "on" } else { "off" }
			);
			config
		}
		Err(e) => {
			warn!("bolt-site: failed to parse site config: {}", e);
			SiteConfig::default()
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_object_is_all_defaults() {
		assert_eq!(SiteConfig::parse("{}").unwrap(), SiteConfig::default());
	}

	#[test]
	fn stats_override_and_suffix_defaults() {
		let config =
			SiteConfig::parse(r#"{ "stats": [{ "label": "Nodes", "target": 42 }] }"#).unwrap();
		assert_eq!(config.stats, vec![StatEntry::new("Nodes", 42.0, "")]);
		assert_eq!(config.dust, DustStyle::default());
	}

	#[test]
	fn dust_can_be_disabled() {
		let config = SiteConfig::parse(r#"{ "dust": { "enabled": false } }"#).unwrap();
		assert!(!config.dust.enabled);
		assert_eq!(config.stats, default_stats());
	}

	#[test]
	fn flake_count_overrides() {
		let config = SiteConfig::parse(r#"{ "flakes": { "count": 4 } }"#).unwrap();
		assert_eq!(config.flakes.count, 4);
		assert_eq!(config.flakes.tints, FlakeStyle::default().tints);
	}

	#[test]
	fn malformed_json_is_an_error() {
		assert!(SiteConfig::parse("{ stats: ").is_err());
		assert!(SiteConfig::parse(r#"{ "stats": 3 }"#).is_err());
	}
}
