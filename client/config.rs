/*!
This module defines the `Config` struct. Every field is optional, and the accessors fall back to the defaults the page was built against.
*/

use crate::error::Result;
use crate::render::RenderOptions;
use laptop_advisor_ui::NumberLocale;
use url::Url;

pub const DEFAULT_OPTIONS_PATH: &str = "/api/options";
pub const DEFAULT_PREDICT_PATH: &str = "/predict";
pub const DEFAULT_RECOMMEND_PATH: &str = "/recommend";
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";
pub const DEFAULT_IMAGE_PLACEHOLDER_URL: &str =
	"https://via.placeholder.com/300x200?text=No+Image";

#[derive(Clone, Debug, Default, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
	/// The backend origin. The browser uses the page's own origin and the cli uses its `--url` when this is absent.
	pub base_url: Option<Url>,
	pub options_path: Option<String>,
	pub predict_path: Option<String>,
	pub recommend_path: Option<String>,
	pub number_locale: Option<NumberLocale>,
	pub currency_symbol: Option<String>,
	pub image_placeholder_url: Option<String>,
	/// Drop a response when a newer submission of the same form has started. Without this the last response to arrive wins.
	pub discard_stale_responses: Option<bool>,
}

impl Config {
	pub fn from_json(json: &str) -> Result<Config> {
		Ok(serde_json::from_str(json)?)
	}

	pub fn options_path(&self) -> &str {
		self.options_path.as_deref().unwrap_or(DEFAULT_OPTIONS_PATH)
	}

	pub fn predict_path(&self) -> &str {
		self.predict_path.as_deref().unwrap_or(DEFAULT_PREDICT_PATH)
	}

	pub fn recommend_path(&self) -> &str {
		self.recommend_path
			.as_deref()
			.unwrap_or(DEFAULT_RECOMMEND_PATH)
	}

	pub fn discard_stale_responses(&self) -> bool {
		self.discard_stale_responses.unwrap_or(false)
	}

	pub fn render_options(&self) -> RenderOptions {
		RenderOptions {
			number_locale: self.number_locale.unwrap_or_default(),
			currency_symbol: self
				.currency_symbol
				.clone()
				.unwrap_or_else(|| DEFAULT_CURRENCY_SYMBOL.to_owned()),
			image_placeholder_url: self
				.image_placeholder_url
				.clone()
				.unwrap_or_else(|| DEFAULT_IMAGE_PLACEHOLDER_URL.to_owned()),
		}
	}
}

#[test]
fn test_defaults() {
	let config = Config::default();
	assert_eq!(config.options_path(), "/api/options");
	assert_eq!(config.predict_path(), "/predict");
	assert_eq!(config.recommend_path(), "/recommend");
	assert!(!config.discard_stale_responses());
	let render_options = config.render_options();
	assert_eq!(render_options.number_locale, NumberLocale::Indian);
	assert_eq!(render_options.currency_symbol, "₹");
}

#[test]
fn test_from_json() {
	let config = Config::from_json(
		r#"{
			"base_url": "http://localhost:5000",
			"number_locale": "international",
			"currency_symbol": "$",
			"discard_stale_responses": true
		}"#,
	)
	.unwrap();
	assert_eq!(
		config.base_url.as_ref().map(|url| url.as_str()),
		Some("http://localhost:5000/")
	);
	assert_eq!(
		config.render_options().number_locale,
		NumberLocale::International
	);
	assert_eq!(config.render_options().currency_symbol, "$");
	assert!(config.discard_stale_responses());
	assert!(Config::from_json(r#"{"colour": "blue"}"#).is_err());
}
