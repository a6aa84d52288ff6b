//! Application configuration. Feed location, page paths.

use serde::Deserialize;

/// Feed name relative to the site (or the working directory).
pub const DEFAULT_FEED_LOCATION: &str = "updated_file.csv";

/// Page written by default; matches the navbar's "This Week" link.
pub const DEFAULT_OUTPUT_PATH: &str = "this-week.html";

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// CSV feed: file path, absolute URL, or a name relative to `base_url`. Read from SHOWTIMES_FEED_LOCATION.
    #[serde(default)]
    pub feed_location: Option<String>,

    /// Site root the feed is fetched from when `feed_location` is relative. Read from SHOWTIMES_BASE_URL.
    #[serde(default)]
    pub base_url: Option<String>,

    /// HTML page template with `navbar-placeholder` and `films-list` elements. Read from SHOWTIMES_TEMPLATE_PATH.
    #[serde(default)]
    pub template_path: Option<String>,

    /// Rendered page destination. Read from SHOWTIMES_OUTPUT_PATH.
    #[serde(default)]
    pub output_path: Option<String>,

    /// Optional JSON export of the listing. Read from SHOWTIMES_JSON_OUTPUT_PATH.
    #[serde(default)]
    pub json_output_path: Option<String>,

    /// Render the week containing this date instead of today. Read from SHOWTIMES_TODAY.
    #[serde(default)]
    pub today: Option<String>,

    /// Print the banner at startup (default true). Read from SHOWTIMES_SHOW_BANNER.
    #[serde(default)]
    pub show_banner: Option<bool>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        if let Ok(path) = std::env::var("SHOWTIMES_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        // Environment overrides the file.
        c = c.add_source(config::Environment::with_prefix("SHOWTIMES").try_parsing(true));
        c.build()?.try_deserialize()
    }

    /// Returns the feed location. Defaults to `updated_file.csv`.
    pub fn feed_location_or_default(&self) -> String {
        self.feed_location
            .clone()
            .unwrap_or_else(|| DEFAULT_FEED_LOCATION.to_string())
    }

    /// Returns the base URL if set and non-empty.
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref().filter(|s| !s.trim().is_empty())
    }

    /// Returns the output page path. Defaults to `this-week.html`.
    pub fn output_path_or_default(&self) -> String {
        self.output_path
            .clone()
            .unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string())
    }

    /// Returns whether to print the banner. Defaults to true.
    pub fn show_banner_or_default(&self) -> bool {
        self.show_banner.unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.feed_location_or_default(), "updated_file.csv");
        assert_eq!(cfg.output_path_or_default(), "this-week.html");
        assert!(cfg.base_url().is_none());
        assert!(cfg.show_banner_or_default());
    }

    #[test]
    fn test_blank_base_url_ignored() {
        let cfg = AppConfig {
            base_url: Some("  ".into()),
            ..Default::default()
        };
        assert!(cfg.base_url().is_none());
    }

    #[test]
    fn test_deserialize_from_file_source() {
        let cfg: AppConfig = config::Config::builder()
            .add_source(config::File::from_str(
                "feed_location = \"feeds/week.csv\"\nshow_banner = false\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(cfg.feed_location_or_default(), "feeds/week.csv");
        assert!(!cfg.show_banner_or_default());
    }
}
