//! Shared configuration loader for the deck toolchain.
//!
//! `defaults/deck.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files
//! on top of those defaults via [`Loader`] before deserializing into
//! [`DeckConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
pub use config::ConfigError;
use deck_render::PageOptions;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/deck.default.toml");

/// Top-level configuration consumed by deck applications.
#[derive(Debug, Clone, Deserialize)]
pub struct DeckConfig {
    pub page: PageConfig,
    pub output: OutputConfig,
}

/// Text injected into the generated page: document title and footer lines.
#[derive(Debug, Clone, Deserialize)]
pub struct PageConfig {
    pub title: String,
    pub footer_title: String,
    pub footer_subtitle: String,
}

impl From<&PageConfig> for PageOptions {
    fn from(config: &PageConfig) -> Self {
        PageOptions {
            title: config.title.clone(),
            footer_title: config.footer_title.clone(),
            footer_subtitle: config.footer_subtitle.clone(),
        }
    }
}

/// Output-file naming knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Appended to the input file stem when no explicit output is given.
    pub suffix: String,
    /// Directory name used for batch conversion inside the input directory.
    pub directory: String,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<DeckConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<DeckConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.page.title, "Slide Deck");
        assert_eq!(config.output.suffix, "_continuous");
        assert_eq!(config.output.directory, "html_output");
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("page.title", "My Lecture")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.page.title, "My Lecture");
    }

    #[test]
    fn page_config_converts_to_page_options() {
        let config = load_defaults().expect("defaults to deserialize");
        let options: PageOptions = (&config.page).into();
        assert_eq!(options.title, "Slide Deck");
        assert_eq!(options.footer_subtitle, "Generated from Markdown");
    }
}
