//! Optional project configuration overriding the conventional splash layout.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use anyhow::{Context, Result, anyhow};
use regex::Regex;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::warn;

use crate::density::Density;
use crate::project::{
  DEFAULT_RESOURCE_ROOT, DEFAULT_SPLASH_BACKGROUND, DEFAULT_SPLASH_ICON,
  DEFAULT_SPLASH_SOURCE_DIR, SplashProjectLayout,
};

/// Configuration file looked up in the project root.
pub const DEFAULT_CONFIG_FILE: &str = "splash.config.json";

/// Discoverable configuration; every key falls back to the Cordova convention.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
  /// Directory with `<density>.png` sources, relative to the project root.
  pub splash_source_dir: String,
  /// Generated Android resource root, relative to the project root.
  pub resource_root: String,
  /// Density copied into the density-less `drawable` directory.
  pub fallback_density: Density,
  /// Value forced onto `cdv_splashscreen_background`.
  pub splash_background: String,
  /// Drawable referenced by the replacement splash bitmap.
  pub splash_icon: String,
}

impl Default for ProjectConfig {
  fn default() -> Self {
    Self {
      splash_source_dir: DEFAULT_SPLASH_SOURCE_DIR.into(),
      resource_root: DEFAULT_RESOURCE_ROOT.into(),
      fallback_density: Density::HIGHEST,
      splash_background: DEFAULT_SPLASH_BACKGROUND.into(),
      splash_icon: DEFAULT_SPLASH_ICON.into(),
    }
  }
}

impl ProjectConfig {
  /// Load `splash.config.json` from the project root.
  ///
  /// A missing file yields the defaults. A file that cannot be read or parsed is reported and
  /// ignored so the hook keeps producing the conventional output.
  pub fn discover(project_root: &Path) -> Self {
    let candidate = project_root.join(DEFAULT_CONFIG_FILE);
    if !candidate.exists() {
      return Self::default();
    }
    match Self::from_path(&candidate) {
      Ok(config) => config,
      Err(err) => {
        warn!(path = %candidate.display(), "ignoring splash config: {err:#}");
        Self::default()
      }
    }
  }

  /// Read and validate configuration from a specific JSON file.
  pub fn from_path(path: &Path) -> Result<Self> {
    let content = fs::read_to_string(path)
      .with_context(|| format!("failed to read {}", path.display()))?;
    Self::from_json(&content).with_context(|| format!("invalid config {}", path.display()))
  }

  /// Parse and validate configuration JSON.
  ///
  /// Errors name the offending key when a single value fails to deserialize.
  pub fn from_json(content: &str) -> Result<Self> {
    let config: Self = match serde_json::from_str(content) {
      Ok(config) => config,
      Err(err) => {
        return Err(match find_invalid_key(content) {
          Some(key) => anyhow!(err).context(format!("invalid value for `{key}`")),
          None => anyhow!(err),
        });
      }
    };
    config.validate()?;
    Ok(config)
  }

  /// Reject values that cannot be written into the generated XML unchanged.
  ///
  /// `splash_background` must stay matchable by the color patch on the next run, so only
  /// Android hex colors are accepted; `splash_icon` must be an `@type/name` reference.
  pub fn validate(&self) -> Result<()> {
    if !hex_color_pattern().is_match(&self.splash_background) {
      return Err(anyhow!(
        "invalid value for `splash_background`: `{}` is not a #RGB, #ARGB, #RRGGBB or #AARRGGBB color",
        self.splash_background
      ));
    }
    if !resource_reference_pattern().is_match(&self.splash_icon) {
      return Err(anyhow!(
        "invalid value for `splash_icon`: `{}` is not an @type/name resource reference",
        self.splash_icon
      ));
    }
    Ok(())
  }

  /// Resolve the configured paths against `project_root`.
  pub fn into_layout(self, project_root: &Path) -> SplashProjectLayout {
    SplashProjectLayout {
      splash_source_dir: project_root.join(self.splash_source_dir),
      resource_root: project_root.join(self.resource_root),
      fallback_density: self.fallback_density,
      splash_background: self.splash_background,
      splash_icon: self.splash_icon,
    }
  }
}

fn hex_color_pattern() -> &'static Regex {
  static PATTERN: OnceLock<Regex> = OnceLock::new();
  PATTERN.get_or_init(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$")
      .expect("invalid hex color regex")
  })
}

fn resource_reference_pattern() -> &'static Regex {
  static PATTERN: OnceLock<Regex> = OnceLock::new();
  PATTERN.get_or_init(|| {
    Regex::new(r"^@(?:[a-z][a-z0-9_.]*:)?[a-z]+/[A-Za-z_][A-Za-z0-9_.]*$")
      .expect("invalid resource reference regex")
  })
}

/// First top-level key whose value alone fails to deserialize into [`ProjectConfig`].
fn find_invalid_key(content: &str) -> Option<String> {
  let object: Map<String, Value> = serde_json::from_str(content).ok()?;
  object.into_iter().find_map(|(key, value)| {
    let single = Value::Object(Map::from_iter([(key.clone(), value)]));
    serde_json::from_value::<ProjectConfig>(single)
      .is_err()
      .then_some(key)
  })
}
