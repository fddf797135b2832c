//! Project context handed over by the packaging tool and the paths derived from it.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};

use crate::density::Density;

/// Source directory for authored splash images, relative to the project root.
pub const DEFAULT_SPLASH_SOURCE_DIR: &str = "res/screen/android";
/// Generated Android resource root, relative to the project root.
pub const DEFAULT_RESOURCE_ROOT: &str = "platforms/android/app/src/main/res";
/// Value forced onto the `cdv_splashscreen_background` color token.
pub const DEFAULT_SPLASH_BACKGROUND: &str = "#1a1040";
/// Drawable resource rendered by the native splash screen.
pub const DEFAULT_SPLASH_ICON: &str = "@mipmap/ic_launcher";

/// File name every density image is installed under.
pub const SPLASH_IMAGE_FILE: &str = "screen.png";
/// Color token patched inside `colors.xml`.
pub const SPLASH_BACKGROUND_TOKEN: &str = "cdv_splashscreen_background";

/// Invocation context supplied by the orchestrator once native project generation finished.
#[derive(Debug, Clone)]
pub struct HookContext {
  project_root: PathBuf,
}

impl HookContext {
  /// Create a context for an already validated project root.
  pub fn new(project_root: impl Into<PathBuf>) -> Self {
    Self {
      project_root: project_root.into(),
    }
  }

  /// Canonicalise `path` and ensure it names an existing directory.
  pub fn resolve(path: &Path) -> Result<Self> {
    let root = path
      .canonicalize()
      .with_context(|| format!("failed to resolve project root {}", path.display()))?;
    if !root.is_dir() {
      return Err(anyhow!("project root {} is not a directory", root.display()));
    }
    Ok(Self::new(root))
  }

  /// Absolute project root.
  pub fn project_root(&self) -> &Path {
    &self.project_root
  }
}

/// Fully resolved source and destination paths for one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplashProjectLayout {
  /// Directory holding `<density>.png` source images.
  pub splash_source_dir: PathBuf,
  /// Generated native resource root.
  pub resource_root: PathBuf,
  /// Density whose image is also installed as the density-less fallback.
  pub fallback_density: Density,
  /// Hex value forced onto the splash background token.
  pub splash_background: String,
  /// Drawable reference used by the replacement bitmap.
  pub splash_icon: String,
}

impl SplashProjectLayout {
  /// Layout using the conventional Cordova paths under `project_root`.
  pub fn conventional(project_root: &Path) -> Self {
    Self {
      splash_source_dir: project_root.join(DEFAULT_SPLASH_SOURCE_DIR),
      resource_root: project_root.join(DEFAULT_RESOURCE_ROOT),
      fallback_density: Density::HIGHEST,
      splash_background: DEFAULT_SPLASH_BACKGROUND.into(),
      splash_icon: DEFAULT_SPLASH_ICON.into(),
    }
  }

  /// Authored image for `density`.
  pub fn source_image(&self, density: Density) -> PathBuf {
    self.splash_source_dir.join(density.source_file_name())
  }

  /// Generated `drawable-<density>` directory.
  pub fn density_dir(&self, density: Density) -> PathBuf {
    self.resource_root.join(density.drawable_dir_name())
  }

  /// Installed image for `density`.
  pub fn density_image(&self, density: Density) -> PathBuf {
    self.density_dir(density).join(SPLASH_IMAGE_FILE)
  }

  /// Density-less `drawable` directory.
  pub fn default_drawable_dir(&self) -> PathBuf {
    self.resource_root.join("drawable")
  }

  /// Fallback image used when no density bucket matches.
  pub fn fallback_image(&self) -> PathBuf {
    self.default_drawable_dir().join(SPLASH_IMAGE_FILE)
  }

  /// Generated color table.
  pub fn colors_file(&self) -> PathBuf {
    self.resource_root.join("values").join("colors.xml")
  }

  /// Generated splash drawable replaced with a bitmap.
  pub fn splash_drawable_file(&self) -> PathBuf {
    self.default_drawable_dir().join("ic_cdv_splashscreen.xml")
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  #[test]
  fn derives_conventional_paths() {
    let layout = SplashProjectLayout::conventional(Path::new("/work/app"));
    let res = PathBuf::from("/work/app/platforms/android/app/src/main/res");

    assert_eq!(
      layout.source_image(Density::Mdpi),
      PathBuf::from("/work/app/res/screen/android/mdpi.png")
    );
    assert_eq!(
      layout.density_image(Density::Xhdpi),
      res.join("drawable-xhdpi").join("screen.png")
    );
    assert_eq!(layout.fallback_image(), res.join("drawable").join("screen.png"));
    assert_eq!(layout.colors_file(), res.join("values").join("colors.xml"));
    assert_eq!(
      layout.splash_drawable_file(),
      res.join("drawable").join("ic_cdv_splashscreen.xml")
    );
  }

  #[test]
  fn resolve_rejects_missing_and_non_directory_roots() -> std::io::Result<()> {
    let dir = tempdir()?;
    let file = dir.path().join("config.xml");
    std::fs::write(&file, "<widget/>")?;

    assert!(HookContext::resolve(&dir.path().join("missing")).is_err());
    assert!(HookContext::resolve(&file).is_err());

    let context = HookContext::resolve(dir.path()).unwrap();
    assert!(context.project_root().is_absolute());
    Ok(())
  }
}
