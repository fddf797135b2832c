//! Reports produced while patching a generated Android project.

use std::path::PathBuf;

use serde::Serialize;

use crate::density::Density;

/// Result of copying density splash images into the resource tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CopyReport {
  /// Densities whose source image was installed, in bucket order.
  pub copied: Vec<Density>,
  /// Densities skipped because no source image exists.
  pub skipped: Vec<Density>,
  /// Whether the density-less fallback image was written.
  pub fallback_installed: bool,
}

impl CopyReport {
  /// Number of density images copied, excluding the fallback.
  pub fn copied_count(&self) -> usize {
    self.copied.len()
  }
}

/// Outcome of forcing the splash background color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ColorPatchOutcome {
  /// The color token was rewritten.
  Patched {
    /// Value found before patching.
    previous: String,
  },
  /// The token already held the target value.
  Unchanged,
  /// The color table has no entry for the token; the file was left untouched.
  EntryMissing,
  /// The color table does not exist.
  FileMissing,
}

/// Summary of a full patch run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatchReport {
  /// Project root the run operated on.
  pub project_root: PathBuf,
  /// Splash image copy results.
  pub images: CopyReport,
  /// Color table result.
  pub background: ColorPatchOutcome,
  /// Path of the rewritten splash drawable.
  pub splash_drawable: PathBuf,
}

/// Change a patch run would still make to the project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PendingChange {
  /// A density image is missing or differs from its source.
  DensityImage {
    /// Density bucket.
    density: Density,
    /// Installed image path.
    path: PathBuf,
  },
  /// The fallback image is missing or differs from its source.
  FallbackImage {
    /// Installed fallback path.
    path: PathBuf,
  },
  /// The splash background token holds another value.
  BackgroundColor {
    /// Current value of the token.
    current: String,
    /// Value a run would write.
    expected: String,
  },
  /// The splash drawable is not the bitmap document.
  SplashDrawable {
    /// Drawable path.
    path: PathBuf,
  },
}
