//! Splash patch orchestrator run after `cordova prepare android`.

use std::path::Path;

use anyhow::Result;
use tracing::info;

use crate::assets::{install_splash_images, pending_image_changes};
use crate::config::ProjectConfig;
use crate::models::{PatchReport, PendingChange};
use crate::patch::{
  patch_splash_background, pending_background_change, pending_drawable_change,
  replace_splash_drawable,
};
use crate::project::{HookContext, SplashProjectLayout};

/// Patch the Android project under `project_root` using its discovered configuration.
pub fn patch_project(project_root: &Path) -> Result<PatchReport> {
  SplashPatcher::new(HookContext::resolve(project_root)?).run()
}

/// Copies splash images and rewrites the generated splash resources of one project.
pub struct SplashPatcher {
  context: HookContext,
  layout: SplashProjectLayout,
}

impl SplashPatcher {
  /// Create a patcher using `splash.config.json` from the project root when present.
  pub fn new(context: HookContext) -> Self {
    let layout = ProjectConfig::discover(context.project_root()).into_layout(context.project_root());
    Self::with_layout(context, layout)
  }

  /// Create a patcher for an explicit layout.
  pub fn with_layout(context: HookContext, layout: SplashProjectLayout) -> Self {
    Self { context, layout }
  }

  /// Resolved paths this patcher reads from and writes to.
  pub fn layout(&self) -> &SplashProjectLayout {
    &self.layout
  }

  /// Install splash images, force the background color and replace the splash drawable.
  ///
  /// Any filesystem error aborts the remaining steps. Every step is idempotent, so an
  /// interrupted run converges once it is repeated.
  pub fn run(&self) -> Result<PatchReport> {
    info!(project = %self.context.project_root().display(), "patching android splash resources");

    let images = install_splash_images(&self.layout)?;
    let background = patch_splash_background(&self.layout)?;
    let splash_drawable = replace_splash_drawable(&self.layout)?;

    Ok(PatchReport {
      project_root: self.context.project_root().to_path_buf(),
      images,
      background,
      splash_drawable,
    })
  }

  /// List the changes [`SplashPatcher::run`] would make, without writing anything.
  pub fn check(&self) -> Result<Vec<PendingChange>> {
    let mut pending = pending_image_changes(&self.layout)?;
    pending.extend(pending_background_change(&self.layout)?);
    pending.extend(pending_drawable_change(&self.layout)?);
    Ok(pending)
  }
}
