//! Replaces Cordova's vector splash icon with a bitmap drawable pointing at the app icon.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use crate::models::PendingChange;
use crate::project::SplashProjectLayout;

/// Bitmap drawable document rendering `icon` centered on the splash background.
pub fn bitmap_drawable_xml(icon: &str) -> String {
  format!(
    "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
<bitmap xmlns:android=\"http://schemas.android.com/apk/res/android\"\n    \
android:src=\"{icon}\"\n    \
android:gravity=\"center\" />\n"
  )
}

/// Overwrite `ic_cdv_splashscreen.xml` with the bitmap document, whatever it held before.
pub fn replace_splash_drawable(layout: &SplashProjectLayout) -> Result<PathBuf> {
  let path = layout.splash_drawable_file();
  fs::write(&path, bitmap_drawable_xml(&layout.splash_icon))
    .with_context(|| format!("failed to write {}", path.display()))?;
  info!(
    "replaced {} with {} bitmap",
    path.file_name().unwrap_or_default().to_string_lossy(),
    layout.splash_icon
  );
  Ok(path)
}

/// Report whether the splash drawable still differs from the bitmap document.
pub fn pending_drawable_change(layout: &SplashProjectLayout) -> Result<Option<PendingChange>> {
  let path = layout.splash_drawable_file();
  let current = match fs::read_to_string(&path) {
    Ok(text) => Some(text),
    Err(err) if err.kind() == ErrorKind::NotFound => None,
    Err(err) => return Err(err).with_context(|| format!("failed to read {}", path.display())),
  };

  if current.as_deref() == Some(bitmap_drawable_xml(&layout.splash_icon).as_str()) {
    Ok(None)
  } else {
    Ok(Some(PendingChange::SplashDrawable { path }))
  }
}
