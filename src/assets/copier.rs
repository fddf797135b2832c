use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};
use same_file::is_same_file;
use tracing::{debug, info};

use crate::density::Density;
use crate::models::{CopyReport, PendingChange};
use crate::project::SplashProjectLayout;

/// Copy every density image and the fallback image, logging a summary.
pub fn install_splash_images(layout: &SplashProjectLayout) -> Result<CopyReport> {
  let mut report = copy_density_splashes(layout)?;
  report.fallback_installed = copy_fallback_splash(layout)?;

  info!(
    copied = report.copied_count(),
    fallback = report.fallback_installed,
    "copied {} splash images -> drawable-*/screen.png",
    report.copied_count()
  );

  Ok(report)
}

/// Copy `<density>.png` into `drawable-<density>/screen.png` for each density with a source.
///
/// Densities without a source image are skipped and no directory is created for them.
pub fn copy_density_splashes(layout: &SplashProjectLayout) -> Result<CopyReport> {
  let mut report = CopyReport::default();

  for density in Density::ALL {
    let source = layout.source_image(density);
    if !source_exists(&source)? {
      debug!(%density, source = %source.display(), "no splash source, skipping");
      report.skipped.push(density);
      continue;
    }

    let destination_dir = layout.density_dir(density);
    fs::create_dir_all(&destination_dir)
      .with_context(|| format!("failed to create {}", destination_dir.display()))?;

    let destination = layout.density_image(density);
    install_splash_asset(&source, &destination)?;
    debug!(%density, destination = %destination.display(), "installed splash image");
    report.copied.push(density);
  }

  Ok(report)
}

/// Copy the fallback density's source image into `drawable/screen.png`.
///
/// Returns `false` without writing anything when that source image is absent.
pub fn copy_fallback_splash(layout: &SplashProjectLayout) -> Result<bool> {
  let source = layout.source_image(layout.fallback_density);
  if !source_exists(&source)? {
    debug!(density = %layout.fallback_density, "no fallback splash source");
    return Ok(false);
  }

  let destination_dir = layout.default_drawable_dir();
  fs::create_dir_all(&destination_dir)
    .with_context(|| format!("failed to create {}", destination_dir.display()))?;

  let destination = layout.fallback_image();
  install_splash_asset(&source, &destination)?;
  debug!(destination = %destination.display(), "installed fallback splash image");
  Ok(true)
}

/// Copy `source` over `destination`, leaving it alone when both name the same file.
pub fn install_splash_asset(source: &Path, destination: &Path) -> Result<()> {
  if destination.exists()
    && is_same_file(source, destination).with_context(|| {
      format!(
        "failed to compare {} with {}",
        source.display(),
        destination.display()
      )
    })?
  {
    return Ok(());
  }

  fs::copy(source, destination).with_context(|| {
    format!(
      "failed to copy {} to {}",
      source.display(),
      destination.display()
    )
  })?;
  Ok(())
}

/// List the image copies a run would still perform.
pub fn pending_image_changes(layout: &SplashProjectLayout) -> Result<Vec<PendingChange>> {
  let mut pending = Vec::new();

  for density in Density::ALL {
    let source = layout.source_image(density);
    let destination = layout.density_image(density);
    if source_exists(&source)? && !same_contents(&source, &destination)? {
      pending.push(PendingChange::DensityImage {
        density,
        path: destination,
      });
    }
  }

  let source = layout.source_image(layout.fallback_density);
  let destination = layout.fallback_image();
  if source_exists(&source)? && !same_contents(&source, &destination)? {
    pending.push(PendingChange::FallbackImage { path: destination });
  }

  Ok(pending)
}

fn source_exists(path: &Path) -> Result<bool> {
  match fs::metadata(path) {
    Ok(metadata) => Ok(metadata.is_file()),
    Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
    Err(err) => Err(err).with_context(|| format!("failed to inspect {}", path.display())),
  }
}

fn same_contents(source: &Path, destination: &Path) -> Result<bool> {
  let installed = match fs::read(destination) {
    Ok(bytes) => bytes,
    Err(err) if err.kind() == ErrorKind::NotFound => return Ok(false),
    Err(err) => {
      return Err(err).with_context(|| format!("failed to read {}", destination.display()));
    }
  };
  let expected =
    fs::read(source).with_context(|| format!("failed to read {}", source.display()))?;
  Ok(installed == expected)
}
