//! Installation of density-specific splash images into the generated resource tree.
//!
//! Cordova no longer honours `<splash>` tags for Android, so the authored images under the
//! project's shared `res/` tree are copied into the `drawable-<density>` directories by hand.

mod copier;

pub use copier::{
  copy_density_splashes, copy_fallback_splash, install_splash_asset, install_splash_images,
  pending_image_changes,
};
