//! In-place rewrites of resource files generated by `cordova prepare android`.

pub mod colors;
pub mod drawable;

pub use colors::{patch_splash_background, pending_background_change, replace_color_value};
pub use drawable::{bitmap_drawable_xml, pending_drawable_change, replace_splash_drawable};
