#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod assets;
pub mod config;
pub mod density;
pub mod models;
pub mod patch;
pub mod patcher;
pub mod project;

pub use density::Density;
pub use models::{ColorPatchOutcome, CopyReport, PatchReport, PendingChange};
pub use patcher::{SplashPatcher, patch_project};
pub use project::{HookContext, SplashProjectLayout};
