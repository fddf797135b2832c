//! Forces the native splash background color inside the generated `colors.xml`.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};
use regex::Regex;
use tracing::{info, warn};

use crate::models::{ColorPatchOutcome, PendingChange};
use crate::project::{SPLASH_BACKGROUND_TOKEN, SplashProjectLayout};

/// Replace the value of the first `<color name="{token}">` entry in `text`.
///
/// Returns the rewritten document together with the previous value, or `None` when the
/// document has no entry for `token`. Everything outside the entry's value is preserved.
pub fn replace_color_value(text: &str, token: &str, value: &str) -> Option<(String, String)> {
  let pattern = Regex::new(&format!(
    r#"<color name="{}">([^<]*)</color>"#,
    regex::escape(token)
  ))
  .expect("invalid color entry regex");

  let captures = pattern.captures(text)?;
  let current = captures.get(1)?;

  let mut patched = String::with_capacity(text.len() + value.len());
  patched.push_str(&text[..current.start()]);
  patched.push_str(value);
  patched.push_str(&text[current.end()..]);

  Some((patched, current.as_str().to_string()))
}

/// Force `cdv_splashscreen_background` to the configured value.
///
/// A missing color table or a table without the token is not an error; the file is then left
/// untouched so upstream template changes do not break the build.
pub fn patch_splash_background(layout: &SplashProjectLayout) -> Result<ColorPatchOutcome> {
  let colors_path = layout.colors_file();
  let Some(text) = read_optional(&colors_path)? else {
    return Ok(ColorPatchOutcome::FileMissing);
  };

  let Some((patched, previous)) =
    replace_color_value(&text, SPLASH_BACKGROUND_TOKEN, &layout.splash_background)
  else {
    warn!(
      path = %colors_path.display(),
      "no {} entry found, leaving colors.xml untouched",
      SPLASH_BACKGROUND_TOKEN
    );
    return Ok(ColorPatchOutcome::EntryMissing);
  };

  if previous == layout.splash_background {
    info!(
      "colors.xml already sets {} -> {}",
      SPLASH_BACKGROUND_TOKEN, layout.splash_background
    );
    return Ok(ColorPatchOutcome::Unchanged);
  }

  fs::write(&colors_path, patched)
    .with_context(|| format!("failed to write {}", colors_path.display()))?;
  info!(
    %previous,
    "patched colors.xml: {} -> {}",
    SPLASH_BACKGROUND_TOKEN,
    layout.splash_background
  );

  Ok(ColorPatchOutcome::Patched { previous })
}

/// Report the background color change a run would still make, if any.
pub fn pending_background_change(layout: &SplashProjectLayout) -> Result<Option<PendingChange>> {
  let Some(text) = read_optional(&layout.colors_file())? else {
    return Ok(None);
  };

  Ok(
    replace_color_value(&text, SPLASH_BACKGROUND_TOKEN, &layout.splash_background)
      .filter(|(_, current)| *current != layout.splash_background)
      .map(|(_, current)| PendingChange::BackgroundColor {
        current,
        expected: layout.splash_background.clone(),
      }),
  )
}

fn read_optional(path: &Path) -> Result<Option<String>> {
  match fs::read_to_string(path) {
    Ok(text) => Ok(Some(text)),
    Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
    Err(err) => Err(err).with_context(|| format!("failed to read {}", path.display())),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  const COLORS_XML: &str = r##"<?xml version='1.0' encoding='utf-8'?>
<resources xmlns:tools="http://schemas.android.com/tools">
    <color name="cdv_background_color">#FFFFFF</color>
    <color name="cdv_splashscreen_background">#000000</color>
    <color name="colorPrimary">#3F51B5</color>
    <color name="colorPrimaryDark">#303F9F</color>
    <color name="colorAccent">#FF4081</color>
    <color name="cdv_splashscreen_background_dark">#111111</color>
</resources>
"##;

  fn write_colors(layout: &SplashProjectLayout, text: &str) -> std::io::Result<()> {
    let path = layout.colors_file();
    fs::create_dir_all(path.parent().unwrap())?;
    fs::write(path, text)
  }

  #[test]
  fn replaces_only_the_named_entry() {
    let (patched, previous) =
      replace_color_value(COLORS_XML, SPLASH_BACKGROUND_TOKEN, "#1a1040").unwrap();

    assert_eq!(previous, "#000000");
    assert_eq!(patched, COLORS_XML.replace("#000000", "#1a1040"));
    assert!(patched.contains(r##"<color name="cdv_splashscreen_background_dark">#111111</color>"##));
  }

  #[test]
  fn replaces_empty_values() {
    let text = r#"<color name="cdv_splashscreen_background"></color>"#;
    let (patched, previous) =
      replace_color_value(text, SPLASH_BACKGROUND_TOKEN, "#1a1040").unwrap();

    assert_eq!(previous, "");
    assert_eq!(patched, r##"<color name="cdv_splashscreen_background">#1a1040</color>"##);
  }

  #[test]
  fn returns_none_without_entry() {
    let text = r##"<resources><color name="colorAccent">#FF4081</color></resources>"##;
    assert!(replace_color_value(text, SPLASH_BACKGROUND_TOKEN, "#1a1040").is_none());
  }

  #[test]
  fn patches_color_table_on_disk() -> Result<()> {
    let dir = tempdir()?;
    let layout = SplashProjectLayout::conventional(dir.path());
    write_colors(&layout, COLORS_XML)?;

    let outcome = patch_splash_background(&layout)?;
    assert_eq!(
      outcome,
      ColorPatchOutcome::Patched {
        previous: "#000000".into()
      }
    );

    let updated = fs::read_to_string(layout.colors_file())?;
    assert_eq!(updated.matches("#1a1040").count(), 1);
    assert_eq!(updated, COLORS_XML.replace("#000000", "#1a1040"));

    assert_eq!(patch_splash_background(&layout)?, ColorPatchOutcome::Unchanged);
    assert!(pending_background_change(&layout)?.is_none());
    Ok(())
  }

  #[test]
  fn missing_table_is_not_created() -> Result<()> {
    let dir = tempdir()?;
    let layout = SplashProjectLayout::conventional(dir.path());

    assert_eq!(patch_splash_background(&layout)?, ColorPatchOutcome::FileMissing);
    assert!(!layout.colors_file().exists());
    Ok(())
  }

  #[test]
  fn table_without_entry_is_left_byte_identical() -> Result<()> {
    let dir = tempdir()?;
    let layout = SplashProjectLayout::conventional(dir.path());
    let original = "<resources>\n    <color name=\"colorAccent\">#FF4081</color>\n</resources>";
    write_colors(&layout, original)?;

    assert_eq!(patch_splash_background(&layout)?, ColorPatchOutcome::EntryMissing);
    assert_eq!(fs::read_to_string(layout.colors_file())?, original);
    Ok(())
  }

  #[test]
  fn reports_pending_background_change() -> Result<()> {
    let dir = tempdir()?;
    let layout = SplashProjectLayout::conventional(dir.path());
    write_colors(&layout, COLORS_XML)?;

    assert_eq!(
      pending_background_change(&layout)?,
      Some(PendingChange::BackgroundColor {
        current: "#000000".into(),
        expected: "#1a1040".into(),
      })
    );
    Ok(())
  }
}
