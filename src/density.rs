//! Android screen density buckets used to key splash image resources.

use std::fmt;
use std::str::FromStr;

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

/// Named screen-resolution tier used by Android to select bitmap resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Density {
  /// Low density (~120dpi).
  Ldpi,
  /// Medium density (~160dpi), the baseline bucket.
  Mdpi,
  /// High density (~240dpi).
  Hdpi,
  /// Extra-high density (~320dpi).
  Xhdpi,
  /// Extra-extra-high density (~480dpi).
  Xxhdpi,
  /// Extra-extra-extra-high density (~640dpi).
  Xxxhdpi,
}

impl Density {
  /// Every bucket, ordered from lowest to highest resolution.
  pub const ALL: [Density; 6] = [
    Density::Ldpi,
    Density::Mdpi,
    Density::Hdpi,
    Density::Xhdpi,
    Density::Xxhdpi,
    Density::Xxxhdpi,
  ];

  /// The highest resolution bucket.
  pub const HIGHEST: Density = Density::Xxxhdpi;

  /// Resource qualifier for the bucket, e.g. `xhdpi`.
  pub fn as_str(self) -> &'static str {
    match self {
      Density::Ldpi => "ldpi",
      Density::Mdpi => "mdpi",
      Density::Hdpi => "hdpi",
      Density::Xhdpi => "xhdpi",
      Density::Xxhdpi => "xxhdpi",
      Density::Xxxhdpi => "xxxhdpi",
    }
  }

  /// Name of the generated drawable directory, e.g. `drawable-xhdpi`.
  pub fn drawable_dir_name(self) -> String {
    format!("drawable-{}", self.as_str())
  }

  /// Name of the authored source image, e.g. `xhdpi.png`.
  pub fn source_file_name(self) -> String {
    format!("{}.png", self.as_str())
  }
}

impl fmt::Display for Density {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Density {
  type Err = anyhow::Error;

  fn from_str(value: &str) -> Result<Self> {
    Density::ALL
      .into_iter()
      .find(|density| density.as_str().eq_ignore_ascii_case(value.trim()))
      .ok_or_else(|| anyhow!("unknown screen density `{value}`"))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn orders_buckets_from_lowest_to_highest() {
    let names: Vec<&str> = Density::ALL.iter().map(|d| d.as_str()).collect();
    assert_eq!(names, ["ldpi", "mdpi", "hdpi", "xhdpi", "xxhdpi", "xxxhdpi"]);
    assert_eq!(Density::ALL.last(), Some(&Density::HIGHEST));
  }

  #[test]
  fn derives_resource_names() {
    assert_eq!(Density::Hdpi.drawable_dir_name(), "drawable-hdpi");
    assert_eq!(Density::Xxhdpi.source_file_name(), "xxhdpi.png");
  }

  #[test]
  fn parses_qualifiers_case_insensitively() {
    assert_eq!("XXXHDPI".parse::<Density>().unwrap(), Density::Xxxhdpi);
    assert_eq!(" mdpi ".parse::<Density>().unwrap(), Density::Mdpi);
    assert!("tvdpi".parse::<Density>().is_err());
  }

  #[test]
  fn deserializes_lowercase_names() {
    let density: Density = serde_json::from_str("\"xhdpi\"").unwrap();
    assert_eq!(density, Density::Xhdpi);
  }
}
