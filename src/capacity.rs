//! Page capacity model.
//!
//! The external renderer cannot tell how many table rows fit on a printed
//! page, so capacity is calibrated ahead of time per font size and
//! orientation. A [`CapacityTable`] is plain configuration: it is built once,
//! validated, and passed to the generator explicitly.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Font-size tier used for table text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSizeClass {
    /// 12px text
    #[default]
    Small,
    /// 14px text
    Medium,
    /// 20px text
    Large,
}

impl FontSizeClass {
    /// All recognized classes, smallest first.
    pub const ALL: [FontSizeClass; 3] = [Self::Small, Self::Medium, Self::Large];

    /// Pixel size applied to body, row and cell text.
    pub fn pixels(self) -> u32 {
        match self {
            Self::Small => 12,
            Self::Medium => 14,
            Self::Large => 20,
        }
    }

    /// CSS length for the style sheet (e.g. `12px`).
    pub fn css_size(self) -> String {
        format!("{}px", self.pixels())
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

impl fmt::Display for FontSizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FontSizeClass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" | "12px" => Ok(Self::Small),
            "medium" | "14px" => Ok(Self::Medium),
            "large" | "20px" => Ok(Self::Large),
            other => Err(Error::Configuration(format!(
                "unknown font size class '{}'",
                other
            ))),
        }
    }
}

/// Page orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    /// Value passed to the renderer's orientation flag.
    pub fn renderer_name(self) -> &'static str {
        match self {
            Self::Portrait => "Portrait",
            Self::Landscape => "Landscape",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Portrait => "portrait",
            Self::Landscape => "landscape",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Orientation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "portrait" | "p" => Ok(Self::Portrait),
            "landscape" | "l" => Ok(Self::Landscape),
            other => Err(Error::Configuration(format!(
                "unknown orientation '{}'",
                other
            ))),
        }
    }
}

/// How many weighted row-units fit on one page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CapacityProfile {
    /// Row-units per page
    pub rows_per_page: u32,

    /// Cost of one wrapped line, in (0, 1]
    pub wrapped_line_weight: f64,
}

impl CapacityProfile {
    /// Create a validated profile.
    pub fn new(rows_per_page: u32, wrapped_line_weight: f64) -> Result<Self> {
        let profile = Self {
            rows_per_page,
            wrapped_line_weight,
        };
        profile.validate()?;
        Ok(profile)
    }

    /// Page capacity as a float for cost comparisons.
    pub fn capacity(&self) -> f64 {
        f64::from(self.rows_per_page)
    }

    fn validate(&self) -> Result<()> {
        if self.rows_per_page == 0 {
            return Err(Error::Configuration(
                "rows per page must be positive".to_string(),
            ));
        }
        let w = self.wrapped_line_weight;
        if !w.is_finite() || w <= 0.0 || w > 1.0 {
            return Err(Error::Configuration(format!(
                "wrapped line weight {} is outside (0, 1]",
                w
            )));
        }
        Ok(())
    }
}

/// One calibrated (font size, orientation) combination.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CapacityEntry {
    pub font_size: FontSizeClass,
    pub orientation: Orientation,
    pub rows_per_page: u32,
    pub wrapped_line_weight: f64,
}

impl CapacityEntry {
    fn profile(&self) -> CapacityProfile {
        CapacityProfile {
            rows_per_page: self.rows_per_page,
            wrapped_line_weight: self.wrapped_line_weight,
        }
    }
}

/// Immutable lookup table of capacity profiles.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CapacityTable {
    entries: Vec<CapacityEntry>,
}

/// Calibrated for the renderer's default font on Letter paper.
const STANDARD_WEIGHT: f64 = 0.9;

impl CapacityTable {
    /// Build a table from entries, rejecting invalid or duplicate ones.
    pub fn new(entries: Vec<CapacityEntry>) -> Result<Self> {
        for (i, entry) in entries.iter().enumerate() {
            entry.profile().validate()?;
            let duplicate = entries[..i].iter().any(|e| {
                e.font_size == entry.font_size && e.orientation == entry.orientation
            });
            if duplicate {
                return Err(Error::Configuration(format!(
                    "duplicate capacity entry for {} {}",
                    entry.font_size, entry.orientation
                )));
            }
        }
        Ok(Self { entries })
    }

    /// The stock table for the three built-in font sizes.
    pub fn standard() -> Self {
        let row = |font_size, orientation, rows_per_page| CapacityEntry {
            font_size,
            orientation,
            rows_per_page,
            wrapped_line_weight: STANDARD_WEIGHT,
        };
        Self {
            entries: vec![
                row(FontSizeClass::Small, Orientation::Portrait, 54),
                row(FontSizeClass::Small, Orientation::Landscape, 40),
                row(FontSizeClass::Medium, Orientation::Portrait, 48),
                row(FontSizeClass::Medium, Orientation::Landscape, 36),
                row(FontSizeClass::Large, Orientation::Portrait, 35),
                row(FontSizeClass::Large, Orientation::Landscape, 26),
            ],
        }
    }

    /// Parse and validate a table from a JSON array of entries.
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<CapacityEntry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    /// Look up the profile for a font size and orientation.
    pub fn resolve(&self, font_size: FontSizeClass, orientation: Orientation) -> Result<CapacityProfile> {
        self.entries
            .iter()
            .find(|e| e.font_size == font_size && e.orientation == orientation)
            .map(CapacityEntry::profile)
            .ok_or_else(|| {
                Error::Configuration(format!(
                    "no capacity profile for {} {}",
                    font_size, orientation
                ))
            })
    }

    /// Look up a profile from textual font size and orientation names.
    pub fn resolve_str(&self, font_size: &str, orientation: &str) -> Result<CapacityProfile> {
        self.resolve(font_size.parse()?, orientation.parse()?)
    }

    pub fn entries(&self) -> &[CapacityEntry] {
        &self.entries
    }
}

impl Default for CapacityTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Resolve a profile from the standard table.
pub fn resolve_capacity(font_size: FontSizeClass, orientation: Orientation) -> Result<CapacityProfile> {
    CapacityTable::standard().resolve(font_size, orientation)
}
