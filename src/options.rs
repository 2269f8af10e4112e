//! Generation options and configuration.

use crate::capacity::{CapacityTable, FontSizeClass, Orientation};

/// What to do when row fields and schema columns do not line up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnmappedFieldPolicy {
    /// Silently drop unmapped fields and omit missing cells
    #[default]
    Skip,
    /// Fail on any unmapped field or missing cell
    Reject,
}

/// Options for generating a paginated table document.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Document title
    pub title: String,

    /// Font size class for table text
    pub font_size: FontSizeClass,

    /// Page orientation
    pub orientation: Orientation,

    /// Extra style rules, appended after the base rules
    pub styles: Vec<String>,

    /// Handling of fields without columns and columns without fields
    pub unmapped_fields: UnmappedFieldPolicy,

    /// Capacity lookup table
    pub capacity: CapacityTable,
}

impl GenerateOptions {
    /// Create new options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the font size class.
    pub fn with_font_size(mut self, font_size: FontSizeClass) -> Self {
        self.font_size = font_size;
        self
    }

    /// Set the page orientation.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Append one style rule.
    pub fn with_style(mut self, rule: impl Into<String>) -> Self {
        self.styles.push(rule.into());
        self
    }

    /// Append several style rules in order.
    pub fn with_styles<S: Into<String>>(mut self, rules: impl IntoIterator<Item = S>) -> Self {
        self.styles.extend(rules.into_iter().map(Into::into));
        self
    }

    /// Set the unmapped field policy.
    pub fn with_unmapped_fields(mut self, policy: UnmappedFieldPolicy) -> Self {
        self.unmapped_fields = policy;
        self
    }

    /// Reject unmapped fields and missing cells.
    pub fn strict(mut self) -> Self {
        self.unmapped_fields = UnmappedFieldPolicy::Reject;
        self
    }

    /// Use a custom capacity table.
    pub fn with_capacity_table(mut self, table: CapacityTable) -> Self {
        self.capacity = table;
        self
    }
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            title: String::new(),
            font_size: FontSizeClass::Small,
            orientation: Orientation::Portrait,
            styles: Vec::new(),
            unmapped_fields: UnmappedFieldPolicy::Skip,
            capacity: CapacityTable::standard(),
        }
    }
}
