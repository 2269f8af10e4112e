//! Column schema types.

use serde::{Deserialize, Deserializer, Serialize};

/// One column of the table schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSpec {
    /// Display label shown in the header row
    pub name: String,

    /// Row field this column reads
    #[serde(alias = "dataIndex")]
    pub data_key: String,

    /// Maximum characters per wrapped line; 0 is rejected at generation
    #[serde(alias = "charLimit", deserialize_with = "non_negative_width")]
    pub wrap_width: usize,
}

impl ColumnSpec {
    /// Create a column spec.
    pub fn new(name: impl Into<String>, data_key: impl Into<String>, wrap_width: usize) -> Self {
        Self {
            name: name.into(),
            data_key: data_key.into(),
            wrap_width,
        }
    }
}

/// Decode a width that may be written as a negative number.
///
/// Negative widths map to 0 so they fail validation as an invalid argument
/// instead of as a decoding error.
fn non_negative_width<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let width = i64::deserialize(deserializer)?;
    Ok(usize::try_from(width).unwrap_or(0))
}

/// Header labels shared by every page block of one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    pub labels: Vec<String>,
}

impl Header {
    /// Build the header from the schema, in column order.
    pub fn from_columns(columns: &[ColumnSpec]) -> Self {
        Self {
            labels: columns.iter().map(|c| c.name.clone()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
