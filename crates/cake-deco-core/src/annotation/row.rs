//! Annotation rows and decoration labels.

use serde::{Deserialize, Serialize};

use crate::config::FEATURE_DIM;

/// A binary decoration label as stored in the annotation CSV.
///
/// Serialized exactly as `"yes"` / `"no"`. Any other string is rejected
/// when the CSV is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Yes,
    No,
}

impl Label {
    /// Numeric encoding used for clustering: yes -> 1.0, no -> 0.0.
    #[inline]
    pub fn as_feature(self) -> f32 {
        match self {
            Label::Yes => 1.0,
            Label::No => 0.0,
        }
    }

    /// The CSV spelling of the label.
    pub fn as_str(self) -> &'static str {
        match self {
            Label::Yes => "yes",
            Label::No => "no",
        }
    }
}

/// One annotation table entry, keyed by image file name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationRow {
    /// Relative image file name; unique within the table.
    pub file_name: String,
    pub cream: Label,
    pub fruits: Label,
    pub sprinkle_toppings: Label,
}

impl AnnotationRow {
    /// Row as created at bootstrap time.
    ///
    /// Defaults are fixed constants, never inferred from image content:
    /// cream=yes, fruits=no, sprinkle_toppings=no.
    pub fn with_defaults(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            cream: Label::Yes,
            fruits: Label::No,
            sprinkle_toppings: Label::No,
        }
    }

    /// The 3D binary feature vector (cream, fruits, sprinkle_toppings).
    pub fn feature_vector(&self) -> [f32; FEATURE_DIM] {
        [
            self.cream.as_feature(),
            self.fruits.as_feature(),
            self.sprinkle_toppings.as_feature(),
        ]
    }
}
