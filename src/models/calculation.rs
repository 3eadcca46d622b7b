use serde::{Deserialize, Serialize};

/// One recorded kit calculation. Immutable once appended to a history.
///
/// All fields are kept as strings: that is how they travel in the XML
/// attributes and in the overlay blob, and nothing downstream needs the
/// numeric values back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KitCalculation {
    pub kit_number: String,
    pub raw_result: String,
    /// Always exactly 8 characters, left-zero-padded.
    pub padded_result: String,
    /// "YYYY-MM-DD HH:MM:SS"
    pub timestamp: String,
}
