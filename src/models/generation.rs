use crate::utils::time;
use serde::{Deserialize, Serialize};

/// One recorded phone number generation. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneGeneration {
    /// 9 decimal digits: 3-digit prefix + 6-digit suffix.
    pub number: String,
    /// The first 3 digits of `number`, repeated for convenience.
    pub prefix: String,
    /// "YYYY-MM-DD HH:MM:SS"
    pub timestamp: String,
}

impl PhoneGeneration {
    /// Build a record for a freshly generated 9-digit number,
    /// stamped with the current local time.
    pub fn new(number: String) -> Self {
        let prefix = number[..3].to_string();
        Self {
            number,
            prefix,
            timestamp: time::timestamp(),
        }
    }
}
