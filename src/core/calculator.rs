//! Kit calculator: fixed-width subtraction from 10^10.

use crate::errors::{AppError, AppResult};
use crate::models::KitCalculation;
use crate::utils::{formatting, time};

/// Exclusive upper bound of the input domain.
pub const KIT_LIMIT: i64 = 10_000_000_000;
/// Results at or above this would need 9+ digits and cannot be padded
/// to the fixed width. Kit numbers of 9,900,000,000 or less hit it.
pub const RESULT_LIMIT: i64 = 100_000_000;
/// Width of the padded result.
pub const PAD_WIDTH: usize = 8;

/// Compute a kit calculation, stamped with the current local time.
/// Pure apart from the timestamp; appending to a history is the
/// caller's business.
pub fn compute(kit_number: i64) -> AppResult<KitCalculation> {
    if !(0..KIT_LIMIT).contains(&kit_number) {
        return Err(AppError::InvalidKitNumber(kit_number.to_string()));
    }

    let raw_result = KIT_LIMIT - kit_number;
    if raw_result >= RESULT_LIMIT {
        return Err(AppError::KitOverflow(kit_number));
    }

    Ok(KitCalculation {
        kit_number: kit_number.to_string(),
        raw_result: raw_result.to_string(),
        padded_result: formatting::zero_pad(raw_result, PAD_WIDTH),
        timestamp: time::timestamp(),
    })
}
