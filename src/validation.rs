//! Registration input validation.
//!
//! - Name: 1 to 32 bytes of UTF-8
//! - Age: at least 18 at registration

use soroban_sdk::String;

/// Minimum name length in bytes.
pub const MIN_NAME_LENGTH: u32 = 1;

/// Maximum name length in bytes.
pub const MAX_NAME_LENGTH: u32 = 32;

/// Minimum age accepted at registration.
pub const MIN_AGE: u32 = 18;

/// Validate a profile name.
///
/// Length is measured in bytes, so multi-byte characters count for more
/// than one unit.
pub fn validate_name(name: &String) -> bool {
    let len = name.len();
    (MIN_NAME_LENGTH..=MAX_NAME_LENGTH).contains(&len)
}

/// Validate the registrant's age.
#[inline]
pub fn validate_age(age: u32) -> bool {
    age >= MIN_AGE
}

/// Fees must be strictly positive.
#[inline]
pub fn validate_fee(fee: i128) -> bool {
    fee > 0
}
