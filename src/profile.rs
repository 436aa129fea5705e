//! Profile struct and related types.

use soroban_sdk::{contracttype, Env, String};

/// Registered user profile.
///
/// Written once by `register` and never mutated afterwards.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Profile {
    /// Display name, 1 to 32 bytes.
    pub name: String,

    /// Age at registration.
    pub age: u32,

    /// Marital status flag.
    pub married: bool,

    /// Sequential id assigned at registration, starting at 1.
    /// Zero is reserved for "no profile".
    pub id: u64,
}

impl Profile {
    /// Create a new profile.
    pub fn new(name: String, age: u32, married: bool, id: u64) -> Self {
        Self {
            name,
            age,
            married,
            id,
        }
    }

    /// The zero-valued profile reported for unregistered addresses.
    pub fn empty(env: &Env) -> Self {
        Self {
            name: String::from_str(env, ""),
            age: 0,
            married: false,
            id: 0,
        }
    }
}
