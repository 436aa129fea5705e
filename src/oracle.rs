//! Price oracle adapter.
//!
//! The oracle is any contract exposing a SEP-40 style `lastprice` and
//! `decimals`. It is only consulted by read-only queries.

use soroban_sdk::{contractclient, contracttype, Address, Env, Symbol};

use crate::RegistryError;

/// Maximum age of a reported price, in seconds of ledger time.
pub const MAX_PRICE_AGE: u64 = 3_600;

/// Asset identifier understood by the oracle.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Asset {
    /// A token contract on this network.
    Stellar(Address),

    /// An off-chain asset by ticker.
    Other(Symbol),
}

/// A single price observation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PriceData {
    /// Price scaled by `10^decimals`.
    pub price: i128,

    /// Ledger timestamp (seconds) at which the price was recorded.
    pub timestamp: u64,
}

#[contractclient(name = "PriceOracleClient")]
pub trait PriceOracle {
    fn lastprice(env: Env, asset: Asset) -> Option<PriceData>;
    fn decimals(env: Env) -> u32;
}

/// Fetch and validate the latest price for `asset`.
pub fn latest_price(env: &Env, oracle: &Address, asset: &Asset) -> Result<PriceData, RegistryError> {
    let client = PriceOracleClient::new(env, oracle);

    let data = match client.try_lastprice(asset) {
        Ok(Ok(Some(data))) => data,
        _ => return Err(RegistryError::OracleUnavailable),
    };

    if data.price <= 0 {
        return Err(RegistryError::InvalidPrice);
    }

    if env.ledger().timestamp().saturating_sub(data.timestamp) > MAX_PRICE_AGE {
        return Err(RegistryError::StaleData);
    }

    Ok(data)
}

/// Convert `amount` token base units into the oracle's quote currency,
/// returned at the same base-unit scale as `amount`.
pub fn convert(env: &Env, oracle: &Address, asset: &Asset, amount: i128) -> Result<i128, RegistryError> {
    let data = latest_price(env, oracle, asset)?;

    let decimals = match PriceOracleClient::new(env, oracle).try_decimals() {
        Ok(Ok(decimals)) => decimals,
        _ => return Err(RegistryError::OracleUnavailable),
    };
    let scale = 10i128
        .checked_pow(decimals)
        .ok_or(RegistryError::Overflow)?;

    // Multiply first to keep precision
    let scaled = amount
        .checked_mul(data.price)
        .ok_or(RegistryError::Overflow)?;

    Ok(scaled / scale)
}
