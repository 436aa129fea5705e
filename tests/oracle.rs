//! Price conversion tests against a mock SEP-40 feed.

use soroban_sdk::{
    contract, contractimpl, contracttype,
    testutils::{Address as _, Ledger},
    token::StellarAssetClient,
    Address, Env, String,
};
use soroban_fee_registry::{
    Asset, FeeRegistryContract, FeeRegistryContractClient, PriceData, RegistryError,
    DEFAULT_REGISTRATION_FEE, MAX_PRICE_AGE,
};

#[contracttype]
#[derive(Clone)]
enum MockKey {
    Price,
    Decimals,
    Broken,
}

#[contract]
pub struct MockOracle;

#[contractimpl]
impl MockOracle {
    pub fn set_price(env: Env, price: i128, timestamp: u64) {
        env.storage()
            .instance()
            .set(&MockKey::Price, &PriceData { price, timestamp });
    }

    pub fn set_decimals(env: Env, decimals: u32) {
        env.storage().instance().set(&MockKey::Decimals, &decimals);
    }

    pub fn set_broken(env: Env, broken: bool) {
        env.storage().instance().set(&MockKey::Broken, &broken);
    }

    pub fn lastprice(env: Env, asset: Asset) -> Option<PriceData> {
        let _ = asset;
        if env.storage().instance().get(&MockKey::Broken).unwrap_or(false) {
            panic!("feed offline");
        }
        env.storage().instance().get(&MockKey::Price)
    }

    pub fn decimals(env: Env) -> u32 {
        env.storage()
            .instance()
            .get(&MockKey::Decimals)
            .unwrap_or(14)
    }
}

const NOW: u64 = 100_000;

/// 0.12 quote units at 14 decimals.
const PRICE: i128 = 12_000_000_000_000;

struct Setup {
    env: Env,
    client: FeeRegistryContractClient<'static>,
    admin: Address,
    token: Address,
    oracle: MockOracleClient<'static>,
}

fn setup() -> Setup {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().with_mut(|li| li.timestamp = NOW);

    let admin = Address::generate(&env);
    let token = env.register_stellar_asset_contract_v2(admin.clone()).address();

    let oracle_id = env.register(MockOracle, ());
    let oracle = MockOracleClient::new(&env, &oracle_id);

    let contract_id = env.register(FeeRegistryContract, ());
    let client = FeeRegistryContractClient::new(&env, &contract_id);
    client.init(&admin, &token, &oracle_id);

    Setup {
        env,
        client,
        admin,
        token,
        oracle,
    }
}

#[test]
fn test_latest_price() {
    let s = setup();
    s.oracle.set_price(&PRICE, &(NOW - 60));

    let data = s.client.latest_price();
    assert_eq!(data.price, PRICE);
    assert_eq!(data.timestamp, NOW - 60);
}

#[test]
fn test_convert_multiplies_before_dividing() {
    let s = setup();
    s.oracle.set_price(&PRICE, &NOW);

    // 1 unit at 7 decimals -> 0.12 at 7 decimals
    assert_eq!(s.client.convert(&10_000_000), 1_200_000);

    // Dividing first would truncate this to zero
    assert_eq!(s.client.convert(&10), 1);
    assert_eq!(s.client.convert(&0), 0);
}

#[test]
fn test_convert_uses_oracle_decimals() {
    let s = setup();
    s.oracle.set_decimals(&7);
    s.oracle.set_price(&2_500_000, &NOW);

    assert_eq!(s.client.convert(&4_000_000), 1_000_000);
}

#[test]
fn test_missing_price() {
    let s = setup();

    assert_eq!(
        s.client.try_latest_price(),
        Err(Ok(RegistryError::OracleUnavailable))
    );
    assert_eq!(
        s.client.try_convert(&1_000),
        Err(Ok(RegistryError::OracleUnavailable))
    );
}

#[test]
fn test_failing_feed() {
    let s = setup();
    s.oracle.set_price(&PRICE, &NOW);
    s.oracle.set_broken(&true);

    assert_eq!(
        s.client.try_latest_price(),
        Err(Ok(RegistryError::OracleUnavailable))
    );
}

#[test]
fn test_non_positive_price() {
    let s = setup();

    s.oracle.set_price(&0, &NOW);
    assert_eq!(
        s.client.try_latest_price(),
        Err(Ok(RegistryError::InvalidPrice))
    );

    s.oracle.set_price(&-1, &NOW);
    assert_eq!(
        s.client.try_convert(&1_000),
        Err(Ok(RegistryError::InvalidPrice))
    );
}

#[test]
fn test_stale_price() {
    let s = setup();

    s.oracle.set_price(&PRICE, &(NOW - MAX_PRICE_AGE));
    assert!(s.client.try_latest_price().is_ok());

    s.oracle.set_price(&PRICE, &(NOW - MAX_PRICE_AGE - 1));
    assert_eq!(
        s.client.try_latest_price(),
        Err(Ok(RegistryError::StaleData))
    );
}

#[test]
fn test_convert_overflow() {
    let s = setup();
    s.oracle.set_price(&PRICE, &NOW);

    assert_eq!(
        s.client.try_convert(&i128::MAX),
        Err(Ok(RegistryError::Overflow))
    );
}

#[test]
fn test_set_oracle_switches_feed() {
    let s = setup();
    s.oracle.set_price(&PRICE, &NOW);

    let replacement_id = s.env.register(MockOracle, ());
    let replacement = MockOracleClient::new(&s.env, &replacement_id);
    replacement.set_price(&(PRICE * 2), &NOW);

    s.client.set_oracle(&s.admin, &replacement_id);
    assert_eq!(s.client.latest_price().price, PRICE * 2);
}

#[test]
fn test_mutations_never_consult_oracle() {
    let s = setup();
    s.oracle.set_broken(&true);

    let user = Address::generate(&s.env);
    StellarAssetClient::new(&s.env, &s.token).mint(&user, &1_000_000);

    let name = String::from_str(&s.env, "Alice");
    assert_eq!(
        s.client
            .register(&user, &name, &30, &false, &DEFAULT_REGISTRATION_FEE),
        1
    );
    s.client.deposit(&user, &500);
    assert_eq!(s.client.withdraw(&user), 500);
}
