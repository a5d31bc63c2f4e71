//! # Storage
//!
//! Typed helpers over the two Soroban storage tiers used by the ledger.
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key             | Type      | Description                           |
//! |-----------------|-----------|---------------------------------------|
//! | `Owner`         | `Address` | Administrative identity               |
//! | `Token`         | `Address` | Payment token contract                |
//! | `Fee`           | `i128`    | Campaign creation fee                 |
//! | `MinFund`       | `i128`    | Minimum contribution                  |
//! | `Treasury`      | `i128`    | Uncollected creation fees             |
//! | `Paused`        | `bool`    | Emergency switch                      |
//! | `CampaignCount` | `u64`     | Auto-increment campaign ID counter    |
//! | `Locked`        | `bool`    | Reentrancy lock around payouts        |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                  | Type             | Description                  |
//! |----------------------|------------------|------------------------------|
//! | `CampConfig(id)`     | `CampaignConfig` | Immutable campaign config    |
//! | `CampState(id)`      | `CampaignState`  | Raised funds and closed flag |
//! | `Donations(id)`      | `DonationLog`    | Contribution history         |
//! | `OpenCampaign(addr)` | `u64`            | Fundraiser's unclosed campaign |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days remaining.

use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::types::{Campaign, CampaignConfig, CampaignState, DonationLog, LedgerConfig};
use crate::Error;

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Owner,
    Token,
    Fee,
    MinFund,
    Treasury,
    Paused,
    CampaignCount,
    Locked,
    CampConfig(u64),
    CampState(u64),
    Donations(u64),
    OpenCampaign(Address),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

/// Write the full initial configuration. Treasury starts empty, the ledger
/// unpaused and the counter at zero.
pub fn init_config(env: &Env, owner: &Address, token: &Address, fee: i128, min_fund: i128) {
    let instance = env.storage().instance();
    instance.set(&DataKey::Owner, owner);
    instance.set(&DataKey::Token, token);
    instance.set(&DataKey::Fee, &fee);
    instance.set(&DataKey::MinFund, &min_fund);
    instance.set(&DataKey::Treasury, &0i128);
    instance.set(&DataKey::Paused, &false);
    instance.set(&DataKey::CampaignCount, &0u64);
    bump_instance(env);
}

pub fn get_owner(env: &Env) -> Result<Address, Error> {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(Error::NotInitialized)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
    bump_instance(env);
}

pub fn get_token(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(Error::NotInitialized)
}

pub fn get_fee(env: &Env) -> i128 {
    env.storage().instance().get(&DataKey::Fee).unwrap_or(0)
}

pub fn set_fee(env: &Env, fee: i128) {
    env.storage().instance().set(&DataKey::Fee, &fee);
    bump_instance(env);
}

pub fn get_min_fund(env: &Env) -> i128 {
    env.storage().instance().get(&DataKey::MinFund).unwrap_or(0)
}

pub fn set_min_fund(env: &Env, min_fund: i128) {
    env.storage().instance().set(&DataKey::MinFund, &min_fund);
    bump_instance(env);
}

pub fn get_treasury(env: &Env) -> i128 {
    env.storage().instance().get(&DataKey::Treasury).unwrap_or(0)
}

pub fn set_treasury(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::Treasury, &amount);
    bump_instance(env);
}

pub fn is_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Paused)
        .unwrap_or(false)
}

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&DataKey::Paused, &paused);
    bump_instance(env);
}

pub fn is_locked(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Locked)
        .unwrap_or(false)
}

pub fn set_locked(env: &Env, locked: bool) {
    if locked {
        env.storage().instance().set(&DataKey::Locked, &true);
    } else {
        env.storage().instance().remove(&DataKey::Locked);
    }
}

/// Assemble the public configuration view.
pub fn load_ledger_config(env: &Env) -> Result<LedgerConfig, Error> {
    Ok(LedgerConfig {
        owner: get_owner(env)?,
        token: get_token(env)?,
        fee: get_fee(env),
        min_fund: get_min_fund(env),
        treasury: get_treasury(env),
        paused: is_paused(env),
    })
}

pub fn get_campaign_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::CampaignCount)
        .unwrap_or(0)
}

/// Reads, increments, and stores the campaign counter.
/// Returns the ID to use for the *current* campaign (pre-increment value).
pub fn get_and_increment_campaign_id(env: &Env) -> u64 {
    bump_instance(env);
    let current = get_campaign_count(env);
    env.storage()
        .instance()
        .set(&DataKey::CampaignCount, &(current + 1));
    current
}

// ── Persistent Storage Helpers ───────────────────────────────────────

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Store a freshly created campaign: config, zeroed state and an empty
/// donation log.
pub fn save_new_campaign(env: &Env, config: &CampaignConfig) {
    let config_key = DataKey::CampConfig(config.id);
    let state_key = DataKey::CampState(config.id);
    let log_key = DataKey::Donations(config.id);

    let state = CampaignState {
        raised_funds: 0,
        closed: false,
    };
    let log = DonationLog {
        contributors: Vec::new(env),
        amounts: Vec::new(env),
    };

    let persistent = env.storage().persistent();
    persistent.set(&config_key, config);
    persistent.set(&state_key, &state);
    persistent.set(&log_key, &log);
    bump_persistent(env, &config_key);
    bump_persistent(env, &state_key);
    bump_persistent(env, &log_key);
}

pub fn load_campaign_config(env: &Env, id: u64) -> Result<CampaignConfig, Error> {
    let key = DataKey::CampConfig(id);
    let config: CampaignConfig = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(Error::CampaignNotFound)?;
    bump_persistent(env, &key);
    Ok(config)
}

pub fn load_campaign_state(env: &Env, id: u64) -> Result<CampaignState, Error> {
    let key = DataKey::CampState(id);
    let state: CampaignState = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(Error::CampaignNotFound)?;
    bump_persistent(env, &key);
    Ok(state)
}

pub fn save_campaign_state(env: &Env, id: u64, state: &CampaignState) {
    let key = DataKey::CampState(id);
    env.storage().persistent().set(&key, state);
    bump_persistent(env, &key);
}

pub fn load_donations(env: &Env, id: u64) -> Result<DonationLog, Error> {
    let key = DataKey::Donations(id);
    let log: DonationLog = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(Error::CampaignNotFound)?;
    bump_persistent(env, &key);
    Ok(log)
}

pub fn save_donations(env: &Env, id: u64, log: &DonationLog) {
    let key = DataKey::Donations(id);
    env.storage().persistent().set(&key, log);
    bump_persistent(env, &key);
}

/// Load the full `Campaign` by combining config, state and donation log.
pub fn load_campaign(env: &Env, id: u64) -> Result<Campaign, Error> {
    let config = load_campaign_config(env, id)?;
    let state = load_campaign_state(env, id)?;
    let log = load_donations(env, id)?;
    Ok(Campaign {
        id: config.id,
        fundraiser: config.fundraiser,
        name: config.name,
        description: config.description,
        goal_fund: config.goal_fund,
        raised_funds: state.raised_funds,
        end_at: config.end_at,
        contributors: log.contributors,
        donations: log.amounts,
        closed: state.closed,
    })
}

// ── Open-campaign index ──────────────────────────────────────────────

pub fn get_open_campaign(env: &Env, fundraiser: &Address) -> Option<u64> {
    let key = DataKey::OpenCampaign(fundraiser.clone());
    let id = env.storage().persistent().get(&key);
    if id.is_some() {
        bump_persistent(env, &key);
    }
    id
}

pub fn set_open_campaign(env: &Env, fundraiser: &Address, id: u64) {
    let key = DataKey::OpenCampaign(fundraiser.clone());
    env.storage().persistent().set(&key, &id);
    bump_persistent(env, &key);
}

pub fn clear_open_campaign(env: &Env, fundraiser: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::OpenCampaign(fundraiser.clone()));
}
