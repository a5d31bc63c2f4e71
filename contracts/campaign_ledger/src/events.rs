//! Event payloads and publishers.
//!
//! Campaign events use the topic `(symbol, campaign_id)` with a typed data
//! struct. Administrative events use a single-symbol topic.

use soroban_sdk::{contracttype, symbol_short, Address, Env, String};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignCreated {
    pub campaign_id: u64,
    pub fundraiser: Address,
    pub name: String,
    pub description: String,
    pub goal: i128,
    pub duration_minutes: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignFunded {
    pub campaign_id: u64,
    pub contributor: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignClosed {
    pub campaign_id: u64,
    pub raised: i128,
}

pub fn campaign_created(env: &Env, event: CampaignCreated) {
    env.events()
        .publish((symbol_short!("created"), event.campaign_id), event);
}

pub fn campaign_funded(env: &Env, event: CampaignFunded) {
    env.events()
        .publish((symbol_short!("funded"), event.campaign_id), event);
}

pub fn campaign_closed(env: &Env, event: CampaignClosed) {
    env.events()
        .publish((symbol_short!("closed"), event.campaign_id), event);
}

pub fn pause_changed(env: &Env, owner: &Address, paused: bool) {
    let topic = if paused {
        symbol_short!("paused")
    } else {
        symbol_short!("unpaused")
    };
    env.events().publish((topic,), owner.clone());
}

pub fn fee_changed(env: &Env, fee: i128) {
    env.events().publish((symbol_short!("fee_set"),), fee);
}

pub fn min_fund_changed(env: &Env, min_fund: i128) {
    env.events().publish((symbol_short!("minfund"),), min_fund);
}

pub fn owner_changed(env: &Env, new_owner: &Address) {
    env.events()
        .publish((symbol_short!("owner_set"),), new_owner.clone());
}

pub fn fee_collected(env: &Env, amount: i128) {
    env.events().publish((symbol_short!("fee_coll"),), amount);
}
