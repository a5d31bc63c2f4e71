//! # Types
//!
//! Shared data structures used across the campaign ledger.
//!
//! ## Config / State split
//!
//! A `Campaign` is stored as three separate ledger entries:
//!
//! - [`CampaignConfig`] — written once at creation; never mutated.
//! - [`CampaignState`] — written on every contribution and on closure.
//! - [`DonationLog`] — append-only contribution history.
//!
//! The public API exposes the reconstructed [`Campaign`] struct.
//!
//! ## Lifecycle
//!
//! ```text
//! create ──► open (now < end_at, accepts funding)
//!              │
//!              ▼
//!            ended (now >= end_at, awaiting close)
//!              │  close_campaign
//!              ▼
//!            closed (terminal, raised funds paid out)
//! ```

use soroban_sdk::{contracttype, Address, String, Vec};

/// Smallest-unit value of one whole token (7 decimals).
pub const ONE_UNIT: i128 = 10_000_000;

/// Lowest goal a campaign may be created with.
pub const MIN_GOAL: i128 = ONE_UNIT;

/// Immutable campaign configuration, written once at creation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignConfig {
    pub id: u64,
    pub fundraiser: Address,
    pub name: String,
    pub description: String,
    pub goal_fund: i128,
    pub end_at: u64,
}

/// Mutable campaign state, updated on contributions and closure.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignState {
    pub raised_funds: i128,
    pub closed: bool,
}

/// Contribution history. `contributors[i]` paid `amounts[i]`; one entry per
/// funding call, so repeat contributors appear more than once.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DonationLog {
    pub contributors: Vec<Address>,
    pub amounts: Vec<i128>,
}

/// Full on-chain representation of a campaign.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Campaign {
    /// Sequential identifier, starting at 0.
    pub id: u64,
    /// Address that created the campaign and receives its payout.
    pub fundraiser: Address,
    pub name: String,
    pub description: String,
    /// Target amount. Overfunding beyond it is allowed.
    pub goal_fund: i128,
    /// Sum of every contribution.
    pub raised_funds: i128,
    /// Ledger timestamp at which funding stops and closing becomes possible.
    pub end_at: u64,
    pub contributors: Vec<Address>,
    pub donations: Vec<i128>,
    /// Set once the raised funds have been paid out.
    pub closed: bool,
}

/// Snapshot of the global ledger configuration.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LedgerConfig {
    pub owner: Address,
    /// Token contract every payment is denominated in.
    pub token: Address,
    /// Exact payment required to create a campaign.
    pub fee: i128,
    /// Minimum accepted contribution.
    pub min_fund: i128,
    /// Creation fees not yet collected by the owner.
    pub treasury: i128,
    pub paused: bool,
}
