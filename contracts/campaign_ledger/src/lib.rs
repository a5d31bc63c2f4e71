//! # Campaign Ledger Contract
//!
//! A crowdfunding ledger: fundraisers open campaigns by paying a platform
//! fee, contributors fund them until their deadline, and the fundraiser
//! closes the campaign afterwards to withdraw everything raised. Creation
//! fees accrue in a treasury the owner can collect.
//!
//! | Phase        | Entry Point(s)                                             |
//! |--------------|------------------------------------------------------------|
//! | Bootstrap    | [`CampaignLedger::init`]                                   |
//! | Creation     | [`CampaignLedger::create_campaign`]                        |
//! | Funding      | [`CampaignLedger::fund_campaign`]                          |
//! | Closure      | [`CampaignLedger::close_campaign`]                         |
//! | Owner admin  | `set_paused`, `change_fee`, `change_min_fund`, `change_owner`, `collect_fee` |
//! | Queries      | `get_campaigns_info`, `get_campaign`, `get_donations`, `time_left`, `get_config`, `campaign_count`, `open_campaign_of` |
//!
//! ## Architecture
//!
//! Storage access is delegated to [`storage`], event emission to [`events`]
//! and the payout lock to [`guard`]. Every entry point runs as one Soroban
//! invocation: returning an [`Error`] rolls back all of its writes, so a
//! failed call never leaves partial state behind.
//!
//! Outgoing transfers follow checks-effects-interactions: the campaign is
//! marked closed (or the treasury zeroed) before the token transfer runs.

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, token, Address, Env, String, Vec};

mod events;
mod guard;
mod storage;
mod types;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_donations;
#[cfg(test)]
mod test_events;

use guard::ReentrancyGuard;
pub use events::{CampaignClosed, CampaignCreated, CampaignFunded};
pub use types::{Campaign, LedgerConfig, MIN_GOAL, ONE_UNIT};
use types::CampaignConfig;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    Paused                  = 1,
    DuplicateActiveCampaign = 2,
    IncorrectFee            = 3,
    GoalTooSmall            = 4,
    InvalidDuration         = 5,
    BelowMinimum            = 6,
    CampaignEnded           = 7,
    NotCreator              = 8,
    Reentrant               = 9,
    StillActive             = 10,
    AlreadyClosed           = 11,
    PayoutFailed            = 12,
    NotOwner                = 13,
    InvalidAddress          = 14,
    EmptyTreasury           = 15,
    CampaignNotFound        = 16,
    AlreadyInitialized      = 17,
    NotInitialized          = 18,
    NegativeAmount          = 19,
}

#[contract]
pub struct CampaignLedger;

#[contractimpl]
impl CampaignLedger {
    // ─────────────────────────────────────────────────────────
    // Initialisation
    // ─────────────────────────────────────────────────────────

    /// Initialise the ledger.
    ///
    /// Must be called exactly once after deployment; `owner` must sign.
    /// `token` is the asset every fee, contribution and payout is made in.
    pub fn init(
        env: Env,
        owner: Address,
        token: Address,
        fee: i128,
        min_fund: i128,
    ) -> Result<(), Error> {
        owner.require_auth();
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        if fee < 0 || min_fund < 0 {
            return Err(Error::NegativeAmount);
        }
        storage::init_config(&env, &owner, &token, fee, min_fund);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Campaign lifecycle
    // ─────────────────────────────────────────────────────────

    /// Open a new campaign and return its ID.
    ///
    /// `payment` must be non-negative and equal the current fee exactly; it is pulled from
    /// `caller` and credited to the treasury. A fundraiser may hold only one
    /// unclosed campaign at a time.
    pub fn create_campaign(
        env: Env,
        caller: Address,
        name: String,
        description: String,
        goal_fund: i128,
        duration_minutes: u64,
        payment: i128,
    ) -> Result<u64, Error> {
        caller.require_auth();
        let token = storage::get_token(&env)?;

        if storage::is_paused(&env) {
            return Err(Error::Paused);
        }
        if storage::get_open_campaign(&env, &caller).is_some() {
            return Err(Error::DuplicateActiveCampaign);
        }
        if payment < 0 {
            return Err(Error::NegativeAmount);
        }
        if payment != storage::get_fee(&env) {
            return Err(Error::IncorrectFee);
        }
        if goal_fund < MIN_GOAL {
            return Err(Error::GoalTooSmall);
        }
        if duration_minutes == 0 {
            return Err(Error::InvalidDuration);
        }
        let end_at = duration_minutes
            .checked_mul(60)
            .and_then(|secs| env.ledger().timestamp().checked_add(secs))
            .ok_or(Error::InvalidDuration)?;

        storage::set_treasury(&env, storage::get_treasury(&env) + payment);

        let id = storage::get_and_increment_campaign_id(&env);
        let config = CampaignConfig {
            id,
            fundraiser: caller.clone(),
            name: name.clone(),
            description: description.clone(),
            goal_fund,
            end_at,
        };
        storage::save_new_campaign(&env, &config);
        storage::set_open_campaign(&env, &caller, id);

        receive_payment(&env, &token, &caller, payment);

        events::campaign_created(
            &env,
            CampaignCreated {
                campaign_id: id,
                fundraiser: caller,
                name,
                description,
                goal: goal_fund,
                duration_minutes,
            },
        );
        Ok(id)
    }

    /// Contribute `payment` to a campaign that has not reached its deadline.
    /// Negative payments are rejected whatever the configured minimum.
    ///
    /// The deadline is the only funding gate; contributions beyond the goal
    /// are accepted.
    pub fn fund_campaign(
        env: Env,
        caller: Address,
        campaign_id: u64,
        payment: i128,
    ) -> Result<(), Error> {
        caller.require_auth();
        let token = storage::get_token(&env)?;

        if storage::is_paused(&env) {
            return Err(Error::Paused);
        }
        let config = storage::load_campaign_config(&env, campaign_id)?;
        if env.ledger().timestamp() >= config.end_at {
            return Err(Error::CampaignEnded);
        }
        if payment < 0 {
            return Err(Error::NegativeAmount);
        }
        if payment < storage::get_min_fund(&env) {
            return Err(Error::BelowMinimum);
        }

        let mut state = storage::load_campaign_state(&env, campaign_id)?;
        let mut log = storage::load_donations(&env, campaign_id)?;
        log.contributors.push_back(caller.clone());
        log.amounts.push_back(payment);
        state.raised_funds += payment;
        storage::save_donations(&env, campaign_id, &log);
        storage::save_campaign_state(&env, campaign_id, &state);

        receive_payment(&env, &token, &caller, payment);

        events::campaign_funded(
            &env,
            CampaignFunded {
                campaign_id,
                contributor: caller,
                amount: payment,
            },
        );
        Ok(())
    }

    /// Close an ended campaign and pay everything it raised to its
    /// fundraiser.
    ///
    /// Only the campaign's own fundraiser may close it. The campaign is
    /// marked closed before the transfer; if the transfer fails the call
    /// returns [`Error::PayoutFailed`] and nothing is persisted, so it can be
    /// retried.
    pub fn close_campaign(env: Env, caller: Address, campaign_id: u64) -> Result<(), Error> {
        caller.require_auth();
        let token = storage::get_token(&env)?;

        let config = storage::load_campaign_config(&env, campaign_id)?;
        if config.fundraiser != caller {
            return Err(Error::NotCreator);
        }
        let _lock = ReentrancyGuard::acquire(&env)?;

        if storage::is_paused(&env) {
            return Err(Error::Paused);
        }
        if env.ledger().timestamp() < config.end_at {
            return Err(Error::StillActive);
        }
        let mut state = storage::load_campaign_state(&env, campaign_id)?;
        if state.closed {
            return Err(Error::AlreadyClosed);
        }

        let raised = state.raised_funds;
        state.closed = true;
        storage::save_campaign_state(&env, campaign_id, &state);
        storage::clear_open_campaign(&env, &caller);

        if raised > 0 {
            send_payout(&env, &token, &caller, raised)?;
        }

        events::campaign_closed(&env, CampaignClosed { campaign_id, raised });
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    /// Every campaign, in creation order.
    pub fn get_campaigns_info(env: Env) -> Result<Vec<Campaign>, Error> {
        let mut campaigns = Vec::new(&env);
        for id in 0..storage::get_campaign_count(&env) {
            campaigns.push_back(storage::load_campaign(&env, id)?);
        }
        Ok(campaigns)
    }

    pub fn get_campaign(env: Env, campaign_id: u64) -> Result<Campaign, Error> {
        storage::load_campaign(&env, campaign_id)
    }

    /// Contributors and their amounts for one campaign, index-aligned.
    pub fn get_donations(env: Env, campaign_id: u64) -> Result<(Vec<Address>, Vec<i128>), Error> {
        let log = storage::load_donations(&env, campaign_id)?;
        Ok((log.contributors, log.amounts))
    }

    /// Seconds until the campaign's deadline, or 0 once it has passed.
    pub fn time_left(env: Env, campaign_id: u64) -> Result<u64, Error> {
        let config = storage::load_campaign_config(&env, campaign_id)?;
        Ok(config.end_at.saturating_sub(env.ledger().timestamp()))
    }

    pub fn get_config(env: Env) -> Result<LedgerConfig, Error> {
        storage::load_ledger_config(&env)
    }

    pub fn campaign_count(env: Env) -> u64 {
        storage::get_campaign_count(&env)
    }

    /// The unclosed campaign `fundraiser` currently runs, if any.
    pub fn open_campaign_of(env: Env, fundraiser: Address) -> Option<u64> {
        storage::get_open_campaign(&env, &fundraiser)
    }

    // ─────────────────────────────────────────────────────────
    // Owner administration
    // ─────────────────────────────────────────────────────────

    /// Toggle the emergency switch. While paused, creating, funding and
    /// closing campaigns are all rejected.
    pub fn set_paused(env: Env, caller: Address, paused: bool) -> Result<(), Error> {
        require_owner(&env, &caller)?;
        storage::set_paused(&env, paused);
        events::pause_changed(&env, &caller, paused);
        Ok(())
    }

    pub fn change_fee(env: Env, caller: Address, fee: i128) -> Result<(), Error> {
        require_owner(&env, &caller)?;
        if fee < 0 {
            return Err(Error::NegativeAmount);
        }
        storage::set_fee(&env, fee);
        events::fee_changed(&env, fee);
        Ok(())
    }

    pub fn change_min_fund(env: Env, caller: Address, min_fund: i128) -> Result<(), Error> {
        require_owner(&env, &caller)?;
        if min_fund < 0 {
            return Err(Error::NegativeAmount);
        }
        storage::set_min_fund(&env, min_fund);
        events::min_fund_changed(&env, min_fund);
        Ok(())
    }

    /// Hand ownership to `new_owner`.
    ///
    /// The ledger's own address is rejected: nothing could ever sign for it,
    /// so ownership would be lost.
    pub fn change_owner(env: Env, caller: Address, new_owner: Address) -> Result<(), Error> {
        require_owner(&env, &caller)?;
        if new_owner == env.current_contract_address() {
            return Err(Error::InvalidAddress);
        }
        storage::set_owner(&env, &new_owner);
        events::owner_changed(&env, &new_owner);
        Ok(())
    }

    /// Withdraw the whole treasury to the owner.
    ///
    /// The treasury is zeroed before the transfer; a failed transfer returns
    /// [`Error::PayoutFailed`] and the treasury is restored by the rollback.
    pub fn collect_fee(env: Env, caller: Address) -> Result<i128, Error> {
        require_owner(&env, &caller)?;
        let token = storage::get_token(&env)?;

        let amount = storage::get_treasury(&env);
        if amount <= 0 {
            return Err(Error::EmptyTreasury);
        }
        storage::set_treasury(&env, 0);

        send_payout(&env, &token, &caller, amount)?;

        events::fee_collected(&env, amount);
        Ok(amount)
    }
}

// ─────────────────────────────────────────────────────────
// Internal helpers
// ─────────────────────────────────────────────────────────

fn require_owner(env: &Env, caller: &Address) -> Result<(), Error> {
    caller.require_auth();
    if *caller != storage::get_owner(env)? {
        return Err(Error::NotOwner);
    }
    Ok(())
}

/// Pull an attached payment from `from` into the ledger.
fn receive_payment(env: &Env, token: &Address, from: &Address, amount: i128) {
    if amount > 0 {
        token::Client::new(env, token).transfer(from, &env.current_contract_address(), &amount);
    }
}

/// Transfer `amount` out of the ledger, mapping any token failure to
/// [`Error::PayoutFailed`].
fn send_payout(env: &Env, token: &Address, to: &Address, amount: i128) -> Result<(), Error> {
    let client = token::Client::new(env, token);
    match client.try_transfer(&env.current_contract_address(), to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(Error::PayoutFailed),
    }
}
