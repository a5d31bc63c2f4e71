//! Event types emitted by the campaign ledger contract, as the indexer
//! stores and serves them.
//!
//! These mirror the events published in `contracts/campaign_ledger/src/events.rs`.

use serde::{Deserialize, Serialize};

use crate::errors::{IndexerError, Result};

/// All recognised event kinds from the campaign ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// A campaign was opened (`created` topic).
    CampaignCreated,
    /// A contribution was made (`funded` topic).
    CampaignFunded,
    /// A campaign was closed and paid out (`closed` topic).
    CampaignClosed,
    LedgerPaused,
    LedgerUnpaused,
    /// Creation fee changed (`fee_set` topic).
    FeeChanged,
    /// Minimum contribution changed (`minfund` topic).
    MinFundChanged,
    /// Ownership transferred (`owner_set` topic).
    OwnerChanged,
    /// Treasury withdrawn by the owner (`fee_coll` topic).
    FeeCollected,
    /// An event from this contract that we don't recognise.
    Unknown,
}

impl EventKind {
    /// Parse the leading topic symbol into an [`EventKind`].
    pub fn from_topic(topic: &str) -> Self {
        match topic {
            "created" => Self::CampaignCreated,
            "funded" => Self::CampaignFunded,
            "closed" => Self::CampaignClosed,
            "paused" => Self::LedgerPaused,
            "unpaused" => Self::LedgerUnpaused,
            "fee_set" => Self::FeeChanged,
            "minfund" => Self::MinFundChanged,
            "owner_set" => Self::OwnerChanged,
            "fee_coll" => Self::FeeCollected,
            _ => Self::Unknown,
        }
    }

    /// Identifier stored in the `event_type` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CampaignCreated => "campaign_created",
            Self::CampaignFunded => "campaign_funded",
            Self::CampaignClosed => "campaign_closed",
            Self::LedgerPaused => "ledger_paused",
            Self::LedgerUnpaused => "ledger_unpaused",
            Self::FeeChanged => "fee_changed",
            Self::MinFundChanged => "min_fund_changed",
            Self::OwnerChanged => "owner_changed",
            Self::FeeCollected => "fee_collected",
            Self::Unknown => "unknown",
        }
    }

    /// Whether the second topic of this event carries a campaign id.
    pub fn is_campaign_scoped(&self) -> bool {
        matches!(
            self,
            Self::CampaignCreated | Self::CampaignFunded | Self::CampaignClosed
        )
    }
}

/// A decoded ledger event, ready to be stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerEvent {
    /// RPC-assigned id; the deduplication key.
    pub event_id: String,
    pub event_type: String,
    pub campaign_id: Option<String>,
    pub actor: Option<String>,
    pub amount: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
}

/// An event row as read back from the database.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct EventRecord {
    pub id: i64,
    pub event_id: String,
    pub event_type: String,
    pub campaign_id: Option<String>,
    pub actor: Option<String>,
    pub amount: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
    pub created_at: i64,
}

/// Per-campaign totals derived from its indexed events.
///
/// Amounts are decimal strings of the ledger's `i128` smallest unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignSummary {
    pub campaign_id: String,
    pub fundraiser: Option<String>,
    pub goal: Option<String>,
    pub contributions: usize,
    pub total_raised: String,
    pub closed: bool,
    pub paid_out: Option<String>,
    pub last_ledger: i64,
}

impl CampaignSummary {
    /// Fold a campaign's events (any order) into a summary.
    pub fn from_events(campaign_id: &str, events: &[EventRecord]) -> Result<Self> {
        let mut summary = CampaignSummary {
            campaign_id: campaign_id.to_string(),
            fundraiser: None,
            goal: None,
            contributions: 0,
            total_raised: "0".to_string(),
            closed: false,
            paid_out: None,
            last_ledger: 0,
        };
        let mut raised: i128 = 0;

        for ev in events {
            summary.last_ledger = summary.last_ledger.max(ev.ledger);
            match ev.event_type.as_str() {
                "campaign_created" => {
                    summary.fundraiser = ev.actor.clone();
                    summary.goal = ev.amount.clone();
                }
                "campaign_funded" => {
                    summary.contributions += 1;
                    raised += parse_amount(campaign_id, ev.amount.as_deref())?;
                }
                "campaign_closed" => {
                    summary.closed = true;
                    summary.paid_out = ev.amount.clone();
                }
                _ => {}
            }
        }

        summary.total_raised = raised.to_string();
        Ok(summary)
    }
}

fn parse_amount(campaign_id: &str, raw: Option<&str>) -> Result<i128> {
    let raw = raw.unwrap_or("0");
    raw.parse().map_err(|_| IndexerError::InvalidAmount {
        campaign_id: campaign_id.to_string(),
        raw: raw.to_string(),
    })
}
