#![allow(dead_code)]

extern crate std;

use crate::types::{Campaign, MIN_GOAL};

/// INV-1: A stored campaign's goal is never below the minimum.
pub fn assert_goal_at_least_min(campaign: &Campaign) {
    assert!(
        campaign.goal_fund >= MIN_GOAL,
        "INV-1 violated: campaign {} has goal {} below minimum {}",
        campaign.id,
        campaign.goal_fund,
        MIN_GOAL
    );
}

/// INV-2: Contributor and donation sequences are index-aligned.
pub fn assert_donations_aligned(campaign: &Campaign) {
    assert_eq!(
        campaign.contributors.len(),
        campaign.donations.len(),
        "INV-2 violated: campaign {} has {} contributors but {} donations",
        campaign.id,
        campaign.contributors.len(),
        campaign.donations.len()
    );
}

/// INV-3: Raised funds equal the sum of recorded donations.
pub fn assert_raised_matches_donations(campaign: &Campaign) {
    let sum: i128 = campaign.donations.iter().sum();
    assert_eq!(
        campaign.raised_funds, sum,
        "INV-3 violated: campaign {} raised {} but donations sum to {}",
        campaign.id, campaign.raised_funds, sum
    );
}

/// INV-4: Funding adds exactly the contributed amount.
pub fn assert_funding_invariant(raised_before: i128, raised_after: i128, amount: i128) {
    assert_eq!(
        raised_after,
        raised_before + amount,
        "INV-4 violated: funding invariant broken: {} + {} != {}",
        raised_before,
        amount,
        raised_after
    );
}

/// INV-5: Campaign IDs are sequential starting from 0.
pub fn assert_sequential_ids(campaigns: &[Campaign]) {
    for (i, campaign) in campaigns.iter().enumerate() {
        assert_eq!(
            campaign.id, i as u64,
            "INV-5 violated: expected id {}, got {}",
            i, campaign.id
        );
    }
}

/// INV-6: Fields fixed at creation never change.
pub fn assert_campaign_immutable_fields(original: &Campaign, current: &Campaign) {
    assert_eq!(original.id, current.id, "INV-6 violated: campaign id changed");
    assert_eq!(
        original.fundraiser, current.fundraiser,
        "INV-6 violated: campaign fundraiser changed"
    );
    assert_eq!(
        original.name, current.name,
        "INV-6 violated: campaign name changed"
    );
    assert_eq!(
        original.description, current.description,
        "INV-6 violated: campaign description changed"
    );
    assert_eq!(
        original.goal_fund, current.goal_fund,
        "INV-6 violated: campaign goal changed"
    );
    assert_eq!(
        original.end_at, current.end_at,
        "INV-6 violated: campaign deadline changed"
    );
}

/// INV-7: `closed` is one-way.
pub fn assert_closed_is_terminal(before: &Campaign, after: &Campaign) {
    assert!(
        !before.closed || after.closed,
        "INV-7 violated: campaign {} reopened",
        after.id
    );
}

/// Run all stateless campaign invariants.
pub fn assert_all_campaign_invariants(campaign: &Campaign) {
    assert_goal_at_least_min(campaign);
    assert_donations_aligned(campaign);
    assert_raised_matches_donations(campaign);
}
