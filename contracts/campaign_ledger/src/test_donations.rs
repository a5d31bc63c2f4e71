extern crate std;

use soroban_sdk::{testutils::Address as _, token, Address, Env, String};

use crate::invariants::{
    assert_all_campaign_invariants, assert_campaign_immutable_fields, assert_funding_invariant,
};
use crate::{CampaignLedger, CampaignLedgerClient, ONE_UNIT};

const FEE: i128 = ONE_UNIT / 100;
const MIN_FUND: i128 = ONE_UNIT / 10;

fn setup() -> (Env, CampaignLedgerClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(CampaignLedger, ());
    let client = CampaignLedgerClient::new(&env, &contract_id);

    let owner = Address::generate(&env);
    let token_admin = Address::generate(&env);
    let token = env
        .register_stellar_asset_contract_v2(token_admin)
        .address();
    client.init(&owner, &token, &FEE, &MIN_FUND);
    (env, client, token)
}

fn open_campaign(env: &Env, client: &CampaignLedgerClient, token: &Address) -> u64 {
    let fundraiser = Address::generate(env);
    token::StellarAssetClient::new(env, token).mint(&fundraiser, &FEE);
    client.create_campaign(
        &fundraiser,
        &String::from_str(env, "Shelter"),
        &String::from_str(env, "Winter beds"),
        &(10 * ONE_UNIT),
        &60,
        &FEE,
    )
}

#[test]
fn test_donations_start_empty() {
    let (env, client, token) = setup();
    let id = open_campaign(&env, &client, &token);

    let (contributors, amounts) = client.get_donations(&id);
    assert_eq!(contributors.len(), 0);
    assert_eq!(amounts.len(), 0);
}

#[test]
fn test_each_contribution_is_recorded_in_order() {
    let (env, client, token) = setup();
    let id = open_campaign(&env, &client, &token);
    let sac = token::StellarAssetClient::new(&env, &token);

    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    sac.mint(&alice, &(2 * ONE_UNIT));
    sac.mint(&bob, &ONE_UNIT);

    client.fund_campaign(&alice, &id, &MIN_FUND);
    client.fund_campaign(&bob, &id, &ONE_UNIT);
    client.fund_campaign(&alice, &id, &(3 * MIN_FUND));

    let (contributors, amounts) = client.get_donations(&id);
    assert_eq!(
        contributors,
        soroban_sdk::vec![&env, alice.clone(), bob.clone(), alice.clone()]
    );
    assert_eq!(
        amounts,
        soroban_sdk::vec![&env, MIN_FUND, ONE_UNIT, 3 * MIN_FUND]
    );
}

#[test]
fn test_raised_matches_donations_after_every_contribution() {
    let (env, client, token) = setup();
    let id = open_campaign(&env, &client, &token);
    let sac = token::StellarAssetClient::new(&env, &token);
    let original = client.get_campaign(&id);

    let amounts = [MIN_FUND, ONE_UNIT, 7 * MIN_FUND, 12 * ONE_UNIT];
    for amount in amounts {
        let contributor = Address::generate(&env);
        sac.mint(&contributor, &amount);

        let before = client.get_campaign(&id).raised_funds;
        client.fund_campaign(&contributor, &id, &amount);
        let after = client.get_campaign(&id);

        assert_funding_invariant(before, after.raised_funds, amount);
        assert_all_campaign_invariants(&after);
        assert_campaign_immutable_fields(&original, &after);
    }
    assert_eq!(
        client.get_campaign(&id).raised_funds,
        amounts.iter().sum::<i128>()
    );
}

#[test]
fn test_donations_are_per_campaign() {
    let (env, client, token) = setup();
    let first = open_campaign(&env, &client, &token);
    let second = open_campaign(&env, &client, &token);
    let contributor = Address::generate(&env);
    token::StellarAssetClient::new(&env, &token).mint(&contributor, &ONE_UNIT);

    client.fund_campaign(&contributor, &second, &ONE_UNIT);

    assert_eq!(client.get_donations(&first).0.len(), 0);
    assert_eq!(client.get_donations(&second).0.len(), 1);
    assert_eq!(client.get_campaign(&first).raised_funds, 0);

    let info = client.get_campaigns_info();
    assert_eq!(info.get(0).unwrap().raised_funds, 0);
    assert_eq!(info.get(1).unwrap().raised_funds, ONE_UNIT);
}

#[test]
fn test_contributions_held_by_ledger() {
    let (env, client, token) = setup();
    let id = open_campaign(&env, &client, &token);
    let contributor = Address::generate(&env);
    token::StellarAssetClient::new(&env, &token).mint(&contributor, &ONE_UNIT);

    client.fund_campaign(&contributor, &id, &ONE_UNIT);

    let token_client = token::Client::new(&env, &token);
    assert_eq!(token_client.balance(&contributor), 0);
    assert_eq!(token_client.balance(&client.address), ONE_UNIT + FEE);
}
