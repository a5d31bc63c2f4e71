extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events, Ledger as _},
    token, vec, Address, Env, IntoVal, String, TryIntoVal,
};

use crate::events::{CampaignClosed, CampaignCreated, CampaignFunded};
use crate::{CampaignLedger, CampaignLedgerClient, ONE_UNIT};

const FEE: i128 = ONE_UNIT / 100;
const MIN_FUND: i128 = ONE_UNIT / 10;

fn setup() -> (Env, CampaignLedgerClient<'static>, Address, Address) {
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
    (env, client, owner, token)
}

fn mint(env: &Env, token: &Address, to: &Address, amount: i128) {
    token::StellarAssetClient::new(env, token).mint(to, &amount);
}

#[test]
fn test_campaign_created_event() {
    let (env, client, _owner, token) = setup();
    let fundraiser = Address::generate(&env);
    let name = String::from_str(&env, "Library");
    let description = String::from_str(&env, "Books for the school");
    let goal = 25 * ONE_UNIT;
    mint(&env, &token, &fundraiser, FEE);

    let id = client.create_campaign(&fundraiser, &name, &description, &goal, &90, &FEE);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("created").into_val(&env),
        id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: CampaignCreated = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        CampaignCreated {
            campaign_id: id,
            fundraiser: fundraiser.clone(),
            name,
            description,
            goal,
            duration_minutes: 90,
        }
    );
}

#[test]
fn test_campaign_funded_event() {
    let (env, client, _owner, token) = setup();
    let fundraiser = Address::generate(&env);
    let contributor = Address::generate(&env);
    mint(&env, &token, &fundraiser, FEE);
    mint(&env, &token, &contributor, ONE_UNIT);

    let id = client.create_campaign(
        &fundraiser,
        &String::from_str(&env, "n"),
        &String::from_str(&env, "d"),
        &(10 * ONE_UNIT),
        &1,
        &FEE,
    );
    client.fund_campaign(&contributor, &id, &ONE_UNIT);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("funded").into_val(&env),
        id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: CampaignFunded = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        CampaignFunded {
            campaign_id: id,
            contributor: contributor.clone(),
            amount: ONE_UNIT,
        }
    );
}

#[test]
fn test_campaign_closed_event() {
    let (env, client, _owner, token) = setup();
    let fundraiser = Address::generate(&env);
    let contributor = Address::generate(&env);
    mint(&env, &token, &fundraiser, FEE);
    mint(&env, &token, &contributor, 3 * MIN_FUND);

    let id = client.create_campaign(
        &fundraiser,
        &String::from_str(&env, "n"),
        &String::from_str(&env, "d"),
        &(10 * ONE_UNIT),
        &1,
        &FEE,
    );
    client.fund_campaign(&contributor, &id, &MIN_FUND);
    client.fund_campaign(&contributor, &id, &(2 * MIN_FUND));

    env.ledger().with_mut(|li| li.timestamp += 60);
    client.close_campaign(&fundraiser, &id);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    let expected_topics = vec![
        &env,
        symbol_short!("closed").into_val(&env),
        id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: CampaignClosed = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        CampaignClosed {
            campaign_id: id,
            raised: 3 * MIN_FUND,
        }
    );
}

#[test]
fn test_fee_set_event() {
    let (env, client, owner, _token) = setup();
    client.change_fee(&owner, &(2 * FEE));

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    assert_eq!(
        last_event.1,
        vec![&env, symbol_short!("fee_set").into_val(&env)]
    );
    let fee: i128 = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(fee, 2 * FEE);
}

#[test]
fn test_min_fund_event() {
    let (env, client, owner, _token) = setup();
    client.change_min_fund(&owner, &ONE_UNIT);

    let last_event = env.events().all().last().expect("No events found");
    assert_eq!(last_event.0, client.address);
    assert_eq!(
        last_event.1,
        vec![&env, symbol_short!("minfund").into_val(&env)]
    );
    let min_fund: i128 = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(min_fund, ONE_UNIT);
}

#[test]
fn test_pause_events() {
    let (env, client, owner, _token) = setup();

    client.set_paused(&owner, &true);
    let last_event = env.events().all().last().expect("No events found");
    assert_eq!(
        last_event.1,
        vec![&env, symbol_short!("paused").into_val(&env)]
    );
    let by: Address = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(by, owner);

    client.set_paused(&owner, &false);
    let last_event = env.events().all().last().expect("No events found");
    assert_eq!(
        last_event.1,
        vec![&env, symbol_short!("unpaused").into_val(&env)]
    );
}

#[test]
fn test_owner_set_event() {
    let (env, client, owner, _token) = setup();
    let successor = Address::generate(&env);
    client.change_owner(&owner, &successor);

    let last_event = env.events().all().last().expect("No events found");
    assert_eq!(
        last_event.1,
        vec![&env, symbol_short!("owner_set").into_val(&env)]
    );
    let new_owner: Address = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(new_owner, successor);
}

#[test]
fn test_fee_collected_event() {
    let (env, client, owner, token) = setup();
    let fundraiser = Address::generate(&env);
    mint(&env, &token, &fundraiser, FEE);
    client.create_campaign(
        &fundraiser,
        &String::from_str(&env, "n"),
        &String::from_str(&env, "d"),
        &(10 * ONE_UNIT),
        &1,
        &FEE,
    );

    client.collect_fee(&owner);

    let last_event = env.events().all().last().expect("No events found");
    assert_eq!(
        last_event.1,
        vec![&env, symbol_short!("fee_coll").into_val(&env)]
    );
    let amount: i128 = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(amount, FEE);
}
