#![cfg(test)]

use crate::errors::ContractError;
use crate::subscription_management::{SubscriptionManagement, SubscriptionManagementClient};
use soroban_sdk::testutils::{Address as _, Ledger as _, MockAuth, MockAuthInvoke};
use soroban_sdk::{Address, Env, IntoVal};

fn setup_test(env: &Env) -> SubscriptionManagementClient<'_> {
    let contract_id = env.register(SubscriptionManagement, ());
    SubscriptionManagementClient::new(env, &contract_id)
}

#[test]
fn test_initialize_stores_config() {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_sequence_number(42);
    let client = setup_test(&env);

    let admin = Address::generate(&env);
    let token = Address::generate(&env);
    client.initialize(&admin, &token);

    assert_eq!(client.get_admin(), admin);
    assert_eq!(client.get_token(), token);

    let info = client.get_contract_info();
    assert_eq!(info.admin, admin);
    assert_eq!(info.token, token);
    assert_eq!(info.initialized_at, 42);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #2)")]
fn test_initialize_twice_fails() {
    let env = Env::default();
    env.mock_all_auths();
    let client = setup_test(&env);

    let admin = Address::generate(&env);
    let token = Address::generate(&env);
    client.initialize(&admin, &token);

    let other_token = Address::generate(&env);
    client.initialize(&admin, &other_token);
}

#[test]
fn test_reinitialize_keeps_original_token() {
    let env = Env::default();
    env.mock_all_auths();
    let client = setup_test(&env);

    let admin = Address::generate(&env);
    let token = Address::generate(&env);
    client.initialize(&admin, &token);

    let attacker = Address::generate(&env);
    let attacker_token = Address::generate(&env);
    let result = client.try_initialize(&attacker, &attacker_token);
    assert_eq!(result, Err(Ok(ContractError::AlreadyInitialized)));

    assert_eq!(client.get_admin(), admin);
    assert_eq!(client.get_token(), token);
}

#[test]
fn test_reads_before_initialize_fail() {
    let env = Env::default();
    let client = setup_test(&env);

    assert_eq!(client.try_get_admin(), Err(Ok(ContractError::NotInitialized)));
    assert_eq!(client.try_get_token(), Err(Ok(ContractError::NotInitialized)));
    assert_eq!(
        client.try_get_contract_info(),
        Err(Ok(ContractError::NotInitialized))
    );
}

#[test]
fn test_initialize_requires_admin_auth() {
    let env = Env::default();
    let client = setup_test(&env);

    let admin = Address::generate(&env);
    let impostor = Address::generate(&env);
    let token = Address::generate(&env);

    env.mock_auths(&[MockAuth {
        address: &impostor,
        invoke: &MockAuthInvoke {
            contract: &client.address,
            fn_name: "initialize",
            args: (&admin, &token).into_val(&env),
            sub_invokes: &[],
        },
    }]);

    let result = client.try_initialize(&admin, &token);
    assert!(result.is_err());
    assert_eq!(client.try_get_admin(), Err(Ok(ContractError::NotInitialized)));
}
