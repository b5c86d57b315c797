use crate::errors::ContractError;
use crate::events;
use crate::types::{ContractInfo, DataKey, INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD};
use soroban_sdk::{Address, Env};

pub fn initialize(env: &Env, admin: &Address, token: &Address) -> Result<(), ContractError> {
    if env.storage().instance().has(&DataKey::Admin) {
        return Err(ContractError::AlreadyInitialized);
    }
    admin.require_auth();

    let now = env.ledger().sequence();
    let contract_info = ContractInfo {
        admin: admin.clone(),
        token: token.clone(),
        initialized_at: now,
    };
    env.storage().instance().set(&DataKey::Admin, admin);
    env.storage().instance().set(&DataKey::Token, token);
    env.storage()
        .instance()
        .set(&DataKey::ContractInfo, &contract_info);

    bump_instance(env);

    events::publish_initialized_event(env, admin.clone(), token.clone(), now);
    Ok(())
}

/// Keep the contract instance (config and id counter) alive.
pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn get_admin(env: &Env) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(ContractError::NotInitialized)
}

/// The token used as the value-transfer primitive.
pub fn get_token(env: &Env) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(ContractError::NotInitialized)
}

pub fn get_contract_info(env: &Env) -> Result<ContractInfo, ContractError> {
    env.storage()
        .instance()
        .get(&DataKey::ContractInfo)
        .ok_or(ContractError::NotInitialized)
}
