use soroban_sdk::{Address, Env, Vec};
use crate::types::{DataKey, MintConfig, FIRST_TOKEN_ID};

/// Whether `initialize` has run
pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn get_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Owner)
}

pub fn set_payment_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::PaymentToken, token);
}

pub fn get_payment_token(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::PaymentToken)
}

pub fn set_config(env: &Env, config: &MintConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_config(env: &Env) -> Option<MintConfig> {
    env.storage().instance().get(&DataKey::Config)
}

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&DataKey::Paused, &paused);
}

pub fn is_paused(env: &Env) -> bool {
    env.storage().instance().get(&DataKey::Paused).unwrap_or(false)
}

pub fn set_total_supply(env: &Env, supply: u32) {
    env.storage().instance().set(&DataKey::TotalSupply, &supply);
}

pub fn get_total_supply(env: &Env) -> u32 {
    env.storage().instance().get(&DataKey::TotalSupply).unwrap_or(0)
}

/// Proceeds collected by mints and not yet withdrawn
pub fn set_treasury(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::Treasury, &amount);
}

pub fn get_treasury(env: &Env) -> i128 {
    env.storage().instance().get(&DataKey::Treasury).unwrap_or(0)
}

/// Get the next token id without incrementing
pub fn get_next_token_id(env: &Env) -> u32 {
    env.storage().instance().get(&DataKey::NextTokenId).unwrap_or(FIRST_TOKEN_ID)
}

pub fn set_next_token_id(env: &Env, id: u32) {
    env.storage().instance().set(&DataKey::NextTokenId, &id);
}

pub fn set_balance(env: &Env, holder: &Address, count: u32) {
    env.storage().persistent().set(&DataKey::Balance(holder.clone()), &count);
}

pub fn get_balance(env: &Env, holder: &Address) -> u32 {
    env.storage().persistent().get(&DataKey::Balance(holder.clone())).unwrap_or(0)
}

pub fn set_token_owner(env: &Env, token_id: u32, holder: &Address) {
    env.storage().persistent().set(&DataKey::TokenOwner(token_id), holder);
}

pub fn get_token_owner(env: &Env, token_id: u32) -> Option<Address> {
    env.storage().persistent().get(&DataKey::TokenOwner(token_id))
}

/// Append a token id to the holder's list
pub fn push_owned_token(env: &Env, holder: &Address, token_id: u32) {
    let mut tokens = get_owned_tokens(env, holder);
    tokens.push_back(token_id);
    env.storage().persistent().set(&DataKey::OwnedTokens(holder.clone()), &tokens);
}

pub fn get_owned_tokens(env: &Env, holder: &Address) -> Vec<u32> {
    env.storage()
        .persistent()
        .get(&DataKey::OwnedTokens(holder.clone()))
        .unwrap_or_else(|| Vec::new(env))
}
