use soroban_sdk::{symbol_short, Address, Env, Symbol};

const MINTED: Symbol = symbol_short!("mint");
const PAUSED: Symbol = symbol_short!("paused");
const UNPAUSED: Symbol = symbol_short!("unpaused");
const WITHDRAWN: Symbol = symbol_short!("withdraw");

pub fn minted(env: &Env, minter: &Address, token_id: u32, payment: i128) {
    env.events().publish((MINTED, minter.clone()), (token_id, payment));
}

pub fn paused(env: &Env, owner: &Address) {
    env.events().publish((PAUSED,), owner.clone());
}

pub fn unpaused(env: &Env, owner: &Address) {
    env.events().publish((UNPAUSED,), owner.clone());
}

pub fn withdrawn(env: &Env, owner: &Address, amount: i128) {
    env.events().publish((WITHDRAWN, owner.clone()), amount);
}
