#![no_std]

use soroban_sdk::{contract, contractimpl, log, token, Address, Env, String, Vec};

mod events;
mod storage;
pub mod types;


use crate::storage::*;
use crate::types::*;

/// Chassis: a fixed-supply, pay-to-mint NFT collection.
///
/// Anyone may mint by paying exactly the mint price in the payment token,
/// subject to a collection-wide supply cap and a per-wallet cap. The owner
/// can pause minting and withdraw the collected proceeds.
#[contract]
pub struct ChassisContract;

#[contractimpl]
impl ChassisContract {
    // ==================== INITIALIZATION ====================

    /// Initialize the collection with its owner and the token mints are paid in
    pub fn initialize(
        env: Env,
        owner: Address,
        payment_token: Address,
    ) -> Result<(), ChassisError> {
        if is_initialized(&env) {
            return Err(ChassisError::AlreadyInitialized);
        }
        owner.require_auth();

        let config = MintConfig {
            name: String::from_str(&env, NAME),
            symbol: String::from_str(&env, SYMBOL),
            mint_price: MINT_PRICE,
            max_supply: MAX_SUPPLY,
            max_per_wallet: MAX_PER_WALLET,
        };

        set_owner(&env, &owner);
        set_payment_token(&env, &payment_token);
        set_config(&env, &config);
        set_paused(&env, false);
        set_total_supply(&env, 0);
        set_treasury(&env, 0);
        set_next_token_id(&env, FIRST_TOKEN_ID);

        log!(&env, "Chassis: initialized with owner {}", owner);
        Ok(())
    }

    // ==================== MINTING ====================

    /// Mint one token to `minter`, who pays `payment` into the contract.
    /// Returns the new token id.
    pub fn mint(env: Env, minter: Address, payment: i128) -> Result<u32, ChassisError> {
        minter.require_auth();

        let config = Self::load_config(&env)?;
        if is_paused(&env) {
            return Err(ChassisError::ContractPaused);
        }
        if payment != config.mint_price {
            return Err(ChassisError::InvalidPayment);
        }

        let supply = get_total_supply(&env);
        if supply >= config.max_supply {
            return Err(ChassisError::SupplyExceeded);
        }

        let held = get_balance(&env, &minter);
        if held >= config.max_per_wallet {
            return Err(ChassisError::WalletCapExceeded);
        }

        let payment_token = get_payment_token(&env).ok_or(ChassisError::NotInitialized)?;
        token::Client::new(&env, &payment_token).transfer(
            &minter,
            &env.current_contract_address(),
            &payment,
        );

        let token_id = get_next_token_id(&env);
        set_token_owner(&env, token_id, &minter);
        push_owned_token(&env, &minter, token_id);
        set_balance(&env, &minter, held + 1);
        set_total_supply(&env, supply + 1);
        set_next_token_id(&env, token_id + 1);
        set_treasury(&env, get_treasury(&env) + payment);

        events::minted(&env, &minter, token_id, payment);
        log!(&env, "Chassis: minted #{} to {}", token_id, minter);
        Ok(token_id)
    }

    // ==================== OWNER CONTROLS ====================

    pub fn pause(env: Env, caller: Address) -> Result<(), ChassisError> {
        Self::require_owner(&env, &caller)?;
        set_paused(&env, true);
        events::paused(&env, &caller);
        log!(&env, "Chassis: minting paused");
        Ok(())
    }

    pub fn unpause(env: Env, caller: Address) -> Result<(), ChassisError> {
        Self::require_owner(&env, &caller)?;
        set_paused(&env, false);
        events::unpaused(&env, &caller);
        log!(&env, "Chassis: minting resumed");
        Ok(())
    }

    /// Send `amount` of the collected proceeds to the owner
    pub fn withdraw(env: Env, caller: Address, amount: i128) -> Result<(), ChassisError> {
        Self::require_owner(&env, &caller)?;
        if amount < 0 {
            return Err(ChassisError::InvalidAmount);
        }

        let treasury = get_treasury(&env);
        if amount > treasury {
            return Err(ChassisError::InsufficientFunds);
        }

        let payment_token = get_payment_token(&env).ok_or(ChassisError::NotInitialized)?;
        set_treasury(&env, treasury - amount);
        token::Client::new(&env, &payment_token).transfer(
            &env.current_contract_address(),
            &caller,
            &amount,
        );

        events::withdrawn(&env, &caller, amount);
        log!(&env, "Chassis: withdrew {} to {}", amount, caller);
        Ok(())
    }

    // ==================== QUERIES ====================

    pub fn name(env: Env) -> String {
        String::from_str(&env, NAME)
    }

    pub fn symbol(env: Env) -> String {
        String::from_str(&env, SYMBOL)
    }

    /// Number of Chassis tokens held by `holder`
    pub fn balance_of(env: Env, holder: Address) -> u32 {
        get_balance(&env, &holder)
    }

    pub fn total_supply(env: Env) -> u32 {
        get_total_supply(&env)
    }

    /// Proceeds held by the contract and available for withdrawal
    pub fn get_balance(env: Env) -> i128 {
        get_treasury(&env)
    }

    pub fn is_paused(env: Env) -> bool {
        is_paused(&env)
    }

    pub fn owner(env: Env) -> Result<Address, ChassisError> {
        get_owner(&env).ok_or(ChassisError::NotInitialized)
    }

    pub fn owner_of(env: Env, token_id: u32) -> Result<Address, ChassisError> {
        get_token_owner(&env, token_id).ok_or(ChassisError::TokenNotFound)
    }

    /// Token ids held by `holder`, in mint order
    pub fn tokens_of(env: Env, holder: Address) -> Vec<u32> {
        get_owned_tokens(&env, &holder)
    }

    pub fn get_config(env: Env) -> Result<MintConfig, ChassisError> {
        Self::load_config(&env)
    }

    pub fn payment_token(env: Env) -> Result<Address, ChassisError> {
        get_payment_token(&env).ok_or(ChassisError::NotInitialized)
    }

    // ==================== Internal Helpers ====================

    fn load_config(env: &Env) -> Result<MintConfig, ChassisError> {
        get_config(env).ok_or(ChassisError::NotInitialized)
    }

    fn require_owner(env: &Env, caller: &Address) -> Result<(), ChassisError> {
        caller.require_auth();
        let owner = get_owner(env).ok_or(ChassisError::NotInitialized)?;
        if *caller != owner {
            return Err(ChassisError::Unauthorized);
        }
        Ok(())
    }
}
