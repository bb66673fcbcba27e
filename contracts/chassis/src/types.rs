use soroban_sdk::{contracterror, contracttype, Address, String};

pub const NAME: &str = "Chassis";
pub const SYMBOL: &str = "CHASSIS";

/// Hard cap on the number of tokens that can ever be minted
pub const MAX_SUPPLY: u32 = 10;

/// Maximum number of tokens a single wallet may mint
pub const MAX_PER_WALLET: u32 = 2;

/// Exact price of one mint: one whole unit of a 7-decimal Stellar asset
pub const MINT_PRICE: i128 = 10_000_000;

/// Token ids are handed out sequentially from here
pub const FIRST_TOKEN_ID: u32 = 1;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    // instance storage
    Owner,
    PaymentToken,
    Config,
    Paused,
    TotalSupply,
    Treasury,
    NextTokenId,
    // persistent storage
    Balance(Address),
    TokenOwner(u32),
    OwnedTokens(Address),
}

/// Mint parameters fixed at initialization
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MintConfig {
    pub name: String,
    pub symbol: String,
    /// Exact payment required per mint
    pub mint_price: i128,
    pub max_supply: u32,
    pub max_per_wallet: u32,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ChassisError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    ContractPaused = 4,
    InvalidPayment = 5,
    SupplyExceeded = 6,
    WalletCapExceeded = 7,
    InsufficientFunds = 8,
    InvalidAmount = 9,
    TokenNotFound = 10,
}
