use anchor_lang::prelude::*;

#[event]
pub struct MarketplaceInitialized {
    pub marketplace: Pubkey,
    pub collection: Pubkey,
    pub authority: Pubkey,
}

#[event]
pub struct Listed {
    pub collection: Pubkey,
    pub mint: Pubkey,
    pub seller: Pubkey,
    pub price: u64,
}

#[event]
pub struct Sale {
    pub collection: Pubkey,
    pub mint: Pubkey,
    pub buyer: Pubkey,
    pub price: u64,
}

#[event]
pub struct ListingCancelled {
    pub collection: Pubkey,
    pub mint: Pubkey,
}

#[event]
pub struct PriceUpdated {
    pub collection: Pubkey,
    pub mint: Pubkey,
    pub price: u64,
}
