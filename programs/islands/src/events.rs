use anchor_lang::prelude::*;

#[event]
pub struct CollectionInitialized {
    pub collection: Pubkey,
    pub authority: Pubkey,
    pub name: String,
    pub symbol: String,
}

#[event]
pub struct AssetMinted {
    pub collection: Pubkey,
    pub mint: Pubkey,
    pub id: u64,
    pub recipient: Pubkey,
    pub uri: String,
}

#[event]
pub struct AuthorityTransferred {
    pub collection: Pubkey,
    pub previous_authority: Pubkey,
    pub new_authority: Pubkey,
}
