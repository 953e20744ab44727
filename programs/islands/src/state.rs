use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hash;
use crate::error::IslandsError;

// Metaplex token metadata limits
pub const MAX_NAME_LEN: usize = 32;
pub const MAX_SYMBOL_LEN: usize = 10;
pub const MAX_URI_LEN: usize = 200;

/// Named set of uniquely-owned assets with a single minting authority.
/// Seeds: [b"collection", sha256(name)]
#[account]
pub struct Collection {
    pub authority: Pubkey,       // Only party allowed to mint
    pub name: String,
    pub symbol: String,
    pub next_id: u64,            // Id handed to the next minted asset
    pub bump: u8,
}

impl Collection {
    pub const SEED_PREFIX: &'static [u8] = b"collection";

    pub const LEN: usize = 8 +   // discriminator
        32 +                      // authority
        4 + MAX_NAME_LEN +        // name
        4 + MAX_SYMBOL_LEN +      // symbol
        8 +                       // next_id
        1;                        // bump

    /// Fixed-width seed for a collection name of any length.
    pub fn name_seed(name: &str) -> [u8; 32] {
        hash(name.as_bytes()).to_bytes()
    }

    pub fn ensure_authority(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(self.authority, *caller, IslandsError::NotCollectionAuthority);
        Ok(())
    }

    /// Reserve the current id and advance the counter.
    pub fn claim_next_id(&mut self) -> Result<u64> {
        let id = self.next_id;
        self.next_id = id
            .checked_add(1)
            .ok_or(IslandsError::CollectionExhausted)?;
        Ok(id)
    }
}

/// Registry entry tying a mint to its collection and sequential id.
/// Seeds: [b"asset", collection, mint]
#[account]
pub struct AssetRecord {
    pub collection: Pubkey,
    pub mint: Pubkey,
    pub id: u64,
    pub bump: u8,
}

impl AssetRecord {
    pub const SEED_PREFIX: &'static [u8] = b"asset";

    pub const LEN: usize = 8 +   // discriminator
        32 +                      // collection
        32 +                      // mint
        8 +                       // id
        1;                        // bump
}

/// Seed prefix of the per-asset mint PDA: [b"mint", collection, id (le)]
pub const MINT_SEED_PREFIX: &[u8] = b"mint";

pub fn validate_collection_metadata(name: &str, symbol: &str) -> Result<()> {
    require!(name.len() <= MAX_NAME_LEN, IslandsError::NameTooLong);
    require!(symbol.len() <= MAX_SYMBOL_LEN, IslandsError::SymbolTooLong);
    Ok(())
}

/// Metaplex name of one asset: the collection name followed by its id, with
/// the collection part shortened to stay within the metadata limit.
pub fn asset_name(collection_name: &str, id: u64) -> String {
    let suffix = format!(" #{}", id);
    let mut end = collection_name.len().min(MAX_NAME_LEN - suffix.len());
    while !collection_name.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}{}", &collection_name[..end], suffix)
}

pub fn validate_uri(uri: &str) -> Result<()> {
    require!(uri.len() <= MAX_URI_LEN, IslandsError::UriTooLong);
    Ok(())
}
