use anchor_lang::prelude::*;

pub mod error;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("Cq8rerDMYT8ETyrkyFXTTEULV8fgRaLPvwVJ1XC7ZtHi");

#[program]
pub mod islands {
    use super::*;

    /// Create a named collection owned by the signer
    pub fn initialize_collection(
        ctx: Context<InitializeCollection>,
        name: String,
        symbol: String,
    ) -> Result<()> {
        initialize_collection::handler(ctx, name, symbol)
    }

    /// Mint the next sequential asset to a recipient (authority only)
    pub fn mint_asset(ctx: Context<MintAsset>, uri: String) -> Result<()> {
        mint_asset::handler(ctx, uri)
    }

    /// Hand minting rights to a new authority
    pub fn transfer_authority(
        ctx: Context<TransferAuthority>,
        new_authority: Pubkey,
    ) -> Result<()> {
        transfer_authority::handler(ctx, new_authority)
    }
}
