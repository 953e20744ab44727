use anchor_lang::prelude::*;
use islands::state::Collection;
use crate::events::MarketplaceInitialized;
use crate::state::Marketplace;

/// Bind a marketplace to an Islands collection
#[derive(Accounts)]
pub struct InitializeMarketplace<'info> {
    #[account(
        init,
        payer = authority,
        space = Marketplace::LEN,
        seeds = [Marketplace::SEED_PREFIX, collection.key().as_ref()],
        bump
    )]
    pub marketplace: Account<'info, Marketplace>,

    pub collection: Account<'info, Collection>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitializeMarketplace>) -> Result<()> {
    let marketplace = &mut ctx.accounts.marketplace;
    marketplace.authority = ctx.accounts.authority.key();
    marketplace.collection = ctx.accounts.collection.key();
    marketplace.bump = ctx.bumps.marketplace;

    msg!(
        "Marketplace initialized: collection={}, name={}",
        marketplace.collection,
        ctx.accounts.collection.name
    );

    emit!(MarketplaceInitialized {
        marketplace: marketplace.key(),
        collection: marketplace.collection,
        authority: marketplace.authority,
    });

    Ok(())
}
