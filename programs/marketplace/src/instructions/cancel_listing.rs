use anchor_lang::prelude::*;
use crate::events::ListingCancelled;
use crate::state::{Listing, Marketplace};
use crate::store::ListingStore;

/// Withdraw a listing; the asset never left the seller's token account
#[derive(Accounts)]
pub struct CancelListing<'info> {
    #[account(
        seeds = [Marketplace::SEED_PREFIX, marketplace.collection.as_ref()],
        bump = marketplace.bump
    )]
    pub marketplace: Account<'info, Marketplace>,

    /// CHECK: Only used to derive the listing address
    pub mint: UncheckedAccount<'info>,

    /// CHECK: Listing PDA, possibly absent; read through ListingStore
    #[account(
        mut,
        seeds = [Listing::SEED_PREFIX, marketplace.key().as_ref(), mint.key().as_ref()],
        bump
    )]
    pub listing: UncheckedAccount<'info>,

    #[account(mut)]
    pub seller: Signer<'info>,
}

pub fn handler(ctx: Context<CancelListing>) -> Result<()> {
    let store = ListingStore::new(&ctx.accounts.listing);
    let listing = store.owned_by(ctx.accounts.seller.key)?;

    store.remove(&ctx.accounts.seller.to_account_info())?;

    msg!(
        "Listing cancelled: mint={}, seller={}",
        listing.mint,
        listing.seller
    );

    emit!(ListingCancelled {
        collection: ctx.accounts.marketplace.collection,
        mint: listing.mint,
    });

    Ok(())
}
