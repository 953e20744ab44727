use anchor_lang::prelude::*;
use crate::state::{Listing, ListingView, Marketplace};
use crate::store::ListingStore;

#[derive(Accounts)]
pub struct GetListing<'info> {
    #[account(
        seeds = [Marketplace::SEED_PREFIX, marketplace.collection.as_ref()],
        bump = marketplace.bump
    )]
    pub marketplace: Account<'info, Marketplace>,

    /// CHECK: Only used to derive the listing address
    pub mint: UncheckedAccount<'info>,

    /// CHECK: Listing PDA, possibly absent; read through ListingStore
    #[account(
        seeds = [Listing::SEED_PREFIX, marketplace.key().as_ref(), mint.key().as_ref()],
        bump
    )]
    pub listing: UncheckedAccount<'info>,
}

pub fn handler(ctx: Context<GetListing>) -> Result<Option<ListingView>> {
    let listing = ListingStore::new(&ctx.accounts.listing).get()?;
    Ok(listing.map(|listing| listing.view()))
}
