use anchor_lang::prelude::*;
use crate::events::PriceUpdated;
use crate::state::{Listing, Marketplace};
use crate::store::ListingStore;

#[derive(Accounts)]
pub struct UpdatePrice<'info> {
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

    pub seller: Signer<'info>,
}

pub fn handler(ctx: Context<UpdatePrice>, new_price: u64) -> Result<()> {
    let store = ListingStore::new(&ctx.accounts.listing);
    let mut listing = store.owned_by(ctx.accounts.seller.key)?;

    listing.reprice(new_price)?;
    store.put(&listing)?;

    msg!("Listing repriced: mint={}, price={}", listing.mint, new_price);

    emit!(PriceUpdated {
        collection: ctx.accounts.marketplace.collection,
        mint: listing.mint,
        price: new_price,
    });

    Ok(())
}
