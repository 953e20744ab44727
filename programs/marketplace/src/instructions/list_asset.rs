use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, TokenAccount};
use islands::state::AssetRecord;
use crate::error::MarketplaceError;
use crate::events::Listed;
use crate::state::{ensure_price, Holding, Listing, Marketplace};

/// List an asset at a fixed price. The asset stays in the seller's token
/// account; the marketplace only holds a delegate approval over it.
/// Listing an already-listed asset replaces the previous listing in place.
/// The listing account keeps the rent deposit it was created with, and
/// closing it refunds that deposit to whoever is the seller at the time; a
/// new owner who relists a stale listing collects its first payer's rent.
#[derive(Accounts)]
pub struct ListAsset<'info> {
    #[account(
        seeds = [Marketplace::SEED_PREFIX, marketplace.collection.as_ref()],
        bump = marketplace.bump
    )]
    pub marketplace: Account<'info, Marketplace>,

    #[account(
        constraint = asset_record.collection == marketplace.collection @ MarketplaceError::AssetNotInCollection,
        constraint = asset_record.mint == mint.key() @ MarketplaceError::AssetNotInCollection
    )]
    pub asset_record: Account<'info, AssetRecord>,

    pub mint: Account<'info, Mint>,

    /// Token account currently holding the asset
    #[account(token::mint = mint)]
    pub seller_token: Account<'info, TokenAccount>,

    #[account(
        init_if_needed,
        payer = seller,
        space = Listing::LEN,
        seeds = [Listing::SEED_PREFIX, marketplace.key().as_ref(), mint.key().as_ref()],
        bump
    )]
    pub listing: Account<'info, Listing>,

    #[account(mut)]
    pub seller: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<ListAsset>, price: u64) -> Result<()> {
    let marketplace = &ctx.accounts.marketplace;
    let holding = Holding::from(&*ctx.accounts.seller_token);
    holding.ensure_owned_by(ctx.accounts.seller.key)?;
    holding.ensure_approved_for(&marketplace.key())?;
    ensure_price(price)?;

    let listing = Listing {
        marketplace: marketplace.key(),
        mint: ctx.accounts.mint.key(),
        seller: ctx.accounts.seller.key(),
        price,
        bump: ctx.bumps.listing,
    };

    msg!(
        "Asset listed: mint={}, seller={}, price={}",
        listing.mint,
        listing.seller,
        listing.price
    );

    emit!(Listed {
        collection: marketplace.collection,
        mint: listing.mint,
        seller: listing.seller,
        price,
    });

    ctx.accounts.listing.set_inner(listing);
    Ok(())
}
