use anchor_lang::prelude::*;
use anchor_lang::system_program;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{self, Mint, Token, TokenAccount},
};
use crate::error::MarketplaceError;
use crate::events::Sale;
use crate::state::{Listing, Marketplace};
use crate::store::ListingStore;

/// Purchase a listed asset: payment to the seller, asset to the buyer and
/// removal of the listing all land in one transaction or not at all.
#[derive(Accounts)]
pub struct BuyAsset<'info> {
    #[account(
        seeds = [Marketplace::SEED_PREFIX, marketplace.collection.as_ref()],
        bump = marketplace.bump
    )]
    pub marketplace: Account<'info, Marketplace>,

    pub mint: Account<'info, Mint>,

    /// CHECK: Listing PDA, possibly absent; read through ListingStore
    #[account(
        mut,
        seeds = [Listing::SEED_PREFIX, marketplace.key().as_ref(), mint.key().as_ref()],
        bump
    )]
    pub listing: UncheckedAccount<'info>,

    /// Seller receives payment and the listing rent
    /// CHECK: Validated against listing.seller in the handler
    #[account(mut)]
    pub seller: UncheckedAccount<'info>,

    /// Seller's token account holding the asset
    #[account(
        mut,
        token::mint = mint
    )]
    pub seller_token: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub buyer: Signer<'info>,

    #[account(
        init_if_needed,
        payer = buyer,
        associated_token::mint = mint,
        associated_token::authority = buyer
    )]
    pub buyer_token: Box<Account<'info, TokenAccount>>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
}

pub fn handler(ctx: Context<BuyAsset>, sent_value: u64) -> Result<()> {
    let store = ListingStore::new(&ctx.accounts.listing);
    let listing = store.listed()?;
    listing.ensure_payment(sent_value)?;

    require_keys_eq!(
        ctx.accounts.seller.key(),
        listing.seller,
        MarketplaceError::SellerMismatch
    );
    require_keys_eq!(
        ctx.accounts.seller_token.owner,
        listing.seller,
        MarketplaceError::SellerMismatch
    );

    // Payment first; an underfunded buyer fails before custody moves
    let cpi_accounts = system_program::Transfer {
        from: ctx.accounts.buyer.to_account_info(),
        to: ctx.accounts.seller.to_account_info(),
    };
    let cpi_ctx = CpiContext::new(ctx.accounts.system_program.to_account_info(), cpi_accounts);
    system_program::transfer(cpi_ctx, listing.price)?;

    // Asset moves under the marketplace's delegate approval
    let marketplace = &ctx.accounts.marketplace;
    let bump = [marketplace.bump];
    let seeds: &[&[u8]] = &[
        Marketplace::SEED_PREFIX,
        marketplace.collection.as_ref(),
        &bump,
    ];
    let signer = &[seeds];

    let cpi_accounts = token::Transfer {
        from: ctx.accounts.seller_token.to_account_info(),
        to: ctx.accounts.buyer_token.to_account_info(),
        authority: marketplace.to_account_info(),
    };
    let cpi_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        cpi_accounts,
        signer,
    );
    token::transfer(cpi_ctx, 1)?;

    store.remove(&ctx.accounts.seller.to_account_info())?;

    msg!(
        "Asset sold: mint={}, seller={}, buyer={}, price={}",
        listing.mint,
        listing.seller,
        ctx.accounts.buyer.key(),
        listing.price
    );

    emit!(Sale {
        collection: marketplace.collection,
        mint: listing.mint,
        buyer: ctx.accounts.buyer.key(),
        price: listing.price,
    });

    Ok(())
}
