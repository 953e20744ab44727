use anchor_lang::prelude::*;

pub mod error;
pub mod events;
pub mod instructions;
pub mod state;
pub mod store;

use instructions::*;
use state::ListingView;

declare_id!("DgBnZLENZSWaEVvGY4PL7j8Pa6c5UhW6JBJHnzGnnJgs");

#[program]
pub mod marketplace {
    use super::*;

    /// Bind a marketplace to an Islands collection
    pub fn initialize_marketplace(ctx: Context<InitializeMarketplace>) -> Result<()> {
        initialize_marketplace::handler(ctx)
    }

    /// List an owned, marketplace-approved asset at a fixed price
    pub fn list_asset(ctx: Context<ListAsset>, price: u64) -> Result<()> {
        list_asset::handler(ctx, price)
    }

    /// Buy a listed asset; `sent_value` must equal the listing price
    pub fn buy_asset(ctx: Context<BuyAsset>, sent_value: u64) -> Result<()> {
        buy_asset::handler(ctx, sent_value)
    }

    /// Withdraw a listing (seller only)
    pub fn cancel_listing(ctx: Context<CancelListing>) -> Result<()> {
        cancel_listing::handler(ctx)
    }

    /// Change the price of a listing (seller only)
    pub fn update_price(ctx: Context<UpdatePrice>, new_price: u64) -> Result<()> {
        update_price::handler(ctx, new_price)
    }

    /// Current listing for an asset, or `None` when it is not for sale
    pub fn get_listing(ctx: Context<GetListing>) -> Result<Option<ListingView>> {
        get_listing::handler(ctx)
    }
}
