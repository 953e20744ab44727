use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_option::COption;
use anchor_spl::token::TokenAccount;
use crate::error::MarketplaceError;

/// Marketplace bound to one Islands collection.
/// Seeds: [b"marketplace", collection]
/// The PDA doubles as the delegate holders approve for transfers.
#[account]
pub struct Marketplace {
    pub authority: Pubkey,
    pub collection: Pubkey,      // Only assets of this collection can be listed
    pub bump: u8,
}

impl Marketplace {
    pub const SEED_PREFIX: &'static [u8] = b"marketplace";

    pub const LEN: usize = 8 +   // discriminator
        32 +                      // authority
        32 +                      // collection
        1;                        // bump
}

/// Open offer to sell one asset at a fixed price.
/// Seeds: [b"listing", marketplace, mint]
/// Exists only while the asset is for sale; buying or cancelling closes it.
#[account]
#[derive(Debug, PartialEq, Eq)]
pub struct Listing {
    pub marketplace: Pubkey,
    pub mint: Pubkey,
    pub seller: Pubkey,
    pub price: u64,              // Lamports
    pub bump: u8,
}

impl Listing {
    pub const SEED_PREFIX: &'static [u8] = b"listing";

    pub const LEN: usize = 8 +   // discriminator
        32 +                      // marketplace
        32 +                      // mint
        32 +                      // seller
        8 +                       // price
        1;                        // bump

    pub fn ensure_seller(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(self.seller, *caller, MarketplaceError::NotSeller);
        Ok(())
    }

    pub fn ensure_payment(&self, sent_value: u64) -> Result<()> {
        require!(sent_value == self.price, MarketplaceError::IncorrectValue);
        Ok(())
    }

    /// Replace the price; seller and asset binding stay as they are.
    pub fn reprice(&mut self, new_price: u64) -> Result<()> {
        ensure_price(new_price)?;
        self.price = new_price;
        Ok(())
    }

    pub fn view(&self) -> ListingView {
        ListingView {
            seller: self.seller,
            price: self.price,
        }
    }
}

/// Read-only projection returned by `get_listing`
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub struct ListingView {
    pub seller: Pubkey,
    pub price: u64,
}

pub fn ensure_price(price: u64) -> Result<()> {
    require!(price > 0, MarketplaceError::InvalidPrice);
    Ok(())
}

/// Registry view of the token account holding an asset: who owns it and
/// whom the owner has approved to move it.
#[derive(Clone, Copy, Debug)]
pub struct Holding {
    pub owner: Pubkey,
    pub amount: u64,
    pub delegate: Option<Pubkey>,
    pub delegated_amount: u64,
}

impl From<&TokenAccount> for Holding {
    fn from(account: &TokenAccount) -> Self {
        let delegate = match account.delegate {
            COption::Some(delegate) => Some(delegate),
            COption::None => None,
        };
        Self {
            owner: account.owner,
            amount: account.amount,
            delegate,
            delegated_amount: account.delegated_amount,
        }
    }
}

impl Holding {
    /// `caller` holds the single unit of the asset
    pub fn ensure_owned_by(&self, caller: &Pubkey) -> Result<()> {
        require!(
            self.owner == *caller && self.amount == 1,
            MarketplaceError::NotOwner
        );
        Ok(())
    }

    /// The marketplace may move the unit on the owner's behalf
    pub fn ensure_approved_for(&self, marketplace: &Pubkey) -> Result<()> {
        require!(
            self.delegate == Some(*marketplace) && self.delegated_amount >= 1,
            MarketplaceError::MarketplaceNotApproved
        );
        Ok(())
    }
}
