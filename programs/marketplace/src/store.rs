//! Listing store: one listing PDA per asset.
//!
//! Insertion goes through `init_if_needed` on the `ListAsset` accounts; this
//! module covers lookup, in-place replacement and removal on accounts that
//! may or may not exist yet.

use anchor_lang::prelude::*;
use anchor_lang::system_program;
use crate::error::MarketplaceError;
use crate::state::Listing;

pub struct ListingStore<'a, 'info> {
    account: &'a AccountInfo<'info>,
}

impl<'a, 'info> ListingStore<'a, 'info> {
    pub fn new(account: &'a AccountInfo<'info>) -> Self {
        Self { account }
    }

    fn is_present(&self) -> bool {
        self.account.owner == &crate::ID && !self.account.data_is_empty()
    }

    /// Absent is `Ok(None)`, never an error.
    pub fn get(&self) -> Result<Option<Listing>> {
        if !self.is_present() {
            return Ok(None);
        }
        let data = self.account.try_borrow_data()?;
        Listing::try_deserialize(&mut &data[..]).map(Some)
    }

    /// Listing to settle a purchase against.
    pub fn listed(&self) -> Result<Listing> {
        self.get()?
            .ok_or_else(|| error!(MarketplaceError::NftNotListed))
    }

    /// Listing `caller` may cancel or reprice. A missing listing is reported
    /// the same way as someone else's.
    pub fn owned_by(&self, caller: &Pubkey) -> Result<Listing> {
        let listing = self
            .get()?
            .ok_or_else(|| error!(MarketplaceError::NotSeller))?;
        listing.ensure_seller(caller)?;
        Ok(listing)
    }

    /// Overwrite the stored listing in place.
    pub fn put(&self, listing: &Listing) -> Result<()> {
        let mut data = self.account.try_borrow_mut_data()?;
        listing.try_serialize(&mut &mut data[..])
    }

    /// Close the listing account, refunding its rent to `refund_to`.
    pub fn remove(&self, refund_to: &AccountInfo<'info>) -> Result<()> {
        if !self.is_present() {
            return Ok(());
        }

        let refunded = refund_to
            .lamports()
            .checked_add(self.account.lamports())
            .ok_or(ProgramError::ArithmeticOverflow)?;
        **refund_to.try_borrow_mut_lamports()? = refunded;
        **self.account.try_borrow_mut_lamports()? = 0;

        self.account.assign(&system_program::ID);
        self.account.realloc(0, false)?;
        Ok(())
    }
}
