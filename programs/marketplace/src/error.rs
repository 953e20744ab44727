use anchor_lang::prelude::*;

#[error_code]
pub enum MarketplaceError {
    #[msg("Caller does not own this asset")]
    NotOwner,

    #[msg("Marketplace is not approved to transfer this asset")]
    MarketplaceNotApproved,

    #[msg("Asset is not listed for sale")]
    NftNotListed,

    #[msg("Sent value does not match the listing price")]
    IncorrectValue,

    // Also raised when no listing exists for the asset
    #[msg("Only the seller can perform this action")]
    NotSeller,

    #[msg("Listing price must be positive")]
    InvalidPrice,

    #[msg("Asset does not belong to this marketplace's collection")]
    AssetNotInCollection,

    #[msg("Seller accounts do not match the listing")]
    SellerMismatch,
}
