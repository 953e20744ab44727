pub mod buy_asset;
pub mod cancel_listing;
pub mod get_listing;
pub mod initialize_marketplace;
pub mod list_asset;
pub mod update_price;

pub use buy_asset::*;
pub use cancel_listing::*;
pub use get_listing::*;
pub use initialize_marketplace::*;
pub use list_asset::*;
pub use update_price::*;
