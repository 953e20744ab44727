pub mod initialize_collection;
pub mod mint_asset;
pub mod transfer_authority;

pub use initialize_collection::*;
pub use mint_asset::*;
pub use transfer_authority::*;
