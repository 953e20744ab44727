use anchor_lang::prelude::*;

#[error_code]
pub enum IslandsError {
    #[msg("Only the collection authority can perform this action")]
    NotCollectionAuthority,

    #[msg("Collection name is too long")]
    NameTooLong,

    #[msg("Collection symbol is too long")]
    SymbolTooLong,

    #[msg("Asset URI is too long")]
    UriTooLong,

    #[msg("Collection cannot mint any more assets")]
    CollectionExhausted,
}
