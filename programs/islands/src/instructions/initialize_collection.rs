use anchor_lang::prelude::*;
use crate::events::CollectionInitialized;
use crate::state::{validate_collection_metadata, Collection};

#[derive(Accounts)]
#[instruction(name: String)]
pub struct InitializeCollection<'info> {
    #[account(
        init,
        payer = authority,
        space = Collection::LEN,
        seeds = [Collection::SEED_PREFIX, &Collection::name_seed(&name)],
        bump
    )]
    pub collection: Account<'info, Collection>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<InitializeCollection>,
    name: String,
    symbol: String,
) -> Result<()> {
    validate_collection_metadata(&name, &symbol)?;

    let collection = &mut ctx.accounts.collection;
    collection.authority = ctx.accounts.authority.key();
    collection.name = name;
    collection.symbol = symbol;
    collection.next_id = 0;
    collection.bump = ctx.bumps.collection;

    msg!(
        "Collection initialized: name={}, symbol={}, authority={}",
        collection.name,
        collection.symbol,
        collection.authority
    );

    emit!(CollectionInitialized {
        collection: collection.key(),
        authority: collection.authority,
        name: collection.name.clone(),
        symbol: collection.symbol.clone(),
    });

    Ok(())
}
