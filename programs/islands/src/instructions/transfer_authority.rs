use anchor_lang::prelude::*;
use crate::events::AuthorityTransferred;
use crate::state::Collection;

/// Hand minting rights over to another party
#[derive(Accounts)]
pub struct TransferAuthority<'info> {
    #[account(
        mut,
        seeds = [Collection::SEED_PREFIX, &Collection::name_seed(&collection.name)],
        bump = collection.bump
    )]
    pub collection: Account<'info, Collection>,

    pub authority: Signer<'info>,
}

pub fn handler(ctx: Context<TransferAuthority>, new_authority: Pubkey) -> Result<()> {
    let collection = &mut ctx.accounts.collection;
    collection.ensure_authority(ctx.accounts.authority.key)?;

    let previous_authority = collection.authority;
    collection.authority = new_authority;

    msg!(
        "Collection authority transferred: collection={}, from={}, to={}",
        collection.key(),
        previous_authority,
        new_authority
    );

    emit!(AuthorityTransferred {
        collection: collection.key(),
        previous_authority,
        new_authority,
    });

    Ok(())
}
