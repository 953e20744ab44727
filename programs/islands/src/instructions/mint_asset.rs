use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{
        self, spl_token::instruction::AuthorityType, Mint, MintTo, SetAuthority, Token,
        TokenAccount,
    },
};
use mpl_token_metadata::{
    accounts::Metadata,
    instructions::CreateMetadataAccountV3CpiBuilder,
    types::DataV2,
};
use crate::events::AssetMinted;
use crate::state::{asset_name, validate_uri, AssetRecord, Collection, MINT_SEED_PREFIX};
use crate::error::IslandsError;

/// Mint the next asset of a collection to `recipient`.
/// The mint is a PDA of the collection and its sequential id; once the single
/// unit is minted the mint authority is revoked.
#[derive(Accounts)]
pub struct MintAsset<'info> {
    #[account(
        mut,
        seeds = [Collection::SEED_PREFIX, &Collection::name_seed(&collection.name)],
        bump = collection.bump,
        has_one = authority @ IslandsError::NotCollectionAuthority
    )]
    pub collection: Account<'info, Collection>,

    #[account(
        init,
        payer = authority,
        seeds = [MINT_SEED_PREFIX, collection.key().as_ref(), &collection.next_id.to_le_bytes()],
        bump,
        mint::decimals = 0,
        mint::authority = collection
    )]
    pub mint: Box<Account<'info, Mint>>,

    #[account(
        init,
        payer = authority,
        space = AssetRecord::LEN,
        seeds = [AssetRecord::SEED_PREFIX, collection.key().as_ref(), mint.key().as_ref()],
        bump
    )]
    pub asset_record: Account<'info, AssetRecord>,

    /// CHECK: Any wallet may receive an asset
    pub recipient: UncheckedAccount<'info>,

    #[account(
        init,
        payer = authority,
        associated_token::mint = mint,
        associated_token::authority = recipient
    )]
    pub recipient_token: Box<Account<'info, TokenAccount>>,

    /// CHECK: Created by the token metadata program; address is its PDA for `mint`
    #[account(
        mut,
        address = Metadata::find_pda(&mint.key()).0
    )]
    pub metadata: UncheckedAccount<'info>,

    #[account(mut)]
    pub authority: Signer<'info>,

    /// CHECK: Metaplex token metadata program
    #[account(address = mpl_token_metadata::ID)]
    pub token_metadata_program: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn handler(ctx: Context<MintAsset>, uri: String) -> Result<()> {
    validate_uri(&uri)?;

    // The mint address was derived from this id
    let id = ctx.accounts.collection.claim_next_id()?;

    let collection = &ctx.accounts.collection;
    let name = asset_name(&collection.name, id);
    let symbol = collection.symbol.clone();
    let name_seed = Collection::name_seed(&collection.name);
    let bump = [collection.bump];
    let seeds: &[&[u8]] = &[Collection::SEED_PREFIX, &name_seed, &bump];
    let signer = &[seeds];

    let collection_info = ctx.accounts.collection.to_account_info();
    let mint_info = ctx.accounts.mint.to_account_info();

    // Single unit to the recipient
    let cpi_accounts = MintTo {
        mint: mint_info.clone(),
        to: ctx.accounts.recipient_token.to_account_info(),
        authority: collection_info.clone(),
    };
    let cpi_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        cpi_accounts,
        signer,
    );
    token::mint_to(cpi_ctx, 1)?;

    // Token URI lives in Metaplex metadata; requires the mint authority, so
    // this must happen before the authority is revoked
    let metadata_program = ctx.accounts.token_metadata_program.to_account_info();
    let metadata_info = ctx.accounts.metadata.to_account_info();
    let payer_info = ctx.accounts.authority.to_account_info();
    let system_info = ctx.accounts.system_program.to_account_info();
    let rent_info = ctx.accounts.rent.to_account_info();
    CreateMetadataAccountV3CpiBuilder::new(&metadata_program)
        .metadata(&metadata_info)
        .mint(&mint_info)
        .mint_authority(&collection_info)
        .payer(&payer_info)
        .update_authority(&collection_info, true)
        .system_program(&system_info)
        .rent(Some(&rent_info))
        .data(DataV2 {
            name,
            symbol,
            uri: uri.clone(),
            seller_fee_basis_points: 0,
            creators: None,
            collection: None,
            uses: None,
        })
        .is_mutable(true)
        .invoke_signed(signer)?;

    // Fix supply at one
    let cpi_accounts = SetAuthority {
        current_authority: collection_info,
        account_or_mint: mint_info,
    };
    let cpi_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        cpi_accounts,
        signer,
    );
    token::set_authority(cpi_ctx, AuthorityType::MintTokens, None)?;

    let record = &mut ctx.accounts.asset_record;
    record.collection = ctx.accounts.collection.key();
    record.mint = ctx.accounts.mint.key();
    record.id = id;
    record.bump = ctx.bumps.asset_record;

    msg!(
        "Asset minted: collection={}, id={}, mint={}, recipient={}",
        record.collection,
        id,
        record.mint,
        ctx.accounts.recipient.key()
    );

    emit!(AssetMinted {
        collection: record.collection,
        mint: record.mint,
        id,
        recipient: ctx.accounts.recipient.key(),
        uri,
    });

    Ok(())
}
