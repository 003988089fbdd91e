#![no_std]

use soroban_sdk::{contract, contractimpl, token, Address, Env, String};

mod campaign;
mod error;
mod events;
mod storage;


pub use campaign::{Campaign, CampaignId, CampaignStatus};
pub use error::ContractError;

use events::{CampaignCreatedEvent, ContributedEvent, DeadlineHitEvent, WithdrawnEvent};

// ── Contract ────────────────────────────────────────────────────────────────

/// Registry of independent crowdfunding campaigns, all funded in one token.
#[contract]
pub struct CampaignLedger;

#[contractimpl]
impl CampaignLedger {
    /// Binds the ledger to the token every campaign is funded in. Runs once,
    /// atomically with deployment.
    pub fn __constructor(env: Env, token: Address) {
        storage::set_token(&env, &token);
    }

    /// Opens a new campaign owned by `owner`.
    ///
    /// # Arguments
    /// * `owner`         – The creator, the only address allowed to withdraw on success.
    /// * `name`          – Non-empty label.
    /// * `target_amount` – Funding goal in the token's smallest unit.
    /// * `duration`      – Seconds from now until contributions close.
    ///
    /// # Returns
    /// The new campaign's id. Ids start at 0 and increase by one per call.
    pub fn create_campaign(
        env: Env,
        owner: Address,
        name: String,
        target_amount: i128,
        duration: u64,
    ) -> Result<CampaignId, ContractError> {
        owner.require_auth();

        let id = storage::campaign_count(&env);
        let campaign = Campaign::new(
            id,
            owner,
            name,
            target_amount,
            duration,
            env.ledger().timestamp(),
        )?;
        storage::increment_campaign_count(&env);
        storage::set_campaign(&env, &campaign);

        events::emit_campaign_created(
            &env,
            CampaignCreatedEvent {
                campaign_id: id,
                owner: campaign.owner,
                name: campaign.name,
                target_amount: campaign.target_amount,
                deadline: campaign.deadline,
            },
        );

        Ok(id)
    }

    /// Moves `amount` from `contributor` into the campaign.
    ///
    /// Rejected once the campaign is Successful or Failed, and at or after its
    /// deadline even if nobody has called `hit_deadline` yet.
    pub fn contribute(
        env: Env,
        campaign_id: CampaignId,
        contributor: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        contributor.require_auth();

        let token_address = storage::token(&env)?;
        let mut campaign = storage::campaign(&env, campaign_id)?;
        campaign.accept_contribution(amount, env.ledger().timestamp())?;

        let total = storage::contribution(&env, campaign_id, &contributor)
            .checked_add(amount)
            .ok_or(ContractError::InvalidArgument)?;

        token::Client::new(&env, &token_address).transfer(
            &contributor,
            &env.current_contract_address(),
            &amount,
        );

        storage::set_contribution(&env, campaign_id, &contributor, total);
        storage::set_campaign(&env, &campaign);

        events::emit_contributed(
            &env,
            ContributedEvent {
                campaign_id,
                contributor,
                amount,
                balance: campaign.balance,
                status: campaign.status,
            },
        );
        Ok(())
    }

    /// Current status. Never changes state.
    pub fn check_status(
        env: Env,
        campaign_id: CampaignId,
    ) -> Result<CampaignStatus, ContractError> {
        Ok(storage::campaign(&env, campaign_id)?.status)
    }

    /// Settles an Ongoing campaign after its deadline. Callable by anyone.
    ///
    /// A campaign still short of its target becomes Failed. Calling this before
    /// the deadline, or on a campaign that is already settled, is rejected.
    pub fn hit_deadline(
        env: Env,
        campaign_id: CampaignId,
    ) -> Result<CampaignStatus, ContractError> {
        let mut campaign = storage::campaign(&env, campaign_id)?;
        let status = campaign.hit_deadline(env.ledger().timestamp())?;
        storage::set_campaign(&env, &campaign);

        events::emit_deadline_hit(
            &env,
            DeadlineHitEvent {
                campaign_id,
                balance: campaign.balance,
                status,
            },
        );
        Ok(status)
    }

    /// Pays the whole balance of a Successful campaign to its owner.
    ///
    /// A second call after the balance has been paid out is rejected.
    pub fn withdraw_owner(
        env: Env,
        campaign_id: CampaignId,
        caller: Address,
    ) -> Result<i128, ContractError> {
        caller.require_auth();

        let token_address = storage::token(&env)?;
        let mut campaign = storage::campaign(&env, campaign_id)?;
        let amount = campaign.release_to_owner(&caller)?;
        storage::set_campaign(&env, &campaign);

        token::Client::new(&env, &token_address).transfer(
            &env.current_contract_address(),
            &caller,
            &amount,
        );

        events::emit_owner_withdrawn(
            &env,
            WithdrawnEvent {
                campaign_id,
                to: caller,
                amount,
            },
        );
        Ok(amount)
    }

    /// Returns a contributor's full stake out of a Failed campaign.
    pub fn withdraw_contributor(
        env: Env,
        campaign_id: CampaignId,
        contributor: Address,
    ) -> Result<i128, ContractError> {
        contributor.require_auth();

        let token_address = storage::token(&env)?;
        let mut campaign = storage::campaign(&env, campaign_id)?;
        let contributed = storage::contribution(&env, campaign_id, &contributor);
        let amount = campaign.refund(contributed)?;

        storage::remove_contribution(&env, campaign_id, &contributor);
        storage::set_campaign(&env, &campaign);

        token::Client::new(&env, &token_address).transfer(
            &env.current_contract_address(),
            &contributor,
            &amount,
        );

        events::emit_contributor_refunded(
            &env,
            WithdrawnEvent {
                campaign_id,
                to: contributor,
                amount,
            },
        );
        Ok(amount)
    }

    // ── View helpers ────────────────────────────────────────────────────

    /// Full campaign record.
    pub fn campaign(env: Env, campaign_id: CampaignId) -> Result<Campaign, ContractError> {
        storage::campaign(&env, campaign_id)
    }

    /// Amount `contributor` currently has in the campaign. Zero after a refund.
    pub fn contribution(
        env: Env,
        campaign_id: CampaignId,
        contributor: Address,
    ) -> Result<i128, ContractError> {
        storage::campaign(&env, campaign_id)?;
        Ok(storage::contribution(&env, campaign_id, &contributor))
    }

    /// Number of campaigns ever created.
    pub fn campaign_count(env: Env) -> u64 {
        storage::campaign_count(&env)
    }

    /// The token campaigns are funded in.
    pub fn token(env: Env) -> Result<Address, ContractError> {
        storage::token(&env)
    }
}
