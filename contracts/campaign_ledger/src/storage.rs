use soroban_sdk::{contracttype, Address, Env};

use crate::campaign::{Campaign, CampaignId};
use crate::error::ContractError;

const DAY_IN_LEDGERS: u32 = 17_280;
pub const INSTANCE_TTL: u32 = DAY_IN_LEDGERS * 30;
pub const PERSISTENT_TTL: u32 = DAY_IN_LEDGERS * 90;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    /// The token every campaign is funded in.
    Token,
    /// Number of campaigns created so far, which is also the next id.
    CampaignCount,
    /// Campaign record by id.
    Campaign(CampaignId),
    /// Running total contributed by an address to a campaign.
    Contribution(CampaignId, Address),
}

fn extend_instance(env: &Env) {
    env.storage().instance().extend_ttl(INSTANCE_TTL, INSTANCE_TTL);
}

fn extend_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL, PERSISTENT_TTL);
}

// ── Configuration ───────────────────────────────────────────────────────────

pub fn set_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::Token, token);
    extend_instance(env);
}

pub fn token(env: &Env) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(ContractError::NotInitialized)
}

// ── Campaigns ───────────────────────────────────────────────────────────────

pub fn campaign_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::CampaignCount)
        .unwrap_or(0)
}

pub fn increment_campaign_count(env: &Env) {
    let count = campaign_count(env) + 1;
    env.storage().instance().set(&DataKey::CampaignCount, &count);
    extend_instance(env);
}

pub fn campaign(env: &Env, id: CampaignId) -> Result<Campaign, ContractError> {
    env.storage()
        .persistent()
        .get(&DataKey::Campaign(id))
        .ok_or(ContractError::NotFound)
}

pub fn set_campaign(env: &Env, campaign: &Campaign) {
    let key = DataKey::Campaign(campaign.id);
    env.storage().persistent().set(&key, campaign);
    extend_persistent(env, &key);
}

// ── Contributions ───────────────────────────────────────────────────────────

pub fn contribution(env: &Env, id: CampaignId, contributor: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Contribution(id, contributor.clone()))
        .unwrap_or(0)
}

pub fn set_contribution(env: &Env, id: CampaignId, contributor: &Address, amount: i128) {
    let key = DataKey::Contribution(id, contributor.clone());
    env.storage().persistent().set(&key, &amount);
    extend_persistent(env, &key);
}

pub fn remove_contribution(env: &Env, id: CampaignId, contributor: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::Contribution(id, contributor.clone()));
}
