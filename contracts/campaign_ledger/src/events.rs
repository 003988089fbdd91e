use soroban_sdk::{contracttype, Address, Env, String, Symbol};

use crate::campaign::{CampaignId, CampaignStatus};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignCreatedEvent {
    pub campaign_id: CampaignId,
    pub owner: Address,
    pub name: String,
    pub target_amount: i128,
    pub deadline: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContributedEvent {
    pub campaign_id: CampaignId,
    pub contributor: Address,
    pub amount: i128,
    pub balance: i128,
    pub status: CampaignStatus,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DeadlineHitEvent {
    pub campaign_id: CampaignId,
    pub balance: i128,
    pub status: CampaignStatus,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawnEvent {
    pub campaign_id: CampaignId,
    pub to: Address,
    pub amount: i128,
}

/// Publishes `data` under the topics `("campaign", name)`.
#[allow(deprecated)]
fn publish<D>(env: &Env, name: &str, data: D)
where
    D: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
{
    env.events().publish(
        (Symbol::new(env, "campaign"), Symbol::new(env, name)),
        data,
    );
}

pub fn emit_campaign_created(env: &Env, event: CampaignCreatedEvent) {
    publish(env, "campaign_created", event);
}

pub fn emit_contributed(env: &Env, event: ContributedEvent) {
    publish(env, "contributed", event);
}

pub fn emit_deadline_hit(env: &Env, event: DeadlineHitEvent) {
    publish(env, "deadline_hit", event);
}

pub fn emit_owner_withdrawn(env: &Env, event: WithdrawnEvent) {
    publish(env, "owner_withdrawn", event);
}

pub fn emit_contributor_refunded(env: &Env, event: WithdrawnEvent) {
    publish(env, "contributor_refunded", event);
}
