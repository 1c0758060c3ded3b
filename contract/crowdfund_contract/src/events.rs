use soroban_sdk::{contracttype, Address, Env, Symbol};

use crate::storage_types::CampaignId;

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct LaunchEvent {
    pub id: CampaignId,
    pub owner: Address,
    pub goal: i128,
    pub start_time: u64,
    pub end_time: u64,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct CancelEvent {
    pub id: CampaignId,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct FundEvent {
    pub id: CampaignId,
    pub funder: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct GoalReachedEvent {
    pub id: CampaignId,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct WithdrawalEvent {
    pub id: CampaignId,
    pub funder: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct ClaimEvent {
    pub id: CampaignId,
    pub owner: Address,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct RefundEvent {
    pub id: CampaignId,
    pub funder: Address,
}

pub fn emit_launch(env: &Env, event: LaunchEvent) {
    env.events()
        .publish((Symbol::new(env, "launch"), event.id), event);
}

pub fn emit_cancel(env: &Env, event: CancelEvent) {
    env.events()
        .publish((Symbol::new(env, "cancel"), event.id), event);
}

pub fn emit_fund(env: &Env, event: FundEvent) {
    env.events()
        .publish((Symbol::new(env, "fund"), event.id), event);
}

pub fn emit_goal_reached(env: &Env, event: GoalReachedEvent) {
    env.events()
        .publish((Symbol::new(env, "goal_reached"), event.id), event);
}

pub fn emit_withdrawal(env: &Env, event: WithdrawalEvent) {
    env.events()
        .publish((Symbol::new(env, "withdrawal"), event.id), event);
}

pub fn emit_claim(env: &Env, event: ClaimEvent) {
    env.events()
        .publish((Symbol::new(env, "claim"), event.id), event);
}

pub fn emit_refund(env: &Env, event: RefundEvent) {
    env.events()
        .publish((Symbol::new(env, "refund"), event.id), event);
}
