use soroban_sdk::{token, Address, Env};

use crate::storage_types::*;

pub fn extend_instance(env: &Env) {
    env.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

pub fn extend_persistent(env: &Env, key: &PersistentKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
}

/// Address of the asset every campaign is denominated in.
pub fn token_address(env: &Env) -> Result<Address, CrowdfundError> {
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(CrowdfundError::NotInitialized)
}

pub fn require_initialized(env: &Env) -> Result<(), CrowdfundError> {
    token_address(env).map(|_| ())
}

pub fn max_duration(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::MaxDuration)
        .unwrap_or(DEFAULT_MAX_DURATION)
}

/// Load a campaign record, cancelled ones included.
pub fn load_campaign(env: &Env, id: CampaignId) -> Result<Campaign, CrowdfundError> {
    env.storage()
        .persistent()
        .get(&PersistentKey::Campaign(id))
        .ok_or(CrowdfundError::UnknownCampaign)
}

pub fn campaign_exists(env: &Env, id: CampaignId) -> bool {
    env.storage().persistent().has(&PersistentKey::Campaign(id))
}

/// Load a campaign that can still accept fund/withdraw/claim/refund.
pub fn load_live_campaign(env: &Env, id: CampaignId) -> Result<Campaign, CrowdfundError> {
    let campaign = load_campaign(env, id)?;
    if campaign.cancelled {
        return Err(CrowdfundError::UnknownCampaign);
    }
    Ok(campaign)
}

pub fn save_campaign(env: &Env, campaign: &Campaign) {
    let key = PersistentKey::Campaign(campaign.id);
    env.storage().persistent().set(&key, campaign);
    extend_persistent(env, &key);
}

pub fn contribution(env: &Env, id: CampaignId, funder: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&PersistentKey::Contribution(id, funder.clone()))
        .unwrap_or(0)
}

pub fn set_contribution(env: &Env, id: CampaignId, funder: &Address, amount: i128) {
    let key = PersistentKey::Contribution(id, funder.clone());
    if amount == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &amount);
        extend_persistent(env, &key);
    }
}

/// Reject calls outside `[start_time, end_time)`.
pub fn require_window_open(campaign: &Campaign, now: u64) -> Result<(), CrowdfundError> {
    if now < campaign.start_time {
        return Err(CrowdfundError::NotStartedYet);
    }
    if now >= campaign.end_time {
        return Err(CrowdfundError::CampaignEnded);
    }
    Ok(())
}

pub fn require_positive(amount: i128) -> Result<(), CrowdfundError> {
    if amount <= 0 {
        return Err(CrowdfundError::InvalidAmount);
    }
    Ok(())
}

/// Pull `amount` from `from` into the contract.
pub fn collect(env: &Env, from: &Address, amount: i128) -> Result<(), CrowdfundError> {
    let token_client = token::Client::new(env, &token_address(env)?);
    token_client.transfer(from, &env.current_contract_address(), &amount);
    Ok(())
}

/// Pay `amount` out of the contract. Callers must have persisted their
/// bookkeeping before calling this.
pub fn pay_out(env: &Env, to: &Address, amount: i128) -> Result<(), CrowdfundError> {
    let token_client = token::Client::new(env, &token_address(env)?);
    token_client.transfer(&env.current_contract_address(), to, &amount);
    Ok(())
}

/// Debit a running campaign by `amount` for `funder`, then hand the amount to
/// `transfer`.
pub fn settle_withdrawal<F>(
    env: &Env,
    funder: &Address,
    id: CampaignId,
    amount: i128,
    now: u64,
    transfer: F,
) -> Result<(), CrowdfundError>
where
    F: FnOnce(&Env, &Address, i128) -> Result<(), CrowdfundError>,
{
    let mut campaign = load_live_campaign(env, id)?;
    require_window_open(&campaign, now)?;

    let entry = contribution(env, id, funder);
    if amount > entry {
        return Err(CrowdfundError::ExceedsContribution);
    }

    campaign.funding_amount -= amount;
    if campaign.funding_amount < campaign.goal {
        campaign.goal_reached = false;
    }
    set_contribution(env, id, funder, entry - amount);
    save_campaign(env, &campaign);

    transfer(env, funder, amount)
}

/// Mark a successful campaign claimed, then hand its pool to `transfer`.
pub fn settle_claim<F>(
    env: &Env,
    caller: &Address,
    id: CampaignId,
    now: u64,
    transfer: F,
) -> Result<Campaign, CrowdfundError>
where
    F: FnOnce(&Env, &Address, i128) -> Result<(), CrowdfundError>,
{
    let mut campaign = load_live_campaign(env, id)?;
    if now < campaign.end_time {
        return Err(CrowdfundError::CampaignNotFinished);
    }
    if *caller != campaign.owner {
        return Err(CrowdfundError::NotCampaignOwner);
    }
    if campaign.claimed {
        return Err(CrowdfundError::AlreadyClaimed);
    }
    if campaign.funding_amount < campaign.goal {
        return Err(CrowdfundError::GoalNotReached);
    }

    campaign.claimed = true;
    save_campaign(env, &campaign);

    transfer(env, &campaign.owner, campaign.funding_amount)?;
    Ok(campaign)
}

/// Zero a funder's entry on a failed campaign, then hand the old entry to
/// `transfer`. Returns the refunded amount.
pub fn settle_refund<F>(
    env: &Env,
    funder: &Address,
    id: CampaignId,
    now: u64,
    transfer: F,
) -> Result<i128, CrowdfundError>
where
    F: FnOnce(&Env, &Address, i128) -> Result<(), CrowdfundError>,
{
    let mut campaign = load_live_campaign(env, id)?;
    if now < campaign.end_time {
        return Err(CrowdfundError::CampaignNotFinished);
    }
    if campaign.funding_amount >= campaign.goal {
        return Err(CrowdfundError::CampaignSucceeded);
    }

    let entry = contribution(env, id, funder);
    if entry == 0 {
        return Err(CrowdfundError::NothingToRefund);
    }

    set_contribution(env, id, funder, 0);
    campaign.funding_amount -= entry;
    save_campaign(env, &campaign);

    transfer(env, funder, entry)?;
    Ok(entry)
}
