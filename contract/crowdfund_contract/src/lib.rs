#![no_std]

mod campaign;
mod events;
mod storage_types;


use soroban_sdk::{contract, contractimpl, log, Address, Env};

use campaign::*;
pub use storage_types::{Campaign, CampaignId, CampaignStatus, CrowdfundError};
use storage_types::{DataKey, DEFAULT_MAX_DURATION};

#[contract]
pub struct CrowdfundContract;

#[contractimpl]
impl CrowdfundContract {
    /// Initialize the contract with its admin and the asset campaigns are funded in
    pub fn initialize(env: Env, admin: Address, token: Address) -> Result<(), CrowdfundError> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(CrowdfundError::AlreadyInitialized);
        }

        admin.require_auth();

        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::Token, &token);
        env.storage().instance().set(&DataKey::MaxDuration, &DEFAULT_MAX_DURATION);
        env.storage().instance().set(&DataKey::CampaignCount, &0u64);

        extend_instance(&env);
        Ok(())
    }

    /// Change the longest window a new campaign may request
    pub fn set_max_duration(env: Env, seconds: u64) -> Result<(), CrowdfundError> {
        let admin: Address = env
            .storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(CrowdfundError::NotInitialized)?;
        admin.require_auth();

        if seconds == 0 {
            return Err(CrowdfundError::InvalidWindow);
        }

        env.storage().instance().set(&DataKey::MaxDuration, &seconds);
        extend_instance(&env);
        Ok(())
    }

    /// Register a new campaign under a caller-chosen id
    pub fn launch(
        env: Env,
        owner: Address,
        id: CampaignId,
        goal: i128,
        start_time: u64,
        end_time: u64,
    ) -> Result<(), CrowdfundError> {
        if id == 0 {
            return Err(CrowdfundError::InvalidCampaignId);
        }
        if goal <= 0 {
            return Err(CrowdfundError::InvalidGoal);
        }
        if start_time >= end_time {
            return Err(CrowdfundError::InvalidWindow);
        }

        owner.require_auth();
        require_initialized(&env)?;

        let now = env.ledger().timestamp();
        if start_time < now {
            return Err(CrowdfundError::StartInPast);
        }
        if end_time - start_time > max_duration(&env) {
            return Err(CrowdfundError::WindowTooLong);
        }
        if campaign_exists(&env, id) {
            return Err(CrowdfundError::DuplicateCampaign);
        }

        let campaign = Campaign {
            id,
            owner: owner.clone(),
            goal,
            start_time,
            end_time,
            funding_amount: 0,
            claimed: false,
            cancelled: false,
            goal_reached: false,
        };
        save_campaign(&env, &campaign);

        let count: u64 = env
            .storage()
            .instance()
            .get(&DataKey::CampaignCount)
            .unwrap_or(0);
        let count = count.checked_add(1).ok_or(CrowdfundError::Overflow)?;
        env.storage().instance().set(&DataKey::CampaignCount, &count);
        extend_instance(&env);

        log!(&env, "campaign launched", id, goal);
        events::emit_launch(
            &env,
            events::LaunchEvent {
                id,
                owner,
                goal,
                start_time,
                end_time,
            },
        );
        Ok(())
    }

    /// Retire a campaign that has not started yet
    pub fn cancel(env: Env, caller: Address, id: CampaignId) -> Result<(), CrowdfundError> {
        require_initialized(&env)?;
        caller.require_auth();
        let now = env.ledger().timestamp();

        let mut campaign = load_live_campaign(&env, id)?;
        if caller != campaign.owner {
            return Err(CrowdfundError::NotOwner);
        }
        if now >= campaign.start_time {
            return Err(CrowdfundError::AlreadyStarted);
        }

        campaign.cancelled = true;
        save_campaign(&env, &campaign);

        log!(&env, "campaign cancelled", id);
        events::emit_cancel(&env, events::CancelEvent { id });
        Ok(())
    }

    /// Lock `amount` from `funder` against a running campaign
    pub fn fund(env: Env, funder: Address, id: CampaignId, amount: i128) -> Result<(), CrowdfundError> {
        require_positive(amount)?;
        require_initialized(&env)?;
        funder.require_auth();
        let now = env.ledger().timestamp();

        let mut campaign = load_live_campaign(&env, id)?;
        require_window_open(&campaign, now)?;

        let entry = contribution(&env, id, &funder)
            .checked_add(amount)
            .ok_or(CrowdfundError::Overflow)?;
        campaign.funding_amount = campaign
            .funding_amount
            .checked_add(amount)
            .ok_or(CrowdfundError::Overflow)?;

        let crossed = !campaign.goal_reached && campaign.funding_amount >= campaign.goal;
        if crossed {
            campaign.goal_reached = true;
        }

        set_contribution(&env, id, &funder, entry);
        save_campaign(&env, &campaign);
        collect(&env, &funder, amount)?;

        events::emit_fund(
            &env,
            events::FundEvent {
                id,
                funder,
                amount,
            },
        );
        if crossed {
            log!(&env, "goal reached", id, campaign.funding_amount);
            events::emit_goal_reached(&env, events::GoalReachedEvent { id });
        }
        Ok(())
    }

    /// Take back part of a contribution while the campaign is still running
    pub fn withdraw(env: Env, funder: Address, id: CampaignId, amount: i128) -> Result<(), CrowdfundError> {
        require_positive(amount)?;
        require_initialized(&env)?;
        funder.require_auth();
        let now = env.ledger().timestamp();

        settle_withdrawal(&env, &funder, id, amount, now, pay_out)?;

        events::emit_withdrawal(
            &env,
            events::WithdrawalEvent {
                id,
                funder,
                amount,
            },
        );
        Ok(())
    }

    /// Pay the pooled funds of a successful campaign to its owner, once
    pub fn claim(env: Env, caller: Address, id: CampaignId) -> Result<(), CrowdfundError> {
        require_initialized(&env)?;
        caller.require_auth();
        let now = env.ledger().timestamp();

        let campaign = settle_claim(&env, &caller, id, now, pay_out)?;

        log!(&env, "campaign claimed", id, campaign.funding_amount);
        events::emit_claim(
            &env,
            events::ClaimEvent {
                id,
                owner: campaign.owner,
            },
        );
        Ok(())
    }

    /// Return a funder's whole contribution after a failed campaign
    pub fn refund(env: Env, funder: Address, id: CampaignId) -> Result<(), CrowdfundError> {
        require_initialized(&env)?;
        funder.require_auth();
        let now = env.ledger().timestamp();

        let entry = settle_refund(&env, &funder, id, now, pay_out)?;

        log!(&env, "contribution refunded", id, entry);
        events::emit_refund(&env, events::RefundEvent { id, funder });
        Ok(())
    }

    /// View functions
    pub fn get_campaign(env: Env, id: CampaignId) -> Result<Campaign, CrowdfundError> {
        load_campaign(&env, id)
    }

    pub fn get_contribution(env: Env, id: CampaignId, funder: Address) -> i128 {
        contribution(&env, id, &funder)
    }

    pub fn get_status(env: Env, id: CampaignId) -> Result<CampaignStatus, CrowdfundError> {
        let campaign = load_campaign(&env, id)?;
        Ok(campaign.status_at(env.ledger().timestamp()))
    }

    pub fn get_token(env: Env) -> Result<Address, CrowdfundError> {
        token_address(&env)
    }

    pub fn get_max_duration(env: Env) -> u64 {
        max_duration(&env)
    }

    pub fn get_campaign_count(env: Env) -> u64 {
        env.storage()
            .instance()
            .get(&DataKey::CampaignCount)
            .unwrap_or(0)
    }
}
