use soroban_sdk::{contracterror, contracttype, Address};

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    Token,
    MaxDuration,
    CampaignCount,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Campaign(CampaignId),
    Contribution(CampaignId, Address), // (CampaignId, Funder) -> amount
}

pub type CampaignId = u64;

/// A fundraising goal with an owner and a funding window.
#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub id: CampaignId,
    pub owner: Address,
    pub goal: i128,
    pub start_time: u64,
    pub end_time: u64,
    /// Sum of every funder's current contribution. Left untouched by claim,
    /// so a claimed campaign keeps the total it raised.
    pub funding_amount: i128,
    pub claimed: bool,
    pub cancelled: bool,
    /// Whether `funding_amount` stood at or above `goal` after the last fund/withdraw.
    pub goal_reached: bool,
}

// Lifecycle as observed at a given ledger timestamp
#[derive(Clone, Copy, Debug, PartialEq)]
#[contracttype]
pub enum CampaignStatus {
    Pending,
    Active,
    Succeeded,
    Claimed,
    Failed,
    Cancelled,
}

impl Campaign {
    pub fn status_at(&self, now: u64) -> CampaignStatus {
        if self.cancelled {
            CampaignStatus::Cancelled
        } else if now < self.start_time {
            CampaignStatus::Pending
        } else if now < self.end_time {
            CampaignStatus::Active
        } else if self.claimed {
            CampaignStatus::Claimed
        } else if self.funding_amount >= self.goal {
            CampaignStatus::Succeeded
        } else {
            CampaignStatus::Failed
        }
    }
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CrowdfundError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    UnknownCampaign = 3,
    DuplicateCampaign = 4,
    InvalidCampaignId = 5,
    InvalidGoal = 6,
    InvalidWindow = 7,
    StartInPast = 8,
    WindowTooLong = 9,
    InvalidAmount = 10,
    NotOwner = 11,
    AlreadyStarted = 12,
    NotStartedYet = 13,
    CampaignEnded = 14,
    ExceedsContribution = 15,
    CampaignNotFinished = 16,
    NotCampaignOwner = 17,
    GoalNotReached = 18,
    AlreadyClaimed = 19,
    CampaignSucceeded = 20,
    NothingToRefund = 21,
    Overflow = 22,
}

// Constants
pub const DAY_IN_SECONDS: u64 = 86_400;
pub const DEFAULT_MAX_DURATION: u64 = DAY_IN_SECONDS * 90;
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
