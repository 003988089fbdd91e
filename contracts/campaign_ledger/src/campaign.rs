//! The campaign record and its lifecycle.
//!
//! ```text
//! Ongoing ──(balance reaches target)──────────────► Successful
//!    └────(hit_deadline after deadline, short)────► Failed
//! ```
//!
//! Both terminal states are final. The owner may only be paid out of a
//! Successful campaign, contributors may only be refunded out of a Failed one.
//!
//! Every transition takes the clock and the caller as plain arguments and
//! checks all of its preconditions before touching `self`, so a rejected
//! transition never leaves a half-updated record behind.

use soroban_sdk::{contracttype, Address, String};

use crate::error::ContractError;

/// Sequential campaign identifier, starting at 0.
pub type CampaignId = u64;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum CampaignStatus {
    /// Accepting contributions.
    Ongoing,
    /// Target met; the owner may withdraw.
    Successful,
    /// Deadline passed short of the target; contributors may withdraw.
    Failed,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub id: CampaignId,
    pub name: String,
    pub owner: Address,
    /// Funding goal in the payment token's smallest unit.
    pub target_amount: i128,
    /// Ledger timestamp (seconds) at which contributions close.
    pub deadline: u64,
    /// Funds currently held for this campaign.
    pub balance: i128,
    pub status: CampaignStatus,
}

impl Campaign {
    pub fn new(
        id: CampaignId,
        owner: Address,
        name: String,
        target_amount: i128,
        duration: u64,
        now: u64,
    ) -> Result<Self, ContractError> {
        if name.is_empty() || target_amount <= 0 || duration == 0 {
            return Err(ContractError::InvalidArgument);
        }
        let deadline = now
            .checked_add(duration)
            .ok_or(ContractError::InvalidArgument)?;

        Ok(Self {
            id,
            name,
            owner,
            target_amount,
            deadline,
            balance: 0,
            status: CampaignStatus::Ongoing,
        })
    }

    pub fn is_terminal(&self) -> bool {
        self.status != CampaignStatus::Ongoing
    }

    /// Records `amount` against the campaign balance. The contribution that
    /// crosses the target is accepted in full and closes the campaign.
    pub fn accept_contribution(&mut self, amount: i128, now: u64) -> Result<(), ContractError> {
        if amount <= 0 {
            return Err(ContractError::InvalidArgument);
        }
        if self.is_terminal() || now >= self.deadline {
            return Err(ContractError::InvalidState);
        }
        let balance = self
            .balance
            .checked_add(amount)
            .ok_or(ContractError::InvalidArgument)?;

        self.balance = balance;
        if self.balance >= self.target_amount {
            self.status = CampaignStatus::Successful;
        }
        Ok(())
    }

    /// Settles an Ongoing campaign whose deadline has passed.
    pub fn hit_deadline(&mut self, now: u64) -> Result<CampaignStatus, ContractError> {
        if self.is_terminal() || now < self.deadline {
            return Err(ContractError::InvalidState);
        }
        if self.balance < self.target_amount {
            self.status = CampaignStatus::Failed;
        }
        Ok(self.status)
    }

    /// Empties the balance for the owner. Returns the amount to pay out.
    pub fn release_to_owner(&mut self, caller: &Address) -> Result<i128, ContractError> {
        if *caller != self.owner {
            return Err(ContractError::Unauthorized);
        }
        if self.status != CampaignStatus::Successful || self.balance == 0 {
            return Err(ContractError::InvalidState);
        }

        let amount = self.balance;
        self.balance = 0;
        Ok(amount)
    }

    /// Takes one contributor's full stake back out of a Failed campaign.
    pub fn refund(&mut self, contributed: i128) -> Result<i128, ContractError> {
        if self.status != CampaignStatus::Failed {
            return Err(ContractError::InvalidState);
        }
        if contributed <= 0 || contributed > self.balance {
            return Err(ContractError::InvalidArgument);
        }

        self.balance -= contributed;
        Ok(contributed)
    }
}
