//! Core election engine — runs every operation against an explicit context.
//!
//! The engine owns the election state and composes two host collaborators:
//! a [`RoleService`] consulted before every gated operation and a
//! [`ValueTransfer`] primitive used for donations. Operations take
//! `&mut self`, which serializes them; each one runs inside a
//! [`Transaction`] and commits only when every check has passed.

use election_host::{Context, RoleService, ValueTransfer};
use election_types::{FundAmount, Identity, Phase, Role, Timestamp};
use election_utils::format_duration;
use tracing::{debug, info, warn};

use crate::candidate::{Candidate, CandidateId};
use crate::config::ElectionConfig;
use crate::donation::DonationRecord;
use crate::error::ElectionError;
use crate::event::ElectionEvent;
use crate::results::leading_candidate;
use crate::state::{ElectionState, Transaction};

pub struct ElectionEngine<R, T> {
    config: ElectionConfig,
    roles: R,
    transfer: T,
    state: ElectionState,
}

fn require_role<R: RoleService>(roles: &R, ctx: &Context, role: Role) -> Result<(), ElectionError> {
    if roles.has_role(ctx.caller(), role) {
        return Ok(());
    }
    warn!(caller = %ctx.caller(), %role, "unauthorized call rejected");
    Err(ElectionError::Unauthorized {
        caller: ctx.caller().clone(),
        role,
    })
}

impl<R: RoleService, T: ValueTransfer> ElectionEngine<R, T> {
    /// Deploy a new election. `deployer` becomes the first Operator.
    pub fn new(config: ElectionConfig, mut roles: R, transfer: T, deployer: &Identity) -> Self {
        roles.grant_role(Role::Operator, deployer);
        info!(
            %deployer,
            treasury = %config.treasury,
            vote_delay = %format_duration(config.vote_delay_secs),
            "election deployed"
        );
        Self {
            config,
            roles,
            transfer,
            state: ElectionState::default(),
        }
    }

    // ── Phase controller ────────────────────────────────────────────────

    /// Move to `phase`. Operator only; any phase may follow any other.
    pub fn set_phase(&mut self, ctx: &Context, phase: Phase) -> Result<(), ElectionError> {
        require_role(&self.roles, ctx, Role::Operator)?;

        let from = self.state.phase.current();
        let mut txn = Transaction::begin(&mut self.state);
        txn.set_phase(phase, ctx.now());
        txn.emit(ElectionEvent::PhaseChanged {
            from,
            to: phase,
            by: ctx.caller().clone(),
            at: ctx.now(),
        });
        txn.commit();

        if phase == Phase::Voting {
            info!(
                %from,
                opens_at = %self.state.phase.voting_opens_at(self.config.vote_delay_secs),
                "voting phase entered"
            );
        } else {
            info!(%from, to = %phase, "phase changed");
        }
        Ok(())
    }

    pub fn current_phase(&self) -> Phase {
        self.state.phase.current()
    }

    pub fn vote_start_time(&self) -> Timestamp {
        self.state.phase.vote_start_time()
    }

    pub fn require_phase(&self, expected: Phase) -> Result<(), ElectionError> {
        self.state.phase.require(expected)
    }

    // ── Candidate registry ──────────────────────────────────────────────

    /// Register a candidate. Operator only, during `Registration`.
    pub fn add_candidate(&mut self, ctx: &Context, name: &str) -> Result<CandidateId, ElectionError> {
        require_role(&self.roles, ctx, Role::Operator)?;
        self.state.phase.require(Phase::Registration)?;
        if name.is_empty() {
            return Err(ElectionError::EmptyName);
        }

        let mut txn = Transaction::begin(&mut self.state);
        let id = txn.add_candidate(name.to_string());
        txn.emit(ElectionEvent::CandidateAdded {
            id,
            name: name.to_string(),
            at: ctx.now(),
        });
        txn.commit();

        info!(candidate_id = id, name, "candidate registered");
        Ok(id)
    }

    pub fn get_candidate(&self, id: CandidateId) -> Result<&Candidate, ElectionError> {
        self.state.candidates.get(id)
    }

    pub fn get_candidates_count(&self) -> u64 {
        self.state.candidates.count()
    }

    /// All candidates in ascending id order.
    pub fn candidates(&self) -> &[Candidate] {
        self.state.candidates.all()
    }

    // ── Ballot ledger ───────────────────────────────────────────────────

    /// Cast the caller's single vote for `candidate_id`.
    ///
    /// Checks run in a fixed order so the reported failure is predictable:
    /// phase, opening delay, previous vote, candidate id.
    pub fn cast_vote(&mut self, ctx: &Context, candidate_id: CandidateId) -> Result<(), ElectionError> {
        self.state.phase.require(Phase::Voting)?;

        let delay = self.config.vote_delay_secs;
        if !self.state.phase.is_voting_open(delay, ctx.now()) {
            let opens_at = self.state.phase.voting_opens_at(delay);
            debug!(
                voter = %ctx.caller(),
                remaining = %format_duration(opens_at.as_secs() - ctx.now().as_secs()),
                "vote rejected: voting not open yet"
            );
            return Err(ElectionError::TooEarly {
                opens_at,
                now: ctx.now(),
            });
        }

        if self.state.ballot.has_voted(ctx.caller()) {
            debug!(voter = %ctx.caller(), "vote rejected: already voted");
            return Err(ElectionError::AlreadyVoted(ctx.caller().clone()));
        }

        self.state.candidates.validate(candidate_id)?;

        let mut txn = Transaction::begin(&mut self.state);
        txn.record_vote(ctx.caller(), candidate_id)?;
        txn.emit(ElectionEvent::VoteCast {
            voter: ctx.caller().clone(),
            candidate_id,
            at: ctx.now(),
        });
        txn.commit();

        info!(voter = %ctx.caller(), candidate_id, "vote cast");
        Ok(())
    }

    pub fn get_total_votes(&self, candidate_id: CandidateId) -> Result<u64, ElectionError> {
        self.state.candidates.get(candidate_id).map(|c| c.vote_count)
    }

    pub fn has_voted(&self, voter: &Identity) -> bool {
        self.state.ballot.has_voted(voter)
    }

    // ── Donation ledger ─────────────────────────────────────────────────

    /// Move `amount` from the calling Sponsor to the treasury and credit it
    /// to `candidate_id`. Legal in every phase.
    ///
    /// The transfer is the last step: if it fails, the credit and the audit
    /// record are rolled back.
    pub fn donate(
        &mut self,
        ctx: &Context,
        candidate_id: CandidateId,
        amount: FundAmount,
    ) -> Result<(), ElectionError> {
        require_role(&self.roles, ctx, Role::Sponsor)?;
        self.state.candidates.validate(candidate_id)?;
        if amount.is_zero() {
            return Err(ElectionError::ZeroAmount);
        }

        let mut txn = Transaction::begin(&mut self.state);
        txn.credit_funds(candidate_id, amount)?;
        txn.record_donation(DonationRecord {
            sponsor: ctx.caller().clone(),
            candidate_id,
            amount,
            at: ctx.now(),
        });
        txn.emit(ElectionEvent::DonationReceived {
            sponsor: ctx.caller().clone(),
            candidate_id,
            amount,
            at: ctx.now(),
        });

        if let Err(e) = self
            .transfer
            .transfer(ctx.caller(), &self.config.treasury, amount)
        {
            warn!(sponsor = %ctx.caller(), candidate_id, %amount, error = %e, "donation transfer failed");
            return Err(e.into());
        }
        txn.commit();

        info!(sponsor = %ctx.caller(), candidate_id, %amount, "donation received");
        Ok(())
    }

    pub fn get_total_funds(&self, candidate_id: CandidateId) -> Result<FundAmount, ElectionError> {
        self.state
            .candidates
            .get(candidate_id)
            .map(|c| c.funds_received)
    }

    /// Every donation made to `candidate_id`, oldest first.
    pub fn donations_for(&self, candidate_id: CandidateId) -> Result<Vec<&DonationRecord>, ElectionError> {
        self.state.candidates.validate(candidate_id)?;
        Ok(self.state.donations.for_candidate(candidate_id))
    }

    /// Sum of all value received by the treasury through donations, or
    /// `None` if it does not fit in a `FundAmount`.
    pub fn total_donations(&self) -> Option<FundAmount> {
        self.state.donations.total()
    }

    // ── Result calculator ───────────────────────────────────────────────

    /// The candidate with the most votes; ties go to the lowest id.
    /// Only available once the election is `Completed`.
    pub fn designate_winner(&self) -> Result<&Candidate, ElectionError> {
        self.state.phase.require(Phase::Completed)?;
        leading_candidate(self.state.candidates.all())
    }

    // ── Role gating ─────────────────────────────────────────────────────

    pub fn has_role(&self, identity: &Identity, role: Role) -> bool {
        self.roles.has_role(identity, role)
    }

    /// Grant `role` to `identity`. Operator only.
    pub fn grant_role(&mut self, ctx: &Context, role: Role, identity: &Identity) -> Result<(), ElectionError> {
        require_role(&self.roles, ctx, Role::Operator)?;

        if !self.roles.grant_role(role, identity) {
            debug!(%identity, %role, "role already held");
            return Ok(());
        }

        let mut txn = Transaction::begin(&mut self.state);
        txn.emit(ElectionEvent::RoleGranted {
            role,
            identity: identity.clone(),
            by: ctx.caller().clone(),
            at: ctx.now(),
        });
        txn.commit();

        info!(%identity, %role, by = %ctx.caller(), "role granted");
        Ok(())
    }

    /// Revoke `role` from `identity`. Operator only.
    pub fn revoke_role(&mut self, ctx: &Context, role: Role, identity: &Identity) -> Result<(), ElectionError> {
        require_role(&self.roles, ctx, Role::Operator)?;

        if !self.roles.revoke_role(role, identity) {
            debug!(%identity, %role, "role not held");
            return Ok(());
        }

        let mut txn = Transaction::begin(&mut self.state);
        txn.emit(ElectionEvent::RoleRevoked {
            role,
            identity: identity.clone(),
            by: ctx.caller().clone(),
            at: ctx.now(),
        });
        txn.commit();

        info!(%identity, %role, by = %ctx.caller(), "role revoked");
        Ok(())
    }

    // ── Accessors ───────────────────────────────────────────────────────

    /// Committed events, oldest first.
    pub fn events(&self) -> &[ElectionEvent] {
        &self.state.events
    }

    pub fn state(&self) -> &ElectionState {
        &self.state
    }

    pub fn config(&self) -> &ElectionConfig {
        &self.config
    }

    pub fn roles(&self) -> &R {
        &self.roles
    }

    pub fn transfer(&self) -> &T {
        &self.transfer
    }

    /// Direct access to the transfer collaborator, for the host to fund or
    /// freeze accounts.
    pub fn transfer_mut(&mut self) -> &mut T {
        &mut self.transfer
    }
}
