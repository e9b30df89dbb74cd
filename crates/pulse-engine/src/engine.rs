//! The engagement engine facade
//!
//! Wires the role gate, goal catalog, progress ledger and leveling
//! engine behind one surface so the embedding application depends on a
//! single crate. The facade also enforces the one cross-component
//! rule: a goal's criteria are frozen once any participant has
//! progress against it.

use crate::config::EngineConfig;
use crate::error::PulseError;
use parking_lot::RwLock;
use pulse_catalog::{
    recommendations_for, GoalCatalog, GoalDraft, GoalPatch, GoalStore, GoalTemplate,
    MemoryGoalStore,
};
use pulse_domain::{
    CriterionId, Goal, GoalCategory, GoalId, GoalStatus, OrgRole, ParticipantId, Progress,
    RoleGate, TeamId, TrackedAction,
};
use pulse_ledger::{
    GoalStanding, MemoryProgressStore, ProgressLedger, ProgressSnapshot, ProgressStore,
};
use pulse_leveling::{
    ConfigStore, LevelStanding, LevelingConfig, LevelingEngine, MemoryConfigStore, Reward,
    LEVELING_CONFIG_KEY,
};
use std::sync::Arc;
use tracing::warn;

/// The Pulse engagement engine
///
/// Store lifetimes are owned by the embedding application and injected
/// here; the engine itself keeps no ambient global state.
pub struct PulseEngine<S, P> {
    catalog: Arc<GoalCatalog<S>>,
    ledger: ProgressLedger<S, P>,
    leveling: RwLock<LevelingEngine>,
    config_store: Arc<dyn ConfigStore>,
}

impl PulseEngine<MemoryGoalStore, MemoryProgressStore> {
    /// Fully in-memory engine with default configuration
    #[must_use]
    pub fn in_memory() -> Self {
        Self::with_stores(
            MemoryGoalStore::new(),
            MemoryProgressStore::new(),
            Arc::new(MemoryConfigStore::new()),
            EngineConfig::default(),
        )
    }
}

impl<S: GoalStore, P: ProgressStore> PulseEngine<S, P> {
    /// Build an engine over injected stores
    ///
    /// A stored leveling override takes precedence over
    /// `config.leveling`; an invalid `config.leveling` degrades to the
    /// built-in defaults the same way a corrupt stored snapshot does.
    #[must_use]
    pub fn with_stores(
        goal_store: S,
        progress_store: P,
        config_store: Arc<dyn ConfigStore>,
        config: EngineConfig,
    ) -> Self {
        let gate = RoleGate::with_eligible(config.eligible_roles.iter().copied());
        let catalog = Arc::new(GoalCatalog::new(goal_store, gate.clone()));
        let ledger = ProgressLedger::new(Arc::clone(&catalog), progress_store, gate);

        let leveling = if config_store.get(LEVELING_CONFIG_KEY).is_some() {
            LevelingEngine::load(config_store.as_ref())
        } else {
            LevelingEngine::from_config(config.leveling).unwrap_or_else(|err| {
                warn!(%err, "supplied leveling config invalid, using defaults");
                LevelingEngine::with_defaults()
            })
        };

        Self {
            catalog,
            ledger,
            leveling: RwLock::new(leveling),
            config_store,
        }
    }

    // --- goal catalog ---------------------------------------------------

    /// Accept a goal draft into the catalog
    ///
    /// # Errors
    /// See [`GoalCatalog::create_goal`].
    pub fn create_goal(
        &self,
        draft: GoalDraft,
        created_by: ParticipantId,
    ) -> Result<Goal, PulseError> {
        Ok(self.catalog.create_goal(draft, created_by)?)
    }

    /// Patch a stored goal
    ///
    /// # Errors
    /// - `PulseError::CriteriaFrozen` when the patch replaces criteria
    ///   and any participant already has progress against the goal
    /// - otherwise see [`GoalCatalog::update_goal`]
    pub fn update_goal(
        &self,
        id: GoalId,
        patch: GoalPatch,
        updated_by: ParticipantId,
    ) -> Result<Goal, PulseError> {
        if patch.touches_criteria() && self.ledger.has_progress_against(id) {
            return Err(PulseError::CriteriaFrozen(id));
        }
        Ok(self.catalog.update_goal(id, patch, updated_by)?)
    }

    /// Turn a goal on for a manager's team; `Ok(false)` on policy
    /// rejection
    ///
    /// # Errors
    /// See [`GoalCatalog::activate_for_team`].
    pub fn activate_goal_for_team(
        &self,
        goal_id: GoalId,
        manager_id: ParticipantId,
        team_id: TeamId,
    ) -> Result<bool, PulseError> {
        Ok(self.catalog.activate_for_team(goal_id, manager_id, team_id)?)
    }

    /// Hard-delete a goal; associated progress becomes tombstoned
    pub fn delete_goal(&self, id: GoalId) -> bool {
        self.catalog.delete_goal(id)
    }

    /// Fetch one goal
    #[must_use]
    pub fn goal(&self, id: GoalId) -> Option<Goal> {
        self.catalog.goal(id)
    }

    /// All goals in a status
    #[must_use]
    pub fn goals_with_status(&self, status: GoalStatus) -> Vec<Goal> {
        self.catalog.goals_with_status(status)
    }

    /// Active goals a role may see
    #[must_use]
    pub fn goals_visible_to(&self, role: OrgRole) -> Vec<Goal> {
        self.catalog.goals_visible_to(role)
    }

    /// Goals a manager may self-activate
    #[must_use]
    pub fn manager_activatable_goals(&self) -> Vec<Goal> {
        self.catalog.manager_activatable_goals()
    }

    /// Suggested goal templates for an authoring panel
    #[must_use]
    pub fn recommendations_for(&self, category: GoalCategory) -> &'static [GoalTemplate] {
        recommendations_for(category)
    }

    // --- progress ledger ------------------------------------------------

    /// Start tracking a goal for a participant (idempotent)
    ///
    /// # Errors
    /// See [`ProgressLedger::start_progress`].
    pub fn start_progress(
        &self,
        goal_id: GoalId,
        participant_id: ParticipantId,
    ) -> Result<Progress, PulseError> {
        Ok(self.ledger.start_progress(goal_id, participant_id)?)
    }

    /// Report a criterion's new accumulated count
    ///
    /// # Errors
    /// See [`ProgressLedger::report`].
    pub fn report_progress(
        &self,
        goal_id: GoalId,
        participant_id: &ParticipantId,
        role: OrgRole,
        criterion_id: CriterionId,
        new_value: u32,
    ) -> Result<ProgressSnapshot, PulseError> {
        Ok(self
            .ledger
            .report(goal_id, participant_id, role, criterion_id, new_value)?)
    }

    /// All progress records for a participant
    #[must_use]
    pub fn progress_for(&self, participant_id: &ParticipantId) -> Vec<Progress> {
        self.ledger.progress_for(participant_id)
    }

    /// Number of completed goals for a participant
    #[must_use]
    pub fn completed_count(&self, participant_id: &ParticipantId) -> usize {
        self.ledger.completed_count(participant_id)
    }

    /// A participant's goal board
    #[must_use]
    pub fn board_for(&self, participant_id: &ParticipantId, role: OrgRole) -> Vec<GoalStanding> {
        self.ledger.board_for(participant_id, role)
    }

    // --- leveling -------------------------------------------------------

    /// Reward for one action
    #[must_use]
    pub fn reward_for(&self, action: TrackedAction, is_manager: bool) -> Reward {
        self.leveling.read().reward_for(action, is_manager)
    }

    /// Level and classification for an XP total
    #[must_use]
    pub fn level_for(&self, total_xp: u32) -> LevelStanding {
        self.leveling.read().level_for(total_xp)
    }

    /// XP threshold for a level; 0 when not configured
    #[must_use]
    pub fn threshold_for(&self, level: u32) -> u32 {
        self.leveling.read().threshold_for(level)
    }

    /// The active leveling configuration
    #[must_use]
    pub fn leveling_config(&self) -> LevelingConfig {
        self.leveling.read().config().clone()
    }

    /// Replace the leveling tables and persist them as the override
    ///
    /// # Errors
    /// - `LevelingError::InvalidTable` if the tables violate ordering
    /// - `LevelingError::Serialize` if the snapshot cannot be stored
    pub fn set_leveling_config(&self, config: LevelingConfig) -> Result<(), PulseError> {
        let engine = LevelingEngine::from_config(config)?;
        engine.save(self.config_store.as_ref())?;
        *self.leveling.write() = engine;
        Ok(())
    }

    /// Re-read the leveling tables from the config store
    ///
    /// Malformed or missing overrides degrade to the built-in defaults.
    pub fn reload_leveling(&self) {
        *self.leveling.write() = LevelingEngine::load(self.config_store.as_ref());
    }

    /// Drop any stored leveling override and revert to defaults
    pub fn reset_leveling(&self) {
        *self.leveling.write() = LevelingEngine::reset(self.config_store.as_ref());
    }
}

impl<S, P> std::fmt::Debug for PulseEngine<S, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PulseEngine").finish_non_exhaustive()
    }
}
