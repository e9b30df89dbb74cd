//! Goal catalog
//!
//! CRUD and governance over goal definitions:
//! - Creation with validation (criteria present, quantities positive)
//! - Patch-style updates with audit stamping
//! - Manager activation of goals for their teams (one-way publish)
//! - Hard deletion
//! - Pure filter queries over the stored collection

use crate::error::CatalogError;
use crate::store::GoalStore;
use crate::types::{CriterionDraft, GoalDraft, GoalPatch};
use chrono::Utc;
use pulse_domain::{
    Criterion, Goal, GoalId, GoalStatus, OrgRole, ParticipantId, RoleGate, TargetPopulation,
    TeamId,
};
use std::collections::BTreeSet;
use tracing::{debug, info, warn};

/// Owns goal definitions and their governance lifecycle
#[derive(Debug)]
pub struct GoalCatalog<S> {
    store: S,
    gate: RoleGate,
}

impl<S: GoalStore> GoalCatalog<S> {
    /// Create a catalog over an injected store
    #[inline]
    #[must_use]
    pub fn new(store: S, gate: RoleGate) -> Self {
        Self { store, gate }
    }

    /// The role gate this catalog filters visibility with
    #[inline]
    #[must_use]
    pub fn gate(&self) -> &RoleGate {
        &self.gate
    }

    /// Accept a draft into the catalog
    ///
    /// Mints the goal and criterion identifiers, stamps the creator and
    /// initializes empty activation sets.
    ///
    /// # Errors
    /// - `CatalogError::Validation` if the criteria list is empty, any
    ///   required quantity is zero, or the creation status is neither
    ///   `Draft` nor `Active`
    pub fn create_goal(
        &self,
        draft: GoalDraft,
        created_by: ParticipantId,
    ) -> Result<Goal, CatalogError> {
        validate_criteria(&draft.criteria)?;
        if !matches!(draft.status, GoalStatus::Draft | GoalStatus::Active) {
            return Err(CatalogError::Validation(format!(
                "goals are created as draft or active, not {:?}",
                draft.status
            )));
        }

        let goal = Goal {
            id: GoalId::new(),
            name: draft.name,
            description: draft.description,
            category: draft.category,
            population: draft.population,
            scope: draft.scope,
            period: draft.period,
            criteria: mint_criteria(draft.criteria),
            status: draft.status,
            manager_activatable: draft.manager_activatable,
            activated_managers: BTreeSet::new(),
            active_teams: BTreeSet::new(),
            created_by,
            created_at: Utc::now(),
            updated_by: None,
            updated_at: None,
            activated_by: None,
            activated_at: None,
        };

        info!(goal_id = %goal.id, name = %goal.name, status = ?goal.status, "goal created");
        self.store.put(goal.clone());
        Ok(goal)
    }

    /// Fetch one goal
    #[inline]
    #[must_use]
    pub fn goal(&self, id: GoalId) -> Option<Goal> {
        self.store.get(id)
    }

    /// Merge a patch into a stored goal and stamp the updater
    ///
    /// # Errors
    /// - `CatalogError::GoalNotFound` if `id` is unknown
    /// - `CatalogError::Validation` if a replacement criteria list is
    ///   empty or carries a zero quantity
    pub fn update_goal(
        &self,
        id: GoalId,
        patch: GoalPatch,
        updated_by: ParticipantId,
    ) -> Result<Goal, CatalogError> {
        let mut goal = self.store.get(id).ok_or(CatalogError::GoalNotFound(id))?;

        if let Some(criteria) = patch.criteria {
            validate_criteria(&criteria)?;
            goal.criteria = mint_criteria(criteria);
        }
        if let Some(name) = patch.name {
            goal.name = name;
        }
        if let Some(description) = patch.description {
            goal.description = description;
        }
        if let Some(category) = patch.category {
            goal.category = category;
        }
        if let Some(population) = patch.population {
            goal.population = population;
        }
        if let Some(scope) = patch.scope {
            goal.scope = scope;
        }
        if let Some(period) = patch.period {
            goal.period = period;
        }
        if let Some(status) = patch.status {
            goal.status = status;
        }
        if let Some(allowed) = patch.manager_activatable {
            goal.manager_activatable = allowed;
        }

        goal.updated_by = Some(updated_by);
        goal.updated_at = Some(Utc::now());

        debug!(goal_id = %goal.id, "goal updated");
        self.store.put(goal.clone());
        Ok(goal)
    }

    /// Turn a goal on for a manager's team
    ///
    /// A one-way publish: the manager and team are added to the goal's
    /// append-only activation sets (idempotent) and the activator is
    /// stamped. Returns `Ok(false)` without mutating anything when the
    /// goal is not in `Active` status or is not manager-activatable —
    /// a policy rejection, distinguishable from a missing goal.
    ///
    /// # Errors
    /// - `CatalogError::GoalNotFound` if `goal_id` is unknown
    pub fn activate_for_team(
        &self,
        goal_id: GoalId,
        manager_id: ParticipantId,
        team_id: TeamId,
    ) -> Result<bool, CatalogError> {
        let mut goal = self
            .store
            .get(goal_id)
            .ok_or(CatalogError::GoalNotFound(goal_id))?;

        if !goal.accepts_team_activation() {
            warn!(
                goal_id = %goal_id,
                status = ?goal.status,
                manager_activatable = goal.manager_activatable,
                "team activation rejected"
            );
            return Ok(false);
        }

        goal.activated_managers.insert(manager_id.clone());
        goal.active_teams.insert(team_id.clone());
        goal.activated_by = Some(manager_id);
        goal.activated_at = Some(Utc::now());

        info!(goal_id = %goal_id, team = %team_id, "goal activated for team");
        self.store.put(goal);
        Ok(true)
    }

    /// Hard-delete a goal; `true` if it existed
    ///
    /// Progress records referencing the goal are not cascaded here: the
    /// ledger tombstones them (still readable, no longer writable).
    pub fn delete_goal(&self, id: GoalId) -> bool {
        let existed = self.store.remove(id);
        if existed {
            info!(goal_id = %id, "goal deleted");
        }
        existed
    }

    /// All goals in a given status, in creation order
    #[must_use]
    pub fn goals_with_status(&self, status: GoalStatus) -> Vec<Goal> {
        let mut goals: Vec<Goal> = self
            .store
            .list()
            .into_iter()
            .filter(|g| g.status == status)
            .collect();
        goals.sort_by_key(|g| g.id);
        goals
    }

    /// Active goals a given role may see
    ///
    /// Collaborator-facing goals are additionally gated: a role the gate
    /// rejects sees nothing, even if a record somehow targets it.
    #[must_use]
    pub fn goals_visible_to(&self, role: OrgRole) -> Vec<Goal> {
        let mut goals: Vec<Goal> = self
            .store
            .list()
            .into_iter()
            .filter(|g| g.status == GoalStatus::Active && self.population_matches(g, role))
            .collect();
        goals.sort_by_key(|g| g.id);
        goals
    }

    /// Goals a manager is permitted to self-activate
    ///
    /// Active, flagged manager-activatable, and aimed at collaborators.
    #[must_use]
    pub fn manager_activatable_goals(&self) -> Vec<Goal> {
        let mut goals: Vec<Goal> = self
            .store
            .list()
            .into_iter()
            .filter(|g| {
                g.accepts_team_activation() && g.population == TargetPopulation::Collaborators
            })
            .collect();
        goals.sort_by_key(|g| g.id);
        goals
    }

    fn population_matches(&self, goal: &Goal, role: OrgRole) -> bool {
        match goal.population {
            TargetPopulation::Collaborators => self.gate.is_eligible(role),
            TargetPopulation::Managers => role == OrgRole::Manager,
        }
    }
}

fn validate_criteria(criteria: &[CriterionDraft]) -> Result<(), CatalogError> {
    if criteria.is_empty() {
        return Err(CatalogError::Validation(
            "a goal needs at least one criterion".to_string(),
        ));
    }
    if let Some(bad) = criteria.iter().find(|c| c.required == 0) {
        return Err(CatalogError::Validation(format!(
            "criterion '{}' requires a positive quantity",
            bad.description
        )));
    }
    Ok(())
}

fn mint_criteria(drafts: Vec<CriterionDraft>) -> Vec<Criterion> {
    drafts
        .into_iter()
        .map(|d| Criterion::new(d.action, d.required, d.description))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryGoalStore;
    use pretty_assertions::assert_eq;
    use pulse_domain::{GoalCategory, TrackedAction};

    fn catalog() -> GoalCatalog<MemoryGoalStore> {
        GoalCatalog::new(MemoryGoalStore::new(), RoleGate::default())
    }

    fn survey_draft() -> GoalDraft {
        GoalDraft::new("Survey streak", "Answer the weekly surveys", GoalCategory::Engagement)
            .with_criterion(TrackedAction::SurveyResponse, 4, "four responses")
            .with_status(GoalStatus::Active)
            .manager_activatable(true)
    }

    #[test]
    fn create_stamps_creator_and_mints_ids() {
        let catalog = catalog();
        let goal = catalog
            .create_goal(survey_draft(), ParticipantId::new("admin-1"))
            .unwrap();

        assert_eq!(goal.created_by, ParticipantId::new("admin-1"));
        assert!(goal.activated_managers.is_empty());
        assert_eq!(catalog.goal(goal.id).unwrap().id, goal.id);
    }

    #[test]
    fn create_rejects_empty_criteria() {
        let catalog = catalog();
        let draft = GoalDraft::new("empty", "", GoalCategory::Engagement);
        let err = catalog
            .create_goal(draft, ParticipantId::new("admin-1"))
            .unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));
    }

    #[test]
    fn create_rejects_zero_quantity() {
        let catalog = catalog();
        let draft = GoalDraft::new("zero", "", GoalCategory::Engagement)
            .with_criterion(TrackedAction::Like, 0, "no likes");
        assert!(catalog
            .create_goal(draft, ParticipantId::new("admin-1"))
            .is_err());
    }

    #[test]
    fn create_rejects_terminal_status() {
        let catalog = catalog();
        let draft = survey_draft().with_status(GoalStatus::Completed);
        assert!(catalog
            .create_goal(draft, ParticipantId::new("admin-1"))
            .is_err());
    }

    #[test]
    fn update_merges_and_stamps() {
        let catalog = catalog();
        let goal = catalog
            .create_goal(survey_draft(), ParticipantId::new("admin-1"))
            .unwrap();

        let updated = catalog
            .update_goal(
                goal.id,
                GoalPatch::new().rename("Survey habit").with_status(GoalStatus::Inactive),
                ParticipantId::new("admin-2"),
            )
            .unwrap();

        assert_eq!(updated.name, "Survey habit");
        assert_eq!(updated.status, GoalStatus::Inactive);
        assert_eq!(updated.updated_by, Some(ParticipantId::new("admin-2")));
        assert!(updated.updated_at.is_some());
        // untouched fields survive the merge
        assert_eq!(updated.description, goal.description);
    }

    #[test]
    fn update_unknown_goal_is_not_found() {
        let catalog = catalog();
        let err = catalog
            .update_goal(GoalId::new(), GoalPatch::new(), ParticipantId::new("a"))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn activation_is_idempotent_and_stamped() {
        let catalog = catalog();
        let goal = catalog
            .create_goal(survey_draft(), ParticipantId::new("admin-1"))
            .unwrap();

        let manager = ParticipantId::new("mgr-1");
        let team = TeamId::new("team-7");

        assert!(catalog
            .activate_for_team(goal.id, manager.clone(), team.clone())
            .unwrap());
        assert!(catalog
            .activate_for_team(goal.id, manager.clone(), team.clone())
            .unwrap());

        let stored = catalog.goal(goal.id).unwrap();
        assert_eq!(stored.activated_managers.len(), 1);
        assert_eq!(stored.active_teams.len(), 1);
        assert_eq!(stored.activated_by, Some(manager));
        assert!(stored.activated_at.is_some());
    }

    #[test]
    fn activation_rejected_for_draft_goal() {
        let catalog = catalog();
        let goal = catalog
            .create_goal(
                survey_draft().with_status(GoalStatus::Draft),
                ParticipantId::new("admin-1"),
            )
            .unwrap();

        let applied = catalog
            .activate_for_team(goal.id, ParticipantId::new("mgr-1"), TeamId::new("t"))
            .unwrap();
        assert!(!applied);

        let stored = catalog.goal(goal.id).unwrap();
        assert!(stored.activated_managers.is_empty());
        assert!(stored.active_teams.is_empty());
    }

    #[test]
    fn activation_rejected_without_flag() {
        let catalog = catalog();
        let goal = catalog
            .create_goal(
                survey_draft().manager_activatable(false),
                ParticipantId::new("admin-1"),
            )
            .unwrap();

        assert!(!catalog
            .activate_for_team(goal.id, ParticipantId::new("mgr-1"), TeamId::new("t"))
            .unwrap());
    }

    #[test]
    fn delete_is_unconditional() {
        let catalog = catalog();
        let goal = catalog
            .create_goal(survey_draft(), ParticipantId::new("admin-1"))
            .unwrap();

        assert!(catalog.delete_goal(goal.id));
        assert!(!catalog.delete_goal(goal.id));
        assert!(catalog.goal(goal.id).is_none());
    }

    #[test]
    fn visibility_is_role_gated() {
        let catalog = catalog();
        catalog
            .create_goal(survey_draft(), ParticipantId::new("admin-1"))
            .unwrap();
        catalog
            .create_goal(
                survey_draft()
                    .with_population(TargetPopulation::Managers)
                    .manager_activatable(false),
                ParticipantId::new("admin-1"),
            )
            .unwrap();

        assert_eq!(catalog.goals_visible_to(OrgRole::Collaborator).len(), 1);
        assert_eq!(catalog.goals_visible_to(OrgRole::Manager).len(), 1);
        // the gate rejects super-admins outright for collaborator goals
        assert_eq!(catalog.goals_visible_to(OrgRole::SuperAdmin).len(), 0);
    }

    #[test]
    fn manager_activatable_listing() {
        let catalog = catalog();
        catalog
            .create_goal(survey_draft(), ParticipantId::new("admin-1"))
            .unwrap();
        catalog
            .create_goal(
                survey_draft().with_status(GoalStatus::Draft),
                ParticipantId::new("admin-1"),
            )
            .unwrap();
        catalog
            .create_goal(
                survey_draft().with_population(TargetPopulation::Managers),
                ParticipantId::new("admin-1"),
            )
            .unwrap();

        assert_eq!(catalog.manager_activatable_goals().len(), 1);
    }
}
