//! Testing utilities for the Pulse workspace
//!
//! Shared fixtures and setup helpers.

#![allow(missing_docs)]

use pulse_domain::{Goal, GoalCategory, GoalStatus, ParticipantId, TrackedAction};
use pulse_engine::{GoalDraft, MemoryGoalStore, MemoryProgressStore, PulseEngine};

pub fn admin() -> ParticipantId {
    ParticipantId::new("admin-1")
}

pub fn collaborator() -> ParticipantId {
    ParticipantId::new("emp-1")
}

pub fn setup_engine() -> PulseEngine<MemoryGoalStore, MemoryProgressStore> {
    PulseEngine::in_memory()
}

/// Active two-criterion goal: 5 mood check-ins and 3 feed posts.
pub fn two_criterion_draft() -> GoalDraft {
    GoalDraft::new("Engage weekly", "Check in and post", GoalCategory::Engagement)
        .with_criterion(TrackedAction::MoodCheckIn, 5, "five check-ins")
        .with_criterion(TrackedAction::FeedPost, 3, "three posts")
        .with_status(GoalStatus::Active)
        .manager_activatable(true)
}

pub fn create_two_criterion_goal(
    engine: &PulseEngine<MemoryGoalStore, MemoryProgressStore>,
) -> Goal {
    engine
        .create_goal(two_criterion_draft(), admin())
        .expect("fixture goal is valid")
}

pub fn create_draft_goal(engine: &PulseEngine<MemoryGoalStore, MemoryProgressStore>) -> Goal {
    engine
        .create_goal(
            two_criterion_draft().with_status(GoalStatus::Draft),
            admin(),
        )
        .expect("fixture goal is valid")
}
