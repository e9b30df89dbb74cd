//! Recommendation index
//!
//! A static, read-only catalog of suggested goal templates per
//! category, used to populate inspiration panels when an administrator
//! authors a new goal. No state, no invariants beyond the closed
//! category set.

use pulse_domain::{GoalCategory, TrackedAction};

/// A suggested goal template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalTemplate {
    /// Short title
    pub title: &'static str,
    /// What the goal aims to achieve
    pub objective: &'static str,
    /// Actions a criterion could count
    pub suggested_actions: &'static [TrackedAction],
    /// Why the organization benefits
    pub expected_benefit: &'static str,
}

const ENGAGEMENT: &[GoalTemplate] = &[
    GoalTemplate {
        title: "Daily pulse",
        objective: "Check in your mood every working day",
        suggested_actions: &[TrackedAction::MoodCheckIn],
        expected_benefit: "Early visibility into team wellbeing trends",
    },
    GoalTemplate {
        title: "Feed regular",
        objective: "Post, like and comment on the internal feed weekly",
        suggested_actions: &[TrackedAction::FeedPost, TrackedAction::Like, TrackedAction::Comment],
        expected_benefit: "A livelier internal community",
    },
    GoalTemplate {
        title: "Survey voice",
        objective: "Answer every engagement survey in the period",
        suggested_actions: &[TrackedAction::SurveyResponse],
        expected_benefit: "Higher-confidence engagement metrics",
    },
];

const DEVELOPMENT: &[GoalTemplate] = &[
    GoalTemplate {
        title: "Course finisher",
        objective: "Complete assigned trainings within the period",
        suggested_actions: &[TrackedAction::TrainingCompleted],
        expected_benefit: "Up-to-date skills across the team",
    },
    GoalTemplate {
        title: "Track explorer",
        objective: "Join a learning track and keep up with its modules",
        suggested_actions: &[TrackedAction::LearningTrack, TrackedAction::TrainingCompleted],
        expected_benefit: "Structured long-form learning habits",
    },
    GoalTemplate {
        title: "Event learner",
        objective: "Attend internal knowledge-sharing events",
        suggested_actions: &[TrackedAction::EventParticipation],
        expected_benefit: "Cross-team knowledge transfer",
    },
];

const LEADERSHIP: &[GoalTemplate] = &[
    GoalTemplate {
        title: "Feedback habit",
        objective: "Send regular constructive feedback to colleagues",
        suggested_actions: &[TrackedAction::FeedbackSent],
        expected_benefit: "A culture of continuous feedback",
    },
    GoalTemplate {
        title: "Steady cadence",
        objective: "Hold recurring 1:1s with every report",
        suggested_actions: &[TrackedAction::RecurringInteraction],
        expected_benefit: "Stronger manager-report relationships",
    },
    GoalTemplate {
        title: "Visible sponsor",
        objective: "Show up in team events and celebrate wins on the feed",
        suggested_actions: &[TrackedAction::EventParticipation, TrackedAction::FeedPost],
        expected_benefit: "Leadership presence employees can see",
    },
];

/// Templates suggested for a category
#[inline]
#[must_use]
pub fn recommendations_for(category: GoalCategory) -> &'static [GoalTemplate] {
    match category {
        GoalCategory::Engagement => ENGAGEMENT,
        GoalCategory::Development => DEVELOPMENT,
        GoalCategory::Leadership => LEADERSHIP,
    }
}
