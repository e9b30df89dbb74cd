//! Tracked platform actions
//!
//! The closed set of actions the platform reports into the engine. The
//! same enum keys goal criteria and the reward table, so a producer
//! cannot report an action the engine does not know about.

use serde::{Deserialize, Serialize};

/// A platform action that criteria and rewards are keyed by
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackedAction {
    /// Daily mood check-in
    MoodCheckIn,
    /// Post published on the internal feed
    FeedPost,
    /// Like on a feed post
    Like,
    /// Comment on a feed post
    Comment,
    /// Feedback sent to a colleague
    FeedbackSent,
    /// Survey response submitted
    SurveyResponse,
    /// Training completed
    TrainingCompleted,
    /// Participation in a learning track
    LearningTrack,
    /// Participation in a company event
    EventParticipation,
    /// Recurring 1:1 or team interaction
    RecurringInteraction,
}

impl TrackedAction {
    /// All tracked actions, in declaration order
    #[must_use]
    pub const fn all() -> [TrackedAction; 10] {
        [
            TrackedAction::MoodCheckIn,
            TrackedAction::FeedPost,
            TrackedAction::Like,
            TrackedAction::Comment,
            TrackedAction::FeedbackSent,
            TrackedAction::SurveyResponse,
            TrackedAction::TrainingCompleted,
            TrackedAction::LearningTrack,
            TrackedAction::EventParticipation,
            TrackedAction::RecurringInteraction,
        ]
    }

    /// Stable wire name (matches the serde representation)
    #[inline]
    #[must_use]
    pub const fn wire_name(&self) -> &'static str {
        match self {
            TrackedAction::MoodCheckIn => "mood_check_in",
            TrackedAction::FeedPost => "feed_post",
            TrackedAction::Like => "like",
            TrackedAction::Comment => "comment",
            TrackedAction::FeedbackSent => "feedback_sent",
            TrackedAction::SurveyResponse => "survey_response",
            TrackedAction::TrainingCompleted => "training_completed",
            TrackedAction::LearningTrack => "learning_track",
            TrackedAction::EventParticipation => "event_participation",
            TrackedAction::RecurringInteraction => "recurring_interaction",
        }
    }
}

impl std::fmt::Display for TrackedAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_name())
    }
}
