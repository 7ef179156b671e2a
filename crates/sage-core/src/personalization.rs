//! Per-session personalization preferences.
//!
//! Each session carries a set of style preferences the backend folds into
//! generation prompts. A new session registers the defaults below; the
//! student can change them from the sidebar at any time.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// How the student prefers material to be presented.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
pub enum LearningStyle {
    Visual,
    #[default]
    Verbal,
    Active,
    Intuitive,
    Reflective,
}

/// The register replies are written in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
pub enum CommunicationFormat {
    #[default]
    Textbook,
    Layman,
    Storytelling,
}

/// The emotional tone of replies.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
pub enum ToneStyle {
    Encouraging,
    #[default]
    Neutral,
    Informative,
    Friendly,
}

/// The reasoning structure replies follow.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
pub enum ReasoningFramework {
    #[default]
    Deductive,
    Inductive,
    Abductive,
    Analogical,
}

/// The full personalization record for one session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Personalization {
    /// Session title ("" lets the backend generate one).
    pub chat_title: String,
    pub learning_style: LearningStyle,
    pub communication_format: CommunicationFormat,
    pub tone_style: ToneStyle,
    pub reasoning_framework: ReasoningFramework,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_new_session_registration() {
        let p = Personalization::default();
        assert_eq!(p.chat_title, "");
        assert_eq!(p.learning_style, LearningStyle::Verbal);
        assert_eq!(p.communication_format, CommunicationFormat::Textbook);
        assert_eq!(p.tone_style, ToneStyle::Neutral);
        assert_eq!(p.reasoning_framework, ReasoningFramework::Deductive);
    }

    #[test]
    fn test_wire_spelling_round_trip() {
        assert_eq!(LearningStyle::Reflective.to_string(), "Reflective");
        assert_eq!(
            "Storytelling".parse::<CommunicationFormat>().unwrap(),
            CommunicationFormat::Storytelling
        );
    }
}
