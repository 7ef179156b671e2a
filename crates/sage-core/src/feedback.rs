//! Per-reply feedback types.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The thumbs mark on a bot reply.
///
/// Marks are mutually exclusive: selecting the active mark clears it,
/// selecting the other replaces it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FeedbackMark {
    #[default]
    None,
    Up,
    Down,
}

impl FeedbackMark {
    /// Applies a click on `clicked` to the current mark.
    pub fn toggle(self, clicked: FeedbackMark) -> FeedbackMark {
        if self == clicked {
            FeedbackMark::None
        } else {
            clicked
        }
    }

    /// Whether a mark is set at all.
    pub fn is_set(&self) -> bool {
        !matches!(self, FeedbackMark::None)
    }
}

/// The locally persisted feedback state for one bot reply: the mark plus the
/// free-text elaboration the student may add before submitting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedbackState {
    pub mark: FeedbackMark,
    pub elaboration: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reselecting_clears() {
        let mark = FeedbackMark::None.toggle(FeedbackMark::Up);
        assert_eq!(mark, FeedbackMark::Up);
        assert_eq!(mark.toggle(FeedbackMark::Up), FeedbackMark::None);
    }

    #[test]
    fn test_marks_are_exclusive() {
        let mark = FeedbackMark::None.toggle(FeedbackMark::Up);
        assert_eq!(mark.toggle(FeedbackMark::Down), FeedbackMark::Down);
    }

    #[test]
    fn test_wire_spelling() {
        assert_eq!(FeedbackMark::Up.to_string(), "up");
        assert_eq!(FeedbackMark::Down.to_string(), "down");
    }
}
