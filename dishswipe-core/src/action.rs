//! Swipe actions and the profile collections they touch.
//!
//! Every [`ActionKind`] carries two static tables: the collections a swipe
//! inserts into, and the collections an undo removes from. A super like
//! inserts into two collections while producing a single history record, so
//! undo must consult the reversal table rather than guess.
//!
//! # Examples
//! ```
//! use dishswipe_core::{ActionKind, Collection};
//!
//! assert_eq!(
//!     ActionKind::SuperLike.reversal(),
//!     &[Collection::Liked, Collection::SuperLiked]
//! );
//! assert_eq!("nope".parse::<ActionKind>(), Ok(ActionKind::Reject));
//! ```

use serde::{Deserialize, Serialize};

/// A user decision on a dish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    /// Swipe right.
    #[serde(rename = "like")]
    Like,
    /// Swipe left.
    #[serde(rename = "reject", alias = "nope")]
    Reject,
    /// Swipe up; counts as a like and as a distinguished signal.
    #[serde(rename = "superlike")]
    SuperLike,
}

/// One of the three dish collections held by a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    /// Dishes the user liked, including super likes.
    Liked,
    /// Dishes the user rejected.
    Rejected,
    /// Dishes the user super liked.
    SuperLiked,
}

impl ActionKind {
    /// Every action kind, in a stable order.
    pub const ALL: [Self; 3] = [Self::Like, Self::Reject, Self::SuperLike];

    /// Collections a swipe of this kind appends the dish to.
    #[must_use]
    pub const fn insertions(self) -> &'static [Collection] {
        match self {
            Self::Like => &[Collection::Liked],
            Self::Reject => &[Collection::Rejected],
            Self::SuperLike => &[Collection::SuperLiked, Collection::Liked],
        }
    }

    /// Collections an undo of this kind removes the dish from.
    #[must_use]
    pub const fn reversal(self) -> &'static [Collection] {
        match self {
            Self::Like => &[Collection::Liked],
            Self::Reject => &[Collection::Rejected],
            Self::SuperLike => &[Collection::Liked, Collection::SuperLiked],
        }
    }

    /// Return the action as its lowercase wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Reject => "reject",
            Self::SuperLike => "superlike",
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ActionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "like" => Ok(Self::Like),
            "reject" | "nope" => Ok(Self::Reject),
            "superlike" | "super-like" | "super_like" => Ok(Self::SuperLike),
            _ => Err(format!("unknown swipe action '{s}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;
    use std::str::FromStr;

    #[rstest]
    #[case(ActionKind::Like)]
    #[case(ActionKind::Reject)]
    #[case(ActionKind::SuperLike)]
    fn reversal_undoes_every_insertion(#[case] action: ActionKind) {
        let inserted: HashSet<_> = action.insertions().iter().copied().collect();
        let removed: HashSet<_> = action.reversal().iter().copied().collect();
        assert_eq!(inserted, removed);
    }

    #[rstest]
    fn display_matches_as_str() {
        assert_eq!(ActionKind::SuperLike.to_string(), "superlike");
    }

    #[rstest]
    fn parsing_rejects_unknown() {
        let err = ActionKind::from_str("maybe").expect_err("unknown action");
        assert!(err.contains("unknown swipe action"));
    }

    #[rstest]
    fn decodes_legacy_nope() {
        let action: ActionKind = serde_json::from_str("\"nope\"").expect("alias decodes");
        assert_eq!(action, ActionKind::Reject);
    }
}
