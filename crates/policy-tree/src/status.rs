//! Status returned by behavior nodes.

/// The result of evaluating a behavior node.
///
/// Policy consultations are instantaneous: a condition either holds right
/// now or it does not, and a cast is either recorded or refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Conditions: the condition holds. Casts: the skill was picked.
    Success,

    /// Conditions: the condition does not hold. Casts: the skill is not ready.
    Failure,
}

impl Status {
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    #[inline]
    pub fn invert(self) -> Self {
        match self {
            Status::Success => Status::Failure,
            Status::Failure => Status::Success,
        }
    }

    /// `Success` when `condition` holds.
    #[inline]
    pub fn from_bool(condition: bool) -> Self {
        if condition {
            Status::Success
        } else {
            Status::Failure
        }
    }
}
