//! Rejection reason [`Gate`].

use derive_more::{AsRef, Display};

use crate::domain::{Deal, Status};

/// Free-text reason of a [`Deal`] rejection.
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(forward)]
pub struct Reason(String);

impl Reason {
    /// Creates a new [`Reason`] out of the provided `text`, if it's not
    /// blank.
    ///
    /// Surrounding whitespace is trimmed.
    #[must_use]
    pub fn new(text: impl AsRef<str>) -> Option<Self> {
        let text = text.as_ref().trim();
        (!text.is_empty()).then(|| Self(text.to_owned()))
    }
}

/// Transition of a [`Deal`] awaiting a [`Reason`] before being committed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PendingRejection {
    /// [`Deal`] as it was when the transition was requested.
    pub deal: Deal,

    /// [`Status`] the [`Deal`] is transitioned into.
    pub target: Status,
}

/// Gate holding at most one [`PendingRejection`].
#[derive(Clone, Debug, Default)]
pub struct Gate {
    pending: Option<PendingRejection>,
}

impl Gate {
    /// Opens this [`Gate`] for the provided transition, replacing any
    /// previously pending one.
    pub fn open_for(&mut self, deal: Deal, target: Status) -> &PendingRejection {
        self.pending.insert(PendingRejection { deal, target })
    }

    /// Returns the [`PendingRejection`], if any.
    #[must_use]
    pub fn pending(&self) -> Option<&PendingRejection> {
        self.pending.as_ref()
    }

    /// Indicates whether a [`PendingRejection`] is awaiting its [`Reason`].
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    /// Closes this [`Gate`], returning the [`PendingRejection`] it held.
    pub fn close(&mut self) -> Option<PendingRejection> {
        self.pending.take()
    }
}
