//! [`Optimistic`] shadow of the authoritative [`Deal`] list.
//!
//! Consistency model is "last write wins at refresh granularity": a local
//! commit shadows the authoritative list until the next refresh, and any
//! refresh discards the shadow, whatever its content is.

use common::{unit, DateTimeOf};
use derive_more::{Display, FromStr};

use crate::domain::{deal, status, Deal};

/// Identity of an authoritative [`Deal`] list snapshot.
///
/// Every refresh produces a new [`Revision`], even if the list content
/// didn't change.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Display,
    Eq,
    FromStr,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
)]
pub struct Revision(u64);

impl Revision {
    /// Returns the [`Revision`] following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl From<Revision> for u64 {
    fn from(revision: Revision) -> Self {
        revision.0
    }
}

/// [`DateTimeOf`] when the authoritative [`Deal`] list was refreshed.
pub type RefreshDateTime = DateTimeOf<(Revision, unit::Refresh)>;

/// Authoritative [`Deal`] list with an optional local shadow of it.
#[derive(Clone, Debug)]
pub struct Optimistic {
    /// Last [`Deal`] list received from the backend.
    authoritative: Vec<Deal>,

    /// [`Revision`] of the `authoritative` list.
    revision: Revision,

    /// [`DateTimeOf`] when the `authoritative` list was received.
    refreshed_at: RefreshDateTime,

    /// Locally committed [`Deal`] list, if any transition was committed
    /// since the last refresh.
    shadow: Option<Vec<Deal>>,
}

impl Default for Optimistic {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Optimistic {
    /// Creates a new [`Optimistic`] list over the provided authoritative
    /// `deals`.
    #[must_use]
    pub fn new(deals: Vec<Deal>) -> Self {
        Self {
            authoritative: deals,
            revision: Revision::default(),
            refreshed_at: RefreshDateTime::now(),
            shadow: None,
        }
    }

    /// Returns the list the board is rendered from: the shadow if there is
    /// one, the authoritative list otherwise.
    ///
    /// The shadow is never merged with the authoritative list.
    #[must_use]
    pub fn working(&self) -> &[Deal] {
        self.shadow.as_deref().unwrap_or(&self.authoritative)
    }

    /// Returns the last authoritative [`Deal`] list.
    #[must_use]
    pub fn authoritative(&self) -> &[Deal] {
        &self.authoritative
    }

    /// Returns the [`Revision`] of the authoritative list.
    #[must_use]
    pub fn revision(&self) -> Revision {
        self.revision
    }

    /// Returns the [`RefreshDateTime`] of the authoritative list, so clients
    /// may tell how stale the board is.
    #[must_use]
    pub fn refreshed_at(&self) -> RefreshDateTime {
        self.refreshed_at
    }

    /// Indicates whether the working list is a local shadow.
    #[must_use]
    pub fn is_shadowed(&self) -> bool {
        self.shadow.is_some()
    }

    /// Finds a [`Deal`] in the working list.
    #[must_use]
    pub fn find(&self, id: deal::Id) -> Option<&Deal> {
        self.working().iter().find(|d| d.id == id)
    }

    /// Replaces the authoritative list with the provided `deals`,
    /// discarding the shadow.
    pub fn refresh(&mut self, deals: Vec<Deal>) -> Revision {
        self.authoritative = deals;
        self.revision = self.revision.next();
        self.refreshed_at = RefreshDateTime::now();
        self.shadow = None;
        self.revision
    }

    /// Commits the provided `status` to the [`Deal`] with the provided ID.
    ///
    /// The working list is replaced wholesale with a new one where exactly
    /// the status of the first [`Deal`] with that ID differs. Returns the
    /// [`Deal`] as it was before the commit, or [`None`] if there is no
    /// such [`Deal`] in the working list.
    pub fn commit(
        &mut self,
        id: deal::Id,
        status: &status::Key,
    ) -> Option<Deal> {
        let working = self.working();
        let pos = working.iter().position(|d| d.id == id)?;
        let previous = working[pos].clone();

        let deals = working
            .iter()
            .enumerate()
            .map(|(i, d)| {
                if i == pos {
                    Deal {
                        status: status.clone(),
                        ..d.clone()
                    }
                } else {
                    d.clone()
                }
            })
            .collect();
        self.shadow = Some(deals);

        Some(previous)
    }
}
