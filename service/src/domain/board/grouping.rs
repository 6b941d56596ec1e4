//! [`Grouping`] of [`Deal`]s into [`Status`] buckets.

use crate::domain::{Deal, Status};

/// Policy of handling [`Deal`]s whose status is not a known [`Status`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum UnrecognizedPolicy {
    /// Exclude such [`Deal`]s from the board.
    #[default]
    Drop,

    /// Collect such [`Deal`]s in a trailing "Unrecognized" bucket.
    Column,
}

/// [`Deal`]s partitioned by their [`Status`], in the taxonomy order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Grouping {
    /// One bucket per [`Status::ALL`] entry, indexed by
    /// [`Status::position()`].
    buckets: Vec<Vec<Deal>>,

    /// Bucket of [`Deal`]s with an unknown status, if collected.
    unrecognized: Option<Vec<Deal>>,
}

impl Grouping {
    /// Partitions the provided `deals` by their [`Status`].
    ///
    /// Relative order of the `deals` is preserved inside each bucket, and
    /// duplicates are kept as is.
    #[must_use]
    pub fn new(deals: &[Deal], policy: UnrecognizedPolicy) -> Self {
        let mut buckets = vec![Vec::new(); Status::ALL.len()];
        let mut unrecognized = match policy {
            UnrecognizedPolicy::Drop => None,
            UnrecognizedPolicy::Column => Some(Vec::new()),
        };

        for deal in deals {
            match deal.known_status() {
                Some(status) => buckets[status.position()].push(deal.clone()),
                None => {
                    if let Some(bucket) = unrecognized.as_mut() {
                        bucket.push(deal.clone());
                    }
                }
            }
        }

        Self {
            buckets,
            unrecognized,
        }
    }

    /// Returns the bucket of the provided [`Status`].
    #[must_use]
    pub fn bucket(&self, status: Status) -> &[Deal] {
        &self.buckets[status.position()]
    }

    /// Iterates over all the [`Status`] buckets in the taxonomy order.
    pub fn iter(&self) -> impl Iterator<Item = (Status, &[Deal])> + '_ {
        Status::ALL
            .iter()
            .zip(&self.buckets)
            .map(|(status, deals)| (*status, deals.as_slice()))
    }

    /// Returns the bucket of [`Deal`]s with an unknown status, if they're
    /// collected by the [`UnrecognizedPolicy`].
    #[must_use]
    pub fn unrecognized(&self) -> Option<&[Deal]> {
        self.unrecognized.as_deref()
    }

    /// Returns the total number of grouped [`Deal`]s.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum::<usize>()
            + self.unrecognized.as_ref().map_or(0, Vec::len)
    }

    /// Indicates whether no [`Deal`] is grouped at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
