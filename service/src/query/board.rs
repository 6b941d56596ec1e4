//! [`Query`] collection related to the whole [`Board`].

use common::operations::By;

#[cfg(doc)]
use crate::{domain::Board, Query};
use crate::{domain, read};

use super::BoardQuery;

/// Queries the render [`read::View`] of the [`Board`].
pub type View = BoardQuery<By<read::View, ()>>;

/// Queries the working [`domain::Deal`] list grouped by status.
pub type Grouping = BoardQuery<By<domain::board::Grouping, ()>>;

/// Queries the working [`domain::Deal`] list.
pub type Working = BoardQuery<By<Vec<domain::Deal>, ()>>;
