//! Read entities definitions.

pub mod board;

use crate::domain::{board::Grouping, deal, Board, Deal};

pub use self::board::View;

/// Read model projected out of a [`Board`] by the provided `By` argument.
pub trait Project<By> {
    /// Projects this read model out of the provided [`Board`].
    fn project(board: &Board, by: By) -> Self;
}

impl Project<()> for Grouping {
    fn project(board: &Board, (): ()) -> Self {
        board.grouping()
    }
}

impl Project<()> for Vec<Deal> {
    fn project(board: &Board, (): ()) -> Self {
        board.working().to_vec()
    }
}

impl Project<deal::Id> for Option<Deal> {
    fn project(board: &Board, id: deal::Id) -> Self {
        board.find(id).cloned()
    }
}
