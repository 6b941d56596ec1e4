//! [`Query`] definition.

pub mod board;
pub mod deal;

use std::convert::Infallible;

use common::operations::By;

#[cfg(doc)]
use crate::domain::Board;
use crate::{read::Project, Service};

/// [`Query`] of the [`Service`].
pub use common::Handler as Query;

/// [`Query`] projecting a `T`ype out of the [`Board`].
#[derive(Clone, Copy, Debug)]
#[expect(clippy::module_name_repetitions, reason = "more readable")]
pub struct BoardQuery<T>(T);

impl<W, B> BoardQuery<By<W, B>> {
    /// Creates a new [`BoardQuery`] projecting a `W` by the provided `B`.
    #[must_use]
    pub fn by(by: B) -> Self {
        Self(By::new(by))
    }
}

impl<Bk, W, B> Query<BoardQuery<By<W, B>>> for Service<Bk>
where
    W: Project<B>,
{
    type Ok = W;
    type Err = Infallible;

    async fn execute(
        &self,
        BoardQuery(by): BoardQuery<By<W, B>>,
    ) -> Result<Self::Ok, Self::Err> {
        let board = self.board().lock().await;
        Ok(W::project(&board, by.into_inner()))
    }
}
