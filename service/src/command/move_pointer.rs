//! [`Command`] for moving the pointer over the board.

use std::convert::Infallible;

use crate::{
    domain::board::{Point, Target},
    Service,
};

use super::Command;

/// [`Command`] for moving the pointer, which promotes a press into a drag
/// once the activation distance is exceeded and tracks the hover
/// [`Target`] of a drag.
///
/// Never mutates any [`Deal`].
///
/// [`Deal`]: crate::domain::Deal
#[derive(Clone, Copy, Debug)]
pub struct MovePointer {
    /// [`Point`] the pointer is moved to.
    pub to: Point,

    /// [`Target`] under the pointer, if any.
    pub over: Option<Target>,
}

impl<B> Command<MovePointer> for Service<B> {
    /// Indicator whether this move started a drag.
    type Ok = bool;
    type Err = Infallible;

    async fn execute(&self, cmd: MovePointer) -> Result<Self::Ok, Self::Err> {
        let MovePointer { to, over } = cmd;
        Ok(self.board().lock().await.move_pointer(to, over))
    }
}
