//! Drag [`Session`] state machine.

#[cfg(doc)]
use crate::domain::Deal;
use crate::domain::{deal, Status};

/// Pointer position on the board, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,

    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Returns the Euclidean distance between this [`Point`] and the
    /// `other` one.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Element under the pointer.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Target {
    /// [`Status`] column itself.
    Column(Status),

    /// Card of another [`Deal`].
    Card(deal::Id),
}

/// Pointer interaction upon a [`Deal`] card.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Session {
    /// No interaction is in progress.
    #[default]
    Idle,

    /// Card is pressed, but the pointer hasn't travelled the activation
    /// distance yet, so this is still a click.
    Pressed {
        /// ID of the pressed [`Deal`].
        deal: deal::Id,

        /// Where the press happened.
        origin: Point,
    },

    /// Card is being dragged.
    Dragging {
        /// ID of the dragged [`Deal`].
        deal: deal::Id,

        /// Current hover [`Target`], if any.
        over: Option<Target>,
    },
}

/// Result of releasing a dragged card.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Release {
    /// ID of the dropped [`Deal`].
    pub deal: deal::Id,

    /// [`Target`] the card was dropped onto, if any.
    pub over: Option<Target>,
}

impl Session {
    /// Starts a new interaction by pressing the card of the provided
    /// [`Deal`].
    ///
    /// Any previous interaction is abandoned.
    pub fn press(&mut self, deal: deal::Id, at: Point) {
        *self = Self::Pressed { deal, origin: at };
    }

    /// Moves the pointer to the provided [`Point`] hovering the provided
    /// [`Target`].
    ///
    /// A press is promoted to a drag once the pointer is farther than the
    /// `activation_distance` from the press origin. Returns `true` if this
    /// very move started the drag.
    pub fn move_to(
        &mut self,
        to: Point,
        over: Option<Target>,
        activation_distance: f64,
    ) -> bool {
        match self {
            Self::Idle => false,
            Self::Pressed { deal, origin } => {
                let (deal, origin) = (*deal, *origin);
                if origin.distance(to) > activation_distance {
                    *self = Self::Dragging { deal, over };
                    true
                } else {
                    false
                }
            }
            Self::Dragging { over: current, .. } => {
                *current = over;
                false
            }
        }
    }

    /// Releases the pointer over the provided [`Target`], returning to
    /// [`Session::Idle`].
    ///
    /// Only releasing a dragged card yields a [`Release`]: releasing a
    /// merely pressed card is a click.
    pub fn release(&mut self, over: Option<Target>) -> Option<Release> {
        match std::mem::take(self) {
            Self::Dragging { deal, .. } => Some(Release { deal, over }),
            Self::Idle | Self::Pressed { .. } => None,
        }
    }

    /// Abandons the current interaction without any effect.
    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }

    /// Returns the ID of the dragged [`Deal`], if any.
    #[must_use]
    pub fn active(&self) -> Option<deal::Id> {
        match self {
            Self::Dragging { deal, .. } => Some(*deal),
            Self::Idle | Self::Pressed { .. } => None,
        }
    }

    /// Returns the ID of the pressed or dragged [`Deal`], if any.
    #[must_use]
    pub fn subject(&self) -> Option<deal::Id> {
        match self {
            Self::Pressed { deal, .. } | Self::Dragging { deal, .. } => {
                Some(*deal)
            }
            Self::Idle => None,
        }
    }

    /// Returns the current hover [`Target`] of the dragged card, if any.
    #[must_use]
    pub fn over(&self) -> Option<Target> {
        match self {
            Self::Dragging { over, .. } => *over,
            Self::Idle | Self::Pressed { .. } => None,
        }
    }
}
