//! [`Board`] definitions.
//!
//! [`Board`] is a synchronous state engine: every operation upon it is
//! applied atomically, and its results are returned to the caller to be
//! published as [`Event`]s.

pub mod drag;
pub mod grouping;
pub mod optimistic;
pub mod rejection;

use derive_more::{Display, Error as StdError};
use smart_default::SmartDefault;

use crate::domain::{deal, Deal, Status};

pub use self::{
    drag::{Point, Session, Target},
    grouping::{Grouping, UnrecognizedPolicy},
    optimistic::{Optimistic, RefreshDateTime, Revision},
    rejection::{PendingRejection, Reason},
};

/// [`Board`] configuration.
#[derive(Clone, Copy, Debug, SmartDefault)]
pub struct Config {
    /// Distance (in pixels) the pointer should travel from a press origin
    /// before the press becomes a drag.
    #[default(8.0)]
    pub activation_distance: f64,

    /// [`UnrecognizedPolicy`] of grouping.
    pub unrecognized: UnrecognizedPolicy,

    /// Maximum number of characters of an address rendered on a card.
    #[default(30)]
    pub address_max_len: usize,
}

/// Request to persist a new [`Status`] of a [`Deal`] in the backend.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StatusUpdate {
    /// [`Deal`] as it was before the transition.
    pub deal: Deal,

    /// New [`Status`] of the [`Deal`].
    pub status: Status,

    /// [`Reason`] of the transition, present for rejections only.
    pub reason: Option<Reason>,
}

/// Outcome of a requested [`Deal`] transition.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// Nothing happened.
    NoOp,

    /// Transition is committed optimistically.
    Committed(StatusUpdate),

    /// Transition awaits a [`Reason`].
    PendingRejection(PendingRejection),
}

/// Notification emitted by a [`Board`] to its collaborators.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Event {
    /// Transition is committed and should be persisted.
    StatusUpdate(StatusUpdate),

    /// Details of a [`Deal`] are requested.
    DealClicked(Deal),

    /// Status editing of a [`Deal`] is requested.
    EditStatusRequested(Deal),

    /// Persisting a [`StatusUpdate`] failed.
    ///
    /// The optimistic [`Status`] stays visible until the next refresh.
    StatusUpdateFailed {
        /// ID of the [`Deal`] the update was for.
        deal_id: deal::Id,

        /// [`Status`] that failed to be persisted.
        status: Status,

        /// Description of the failure.
        message: String,
    },

    /// Authoritative [`Deal`] list is refreshed.
    Refreshed(Revision),
}

/// Error of a [`Board`] operation.
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, StdError)]
pub enum Error {
    /// [`Deal`] doesn't exist in the working list.
    #[display("`Deal(id: {_0})` does not exist")]
    DealNotExists(#[error(not(source))] deal::Id),

    /// Rejection of a [`Deal`] awaits its [`Reason`].
    #[display("Rejection of `Deal(id: {_0})` is pending")]
    RejectionPending(#[error(not(source))] deal::Id),

    /// No rejection is pending.
    #[display("No rejection is pending")]
    NoPendingRejection,

    /// Provided rejection [`Reason`] is blank.
    #[display("Rejection reason is empty")]
    EmptyReason,
}

/// Kanban board of [`Deal`]s.
#[derive(Clone, Debug)]
pub struct Board {
    /// [`Config`] of this [`Board`].
    config: Config,

    /// [`Deal`]s of this [`Board`].
    deals: Optimistic,

    /// Current drag [`Session`].
    drag: Session,

    /// Rejection [`rejection::Gate`].
    rejection: rejection::Gate,

    /// Indicator whether an address autocomplete is being interacted with,
    /// so the rejection modal must not be dismissed.
    is_autocomplete_interacting: bool,
}

impl Board {
    /// Creates a new [`Board`] over the provided authoritative `deals`.
    #[must_use]
    pub fn new(config: Config, deals: Vec<Deal>) -> Self {
        Self {
            config,
            deals: Optimistic::new(deals),
            drag: Session::default(),
            rejection: rejection::Gate::default(),
            is_autocomplete_interacting: false,
        }
    }

    /// Returns [`Config`] of this [`Board`].
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the working [`Deal`] list.
    #[must_use]
    pub fn working(&self) -> &[Deal] {
        self.deals.working()
    }

    /// Returns the [`Optimistic`] [`Deal`] list of this [`Board`].
    #[must_use]
    pub fn deals(&self) -> &Optimistic {
        &self.deals
    }

    /// Returns the [`Revision`] of the authoritative [`Deal`] list.
    #[must_use]
    pub fn revision(&self) -> Revision {
        self.deals.revision()
    }

    /// Finds a [`Deal`] in the working list.
    #[must_use]
    pub fn find(&self, id: deal::Id) -> Option<&Deal> {
        self.deals.find(id)
    }

    /// Groups the working list according to the [`Config`].
    #[must_use]
    pub fn grouping(&self) -> Grouping {
        Grouping::new(self.working(), self.config.unrecognized)
    }

    /// Returns the current drag [`Session`].
    #[must_use]
    pub fn drag(&self) -> &Session {
        &self.drag
    }

    /// Returns the [`PendingRejection`], if any.
    #[must_use]
    pub fn pending_rejection(&self) -> Option<&PendingRejection> {
        self.rejection.pending()
    }

    /// Indicates whether an address autocomplete is being interacted with.
    #[must_use]
    pub fn is_autocomplete_interacting(&self) -> bool {
        self.is_autocomplete_interacting
    }

    /// Sets the indicator whether an address autocomplete is being
    /// interacted with.
    pub fn set_autocomplete_interacting(&mut self, value: bool) {
        self.is_autocomplete_interacting = value;
    }

    /// Returns the [`Status`] column the dragged card hovers, directly or
    /// via another card in it.
    #[must_use]
    pub fn hovered_column(&self) -> Option<Status> {
        self.drag.over().and_then(|t| self.resolve(t))
    }

    /// Replaces the authoritative [`Deal`] list, discarding all the
    /// optimistic changes.
    ///
    /// Interactions upon [`Deal`]s absent in the new list are abandoned.
    pub fn refresh(&mut self, deals: Vec<Deal>) -> Revision {
        let revision = self.deals.refresh(deals);

        if let Some(id) = self.drag.subject() {
            if self.deals.find(id).is_none() {
                self.drag.cancel();
            }
        }
        if let Some(pending) = self.rejection.pending() {
            let obsolete = self
                .deals
                .find(pending.deal.id)
                .map_or(true, |d| d.status == pending.target);
            if obsolete {
                _ = self.rejection.close();
            }
        }

        revision
    }

    /// Presses the card of the [`Deal`] with the provided ID.
    ///
    /// # Errors
    ///
    /// - If a rejection is pending.
    /// - If the [`Deal`] is not in the working list.
    pub fn press(&mut self, id: deal::Id, at: Point) -> Result<(), Error> {
        if let Some(pending) = self.rejection.pending() {
            return Err(Error::RejectionPending(pending.deal.id));
        }
        if self.deals.find(id).is_none() {
            return Err(Error::DealNotExists(id));
        }
        self.drag.press(id, at);
        Ok(())
    }

    /// Moves the pointer, returning `true` if this move started a drag.
    pub fn move_pointer(&mut self, to: Point, over: Option<Target>) -> bool {
        self.drag
            .move_to(to, over, self.config.activation_distance)
    }

    /// Releases the pointer over the provided [`Target`], deciding upon the
    /// dragged card transition.
    ///
    /// Dropping outside any [`Target`], onto an unknown card or onto the
    /// current [`Status`] of the dragged [`Deal`] does nothing.
    pub fn release(&mut self, over: Option<Target>) -> Outcome {
        let Some(release) = self.drag.release(over) else {
            return Outcome::NoOp;
        };
        match release.over.and_then(|t| self.resolve(t)) {
            Some(status) => self.transition(release.deal, status),
            None => Outcome::NoOp,
        }
    }

    /// Abandons the current drag without any effect.
    pub fn cancel_drag(&mut self) {
        self.drag.cancel();
    }

    /// Transitions the [`Deal`] with the provided ID into the provided
    /// [`Status`] without dragging it.
    ///
    /// # Errors
    ///
    /// - If a rejection is pending.
    /// - If the [`Deal`] is not in the working list.
    pub fn commit_transition(
        &mut self,
        id: deal::Id,
        status: Status,
    ) -> Result<Outcome, Error> {
        if let Some(pending) = self.rejection.pending() {
            return Err(Error::RejectionPending(pending.deal.id));
        }
        if self.deals.find(id).is_none() {
            return Err(Error::DealNotExists(id));
        }
        Ok(self.transition(id, status))
    }

    /// Commits the [`PendingRejection`] with the provided `reason`.
    ///
    /// # Errors
    ///
    /// - If no rejection is pending.
    /// - If the `reason` is blank, leaving the rejection pending.
    pub fn submit_rejection(
        &mut self,
        reason: &str,
    ) -> Result<StatusUpdate, Error> {
        let pending = self.rejection.pending().ok_or(Error::NoPendingRejection)?;
        let reason = Reason::new(reason).ok_or(Error::EmptyReason)?;
        let PendingRejection { deal, target } = pending.clone();
        _ = self.rejection.close();

        let deal = self.deals.commit(deal.id, &target.into()).unwrap_or(deal);
        Ok(StatusUpdate {
            deal,
            status: target,
            reason: Some(reason),
        })
    }

    /// Discards the [`PendingRejection`], leaving the [`Deal`] list as is.
    ///
    /// # Errors
    ///
    /// If no rejection is pending.
    pub fn cancel_rejection(&mut self) -> Result<PendingRejection, Error> {
        self.rejection.close().ok_or(Error::NoPendingRejection)
    }

    /// Dismisses the rejection modal by an outside interaction.
    ///
    /// Returns `false` if dismissing is suppressed because an address
    /// autocomplete is being interacted with.
    ///
    /// # Errors
    ///
    /// If no rejection is pending.
    pub fn dismiss_rejection(&mut self) -> Result<bool, Error> {
        if !self.rejection.is_open() {
            return Err(Error::NoPendingRejection);
        }
        if self.is_autocomplete_interacting {
            return Ok(false);
        }
        _ = self.rejection.close();
        Ok(true)
    }

    /// Resolves the provided [`Target`] into a [`Status`].
    fn resolve(&self, target: Target) -> Option<Status> {
        match target {
            Target::Column(status) => Some(status),
            Target::Card(id) => self.deals.find(id).and_then(Deal::known_status),
        }
    }

    /// Transitions the [`Deal`] with the provided ID into the provided
    /// [`Status`], gating rejections.
    fn transition(&mut self, id: deal::Id, status: Status) -> Outcome {
        if self.rejection.is_open() {
            return Outcome::NoOp;
        }
        let Some(deal) = self.deals.find(id) else {
            return Outcome::NoOp;
        };
        if deal.status == status {
            return Outcome::NoOp;
        }

        if status.requires_reason() {
            let deal = deal.clone();
            return Outcome::PendingRejection(
                self.rejection.open_for(deal, status).clone(),
            );
        }

        match self.deals.commit(id, &status.into()) {
            Some(deal) => Outcome::Committed(StatusUpdate {
                deal,
                status,
                reason: None,
            }),
            None => Outcome::NoOp,
        }
    }
}

/// Creates a minimal [`Deal`] with the provided ID and raw status key.
#[cfg(test)]
pub(crate) fn test_deal(id: i64, status: &str) -> Deal {
    use crate::domain::{deal::Address, status};

    Deal {
        id: id.into(),
        address: Address::new(format!("{id} Test Road")).unwrap(),
        parcel_id: None,
        lot_size: None,
        land_type: None,
        utility_type: None,
        access_type: None,
        agreed_price: None,
        status: status::Key::new(status).unwrap(),
        created_at: deal::CreationDateTime::from_unix_timestamp(1_700_000_000)
            .unwrap(),
    }
}

#[cfg(test)]
mod spec {
    use crate::domain::{board::test_deal as deal, Deal, Status};

    use super::{
        Board, Config, Error, Outcome, PendingRejection, Point, Target,
    };

    fn board(deals: Vec<Deal>) -> Board {
        Board::new(Config::default(), deals)
    }

    fn drop_on(board: &mut Board, id: i64, over: Option<Target>) -> Outcome {
        board.press(id.into(), Point { x: 0.0, y: 0.0 }).unwrap();
        assert!(board.move_pointer(Point { x: 40.0, y: 0.0 }, over));
        board.release(over)
    }

    #[test]
    fn accepts_drop_onto_another_column() {
        let original = deal(1, "submitted");
        let mut board = board(vec![original.clone()]);

        let outcome = drop_on(
            &mut board,
            1,
            Some(Target::Column(Status::BuyerApproved)),
        );

        let Outcome::Committed(update) = outcome else {
            panic!("expected commit, got: {outcome:?}");
        };
        assert_eq!(update.deal, original);
        assert_eq!(update.status, Status::BuyerApproved);
        assert_eq!(update.reason, None);
        assert_eq!(board.working(), [original.with_status(Status::BuyerApproved)]);
        assert_eq!(board.pending_rejection(), None);
    }

    #[test]
    fn gates_rejection_until_reason_is_submitted() {
        let original = deal(1, "submitted");
        let mut board = board(vec![original.clone()]);

        let outcome = drop_on(
            &mut board,
            1,
            Some(Target::Column(Status::BuyerRejected)),
        );

        assert_eq!(
            outcome,
            Outcome::PendingRejection(PendingRejection {
                deal: original.clone(),
                target: Status::BuyerRejected,
            }),
        );
        assert_eq!(board.working(), [original.clone()]);

        assert_eq!(board.submit_rejection("   "), Err(Error::EmptyReason));
        assert_eq!(board.working(), [original.clone()]);
        assert!(board.pending_rejection().is_some());

        let update = board.submit_rejection("price too low").unwrap();
        assert_eq!(update.deal, original);
        assert_eq!(update.status, Status::BuyerRejected);
        assert_eq!(update.reason.unwrap().to_string(), "price too low");
        assert_eq!(
            board.working(),
            [original.with_status(Status::BuyerRejected)],
        );
        assert_eq!(board.pending_rejection(), None);
    }

    #[test]
    fn cancelled_rejection_changes_nothing() {
        let original = deal(1, "submitted");
        let mut board = board(vec![original.clone()]);
        _ = drop_on(&mut board, 1, Some(Target::Column(Status::BuyerRejected)));

        let cancelled = board.cancel_rejection().unwrap();

        assert_eq!(cancelled.deal, original);
        assert_eq!(board.working(), [original]);
        assert_eq!(board.cancel_rejection(), Err(Error::NoPendingRejection));
        assert_eq!(
            board.submit_rejection("late"),
            Err(Error::NoPendingRejection),
        );
    }

    #[test]
    fn rejection_via_card_target_is_gated_too() {
        let mut board =
            board(vec![deal(1, "submitted"), deal(2, "buyer_rejected")]);

        let outcome = drop_on(&mut board, 1, Some(Target::Card(2.into())));

        assert!(matches!(outcome, Outcome::PendingRejection(_)));
        assert!(!board.deals().is_shadowed());
    }

    #[test]
    fn dropping_onto_own_column_is_idempotent() {
        let deals = vec![deal(1, "mls_active"), deal(2, "mls_active")];
        let mut board = board(deals.clone());

        let own = drop_on(&mut board, 1, Some(Target::Column(Status::MlsActive)));
        let card = drop_on(&mut board, 1, Some(Target::Card(2.into())));

        assert_eq!(own, Outcome::NoOp);
        assert_eq!(card, Outcome::NoOp);
        assert_eq!(board.working(), deals.as_slice());
    }

    #[test]
    fn dropping_outside_changes_nothing() {
        let deals = vec![deal(1, "submitted")];
        let mut board = board(deals.clone());

        assert_eq!(drop_on(&mut board, 1, None), Outcome::NoOp);
        assert_eq!(
            drop_on(&mut board, 1, Some(Target::Card(99.into()))),
            Outcome::NoOp,
        );
        assert_eq!(board.working(), deals.as_slice());
    }

    #[test]
    fn click_is_not_a_drop() {
        let mut board = board(vec![deal(1, "submitted")]);
        board.press(1.into(), Point { x: 5.0, y: 5.0 }).unwrap();
        assert!(!board.move_pointer(Point { x: 7.0, y: 7.0 }, None));

        let over = Some(Target::Column(Status::Sold));
        assert_eq!(board.release(over), Outcome::NoOp);
        assert!(!board.deals().is_shadowed());
    }

    #[test]
    fn refresh_resets_optimistic_changes() {
        let mut board = board(vec![deal(1, "submitted")]);
        _ = drop_on(&mut board, 1, Some(Target::Column(Status::Sold)));
        assert_eq!(board.working()[0].status, Status::Sold);

        let before = board.revision();
        let after = board.refresh(vec![deal(1, "submitted"), deal(2, "sold")]);

        assert_ne!(before, after);
        assert_eq!(board.working(), [deal(1, "submitted"), deal(2, "sold")]);
        assert_eq!(board.grouping().bucket(Status::Sold).len(), 1);
    }

    #[test]
    fn refresh_drops_rejection_of_vanished_deal() {
        let mut board = board(vec![deal(1, "submitted"), deal(2, "sold")]);
        _ = drop_on(&mut board, 1, Some(Target::Column(Status::BuyerRejected)));

        _ = board.refresh(vec![deal(1, "submitted"), deal(2, "sold")]);
        assert!(board.pending_rejection().is_some());

        _ = board.refresh(vec![deal(2, "sold")]);
        assert_eq!(board.pending_rejection(), None);
    }

    #[test]
    fn refuses_interactions_while_rejection_is_pending() {
        let mut board = board(vec![deal(1, "submitted"), deal(2, "submitted")]);
        _ = drop_on(&mut board, 1, Some(Target::Column(Status::BuyerRejected)));

        assert_eq!(
            board.press(2.into(), Point::default()),
            Err(Error::RejectionPending(1.into())),
        );
        assert_eq!(
            board.commit_transition(2.into(), Status::Sold),
            Err(Error::RejectionPending(1.into())),
        );
    }

    #[test]
    fn transitions_without_drag() {
        let mut board = board(vec![deal(1, "submitted")]);

        assert_eq!(
            board.commit_transition(7.into(), Status::Sold),
            Err(Error::DealNotExists(7.into())),
        );
        assert_eq!(
            board.commit_transition(1.into(), Status::Submitted),
            Ok(Outcome::NoOp),
        );
        assert!(matches!(
            board.commit_transition(1.into(), Status::MlsPending),
            Ok(Outcome::Committed(_)),
        ));
        assert_eq!(board.working()[0].status, Status::MlsPending);
    }

    #[test]
    fn autocomplete_interaction_suppresses_dismissal_only() {
        let mut board = board(vec![deal(1, "submitted")]);
        assert_eq!(board.dismiss_rejection(), Err(Error::NoPendingRejection));
        _ = drop_on(&mut board, 1, Some(Target::Column(Status::BuyerRejected)));

        board.set_autocomplete_interacting(true);
        assert_eq!(board.dismiss_rejection(), Ok(false));
        assert!(board.pending_rejection().is_some());

        board.set_autocomplete_interacting(false);
        assert_eq!(board.dismiss_rejection(), Ok(true));
        assert_eq!(board.pending_rejection(), None);

        _ = drop_on(&mut board, 1, Some(Target::Column(Status::BuyerRejected)));
        board.set_autocomplete_interacting(true);
        assert!(board.cancel_rejection().is_ok());
    }

    #[test]
    fn highlights_hovered_column() {
        let mut board = board(vec![deal(1, "submitted"), deal(2, "sold")]);
        board.press(1.into(), Point::default()).unwrap();
        assert_eq!(board.hovered_column(), None);

        _ = board.move_pointer(
            Point { x: 20.0, y: 0.0 },
            Some(Target::Card(2.into())),
        );
        assert_eq!(board.hovered_column(), Some(Status::Sold));

        board.cancel_drag();
        assert_eq!(board.hovered_column(), None);
    }
}
