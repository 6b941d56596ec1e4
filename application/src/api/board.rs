//! [`Board`]-related definitions.

use common::DateTime;
use derive_more::{AsRef, Display, From, Into};
use juniper::{GraphQLEnum, GraphQLObject, GraphQLScalar};
use service::{domain::board, read};

use crate::{
    api::{deal, event, scalar, status, Deal, Status},
    Context,
};

/// Render model of the deal board.
#[derive(Clone, Debug, GraphQLObject)]
pub struct Board {
    /// `BoardRevision` of the authoritative `Deal` list rendered.
    pub revision: Revision,

    /// `DateTime` when the rendered `Deal` list was last refreshed.
    pub refreshed_at: DateTime,

    /// Indicator whether locally committed changes not yet confirmed by a
    /// refresh are rendered.
    pub is_optimistic: bool,

    /// `BoardColumn`s in their rendering order.
    pub columns: Vec<Column>,

    /// Floating copy of the dragged `DealCard`, following the pointer.
    pub overlay: Option<Card>,

    /// Modal requesting a rejection reason, if open.
    pub rejection: Option<Rejection>,
}

impl From<read::View> for Board {
    fn from(view: read::View) -> Self {
        let read::View {
            revision,
            refreshed_at,
            is_optimistic,
            columns,
            overlay,
            rejection,
        } = view;
        Self {
            revision: revision.into(),
            refreshed_at: refreshed_at.coerce(),
            is_optimistic,
            columns: columns.into_iter().map(Into::into).collect(),
            overlay: overlay.map(Into::into),
            rejection: rejection.map(Into::into),
        }
    }
}

/// Identity of an authoritative `Deal` list snapshot.
#[derive(AsRef, Clone, Copy, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(name = "BoardRevision", with = scalar::Via::<board::Revision>)]
pub struct Revision(board::Revision);

/// Lane of the deal board.
#[derive(Clone, Debug, GraphQLObject)]
#[graphql(name = "BoardColumn")]
pub struct Column {
    /// `DealStatus` of this `BoardColumn`, or `null` if it collects `Deal`s
    /// with an unrecognized status.
    pub status: Option<Status>,

    /// Key of this `BoardColumn`.
    pub key: String,

    /// Title of this `BoardColumn`.
    pub title: String,

    /// Presentation tokens of this `BoardColumn`.
    pub style: status::Style,

    /// Indicator whether the dragged card hovers this `BoardColumn`.
    pub is_highlighted: bool,

    /// Number of `Deal`s in this `BoardColumn`.
    pub count: i32,

    /// `DealCard`s of this `BoardColumn`.
    pub cards: Vec<Card>,
}

impl From<read::board::Column> for Column {
    fn from(column: read::board::Column) -> Self {
        let count = i32::try_from(column.count()).unwrap_or(i32::MAX);
        let read::board::Column {
            status,
            key,
            title,
            style,
            is_highlighted,
            cards,
        } = column;
        Self {
            status: status.map(Into::into),
            key: key.to_owned(),
            title: title.to_owned(),
            style: style.into(),
            is_highlighted,
            count,
            cards: cards.into_iter().map(Into::into).collect(),
        }
    }
}

/// `Deal` rendered in a `BoardColumn`.
#[derive(Clone, Debug, GraphQLObject)]
#[graphql(name = "DealCard")]
pub struct Card {
    /// ID of the `Deal`.
    pub id: deal::Id,

    /// Truncated address of the `Deal`.
    pub address: String,

    /// Raw status key of the `Deal`.
    pub status: status::Key,

    /// Human-readable label of the status badge.
    pub status_label: String,

    /// Badge token of the status, if it's a known one.
    pub badge: Option<String>,

    /// Land type of the `Deal`.
    pub land_type: Option<String>,

    /// Formatted agreed price, or `N/A`.
    pub value: String,

    /// Formatted lot size, or `N/A`.
    pub size: String,

    /// Creation date in `MM/DD/YYYY` format.
    pub created: String,

    /// Indicator whether this `DealCard` is the origin of the current drag.
    pub is_dragging: bool,

    /// Actions available on this `DealCard`, which never start a drag.
    pub affordances: Vec<Affordance>,
}

impl From<read::board::Card> for Card {
    fn from(card: read::board::Card) -> Self {
        let read::board::Card {
            id,
            address,
            status,
            status_label,
            badge,
            land_type,
            value,
            size,
            created,
            is_dragging,
        } = card;
        Self {
            id: id.into(),
            address,
            status: status.into(),
            status_label,
            badge: badge.map(ToOwned::to_owned),
            land_type,
            value,
            size,
            created,
            is_dragging,
            affordances: read::board::Card::AFFORDANCES
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }
}

/// Action available on a `DealCard`.
#[derive(Clone, Copy, Debug, Eq, GraphQLEnum, PartialEq)]
#[graphql(name = "DealCardAffordance")]
pub enum Affordance {
    /// Request to edit the status of a `Deal` (`editDealStatus` mutation).
    EditStatus,

    /// Request to view the details of a `Deal` (`viewDeal` mutation).
    ViewDetails,
}

impl From<read::board::Affordance> for Affordance {
    fn from(affordance: read::board::Affordance) -> Self {
        use read::board::Affordance as A;
        match affordance {
            A::EditStatus => Self::EditStatus,
            A::ViewDetails => Self::ViewDetails,
        }
    }
}

/// Modal requesting a rejection reason.
#[derive(Clone, Debug, GraphQLObject)]
#[graphql(name = "RejectionModal")]
pub struct Rejection {
    /// ID of the rejected `Deal`.
    pub deal_id: deal::Id,

    /// Full address of the rejected `Deal`.
    pub address: String,

    /// `DealStatus` the `Deal` is transitioned into.
    pub target: Status,

    /// Indicator whether this modal may be dismissed by an outside
    /// interaction.
    pub is_dismissible: bool,
}

impl From<read::board::Rejection> for Rejection {
    fn from(rejection: read::board::Rejection) -> Self {
        let read::board::Rejection {
            deal_id,
            address,
            target,
            is_dismissible,
        } = rejection;
        Self {
            deal_id: deal_id.into(),
            address,
            target: target.into(),
            is_dismissible,
        }
    }
}

/// Outcome of a requested `Deal` transition.
#[derive(Clone, Debug, GraphQLObject)]
#[graphql(name = "TransitionOutcome", context = Context)]
pub struct Outcome {
    /// Kind of this `TransitionOutcome`.
    pub kind: OutcomeKind,

    /// Committed `StatusUpdate`, if any.
    pub update: Option<event::StatusUpdate>,

    /// Transition awaiting a rejection reason, if any.
    pub pending_rejection: Option<PendingRejection>,
}

impl From<board::Outcome> for Outcome {
    fn from(outcome: board::Outcome) -> Self {
        use board::Outcome as O;
        match outcome {
            O::NoOp => Self {
                kind: OutcomeKind::NoOp,
                update: None,
                pending_rejection: None,
            },
            O::Committed(update) => Self {
                kind: OutcomeKind::Committed,
                update: Some(update.into()),
                pending_rejection: None,
            },
            O::PendingRejection(pending) => Self {
                kind: OutcomeKind::PendingRejection,
                update: None,
                pending_rejection: Some(pending.into()),
            },
        }
    }
}

/// Kind of a `TransitionOutcome`.
#[derive(Clone, Copy, Debug, Eq, GraphQLEnum, PartialEq)]
#[graphql(name = "TransitionOutcomeKind")]
pub enum OutcomeKind {
    /// Nothing happened: the target is invalid or the status is unchanged.
    NoOp,

    /// Transition is committed optimistically.
    Committed,

    /// Transition awaits a rejection reason.
    PendingRejection,
}

/// Transition of a `Deal` awaiting a rejection reason.
#[derive(Clone, Debug, GraphQLObject)]
#[graphql(context = Context)]
pub struct PendingRejection {
    /// `Deal` being rejected, with its status as before the transition.
    pub deal: Deal,

    /// `DealStatus` the `Deal` is transitioned into.
    pub target: Status,
}

impl From<board::PendingRejection> for PendingRejection {
    fn from(pending: board::PendingRejection) -> Self {
        let board::PendingRejection { deal, target } = pending;
        Self {
            deal: deal.into(),
            target: target.into(),
        }
    }
}
