//! [`Event`]-related definitions.

use juniper::{GraphQLObject, GraphQLUnion};
use service::domain::board;

use crate::{
    api::{board::Revision, deal, Deal, Status},
    Context,
};

/// Notification emitted by the deal board.
#[derive(Clone, Debug, GraphQLUnion)]
#[graphql(name = "BoardEvent", context = Context)]
pub enum Event {
    /// Transition is committed and is being persisted.
    StatusUpdate(StatusUpdate),

    /// Details of a `Deal` are requested.
    DealClicked(DealClicked),

    /// Status editing of a `Deal` is requested.
    EditStatusRequested(EditStatusRequested),

    /// Persisting a `StatusUpdate` failed.
    StatusUpdateFailed(StatusUpdateFailed),

    /// Authoritative `Deal` list is refreshed.
    Refreshed(Refreshed),
}

impl From<board::Event> for Event {
    fn from(event: board::Event) -> Self {
        use board::Event as E;
        match event {
            E::StatusUpdate(update) => Self::StatusUpdate(update.into()),
            E::DealClicked(deal) => {
                Self::DealClicked(DealClicked { deal: deal.into() })
            }
            E::EditStatusRequested(deal) => {
                Self::EditStatusRequested(EditStatusRequested {
                    deal: deal.into(),
                })
            }
            E::StatusUpdateFailed {
                deal_id,
                status,
                message,
            } => Self::StatusUpdateFailed(StatusUpdateFailed {
                deal_id: deal_id.into(),
                status: status.into(),
                message,
            }),
            E::Refreshed(revision) => Self::Refreshed(Refreshed {
                revision: revision.into(),
            }),
        }
    }
}

/// Committed transition of a `Deal` into a new `DealStatus`.
#[derive(Clone, Debug, GraphQLObject)]
#[graphql(context = Context)]
pub struct StatusUpdate {
    /// `Deal` as it was before the transition.
    pub deal: Deal,

    /// New `DealStatus` of the `Deal`.
    pub status: Status,

    /// Reason of the transition, present for rejections only.
    pub reason: Option<String>,
}

impl From<board::StatusUpdate> for StatusUpdate {
    fn from(update: board::StatusUpdate) -> Self {
        let board::StatusUpdate {
            deal,
            status,
            reason,
        } = update;
        Self {
            deal: deal.into(),
            status: status.into(),
            reason: reason.map(|r| r.to_string()),
        }
    }
}

/// Details of a `Deal` are requested.
#[derive(Clone, Debug, GraphQLObject)]
#[graphql(context = Context)]
pub struct DealClicked {
    /// Clicked `Deal`.
    pub deal: Deal,
}

/// Status editing of a `Deal` is requested.
#[derive(Clone, Debug, GraphQLObject)]
#[graphql(context = Context)]
pub struct EditStatusRequested {
    /// `Deal` to edit the status of.
    pub deal: Deal,
}

/// Persisting a `StatusUpdate` failed.
///
/// The optimistic status stays visible until the next refresh.
#[derive(Clone, Debug, GraphQLObject)]
#[graphql(context = Context)]
pub struct StatusUpdateFailed {
    /// ID of the `Deal` the update was for.
    pub deal_id: deal::Id,

    /// `DealStatus` that failed to be persisted.
    pub status: Status,

    /// Description of the failure.
    pub message: String,
}

/// Authoritative `Deal` list is refreshed.
#[derive(Clone, Debug, GraphQLObject)]
#[graphql(context = Context)]
pub struct Refreshed {
    /// New `BoardRevision`.
    pub revision: Revision,
}
