//! GraphQL [`Mutation`]s definitions.

use juniper::{graphql_object, GraphQLInputObject};
use service::{
    command,
    domain::{self, board},
    infra::backend::payload,
    Command as _,
};

use crate::{api, define_error, AsError, Context, Error};

/// Root of all GraphQL mutations.
#[derive(Clone, Copy, Debug)]
pub struct Mutation;

impl Mutation {
    /// Name of the [`tracing::Span`] for the mutations.
    const SPAN_NAME: &'static str = "GraphQL mutation";
}

#[graphql_object(context = Context)]
impl Mutation {
    /// Presses the card of the specified `Deal`, which starts a drag once
    /// the pointer travels far enough.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `DEAL_NOT_EXISTS` - the `Deal` with the specified ID does not exist;
    /// - `REJECTION_PENDING` - a rejection awaits its reason.
    #[tracing::instrument(
        skip_all,
        fields(
            deal_id = %deal_id,
            gql.name = "pressCard",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn press_card(
        deal_id: api::deal::Id,
        x: f64,
        y: f64,
        ctx: &Context,
    ) -> Result<bool, Error> {
        ctx.service()
            .execute(command::PressCard {
                deal_id: deal_id.into(),
                at: board::Point { x, y },
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?;
        Ok(true)
    }

    /// Moves the pointer over the board.
    ///
    /// Returns whether this move started a drag.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `AMBIGUOUS_DROP_TARGET` - both a column and a card are specified.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "movePointer",
            otel.name = Self::SPAN_NAME,
            over = ?over,
        ),
    )]
    pub async fn move_pointer(
        x: f64,
        y: f64,
        over: Option<DropTarget>,
        ctx: &Context,
    ) -> Result<bool, Error> {
        let over = DropTarget::resolve(over).map_err(ctx.error())?;
        let Ok(started) = ctx
            .service()
            .execute(command::MovePointer {
                to: board::Point { x, y },
                over,
            })
            .await;
        Ok(started)
    }

    /// Releases the pointer over the specified `DropTarget`, finishing the
    /// current drag (if any).
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `AMBIGUOUS_DROP_TARGET` - both a column and a card are specified.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "releasePointer",
            otel.name = Self::SPAN_NAME,
            over = ?over,
        ),
    )]
    pub async fn release_pointer(
        over: Option<DropTarget>,
        ctx: &Context,
    ) -> Result<api::board::Outcome, Error> {
        let over = DropTarget::resolve(over).map_err(ctx.error())?;
        let Ok(outcome) = ctx
            .service()
            .execute(command::ReleasePointer { over })
            .await;
        Ok(outcome.into())
    }

    /// Cancels the current drag (if any) without any transition.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "cancelDrag",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn cancel_drag(ctx: &Context) -> bool {
        let Ok(()) = ctx.service().execute(command::CancelDrag).await;
        true
    }

    /// Transitions the specified `Deal` into the specified `DealStatus`
    /// without dragging it.
    ///
    /// A transition into `BUYER_REJECTED` awaits its reason.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `DEAL_NOT_EXISTS` - the `Deal` with the specified ID does not exist;
    /// - `REJECTION_PENDING` - a rejection awaits its reason.
    #[tracing::instrument(
        skip_all,
        fields(
            deal_id = %deal_id,
            gql.name = "transitionDeal",
            otel.name = Self::SPAN_NAME,
            status = ?status,
        ),
    )]
    pub async fn transition_deal(
        deal_id: api::deal::Id,
        status: api::Status,
        ctx: &Context,
    ) -> Result<api::board::Outcome, Error> {
        ctx.service()
            .execute(command::TransitionDeal {
                deal_id: deal_id.into(),
                status: status.into(),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Commits the pending rejection with the provided reason.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `NO_PENDING_REJECTION` - no rejection awaits its reason;
    /// - `EMPTY_REJECTION_REASON` - the provided reason is blank.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "submitRejection",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn submit_rejection(
        reason: String,
        ctx: &Context,
    ) -> Result<api::event::StatusUpdate, Error> {
        ctx.service()
            .execute(command::SubmitRejection { reason })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Discards the pending rejection without any transition.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `NO_PENDING_REJECTION` - no rejection awaits its reason.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "cancelRejection",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn cancel_rejection(
        ctx: &Context,
    ) -> Result<api::board::PendingRejection, Error> {
        ctx.service()
            .execute(command::CancelRejection)
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Dismisses the rejection modal by an outside interaction.
    ///
    /// Returns `false` if the dismissal is suppressed by an address
    /// autocomplete interaction.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `NO_PENDING_REJECTION` - no rejection awaits its reason.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "dismissRejection",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn dismiss_rejection(ctx: &Context) -> Result<bool, Error> {
        ctx.service()
            .execute(command::DismissRejection)
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
    }

    /// Marks whether an address autocomplete is being interacted with.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "setAutocompleteInteracting",
            otel.name = Self::SPAN_NAME,
            value = value,
        ),
    )]
    pub async fn set_autocomplete_interacting(
        value: bool,
        ctx: &Context,
    ) -> bool {
        let Ok(()) = ctx
            .service()
            .execute(command::SetAutocompleteInteracting(value))
            .await;
        value
    }

    /// Replaces the authoritative `Deal` list with the provided one.
    ///
    /// Discards any local changes, the current drag and a pending rejection
    /// of a `Deal` which is gone or already rejected.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `INVALID_DEAL` - one of the provided `Deal`s is invalid.
    #[tracing::instrument(
        skip_all,
        fields(
            count = deals.len(),
            gql.name = "refreshDeals",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn refresh_deals(
        deals: Vec<api::deal::Input>,
        ctx: &Context,
    ) -> Result<api::board::Revision, Error> {
        let deals = deals
            .into_iter()
            .map(domain::Deal::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(AsError::into_error)
            .map_err(ctx.error())?;
        let Ok(revision) = ctx
            .service()
            .execute(command::RefreshDeals { deals })
            .await;
        Ok(revision.into())
    }

    /// Refreshes the authoritative `Deal` list from the deals backend.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `BACKEND_UNAVAILABLE` - the deals backend cannot be reached.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "fetchDeals",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn fetch_deals(
        ctx: &Context,
    ) -> Result<api::board::Revision, Error> {
        ctx.service()
            .execute(command::FetchDeals)
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Requests the details of the specified `Deal`.
    ///
    /// Never affects the current drag.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `DEAL_NOT_EXISTS` - the `Deal` with the specified ID does not exist.
    #[tracing::instrument(
        skip_all,
        fields(
            deal_id = %deal_id,
            gql.name = "viewDeal",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn view_deal(
        deal_id: api::deal::Id,
        ctx: &Context,
    ) -> Result<api::Deal, Error> {
        ctx.service()
            .execute(command::ViewDeal {
                deal_id: deal_id.into(),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Requests the status editor of the specified `Deal`.
    ///
    /// Never affects the current drag.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `DEAL_NOT_EXISTS` - the `Deal` with the specified ID does not exist.
    #[tracing::instrument(
        skip_all,
        fields(
            deal_id = %deal_id,
            gql.name = "editDealStatus",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn edit_deal_status(
        deal_id: api::deal::Id,
        ctx: &Context,
    ) -> Result<api::Deal, Error> {
        ctx.service()
            .execute(command::EditDealStatus {
                deal_id: deal_id.into(),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }
}

/// Target under the pointer: either a column or a card.
#[derive(Clone, Copy, Debug, GraphQLInputObject)]
pub struct DropTarget {
    /// `DealStatus` of the column under the pointer.
    pub column: Option<api::Status>,

    /// ID of the `Deal` whose card is under the pointer.
    pub card: Option<api::deal::Id>,
}

impl DropTarget {
    /// Resolves the provided [`DropTarget`] into a [`board::Target`].
    ///
    /// # Errors
    ///
    /// If the provided [`DropTarget`] is ambiguous.
    fn resolve(target: Option<Self>) -> Result<Option<board::Target>, Error> {
        define_error! {
            enum DropTargetError {
                #[code = "AMBIGUOUS_DROP_TARGET"]
                #[status = BAD_REQUEST]
                #[message = "Exactly one of `column` or `card` must be \
                             specified"]
                Ambiguous,
            }
        }

        match target {
            None => Ok(None),
            Some(Self {
                column: Some(status),
                card: None,
            }) => Ok(Some(board::Target::Column(status.into()))),
            Some(Self {
                column: None,
                card: Some(id),
            }) => Ok(Some(board::Target::Card(id.into()))),
            Some(Self {
                column: Some(_),
                card: Some(_),
            }
            | Self {
                column: None,
                card: None,
            }) => Err(DropTargetError::Ambiguous.into()),
        }
    }
}

impl AsError for board::Error {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "DEAL_NOT_EXISTS"]
                #[status = NOT_FOUND]
                #[message = "`Deal` with the specified ID does not exist"]
                DealNotExists,

                #[code = "REJECTION_PENDING"]
                #[status = CONFLICT]
                #[message = "Rejection of a `Deal` awaits its reason"]
                RejectionPending,

                #[code = "NO_PENDING_REJECTION"]
                #[status = CONFLICT]
                #[message = "No rejection awaits its reason"]
                NoPendingRejection,

                #[code = "EMPTY_REJECTION_REASON"]
                #[status = BAD_REQUEST]
                #[message = "Rejection reason must not be empty"]
                EmptyReason,
            }
        }

        Some(
            match self {
                Self::DealNotExists(_) => Error::DealNotExists,
                Self::RejectionPending(_) => Error::RejectionPending,
                Self::NoPendingRejection => Error::NoPendingRejection,
                Self::EmptyReason => Error::EmptyReason,
            }
            .into(),
        )
    }
}

impl AsError for command::view_deal::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::DealNotExists(id) => {
                board::Error::DealNotExists(*id).try_as_error()
            }
        }
    }
}

impl AsError for command::fetch_deals::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Backend(e) => e.try_as_error(),
        }
    }
}

impl AsError for payload::Error {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "INVALID_DEAL"]
                #[status = BAD_REQUEST]
                #[message = "Provided `Deal` is invalid"]
                InvalidDeal,
            }
        }

        let mut err: crate::Error = Error::InvalidDeal.into();
        err.message = format!("{}: {self}", err.message);
        Some(err)
    }
}

#[cfg(test)]
mod spec {
    use service::domain::{board, Status};

    use crate::{api, AsError as _};

    use super::DropTarget;

    #[test]
    fn resolves_drop_target() {
        assert_eq!(DropTarget::resolve(None).unwrap(), None);
        assert_eq!(
            DropTarget::resolve(Some(DropTarget {
                column: Some(api::Status::Sold),
                card: None,
            }))
            .unwrap(),
            Some(board::Target::Column(Status::Sold)),
        );

        let err = DropTarget::resolve(Some(DropTarget {
            column: None,
            card: None,
        }))
        .unwrap_err();
        assert_eq!(err.code, "AMBIGUOUS_DROP_TARGET");
        assert_eq!(err.status_code, http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn maps_board_errors() {
        let err = board::Error::EmptyReason.into_error();

        assert_eq!(err.code, "EMPTY_REJECTION_REASON");
        assert_eq!(err.status_code, http::StatusCode::BAD_REQUEST);

        let err = board::Error::RejectionPending(1.into()).into_error();

        assert_eq!(err.code, "REJECTION_PENDING");
        assert_eq!(err.status_code, http::StatusCode::CONFLICT);
    }
}
