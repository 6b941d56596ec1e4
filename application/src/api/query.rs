//! GraphQL [`Query`]s definitions.

use juniper::graphql_object;
use service::{domain, query, Query as _};

use crate::{api, Context};

/// Root of all GraphQL queries.
#[derive(Clone, Copy, Debug)]
pub struct Query;

impl Query {
    /// Name of the [`tracing::Span`] for the queries.
    pub(crate) const SPAN_NAME: &'static str = "GraphQL query";
}

#[graphql_object(context = Context)]
impl Query {
    /// Returns the render model of the deal board.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "board",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn board(ctx: &Context) -> api::Board {
        let Ok(view) = ctx.service().execute(query::board::View::by(())).await;
        view.into()
    }

    /// Returns the `DealStatus` taxonomy in its rendering order.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "statuses",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub fn statuses() -> Vec<api::status::Info> {
        domain::Status::ALL.iter().copied().map(Into::into).collect()
    }

    /// Returns the working `Deal` list: the authoritative one with local
    /// changes applied.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "deals",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn deals(ctx: &Context) -> Vec<api::Deal> {
        let Ok(deals) =
            ctx.service().execute(query::board::Working::by(())).await;
        deals.into_iter().map(Into::into).collect()
    }

    /// Returns the `Deal` with the specified ID from the working list, if
    /// any.
    #[tracing::instrument(
        skip_all,
        fields(
            id = %id,
            gql.name = "deal",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn deal(id: api::deal::Id, ctx: &Context) -> Option<api::Deal> {
        let Ok(deal) =
            ctx.service().execute(query::deal::ById::by(id.into())).await;
        deal.map(Into::into)
    }
}
