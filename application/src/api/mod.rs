//! GraphQL API definitions.

pub mod board;
pub mod deal;
pub mod event;
mod mutation;
mod query;
pub mod scalar;
pub mod status;
mod subscription;

pub use self::{
    board::Board, deal::Deal, event::Event, mutation::Mutation, query::Query,
    status::Status, subscription::Subscription,
};

/// GraphQL schema.
pub type Schema = juniper::RootNode<'static, Query, Mutation, Subscription>;

#[cfg(test)]
mod spec {
    use juniper::{graphql_value, DefaultScalarValue, Value, Variables};
    use service::infra::Http;

    use crate::{Context, Service};

    use super::{Mutation, Query, Schema, Subscription};

    fn context() -> Context {
        let backend =
            Http::new(&service::infra::http::Config::default()).unwrap();
        let (service, _) = Service::new(
            service::Config {
                sync_deals: None,
                ..service::Config::default()
            },
            backend,
        );
        Context::new(service)
    }

    async fn execute(ctx: &Context, doc: &str) -> Value<DefaultScalarValue> {
        let schema = Schema::new(Query, Mutation, Subscription);
        let (res, errs) =
            juniper::execute(doc, None, &schema, &Variables::new(), ctx)
                .await
                .unwrap();
        assert!(errs.is_empty(), "{errs:?}");
        res
    }

    const REFRESH: &str = r#"mutation {
        refreshDeals(deals: [
            {
                id: "1",
                address: "1234 Long Country Road, Springfield, IL",
                lotSize: 5.2,
                agreedPrice: "1234567USD",
                status: "submitted",
                createdAt: "2023-11-14T22:13:20Z",
            },
            {
                id: "2",
                address: "7 Elm St",
                status: "legacy_status",
                createdAt: "2023-11-14T22:13:20Z",
            },
        ])
    }"#;

    #[tokio::test]
    async fn renders_refreshed_board() {
        let ctx = context();
        _ = execute(&ctx, REFRESH).await;

        let res = execute(
            &ctx,
            "{ board {
                isOptimistic
                refreshedAt
                columns { key count cards { address value size created } }
            } }",
        )
        .await;

        let board = res.as_object_value().unwrap();
        assert_eq!(
            board.get_field_value("board").and_then(|b| b
                .as_object_value()?
                .get_field_value("isOptimistic")
                .cloned()),
            Some(graphql_value!(false)),
        );
        assert!(board
            .get_field_value("board")
            .and_then(|b| b.as_object_value()?.get_field_value("refreshedAt"))
            .and_then(Value::as_string_value)
            .is_some_and(|at| common::DateTime::from_rfc3339(at).is_ok()));
        let columns = board
            .get_field_value("board")
            .and_then(|b| b.as_object_value()?.get_field_value("columns"))
            .and_then(Value::as_list_value)
            .unwrap();
        assert_eq!(columns.len(), 8);
        assert_eq!(
            columns[0],
            graphql_value!({
                "key": "submitted",
                "count": 1,
                "cards": [{
                    "address": "1234 Long Country Road, Sprin…",
                    "value": "$1,234,567",
                    "size": "5.2 acres",
                    "created": "11/14/2023",
                }],
            }),
        );
    }

    #[tokio::test]
    async fn drags_deal_into_new_column() {
        let ctx = context();
        _ = execute(&ctx, REFRESH).await;

        _ = execute(&ctx, r#"mutation { pressCard(dealId: "1", x: 0, y: 0) }"#)
            .await;
        let res = execute(
            &ctx,
            "mutation { movePointer(x: 0, y: 20, over: { column: SOLD }) }",
        )
        .await;
        assert_eq!(res, graphql_value!({ "movePointer": true }));

        let res = execute(
            &ctx,
            "mutation { releasePointer(over: { column: SOLD }) {
                kind
                update { status reason deal { status } }
            } }",
        )
        .await;
        assert_eq!(
            res,
            graphql_value!({ "releasePointer": {
                "kind": "COMMITTED",
                "update": {
                    "status": "SOLD",
                    "reason": null,
                    "deal": { "status": "submitted" },
                },
            } }),
        );

        let res =
            execute(&ctx, r#"{ deal(id: "1") { status knownStatus } }"#).await;
        assert_eq!(
            res,
            graphql_value!({ "deal": {
                "status": "sold",
                "knownStatus": "SOLD",
            } }),
        );
    }

    #[tokio::test]
    async fn requires_rejection_reason() {
        let ctx = context();
        _ = execute(&ctx, REFRESH).await;

        let res = execute(
            &ctx,
            r#"mutation {
                transitionDeal(dealId: "1", status: BUYER_REJECTED) { kind }
            }"#,
        )
        .await;
        assert_eq!(
            res,
            graphql_value!({ "transitionDeal": { "kind": "PENDING_REJECTION" } }),
        );

        let schema = Schema::new(Query, Mutation, Subscription);
        let (_, errs) = juniper::execute(
            r#"mutation { submitRejection(reason: " ") { status } }"#,
            None,
            &schema,
            &Variables::new(),
            &ctx,
        )
        .await
        .unwrap();
        assert_eq!(errs.len(), 1);
        assert_eq!(ctx.error_status_code(), http::StatusCode::BAD_REQUEST);

        let res = execute(
            &ctx,
            r#"mutation { submitRejection(reason: "price too low") {
                status reason
            } }"#,
        )
        .await;
        assert_eq!(
            res,
            graphql_value!({ "submitRejection": {
                "status": "BUYER_REJECTED",
                "reason": "price too low",
            } }),
        );
    }

    #[tokio::test]
    async fn lists_statuses_in_order() {
        let ctx = context();

        let res = execute(&ctx, "{ statuses { key requiresReason } }").await;

        let statuses = res
            .as_object_value()
            .and_then(|o| o.get_field_value("statuses"))
            .and_then(Value::as_list_value)
            .unwrap();
        assert_eq!(statuses.len(), 8);
        assert_eq!(
            statuses[3],
            graphql_value!({ "key": "buyer_rejected", "requiresReason": true }),
        );
    }
}
