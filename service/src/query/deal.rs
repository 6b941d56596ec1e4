//! [`Query`] collection related to a single [`Deal`].

use common::operations::By;

#[cfg(doc)]
use crate::Query;
use crate::domain::{deal, Deal};

use super::BoardQuery;

/// Queries a [`Deal`] in the working list by its [`deal::Id`].
pub type ById = BoardQuery<By<Option<Deal>, deal::Id>>;

#[cfg(test)]
mod spec {
    use crate::{
        command::test_service,
        domain::{board::test_deal as deal, Status},
        query, Query as _,
    };

    #[tokio::test]
    async fn finds_deal_in_working_list() {
        let svc = test_service(vec![deal(1, "submitted"), deal(2, "sold")]).await;

        let found = svc.execute(query::deal::ById::by(2.into())).await.unwrap();
        let missing = svc.execute(query::deal::ById::by(3.into())).await.unwrap();

        assert_eq!(found.and_then(|d| d.known_status()), Some(Status::Sold));
        assert_eq!(missing, None);
    }

    #[tokio::test]
    async fn groups_working_list() {
        let svc = test_service(vec![
            deal(1, "submitted"),
            deal(2, "sold"),
            deal(3, "submitted"),
        ])
        .await;

        let grouping = svc.execute(query::board::Grouping::by(())).await.unwrap();

        assert_eq!(grouping.bucket(Status::Submitted).len(), 2);
        assert_eq!(grouping.bucket(Status::Sold).len(), 1);
        assert_eq!(grouping.len(), 3);
    }
}
