//! [`Command`] for fetching [`Deal`]s from a [`Backend`].

use common::operations::{By, Select};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{board::Revision, Deal},
    infra::{backend, Backend},
    Service,
};

use super::{Command, RefreshDeals};

/// [`Command`] for refreshing the authoritative [`Deal`] list with the one
/// fetched from a [`Backend`].
#[derive(Clone, Copy, Debug)]
pub struct FetchDeals;

impl<B> Command<FetchDeals> for Service<B>
where
    B: Backend<
        Select<By<Vec<Deal>, ()>>,
        Ok = Vec<Deal>,
        Err = Traced<backend::Error>,
    >,
{
    type Ok = Revision;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, _: FetchDeals) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let deals = self
            .backend()
            .execute(Select(By::new(())))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let Ok(revision) = self.execute(RefreshDeals { deals }).await;
        Ok(revision)
    }
}

/// Error of [`FetchDeals`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Backend`] error.
    #[display("`Backend` operation failed: {_0}")]
    Backend(backend::Error),
}

#[cfg(test)]
mod spec {
    use crate::{
        command::test_service,
        domain::{board::test_deal as deal, Status},
        query, Command as _,
    };

    use super::FetchDeals;

    #[tokio::test]
    async fn replaces_working_list_with_fetched_one() {
        let svc = test_service(vec![deal(1, "sold")]).await;
        _ = svc
            .execute(crate::command::RefreshDeals { deals: vec![] })
            .await;

        let before = svc.execute(query::board::View::by(())).await.unwrap();
        _ = svc.execute(FetchDeals).await.unwrap();
        let after = svc.execute(query::board::View::by(())).await.unwrap();

        assert_ne!(before.revision, after.revision);
        assert_eq!(after.columns[Status::Sold.position()].count(), 1);
    }

    #[tokio::test]
    async fn keeps_board_on_backend_failure() {
        let svc = test_service(vec![deal(1, "sold")]).await;
        svc.backend().fail_with("unavailable");

        let err = svc.execute(FetchDeals).await.unwrap_err();

        assert!(err.to_string().contains("unavailable"), "{err}");
        let working = svc.execute(query::board::Working::by(())).await.unwrap();
        assert_eq!(working, [deal(1, "sold")]);
    }
}
