//! [`SyncDeals`] [`Task`].

use std::{convert::Infallible, error::Error, time::Duration};

use common::operations::{By, Perform, Start};
use smart_default::SmartDefault;
use tokio::time::{interval, MissedTickBehavior};
use tracerr::Traced;
use tracing as log;

#[cfg(doc)]
use crate::domain::Deal;
use crate::{
    command::{fetch_deals, FetchDeals},
    domain::board::Revision,
    Command, Service,
};

use super::Task;

/// Configuration for [`SyncDeals`] [`Task`].
#[derive(Clone, Copy, Debug, SmartDefault)]
pub struct Config {
    /// Interval between [`Deal`]s refreshes.
    #[default(Duration::from_secs(30))]
    pub interval: Duration,
}

/// [`Task`] for periodic refreshing of the authoritative [`Deal`] list.
#[derive(Clone, Copy, Debug)]
pub struct SyncDeals<S> {
    /// [`Config`] of this [`Task`].
    config: Config,

    /// [`Service`] instance.
    service: S,
}

impl<B> Task<Start<By<SyncDeals<Self>, Config>>> for Service<B>
where
    SyncDeals<Service<B>>: Task<Perform<()>, Ok = (), Err: Error> + 'static,
    Self: Clone,
{
    type Ok = ();
    type Err = Infallible;

    async fn execute(
        &self,
        Start(by): Start<By<SyncDeals<Self>, Config>>,
    ) -> Result<Self::Ok, Self::Err> {
        let config = by.into_inner();
        let task = SyncDeals {
            config,
            service: self.clone(),
        };

        let mut interval = interval(task.config.interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            let _ = interval.tick().await;
            _ = task.execute(Perform(())).await.map_err(|e| {
                log::error!("`task::SyncDeals` failed: {e}");
            });
        }
    }
}

impl<B> Task<Perform<()>> for SyncDeals<Service<B>>
where
    Service<B>: Command<
        FetchDeals,
        Ok = Revision,
        Err = Traced<fetch_deals::ExecutionError>,
    >,
{
    type Ok = ();
    type Err = ExecutionError;

    async fn execute(&self, _: Perform<()>) -> Result<Self::Ok, Self::Err> {
        let revision = self
            .service
            .execute(FetchDeals)
            .await
            .map_err(tracerr::wrap!())?;
        log::debug!("`Deal`s synced, revision: {revision}");
        Ok(())
    }
}

/// Error of [`SyncDeals`] execution.
pub type ExecutionError = Traced<fetch_deals::ExecutionError>;
