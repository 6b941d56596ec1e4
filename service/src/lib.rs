//! Service contains the business logic of the deal board.
//!
//! List of available Cargo features:
#![doc = document_features::document_features!()]
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod command;
pub mod domain;
pub mod infra;
pub mod query;
pub mod read;
pub mod task;

use std::{error::Error, sync::Arc};

use common::operations::{By, Start};
use smart_default::SmartDefault;
use tokio::sync::{broadcast, mpsc, Mutex};
use tracing as log;

#[cfg(doc)]
use infra::Backend;

use self::domain::{
    board::{self, Event, StatusUpdate},
    Board,
};

pub use self::{command::Command, query::Query, task::Task};

/// [`Service`] configuration.
#[derive(Clone, Copy, Debug, SmartDefault)]
pub struct Config {
    /// [`Board`] configuration.
    pub board: board::Config,

    /// Number of [`Event`]s a lagging subscriber may miss before being
    /// notified about it.
    #[default(64)]
    pub events_capacity: usize,

    /// [`task::SyncDeals`] configuration, if it's enabled.
    #[default(Some(task::sync_deals::Config::default()))]
    pub sync_deals: Option<task::sync_deals::Config>,
}

/// Domain service.
#[derive(Clone, Debug)]
pub struct Service<B> {
    /// Configuration of this [`Service`].
    config: Config,

    /// [`Backend`] of this [`Service`].
    backend: B,

    /// [`Board`] shared by all the operations.
    board: Arc<Mutex<Board>>,

    /// Sender of [`Event`]s to subscribers.
    events: broadcast::Sender<Event>,

    /// Queue of [`StatusUpdate`]s to be pushed to the [`Backend`].
    updates: mpsc::UnboundedSender<StatusUpdate>,
}

impl<B> Service<B> {
    /// Creates a new [`Service`] with the provided parameters.
    pub fn new(config: Config, backend: B) -> (Self, task::Background)
    where
        Self: Task<
                Start<
                    By<
                        task::PushStatusUpdates<Self>,
                        task::push_status_updates::Queue,
                    >,
                >,
                Ok = (),
                Err: Error,
            > + Task<
                Start<By<task::SyncDeals<Self>, task::sync_deals::Config>>,
                Ok = (),
                Err: Error,
            > + Clone
            + 'static,
    {
        let (updates, queue) = mpsc::unbounded_channel();
        let (events, _) = broadcast::channel(config.events_capacity.max(1));
        let this = Self {
            config,
            backend,
            board: Arc::new(Mutex::new(Board::new(config.board, Vec::new()))),
            events,
            updates,
        };

        let mut bg = task::Background::default();
        let svc = this.clone();
        bg.spawn("PushStatusUpdates", async move {
            svc.execute(Start(By::<task::PushStatusUpdates<Self>, _>::new(
                queue,
            )))
            .await
        });
        if let Some(conf) = config.sync_deals {
            let svc = this.clone();
            bg.spawn("SyncDeals", async move {
                svc.execute(Start(By::<task::SyncDeals<Self>, _>::new(conf)))
                    .await
            });
        }

        (this, bg)
    }

    /// Returns [`Config`] of this [`Service`].
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns [`Backend`] of this [`Service`].
    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Subscribes to the [`Event`]s of this [`Service`].
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.events.subscribe()
    }

    /// Returns the [`Board`] of this [`Service`].
    pub(crate) fn board(&self) -> &Mutex<Board> {
        &self.board
    }

    /// Publishes the provided [`Event`] to the current subscribers.
    pub(crate) fn publish(&self, event: Event) {
        if self.events.send(event).is_err() {
            log::trace!("no subscribers for `Event`");
        }
    }

    /// Publishes the provided [`StatusUpdate`] and enqueues it for pushing
    /// to the [`Backend`], without waiting for the push to happen.
    pub(crate) fn dispatch(&self, update: StatusUpdate) {
        self.publish(Event::StatusUpdate(update.clone()));
        if let Err(e) = self.updates.send(update) {
            log::warn!(
                "`StatusUpdate` of `Deal(id: {})` is not pushed: queue closed",
                e.0.deal.id,
            );
        }
    }
}
