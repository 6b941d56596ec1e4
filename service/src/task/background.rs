//! Background environment for running [`Task`]s.

use std::{
    error::Error,
    future::{Future, IntoFuture},
    iter,
};

use futures::{
    future::{self, LocalBoxFuture},
    FutureExt as _, TryFutureExt as _,
};
use tokio::task;
use tracing as log;

#[cfg(doc)]
use crate::Task;

/// Boxed error of a [`Task`].
type BoxError = Box<dyn Error + 'static>;

/// Background environment for running [`Task`]s.
///
/// [`Task`]s are spawned onto a single-threaded [`task::LocalSet`], so they
/// don't need to be [`Send`].
#[derive(Debug, Default)]
pub struct Background {
    /// Local set of tasks.
    set: task::LocalSet,

    /// Handles of spawned tasks.
    handles: Vec<task::JoinHandle<Result<(), BoxError>>>,
}

impl Background {
    /// Spawns a new [`Task`] with the provided `name` inside this
    /// [`Background`] environment.
    pub fn spawn<F, E>(&mut self, name: &'static str, future: F)
    where
        F: Future<Output = Result<(), E>> + 'static,
        E: Error + 'static,
    {
        log::debug!("spawning `task::{name}`");
        self.handles.push(self.set.spawn_local(future.map(move |res| {
            res.map_err(|e| {
                log::error!("`task::{name}` stopped: {e}");
                BoxError::from(Box::new(e))
            })
        })));
    }

    /// Returns the number of [`Task`]s spawned so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Indicates whether no [`Task`] has been spawned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

impl IntoFuture for Background {
    type Output = Result<(), BoxError>;
    type IntoFuture = LocalBoxFuture<'static, Self::Output>;

    fn into_future(self) -> Self::IntoFuture {
        let Self { set, handles } = self;
        future::try_join_all(iter::once(set.map(Ok).boxed_local()).chain(
            handles.into_iter().map(|h| {
                h.map(|r| r.unwrap_or_else(|e| Err(BoxError::from(Box::new(e)))))
                    .boxed_local()
            }),
        ))
        .map_ok(drop)
        .boxed_local()
    }
}
