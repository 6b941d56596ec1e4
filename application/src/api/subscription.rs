//! GraphQL [`Subscription`]s definitions.

use futures::stream::{self, BoxStream, StreamExt as _};
use juniper::graphql_subscription;
use tokio::sync::broadcast::error::RecvError;
use tracing as log;

use crate::{api, Context};

/// Root of all GraphQL subscription.
#[derive(Clone, Copy, Debug)]
pub struct Subscription;

#[graphql_subscription(context = Context)]
impl Subscription {
    /// Streams the `BoardEvent`s emitted since the subscription started.
    ///
    /// `BoardEvent`s missed by a lagging subscriber are skipped.
    pub async fn board_events(
        &self,
        ctx: &Context,
    ) -> BoxStream<'static, api::Event> {
        let events = ctx.service().subscribe();
        stream::unfold(events, |mut events| async move {
            loop {
                match events.recv().await {
                    Ok(ev) => return Some((api::Event::from(ev), events)),
                    Err(RecvError::Lagged(missed)) => {
                        log::warn!("subscriber lagged, {missed} events missed");
                    }
                    Err(RecvError::Closed) => return None,
                }
            }
        })
        .boxed()
    }
}
