//! In-memory [`Backend`] implementation for tests.

use std::sync::{Arc, Mutex};

use common::operations::{By, Select, Update};
use tracerr::Traced;

use crate::{
    domain::{board::StatusUpdate, Deal},
    infra::backend::{self, Backend},
};

/// In-memory [`Backend`] recording every [`StatusUpdate`] it receives.
#[derive(Clone, Debug, Default)]
pub(crate) struct Memory(Arc<Mutex<State>>);

/// State of a [`Memory`] backend.
#[derive(Debug, Default)]
struct State {
    deals: Vec<Deal>,
    updates: Vec<StatusUpdate>,
    failure: Option<String>,
}

impl Memory {
    /// Creates a new [`Memory`] backend holding the provided `deals`.
    pub(crate) fn new(deals: Vec<Deal>) -> Self {
        Self(Arc::new(Mutex::new(State {
            deals,
            ..State::default()
        })))
    }

    /// Makes every subsequent operation fail with the provided `message`.
    pub(crate) fn fail_with(&self, message: &str) {
        self.0.lock().unwrap().failure = Some(message.into());
    }

    /// Returns all the [`StatusUpdate`]s received so far.
    pub(crate) fn updates(&self) -> Vec<StatusUpdate> {
        self.0.lock().unwrap().updates.clone()
    }

    /// Returns the failure to respond with, if any.
    fn failure(state: &State) -> Result<(), Traced<backend::Error>> {
        match &state.failure {
            Some(body) => Err(tracerr::new!(backend::Error::UnexpectedStatus {
                status: 503,
                body: body.clone(),
            })),
            None => Ok(()),
        }
    }
}

impl Backend<Select<By<Vec<Deal>, ()>>> for Memory {
    type Ok = Vec<Deal>;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<Deal>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        let state = self.0.lock().unwrap();
        Self::failure(&state)?;
        Ok(state.deals.clone())
    }
}

impl Backend<Update<StatusUpdate>> for Memory {
    type Ok = ();
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Update(update): Update<StatusUpdate>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut state = self.0.lock().unwrap();
        Self::failure(&state)?;
        if let Some(deal) =
            state.deals.iter_mut().find(|d| d.id == update.deal.id)
        {
            deal.status = update.status.into();
        }
        state.updates.push(update);
        Ok(())
    }
}
