//! [`Command`] for toggling the address autocomplete interaction flag.

use std::convert::Infallible;

use derive_more::From;

use crate::Service;

use super::Command;

/// [`Command`] for telling the board whether an address autocomplete is
/// being interacted with, so dismissing modals by an outside interaction
/// must be suppressed.
#[derive(Clone, Copy, Debug, From)]
pub struct SetAutocompleteInteracting(pub bool);

impl<B> Command<SetAutocompleteInteracting> for Service<B> {
    type Ok = ();
    type Err = Infallible;

    async fn execute(
        &self,
        SetAutocompleteInteracting(value): SetAutocompleteInteracting,
    ) -> Result<Self::Ok, Self::Err> {
        self.board()
            .lock()
            .await
            .set_autocomplete_interacting(value);
        Ok(())
    }
}
