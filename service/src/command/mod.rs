//! [`Command`] definition.

pub mod cancel_drag;
pub mod cancel_rejection;
pub mod dismiss_rejection;
pub mod edit_deal_status;
pub mod fetch_deals;
pub mod move_pointer;
pub mod press_card;
pub mod refresh_deals;
pub mod release_pointer;
pub mod set_autocomplete_interacting;
pub mod submit_rejection;
pub mod transition_deal;
pub mod view_deal;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{
    cancel_drag::CancelDrag, cancel_rejection::CancelRejection,
    dismiss_rejection::DismissRejection, edit_deal_status::EditDealStatus,
    fetch_deals::FetchDeals, move_pointer::MovePointer,
    press_card::PressCard, refresh_deals::RefreshDeals,
    release_pointer::ReleasePointer,
    set_autocomplete_interacting::SetAutocompleteInteracting,
    submit_rejection::SubmitRejection, transition_deal::TransitionDeal,
    view_deal::ViewDeal,
};

/// Creates a new [`Service`] over an in-memory backend, with its board
/// refreshed by the provided `deals`.
///
/// [`Service`]: crate::Service
#[cfg(test)]
pub(crate) async fn test_service(
    deals: Vec<crate::domain::Deal>,
) -> crate::Service<crate::infra::backend::memory::Memory> {
    use crate::{infra::backend::memory::Memory, Config, Service};

    let (svc, _) = Service::new(
        Config {
            sync_deals: None,
            ..Config::default()
        },
        Memory::new(deals.clone()),
    );
    _ = svc.execute(RefreshDeals { deals }).await;
    svc
}
