//! Background [`Task`]s definitions.

mod background;
pub mod push_status_updates;
pub mod sync_deals;

pub use common::Handler as Task;

pub use self::{
    background::Background, push_status_updates::PushStatusUpdates,
    sync_deals::SyncDeals,
};
