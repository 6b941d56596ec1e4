//! Domain definitions.

pub mod board;
pub mod deal;
pub mod status;

pub use self::{board::Board, deal::Deal, status::Status};
