//! [`Status`]-related definitions.

use derive_more::{Display, From, Into};
use juniper::{GraphQLEnum, GraphQLObject, GraphQLScalar};
use service::domain::{self, status};

/// Stage of a `Deal` in the review and sales pipeline.
#[derive(Clone, Copy, Debug, Eq, GraphQLEnum, PartialEq)]
#[graphql(name = "DealStatus")]
pub enum Status {
    /// Submitted by a JV partner and waiting for a review.
    Submitted,

    /// Sent to a buyer and under their review.
    UnderReviewWithBuyer,

    /// Approved by the buyer.
    BuyerApproved,

    /// Rejected by the buyer, always with a reason.
    BuyerRejected,

    /// Listed on the MLS, listing is pending.
    MlsPending,

    /// Listed on the MLS and active.
    MlsActive,

    /// Sold.
    Sold,

    /// Canceled by the submitter or an administrator.
    Canceled,
}

impl From<domain::Status> for Status {
    fn from(status: domain::Status) -> Self {
        use domain::Status as S;
        match status {
            S::Submitted => Self::Submitted,
            S::UnderReviewWithBuyer => Self::UnderReviewWithBuyer,
            S::BuyerApproved => Self::BuyerApproved,
            S::BuyerRejected => Self::BuyerRejected,
            S::MlsPending => Self::MlsPending,
            S::MlsActive => Self::MlsActive,
            S::Sold => Self::Sold,
            S::Canceled => Self::Canceled,
        }
    }
}

impl From<Status> for domain::Status {
    fn from(status: Status) -> Self {
        use Status as S;
        match status {
            S::Submitted => Self::Submitted,
            S::UnderReviewWithBuyer => Self::UnderReviewWithBuyer,
            S::BuyerApproved => Self::BuyerApproved,
            S::BuyerRejected => Self::BuyerRejected,
            S::MlsPending => Self::MlsPending,
            S::MlsActive => Self::MlsActive,
            S::Sold => Self::Sold,
            S::Canceled => Self::Canceled,
        }
    }
}

/// Raw status key carried by a `Deal`, which may be unknown to the
/// `DealStatus` taxonomy.
#[derive(Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(name = "DealStatusKey", transparent)]
pub struct Key(String);

impl From<status::Key> for Key {
    fn from(key: status::Key) -> Self {
        Self(AsRef::<str>::as_ref(&key).to_owned())
    }
}

/// Entry of the `DealStatus` taxonomy along with its presentation.
#[derive(Clone, Debug, GraphQLObject)]
#[graphql(name = "DealStatusInfo")]
pub struct Info {
    /// `DealStatus` this entry describes.
    pub status: Status,

    /// Bit-exact key of this `DealStatus`.
    pub key: Key,

    /// Human-readable title of the column.
    pub title: String,

    /// Label rendered on badges.
    pub label: String,

    /// Presentation tokens.
    pub style: Style,

    /// Indicator whether a transition into this `DealStatus` requires a
    /// reason.
    pub requires_reason: bool,
}

impl From<domain::Status> for Info {
    fn from(status: domain::Status) -> Self {
        Self {
            status: status.into(),
            key: status::Key::from(status).into(),
            title: status.title().to_owned(),
            label: status.label(),
            style: status.style().into(),
            requires_reason: status.requires_reason(),
        }
    }
}

/// Opaque presentation tokens of a `DealStatus`.
#[derive(Clone, Debug, GraphQLObject)]
#[graphql(name = "DealStatusStyle")]
pub struct Style {
    /// Token of the column background.
    pub lane: String,

    /// Token of the column header text.
    pub header: String,

    /// Token of the badge rendered on cards.
    pub badge: String,
}

impl From<common::taxonomy::Style> for Style {
    fn from(style: common::taxonomy::Style) -> Self {
        let common::taxonomy::Style {
            lane,
            header,
            badge,
        } = style;
        Self {
            lane: lane.to_owned(),
            header: header.to_owned(),
            badge: badge.to_owned(),
        }
    }
}
