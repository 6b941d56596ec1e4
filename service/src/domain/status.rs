//! [`Status`] taxonomy definitions.

use common::{define_taxonomy, label};
use derive_more::{AsRef, Display};
use serde::{Deserialize, Serialize};

#[cfg(doc)]
use crate::domain::Deal;

define_taxonomy! {
    #[doc = "Stage of a [`Deal`] in the review and sales pipeline."]
    enum Status {
        #[doc = "Submitted by a JV partner and waiting for a review."]
        #[key = "submitted"]
        #[title = "Submitted"]
        #[style(
            lane = "bg-slate-50",
            header = "text-slate-700",
            badge = "bg-slate-100 text-slate-800",
        )]
        Submitted,

        #[doc = "Sent to a buyer and under their review."]
        #[key = "under_review_with_buyer"]
        #[title = "Under Review With Buyer"]
        #[style(
            lane = "bg-amber-50",
            header = "text-amber-700",
            badge = "bg-amber-100 text-amber-800",
        )]
        UnderReviewWithBuyer,

        #[doc = "Approved by the buyer."]
        #[key = "buyer_approved"]
        #[title = "Buyer Approved"]
        #[style(
            lane = "bg-emerald-50",
            header = "text-emerald-700",
            badge = "bg-emerald-100 text-emerald-800",
        )]
        BuyerApproved,

        #[doc = "Rejected by the buyer, always with a reason."]
        #[key = "buyer_rejected"]
        #[title = "Buyer Rejected"]
        #[style(
            lane = "bg-rose-50",
            header = "text-rose-700",
            badge = "bg-rose-100 text-rose-800",
        )]
        BuyerRejected,

        #[doc = "Listed on the MLS, listing is pending."]
        #[key = "mls_pending"]
        #[title = "MLS Pending"]
        #[style(
            lane = "bg-sky-50",
            header = "text-sky-700",
            badge = "bg-sky-100 text-sky-800",
        )]
        MlsPending,

        #[doc = "Listed on the MLS and active."]
        #[key = "mls_active"]
        #[title = "MLS Active"]
        #[style(
            lane = "bg-indigo-50",
            header = "text-indigo-700",
            badge = "bg-indigo-100 text-indigo-800",
        )]
        MlsActive,

        #[doc = "Sold."]
        #[key = "sold"]
        #[title = "Sold"]
        #[style(
            lane = "bg-green-50",
            header = "text-green-700",
            badge = "bg-green-100 text-green-800",
        )]
        Sold,

        #[doc = "Canceled by the submitter or an administrator."]
        #[key = "canceled"]
        #[title = "Canceled"]
        #[style(
            lane = "bg-gray-50",
            header = "text-gray-600",
            badge = "bg-gray-100 text-gray-700",
        )]
        Canceled,
    }
}

impl Status {
    /// [`Status`] a transition into which requires a rejection reason.
    pub const REJECTION: Self = Self::BuyerRejected;

    /// Indicates whether a transition into this [`Status`] must be
    /// accompanied by a reason.
    #[must_use]
    pub fn requires_reason(self) -> bool {
        self == Self::REJECTION
    }

    /// Returns the label of this [`Status`] as shown on badges.
    #[must_use]
    pub fn label(self) -> String {
        label::humanize(self.key())
    }
}

/// Raw status key carried by a [`Deal`].
///
/// Not necessarily a [`Status`] known to this taxonomy: the backend owns the
/// data and may send legacy or newer keys.
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize,
)]
#[as_ref(str, String)]
#[serde(transparent)]
pub struct Key(String);

impl Key {
    /// Creates a new [`Key`] if the given `key` is valid.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Option<Self> {
        let key = key.into();
        Self::check(&key).then_some(Self(key))
    }

    /// Returns the [`Status`] this [`Key`] denotes, if it's a known one.
    #[must_use]
    pub fn status(&self) -> Option<Status> {
        Status::from_key(&self.0)
    }

    /// Returns the human-readable label of this [`Key`].
    #[must_use]
    pub fn label(&self) -> String {
        label::humanize(&self.0)
    }

    /// Checks whether the given `key` is a valid [`Key`].
    fn check(key: impl AsRef<str>) -> bool {
        let key = key.as_ref();
        key.trim() == key && !key.is_empty()
    }
}

impl From<Status> for Key {
    fn from(status: Status) -> Self {
        Self(status.key().to_owned())
    }
}

impl PartialEq<Status> for Key {
    fn eq(&self, other: &Status) -> bool {
        self.0 == other.key()
    }
}

#[cfg(test)]
mod spec {
    use super::{Key, Status};

    #[test]
    fn keeps_taxonomy_order() {
        let keys = Status::ALL.iter().map(|s| s.key()).collect::<Vec<_>>();
        assert_eq!(
            keys,
            [
                "submitted",
                "under_review_with_buyer",
                "buyer_approved",
                "buyer_rejected",
                "mls_pending",
                "mls_active",
                "sold",
                "canceled",
            ],
        );
        for (i, status) in Status::ALL.iter().enumerate() {
            assert_eq!(status.position(), i);
        }
    }

    #[test]
    fn parses_keys_exactly() {
        for status in Status::ALL {
            assert_eq!(status.key().parse::<Status>().unwrap(), *status);
        }
        assert!("Submitted".parse::<Status>().is_err());
        assert!("buyer approved".parse::<Status>().is_err());
    }

    #[test]
    fn labels_keys() {
        assert_eq!(
            Status::UnderReviewWithBuyer.label(),
            "Under Review With Buyer",
        );
        assert_eq!(Key::new("legacy_on_hold").unwrap().label(), "Legacy On Hold");
    }

    #[test]
    fn only_rejection_requires_reason() {
        for status in Status::ALL {
            assert_eq!(
                status.requires_reason(),
                *status == Status::BuyerRejected,
            );
        }
    }

    #[test]
    fn recognizes_keys() {
        assert_eq!(
            Key::new("mls_active").unwrap().status(),
            Some(Status::MlsActive),
        );
        assert_eq!(Key::new("archived").unwrap().status(), None);
        assert!(Key::new("").is_none());
        assert!(Key::new(" sold").is_none());
        assert!(Key::new("x".repeat(65)).is_some());
        assert_eq!(Key::from(Status::Sold), Status::Sold);
    }
}
