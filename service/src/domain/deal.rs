//! [`Deal`] definitions.

use std::{fmt, str::FromStr};

#[cfg(doc)]
use common::DateTime;
use common::{define_kind, unit, DateTimeOf, Money};
use derive_more::{AsRef, Display, From, Into};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{status, Status};

/// Land deal submitted for a review.
///
/// The backend owns every [`Deal`]; this is a possibly stale copy of it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Deal {
    /// ID of this [`Deal`].
    pub id: Id,

    /// [`Address`] of the property.
    pub address: Address,

    /// [`ParcelId`] of the property, if known.
    pub parcel_id: Option<ParcelId>,

    /// [`LotSize`] of the property, if known.
    pub lot_size: Option<LotSize>,

    /// Land type of the property.
    pub land_type: Option<Label>,

    /// Utilities available on the property.
    pub utility_type: Option<Label>,

    /// Road access of the property.
    pub access_type: Option<Label>,

    /// Price agreed with the seller.
    pub agreed_price: Option<Money>,

    /// Raw [`status::Key`] of this [`Deal`].
    pub status: status::Key,

    /// [`DateTime`] when this [`Deal`] was created.
    pub created_at: CreationDateTime,
}

impl Deal {
    /// Returns the [`Status`] of this [`Deal`], if it's a known one.
    #[must_use]
    pub fn known_status(&self) -> Option<Status> {
        self.status.status()
    }

    /// Returns a copy of this [`Deal`] moved into the provided [`Status`].
    #[must_use]
    pub fn with_status(&self, status: Status) -> Self {
        Self {
            status: status.into(),
            ..self.clone()
        }
    }
}

/// ID of a [`Deal`].
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    From,
    derive_more::FromStr,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[serde(transparent)]
pub struct Id(i64);

/// Address of a [`Deal`] property.
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(forward)]
pub struct Address(String);

impl Address {
    /// Creates a new [`Address`] if the given `address` is valid.
    #[must_use]
    pub fn new(address: impl Into<String>) -> Option<Self> {
        let address = address.into();
        Self::check(&address).then_some(Self(address))
    }

    /// Checks whether the given `address` is a valid [`Address`].
    fn check(address: impl AsRef<str>) -> bool {
        let address = address.as_ref();
        address.trim() == address && !address.is_empty()
    }
}

impl FromStr for Address {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Address`")
    }
}

/// Assessor's parcel number of a [`Deal`] property.
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(forward)]
pub struct ParcelId(String);

impl ParcelId {
    /// Creates a new [`ParcelId`] if the given `id` is valid.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        Self::check(&id).then_some(Self(id))
    }

    /// Checks whether the given `id` is a valid [`ParcelId`].
    fn check(id: impl AsRef<str>) -> bool {
        let id = id.as_ref();
        id.trim() == id && !id.is_empty() && id.len() <= 64
    }
}

/// Free-form classification of a [`Deal`] property (land, utility or access
/// type) as entered by the submitter.
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(forward)]
pub struct Label(String);

impl Label {
    /// Creates a new [`Label`] if the given `label` is valid.
    ///
    /// Surrounding whitespace is trimmed.
    #[must_use]
    pub fn new(label: impl AsRef<str>) -> Option<Self> {
        let label = label.as_ref().trim();
        (!label.is_empty() && label.len() <= 128)
            .then(|| Self(label.to_owned()))
    }
}

/// Lot size of a [`Deal`] property.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LotSize {
    /// Amount of [`LotUnit`]s.
    pub value: Decimal,

    /// [`LotUnit`] the `value` is measured in.
    pub unit: LotUnit,
}

impl fmt::Display for LotSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value.normalize(), self.unit.label())
    }
}

define_kind! {
    #[doc = "Unit a [`LotSize`] is measured in."]
    enum LotUnit {
        #[doc = "Acres."]
        Acres = 1,

        #[doc = "Square feet."]
        SquareFeet = 2,

        #[doc = "Hectares."]
        Hectares = 3,
    }
}

impl LotUnit {
    /// Parses a [`LotUnit`] leniently, accepting the abbreviations
    /// submitters commonly use.
    #[must_use]
    pub fn parse_lenient(unit: &str) -> Option<Self> {
        match unit.trim().to_ascii_lowercase().as_str() {
            "acre" | "acres" | "ac" => Some(Self::Acres),
            "sqft" | "sq ft" | "sq_ft" | "square_feet" | "square feet"
            | "ft2" => Some(Self::SquareFeet),
            "hectare" | "hectares" | "ha" => Some(Self::Hectares),
            _ => None,
        }
    }

    /// Returns the label this [`LotUnit`] is shown with.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Acres => "acres",
            Self::SquareFeet => "sq ft",
            Self::Hectares => "hectares",
        }
    }
}

/// [`DateTime`] when a [`Deal`] was created.
pub type CreationDateTime = DateTimeOf<(Deal, unit::Creation)>;
