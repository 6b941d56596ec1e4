//! Wire representation of [`domain::Deal`]s exchanged with a [`Backend`].
//!
//! The deals backend carries several generations of field names, so every
//! legacy spelling is accepted here once, and only the canonical
//! [`domain::Deal`] leaves this module.

use common::{DateTimeOf, Money};
use derive_more::{Display, Error as StdError};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing as log;

use crate::domain::{
    self,
    deal::{self, Address, Label, LotSize, LotUnit, ParcelId},
    status,
};
#[cfg(doc)]
use crate::infra::Backend;

/// [`domain::Deal`] as sent by a [`Backend`].
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Deal {
    /// ID of the [`Deal`], either a number or a numeric string.
    pub id: RawId,

    /// Address of the property.
    #[serde(default)]
    pub address: String,

    /// Assessor's parcel number of the property.
    #[serde(default, alias = "parcelId", alias = "apn")]
    pub parcel_id: Option<String>,

    /// Lot size of the property.
    #[serde(default, alias = "lotSize")]
    pub lot_size: Option<Decimal>,

    /// Unit the `lot_size` is measured in.
    #[serde(default, alias = "lotSizeUnit")]
    pub lot_size_unit: Option<String>,

    /// Land type of the property.
    #[serde(default, alias = "landType")]
    pub land_type: Option<String>,

    /// Utilities available on the property.
    #[serde(default, alias = "utilityType", alias = "utilities")]
    pub utility_type: Option<String>,

    /// Road access of the property.
    #[serde(default, alias = "accessType", alias = "access")]
    pub access_type: Option<String>,

    /// Price agreed with the seller.
    #[serde(default, alias = "agreedPrice")]
    pub agreed_price: Option<Decimal>,

    /// Legacy name of the `agreed_price`.
    #[serde(default, skip_serializing)]
    pub price: Option<Decimal>,

    /// Raw status key.
    pub status: String,

    /// [RFC 3339] creation time.
    ///
    /// [RFC 3339]: https://tools.ietf.org/html/rfc3339
    #[serde(alias = "createdAt")]
    pub created_at: String,
}

/// ID of a [`Deal`] as sent by a [`Backend`].
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RawId {
    /// Numeric ID.
    Number(i64),

    /// ID serialized as a string.
    Text(String),
}

/// List of [`Deal`]s as sent by a [`Backend`], either bare or wrapped into
/// an object.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum List {
    /// Bare JSON array.
    Bare(Vec<Deal>),

    /// `{"deals": [...]}` object.
    Wrapped {
        /// Wrapped [`Deal`]s.
        deals: Vec<Deal>,
    },
}

impl List {
    /// Normalizes this [`List`] into [`domain::Deal`]s.
    ///
    /// Invalid [`Deal`]s are skipped, so a single malformed record never
    /// blocks the rest of the board from refreshing.
    #[must_use]
    pub fn normalize(self) -> Vec<domain::Deal> {
        let (Self::Bare(deals) | Self::Wrapped { deals }) = self;
        deals
            .into_iter()
            .filter_map(|raw| {
                domain::Deal::try_from(raw)
                    .inspect_err(|e| log::warn!("skipping `Deal`: {e}"))
                    .ok()
            })
            .collect()
    }
}

/// Body of a status update request.
#[derive(Clone, Debug, Serialize)]
pub struct StatusPatch {
    /// New status key.
    pub status: &'static str,

    /// Reason of the transition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Error of normalizing a [`Deal`].
#[derive(Clone, Debug, Display, Eq, PartialEq, StdError)]
pub enum Error {
    /// ID is not a valid [`deal::Id`].
    #[display("Invalid `Deal` ID: `{_0}`")]
    InvalidId(#[error(not(source))] String),

    /// Address is blank.
    #[display("`Deal(id: {_0})` has invalid address")]
    InvalidAddress(#[error(not(source))] deal::Id),

    /// Status key is blank.
    #[display("`Deal(id: {_0})` has invalid status")]
    InvalidStatus(#[error(not(source))] deal::Id),

    /// Creation time is not a valid [RFC 3339] string.
    ///
    /// [RFC 3339]: https://tools.ietf.org/html/rfc3339
    #[display("`Deal(id: {_0})` has invalid creation time")]
    InvalidCreatedAt(#[error(not(source))] deal::Id),
}

impl TryFrom<RawId> for deal::Id {
    type Error = Error;

    fn try_from(raw: RawId) -> Result<Self, Self::Error> {
        match raw {
            RawId::Number(n) => Ok(n.into()),
            RawId::Text(s) => {
                s.trim().parse().map_err(|_| Error::InvalidId(s))
            }
        }
    }
}

impl TryFrom<Deal> for domain::Deal {
    type Error = Error;

    fn try_from(raw: Deal) -> Result<Self, Self::Error> {
        let id = deal::Id::try_from(raw.id)?;

        let address = Address::new(raw.address.trim())
            .ok_or(Error::InvalidAddress(id))?;
        let status = status::Key::new(raw.status.trim())
            .ok_or(Error::InvalidStatus(id))?;
        let created_at = DateTimeOf::from_rfc3339(raw.created_at.trim())
            .map_err(|_| Error::InvalidCreatedAt(id))?;

        let lot_size = raw.lot_size.and_then(|value| {
            let unit = match raw.lot_size_unit.as_deref() {
                Some(unit) => LotUnit::parse_lenient(unit)?,
                None => LotUnit::Acres,
            };
            Some(LotSize { value, unit })
        });

        Ok(Self {
            id,
            address,
            parcel_id: raw
                .parcel_id
                .and_then(|p| ParcelId::new(p.trim())),
            lot_size,
            land_type: raw.land_type.and_then(Label::new),
            utility_type: raw.utility_type.and_then(Label::new),
            access_type: raw.access_type.and_then(Label::new),
            agreed_price: raw.agreed_price.or(raw.price).map(Money::usd),
            status,
            created_at,
        })
    }
}

#[cfg(test)]
mod spec {
    use common::Money;
    use rust_decimal::Decimal;

    use crate::domain::{self, deal::LotUnit, Status};

    use super::{Deal, Error, List};

    fn parse(json: &str) -> Result<domain::Deal, Error> {
        serde_json::from_str::<Deal>(json).unwrap().try_into()
    }

    #[test]
    fn normalizes_snake_case_payload() {
        let deal = parse(
            r#"{
                "id": 17,
                "address": " 12 Prairie Rd, Austin, TX ",
                "parcel_id": "APN-0042",
                "lot_size": "5.2",
                "lot_size_unit": "acres",
                "land_type": "Raw land",
                "agreed_price": "125000.00",
                "status": "mls_pending",
                "created_at": "2024-03-07T23:15:00-05:00"
            }"#,
        )
        .unwrap();

        assert_eq!(deal.id, 17.into());
        assert_eq!(deal.address.to_string(), "12 Prairie Rd, Austin, TX");
        assert_eq!(deal.parcel_id.as_ref().unwrap().to_string(), "APN-0042");
        assert_eq!(deal.lot_size.as_ref().unwrap().to_string(), "5.2 acres");
        assert_eq!(deal.land_type.as_ref().unwrap().to_string(), "Raw land");
        assert_eq!(
            deal.agreed_price,
            Some(Money::usd(Decimal::new(125_000, 0))),
        );
        assert_eq!(deal.known_status(), Some(Status::MlsPending));
        assert_eq!(deal.created_at.to_date_string(), "03/08/2024");
    }

    #[test]
    fn normalizes_legacy_field_names() {
        let deal = parse(
            r#"{
                "id": "42",
                "address": "7 Mesa Way",
                "apn": "991-22",
                "lotSize": "43560",
                "lotSizeUnit": "sqft",
                "landType": "Residential",
                "utilities": "Well, septic",
                "access": "Paved road",
                "price": 99000,
                "status": "submitted",
                "createdAt": "2023-11-14T22:13:20Z",
                "ignored": true
            }"#,
        )
        .unwrap();

        assert_eq!(deal.id, 42.into());
        assert_eq!(deal.parcel_id.as_ref().unwrap().to_string(), "991-22");
        assert_eq!(deal.lot_size.unwrap().unit, LotUnit::SquareFeet);
        assert_eq!(deal.land_type.as_ref().unwrap().to_string(), "Residential");
        assert_eq!(deal.utility_type.unwrap().to_string(), "Well, septic");
        assert_eq!(deal.access_type.unwrap().to_string(), "Paved road");
        assert_eq!(
            deal.agreed_price,
            Some(Money::usd(Decimal::new(99_000, 0))),
        );
        assert_eq!(deal.created_at.to_date_string(), "11/14/2023");
    }

    #[test]
    fn prefers_agreed_price_over_legacy_price() {
        let deal = parse(
            r#"{
                "id": 1, "address": "A", "status": "sold",
                "agreedPrice": 10, "price": 20,
                "createdAt": "2023-11-14T22:13:20Z"
            }"#,
        )
        .unwrap();

        assert_eq!(deal.agreed_price, Some(Money::usd(Decimal::new(10, 0))));
    }

    #[test]
    fn keeps_unknown_status_and_drops_unknown_unit() {
        let deal = parse(
            r#"{
                "id": 1, "address": "A", "status": "archived",
                "lot_size": 3, "lot_size_unit": "furlongs",
                "created_at": "2023-11-14T22:13:20Z"
            }"#,
        )
        .unwrap();

        assert_eq!(deal.known_status(), None);
        assert_eq!(deal.status.to_string(), "archived");
        assert_eq!(deal.lot_size, None);
    }

    #[test]
    fn rejects_invalid_payloads() {
        assert_eq!(
            parse(
                r#"{"id": "x1", "address": "A", "status": "sold",
                    "created_at": "2023-11-14T22:13:20Z"}"#,
            ),
            Err(Error::InvalidId("x1".into())),
        );
        assert_eq!(
            parse(
                r#"{"id": 3, "address": "  ", "status": "sold",
                    "created_at": "2023-11-14T22:13:20Z"}"#,
            ),
            Err(Error::InvalidAddress(3.into())),
        );
        assert_eq!(
            parse(
                r#"{"id": 3, "address": "A", "status": "sold",
                    "created_at": "yesterday"}"#,
            ),
            Err(Error::InvalidCreatedAt(3.into())),
        );
    }

    #[test]
    fn accepts_bare_and_wrapped_lists() {
        let item = r#"{"id": 1, "address": "A", "status": "sold",
                       "created_at": "2023-11-14T22:13:20Z"}"#;

        let bare = serde_json::from_str::<List>(&format!("[{item}]"))
            .unwrap()
            .normalize();
        let wrapped =
            serde_json::from_str::<List>(&format!(r#"{{"deals": [{item}]}}"#))
                .unwrap()
                .normalize();

        assert_eq!(bare, wrapped);
        assert_eq!(bare.len(), 1);
    }

    #[test]
    fn keeps_odd_status_keys() {
        let odd = "x".repeat(65);

        let deal = parse(&format!(
            r#"{{"id": 2, "address": "B", "status": "{odd}",
                 "created_at": "2023-11-14T22:13:20Z"}}"#,
        ))
        .unwrap();

        assert_eq!(deal.status.to_string(), odd);
        assert_eq!(deal.known_status(), None);
    }

    #[test]
    fn skips_invalid_deals_of_list() {
        let list = serde_json::from_str::<List>(&format!(
            r#"[
                {{"id": 1, "address": "A", "status": "sold",
                  "created_at": "2023-11-14T22:13:20Z"}},
                {{"id": 2, "address": "{long}", "status": "{odd}",
                  "created_at": "2023-11-14T22:13:20Z"}},
                {{"id": 3, "address": " ", "status": "sold",
                  "created_at": "2023-11-14T22:13:20Z"}},
                {{"id": 4, "address": "D", "status": "sold",
                  "created_at": "soon"}}
            ]"#,
            long = "A".repeat(600),
            odd = "x".repeat(65),
        ))
        .unwrap();

        let deals = list.normalize();

        assert_eq!(
            deals.iter().map(|d| d.id).collect::<Vec<_>>(),
            [domain::deal::Id::from(1), domain::deal::Id::from(2)],
        );
    }
}
