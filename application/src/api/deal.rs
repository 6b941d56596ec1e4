//! [`Deal`]-related definitions.

use common::{DateTime, Money};
use derive_more::{AsRef, Display, From, Into};
use juniper::{graphql_object, GraphQLInputObject, GraphQLScalar};
use rust_decimal::{prelude::FromPrimitive as _, Decimal};
use service::{domain, infra::backend::payload};

use crate::{
    api::{self, scalar, status},
    Context,
};

/// A deal on the board.
#[derive(Clone, Debug, From)]
pub struct Deal(domain::Deal);

/// A deal on the board.
#[graphql_object(context = Context)]
impl Deal {
    /// Unique identifier of this `Deal`.
    pub fn id(&self) -> Id {
        self.0.id.into()
    }

    /// Address of the property.
    pub fn address(&self) -> &str {
        self.0.address.as_ref()
    }

    /// Assessor's parcel number of the property.
    pub fn parcel_id(&self) -> Option<&str> {
        self.0.parcel_id.as_ref().map(AsRef::as_ref)
    }

    /// Lot size of the property along with its unit, like `5.2 acres`.
    pub fn lot_size(&self) -> Option<String> {
        self.0.lot_size.map(|s| s.to_string())
    }

    /// Land type of the property.
    pub fn land_type(&self) -> Option<&str> {
        self.0.land_type.as_ref().map(AsRef::as_ref)
    }

    /// Utilities available on the property.
    pub fn utility_type(&self) -> Option<&str> {
        self.0.utility_type.as_ref().map(AsRef::as_ref)
    }

    /// Road access of the property.
    pub fn access_type(&self) -> Option<&str> {
        self.0.access_type.as_ref().map(AsRef::as_ref)
    }

    /// Price agreed with the seller.
    pub fn agreed_price(&self) -> Option<Money> {
        self.0.agreed_price
    }

    /// Raw status key of this `Deal`.
    pub fn status(&self) -> status::Key {
        self.0.status.clone().into()
    }

    /// `DealStatus` of this `Deal`, if its key is a known one.
    pub fn known_status(&self) -> Option<api::Status> {
        self.0.known_status().map(Into::into)
    }

    /// Human-readable label of this `Deal`'s status.
    pub fn status_label(&self) -> String {
        self.0.status.label()
    }

    /// `DateTime` when this `Deal` was created.
    pub fn created_at(&self) -> DateTime {
        self.0.created_at.coerce()
    }
}

/// Unique identifier of a `Deal`.
#[derive(AsRef, Clone, Copy, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(name = "DealId", with = scalar::Via::<domain::deal::Id>)]
pub struct Id(domain::deal::Id);

/// Authoritative `Deal` supplied by a client.
#[derive(Clone, Debug, GraphQLInputObject)]
#[graphql(name = "DealInput")]
pub struct Input {
    /// Unique identifier of the `Deal`.
    pub id: Id,

    /// Address of the property.
    pub address: String,

    /// Assessor's parcel number of the property.
    pub parcel_id: Option<String>,

    /// Lot size of the property.
    pub lot_size: Option<f64>,

    /// Unit the `lotSize` is measured in (`acres` by default).
    pub lot_size_unit: Option<String>,

    /// Land type of the property.
    pub land_type: Option<String>,

    /// Utilities available on the property.
    pub utility_type: Option<String>,

    /// Road access of the property.
    pub access_type: Option<String>,

    /// Price agreed with the seller.
    pub agreed_price: Option<Money>,

    /// Raw status key.
    pub status: String,

    /// `DateTime` when the `Deal` was created.
    pub created_at: DateTime,
}

impl From<Input> for payload::Deal {
    fn from(input: Input) -> Self {
        let Input {
            id,
            address,
            parcel_id,
            lot_size,
            lot_size_unit,
            land_type,
            utility_type,
            access_type,
            agreed_price,
            status,
            created_at,
        } = input;

        Self {
            id: payload::RawId::Number(domain::deal::Id::from(id).into()),
            address,
            parcel_id,
            lot_size: lot_size.and_then(Decimal::from_f64),
            lot_size_unit,
            land_type,
            utility_type,
            access_type,
            agreed_price: agreed_price.map(|m| m.amount),
            price: None,
            status,
            created_at: created_at.to_rfc3339(),
        }
    }
}

impl TryFrom<Input> for domain::Deal {
    type Error = payload::Error;

    fn try_from(input: Input) -> Result<Self, Self::Error> {
        payload::Deal::from(input).try_into()
    }
}

#[cfg(test)]
mod spec {
    use common::DateTime;
    use service::domain;

    use super::{Deal, Input};

    fn input() -> Input {
        Input {
            id: domain::deal::Id::from(7).into(),
            address: " 12 Oak Lane ".into(),
            parcel_id: Some("APN-1".into()),
            lot_size: Some(5.2),
            lot_size_unit: None,
            land_type: Some("residential".into()),
            utility_type: None,
            access_type: None,
            agreed_price: None,
            status: "mls_active".into(),
            created_at: DateTime::from_rfc3339("2023-11-14T22:13:20Z").unwrap(),
        }
    }

    #[test]
    fn normalizes_input() {
        let deal = Deal::from(domain::Deal::try_from(input()).unwrap());

        assert_eq!(deal.address(), "12 Oak Lane");
        assert_eq!(deal.lot_size().as_deref(), Some("5.2 acres"));
        assert_eq!(deal.known_status(), Some(crate::api::Status::MlsActive));
        assert_eq!(deal.status_label(), "Mls Active");
        assert_eq!(deal.created_at().to_rfc3339(), "2023-11-14T22:13:20Z");
    }

    #[test]
    fn refuses_blank_address() {
        let mut input = input();
        input.address = "  ".into();

        assert!(domain::Deal::try_from(input).is_err());
    }
}
