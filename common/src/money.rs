//! [`Money`]-related definitions.

use std::{fmt, str::FromStr};

use rust_decimal::{prelude::ToPrimitive as _, Decimal};

use crate::define_kind;

/// Amount of money in some [`Currency`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Money {
    /// Amount of this [`Money`].
    pub amount: Decimal,

    /// [`Currency`] of this amount.
    pub currency: Currency,
}

impl Money {
    /// Creates a new [`Money`] amount in [`Currency::Usd`].
    #[must_use]
    pub const fn usd(amount: Decimal) -> Self {
        Self {
            amount,
            currency: Currency::Usd,
        }
    }

    /// Formats this [`Money`] for humans: thousands are grouped, the amount
    /// is rounded to cents and insignificant zeros are dropped.
    ///
    /// ```rust
    /// # use common::Money;
    /// # use rust_decimal::Decimal;
    /// assert_eq!(
    ///     Money::usd(Decimal::new(123_456_750, 2)).to_grouped_string(),
    ///     "$1,234,567.5",
    /// );
    /// ```
    #[must_use]
    pub fn to_grouped_string(&self) -> String {
        let amount = self.amount.round_dp(2).normalize();
        let sign = if amount.is_sign_negative() { "-" } else { "" };
        let digits = amount.abs().to_string();
        let (int, frac) = digits
            .split_once('.')
            .map_or((digits.as_str(), None), |(i, f)| (i, Some(f)));

        let mut grouped = String::with_capacity(int.len() + int.len() / 3);
        for (i, c) in int.chars().enumerate() {
            if i > 0 && (int.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }
        if let Some(frac) = frac {
            grouped.push('.');
            grouped.push_str(frac);
        }

        match self.currency.symbol() {
            Some(symbol) => format!("{sign}{symbol}{grouped}"),
            None => format!("{sign}{grouped} {}", self.currency.code()),
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { amount, currency } = self;
        let code = currency.code();
        match amount.normalize().to_i128() {
            Some(int) if amount.is_integer() => write!(f, "{int}{code}"),
            _ => write!(f, "{amount}{code}"),
        }
    }
}

impl FromStr for Money {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() < 4 || !s.is_char_boundary(s.len() - 3) {
            return Err("too short");
        }

        let (amount, currency) = s.split_at(s.len() - 3);
        let amount = Decimal::from_str(amount).map_err(|_| "invalid amount")?;
        let currency = Currency::from_str(&currency.to_ascii_lowercase())
            .map_err(|_| "invalid currency")?;

        Ok(Self { amount, currency })
    }
}

define_kind! {
    #[doc = "Currency of a [`Money`] amount."]
    enum Currency {
        #[doc = "US Dollar."]
        Usd = 1,

        #[doc = "Canadian Dollar."]
        Cad = 2,

        #[doc = "Euro."]
        Eur = 3,
    }
}

impl Currency {
    /// Returns the ISO 4217 code of this [`Currency`].
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Cad => "CAD",
            Self::Eur => "EUR",
        }
    }

    /// Returns the symbol this [`Currency`] is prefixed with, if it has an
    /// unambiguous one.
    #[must_use]
    pub const fn symbol(self) -> Option<&'static str> {
        match self {
            Self::Usd => Some("$"),
            Self::Eur => Some("€"),
            Self::Cad => None,
        }
    }
}

#[cfg(feature = "juniper")]
mod juniper {
    //! Module providing integration with [`juniper`] crate.

    use std::str::FromStr as _;

    use juniper::{graphql_scalar, InputValue, ScalarValue, Value};

    /// Money in `{major}.{minor}{currency}` format, where:
    /// - `major` is an integer;
    /// - `minor` is an optional integer;
    /// - `currency` is a three-letter currency code.
    #[graphql_scalar(with = Self, parse_token(String))]
    type Money = super::Money;

    impl Money {
        fn to_output<S: ScalarValue>(m: &Money) -> Value<S> {
            Value::scalar(m.to_string())
        }

        fn from_input<S: ScalarValue>(
            input: &InputValue<S>,
        ) -> Result<Self, String> {
            input
                .as_string_value()
                .ok_or_else(|| {
                    format!(
                        "Cannot parse `Money` input scalar from \
                         non-string value: {input}",
                    )
                })
                .and_then(|s| {
                    Self::from_str(s).map_err(|e| {
                        format!("Cannot parse `Money` input scalar: {e}")
                    })
                })
        }
    }
}
