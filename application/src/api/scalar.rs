//! GraphQL scalar helpers.

use std::{fmt, marker::PhantomData, str::FromStr};

use juniper::{
    GraphQLType, InputValue, ParseScalarResult, ParseScalarValue, ScalarToken,
    ScalarValue, Value,
};

/// Helper for `#[graphql(with = ..)]` attribute, representing a newtype over
/// a domain `As` type as a GraphQL string scalar.
///
/// Output is the [`Display`] of `As`, while input is parsed with its
/// [`FromStr`], so domain IDs wider than GraphQL `Int` survive the trip.
///
/// [`Display`]: fmt::Display
#[derive(Debug)]
pub struct Via<As>(PhantomData<As>);

impl<As> Via<As> {
    /// Converts the provided `value` into a string scalar [`Value`].
    pub fn to_output<T, S>(value: &T) -> Value<S>
    where
        As: fmt::Display,
        T: AsRef<As>,
        S: ScalarValue,
    {
        Value::from(value.as_ref().to_string())
    }

    /// Parses the target type out of the provided string [`InputValue`].
    ///
    /// # Errors
    ///
    /// If the `input` is not a string, or cannot be parsed as `As`, or `As`
    /// cannot be converted into the target type.
    #[expect(clippy::missing_panics_doc, reason = "infallible")]
    pub fn from_input<T, S>(input: &InputValue<S>) -> Result<T, String>
    where
        As: FromStr,
        As::Err: fmt::Display,
        T: TryFrom<As> + GraphQLType<S, TypeInfo = ()>,
        T::Error: fmt::Display,
        S: ScalarValue,
    {
        let name = T::name(&()).expect("always has a name");
        let s = input.as_string_value().ok_or_else(|| {
            format!(
                "Cannot parse input scalar `{name}`: expected string input \
                 value, found: {input}",
            )
        })?;
        s.parse::<As>()
            .map_err(|e| {
                format!("Cannot parse input scalar `{name}` from \"{s}\": {e}")
            })?
            .try_into()
            .map_err(|e| format!("Cannot parse input scalar `{name}`: {e}"))
    }

    /// Parses the provided [`ScalarToken`] as a [`String`].
    ///
    /// # Errors
    ///
    /// If the token is not a string.
    pub fn parse_token<S: ScalarValue>(
        value: ScalarToken<'_>,
    ) -> ParseScalarResult<S> {
        <String as ParseScalarValue<S>>::from_str(value)
    }
}

#[cfg(test)]
mod spec {
    use juniper::{DefaultScalarValue, InputValue, Value};
    use service::domain;

    use crate::api::deal;

    use super::Via;

    type Id = Via<domain::deal::Id>;

    #[test]
    fn outputs_string() {
        let id = deal::Id::from(domain::deal::Id::from(9_007_199_254_740_993));

        assert_eq!(
            Id::to_output::<_, DefaultScalarValue>(&id),
            Value::scalar("9007199254740993".to_owned()),
        );
    }

    #[test]
    fn parses_string_input() {
        let input = InputValue::<DefaultScalarValue>::scalar("42".to_owned());

        let id: deal::Id = Id::from_input(&input).unwrap();

        assert_eq!(domain::deal::Id::from(id), 42.into());
    }

    #[test]
    fn refuses_non_string_input() {
        let input = InputValue::<DefaultScalarValue>::scalar(42);
        let garbage = InputValue::<DefaultScalarValue>::scalar("x".to_owned());

        assert!(Id::from_input::<deal::Id, _>(&input).is_err());
        assert!(Id::from_input::<deal::Id, _>(&garbage).is_err());
    }
}
