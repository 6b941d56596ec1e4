//! Macros for defining kind enums.

/// Macro for defining a kind enum.
///
/// Kinds are parsed from and printed as `snake_case` strings, and list all
/// their variants in declaration order via the `ALL` constant.
///
/// # Example
///
/// ```rust
/// # use common::define_kind;
///
/// define_kind! {
///     #[doc = "Shape kind."]
///     enum Kind {
///         #[doc = "A cube"]
///         Cube = 1,
///
///         #[doc = "A sphere"]
///         Sphere = 2,
///     }
/// }
///
/// assert_eq!(Kind::Cube.to_string(), "cube");
/// assert_eq!(Kind::ALL, &[Kind::Cube, Kind::Sphere]);
/// ```
#[expect(clippy::module_name_repetitions, reason = "more readable")]
#[macro_export]
macro_rules! define_kind {
    (
        #[doc = $doc:literal]
        enum $name:ident {
            $(
                #[doc = $variant_doc:literal]
                $variant:ident = $value:expr
            ),* $(,)?
        }
    ) => {
        #[derive(
            Clone,
            Copy,
            Debug,
            $crate::private::strum::Display,
            $crate::private::strum::EnumString,
            Eq,
            Hash,
            PartialEq,
        )]
        #[cfg_attr(
            feature = "serde",
            derive(
                $crate::private::serde::Deserialize,
                $crate::private::serde::Serialize,
            ),
            serde(rename_all = "snake_case"),
        )]
        #[doc = $doc]
        #[repr(u8)]
        #[strum(serialize_all = "snake_case")]
        pub enum $name {
            $(
                 #[doc = $variant_doc]
                 $variant = $value,
            )*
        }

        impl $name {
            /// All the variants in their declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];

            /// Converts this into its [`u8`] representation.
            #[must_use]
            pub const fn u8(self) -> u8 {
                self as u8
            }
        }
    };
}
