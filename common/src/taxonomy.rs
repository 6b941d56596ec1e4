//! Macros for defining ordered taxonomies of string keys.

/// Presentation tokens of a taxonomy entry.
///
/// Tokens are opaque to the business logic and only passed through to the
/// renderer.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Style {
    /// Token of the lane (column) background.
    pub lane: &'static str,

    /// Token of the lane header text.
    pub header: &'static str,

    /// Token of the badge rendered on cards.
    pub badge: &'static str,
}

/// Error of parsing a taxonomy entry from its key.
#[derive(Clone, Copy, Debug, derive_more::Display, derive_more::Error)]
#[display("unknown `{kind}` key")]
pub struct UnknownKey {
    /// Name of the taxonomy the key was parsed into.
    pub kind: &'static str,
}

/// Macro for defining an ordered taxonomy enum.
///
/// Every entry is bound to a bit-exact string key, a human-readable title
/// and presentation [`Style`] tokens. The declaration order is the order
/// exposed by the generated `ALL` constant.
///
/// [`Style`]: crate::taxonomy::Style
///
/// # Example
///
/// ```rust
/// # use common::define_taxonomy;
///
/// define_taxonomy! {
///     #[doc = "Traffic light."]
///     enum Light {
///         #[doc = "Stop."]
///         #[key = "red"]
///         #[title = "Red"]
///         #[style(lane = "bg-red", header = "text-red", badge = "red")]
///         Red,
///
///         #[doc = "Go."]
///         #[key = "green"]
///         #[title = "Green"]
///         #[style(lane = "bg-green", header = "text-green", badge = "green")]
///         Green,
///     }
/// }
///
/// assert_eq!(Light::ALL, &[Light::Red, Light::Green]);
/// assert_eq!(Light::from_key("green"), Some(Light::Green));
/// assert_eq!(Light::Green.position(), 1);
/// ```
#[macro_export]
macro_rules! define_taxonomy {
    (
        #[doc = $doc:literal]
        enum $name:ident {
            $(
                #[doc = $variant_doc:literal]
                #[key = $key:literal]
                #[title = $title:literal]
                #[style(
                    lane = $lane:literal,
                    header = $header:literal,
                    badge = $badge:literal $(,)?
                )]
                $variant:ident
            ),* $(,)?
        }
    ) => {
        #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
        #[doc = $doc]
        pub enum $name {
            $(
                #[doc = $variant_doc]
                $variant,
            )*
        }

        impl $name {
            /// All the entries in their rendering order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];

            /// Returns the bit-exact key of this entry.
            #[must_use]
            pub const fn key(self) -> &'static str {
                match self {
                    $(Self::$variant => $key,)*
                }
            }

            /// Returns the human-readable title of this entry.
            #[must_use]
            pub const fn title(self) -> &'static str {
                match self {
                    $(Self::$variant => $title,)*
                }
            }

            /// Returns the presentation tokens of this entry.
            #[must_use]
            pub const fn style(self) -> $crate::taxonomy::Style {
                match self {
                    $(
                        Self::$variant => $crate::taxonomy::Style {
                            lane: $lane,
                            header: $header,
                            badge: $badge,
                        },
                    )*
                }
            }

            /// Returns the position of this entry in the `ALL` order.
            #[must_use]
            pub const fn position(self) -> usize {
                self as usize
            }

            /// Looks up an entry by its exact key.
            #[must_use]
            pub fn from_key(key: &str) -> Option<Self> {
                match key {
                    $($key => Some(Self::$variant),)*
                    _ => None,
                }
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(
                &self,
                f: &mut ::core::fmt::Formatter<'_>,
            ) -> ::core::fmt::Result {
                f.write_str(self.key())
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::taxonomy::UnknownKey;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_key(s).ok_or($crate::taxonomy::UnknownKey {
                    kind: ::core::stringify!($name),
                })
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.key()
            }
        }
    };
}
