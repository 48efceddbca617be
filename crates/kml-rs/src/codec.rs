// crates/kml-rs/src/codec.rs

//! Bidirectional mapping between the closed token sets of enumerated KML
//! fields and their Rust enums.

/// A field value drawn from a closed set of symbolic tokens.
///
/// `from_token` is lenient: anything outside the declared set decodes to
/// [`TokenEnum::DEFAULT`]. `to_token` is total, and
/// `from_token(v.to_token()) == v` holds for every declared value.
pub trait TokenEnum: Copy + PartialEq + 'static {
    /// Every declared value with its canonical token, in declaration order.
    const TOKENS: &'static [(&'static str, Self)];

    /// The value substituted for unrecognised tokens. Independent of the
    /// declaration order.
    const DEFAULT: Self;

    fn from_token(token: &str) -> Self;

    fn to_token(self) -> &'static str;

    /// Returns `true` when `self` is the default value (and would be elided).
    fn is_default(self) -> bool {
        self == Self::DEFAULT
    }
}

/// Declares an enumerated field type together with its token table.
///
/// ```ignore
/// token_enum! {
///     pub enum RefreshMode default OnChange {
///         OnChange => "onChange",
///         OnInterval => "onInterval",
///     }
/// }
/// ```
macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident default $default:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $token:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant
            ),+
        }

        impl $crate::codec::TokenEnum for $name {
            const TOKENS: &'static [(&'static str, Self)] = &[$(($token, $name::$variant)),+];
            const DEFAULT: Self = $name::$default;

            fn from_token(token: &str) -> Self {
                match token {
                    $($token => $name::$variant,)+
                    other => {
                        log::warn!(
                            "Unknown {} token '{}', using '{}'",
                            stringify!($name),
                            other,
                            $crate::codec::TokenEnum::to_token(
                                <Self as $crate::codec::TokenEnum>::DEFAULT
                            )
                        );
                        <Self as $crate::codec::TokenEnum>::DEFAULT
                    }
                }
            }

            fn to_token(self) -> &'static str {
                match self {
                    $($name::$variant => $token),+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                <Self as $crate::codec::TokenEnum>::DEFAULT
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str($crate::codec::TokenEnum::to_token(*self))
            }
        }
    };
}

pub(crate) use token_enum;

#[cfg(test)]
mod tests {
    use super::TokenEnum;

    token_enum! {
        /// Default deliberately differs from the first declared value.
        enum Shade default Medium {
            Light => "light",
            Medium => "medium",
            Dark => "dark",
        }
    }

    #[test]
    fn test_round_trip_every_token() {
        for &(token, value) in Shade::TOKENS {
            assert_eq!(Shade::from_token(token), value);
            assert_eq!(value.to_token(), token);
            assert_eq!(Shade::from_token(value.to_token()), value);
        }
    }

    #[test]
    fn test_unknown_token_uses_default_not_first() {
        assert_eq!(Shade::from_token("garbage-token"), Shade::Medium);
        assert_eq!(Shade::from_token(""), Shade::Medium);
        assert_eq!(Shade::from_token("Light"), Shade::Medium);
        assert_eq!(Shade::default(), Shade::Medium);
    }

    #[test]
    fn test_display_and_is_default() {
        assert_eq!(Shade::Dark.to_string(), "dark");
        assert!(Shade::Medium.is_default());
        assert!(!Shade::Light.is_default());
    }
}
