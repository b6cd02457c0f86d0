//! Macros for declaring closed state enumerations.

/// Declare a fieldless state enum together with its enumeration order,
/// its variant names and `Display`/`FromStr` implementations.
///
/// Parsing is ASCII case-insensitive.
///
/// # Example
///
/// ```
/// use tapwalk::state_enum;
///
/// state_enum! {
///     pub enum Phase {
///         Idle,
///         Busy,
///     }
/// }
///
/// assert_eq!(Phase::ALL, &[Phase::Idle, Phase::Busy]);
/// assert_eq!(Phase::COUNT, 2);
/// assert_eq!(Phase::Busy.name(), "Busy");
/// assert_eq!(Phase::Busy.index(), 1);
/// assert_eq!("idle".parse::<Phase>().unwrap(), Phase::Idle);
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug,
            serde::Serialize, serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];

            /// Number of variants.
            pub const COUNT: usize = Self::ALL.len();

            /// The variant's name as declared.
            pub const fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            /// Position of the variant in declaration order.
            pub const fn index(self) -> usize {
                self as usize
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::core::ParseStateError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                $(
                    if s.eq_ignore_ascii_case(stringify!($variant)) {
                        return Ok(Self::$variant);
                    }
                )*
                Err($crate::core::ParseStateError::new(s))
            }
        }
    };
}
