//! String-keyed enums with an explicit fallback case.
//!
//! Crops, soil types and irrigation types arrive as free-form strings from farm
//! records. Known keys map onto dedicated variants; anything else is kept
//! verbatim in `Other` so lookups can resolve it to their documented default.

macro_rules! keyed_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $key:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// Unrecognized key (kept as given, trimmed).
            Other(String),
        }

        impl $name {
            /// Case-insensitive parse; never fails.
            pub fn parse(raw: &str) -> Self {
                let trimmed = raw.trim();
                $(
                    if trimmed.eq_ignore_ascii_case($key) {
                        return $name::$variant;
                    }
                )+
                $name::Other(trimmed.to_string())
            }

            /// Canonical key for known variants, the raw key otherwise.
            pub fn as_str(&self) -> &str {
                match self {
                    $( $name::$variant => $key, )+
                    $name::Other(raw) => raw.as_str(),
                }
            }

            pub fn is_known(&self) -> bool {
                !matches!(self, $name::Other(_))
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self::parse(&value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::parse(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_str().to_string()
            }
        }

        impl core::str::FromStr for $name {
            type Err = core::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::parse(s))
            }
        }
    };
}

pub(crate) use keyed_enum;
