use serde::{Deserialize, Serialize};

use crate::store::StoreError;

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $s)]
                $variant
            ),+
        }

        impl $name {
            /// Variants in the order the entry form offers them.
            pub const ALL: &'static [$name] = &[$(Self::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = StoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(StoreError::InvalidValue {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(Status {
    Approved => "A - Approved",
    ApprovedWithComments => "B - Approved with Comments",
    ReviseAndResubmit => "C - Revise and Resubmit",
    Rejected => "D - Rejected",
});

str_enum!(Discipline {
    Architecture => "Architecture",
    Civil => "Civil",
    Electrical => "Electrical",
    Mechanical => "Mechanical",
    Surveying => "Surveying",
});
