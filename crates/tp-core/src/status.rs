//! Categorical tower attributes shared by synthesis, tiering, and output.
//!
//! Every enum round-trips through its lowercase/capitalised label via
//! `as_str` / `FromStr`, which is what the CSV layer writes and reads.

use std::fmt;
use std::str::FromStr;

use crate::TpError;

/// Generate `as_str`, `Display`, `FromStr`, and `ALL` for a label enum.
macro_rules! labelled_enum {
    ($(#[$attr:meta])* $name:ident, $kind:literal { $($(#[$vattr:meta])* $variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum $name {
            $($(#[$vattr])* $variant),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Label used in tabular output.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = TpError;
            fn from_str(s: &str) -> Result<Self, TpError> {
                match s.trim() {
                    $($label => Ok($name::$variant),)+
                    other => Err(TpError::UnknownLabel { kind: $kind, value: other.to_owned() }),
                }
            }
        }
    };
}

labelled_enum! {
    /// Operational status of a tower.
    TowerStatus, "tower status" {
        Active      => "active",
        Maintenance => "maintenance",
        Inactive    => "inactive",
    }
}

labelled_enum! {
    /// Maintenance priority class.
    Priority, "priority" {
        High   => "High",
        Medium => "Medium",
        Low    => "Low",
    }
}

labelled_enum! {
    /// Physical tower subtype.
    TowerSubtype, "tower subtype" {
        Macro => "Macro",
        Small => "Small",
    }
}
