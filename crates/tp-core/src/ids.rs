//! Typed identifiers.
//!
//! Ids are dense row positions: `TowerId(i)` is row `i` of a `TowerTable`
//! and `ZoneId(i)` is zone `i` of a `ZoneCatalog`.  The inner integer is
//! `pub`; use `.index()` when indexing a `Vec`.

use std::fmt;

macro_rules! row_id {
    ($(#[$attr:meta])* $name:ident($inner:ty)) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name(pub $inner);

        impl $name {
            /// Exclusive upper bound on ids, and so the row capacity of the
            /// owning table.
            pub const LIMIT: $name = $name(<$inner>::MAX);

            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(row: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(row).map($name)
            }
        }
    };
}

row_id! {
    /// Row of a tower in its `TowerTable`, assigned in generation order.
    TowerId(u32)
}

row_id! {
    /// Position of a zone in its `ZoneCatalog`.
    ZoneId(u16)
}

impl TowerId {
    /// The external tower code for a generated tower: `NCA-` followed by the
    /// one-based sequence number zero-padded to six digits.
    pub fn code(self) -> String {
        format!("NCA-{:06}", self.0 as u64 + 1)
    }
}
