//! Typed IDs for type-safe entity references.
//!
//! Using typed IDs prevents accidentally passing a `VendorId` where a `BookingId` is expected.
//! IDs are UUID v7, so ordering by ID follows creation time; the in-memory
//! store lists records in that order.
//!
//! ```
//! use mandap_shared::types::{BookingId, IncomeCategoryId};
//!
//! let booking: BookingId = "0190f5a4-0000-7000-8000-000000000001".parse().unwrap();
//! let later = BookingId::from_uuid(uuid::Uuid::from_u128(booking.into_inner().as_u128() + 1));
//! assert!(booking < later);
//!
//! // Composite keys such as "one income line per category per booking".
//! let category = IncomeCategoryId::new();
//! let key = format!("{booking}:{category}");
//! assert!(key.starts_with("0190f5a4-"));
//! ```

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Creates a new random ID using UUID v7 (time-ordered).
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Creates an ID from an existing UUID.
            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            #[must_use]
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

typed_id!(BookingId, "Unique identifier for a venue booking.");
typed_id!(VendorId, "Unique identifier for a vendor.");
typed_id!(ExpenseId, "Unique identifier for an expense.");
typed_id!(PaymentId, "Unique identifier for a booking payment.");
typed_id!(IncomeCategoryId, "Unique identifier for an income category.");
typed_id!(
    AdditionalIncomeId,
    "Unique identifier for an additional income line on a booking."
);
typed_id!(TaxRateId, "Unique identifier for a tax rate.");
