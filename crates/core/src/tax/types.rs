//! Tax data types.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use mandap_shared::types::TaxRateId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A named tax rate created during the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate {
    /// Unique identifier, assigned at creation.
    pub id: TaxRateId,
    /// Display name (e.g., "GST 18%").
    pub name: String,
    /// Whole percent, never negative.
    pub percentage: Decimal,
    /// When the rate was added.
    pub created_at: DateTime<Utc>,
}

/// The rate chosen on a form: a specific rate or no tax at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "id")]
pub enum TaxSelection {
    /// No tax applies.
    #[default]
    None,
    /// Apply the rate with this id.
    Rate(TaxRateId),
}

impl TaxSelection {
    /// The selected rate id, if any.
    #[must_use]
    pub const fn rate_id(&self) -> Option<TaxRateId> {
        match self {
            Self::None => None,
            Self::Rate(id) => Some(*id),
        }
    }
}

impl From<Option<TaxRateId>> for TaxSelection {
    fn from(id: Option<TaxRateId>) -> Self {
        id.map_or(Self::None, Self::Rate)
    }
}

impl fmt::Display for TaxSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Rate(id) => write!(f, "{id}"),
        }
    }
}

impl FromStr for TaxSelection {
    type Err = uuid::Error;

    /// `none` (or an empty string) selects no tax; anything else must be a rate id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("none") {
            return Ok(Self::None);
        }
        s.parse().map(Self::Rate)
    }
}

/// Result of applying a tax percentage to a base amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxCalculation {
    /// Amount before tax.
    pub base_amount: Decimal,
    /// Whole percent applied.
    pub tax_percentage: Decimal,
    /// Total tax.
    pub tax_amount: Decimal,
    /// Central GST share (half of the tax).
    pub cgst_amount: Decimal,
    /// State GST share (half of the tax).
    pub sgst_amount: Decimal,
    /// Base plus tax.
    pub total_amount: Decimal,
}

impl TaxCalculation {
    /// A calculation with no tax applied.
    #[must_use]
    pub const fn untaxed(base_amount: Decimal) -> Self {
        Self {
            base_amount,
            tax_percentage: Decimal::ZERO,
            tax_amount: Decimal::ZERO,
            cgst_amount: Decimal::ZERO,
            sgst_amount: Decimal::ZERO,
            total_amount: base_amount,
        }
    }
}
