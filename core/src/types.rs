//! Domain DTOs for the skip catalog API.
//!
//! # Design
//! `SkipOption` mirrors the upstream JSON shape field for field. The
//! mock-server crate defines its own copy; integration tests catch drift.
//! Prices stay as `f64` because upstream sends plain JSON numbers; the
//! VAT-inclusive total is derived on demand and never stored.

use serde::{Deserialize, Serialize};

pub type SkipId = u64;

/// One rentable skip configuration available at a location.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkipOption {
    pub id: SkipId,
    /// Capacity in cubic yards.
    pub size: u32,
    pub hire_period_days: u32,
    pub transport_cost: Option<f64>,
    pub per_tonne_cost: Option<f64>,
    pub price_before_vat: f64,
    /// VAT rate as a percentage, e.g. `20.0`.
    pub vat: f64,
    pub postcode: String,
    #[serde(default)]
    pub area: String,
    pub forbidden: bool,
    pub created_at: String,
    pub updated_at: String,
    pub allowed_on_road: bool,
    pub allows_heavy_waste: bool,
}

impl SkipOption {
    /// Price including VAT, unrounded.
    pub fn total_price(&self) -> f64 {
        self.price_before_vat * (1.0 + self.vat / 100.0)
    }

    /// Price including VAT, rounded to the nearest whole currency unit.
    pub fn display_price(&self) -> i64 {
        self.total_price().round() as i64
    }

    pub fn is_selectable(&self) -> bool {
        !self.forbidden
    }
}

/// A resolved choice handed to the next workflow step.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub skip: SkipOption,
    pub total_price: i64,
}

impl From<&SkipOption> for Selection {
    fn from(skip: &SkipOption) -> Self {
        Self {
            total_price: skip.display_price(),
            skip: skip.clone(),
        }
    }
}
