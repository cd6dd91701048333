//! Pure cost formula.
//!
//! `total = Σ(count × rate) × Π(coefficients)`, clamped to [`PRICE_CEILING`]
//! before it is stored.

use serde::{Deserialize, Serialize};

/// Highest total price that is ever reported or stored.
pub const PRICE_CEILING: i64 = 2_000_000_000;

/// One line of a team: how many people, at which rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRole {
    pub count: i64,
    pub rate: i64,
}

impl TeamRole {
    pub fn new(count: i64, rate: i64) -> Self {
        Self { count, rate }
    }
}

/// Sum of `count × rate` over the team.
pub fn base_cost(team: &[TeamRole]) -> f64 {
    team.iter()
        .map(|member| member.count as f64 * member.rate as f64)
        .sum()
}

/// Product of all coefficients. An empty list is the neutral factor 1.
pub fn coefficient_product(coefficients: &[f64]) -> f64 {
    coefficients.iter().product()
}

/// Computes the unclamped cost of a team under the given coefficients.
///
/// An empty team costs 0 regardless of the coefficients.
pub fn calculate_cost(team: &[TeamRole], coefficients: &[f64]) -> f64 {
    base_cost(team) * coefficient_product(coefficients)
}

/// Converts a computed cost into a storable price.
///
/// Anything at or above [`PRICE_CEILING`] becomes exactly the ceiling.
/// Fractional results are rounded to the nearest integer; non-finite or
/// negative input yields 0.
pub fn clamp_total_price(total: f64) -> i64 {
    if total.is_nan() || total <= 0.0 {
        return 0;
    }
    if total >= PRICE_CEILING as f64 {
        return PRICE_CEILING;
    }
    (total.round() as i64).min(PRICE_CEILING)
}
