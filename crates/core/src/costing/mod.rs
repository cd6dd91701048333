mod calculator;

pub use calculator::{
    base_cost, calculate_cost, clamp_total_price, coefficient_product, TeamRole, PRICE_CEILING,
};
