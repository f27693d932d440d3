pub mod bs_analytic;
pub mod curves;
pub mod payoff;
