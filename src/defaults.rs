//! Form defaults applied when a caller leaves an optional field out. Shared by
//! the HTTP payloads and the command-line flags.

pub const MORTGAGE_YEARS: f64 = 30.0;
pub const LOAN_YEARS: f64 = 5.0;
pub const PENSION_RETIREMENT_AGE: f64 = 67.0;
pub const INVESTMENT_YEARS: f64 = 10.0;
pub const COMPOUND_YEARS: f64 = 20.0;
pub const LIFE_INSURANCE_YEARS: f64 = 20.0;
pub const HEALTH_FAMILY_SIZE: f64 = 1.0;

pub const HTTP_PORT: u16 = 8080;
