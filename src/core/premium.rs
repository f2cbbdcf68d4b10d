use super::error::{
    CalcError, CalcResult, InvalidReason, finite_output, require_in_range, require_positive,
};
use super::rounding::round_currency;
use super::types::{
    CoverageDetails, CoverageTier, HealthInsuranceInputs, HealthInsuranceResult,
    LifeInsuranceInputs, LifeInsuranceResult,
};

pub const LIFE_MIN_AGE: f64 = 18.0;
pub const LIFE_MAX_AGE: f64 = 70.0;
pub const LIFE_MIN_COVERAGE: f64 = 100_000.0;

const LIFE_BASE_MONTHLY_PREMIUM: f64 = 100.0;
const LIFE_REFERENCE_AGE: f64 = 30.0;
const LIFE_AGE_LOADING_PER_YEAR: f64 = 0.02;
const LIFE_COVERAGE_UNIT: f64 = 1_000_000.0;

pub const HEALTH_MAX_AGE: f64 = 120.0;
pub const HEALTH_MIN_FAMILY: f64 = 1.0;
pub const HEALTH_MAX_FAMILY: f64 = 10.0;

const HEALTH_DEPENDANT_LOADING: f64 = 0.5;
const HEALTH_QUOTE_YEARS: f64 = 5.0;

/// Base monthly health premium by upper age bound, oldest band last.
const HEALTH_AGE_BANDS: [(f64, f64); 3] = [(30.0, 150.0), (50.0, 250.0), (70.0, 400.0)];
const HEALTH_SENIOR_BASE_PREMIUM: f64 = 600.0;

pub fn calculate_life_insurance(inputs: &LifeInsuranceInputs) -> CalcResult<LifeInsuranceResult> {
    let age = require_positive("age", inputs.age)?;
    let coverage = require_positive("coverageAmount", inputs.coverage_amount)?;
    let years = require_positive("years", inputs.years)?;

    let age = require_in_range("age", age, LIFE_MIN_AGE, LIFE_MAX_AGE)?;
    if coverage < LIFE_MIN_COVERAGE {
        return Err(CalcError::invalid(
            "coverageAmount",
            InvalidReason::BelowMinimum(LIFE_MIN_COVERAGE),
        ));
    }

    let age_factor = 1.0 + (age - LIFE_REFERENCE_AGE) * LIFE_AGE_LOADING_PER_YEAR;
    let coverage_factor = coverage / LIFE_COVERAGE_UNIT;
    let period_factor = 1.0 / years.sqrt();

    let monthly_premium = LIFE_BASE_MONTHLY_PREMIUM * age_factor * coverage_factor * period_factor;
    let annual_premium = monthly_premium * 12.0;
    let total_cost = finite_output("coverageAmount", annual_premium * years)?;

    Ok(LifeInsuranceResult {
        monthly_premium: round_currency(monthly_premium),
        annual_premium: round_currency(annual_premium),
        total_cost: round_currency(total_cost),
        coverage_amount: round_currency(coverage),
    })
}

fn health_base_premium(age: f64) -> f64 {
    HEALTH_AGE_BANDS
        .iter()
        .find(|(upper, _)| age <= *upper)
        .map(|(_, premium)| *premium)
        .unwrap_or(HEALTH_SENIOR_BASE_PREMIUM)
}

fn tier_factor(tier: CoverageTier) -> f64 {
    match tier {
        CoverageTier::Basic => 0.8,
        CoverageTier::Standard => 1.0,
        CoverageTier::Premium => 1.3,
    }
}

pub fn coverage_details(tier: CoverageTier) -> CoverageDetails {
    match tier {
        CoverageTier::Basic => CoverageDetails {
            hospitalization: 250_000,
            surgeries: 100_000,
            medications: 25_000,
            dental: 10_000,
        },
        CoverageTier::Standard => CoverageDetails {
            hospitalization: 500_000,
            surgeries: 250_000,
            medications: 50_000,
            dental: 25_000,
        },
        CoverageTier::Premium => CoverageDetails {
            hospitalization: 1_000_000,
            surgeries: 500_000,
            medications: 100_000,
            dental: 50_000,
        },
    }
}

pub fn calculate_health_insurance(
    inputs: &HealthInsuranceInputs,
) -> CalcResult<HealthInsuranceResult> {
    let age = require_positive("age", inputs.age)?;
    let family_size = require_positive("familySize", inputs.family_size)?;
    let age = require_in_range("age", age, 0.0, HEALTH_MAX_AGE)?;
    let family_size = require_in_range(
        "familySize",
        family_size,
        HEALTH_MIN_FAMILY,
        HEALTH_MAX_FAMILY,
    )?;

    let family_factor = 1.0 + (family_size - 1.0) * HEALTH_DEPENDANT_LOADING;
    let monthly_premium =
        health_base_premium(age) * family_factor * tier_factor(inputs.coverage_tier);
    let annual_premium = monthly_premium * 12.0;
    let total_cost = annual_premium * HEALTH_QUOTE_YEARS;

    Ok(HealthInsuranceResult {
        coverage_tier: inputs.coverage_tier,
        monthly_premium: round_currency(monthly_premium),
        annual_premium: round_currency(annual_premium),
        total_cost: round_currency(total_cost),
        coverage_details: coverage_details(inputs.coverage_tier),
    })
}
