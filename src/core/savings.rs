use super::amortization::{monthly_rate, term_months};
use super::error::{
    CalcError, CalcResult, InvalidReason, finite_output, require_finite, require_in_range,
    require_non_negative, require_positive,
};
use super::rounding::round_currency;
use super::types::{
    CompoundInterestInputs, CompoundInterestResult, InvestmentInputs, InvestmentResult,
    PensionInputs, PensionResult, YearlyBreakdown,
};

pub const MAX_COMPOUND_YEARS: f64 = 100.0;

const EMPLOYER_CONTRIBUTION_RATE: f64 = 0.075;
const EMPLOYEE_CONTRIBUTION_RATE: f64 = 0.05;
const PENSION_ANNUAL_RETURN: f64 = 0.04;
const PENSION_WITHDRAWAL_RATE: f64 = 0.04;

/// Future value of an ordinary annuity of one unit per period.
fn annuity_future_value_factor(rate: f64, periods: f64) -> f64 {
    ((1.0 + rate).powf(periods) - 1.0) / rate
}

fn whole_years(field: &'static str, years: f64) -> CalcResult<u32> {
    let years = require_positive(field, years)?;
    if years.fract() != 0.0 {
        return Err(CalcError::invalid(field, InvalidReason::NotWholeNumber));
    }
    let years = require_in_range(field, years, 1.0, MAX_COMPOUND_YEARS)?;
    Ok(years as u32)
}

/// Accumulates deposits year by year on two tracks: one charged the annual
/// management fee on its post-return balance, one fee-free for comparison.
pub fn calculate_compound_interest(
    inputs: &CompoundInterestInputs,
) -> CalcResult<CompoundInterestResult> {
    let years = whole_years("years", inputs.years)?;
    let initial = require_non_negative("initialDeposit", inputs.initial_deposit)?;
    let monthly = require_non_negative("monthlyDeposit", inputs.monthly_deposit)?;
    let annual_return = require_finite("annualReturn", inputs.annual_return_percent)?;
    if annual_return <= -100.0 {
        return Err(CalcError::invalid(
            "annualReturn",
            InvalidReason::MustExceed("-100"),
        ));
    }
    let fee_rate =
        require_in_range("managementFee", inputs.management_fee_percent, 0.0, 100.0)? / 100.0;
    let growth = 1.0 + annual_return / 100.0;

    let yearly_deposits = monthly * 12.0;
    let mut balance_with_fees = initial;
    let mut balance_no_fees = initial;
    let mut cumulative_fees = 0.0;
    let mut yearly_breakdown = Vec::with_capacity(years as usize);

    for year in 1..=years {
        let total_no_fees = (balance_no_fees + yearly_deposits) * growth;
        let total_before_fees = (balance_with_fees + yearly_deposits) * growth;
        let management_fees = total_before_fees * fee_rate;
        let total_after_fees = total_before_fees - management_fees;
        let returns = total_before_fees - balance_with_fees - yearly_deposits;

        cumulative_fees += management_fees;

        let deposits = if year == 1 {
            yearly_deposits + initial
        } else {
            yearly_deposits
        };
        yearly_breakdown.push(YearlyBreakdown {
            year,
            deposits: round_currency(deposits),
            returns: round_currency(returns),
            total_savings: round_currency(total_no_fees),
            management_fees: round_currency(management_fees),
            savings_after_fees: round_currency(total_after_fees),
        });

        balance_with_fees = total_after_fees;
        balance_no_fees = total_no_fees;
    }

    let balance_no_fees = finite_output("years", balance_no_fees)?;
    let final_amount = round_currency(finite_output("years", balance_with_fees)?);
    let total_deposits = initial + monthly * years as f64 * 12.0;

    Ok(CompoundInterestResult {
        future_value: round_currency(balance_no_fees),
        total_deposits: round_currency(total_deposits),
        total_interest: round_currency(final_amount as f64 - total_deposits),
        total_management_fees: round_currency(cumulative_fees),
        final_amount,
        yearly_breakdown,
    })
}

/// Future value of a lump sum plus monthly contributions, compounded monthly.
pub fn calculate_investment(inputs: &InvestmentInputs) -> CalcResult<InvestmentResult> {
    let rate = monthly_rate(inputs.annual_rate_percent)?;
    let months = term_months(inputs.years)?;
    let initial = require_non_negative("initialInvestment", inputs.initial_investment)?;
    let contribution = require_non_negative("monthlyContribution", inputs.monthly_contribution)?;

    let future_value_initial = initial * (1.0 + rate).powf(months);
    let future_value_contributions = contribution * annuity_future_value_factor(rate, months);
    let future_value = finite_output("years", future_value_initial + future_value_contributions)?;
    let total_investment = initial + contribution * months;

    Ok(InvestmentResult {
        future_value: round_currency(future_value),
        total_investment: round_currency(total_investment),
        total_interest: round_currency(future_value - total_investment),
        monthly_contribution: round_currency(contribution),
    })
}

/// Rough pension projection: fixed employer/employee shares of salary saved
/// monthly at a fixed return, drawn down at a fixed annual rate.
pub fn calculate_pension(inputs: &PensionInputs) -> CalcResult<PensionResult> {
    let salary = require_positive("monthlySalary", inputs.monthly_salary)?;
    let current_age = require_positive("currentAge", inputs.current_age)?;
    let retirement_age = require_positive("retirementAge", inputs.retirement_age)?;
    if current_age >= retirement_age {
        return Err(CalcError::invalid(
            "retirementAge",
            InvalidReason::MustExceed("currentAge"),
        ));
    }

    let employer = salary * EMPLOYER_CONTRIBUTION_RATE;
    let employee = salary * EMPLOYEE_CONTRIBUTION_RATE;
    let months = (retirement_age - current_age) * 12.0;
    let total_savings = (employer + employee)
        * annuity_future_value_factor(PENSION_ANNUAL_RETURN / 12.0, months);
    let total_savings = finite_output("retirementAge", total_savings)?;
    let monthly_pension = total_savings * PENSION_WITHDRAWAL_RATE / 12.0;

    Ok(PensionResult {
        monthly_pension: round_currency(monthly_pension),
        total_savings: round_currency(total_savings),
        employer_contribution: round_currency(employer),
        employee_contribution: round_currency(employee),
    })
}
