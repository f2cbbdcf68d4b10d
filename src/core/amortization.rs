use super::error::{CalcResult, finite_output, require_non_zero, require_positive};
use super::rounding::{round_currency, round_percent};
use super::types::{LoanInputs, LoanResult, LoanType, MortgageInputs, MortgageMode, MortgageResult};

/// Variable-rate loans are priced at an assumed 20% average rise over the
/// quoted rate.
const VARIABLE_RATE_UPLIFT: f64 = 1.2;

/// Negative rates are allowed; only zero and non-numeric rates are rejected.
pub(crate) fn monthly_rate(annual_rate_percent: f64) -> CalcResult<f64> {
    Ok(require_non_zero("annualRate", annual_rate_percent)? / 100.0 / 12.0)
}

pub(crate) fn term_months(years: f64) -> CalcResult<f64> {
    Ok(require_positive("years", years)? * 12.0)
}

/// Level payment that repays `principal` over `months` at `rate` per month.
pub fn monthly_payment(principal: f64, rate: f64, months: f64) -> f64 {
    let growth = (1.0 + rate).powf(months);
    principal * (rate * growth) / (growth - 1.0)
}

/// Principal that a level payment of `payment` repays over `months`.
pub fn principal_for_payment(payment: f64, rate: f64, months: f64) -> f64 {
    let growth = (1.0 + rate).powf(months);
    payment * (growth - 1.0) / (rate * growth)
}

pub fn calculate_mortgage(inputs: &MortgageInputs) -> CalcResult<MortgageResult> {
    let rate = monthly_rate(inputs.annual_rate_percent)?;
    let months = term_months(inputs.years)?;

    let (principal, payment) = match inputs.mode {
        MortgageMode::ByPrincipal => {
            let principal = require_positive("principal", inputs.amount)?;
            let payment = finite_output("years", monthly_payment(principal, rate, months))?;
            (principal, payment)
        }
        MortgageMode::ByPayment => {
            let payment = require_positive("monthlyPayment", inputs.amount)?;
            let principal =
                finite_output("years", principal_for_payment(payment, rate, months))?;
            (principal, payment)
        }
    };

    let total_payment = payment * months;
    let total_interest = total_payment - principal;

    Ok(MortgageResult {
        monthly_payment: round_currency(payment),
        total_payment: round_currency(total_payment),
        total_interest: round_currency(total_interest),
        principal: round_currency(principal),
    })
}

pub fn calculate_loan(inputs: &LoanInputs) -> CalcResult<LoanResult> {
    let principal = require_positive("principal", inputs.principal)?;
    let rate = monthly_rate(inputs.annual_rate_percent)?;
    let months = term_months(inputs.years)?;

    let effective_rate = match inputs.loan_type {
        LoanType::Fixed => rate,
        LoanType::Variable => rate * VARIABLE_RATE_UPLIFT,
    };

    let payment = finite_output("years", monthly_payment(principal, effective_rate, months))?;
    let total_payment = payment * months;
    let total_interest = total_payment - principal;

    Ok(LoanResult {
        monthly_payment: round_currency(payment),
        total_payment: round_currency(total_payment),
        total_interest: round_currency(total_interest),
        effective_interest_rate: round_percent(total_interest / principal * 100.0),
    })
}
