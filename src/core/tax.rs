use super::error::{CalcResult, finite_output, require_positive};
use super::rounding::{round_currency, round_percent};
use super::types::{TaxInputs, TaxResult};

#[derive(Debug, Clone, Copy)]
pub struct TaxBracket {
    /// Inclusive annual upper bound of the bracket.
    pub upper: f64,
    pub rate: f64,
    /// Published tax on the whole width of the bracket, summed in table order.
    pub full_bracket_tax: f64,
}

/// Israeli annual income tax brackets.
pub const INCOME_TAX_BRACKETS: [TaxBracket; 6] = [
    TaxBracket {
        upper: 83_520.0,
        rate: 0.10,
        full_bracket_tax: 8_352.0,
    },
    TaxBracket {
        upper: 120_000.0,
        rate: 0.14,
        full_bracket_tax: 5_107.2,
    },
    TaxBracket {
        upper: 173_040.0,
        rate: 0.20,
        full_bracket_tax: 10_608.0,
    },
    TaxBracket {
        upper: 239_040.0,
        rate: 0.31,
        full_bracket_tax: 20_460.0,
    },
    TaxBracket {
        upper: 514_920.0,
        rate: 0.35,
        full_bracket_tax: 96_558.0,
    },
    TaxBracket {
        upper: f64::INFINITY,
        rate: 0.47,
        full_bracket_tax: f64::INFINITY,
    },
];

/// Tax on `annual_income`: the full tax of every lower bracket plus the
/// marginal rate on the income inside the bracket it falls in.
pub fn annual_income_tax(annual_income: f64) -> f64 {
    let income = annual_income.max(0.0);
    let mut lower = 0.0;
    let mut lower_brackets_tax = 0.0;

    for bracket in &INCOME_TAX_BRACKETS {
        if income <= bracket.upper {
            return lower_brackets_tax + (income - lower) * bracket.rate;
        }
        lower_brackets_tax += bracket.full_bracket_tax;
        lower = bracket.upper;
    }

    lower_brackets_tax
}

pub fn calculate_tax(inputs: &TaxInputs) -> CalcResult<TaxResult> {
    let monthly_income = require_positive("monthlyIncome", inputs.monthly_income)?;
    let annual_income = finite_output("monthlyIncome", monthly_income * 12.0)?;

    let annual_tax = annual_income_tax(annual_income);
    let monthly_tax = annual_tax / 12.0;
    let effective_tax_rate = annual_tax / annual_income * 100.0;
    let net_annual_income = annual_income - annual_tax;

    Ok(TaxResult {
        monthly_tax: round_currency(monthly_tax),
        annual_tax: round_currency(annual_tax),
        effective_tax_rate: round_percent(effective_tax_rate),
        net_monthly_income: round_currency(net_annual_income / 12.0),
        net_annual_income: round_currency(net_annual_income),
    })
}
