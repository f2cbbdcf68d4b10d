mod amortization;
mod error;
mod premium;
mod rounding;
mod savings;
mod tax;
mod types;

pub use amortization::{
    calculate_loan, calculate_mortgage, monthly_payment, principal_for_payment,
};
pub use error::{CalcError, CalcResult, InvalidReason, required};
pub use premium::{calculate_health_insurance, calculate_life_insurance, coverage_details};
pub use rounding::{round_currency, round_percent};
pub use savings::{calculate_compound_interest, calculate_investment, calculate_pension};
pub use tax::{INCOME_TAX_BRACKETS, TaxBracket, annual_income_tax, calculate_tax};
pub use types::{
    CompoundInterestInputs, CompoundInterestResult, CoverageDetails, CoverageTier,
    HealthInsuranceInputs, HealthInsuranceResult, InvestmentInputs, InvestmentResult,
    LifeInsuranceInputs, LifeInsuranceResult, LoanInputs, LoanResult, LoanType, MortgageInputs,
    MortgageMode, MortgageResult, PensionInputs, PensionResult, TaxInputs, TaxResult,
    YearlyBreakdown,
};
