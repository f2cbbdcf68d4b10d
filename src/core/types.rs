use serde::Serialize;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MortgageMode {
    ByPrincipal,
    ByPayment,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum LoanType {
    Fixed,
    Variable,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CoverageTier {
    Basic,
    Standard,
    Premium,
}

/// `amount` is the principal in `ByPrincipal` mode and the target monthly
/// payment in `ByPayment` mode.
#[derive(Debug, Clone, Copy)]
pub struct MortgageInputs {
    pub mode: MortgageMode,
    pub amount: f64,
    pub annual_rate_percent: f64,
    pub years: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct LoanInputs {
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub years: f64,
    pub loan_type: LoanType,
}

#[derive(Debug, Clone, Copy)]
pub struct PensionInputs {
    pub monthly_salary: f64,
    pub current_age: f64,
    pub retirement_age: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct TaxInputs {
    pub monthly_income: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct InvestmentInputs {
    pub initial_investment: f64,
    pub monthly_contribution: f64,
    pub annual_rate_percent: f64,
    pub years: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct CompoundInterestInputs {
    pub initial_deposit: f64,
    pub monthly_deposit: f64,
    pub annual_return_percent: f64,
    pub years: f64,
    pub management_fee_percent: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct LifeInsuranceInputs {
    pub age: f64,
    pub coverage_amount: f64,
    pub years: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct HealthInsuranceInputs {
    pub age: f64,
    pub family_size: f64,
    pub coverage_tier: CoverageTier,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MortgageResult {
    pub monthly_payment: i64,
    pub total_payment: i64,
    pub total_interest: i64,
    pub principal: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanResult {
    pub monthly_payment: i64,
    pub total_payment: i64,
    pub total_interest: i64,
    pub effective_interest_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PensionResult {
    pub monthly_pension: i64,
    pub total_savings: i64,
    pub employer_contribution: i64,
    pub employee_contribution: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxResult {
    pub monthly_tax: i64,
    pub annual_tax: i64,
    pub effective_tax_rate: f64,
    pub net_monthly_income: i64,
    pub net_annual_income: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentResult {
    pub future_value: i64,
    pub total_investment: i64,
    pub total_interest: i64,
    pub monthly_contribution: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyBreakdown {
    pub year: u32,
    pub deposits: i64,
    pub returns: i64,
    /// Balance on the fee-free track.
    pub total_savings: i64,
    pub management_fees: i64,
    pub savings_after_fees: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompoundInterestResult {
    /// Final balance had no management fee been charged.
    pub future_value: i64,
    pub total_deposits: i64,
    pub total_interest: i64,
    pub total_management_fees: i64,
    pub final_amount: i64,
    pub yearly_breakdown: Vec<YearlyBreakdown>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LifeInsuranceResult {
    pub monthly_premium: i64,
    pub annual_premium: i64,
    pub total_cost: i64,
    pub coverage_amount: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageDetails {
    pub hospitalization: i64,
    pub surgeries: i64,
    pub medications: i64,
    pub dental: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthInsuranceResult {
    pub coverage_tier: CoverageTier,
    pub monthly_premium: i64,
    pub annual_premium: i64,
    pub total_cost: i64,
    pub coverage_details: CoverageDetails,
}
