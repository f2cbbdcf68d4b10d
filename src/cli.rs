use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::core::{
    CalcError, CompoundInterestInputs, CoverageTier, HealthInsuranceInputs, InvestmentInputs,
    LifeInsuranceInputs, LoanInputs, LoanType, MortgageInputs, MortgageMode, PensionInputs,
    TaxInputs, calculate_compound_interest, calculate_health_insurance, calculate_investment,
    calculate_life_insurance, calculate_loan, calculate_mortgage, calculate_pension,
    calculate_tax, required,
};
use crate::defaults;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    InvalidInput(#[from] CalcError),
    #[error("failed to render result: {0}")]
    Render(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(
    name = "fincalc",
    about = "Personal finance calculators (mortgage, loans, pension, tax, savings, insurance)"
)]
pub struct Cli {
    #[arg(short, long, global = true, help = "Log at debug level unless RUST_LOG is set")]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the calculators as a JSON HTTP API
    Serve {
        #[arg(long, default_value_t = defaults::HTTP_PORT)]
        port: u16,
    },
    #[command(flatten)]
    Calculate(CalcCommand),
}

#[derive(Subcommand, Debug)]
pub enum CalcCommand {
    /// Monthly payment for a principal, or principal for a monthly payment
    Mortgage(MortgageArgs),
    /// Fixed or variable rate consumer loan
    Loan(LoanArgs),
    /// Pension savings and monthly pension at retirement
    Pension(PensionArgs),
    /// Income tax on a monthly gross salary
    Tax(TaxArgs),
    /// Future value of a lump sum plus monthly contributions
    Investment(InvestmentArgs),
    /// Year-by-year savings growth with an annual management fee
    CompoundInterest(CompoundInterestArgs),
    /// Term life insurance premium
    LifeInsurance(LifeInsuranceArgs),
    /// Health insurance premium for a household
    HealthInsurance(HealthInsuranceArgs),
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum CliMortgageMode {
    ByPrincipal,
    ByPayment,
}

impl From<CliMortgageMode> for MortgageMode {
    fn from(value: CliMortgageMode) -> Self {
        match value {
            CliMortgageMode::ByPrincipal => MortgageMode::ByPrincipal,
            CliMortgageMode::ByPayment => MortgageMode::ByPayment,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum CliLoanType {
    Fixed,
    Variable,
}

impl From<CliLoanType> for LoanType {
    fn from(value: CliLoanType) -> Self {
        match value {
            CliLoanType::Fixed => LoanType::Fixed,
            CliLoanType::Variable => LoanType::Variable,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum CliCoverageTier {
    Basic,
    Standard,
    Premium,
}

impl From<CliCoverageTier> for CoverageTier {
    fn from(value: CliCoverageTier) -> Self {
        match value {
            CliCoverageTier::Basic => CoverageTier::Basic,
            CliCoverageTier::Standard => CoverageTier::Standard,
            CliCoverageTier::Premium => CoverageTier::Premium,
        }
    }
}

#[derive(Args, Debug)]
pub struct MortgageArgs {
    #[arg(long, value_enum, default_value_t = CliMortgageMode::ByPrincipal)]
    pub mode: CliMortgageMode,
    #[arg(long, allow_negative_numbers = true, help = "Loan amount, used with --mode by-principal")]
    pub principal: Option<f64>,
    #[arg(
        long,
        allow_negative_numbers = true,
        help = "Target monthly payment, used with --mode by-payment"
    )]
    pub monthly_payment: Option<f64>,
    #[arg(long, allow_negative_numbers = true, help = "Annual interest rate in percent, e.g. 5")]
    pub annual_rate: Option<f64>,
    #[arg(long, allow_negative_numbers = true, default_value_t = defaults::MORTGAGE_YEARS)]
    pub years: f64,
}

impl MortgageArgs {
    fn inputs(&self) -> Result<MortgageInputs, CalcError> {
        let mode = MortgageMode::from(self.mode);
        let annual_rate_percent = required("annualRate", self.annual_rate)?;
        let amount = match mode {
            MortgageMode::ByPrincipal => required("principal", self.principal)?,
            MortgageMode::ByPayment => required("monthlyPayment", self.monthly_payment)?,
        };
        Ok(MortgageInputs {
            mode,
            amount,
            annual_rate_percent,
            years: self.years,
        })
    }
}

#[derive(Args, Debug)]
pub struct LoanArgs {
    #[arg(long, allow_negative_numbers = true)]
    pub principal: Option<f64>,
    #[arg(long, allow_negative_numbers = true, help = "Annual interest rate in percent")]
    pub annual_rate: Option<f64>,
    #[arg(long, allow_negative_numbers = true, default_value_t = defaults::LOAN_YEARS)]
    pub years: f64,
    #[arg(long, value_enum, default_value_t = CliLoanType::Fixed)]
    pub loan_type: CliLoanType,
}

impl LoanArgs {
    fn inputs(&self) -> Result<LoanInputs, CalcError> {
        Ok(LoanInputs {
            principal: required("principal", self.principal)?,
            annual_rate_percent: required("annualRate", self.annual_rate)?,
            years: self.years,
            loan_type: self.loan_type.into(),
        })
    }
}

#[derive(Args, Debug)]
pub struct PensionArgs {
    #[arg(long, allow_negative_numbers = true)]
    pub monthly_salary: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub current_age: Option<f64>,
    #[arg(long, allow_negative_numbers = true, default_value_t = defaults::PENSION_RETIREMENT_AGE)]
    pub retirement_age: f64,
}

impl PensionArgs {
    fn inputs(&self) -> Result<PensionInputs, CalcError> {
        Ok(PensionInputs {
            monthly_salary: required("monthlySalary", self.monthly_salary)?,
            current_age: required("currentAge", self.current_age)?,
            retirement_age: self.retirement_age,
        })
    }
}

#[derive(Args, Debug)]
pub struct TaxArgs {
    #[arg(long, allow_negative_numbers = true, help = "Gross monthly salary")]
    pub monthly_income: Option<f64>,
}

#[derive(Args, Debug)]
pub struct InvestmentArgs {
    #[arg(long, allow_negative_numbers = true, default_value_t = 0.0)]
    pub initial_investment: f64,
    #[arg(long, allow_negative_numbers = true, default_value_t = 0.0)]
    pub monthly_contribution: f64,
    #[arg(long, allow_negative_numbers = true, help = "Annual return in percent")]
    pub annual_rate: Option<f64>,
    #[arg(long, allow_negative_numbers = true, default_value_t = defaults::INVESTMENT_YEARS)]
    pub years: f64,
}

#[derive(Args, Debug)]
pub struct CompoundInterestArgs {
    #[arg(long, allow_negative_numbers = true, default_value_t = 0.0)]
    pub initial_deposit: f64,
    #[arg(long, allow_negative_numbers = true, default_value_t = 0.0)]
    pub monthly_deposit: f64,
    #[arg(
        long,
        default_value_t = 0.0,
        allow_negative_numbers = true,
        help = "Expected annual return in percent"
    )]
    pub annual_return: f64,
    #[arg(long, allow_negative_numbers = true, default_value_t = defaults::COMPOUND_YEARS)]
    pub years: f64,
    #[arg(
        long,
        allow_negative_numbers = true,
        default_value_t = 0.0,
        help = "Annual management fee in percent of balance"
    )]
    pub management_fee: f64,
}

#[derive(Args, Debug)]
pub struct LifeInsuranceArgs {
    #[arg(long, allow_negative_numbers = true)]
    pub age: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub coverage_amount: Option<f64>,
    #[arg(long, allow_negative_numbers = true, default_value_t = defaults::LIFE_INSURANCE_YEARS)]
    pub years: f64,
}

#[derive(Args, Debug)]
pub struct HealthInsuranceArgs {
    #[arg(long, allow_negative_numbers = true)]
    pub age: Option<f64>,
    #[arg(long, allow_negative_numbers = true, default_value_t = defaults::HEALTH_FAMILY_SIZE)]
    pub family_size: f64,
    #[arg(long, value_enum, default_value_t = CliCoverageTier::Standard)]
    pub coverage_tier: CliCoverageTier,
}

/// Runs one calculator and renders its result as pretty-printed JSON.
pub fn run_calculation(command: &CalcCommand) -> Result<String, CliError> {
    let rendered = match command {
        CalcCommand::Mortgage(args) => {
            serde_json::to_string_pretty(&calculate_mortgage(&args.inputs()?)?)?
        }
        CalcCommand::Loan(args) => serde_json::to_string_pretty(&calculate_loan(&args.inputs()?)?)?,
        CalcCommand::Pension(args) => {
            serde_json::to_string_pretty(&calculate_pension(&args.inputs()?)?)?
        }
        CalcCommand::Tax(args) => {
            let inputs = TaxInputs {
                monthly_income: required("monthlyIncome", args.monthly_income)?,
            };
            serde_json::to_string_pretty(&calculate_tax(&inputs)?)?
        }
        CalcCommand::Investment(args) => {
            let inputs = InvestmentInputs {
                initial_investment: args.initial_investment,
                monthly_contribution: args.monthly_contribution,
                annual_rate_percent: required("annualRate", args.annual_rate)?,
                years: args.years,
            };
            serde_json::to_string_pretty(&calculate_investment(&inputs)?)?
        }
        CalcCommand::CompoundInterest(args) => {
            let inputs = CompoundInterestInputs {
                initial_deposit: args.initial_deposit,
                monthly_deposit: args.monthly_deposit,
                annual_return_percent: args.annual_return,
                years: args.years,
                management_fee_percent: args.management_fee,
            };
            serde_json::to_string_pretty(&calculate_compound_interest(&inputs)?)?
        }
        CalcCommand::LifeInsurance(args) => {
            let inputs = LifeInsuranceInputs {
                age: required("age", args.age)?,
                coverage_amount: required("coverageAmount", args.coverage_amount)?,
                years: args.years,
            };
            serde_json::to_string_pretty(&calculate_life_insurance(&inputs)?)?
        }
        CalcCommand::HealthInsurance(args) => {
            let inputs = HealthInsuranceInputs {
                age: required("age", args.age)?,
                family_size: args.family_size,
                coverage_tier: args.coverage_tier.into(),
            };
            serde_json::to_string_pretty(&calculate_health_insurance(&inputs)?)?
        }
    };
    Ok(rendered)
}
