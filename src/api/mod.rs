use axum::{
    Router,
    extract::{
        Json, Query,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{MethodRouter, get},
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use crate::core::{
    CalcResult, CompoundInterestInputs, CompoundInterestResult, CoverageTier,
    HealthInsuranceInputs, HealthInsuranceResult, InvestmentInputs, InvestmentResult,
    LifeInsuranceInputs, LifeInsuranceResult, LoanInputs, LoanResult, LoanType, MortgageInputs,
    MortgageMode, MortgageResult, PensionInputs, PensionResult, TaxInputs, TaxResult,
    calculate_compound_interest, calculate_health_insurance, calculate_investment,
    calculate_life_insurance, calculate_loan, calculate_mortgage, calculate_pension,
    calculate_tax, required,
};
use crate::defaults;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum ApiMortgageMode {
    #[serde(alias = "loan", alias = "byPrincipal", alias = "by_principal")]
    ByPrincipal,
    #[serde(alias = "payment", alias = "byPayment", alias = "by_payment")]
    ByPayment,
}

impl From<ApiMortgageMode> for MortgageMode {
    fn from(value: ApiMortgageMode) -> Self {
        match value {
            ApiMortgageMode::ByPrincipal => MortgageMode::ByPrincipal,
            ApiMortgageMode::ByPayment => MortgageMode::ByPayment,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum ApiLoanType {
    Fixed,
    Variable,
}

impl From<ApiLoanType> for LoanType {
    fn from(value: ApiLoanType) -> Self {
        match value {
            ApiLoanType::Fixed => LoanType::Fixed,
            ApiLoanType::Variable => LoanType::Variable,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum ApiCoverageTier {
    Basic,
    Standard,
    Premium,
}

impl From<ApiCoverageTier> for CoverageTier {
    fn from(value: ApiCoverageTier) -> Self {
        match value {
            ApiCoverageTier::Basic => CoverageTier::Basic,
            ApiCoverageTier::Standard => CoverageTier::Standard,
            ApiCoverageTier::Premium => CoverageTier::Premium,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct MortgagePayload {
    mode: Option<ApiMortgageMode>,
    principal: Option<f64>,
    monthly_payment: Option<f64>,
    annual_rate: Option<f64>,
    years: Option<f64>,
}

impl MortgagePayload {
    fn into_inputs(self) -> CalcResult<MortgageInputs> {
        let mode = self.mode.map(MortgageMode::from).unwrap_or(MortgageMode::ByPrincipal);
        let annual_rate_percent = required("annualRate", self.annual_rate)?;
        let years = self.years.unwrap_or(defaults::MORTGAGE_YEARS);
        let amount = match mode {
            MortgageMode::ByPrincipal => required("principal", self.principal)?,
            MortgageMode::ByPayment => required("monthlyPayment", self.monthly_payment)?,
        };
        Ok(MortgageInputs {
            mode,
            amount,
            annual_rate_percent,
            years,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct LoanPayload {
    principal: Option<f64>,
    annual_rate: Option<f64>,
    years: Option<f64>,
    loan_type: Option<ApiLoanType>,
}

impl LoanPayload {
    fn into_inputs(self) -> CalcResult<LoanInputs> {
        Ok(LoanInputs {
            principal: required("principal", self.principal)?,
            annual_rate_percent: required("annualRate", self.annual_rate)?,
            years: self.years.unwrap_or(defaults::LOAN_YEARS),
            loan_type: self.loan_type.map(LoanType::from).unwrap_or(LoanType::Fixed),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct PensionPayload {
    monthly_salary: Option<f64>,
    current_age: Option<f64>,
    retirement_age: Option<f64>,
}

impl PensionPayload {
    fn into_inputs(self) -> CalcResult<PensionInputs> {
        Ok(PensionInputs {
            monthly_salary: required("monthlySalary", self.monthly_salary)?,
            current_age: required("currentAge", self.current_age)?,
            retirement_age: self
                .retirement_age
                .unwrap_or(defaults::PENSION_RETIREMENT_AGE),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct TaxPayload {
    monthly_income: Option<f64>,
}

impl TaxPayload {
    fn into_inputs(self) -> CalcResult<TaxInputs> {
        Ok(TaxInputs {
            monthly_income: required("monthlyIncome", self.monthly_income)?,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct InvestmentPayload {
    initial_investment: Option<f64>,
    monthly_contribution: Option<f64>,
    annual_rate: Option<f64>,
    years: Option<f64>,
}

impl InvestmentPayload {
    fn into_inputs(self) -> CalcResult<InvestmentInputs> {
        Ok(InvestmentInputs {
            initial_investment: self.initial_investment.unwrap_or(0.0),
            monthly_contribution: self.monthly_contribution.unwrap_or(0.0),
            annual_rate_percent: required("annualRate", self.annual_rate)?,
            years: self.years.unwrap_or(defaults::INVESTMENT_YEARS),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct CompoundInterestPayload {
    initial_deposit: Option<f64>,
    monthly_deposit: Option<f64>,
    annual_return: Option<f64>,
    years: Option<f64>,
    management_fee: Option<f64>,
}

impl CompoundInterestPayload {
    fn into_inputs(self) -> CalcResult<CompoundInterestInputs> {
        Ok(CompoundInterestInputs {
            initial_deposit: self.initial_deposit.unwrap_or(0.0),
            monthly_deposit: self.monthly_deposit.unwrap_or(0.0),
            annual_return_percent: self.annual_return.unwrap_or(0.0),
            years: self.years.unwrap_or(defaults::COMPOUND_YEARS),
            management_fee_percent: self.management_fee.unwrap_or(0.0),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct LifeInsurancePayload {
    age: Option<f64>,
    coverage_amount: Option<f64>,
    years: Option<f64>,
}

impl LifeInsurancePayload {
    fn into_inputs(self) -> CalcResult<LifeInsuranceInputs> {
        Ok(LifeInsuranceInputs {
            age: required("age", self.age)?,
            coverage_amount: required("coverageAmount", self.coverage_amount)?,
            years: self.years.unwrap_or(defaults::LIFE_INSURANCE_YEARS),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct HealthInsurancePayload {
    age: Option<f64>,
    family_size: Option<f64>,
    coverage_tier: Option<ApiCoverageTier>,
}

impl HealthInsurancePayload {
    fn into_inputs(self) -> CalcResult<HealthInsuranceInputs> {
        Ok(HealthInsuranceInputs {
            age: required("age", self.age)?,
            family_size: self.family_size.unwrap_or(defaults::HEALTH_FAMILY_SIZE),
            coverage_tier: self
                .coverage_tier
                .map(CoverageTier::from)
                .unwrap_or(CoverageTier::Standard),
        })
    }
}

/// A request body accepted by one calculator route.
trait CalculatorPayload: DeserializeOwned + Send + 'static {
    const ID: &'static str;
    const TITLE: &'static str;
    const ROUTE: &'static str;
    type Output: Serialize;

    fn calculate(self) -> CalcResult<Self::Output>;
}

impl CalculatorPayload for MortgagePayload {
    const ID: &'static str = "mortgage";
    const TITLE: &'static str = "מחשבון משכנתא";
    const ROUTE: &'static str = "/api/mortgage";
    type Output = MortgageResult;

    fn calculate(self) -> CalcResult<MortgageResult> {
        calculate_mortgage(&self.into_inputs()?)
    }
}

impl CalculatorPayload for LoanPayload {
    const ID: &'static str = "loan";
    const TITLE: &'static str = "מחשבון הלוואות";
    const ROUTE: &'static str = "/api/loan";
    type Output = LoanResult;

    fn calculate(self) -> CalcResult<LoanResult> {
        calculate_loan(&self.into_inputs()?)
    }
}

impl CalculatorPayload for PensionPayload {
    const ID: &'static str = "pension";
    const TITLE: &'static str = "מחשבון פנסיה";
    const ROUTE: &'static str = "/api/pension";
    type Output = PensionResult;

    fn calculate(self) -> CalcResult<PensionResult> {
        calculate_pension(&self.into_inputs()?)
    }
}

impl CalculatorPayload for TaxPayload {
    const ID: &'static str = "tax";
    const TITLE: &'static str = "מחשבון מס הכנסה";
    const ROUTE: &'static str = "/api/tax";
    type Output = TaxResult;

    fn calculate(self) -> CalcResult<TaxResult> {
        calculate_tax(&self.into_inputs()?)
    }
}

impl CalculatorPayload for InvestmentPayload {
    const ID: &'static str = "investment";
    const TITLE: &'static str = "מחשבון השקעות";
    const ROUTE: &'static str = "/api/investment";
    type Output = InvestmentResult;

    fn calculate(self) -> CalcResult<InvestmentResult> {
        calculate_investment(&self.into_inputs()?)
    }
}

impl CalculatorPayload for CompoundInterestPayload {
    const ID: &'static str = "compound-interest";
    const TITLE: &'static str = "מחשבון ריבית דריבית";
    const ROUTE: &'static str = "/api/compound-interest";
    type Output = CompoundInterestResult;

    fn calculate(self) -> CalcResult<CompoundInterestResult> {
        calculate_compound_interest(&self.into_inputs()?)
    }
}

impl CalculatorPayload for LifeInsurancePayload {
    const ID: &'static str = "life-insurance";
    const TITLE: &'static str = "מחשבון ביטוח חיים";
    const ROUTE: &'static str = "/api/life-insurance";
    type Output = LifeInsuranceResult;

    fn calculate(self) -> CalcResult<LifeInsuranceResult> {
        calculate_life_insurance(&self.into_inputs()?)
    }
}

impl CalculatorPayload for HealthInsurancePayload {
    const ID: &'static str = "health-insurance";
    const TITLE: &'static str = "מחשבון ביטוח בריאות";
    const ROUTE: &'static str = "/api/health-insurance";
    type Output = HealthInsuranceResult;

    fn calculate(self) -> CalcResult<HealthInsuranceResult> {
        calculate_health_insurance(&self.into_inputs()?)
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
struct CalculatorInfo {
    id: &'static str,
    title: &'static str,
    route: &'static str,
}

impl CalculatorInfo {
    fn of<P: CalculatorPayload>() -> Self {
        Self {
            id: P::ID,
            title: P::TITLE,
            route: P::ROUTE,
        }
    }
}

fn catalog() -> Vec<CalculatorInfo> {
    vec![
        CalculatorInfo::of::<MortgagePayload>(),
        CalculatorInfo::of::<PensionPayload>(),
        CalculatorInfo::of::<TaxPayload>(),
        CalculatorInfo::of::<LifeInsurancePayload>(),
        CalculatorInfo::of::<LoanPayload>(),
        CalculatorInfo::of::<HealthInsurancePayload>(),
        CalculatorInfo::of::<CompoundInterestPayload>(),
        CalculatorInfo::of::<InvestmentPayload>(),
    ]
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<&'static str>,
}

pub fn router() -> Router {
    Router::new()
        .route("/api/calculators", get(catalog_handler))
        .route(MortgagePayload::ROUTE, calculator_route::<MortgagePayload>())
        .route(LoanPayload::ROUTE, calculator_route::<LoanPayload>())
        .route(PensionPayload::ROUTE, calculator_route::<PensionPayload>())
        .route(TaxPayload::ROUTE, calculator_route::<TaxPayload>())
        .route(InvestmentPayload::ROUTE, calculator_route::<InvestmentPayload>())
        .route(
            CompoundInterestPayload::ROUTE,
            calculator_route::<CompoundInterestPayload>(),
        )
        .route(
            LifeInsurancePayload::ROUTE,
            calculator_route::<LifeInsurancePayload>(),
        )
        .route(
            HealthInsurancePayload::ROUTE,
            calculator_route::<HealthInsurancePayload>(),
        )
        .fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;
    info!("fincalc HTTP API listening on http://{addr}");
    info!("Local access: http://127.0.0.1:{port}/api/calculators");

    axum::serve(listener, router()).await
}

fn calculator_route<P: CalculatorPayload>() -> MethodRouter {
    get(query_handler::<P>).post(json_handler::<P>)
}

async fn catalog_handler() -> Response {
    json_response(StatusCode::OK, catalog())
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found", None)
}

async fn query_handler<P: CalculatorPayload>(
    payload: Result<Query<P>, QueryRejection>,
) -> Response {
    match payload {
        Ok(Query(payload)) => calculate_response(payload),
        Err(rejection) => {
            warn!(
                calculator = P::ID,
                status = %rejection.status(),
                error = %rejection,
                "malformed query"
            );
            error_response(StatusCode::BAD_REQUEST, &rejection.body_text(), None)
        }
    }
}

async fn json_handler<P: CalculatorPayload>(payload: Result<Json<P>, JsonRejection>) -> Response {
    match payload {
        Ok(Json(payload)) => calculate_response(payload),
        Err(rejection) => {
            warn!(
                calculator = P::ID,
                status = %rejection.status(),
                error = %rejection,
                "malformed JSON payload"
            );
            error_response(StatusCode::BAD_REQUEST, &rejection.body_text(), None)
        }
    }
}

fn calculate_response<P: CalculatorPayload>(payload: P) -> Response {
    match payload.calculate() {
        Ok(result) => {
            debug!(calculator = P::ID, "calculation complete");
            json_response(StatusCode::OK, result)
        }
        Err(err) => {
            warn!(calculator = P::ID, field = err.field(), error = %err, "rejected input");
            error_response(StatusCode::BAD_REQUEST, &err.to_string(), Some(err.field()))
        }
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        header::HeaderValue::from_static("no-store"),
    );
    response
}

fn error_response(status: StatusCode, msg: &str, field: Option<&'static str>) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
            field,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CalcError, InvalidReason};
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    const EPS: f64 = 1e-6;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    fn payload_from_json<P: DeserializeOwned>(json: &str) -> P {
        serde_json::from_str(json).expect("json should parse")
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body should collect")
            .to_bytes();
        serde_json::from_slice(&bytes).expect("body should be JSON")
    }

    async fn send(request: Request<Body>) -> Response {
        router().oneshot(request).await.expect("router is infallible")
    }

    fn post_json(uri: &str, json: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("valid request")
    }

    fn get_uri(uri: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("valid request")
    }

    #[test]
    fn mortgage_payload_parses_web_keys_and_defaults_term() {
        let payload: MortgagePayload =
            payload_from_json(r#"{ "principal": 1000000, "annualRate": 5 }"#);
        let inputs = payload.into_inputs().expect("valid payload");
        assert_eq!(inputs.mode, MortgageMode::ByPrincipal);
        assert_approx(inputs.amount, 1_000_000.0);
        assert_approx(inputs.annual_rate_percent, 5.0);
        assert_approx(inputs.years, defaults::MORTGAGE_YEARS);
    }

    #[test]
    fn mortgage_payment_mode_reads_monthly_payment() {
        let payload: MortgagePayload = payload_from_json(
            r#"{ "mode": "payment", "monthlyPayment": 5368, "principal": 1, "annualRate": 5, "years": 25 }"#,
        );
        let inputs = payload.into_inputs().expect("valid payload");
        assert_eq!(inputs.mode, MortgageMode::ByPayment);
        assert_approx(inputs.amount, 5_368.0);
        assert_approx(inputs.years, 25.0);
    }

    #[test]
    fn missing_required_field_is_invalid_input() {
        let payload: MortgagePayload = payload_from_json(r#"{ "principal": 1000000 }"#);
        let err = payload.into_inputs().expect_err("rate is required");
        assert_eq!(err, CalcError::invalid("annualRate", InvalidReason::Missing));

        let payload: TaxPayload = payload_from_json("{}");
        let err = payload.into_inputs().expect_err("income is required");
        assert_eq!(err.to_string(), "monthlyIncome is required");
    }

    #[test]
    fn loan_payload_defaults_to_fixed_five_years() {
        let payload: LoanPayload = payload_from_json(r#"{ "principal": 100000, "annualRate": 6 }"#);
        let inputs = payload.into_inputs().expect("valid payload");
        assert_eq!(inputs.loan_type, LoanType::Fixed);
        assert_approx(inputs.years, defaults::LOAN_YEARS);

        let payload: LoanPayload = payload_from_json(
            r#"{ "principal": 100000, "annualRate": 6, "loanType": "variable" }"#,
        );
        assert_eq!(
            payload.into_inputs().expect("valid payload").loan_type,
            LoanType::Variable
        );
    }

    #[test]
    fn optional_savings_fields_default_to_zero() {
        let payload: CompoundInterestPayload = payload_from_json("{}");
        let inputs = payload.into_inputs().expect("all fields optional");
        assert_approx(inputs.initial_deposit, 0.0);
        assert_approx(inputs.monthly_deposit, 0.0);
        assert_approx(inputs.annual_return_percent, 0.0);
        assert_approx(inputs.management_fee_percent, 0.0);
        assert_approx(inputs.years, defaults::COMPOUND_YEARS);

        let payload: InvestmentPayload = payload_from_json(r#"{ "annualRate": 6 }"#);
        let inputs = payload.into_inputs().expect("rate given");
        assert_approx(inputs.initial_investment, 0.0);
        assert_approx(inputs.years, defaults::INVESTMENT_YEARS);
    }

    #[test]
    fn insurance_payloads_apply_form_defaults() {
        let payload: LifeInsurancePayload =
            payload_from_json(r#"{ "age": 40, "coverageAmount": 1000000 }"#);
        let inputs = payload.into_inputs().expect("valid payload");
        assert_approx(inputs.years, defaults::LIFE_INSURANCE_YEARS);

        let payload: HealthInsurancePayload = payload_from_json(r#"{ "age": 40 }"#);
        let inputs = payload.into_inputs().expect("valid payload");
        assert_approx(inputs.family_size, defaults::HEALTH_FAMILY_SIZE);
        assert_eq!(inputs.coverage_tier, CoverageTier::Standard);

        let payload: PensionPayload =
            payload_from_json(r#"{ "monthlySalary": 10000, "currentAge": 30 }"#);
        let inputs = payload.into_inputs().expect("valid payload");
        assert_approx(inputs.retirement_age, defaults::PENSION_RETIREMENT_AGE);
    }

    #[test]
    fn catalog_lists_every_route_once() {
        let entries = catalog();
        assert_eq!(entries.len(), 8);
        let mut routes: Vec<_> = entries.iter().map(|entry| entry.route).collect();
        routes.sort_unstable();
        routes.dedup();
        assert_eq!(routes.len(), 8);
        assert!(entries.iter().all(|entry| entry.route.starts_with("/api/")));
    }

    #[tokio::test]
    async fn post_tax_returns_result_record() {
        let response = send(post_json("/api/tax", r#"{ "monthlyIncome": 10000 }"#)).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::CACHE_CONTROL)
                .and_then(|v| v.to_str().ok()),
            Some("no-store")
        );

        let json = body_json(response).await;
        assert_eq!(json["annualTax"], 13_459);
        assert_eq!(json["monthlyTax"], 1_122);
        assert_eq!(json["effectiveTaxRate"], 11.2);
    }

    #[tokio::test]
    async fn get_mortgage_reads_query_string() {
        let response = send(get_uri("/api/mortgage?principal=1000000&annualRate=5&years=30")).await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["monthlyPayment"], 5_368);
        assert_eq!(json["principal"], 1_000_000);
    }

    #[tokio::test]
    async fn get_health_insurance_accepts_tier_names() {
        let response =
            send(get_uri("/api/health-insurance?age=45&familySize=3&coverageTier=premium")).await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["monthlyPremium"], 650);
        assert_eq!(json["coverageTier"], "premium");
        assert_eq!(json["coverageDetails"]["hospitalization"], 1_000_000);
    }

    #[tokio::test]
    async fn compound_interest_returns_yearly_breakdown() {
        let response = send(post_json(
            "/api/compound-interest",
            r#"{ "initialDeposit": 10000, "monthlyDeposit": 1000, "annualReturn": 5, "years": 3, "managementFee": 1 }"#,
        ))
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["finalAmount"], 50_152);
        assert_eq!(json["futureValue"], 51_298);
        let rows = json["yearlyBreakdown"].as_array().expect("breakdown array");
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0]["savingsAfterFees"], 22_869);
    }

    #[tokio::test]
    async fn invalid_input_is_reported_with_field() {
        let response = send(post_json(
            "/api/life-insurance",
            r#"{ "age": 80, "coverageAmount": 500000 }"#,
        ))
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["field"], "age");
        assert_eq!(json["error"], "age must be between 18 and 70");
    }

    #[tokio::test]
    async fn non_numeric_field_is_rejected() {
        let response = send(post_json("/api/loan", r#"{ "principal": "lots", "annualRate": 5 }"#)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert!(json["error"].as_str().is_some_and(|msg| !msg.is_empty()));
        assert!(json.get("field").is_none());

        let response = send(get_uri("/api/loan?principal=lots&annualRate=5")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn post_without_content_type_is_bad_request() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/tax")
            .body(Body::from(r#"{ "monthlyIncome": 10000 }"#))
            .expect("valid request");
        let response = send(request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert!(json["error"].as_str().is_some_and(|msg| !msg.is_empty()));
    }

    #[tokio::test]
    async fn negative_investment_rate_is_accepted() {
        let response = send(post_json(
            "/api/investment",
            r#"{ "initialInvestment": 10000, "monthlyContribution": 100, "annualRate": -2 }"#,
        ))
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["futureValue"], 19_070);
    }

    #[tokio::test]
    async fn catalog_route_lists_calculators() {
        let response = send(get_uri("/api/calculators")).await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let entries = json.as_array().expect("catalog array");
        assert_eq!(entries.len(), 8);
        assert_eq!(entries[0]["id"], "mortgage");
        assert_eq!(entries[0]["title"], "מחשבון משכנתא");
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let response = send(get_uri("/api/nope")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Not found");
    }
}
