// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use clap::Parser;
use pressrun::{AllowedOptions, CombinationReport, RawOrderInput};
use pressrun_api::{
    AllowedOptionsRequest, ApiError, MatrixSummary, SaveMatrixRequest, SetDiscountsRequest,
    allowed_options, calculate_price, get_discounts, list_matrices, run_health_check, save_matrix,
    set_discounts, validate_combination,
};
use pressrun_domain::{
    HealthFinding, HealthStatus, OrderPriceBreakdown, QuantityDiscountTable, SizeAudit,
};
use pressrun_persistence::{ConfigStore, MatrixRepository};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

/// Pressrun Server - HTTP server for the print-shop pricing service
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// This contains the matrix repository wrapped in a Mutex to allow
/// safe concurrent access.
#[derive(Clone)]
struct AppState {
    /// The repository holding matrices and configuration.
    repository: Arc<Mutex<MatrixRepository>>,
}

/// API response for a price calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CalculateApiResponse {
    /// Success indicator.
    success: bool,
    /// Which engine priced the order.
    engine: String,
    /// The full itemized breakdown.
    breakdown: OrderPriceBreakdown,
}

/// API response for an allowed-options query.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct OptionsApiResponse {
    /// Success indicator.
    success: bool,
    /// The book size the options apply to.
    book_size: String,
    /// Whether a matrix is configured for this size.
    configured: bool,
    /// Whether the matrix is complete enough to take orders.
    orderable: bool,
    /// The selectable options.
    options: AllowedOptions,
}

/// API response for a combination validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ValidateApiResponse {
    /// Success indicator.
    success: bool,
    /// The explainer's verdict.
    report: CombinationReport,
}

/// API response for the configuration health check.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HealthApiResponse {
    /// Success indicator.
    success: bool,
    /// Worst severity across all findings.
    status: HealthStatus,
    /// One finding per check.
    findings: Vec<HealthFinding>,
    /// Per-size audits.
    sizes: Vec<SizeAudit>,
}

/// API response for a matrix save.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SaveMatrixApiResponse {
    /// Success indicator.
    success: bool,
    /// The book size that was saved.
    book_size: String,
    /// A success message.
    message: String,
}

/// API response for the matrix listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ListMatricesApiResponse {
    /// Success indicator.
    success: bool,
    /// One summary per configured book size.
    matrices: Vec<MatrixSummary>,
}

/// API response carrying the quantity discount table.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct DiscountsApiResponse {
    /// Success indicator.
    success: bool,
    /// Threshold quantity to discount percent.
    thresholds: QuantityDiscountTable,
}

/// API response for a discount table replacement.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SetDiscountsApiResponse {
    /// Success indicator.
    success: bool,
    /// Number of thresholds stored.
    threshold_count: usize,
    /// A success message.
    message: String,
}

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Success indicator, always false.
    success: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            success: false,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            ApiError::BusinessRuleRejection { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::Internal { .. } => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: err.to_string(),
            },
        }
    }
}

/// Handler for POST `/pricing/calculate`.
///
/// Prices a raw order with the engine selected by the engine flag.
async fn handle_calculate(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<RawOrderInput>,
) -> Result<Json<CalculateApiResponse>, HttpError> {
    let mut repository = app_state.repository.lock().await;
    let response = calculate_price(&mut repository, req)?;
    drop(repository);

    Ok(Json(CalculateApiResponse {
        success: true,
        engine: response.engine,
        breakdown: response.breakdown,
    }))
}

/// Handler for GET `/pricing/allowed-options`.
///
/// Reports what is still selectable given a partial selection, passed as
/// query parameters so the storefront form can poll it between steps.
async fn handle_allowed_options(
    AxumState(app_state): AxumState<AppState>,
    Query(req): Query<AllowedOptionsRequest>,
) -> Result<Json<OptionsApiResponse>, HttpError> {
    let mut repository = app_state.repository.lock().await;
    let response = allowed_options(&mut repository, req)?;
    drop(repository);

    Ok(Json(OptionsApiResponse {
        success: true,
        book_size: response.book_size,
        configured: response.configured,
        orderable: response.orderable,
        options: response.options,
    }))
}

/// Handler for POST `/pricing/validate`.
///
/// Explains whether a full parameter set would be accepted.
async fn handle_validate(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<RawOrderInput>,
) -> Result<Json<ValidateApiResponse>, HttpError> {
    let mut repository = app_state.repository.lock().await;
    let report: CombinationReport = validate_combination(&mut repository, req)?;
    drop(repository);

    Ok(Json(ValidateApiResponse {
        success: true,
        report,
    }))
}

/// Handler for GET `/pricing/health`.
///
/// Audits the pricing configuration end to end.
async fn handle_health(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<HealthApiResponse>, HttpError> {
    let mut repository = app_state.repository.lock().await;
    let response = run_health_check(&mut repository)?;
    drop(repository);

    Ok(Json(HealthApiResponse {
        success: true,
        status: response.status,
        findings: response.findings,
        sizes: response.sizes,
    }))
}

/// Handler for PUT `/admin/matrix`.
///
/// Stores the pricing matrix for a book size.
async fn handle_save_matrix(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<SaveMatrixRequest>,
) -> Result<Json<SaveMatrixApiResponse>, HttpError> {
    info!(book_size = %req.book_size, "Handling save_matrix request");

    let mut repository = app_state.repository.lock().await;
    let response = save_matrix(&mut repository, req)?;
    drop(repository);

    Ok(Json(SaveMatrixApiResponse {
        success: true,
        book_size: response.book_size,
        message: response.message,
    }))
}

/// Handler for GET `/admin/matrices`.
///
/// Lists every configured matrix with a per-size summary.
async fn handle_list_matrices(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ListMatricesApiResponse>, HttpError> {
    let mut repository = app_state.repository.lock().await;
    let response = list_matrices(&mut repository)?;
    drop(repository);

    Ok(Json(ListMatricesApiResponse {
        success: true,
        matrices: response.matrices,
    }))
}

/// Handler for GET `/admin/discounts`.
///
/// Fetches the quantity discount table.
async fn handle_get_discounts(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<DiscountsApiResponse>, HttpError> {
    let mut repository = app_state.repository.lock().await;
    let response = get_discounts(&mut repository)?;
    drop(repository);

    Ok(Json(DiscountsApiResponse {
        success: true,
        thresholds: response.thresholds,
    }))
}

/// Handler for PUT `/admin/discounts`.
///
/// Replaces the quantity discount table.
async fn handle_set_discounts(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<SetDiscountsRequest>,
) -> Result<Json<SetDiscountsApiResponse>, HttpError> {
    let mut repository = app_state.repository.lock().await;
    let response = set_discounts(&mut repository, req)?;
    drop(repository);

    Ok(Json(SetDiscountsApiResponse {
        success: true,
        threshold_count: response.threshold_count,
        message: response.message,
    }))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/pricing/calculate", post(handle_calculate))
        .route("/pricing/allowed-options", get(handle_allowed_options))
        .route("/pricing/validate", post(handle_validate))
        .route("/pricing/health", get(handle_health))
        .route("/admin/matrix", put(handle_save_matrix))
        .route("/admin/matrices", get(handle_list_matrices))
        .route("/admin/discounts", get(handle_get_discounts))
        .route("/admin/discounts", put(handle_set_discounts))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Pressrun Server");

    // Initialize the store (in-memory or file-based based on CLI argument)
    let store: ConfigStore = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        ConfigStore::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        ConfigStore::new_in_memory()?
    };

    let app_state: AppState = AppState {
        repository: Arc::new(Mutex::new(MatrixRepository::new(store))),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
