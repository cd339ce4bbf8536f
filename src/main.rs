use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use pvn_core::NarrativeService;
use pvn_types::{
    CaseNarrative, CaseRecord, ErrorResponse, GenerateRequest, GenerateResponse, HealthResponse,
    ValidateResponse,
};

/// Application state shared across REST API handlers
#[derive(Clone)]
struct AppState {
    narrative_service: NarrativeService,
}

#[derive(OpenApi)]
#[openapi(
    paths(health, generate, validate),
    components(schemas(
        HealthResponse,
        GenerateRequest,
        GenerateResponse,
        CaseNarrative,
        CaseRecord,
        ValidateResponse,
        ErrorResponse
    ))
)]
struct ApiDoc;

/// Main entry point for the pvn narrative service
///
/// Starts the REST server with Swagger documentation at `/swagger-ui`.
///
/// # Environment Variables
/// - `PVN_REST_ADDR`: REST server address (default: "0.0.0.0:5000")
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive("pvn=info".parse()?))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr = std::env::var("PVN_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:5000".into());
    tracing::info!("++ Starting pvn REST on {}", rest_addr);

    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, app()).await?;

    Ok(())
}

/// Builds the REST router; separate from `main` so tests can drive it.
fn app() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/generate", post(generate))
        .route("/validate", post(validate))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(AppState {
            narrative_service: NarrativeService::new(),
        })
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthResponse)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks.
async fn health(State(_state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        message: "pvn is alive".into(),
    })
}

#[utoipa::path(
    post,
    path = "/generate",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "One narrative per case", body = GenerateResponse),
        (status = 400, description = "Empty batch", body = ErrorResponse)
    )
)]
/// Generate case narratives from a flat record batch
///
/// Records are grouped by regulatory identifier; each case yields one
/// narrative. A case whose synthesis fails still appears in the results,
/// carrying an error placeholder narrative, so one bad case never hides
/// the others.
///
/// # Returns
/// * `Ok(Json<GenerateResponse>)` - Narratives in first-seen case order
/// * `Err((StatusCode, Json<ErrorResponse>))` - 400 when the batch is empty
async fn generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, (StatusCode, Json<ErrorResponse>)> {
    if request.data.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "No data provided".into(),
            }),
        ));
    }

    let results = state.narrative_service.generate_batch(request.data);
    Ok(Json(GenerateResponse { results }))
}

#[utoipa::path(
    post,
    path = "/validate",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Validation findings", body = ValidateResponse)
    )
)]
/// Check a record batch for missing required fields
///
/// Reports one finding per missing field with 1-based row numbers. An empty
/// batch is reported as invalid rather than rejected.
async fn validate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Json<ValidateResponse> {
    if request.data.is_empty() {
        return Json(ValidateResponse {
            valid: false,
            errors: vec!["No data provided".into()],
        });
    }

    let errors = state.narrative_service.validate_batch(&request.data);
    Json(ValidateResponse {
        valid: errors.is_empty(),
        errors,
    })
}
