//! # API REST
//!
//! REST API for the ADE risk engine.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON bodies, status codes, CORS)
//!
//! Uses `api-shared` for wire types and boundary validation; all scoring is delegated to
//! `ade-core`.

#![warn(rust_2018_idioms)]

use std::sync::Arc;

use ade_core::{assess, lookup_interaction, race_adjustment_from_env_value, CoreConfig, ScoringPolicy};
use api_shared::{
    patient_factors_from_request, CalculateReq, CalculateRes, HealthRes, HealthService,
    InteractionReq, InteractionRes,
};
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Default bind address, matching the port the dashboard collaborator expects.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:8000";

/// Application state shared across REST API handlers
///
/// Holds the configuration resolved at startup. Handlers never read the environment.
#[derive(Clone)]
pub struct AppState {
    cfg: Arc<CoreConfig>,
}

#[derive(OpenApi)]
#[openapi(
    paths(health, calculate, interaction),
    components(schemas(HealthRes, CalculateReq, CalculateRes, InteractionReq, InteractionRes))
)]
pub struct ApiDoc;

/// Resolve the core configuration from environment variables.
///
/// Intended to be called once at startup.
///
/// # Environment Variables
/// - `ADE_RACE_ADJUSTMENT`: keep the race-based AKI weight (default: "true")
///
/// # Errors
/// Returns an error if `ADE_RACE_ADJUSTMENT` is set to something other than a boolean.
pub fn core_config_from_env() -> anyhow::Result<CoreConfig> {
    let race_adjustment =
        race_adjustment_from_env_value(std::env::var("ADE_RACE_ADJUSTMENT").ok())?;
    if !race_adjustment {
        tracing::info!("race-based AKI adjustment disabled");
    }
    Ok(CoreConfig::new(ScoringPolicy { race_adjustment }))
}

/// Build the REST router.
///
/// Routes:
/// - `GET /health`
/// - `POST /calculate`
/// - `POST /interaction`
/// - Swagger UI at `/swagger-ui`, OpenAPI document at `/api-docs/openapi.json`
pub fn router(cfg: Arc<CoreConfig>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/calculate", post(calculate))
        .route("/interaction", post(interaction))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(AppState { cfg })
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    post,
    path = "/calculate",
    request_body = CalculateReq,
    responses(
        (status = 200, description = "Risk scores and primary alert", body = CalculateRes),
        (status = 400, description = "Invalid patient factors"),
        (status = 422, description = "Malformed request body")
    )
)]
/// Score a patient snapshot
///
/// Validates the submitted factors, runs all four scorers and returns the scores together with
/// the primary alert, its level and rationale.
///
/// # Errors
/// Returns `400 Bad Request` if:
/// - age is outside 18..=100,
/// - a numeric field is out of range or not finite,
/// - gender or race is unrecognised.
#[axum::debug_handler]
async fn calculate(
    State(state): State<AppState>,
    Json(req): Json<CalculateReq>,
) -> Result<Json<CalculateRes>, (StatusCode, String)> {
    let factors = match patient_factors_from_request(&req) {
        Ok(factors) => factors,
        Err(e) => {
            tracing::warn!("Rejected calculate request: {}", e);
            return Err((StatusCode::BAD_REQUEST, e.to_string()));
        }
    };

    let assessment = assess(&factors, state.cfg.scoring_policy());
    if !assessment.is_manageable() {
        tracing::info!(
            primary = %assessment.primary.category,
            level = %assessment.primary.level,
            "actionable risk alert"
        );
    }

    Ok(Json(CalculateRes::from(&assessment)))
}

#[utoipa::path(
    post,
    path = "/interaction",
    request_body = InteractionReq,
    responses(
        (status = 200, description = "Interaction lookup result", body = InteractionRes)
    )
)]
/// Check two drugs for a known interaction
///
/// Names are matched case-insensitively in either order. Unknown pairs return
/// "No major interaction found." rather than an error.
#[axum::debug_handler]
async fn interaction(
    State(_state): State<AppState>,
    Json(req): Json<InteractionReq>,
) -> Json<InteractionRes> {
    let result = lookup_interaction(&req.drug1, &req.drug2);
    Json(InteractionRes::from_lookup(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ade_core::NO_INTERACTION;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    fn app() -> Router {
        router(Arc::new(CoreConfig::default()))
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), 65536)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_is_ok() {
        let req = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(req).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["ok"], true);
    }

    #[tokio::test]
    async fn test_calculate_high_risk_patient() {
        let payload = serde_json::json!({
            "age": 78, "gender": "Female", "weight": 55, "inr": 4.1,
            "on_anticoag": true, "hist_gi_bleed": true, "uncontrolled_bp": true,
            "on_antiplatelet": true, "smoking_calc": true, "alcohol_use": true,
            "antibiotic_order": true, "liver_disease": true, "prior_stroke": true,
            "on_insulin": true, "impaired_renal": true, "high_hba1c": true,
            "recent_dka": true, "active_chemo": true
        });
        let response = app().oneshot(post_json("/calculate", payload)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["bleeding_risk"], 100);
        assert_eq!(body["hypoglycemic_risk"], 100);
        assert_eq!(body["primary_alert"], "Bleeding");
        assert_eq!(body["primary_score"], 100);
        assert_eq!(body["alert_level"], "CRITICAL");
        // stroke 25 + chemo 30 + DKA 20 + liver 15 + smoking 10 + BP 10 = 110
        assert_eq!(body["fragility_index"], 100);
    }

    #[tokio::test]
    async fn test_calculate_defaults_give_manageable_patient() {
        let payload = serde_json::json!({ "age": 60, "gender": "Male", "weight": 70 });
        let response = app().oneshot(post_json("/calculate", payload)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["aki_risk"], 0);
        assert_eq!(body["primary_score"], 0);
        assert_eq!(body["alert_level"], "MANAGEABLE");
    }

    #[tokio::test]
    async fn test_calculate_respects_disabled_race_adjustment() {
        let payload = serde_json::json!({
            "age": 60, "gender": "Male", "weight": 70, "race": "Non-Hispanic Black"
        });

        let with = app()
            .oneshot(post_json("/calculate", payload.clone()))
            .await
            .unwrap();
        assert_eq!(json_body(with).await["aki_risk"], 15);

        let cfg = CoreConfig::new(ScoringPolicy::without_demographic_proxies());
        let without = router(Arc::new(cfg))
            .oneshot(post_json("/calculate", payload))
            .await
            .unwrap();
        assert_eq!(json_body(without).await["aki_risk"], 0);
    }

    #[tokio::test]
    async fn test_calculate_rejects_out_of_range_age() {
        let payload = serde_json::json!({ "age": 17, "gender": "Male", "weight": 70 });
        let response = app().oneshot(post_json("/calculate", payload)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_calculate_rejects_missing_required_field() {
        let payload = serde_json::json!({ "age": 60, "gender": "Male" });
        let response = app().oneshot(post_json("/calculate", payload)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_interaction_is_symmetric() {
        let forward = app()
            .oneshot(post_json(
                "/interaction",
                serde_json::json!({ "drug1": "Warfarin", "drug2": "Amiodarone" }),
            ))
            .await
            .unwrap();
        let reverse = app()
            .oneshot(post_json(
                "/interaction",
                serde_json::json!({ "drug1": "amiodarone", "drug2": " WARFARIN " }),
            ))
            .await
            .unwrap();

        let forward = json_body(forward).await;
        assert_eq!(forward, json_body(reverse).await);
        assert_eq!(forward["severity"], "Major");
    }

    #[tokio::test]
    async fn test_interaction_unknown_pair() {
        let response = app()
            .oneshot(post_json(
                "/interaction",
                serde_json::json!({ "drug1": "Aspirin", "drug2": "Metformin" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["result"], NO_INTERACTION);
        assert!(body["severity"].is_null());
    }
}
