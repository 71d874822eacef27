//! Top-level router assembly.
//!
//! Mounts every module router under `/api/v1` and applies the shared
//! middleware stack (tracing, timeout, CORS).

use std::sync::Arc;

use axum::response::Json;
use axum::routing::get;
use axum::Router;
use http::HeaderValue;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::config::ServerConfig;
use crate::domain::course::EnrollmentPolicy;
use crate::ports::{CourseRepository, StudentRepository};

use super::course::{course_router, CourseAppState};
use super::student::{student_router, StudentAppState};

/// Path prefix for every resource route.
pub const API_PREFIX: &str = "/api/v1";

/// Builds the complete application router.
pub fn app_router(
    course_repository: Arc<dyn CourseRepository>,
    student_repository: Arc<dyn StudentRepository>,
    enrollment_policy: EnrollmentPolicy,
    server: &ServerConfig,
) -> Router {
    let courses = course_router().with_state(CourseAppState {
        course_repository,
        student_repository: student_repository.clone(),
        enrollment_policy,
    });
    let students = student_router().with_state(StudentAppState { student_repository });

    Router::new()
        .route("/health", get(health))
        .nest(API_PREFIX, courses.merge(students))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(server))
                .layer(TimeoutLayer::new(server.request_timeout())),
        )
}

/// GET /health
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins = server.cors_origins_list();
    if origins.is_empty() {
        return if server.is_production() {
            CorsLayer::new()
        } else {
            CorsLayer::permissive()
        };
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(Any)
        .allow_headers(Any)
}
