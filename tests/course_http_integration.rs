//! Integration tests for the course and student HTTP endpoints.
//!
//! Requests go through the full router (middleware included) backed by the
//! in-memory store.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use course_registry::adapters::http::app_router;
use course_registry::adapters::storage::InMemoryStore;
use course_registry::config::ServerConfig;
use course_registry::domain::course::EnrollmentPolicy;

// =============================================================================
// Test Infrastructure
// =============================================================================

struct TestApp {
    router: Router,
    store: InMemoryStore,
}

impl TestApp {
    fn new() -> Self {
        Self::with_policy(EnrollmentPolicy::default())
    }

    fn with_policy(policy: EnrollmentPolicy) -> Self {
        let store = InMemoryStore::new();
        let router = app_router(
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            policy,
            &ServerConfig::default(),
        );
        Self { router, store }
    }

    async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, json)
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body)).await
    }

    async fn create_course(&self, name: &str) -> Value {
        let (status, body) = self.post("/api/v1/courses/", json!({ "name": name })).await;
        assert_eq!(status, StatusCode::CREATED);
        body
    }

    async fn create_courses(&self, count: usize) -> Vec<Value> {
        let mut courses = Vec::with_capacity(count);
        for i in 0..count {
            courses.push(self.create_course(&format!("Course {}", i + 1)).await);
        }
        courses
    }

    async fn create_students(&self, count: usize) -> Vec<i64> {
        let mut ids = Vec::with_capacity(count);
        for i in 0..count {
            let (status, body) = self
                .post("/api/v1/students/", json!({ "name": format!("Student {}", i + 1) }))
                .await;
            assert_eq!(status, StatusCode::CREATED);
            ids.push(body["id"].as_i64().unwrap());
        }
        ids
    }
}

// =============================================================================
// Course retrieval
// =============================================================================

#[tokio::test]
async fn get_course_by_id_returns_record() {
    let app = TestApp::new();
    let created = app.create_course("Algebra").await;
    let id = created["id"].as_i64().unwrap();

    let (status, body) = app.get(&format!("/api/v1/courses/{}/", id)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id);
    assert_eq!(body["name"], "Algebra");
}

#[tokio::test]
async fn list_courses_returns_all_in_creation_order() {
    let app = TestApp::new();
    let created = app.create_courses(10).await;

    let (status, body) = app.get("/api/v1/courses/").await;

    assert_eq!(status, StatusCode::OK);
    let listed = body.as_array().unwrap();
    assert_eq!(listed.len(), 10);
    for (listed, created) in listed.iter().zip(&created) {
        assert_eq!(listed["id"], created["id"]);
        assert_eq!(listed["name"], created["name"]);
    }
}

#[tokio::test]
async fn list_courses_filters_by_id() {
    let app = TestApp::new();
    let created = app.create_courses(10).await;
    let target = created[1]["id"].as_i64().unwrap();

    let (status, body) = app.get(&format!("/api/v1/courses/?id={}", target)).await;

    assert_eq!(status, StatusCode::OK);
    let listed = body.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["id"], target);
}

#[tokio::test]
async fn list_courses_filters_by_name() {
    let app = TestApp::new();
    let created = app.create_courses(10).await;
    let target = created[2]["name"].as_str().unwrap().to_string();

    let (status, body) = app
        .get(&format!("/api/v1/courses/?name={}", target.replace(' ', "%20")))
        .await;

    assert_eq!(status, StatusCode::OK);
    let listed = body.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["name"], target.as_str());
    assert_eq!(listed[0]["id"], created[2]["id"]);
}

#[tokio::test]
async fn list_courses_combines_filters() {
    let app = TestApp::new();
    let created = app.create_courses(3).await;
    let id = created[0]["id"].as_i64().unwrap();

    let (_, body) = app
        .get(&format!("/api/v1/courses/?id={}&name=Course%202", id))
        .await;

    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn list_courses_rejects_non_integer_id() {
    let app = TestApp::new();
    let (status, body) = app.get("/api/v1/courses/?id=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "id");
}

#[tokio::test]
async fn list_courses_ignores_blank_name_filter() {
    let app = TestApp::new();
    app.create_courses(3).await;

    let (status, body) = app.get("/api/v1/courses/?name=").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn list_courses_ignores_blank_id_filter() {
    let app = TestApp::new();
    app.create_courses(3).await;

    let (status, body) = app.get("/api/v1/courses/?id=").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);
}

// =============================================================================
// Course creation
// =============================================================================

#[tokio::test]
async fn create_course_returns_id_of_stored_record() {
    let app = TestApp::new();

    let (status, created) = app
        .post("/api/v1/courses/", json!({ "name": "Test Course" }))
        .await;

    assert_eq!(status, StatusCode::CREATED);
    let (_, listed) = app.get("/api/v1/courses/").await;
    assert_eq!(listed[0]["id"], created["id"]);
    assert_eq!(listed[0]["name"], "Test Course");
}

#[tokio::test]
async fn create_course_with_twenty_students_succeeds() {
    let app = TestApp::new();
    let students = app.create_students(20).await;

    let (status, body) = app
        .post(
            "/api/v1/courses/",
            json!({ "name": "Full House", "students": students }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["students"].as_array().unwrap().len(), 20);
}

#[tokio::test]
async fn create_course_with_twenty_one_students_fails_and_persists_nothing() {
    let app = TestApp::new();
    let students = app.create_students(21).await;

    let (status, body) = app
        .post(
            "/api/v1/courses/",
            json!({ "name": "Overbooked", "students": students }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_FAILED");
    assert_eq!(body["details"]["field"], "students");
    assert_eq!(app.store.course_count().await, 0);
}

#[tokio::test]
async fn create_course_honours_configured_limit() {
    let app = TestApp::with_policy(EnrollmentPolicy::new(2));
    let students = app.create_students(3).await;

    let (status, _) = app
        .post("/api/v1/courses/", json!({ "name": "Seminar", "students": students }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_course_rejects_unknown_students() {
    let app = TestApp::new();

    let (status, body) = app
        .post("/api/v1/courses/", json!({ "name": "Ghosts", "students": [99] }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "students");
    assert_eq!(app.store.course_count().await, 0);
}

#[tokio::test]
async fn create_course_rejects_blank_name() {
    let app = TestApp::new();
    let (status, body) = app.post("/api/v1/courses/", json!({ "name": "  " })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "name");
}

// =============================================================================
// Course updates
// =============================================================================

#[tokio::test]
async fn patch_course_name_keeps_students() {
    let app = TestApp::new();
    let students = app.create_students(2).await;
    let (_, created) = app
        .post("/api/v1/courses/", json!({ "name": "Algebra", "students": students }))
        .await;
    let id = created["id"].as_i64().unwrap();

    let (status, _) = app
        .send(
            Method::PATCH,
            &format!("/api/v1/courses/{}/", id),
            Some(json!({ "name": "Test Course Update" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = app.get(&format!("/api/v1/courses/{}/", id)).await;
    assert_eq!(body["name"], "Test Course Update");
    assert_eq!(body["students"], json!(students));
}

#[tokio::test]
async fn patch_course_over_limit_leaves_record_unchanged() {
    let app = TestApp::new();
    let students = app.create_students(21).await;
    let created = app.create_course("Algebra").await;
    let id = created["id"].as_i64().unwrap();

    let (status, _) = app
        .send(
            Method::PATCH,
            &format!("/api/v1/courses/{}/", id),
            Some(json!({ "name": "Renamed", "students": students })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = app.get(&format!("/api/v1/courses/{}/", id)).await;
    assert_eq!(body["name"], "Algebra");
    assert_eq!(body["students"], json!([]));
}

#[tokio::test]
async fn patch_missing_course_is_not_found() {
    let app = TestApp::new();
    let (status, body) = app
        .send(
            Method::PATCH,
            "/api/v1/courses/404/",
            Some(json!({ "name": "Nowhere" })),
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn put_course_requires_name() {
    let app = TestApp::new();
    let created = app.create_course("Algebra").await;
    let id = created["id"].as_i64().unwrap();
    let uri = format!("/api/v1/courses/{}/", id);

    let (status, _) = app
        .send(Method::PUT, &uri, Some(json!({ "students": [] })))
        .await;
    assert!(status.is_client_error());

    let (status, body) = app
        .send(Method::PUT, &uri, Some(json!({ "name": "Geometry" })))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Geometry");
}

// =============================================================================
// Deletion
// =============================================================================

#[tokio::test]
async fn delete_course_then_get_is_not_found() {
    let app = TestApp::new();
    let created = app.create_course("Algebra").await;
    let uri = format!("/api/v1/courses/{}/", created["id"]);

    let (status, _) = app.send(Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app.get(&uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_student_drops_enrollment() {
    let app = TestApp::new();
    let students = app.create_students(2).await;
    let (_, created) = app
        .post("/api/v1/courses/", json!({ "name": "Algebra", "students": students }))
        .await;

    let (status, _) = app
        .send(
            Method::DELETE,
            &format!("/api/v1/students/{}/", students[0]),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = app
        .get(&format!("/api/v1/courses/{}/", created["id"]))
        .await;
    assert_eq!(body["students"], json!([students[1]]));
}

// =============================================================================
// Students
// =============================================================================

#[tokio::test]
async fn student_endpoints_round_trip() {
    let app = TestApp::new();

    let (status, created) = app
        .post(
            "/api/v1/students/",
            json!({ "name": "Ada Lovelace", "birth_date": "1815-12-10" }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, fetched) = app
        .get(&format!("/api/v1/students/{}/", created["id"]))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["birth_date"], "1815-12-10");

    let (_, listed) = app.get("/api/v1/students/").await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn health_reports_ok() {
    let app = TestApp::new();
    let (status, body) = app.get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
