//! HTTP handlers for course endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use std::sync::Arc;

use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::error::ApiError;
use crate::application::handlers::course::{
    CreateCourseCommand, CreateCourseHandler, DeleteCourseCommand, DeleteCourseHandler,
    GetCourseHandler, GetCourseQuery, ListCoursesHandler, ListCoursesQuery, UpdateCourseCommand,
    UpdateCourseHandler,
};
use crate::domain::course::{CourseError, EnrollmentPolicy};
use crate::domain::foundation::CourseId;
use crate::ports::{CourseFilter, CourseRepository, StudentRepository};

use super::dto::{
    CourseResponse, CreateCourseRequest, ListCoursesParams, ReplaceCourseRequest,
    UpdateCourseRequest,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for course endpoints.
#[derive(Clone)]
pub struct CourseAppState {
    pub course_repository: Arc<dyn CourseRepository>,
    pub student_repository: Arc<dyn StudentRepository>,
    pub enrollment_policy: EnrollmentPolicy,
}

impl CourseAppState {
    pub fn create_course_handler(&self) -> CreateCourseHandler {
        CreateCourseHandler::new(
            self.course_repository.clone(),
            self.student_repository.clone(),
            self.enrollment_policy,
        )
    }

    pub fn get_course_handler(&self) -> GetCourseHandler {
        GetCourseHandler::new(self.course_repository.clone())
    }

    pub fn list_courses_handler(&self) -> ListCoursesHandler {
        ListCoursesHandler::new(self.course_repository.clone())
    }

    pub fn update_course_handler(&self) -> UpdateCourseHandler {
        UpdateCourseHandler::new(
            self.course_repository.clone(),
            self.student_repository.clone(),
            self.enrollment_policy,
        )
    }

    pub fn delete_course_handler(&self) -> DeleteCourseHandler {
        DeleteCourseHandler::new(self.course_repository.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /courses/ - List courses, optionally filtered by `id` and/or `name`
pub async fn list_courses(
    State(state): State<CourseAppState>,
    Query(params): Query<ListCoursesParams>,
) -> Result<impl IntoResponse, ApiError> {
    let filter = CourseFilter::try_from(params).map_err(CourseError::from)?;
    let query = ListCoursesQuery { filter };
    let courses = state.list_courses_handler().handle(query).await?;
    let body: Vec<CourseResponse> = courses.iter().map(CourseResponse::from).collect();
    Ok(Json(body))
}

/// GET /courses/:id/ - Get one course
pub async fn get_course(
    State(state): State<CourseAppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let query = GetCourseQuery {
        course_id: CourseId::new(id),
    };
    let course = state.get_course_handler().handle(query).await?;
    Ok(Json(CourseResponse::from(course)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /courses/ - Create a course
pub async fn create_course(
    State(state): State<CourseAppState>,
    Json(request): Json<CreateCourseRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = CreateCourseCommand {
        name: request.name,
        students: request.students,
    };
    let course = state.create_course_handler().handle(cmd).await?;
    Ok((StatusCode::CREATED, Json(CourseResponse::from(course))))
}

/// PATCH /courses/:id/ - Update the given fields of a course
pub async fn update_course(
    State(state): State<CourseAppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateCourseRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = UpdateCourseCommand {
        course_id: CourseId::new(id),
        name: request.name,
        students: request.students,
    };
    let course = state.update_course_handler().handle(cmd).await?;
    Ok(Json(CourseResponse::from(course)))
}

/// PUT /courses/:id/ - Replace a course's name and, when given, its students
pub async fn replace_course(
    State(state): State<CourseAppState>,
    Path(id): Path<i64>,
    Json(request): Json<ReplaceCourseRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = UpdateCourseCommand {
        course_id: CourseId::new(id),
        name: Some(request.name),
        students: request.students,
    };
    let course = state.update_course_handler().handle(cmd).await?;
    Ok(Json(CourseResponse::from(course)))
}

/// DELETE /courses/:id/ - Delete a course
pub async fn delete_course(
    State(state): State<CourseAppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = DeleteCourseCommand {
        course_id: CourseId::new(id),
    };
    state.delete_course_handler().handle(cmd).await?;
    Ok(StatusCode::NO_CONTENT)
}
