//! HTTP handlers for student endpoints.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::error::ApiError;
use crate::application::handlers::student::{
    CreateStudentCommand, CreateStudentHandler, DeleteStudentCommand, DeleteStudentHandler,
    GetStudentHandler, GetStudentQuery, ListStudentsHandler,
};
use crate::domain::foundation::StudentId;
use crate::ports::StudentRepository;

use super::dto::{CreateStudentRequest, StudentResponse};

/// Shared state for student endpoints.
#[derive(Clone)]
pub struct StudentAppState {
    pub student_repository: Arc<dyn StudentRepository>,
}

impl StudentAppState {
    pub fn create_student_handler(&self) -> CreateStudentHandler {
        CreateStudentHandler::new(self.student_repository.clone())
    }

    pub fn get_student_handler(&self) -> GetStudentHandler {
        GetStudentHandler::new(self.student_repository.clone())
    }

    pub fn list_students_handler(&self) -> ListStudentsHandler {
        ListStudentsHandler::new(self.student_repository.clone())
    }

    pub fn delete_student_handler(&self) -> DeleteStudentHandler {
        DeleteStudentHandler::new(self.student_repository.clone())
    }
}

/// GET /students/
pub async fn list_students(
    State(state): State<StudentAppState>,
) -> Result<impl IntoResponse, ApiError> {
    let students = state.list_students_handler().handle().await?;
    let body: Vec<StudentResponse> = students.iter().map(StudentResponse::from).collect();
    Ok(Json(body))
}

/// GET /students/:id/
pub async fn get_student(
    State(state): State<StudentAppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let query = GetStudentQuery {
        student_id: StudentId::new(id),
    };
    let student = state.get_student_handler().handle(query).await?;
    Ok(Json(StudentResponse::from(&student)))
}

/// POST /students/
pub async fn create_student(
    State(state): State<StudentAppState>,
    Json(request): Json<CreateStudentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = CreateStudentCommand {
        name: request.name,
        birth_date: request.birth_date,
    };
    let student = state.create_student_handler().handle(cmd).await?;
    Ok((StatusCode::CREATED, Json(StudentResponse::from(&student))))
}

/// DELETE /students/:id/
pub async fn delete_student(
    State(state): State<StudentAppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = DeleteStudentCommand {
        student_id: StudentId::new(id),
    };
    state.delete_student_handler().handle(cmd).await?;
    Ok(StatusCode::NO_CONTENT)
}
