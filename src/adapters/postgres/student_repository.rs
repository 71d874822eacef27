//! PostgreSQL implementation of StudentRepository.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode, StudentId, Timestamp};
use crate::domain::student::{Student, StudentDraft};
use crate::ports::StudentRepository;

/// PostgreSQL implementation of StudentRepository.
#[derive(Clone)]
pub struct PostgresStudentRepository {
    pool: PgPool,
}

impl PostgresStudentRepository {
    /// Creates a new PostgresStudentRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentRepository for PostgresStudentRepository {
    async fn insert(&self, draft: &StudentDraft) -> Result<Student, DomainError> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO students (name, birth_date, created_at)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(draft.name())
        .bind(draft.birth_date())
        .bind(draft.created_at().as_datetime())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database("insert student", e))?;

        Ok(draft.clone().into_student(StudentId::new(id)))
    }

    async fn find_by_id(&self, id: StudentId) -> Result<Option<Student>, DomainError> {
        let row = sqlx::query(
            "SELECT id, name, birth_date, created_at FROM students WHERE id = $1",
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("fetch student", e))?;

        row.map(row_to_student).transpose()
    }

    async fn list(&self) -> Result<Vec<Student>, DomainError> {
        let rows = sqlx::query("SELECT id, name, birth_date, created_at FROM students ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database("list students", e))?;

        rows.into_iter().map(row_to_student).collect()
    }

    async fn find_missing(&self, ids: &[StudentId]) -> Result<Vec<StudentId>, DomainError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let raw: Vec<i64> = ids.iter().map(StudentId::as_i64).collect();
        let existing: Vec<(i64,)> =
            sqlx::query_as("SELECT id FROM students WHERE id = ANY($1::BIGINT[])")
                .bind(raw)
                .fetch_all(&self.pool)
                .await
                .map_err(|e| DomainError::database("check students", e))?;

        let existing: std::collections::HashSet<i64> =
            existing.into_iter().map(|(id,)| id).collect();
        Ok(ids
            .iter()
            .filter(|id| !existing.contains(&id.as_i64()))
            .copied()
            .collect())
    }

    async fn delete(&self, id: StudentId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("delete student", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::StudentNotFound,
                format!("Student not found: {}", id),
            )
            .with_detail("id", id.to_string()));
        }

        Ok(())
    }
}

fn row_to_student(row: sqlx::postgres::PgRow) -> Result<Student, DomainError> {
    let id: i64 = row
        .try_get("id")
        .map_err(|e| DomainError::database("get id", e))?;
    let name: String = row
        .try_get("name")
        .map_err(|e| DomainError::database("get name", e))?;
    let birth_date: Option<NaiveDate> = row
        .try_get("birth_date")
        .map_err(|e| DomainError::database("get birth_date", e))?;
    let created_at: DateTime<Utc> = row
        .try_get("created_at")
        .map_err(|e| DomainError::database("get created_at", e))?;

    Ok(Student::reconstitute(
        StudentId::new(id),
        name,
        birth_date,
        Timestamp::from_datetime(created_at),
    ))
}
