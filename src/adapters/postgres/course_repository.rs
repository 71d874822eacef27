//! PostgreSQL implementation of CourseRepository.
//!
//! Courses live in `courses`; membership links in `course_students`.
//! Each write runs in one transaction so a failed link insert rolls back
//! the course row with it.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, Row, Transaction};

use crate::domain::course::{Course, CourseDraft};
use crate::domain::foundation::{CourseId, DomainError, ErrorCode, StudentId, Timestamp};
use crate::ports::{CourseFilter, CourseRepository};

use super::{is_foreign_key_violation, unknown_students_error};

/// PostgreSQL implementation of CourseRepository.
#[derive(Clone)]
pub struct PostgresCourseRepository {
    pool: PgPool,
}

impl PostgresCourseRepository {
    /// Creates a new PostgresCourseRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT_COURSES: &str = r#"
    SELECT c.id, c.name, c.created_at, c.updated_at,
           COALESCE(
               array_agg(cs.student_id ORDER BY cs.student_id)
                   FILTER (WHERE cs.student_id IS NOT NULL),
               '{}'
           ) AS student_ids
    FROM courses c
    LEFT JOIN course_students cs ON cs.course_id = c.id
    WHERE ($1::BIGINT IS NULL OR c.id = $1)
      AND ($2::TEXT IS NULL OR c.name = $2)
    GROUP BY c.id, c.name, c.created_at, c.updated_at
    ORDER BY c.id
"#;

#[async_trait]
impl CourseRepository for PostgresCourseRepository {
    async fn insert(&self, draft: &CourseDraft) -> Result<Course, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("start transaction", e))?;

        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO courses (name, created_at, updated_at)
            VALUES ($1, $2, $2)
            RETURNING id
            "#,
        )
        .bind(draft.name())
        .bind(draft.created_at().as_datetime())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| DomainError::database("insert course", e))?;

        let id = CourseId::new(id);
        insert_links(&mut tx, id, draft.students()).await?;

        tx.commit()
            .await
            .map_err(|e| DomainError::database("commit transaction", e))?;

        Ok(draft.clone().into_course(id))
    }

    async fn update(&self, course: &Course) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("start transaction", e))?;

        let result = sqlx::query(
            r#"
            UPDATE courses SET
                name = $2,
                updated_at = $3
            WHERE id = $1
            "#,
        )
        .bind(course.id().as_i64())
        .bind(course.name())
        .bind(course.updated_at().as_datetime())
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::database("update course", e))?;

        if result.rows_affected() == 0 {
            return Err(course_not_found(course.id()));
        }

        sqlx::query("DELETE FROM course_students WHERE course_id = $1")
            .bind(course.id().as_i64())
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::database("delete course links", e))?;

        insert_links(&mut tx, course.id(), course.students()).await?;

        tx.commit()
            .await
            .map_err(|e| DomainError::database("commit transaction", e))?;

        Ok(())
    }

    async fn find_by_id(&self, id: CourseId) -> Result<Option<Course>, DomainError> {
        let row = sqlx::query(SELECT_COURSES)
            .bind(Some(id.as_i64()))
            .bind(None::<String>)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("fetch course", e))?;

        row.map(row_to_course).transpose()
    }

    async fn list(&self, filter: &CourseFilter) -> Result<Vec<Course>, DomainError> {
        let rows = sqlx::query(SELECT_COURSES)
            .bind(filter.id.map(|id| id.as_i64()))
            .bind(filter.name.as_deref())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database("list courses", e))?;

        rows.into_iter().map(row_to_course).collect()
    }

    async fn delete(&self, id: CourseId) -> Result<(), DomainError> {
        // Links go with the row via ON DELETE CASCADE.
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("delete course", e))?;

        if result.rows_affected() == 0 {
            return Err(course_not_found(id));
        }

        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

async fn insert_links(
    tx: &mut Transaction<'_, Postgres>,
    course_id: CourseId,
    students: &[StudentId],
) -> Result<(), DomainError> {
    if students.is_empty() {
        return Ok(());
    }

    let student_ids: Vec<i64> = students.iter().map(StudentId::as_i64).collect();
    sqlx::query(
        r#"
        INSERT INTO course_students (course_id, student_id)
        SELECT $1, UNNEST($2::BIGINT[])
        "#,
    )
    .bind(course_id.as_i64())
    .bind(student_ids)
    .execute(&mut **tx)
    .await
    .map_err(|e| {
        if is_foreign_key_violation(&e) {
            unknown_students_error()
        } else {
            DomainError::database("insert course links", e)
        }
    })?;

    Ok(())
}

fn course_not_found(id: CourseId) -> DomainError {
    DomainError::new(ErrorCode::CourseNotFound, format!("Course not found: {}", id))
        .with_detail("id", id.to_string())
}

fn row_to_course(row: sqlx::postgres::PgRow) -> Result<Course, DomainError> {
    let id: i64 = row
        .try_get("id")
        .map_err(|e| DomainError::database("get id", e))?;
    let name: String = row
        .try_get("name")
        .map_err(|e| DomainError::database("get name", e))?;
    let created_at: DateTime<Utc> = row
        .try_get("created_at")
        .map_err(|e| DomainError::database("get created_at", e))?;
    let updated_at: DateTime<Utc> = row
        .try_get("updated_at")
        .map_err(|e| DomainError::database("get updated_at", e))?;
    let student_ids: Vec<i64> = row
        .try_get("student_ids")
        .map_err(|e| DomainError::database("get student_ids", e))?;

    Ok(Course::reconstitute(
        CourseId::new(id),
        name,
        student_ids.into_iter().map(StudentId::new).collect(),
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}
