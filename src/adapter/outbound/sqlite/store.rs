//! SQLite record store implementation.
//!
//! Provides persistent storage for courses, students and enrollments using
//! SQLite and Diesel ORM.

use diesel::prelude::*;
use diesel::SqliteConnection;

use crate::adapter::outbound::sqlite::database::connection::DbPool;
use crate::adapter::outbound::sqlite::database::model::{
    CourseRow, EnrollmentRow, NewCourseRow, NewEnrollmentRow, NewStudentRow, StudentRow,
};
use crate::adapter::outbound::sqlite::database::schema::{course, enrollment, student};
use crate::domain::course::{Course, NewCourse};
use crate::domain::enrollment::{Enrollment, NewEnrollment};
use crate::domain::id::{CourseId, EnrollmentId, StudentId};
use crate::domain::student::{NewStudent, Student};
use crate::error::{Error, Result};
use crate::port::outbound::store::{CourseStore, EnrollmentStore, StudentStore};

#[derive(QueryableByName)]
struct LastInsertRowId {
    #[diesel(sql_type = diesel::sql_types::Integer)]
    #[diesel(column_name = "id")]
    id: i32,
}

/// Row id assigned by the most recent insert on this connection.
fn last_insert_rowid(conn: &mut SqliteConnection) -> QueryResult<i32> {
    diesel::sql_query("SELECT last_insert_rowid() AS id")
        .get_result::<LastInsertRowId>(conn)
        .map(|row| row.id)
}

/// SQLite-backed record store.
///
/// Implements [`CourseStore`], [`StudentStore`] and [`EnrollmentStore`].
/// Diesel is synchronous, so every call runs on tokio's blocking pool.
#[derive(Clone)]
pub struct SqliteRecordStore {
    /// Database connection pool.
    pool: DbPool,
}

impl SqliteRecordStore {
    /// Create a new SQLite record store with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Run `f` with a pooled connection on the blocking pool.
    async fn with_conn<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut SqliteConnection) -> QueryResult<T> + Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get().map_err(|e| Error::Connection(e.to_string()))?;
            f(&mut conn).map_err(Error::from)
        })
        .await
        .map_err(|e| Error::Internal(e.to_string()))?
    }
}

impl CourseStore for SqliteRecordStore {
    async fn get_course(&self, id: CourseId) -> Result<Option<Course>> {
        let row = self
            .with_conn(move |conn| {
                course::table
                    .find(id.get())
                    .select(CourseRow::as_select())
                    .first::<CourseRow>(conn)
                    .optional()
            })
            .await?;

        Ok(row.map(Course::from))
    }

    async fn insert_course(&self, new: NewCourse) -> Result<Course> {
        self.with_conn(move |conn| {
            let id = conn.transaction(|conn| {
                diesel::insert_into(course::table)
                    .values(NewCourseRow::from(&new))
                    .execute(conn)?;
                last_insert_rowid(conn)
            })?;
            Ok(new.with_id(CourseId::new(id)))
        })
        .await
    }

    async fn course_exists(&self, id: CourseId) -> Result<bool> {
        self.with_conn(move |conn| {
            diesel::select(diesel::dsl::exists(course::table.find(id.get()))).get_result(conn)
        })
        .await
    }
}

impl StudentStore for SqliteRecordStore {
    async fn get_student(&self, id: StudentId) -> Result<Option<Student>> {
        let row = self
            .with_conn(move |conn| {
                student::table
                    .find(id.get())
                    .select(StudentRow::as_select())
                    .first::<StudentRow>(conn)
                    .optional()
            })
            .await?;

        Ok(row.map(Student::from))
    }

    async fn insert_student(&self, new: NewStudent) -> Result<Student> {
        self.with_conn(move |conn| {
            let id = conn.transaction(|conn| {
                diesel::insert_into(student::table)
                    .values(NewStudentRow::from(&new))
                    .execute(conn)?;
                last_insert_rowid(conn)
            })?;
            Ok(new.with_id(StudentId::new(id)))
        })
        .await
    }

    async fn student_exists(&self, id: StudentId) -> Result<bool> {
        self.with_conn(move |conn| {
            diesel::select(diesel::dsl::exists(student::table.find(id.get()))).get_result(conn)
        })
        .await
    }
}

impl EnrollmentStore for SqliteRecordStore {
    async fn get_enrollment(&self, id: EnrollmentId) -> Result<Option<Enrollment>> {
        let row = self
            .with_conn(move |conn| {
                enrollment::table
                    .find(id.get())
                    .select(EnrollmentRow::as_select())
                    .first::<EnrollmentRow>(conn)
                    .optional()
            })
            .await?;

        Ok(row.map(Enrollment::from))
    }

    async fn insert_enrollment(&self, new: NewEnrollment) -> Result<Enrollment> {
        self.with_conn(move |conn| {
            let id = conn.transaction(|conn| {
                diesel::insert_into(enrollment::table)
                    .values(NewEnrollmentRow::from(new))
                    .execute(conn)?;
                last_insert_rowid(conn)
            })?;
            Ok(new.with_id(EnrollmentId::new(id)))
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::outbound::sqlite::database::connection::{create_pool, run_migrations};

    fn setup_store() -> SqliteRecordStore {
        let pool = create_pool(":memory:").expect("Failed to create pool");
        run_migrations(&pool).expect("Failed to run migrations");
        SqliteRecordStore::new(pool)
    }

    fn algorithms() -> NewCourse {
        NewCourse {
            course_name: "Algorithms".into(),
            course_code: "CS201".into(),
            course_description: "Sorting and searching".into(),
        }
    }

    fn ada() -> NewStudent {
        NewStudent {
            roll_number: "R-001".into(),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
        }
    }

    // -------------------------------------------------------------------------
    // Courses
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn sqlite_course_roundtrip() {
        let store = setup_store();

        let created = store.insert_course(algorithms()).await.unwrap();
        let loaded = store.get_course(created.course_id).await.unwrap().unwrap();

        assert_eq!(loaded, created);
        assert_eq!(loaded.course_description.as_deref(), Some("Sorting and searching"));
    }

    #[tokio::test]
    async fn sqlite_course_ids_are_sequential() {
        let store = setup_store();

        let first = store.insert_course(algorithms()).await.unwrap();
        let mut other = algorithms();
        other.course_code = "CS202".into();
        let second = store.insert_course(other).await.unwrap();

        assert_eq!(first.course_id, CourseId::new(1));
        assert_eq!(second.course_id, CourseId::new(2));
    }

    #[tokio::test]
    async fn sqlite_missing_course_is_none() {
        let store = setup_store();
        assert!(store.get_course(CourseId::new(404)).await.unwrap().is_none());
        assert!(!store.course_exists(CourseId::new(404)).await.unwrap());
    }

    #[tokio::test]
    async fn sqlite_duplicate_course_code_is_a_database_error() {
        let store = setup_store();
        store.insert_course(algorithms()).await.unwrap();

        let err = store.insert_course(algorithms()).await.unwrap_err();
        assert!(matches!(err, Error::Database(_)), "got {err:?}");
    }

    // -------------------------------------------------------------------------
    // Students
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn sqlite_student_roundtrip() {
        let store = setup_store();

        let created = store.insert_student(ada()).await.unwrap();
        let loaded = store.get_student(created.student_id).await.unwrap().unwrap();

        assert_eq!(loaded, created);
        assert!(store.student_exists(created.student_id).await.unwrap());
    }

    #[tokio::test]
    async fn sqlite_duplicate_roll_number_is_a_database_error() {
        let store = setup_store();
        store.insert_student(ada()).await.unwrap();

        let err = store.insert_student(ada()).await.unwrap_err();
        assert!(matches!(err, Error::Database(_)), "got {err:?}");
    }

    // -------------------------------------------------------------------------
    // Enrollments
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn sqlite_enrollment_roundtrip() {
        let store = setup_store();
        let course = store.insert_course(algorithms()).await.unwrap();
        let student = store.insert_student(ada()).await.unwrap();

        let created = store
            .insert_enrollment(NewEnrollment {
                student_id: student.student_id,
                course_id: course.course_id,
            })
            .await
            .unwrap();
        let loaded = store
            .get_enrollment(created.enrollment_id)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(loaded, created);
        assert!(store
            .get_enrollment(EnrollmentId::new(created.enrollment_id.get() + 1))
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn sqlite_duplicate_enrollments_get_distinct_ids() {
        let store = setup_store();
        let course = store.insert_course(algorithms()).await.unwrap();
        let student = store.insert_student(ada()).await.unwrap();
        let pair = NewEnrollment {
            student_id: student.student_id,
            course_id: course.course_id,
        };

        let first = store.insert_enrollment(pair).await.unwrap();
        let second = store.insert_enrollment(pair).await.unwrap();

        assert_ne!(first.enrollment_id, second.enrollment_id);
    }

    #[tokio::test]
    async fn sqlite_enrollment_with_unknown_references_is_a_database_error() {
        let store = setup_store();

        let err = store
            .insert_enrollment(NewEnrollment {
                student_id: StudentId::new(7),
                course_id: CourseId::new(7),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Database(_)), "got {err:?}");
    }
}
