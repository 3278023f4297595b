//! `PostgreSQL` implementation of the `ContactRepository` port using Diesel ORM.
//!
//! Provides production-grade persistence for contact submissions. All
//! database operations are offloaded to a blocking thread pool via
//! [`tokio::task::spawn_blocking`] to avoid stalling the async runtime.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use diesel::result::DatabaseErrorKind;

use super::models::{ContactRow, NewContact};
use super::schema::contacts;
use crate::contact::{
    domain::{ContactSubmission, SubmissionId},
    error::RepositoryError,
    ports::repository::{ContactRepository, RepositoryResult},
};

/// `PostgreSQL` connection pool type.
pub type PgPool = Pool<ConnectionManager<PgConnection>>;

/// Pooled connection type for internal use.
type PooledConn = PooledConnection<ConnectionManager<PgConnection>>;

/// Runs a blocking database operation on a dedicated thread pool.
async fn run_blocking<F, T>(f: F) -> RepositoryResult<T>
where
    F: FnOnce() -> RepositoryResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| RepositoryError::connection(format!("task join error: {e}")))?
}

/// Obtains a connection from the pool.
fn get_conn(pool: &PgPool) -> RepositoryResult<PooledConn> {
    pool.get()
        .map_err(|e| RepositoryError::connection(e.to_string()))
}

/// Maps an insert error, recognising unique-key violations as duplicates.
fn map_insert_error(err: diesel::result::Error, id: SubmissionId) -> RepositoryError {
    match err {
        diesel::result::Error::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            RepositoryError::Duplicate(id)
        }
        other => RepositoryError::database(other),
    }
}

/// `PostgreSQL` implementation of [`ContactRepository`].
///
/// Uses Diesel ORM with connection pooling via r2d2. Thread-safe for
/// concurrent access. Ordering relies on the `contacts` table's
/// `insertion_seq` sequence as the tie-break for equal timestamps.
///
/// # Example
///
/// ```ignore
/// use diesel::r2d2::{ConnectionManager, Pool};
/// use diesel::PgConnection;
/// use postbox::contact::adapters::postgres::PostgresContactRepository;
///
/// let manager = ConnectionManager::<PgConnection>::new("postgres://...");
/// let pool = Pool::builder().build(manager).expect("pool");
/// let repo = PostgresContactRepository::new(pool);
/// ```
#[derive(Debug, Clone)]
pub struct PostgresContactRepository {
    pool: PgPool,
}

impl PostgresContactRepository {
    /// Creates a new repository with the given connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the connection pool.
    #[must_use]
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl ContactRepository for PostgresContactRepository {
    async fn append(&self, submission: &ContactSubmission) -> RepositoryResult<()> {
        let pool = self.pool.clone();
        let id = submission.id();
        let record = NewContact::from_domain(submission);

        run_blocking(move || {
            let mut conn = get_conn(&pool)?;
            diesel::insert_into(contacts::table)
                .values(&record)
                .execute(&mut conn)
                .map_err(|e| map_insert_error(e, id))?;
            Ok(())
        })
        .await
    }

    async fn list_descending(&self) -> RepositoryResult<Vec<ContactSubmission>> {
        let pool = self.pool.clone();

        run_blocking(move || {
            let mut conn = get_conn(&pool)?;
            let rows = contacts::table
                .order((contacts::submitted_at.desc(), contacts::insertion_seq.desc()))
                .select(ContactRow::as_select())
                .load::<ContactRow>(&mut conn)
                .map_err(RepositoryError::database)?;

            Ok(rows.into_iter().map(ContactRow::into_domain).collect())
        })
        .await
    }
}
