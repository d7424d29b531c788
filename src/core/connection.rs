//! Short-lived connection acquisition.
//!
//! Every query and mutation acquires its own connection through a
//! [`ConnectionSource`] and gives it back as soon as the statement finishes.
//! The source is passed into each operation rather than held globally, so a
//! test can hand in an already-open in-memory database while production opens
//! a fresh connection from the configured URL on every call.

use crate::errors::Result;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, QueryResult, Statement,
};
use std::ops::Deref;
use tracing::{debug, warn};

/// Where operations get their database connection from.
pub enum ConnectionSource {
    /// Open a new single-connection handle per call and close it afterwards
    Url(String),
    /// Lend an existing connection to every call (tests, externally pooled handles)
    Shared(DatabaseConnection),
}

impl ConnectionSource {
    /// Creates a source that opens a fresh connection to `url` on every call.
    #[must_use]
    pub fn from_url(url: impl Into<String>) -> Self {
        Self::Url(url.into())
    }

    /// Creates a source that lends `db` to every call.
    #[must_use]
    pub const fn shared(db: DatabaseConnection) -> Self {
        Self::Shared(db)
    }

    /// Acquires a connection for the duration of one operation.
    ///
    /// # Errors
    /// Returns [`crate::errors::Error::Connectivity`] when the database cannot be reached.
    pub async fn acquire(&self) -> Result<Lease<'_>> {
        match self {
            Self::Url(url) => {
                debug!("Opening short-lived database connection");
                let mut options = ConnectOptions::new(url.as_str());
                options.max_connections(1).sqlx_logging(false);
                let conn = Database::connect(options).await?;
                Ok(Lease::Owned(conn))
            }
            Self::Shared(conn) => Ok(Lease::Borrowed(conn)),
        }
    }

    /// Runs one read statement on a freshly acquired connection.
    ///
    /// The connection is released before the result is inspected, so it is
    /// returned on the error path as well.
    pub async fn query_all(&self, sql: &str) -> Result<Vec<QueryResult>> {
        let lease = self.acquire().await?;
        let stmt = Statement::from_string(lease.get_database_backend(), sql);
        let result = lease.query_all(stmt).await;
        lease.release().await;
        Ok(result?)
    }
}

impl std::fmt::Debug for ConnectionSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // URLs may carry credentials
        match self {
            Self::Url(_) => f.write_str("ConnectionSource::Url(..)"),
            Self::Shared(_) => f.write_str("ConnectionSource::Shared(..)"),
        }
    }
}

/// A connection held for the span of a single operation.
pub enum Lease<'a> {
    /// Opened for this operation; closed on release
    Owned(DatabaseConnection),
    /// Lent by a shared source; left open on release
    Borrowed(&'a DatabaseConnection),
}

impl Lease<'_> {
    /// Gives the connection back.
    ///
    /// Owned connections are closed. Dropping a lease without calling this
    /// still drops the underlying pool, which closes it.
    pub async fn release(self) {
        if let Self::Owned(conn) = self {
            if let Err(e) = conn.close().await {
                warn!("Failed to close database connection cleanly: {e}");
            }
        }
    }
}

impl Deref for Lease<'_> {
    type Target = DatabaseConnection;

    fn deref(&self) -> &Self::Target {
        match self {
            Self::Owned(conn) => conn,
            Self::Borrowed(conn) => conn,
        }
    }
}
