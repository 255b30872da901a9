//! Shared database connection — opened lazily, once, and handed out to
//! every caller.
//!
//! The provider is an ordinary value owned by the composition root. Backed by
//! [`OnceLock`], so first access stays race-free even if it is ever shared
//! between threads.

use std::sync::OnceLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use patternbook_domain::id::ConnectionId;

/// The expensive shared resource.
#[derive(Debug)]
pub struct DatabaseConnection {
    id: ConnectionId,
}

impl DatabaseConnection {
    fn open() -> Self {
        let connection = Self {
            id: ConnectionId::new(),
        };
        tracing::info!(id = %connection.id, "database connection established");
        connection
    }

    #[must_use]
    pub fn id(&self) -> ConnectionId {
        self.id
    }

    /// Run `query`. Nothing is persisted; the report says what was run.
    #[tracing::instrument(skip(self), fields(connection = %self.id))]
    pub fn execute_query(&self, query: &str) -> QueryReport {
        QueryReport {
            connection: self.id,
            query: query.to_string(),
        }
    }
}

/// Record of a query run on a [`DatabaseConnection`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryReport {
    pub connection: ConnectionId,
    pub query: String,
}

impl std::fmt::Display for QueryReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Executing Query: {}", self.query)
    }
}

/// Hands out the one [`DatabaseConnection`], opening it on first use.
#[derive(Debug, Default)]
pub struct SharedConnection {
    cell: OnceLock<DatabaseConnection>,
    opened: AtomicUsize,
}

impl SharedConnection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The shared connection. The first call opens it; later calls return
    /// the same instance.
    pub fn connection(&self) -> &DatabaseConnection {
        self.connect().0
    }

    /// Like [`connection`](Self::connection), also reporting whether this
    /// call is the one that opened it.
    pub fn connect(&self) -> (&DatabaseConnection, bool) {
        let mut opened_now = false;
        let connection = self.cell.get_or_init(|| {
            opened_now = true;
            self.opened.fetch_add(1, Ordering::Relaxed);
            DatabaseConnection::open()
        });
        (connection, opened_now)
    }

    /// Whether the connection has been opened yet.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.cell.get().is_some()
    }

    /// How many times a connection was opened: 0 before first use, 1 after.
    #[must_use]
    pub fn opened_count(&self) -> usize {
        self.opened.load(Ordering::Relaxed)
    }
}
