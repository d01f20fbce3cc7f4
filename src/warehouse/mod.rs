//! Warehouse connectivity diagnostic.
//!
//! Opens a session against a data warehouse, runs one read-only query and
//! returns the first column of the first row. Sessions and statements are
//! owned values released on drop, so every exit path closes them.

mod embedded;

pub use embedded::{EmbeddedSession, EmbeddedWarehouse};

use thiserror::Error;

/// Query used when none is configured
pub const DEFAULT_QUERY: &str = "SELECT version()";

#[derive(Debug, Error)]
pub enum WarehouseError {
    #[error("missing connection setting: {0}")]
    MissingSetting(&'static str),
    #[error("failed to connect to {host}: {source}")]
    Connect {
        host: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("query failed: {0}")]
    Query(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("query returned no rows")]
    EmptyResult,
}

/// Where and as whom to connect
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ConnectionSettings {
    /// Account or host address
    pub host: String,
    /// Principal (user) name
    pub user: Option<String>,
    pub secret: Option<String>,
}

impl ConnectionSettings {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            user: None,
            secret: None,
        }
    }

    pub fn with_credentials(mut self, user: Option<String>, secret: Option<String>) -> Self {
        self.user = user;
        self.secret = secret;
        self
    }
}

// The secret never shows up in logs or error output.
impl std::fmt::Debug for ConnectionSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionSettings")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("secret", &self.secret.as_ref().map(|_| "***"))
            .finish()
    }
}

/// A warehouse backend able to open sessions
pub trait Warehouse {
    type Session: Session;

    fn connect(&self, settings: &ConnectionSettings) -> Result<Self::Session, WarehouseError>;
}

/// An open warehouse session. Dropping it closes the session.
pub trait Session {
    /// Execute `sql` and fetch the first column of the first row as text
    fn query_scalar(&mut self, sql: &str) -> Result<String, WarehouseError>;
}

/// Connect, run `query` once and return its scalar result
pub fn check_connectivity<W: Warehouse>(
    warehouse: &W,
    settings: &ConnectionSettings,
    query: &str,
) -> Result<String, WarehouseError> {
    if settings.host.trim().is_empty() {
        return Err(WarehouseError::MissingSetting("host"));
    }
    tracing::debug!(?settings, query, "opening warehouse session");

    let mut session = warehouse.connect(settings)?;
    let value = session.query_scalar(query)?;

    tracing::debug!(%value, "diagnostic query succeeded");
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct FakeWarehouse {
        open: Rc<Cell<u32>>,
        fail_query: bool,
    }

    struct FakeSession {
        open: Rc<Cell<u32>>,
        fail_query: bool,
    }

    impl Warehouse for FakeWarehouse {
        type Session = FakeSession;

        fn connect(&self, _: &ConnectionSettings) -> Result<FakeSession, WarehouseError> {
            self.open.set(self.open.get() + 1);
            Ok(FakeSession {
                open: self.open.clone(),
                fail_query: self.fail_query,
            })
        }
    }

    impl Session for FakeSession {
        fn query_scalar(&mut self, _: &str) -> Result<String, WarehouseError> {
            if self.fail_query {
                Err(WarehouseError::Query("syntax error".into()))
            } else {
                Ok("1.0.0".to_string())
            }
        }
    }

    impl Drop for FakeSession {
        fn drop(&mut self) {
            self.open.set(self.open.get() - 1);
        }
    }

    #[test]
    fn test_session_released_on_success() {
        let open = Rc::new(Cell::new(0));
        let warehouse = FakeWarehouse {
            open: open.clone(),
            fail_query: false,
        };
        let value = check_connectivity(&warehouse, &ConnectionSettings::new("acct"), "q").unwrap();
        assert_eq!(value, "1.0.0");
        assert_eq!(open.get(), 0);
    }

    #[test]
    fn test_session_released_on_failure() {
        let open = Rc::new(Cell::new(0));
        let warehouse = FakeWarehouse {
            open: open.clone(),
            fail_query: true,
        };
        let settings = ConnectionSettings::new("acct");
        let err = check_connectivity(&warehouse, &settings, "q").unwrap_err();
        assert!(err.to_string().contains("syntax error"));
        assert_eq!(open.get(), 0);
    }

    #[test]
    fn test_missing_host() {
        let warehouse = FakeWarehouse {
            open: Rc::new(Cell::new(0)),
            fail_query: false,
        };
        let err = check_connectivity(&warehouse, &ConnectionSettings::new("  "), "q").unwrap_err();
        assert!(matches!(err, WarehouseError::MissingSetting("host")));
    }

    #[test]
    fn test_debug_hides_secret() {
        let settings = ConnectionSettings::new("acct")
            .with_credentials(Some("analyst".into()), Some("hunter2".into()));
        let shown = format!("{:?}", settings);
        assert!(shown.contains("analyst"));
        assert!(!shown.contains("hunter2"));
    }
}
