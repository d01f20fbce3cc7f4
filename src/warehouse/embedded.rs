//! Embedded DuckDB backend for the connectivity check.
//!
//! The host is a database file path, or `:memory:` for a throwaway in-memory
//! database. Files are opened read-only, so a mistyped path fails instead of
//! leaving a new empty database behind. DuckDB has no authentication, so
//! credentials are accepted and ignored.

use super::{ConnectionSettings, Session, Warehouse, WarehouseError};
use duckdb::types::ValueRef;
use duckdb::{AccessMode, Config, Connection};

pub const IN_MEMORY: &str = ":memory:";

#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedWarehouse;

impl Warehouse for EmbeddedWarehouse {
    type Session = EmbeddedSession;

    fn connect(&self, settings: &ConnectionSettings) -> Result<EmbeddedSession, WarehouseError> {
        if settings.user.is_some() || settings.secret.is_some() {
            tracing::debug!("embedded warehouse ignores credentials");
        }

        let conn = if settings.host == IN_MEMORY {
            Connection::open_in_memory()
        } else {
            Config::default()
                .access_mode(AccessMode::ReadOnly)
                .and_then(|config| Connection::open_with_flags(&settings.host, config))
        }
        .map_err(|e| WarehouseError::Connect {
            host: settings.host.clone(),
            source: Box::new(e),
        })?;

        Ok(EmbeddedSession { conn: Some(conn) })
    }
}

pub struct EmbeddedSession {
    conn: Option<Connection>,
}

impl Session for EmbeddedSession {
    fn query_scalar(&mut self, sql: &str) -> Result<String, WarehouseError> {
        let conn = self
            .conn
            .as_ref()
            .ok_or(WarehouseError::Query("session already closed".into()))?;

        let mut stmt = conn
            .prepare(sql)
            .map_err(|e| WarehouseError::Query(Box::new(e)))?;
        let mut rows = stmt
            .query([])
            .map_err(|e| WarehouseError::Query(Box::new(e)))?;

        let row = rows
            .next()
            .map_err(|e| WarehouseError::Query(Box::new(e)))?
            .ok_or(WarehouseError::EmptyResult)?;
        let value = row
            .get_ref(0)
            .map_err(|e| WarehouseError::Query(Box::new(e)))?;

        Ok(scalar_to_string(value))
    }
}

impl Drop for EmbeddedSession {
    fn drop(&mut self) {
        if let Some(conn) = self.conn.take() {
            if let Err((_, e)) = conn.close() {
                tracing::warn!(error = %e, "failed to close warehouse session");
            }
        }
    }
}

fn scalar_to_string(value: ValueRef<'_>) -> String {
    match value {
        ValueRef::Null => "NULL".to_string(),
        ValueRef::Boolean(b) => b.to_string(),
        ValueRef::TinyInt(n) => n.to_string(),
        ValueRef::SmallInt(n) => n.to_string(),
        ValueRef::Int(n) => n.to_string(),
        ValueRef::BigInt(n) => n.to_string(),
        ValueRef::HugeInt(n) => n.to_string(),
        ValueRef::UTinyInt(n) => n.to_string(),
        ValueRef::USmallInt(n) => n.to_string(),
        ValueRef::UInt(n) => n.to_string(),
        ValueRef::UBigInt(n) => n.to_string(),
        ValueRef::Float(f) => f.to_string(),
        ValueRef::Double(f) => f.to_string(),
        ValueRef::Decimal(d) => d.to_string(),
        ValueRef::Text(s) => String::from_utf8_lossy(s).into_owned(),
        ValueRef::Blob(b) => format!("<blob {} bytes>", b.len()),
        other => format!("{:?}", other),
    }
}
