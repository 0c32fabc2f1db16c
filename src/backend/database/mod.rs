//! Database abstraction layer for the language catalog
//!
//! Records are stored as JSON documents in a single `languages` table.
//! Shared logic lives next to this file; each store only supplies the SQL
//! dialect it speaks.
//!
//! ```text
//! Common logic (language_insert.rs, language_read.rs, filter.rs)
//!     ↓
//! Database-specific implementations
//!     ├── postgres/ (JSONB)
//!     └── sqlite/   (JSON1 over TEXT)
//! ```

pub mod config;
pub mod filter;
pub mod language_insert;
pub mod language_read;
pub mod postgres;
pub mod sqlite;

// Re-export key types for convenience
pub use config::DatabaseBackendConfig;

pub use filter::{FilterConverter, SqlParam};

pub use language_insert::UnifiedLanguageInsertOps;

pub use language_read::UnifiedLanguageReadOps;

pub use postgres::{PostgresLanguageInserter, PostgresLanguageReader};
pub use sqlite::{SqliteLanguageInserter, SqliteLanguageReader};

/// Name of the document table
pub const LANGUAGES_TABLE: &str = "languages";
