//! PostgreSQL document store built on JSONB

pub mod backend_impl;
pub mod filter_impl;
pub mod language_insert_impl;
pub mod language_read_impl;
pub mod schema;

pub use backend_impl::PostgresBackend;
pub use filter_impl::PostgresFilterConverter;
pub use language_insert_impl::PostgresLanguageInserter;
pub use language_read_impl::PostgresLanguageReader;
