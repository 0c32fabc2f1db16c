//! SQLite document store built on the JSON1 functions

pub mod backend_impl;
pub mod filter_impl;
pub mod language_insert_impl;
pub mod language_read_impl;
pub mod schema;

pub use backend_impl::SqliteBackend;
pub use filter_impl::SqliteFilterConverter;
pub use language_insert_impl::SqliteLanguageInserter;
pub use language_read_impl::SqliteLanguageReader;
