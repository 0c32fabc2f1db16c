pub mod backend;
pub mod config;
pub mod error;
pub mod filter;
pub mod logging;
pub mod models;
pub mod resource;
pub mod router;
pub mod schema;
pub mod startup;

// Re-export commonly used types for easier access
pub use filter::{Filter, FilterError, FilterTarget, Operator, Predicate, QueryBuilder, Scalar};
pub use models::Language;
pub use router::build_router;
