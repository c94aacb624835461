pub mod common;
pub mod domains;
pub mod error;
pub mod loaders;
pub mod request;
pub mod root;
pub mod scalars;
pub mod schema;

pub use root::QueryRoot;
pub use schema::{build_schema, execute, AppSchema};
