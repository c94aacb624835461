pub mod resolvers;
pub mod types;

pub use resolvers::PostQuery;
pub use types::Post;
