pub mod resolvers;
pub mod types;

pub use resolvers::ProfileQuery;
pub use types::Profile;
