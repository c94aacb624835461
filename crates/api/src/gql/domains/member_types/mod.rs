pub mod resolvers;
pub mod types;

pub use resolvers::MemberTypeQuery;
pub use types::MemberType;
