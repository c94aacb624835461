// Each domain contains: mod.rs, resolvers.rs, types.rs

pub mod member_types;
pub mod posts;
pub mod profiles;
pub mod subscribers_on_authors;
pub mod users;
