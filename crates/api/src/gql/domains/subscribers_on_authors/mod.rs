pub mod types;

pub use types::SubscribersOnAuthors;
