use async_graphql::Context;

use crate::gql::domains::users::User;
use crate::gql::error::{GqlError, ResultExt};
use crate::gql::loaders::{RequestLoader, UserLoader};
use crate::gql::scalars::EntityId;

/// Resolve a required foreign key to a user through the request's loader.
pub async fn load_referenced_user(
    ctx: &Context<'_>,
    id: &EntityId,
) -> async_graphql::Result<User> {
    let loader = ctx.data::<RequestLoader<UserLoader>>()?;

    match loader.load_one(id.to_string()).await.gql()? {
        Some(row) => Ok(row.into()),
        None => Err(GqlError::new(format!("User {id} not found")).into()),
    }
}
