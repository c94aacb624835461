use async_graphql::{ComplexObject, Context, Result, SimpleObject};

use crate::gql::common::helpers::load_referenced_user;
use crate::gql::domains::users::User;
use crate::gql::scalars::EntityId;

/// One directed subscription edge: `subscriber` follows `author`.
#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct SubscribersOnAuthors {
    pub subscriber_id: EntityId,
    pub author_id: EntityId,
}

#[ComplexObject]
impl SubscribersOnAuthors {
    async fn subscriber(&self, ctx: &Context<'_>) -> Result<User> {
        load_referenced_user(ctx, &self.subscriber_id).await
    }

    async fn author(&self, ctx: &Context<'_>) -> Result<User> {
        load_referenced_user(ctx, &self.author_id).await
    }
}
