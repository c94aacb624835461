use async_graphql::{ComplexObject, Context, Result, SimpleObject};

use crate::gql::common::helpers::load_referenced_user;
use crate::gql::domains::users::User;
use crate::gql::scalars::EntityId;

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Post {
    pub id: EntityId,
    pub title: String,
    pub content: String,
    pub author_id: EntityId,
}

impl From<infra::models::PostRow> for Post {
    fn from(row: infra::models::PostRow) -> Self {
        Self {
            id: row.id.into(),
            title: row.title,
            content: row.content,
            author_id: row.author_id.into(),
        }
    }
}

#[ComplexObject]
impl Post {
    async fn author(&self, ctx: &Context<'_>) -> Result<User> {
        load_referenced_user(ctx, &self.author_id).await
    }
}
