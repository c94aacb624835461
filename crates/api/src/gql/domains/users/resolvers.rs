use async_graphql::{Context, Object, Result};

use crate::gql::error::ResultExt;
use crate::gql::scalars::EntityId;
use crate::state::AppState;
use infra::repos::users;

use super::types::User;

#[derive(Default)]
pub struct UserQuery;

#[Object]
impl UserQuery {
    /// Get a single user by ID, together with its posts and profile.
    async fn user(&self, ctx: &Context<'_>, id: EntityId) -> Result<Option<User>> {
        let state = ctx.data::<AppState>()?;

        let row = users::get_with_includes(&state.db, id.as_str())
            .await
            .gql()?;

        Ok(row.map(User::from))
    }

    async fn users(&self, ctx: &Context<'_>) -> Result<Vec<User>> {
        let state = ctx.data::<AppState>()?;
        let rows = users::list(&state.db).await.gql()?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    /// Users holding a subscription to the author `id`.
    async fn user_subscribed_to(&self, ctx: &Context<'_>, id: EntityId) -> Result<Vec<User>> {
        let state = ctx.data::<AppState>()?;

        let rows = users::list_subscribers_of(&state.db, id.as_str())
            .await
            .gql()?;

        tracing::debug!(author_id = %id, subscribers = rows.len(), "Loaded subscribers");

        Ok(rows.into_iter().map(User::from).collect())
    }
}
