use async_graphql::{Context, Object, Result};

use crate::gql::error::ResultExt;
use crate::gql::scalars::EntityId;
use crate::state::AppState;
use infra::repos::posts;

use super::types::Post;

#[derive(Default)]
pub struct PostQuery;

#[Object]
impl PostQuery {
    async fn post(&self, ctx: &Context<'_>, id: EntityId) -> Result<Option<Post>> {
        let state = ctx.data::<AppState>()?;
        let row = posts::get_by_id(&state.db, id.as_str()).await.gql()?;
        Ok(row.map(Post::from))
    }

    async fn posts(&self, ctx: &Context<'_>) -> Result<Vec<Post>> {
        let state = ctx.data::<AppState>()?;
        let rows = posts::list(&state.db).await.gql()?;
        Ok(rows.into_iter().map(Post::from).collect())
    }
}
