use async_graphql::{Context, Object, Result};

use crate::gql::error::ResultExt;
use crate::gql::scalars::EntityId;
use crate::state::AppState;
use infra::repos::profiles;

use super::types::Profile;

#[derive(Default)]
pub struct ProfileQuery;

#[Object]
impl ProfileQuery {
    /// Get a single profile by ID, together with its member type.
    async fn profile(&self, ctx: &Context<'_>, id: EntityId) -> Result<Option<Profile>> {
        let state = ctx.data::<AppState>()?;

        let row = profiles::get_with_member_type(&state.db, id.as_str())
            .await
            .gql()?;

        Ok(row.map(Profile::from))
    }

    async fn profiles(&self, ctx: &Context<'_>) -> Result<Vec<Profile>> {
        let state = ctx.data::<AppState>()?;
        let rows = profiles::list(&state.db).await.gql()?;
        Ok(rows.into_iter().map(Profile::from).collect())
    }
}
