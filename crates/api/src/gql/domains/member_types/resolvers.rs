use async_graphql::{Context, Object, Result};

use crate::gql::error::ResultExt;
use crate::gql::scalars::MemberTypeId;
use crate::state::AppState;
use infra::repos::member_types;

use super::types::MemberType;

#[derive(Default)]
pub struct MemberTypeQuery;

#[Object]
impl MemberTypeQuery {
    async fn member_types(&self, ctx: &Context<'_>) -> Result<Vec<MemberType>> {
        let state = ctx.data::<AppState>()?;
        let rows = member_types::list(&state.db).await.gql()?;
        Ok(rows.into_iter().map(MemberType::from).collect())
    }

    async fn member_type(
        &self,
        ctx: &Context<'_>,
        id: MemberTypeId,
    ) -> Result<Option<MemberType>> {
        let state = ctx.data::<AppState>()?;
        let row = member_types::get_by_id(&state.db, id.into()).await.gql()?;
        Ok(row.map(MemberType::from))
    }
}
