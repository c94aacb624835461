use async_graphql::{ComplexObject, Context, Result, SimpleObject};

use crate::gql::domains::profiles::Profile;
use crate::gql::error::ResultExt;
use crate::gql::loaders::{ProfilesByMemberTypeLoader, RequestLoader};
use crate::gql::scalars::MemberTypeId;

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct MemberType {
    pub id: MemberTypeId,
    pub discount: f64,
    pub posts_limit_per_month: i32,
}

impl From<infra::models::MemberTypeRow> for MemberType {
    fn from(row: infra::models::MemberTypeRow) -> Self {
        Self {
            id: row.id.into(),
            discount: row.discount,
            posts_limit_per_month: row.posts_limit_per_month,
        }
    }
}

#[ComplexObject]
impl MemberType {
    /// Profiles on this membership tier.
    async fn profiles(&self, ctx: &Context<'_>) -> Result<Vec<Profile>> {
        let loader = ctx.data::<RequestLoader<ProfilesByMemberTypeLoader>>()?;
        let key: infra::models::MemberTypeId = self.id.into();
        let rows = loader.load_one(key).await.gql()?.unwrap_or_default();

        Ok(rows.into_iter().map(Profile::from).collect())
    }
}
