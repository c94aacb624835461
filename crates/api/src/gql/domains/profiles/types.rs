use async_graphql::{ComplexObject, Context, Result, SimpleObject};

use crate::gql::common::helpers::load_referenced_user;
use crate::gql::domains::member_types::MemberType;
use crate::gql::domains::users::User;
use crate::gql::error::{GqlError, ResultExt};
use crate::gql::loaders::{MemberTypeLoader, RequestLoader};
use crate::gql::scalars::{EntityId, MemberTypeId};

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Profile {
    pub id: EntityId,
    pub is_male: bool,
    pub year_of_birth: i32,
    pub user_id: EntityId,
    pub member_type_id: MemberTypeId,
    /// Set when the member type was fetched together with the profile.
    #[graphql(skip)]
    pub included_member_type: Option<MemberType>,
}

impl From<infra::models::ProfileRow> for Profile {
    fn from(row: infra::models::ProfileRow) -> Self {
        Self {
            id: row.id.into(),
            is_male: row.is_male,
            year_of_birth: row.year_of_birth,
            user_id: row.user_id.into(),
            member_type_id: row.member_type_id.into(),
            included_member_type: None,
        }
    }
}

impl From<infra::models::ProfileWithMemberTypeRow> for Profile {
    fn from(row: infra::models::ProfileWithMemberTypeRow) -> Self {
        Self {
            included_member_type: Some(row.member_type.0.into()),
            ..Self::from(row.profile)
        }
    }
}

#[ComplexObject]
impl Profile {
    async fn user(&self, ctx: &Context<'_>) -> Result<User> {
        load_referenced_user(ctx, &self.user_id).await
    }

    async fn member_type(&self, ctx: &Context<'_>) -> Result<MemberType> {
        if let Some(member_type) = &self.included_member_type {
            return Ok(member_type.clone());
        }

        let loader = ctx.data::<RequestLoader<MemberTypeLoader>>()?;
        let key: infra::models::MemberTypeId = self.member_type_id.into();

        match loader.load_one(key).await.gql()? {
            Some(row) => Ok(row.into()),
            None => Err(GqlError::new(format!("Member type {} not found", key.as_str())).into()),
        }
    }
}
