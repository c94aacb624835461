use async_graphql::{ComplexObject, Context, Result, SimpleObject};

use crate::gql::domains::posts::Post;
use crate::gql::domains::profiles::Profile;
use crate::gql::error::{GqlError, ResultExt};
use crate::gql::loaders::{
    PostsByAuthorLoader, ProfileByUserLoader, RequestLoader, SubscribedAuthorsLoader,
    SubscribersLoader,
};
use crate::gql::scalars::EntityId;

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct User {
    pub id: EntityId,
    pub name: String,
    /// Stored value; exposed through the `balance` resolver.
    #[graphql(skip)]
    pub balance: f64,
    #[graphql(skip)]
    pub includes: UserIncludes,
}

/// Relationships fetched together with the user.
///
/// `None` means the producer did not include that relationship and the field
/// resolver must fetch it; `Some` is authoritative, including an empty list or
/// a missing profile.
#[derive(Clone, Debug, Default)]
pub struct UserIncludes {
    pub posts: Option<Vec<Post>>,
    pub profile: Option<Option<Profile>>,
}

impl From<infra::models::UserRow> for User {
    fn from(row: infra::models::UserRow) -> Self {
        Self {
            id: row.id.into(),
            name: row.name,
            balance: row.balance,
            includes: UserIncludes::default(),
        }
    }
}

impl From<infra::models::UserWithIncludesRow> for User {
    fn from(row: infra::models::UserWithIncludesRow) -> Self {
        let posts = row.posts.0.into_iter().map(Post::from).collect();
        let profile = row.profile.map(|p| Profile::from(p.0));

        Self {
            includes: UserIncludes {
                posts: Some(posts),
                profile: Some(profile),
            },
            ..Self::from(row.user)
        }
    }
}

#[ComplexObject]
impl User {
    /// `Float!` has no encoding for NaN or infinity.
    async fn balance(&self) -> Result<f64> {
        if !self.balance.is_finite() {
            return Err(GqlError::new(format!(
                "User {} has a non-finite balance",
                self.id
            ))
            .into());
        }

        Ok(self.balance)
    }

    async fn profile(&self, ctx: &Context<'_>) -> Result<Option<Profile>> {
        if let Some(profile) = &self.includes.profile {
            return Ok(profile.clone());
        }

        let loader = ctx.data::<RequestLoader<ProfileByUserLoader>>()?;
        let row = loader.load_one(self.id.to_string()).await.gql()?;

        Ok(row.map(Profile::from))
    }

    async fn posts(&self, ctx: &Context<'_>) -> Result<Vec<Post>> {
        if let Some(posts) = &self.includes.posts {
            return Ok(posts.clone());
        }

        let loader = ctx.data::<RequestLoader<PostsByAuthorLoader>>()?;
        let rows = loader
            .load_one(self.id.to_string())
            .await
            .gql()?
            .unwrap_or_default();

        Ok(rows.into_iter().map(Post::from).collect())
    }

    /// Users this user is subscribed to.
    async fn user_subscribed_to(&self, ctx: &Context<'_>) -> Result<Vec<User>> {
        let loader = ctx.data::<RequestLoader<SubscribedAuthorsLoader>>()?;
        let rows = loader
            .load_one(self.id.to_string())
            .await
            .gql()?
            .unwrap_or_default();

        Ok(rows.into_iter().map(User::from).collect())
    }

    /// Users subscribed to this user.
    async fn subscribed_to_user(&self, ctx: &Context<'_>) -> Result<Vec<User>> {
        let loader = ctx.data::<RequestLoader<SubscribersLoader>>()?;
        let rows = loader
            .load_one(self.id.to_string())
            .await
            .gql()?
            .unwrap_or_default();

        Ok(rows.into_iter().map(User::from).collect())
    }
}
