use async_graphql::dataloader::{DataLoader, HashMapCache, Loader};
use async_graphql::Request;
use infra::db::Db;
use infra::models::{MemberTypeId, MemberTypeRow, PostRow, ProfileRow, RelatedUserRow, UserRow};
use infra::repos::{member_types, posts, profiles, users};
use std::{collections::HashMap, future::Future, sync::Arc};

/// A loader that lives for one request: batches sibling lookups and memoises by key.
pub type RequestLoader<T> = DataLoader<T, HashMapCache>;

/// Attach a fresh set of loaders to `request` so nothing is cached across requests.
pub fn attach(request: Request, db: &Db) -> Request {
    request
        .data(DataLoader::with_cache(
            UserLoader::new(db.clone()),
            tokio::spawn,
            HashMapCache::default(),
        ))
        .data(DataLoader::with_cache(
            ProfileByUserLoader::new(db.clone()),
            tokio::spawn,
            HashMapCache::default(),
        ))
        .data(DataLoader::with_cache(
            PostsByAuthorLoader::new(db.clone()),
            tokio::spawn,
            HashMapCache::default(),
        ))
        .data(DataLoader::with_cache(
            MemberTypeLoader::new(db.clone()),
            tokio::spawn,
            HashMapCache::default(),
        ))
        .data(DataLoader::with_cache(
            ProfilesByMemberTypeLoader::new(db.clone()),
            tokio::spawn,
            HashMapCache::default(),
        ))
        .data(DataLoader::with_cache(
            SubscribersLoader::new(db.clone()),
            tokio::spawn,
            HashMapCache::default(),
        ))
        .data(DataLoader::with_cache(
            SubscribedAuthorsLoader::new(db.clone()),
            tokio::spawn,
            HashMapCache::default(),
        ))
}

fn group_related(rows: Vec<RelatedUserRow>) -> HashMap<String, Vec<UserRow>> {
    let mut grouped: HashMap<String, Vec<UserRow>> = HashMap::new();
    for row in rows {
        grouped.entry(row.related_id).or_default().push(row.user);
    }
    grouped
}

// UserLoader - batch load users by ID
#[derive(Clone)]
pub struct UserLoader {
    pool: Db,
}

impl UserLoader {
    pub fn new(pool: Db) -> Self {
        Self { pool }
    }
}

impl Loader<String> for UserLoader {
    type Value = UserRow;
    type Error = Arc<sqlx::Error>;

    fn load(
        &self,
        keys: &[String],
    ) -> impl Future<Output = std::result::Result<HashMap<String, Self::Value>, Self::Error>> + Send
    {
        let pool = self.pool.clone();
        let ids: Vec<String> = keys.to_vec();

        async move {
            if ids.is_empty() {
                return Ok(HashMap::new());
            }

            let rows = users::get_by_ids(&pool, &ids).await.map_err(Arc::new)?;

            Ok(rows.into_iter().map(|r| (r.id.clone(), r)).collect())
        }
    }
}

// ProfileByUserLoader - batch load the (at most one) profile of each user
#[derive(Clone)]
pub struct ProfileByUserLoader {
    pool: Db,
}

impl ProfileByUserLoader {
    pub fn new(pool: Db) -> Self {
        Self { pool }
    }
}

impl Loader<String> for ProfileByUserLoader {
    type Value = ProfileRow;
    type Error = Arc<sqlx::Error>;

    fn load(
        &self,
        keys: &[String],
    ) -> impl Future<Output = std::result::Result<HashMap<String, Self::Value>, Self::Error>> + Send
    {
        let pool = self.pool.clone();
        let user_ids: Vec<String> = keys.to_vec();

        async move {
            if user_ids.is_empty() {
                return Ok(HashMap::new());
            }

            let rows = profiles::list_by_user_ids(&pool, &user_ids)
                .await
                .map_err(Arc::new)?;

            Ok(rows.into_iter().map(|r| (r.user_id.clone(), r)).collect())
        }
    }
}

// PostsByAuthorLoader - batch load posts grouped by author ID
#[derive(Clone)]
pub struct PostsByAuthorLoader {
    pool: Db,
}

impl PostsByAuthorLoader {
    pub fn new(pool: Db) -> Self {
        Self { pool }
    }
}

impl Loader<String> for PostsByAuthorLoader {
    type Value = Vec<PostRow>;
    type Error = Arc<sqlx::Error>;

    fn load(
        &self,
        keys: &[String],
    ) -> impl Future<Output = std::result::Result<HashMap<String, Self::Value>, Self::Error>> + Send
    {
        let pool = self.pool.clone();
        let author_ids: Vec<String> = keys.to_vec();

        async move {
            if author_ids.is_empty() {
                return Ok(HashMap::new());
            }

            let rows = posts::list_by_author_ids(&pool, &author_ids)
                .await
                .map_err(Arc::new)?;

            let mut grouped: HashMap<String, Vec<PostRow>> = HashMap::new();
            for row in rows {
                grouped.entry(row.author_id.clone()).or_default().push(row);
            }
            Ok(grouped)
        }
    }
}

// MemberTypeLoader - batch load member types by their enum key
#[derive(Clone)]
pub struct MemberTypeLoader {
    pool: Db,
}

impl MemberTypeLoader {
    pub fn new(pool: Db) -> Self {
        Self { pool }
    }
}

impl Loader<MemberTypeId> for MemberTypeLoader {
    type Value = MemberTypeRow;
    type Error = Arc<sqlx::Error>;

    fn load(
        &self,
        keys: &[MemberTypeId],
    ) -> impl Future<Output = std::result::Result<HashMap<MemberTypeId, Self::Value>, Self::Error>>
           + Send {
        let pool = self.pool.clone();
        let ids: Vec<MemberTypeId> = keys.to_vec();

        async move {
            if ids.is_empty() {
                return Ok(HashMap::new());
            }

            let rows = member_types::get_by_ids(&pool, &ids)
                .await
                .map_err(Arc::new)?;

            Ok(rows.into_iter().map(|r| (r.id, r)).collect())
        }
    }
}

// ProfilesByMemberTypeLoader - profiles grouped by membership tier
#[derive(Clone)]
pub struct ProfilesByMemberTypeLoader {
    pool: Db,
}

impl ProfilesByMemberTypeLoader {
    pub fn new(pool: Db) -> Self {
        Self { pool }
    }
}

impl Loader<MemberTypeId> for ProfilesByMemberTypeLoader {
    type Value = Vec<ProfileRow>;
    type Error = Arc<sqlx::Error>;

    fn load(
        &self,
        keys: &[MemberTypeId],
    ) -> impl Future<Output = std::result::Result<HashMap<MemberTypeId, Self::Value>, Self::Error>>
           + Send {
        let pool = self.pool.clone();
        let ids: Vec<MemberTypeId> = keys.to_vec();

        async move {
            if ids.is_empty() {
                return Ok(HashMap::new());
            }

            let rows = profiles::list_by_member_types(&pool, &ids)
                .await
                .map_err(Arc::new)?;

            let mut grouped: HashMap<MemberTypeId, Vec<ProfileRow>> = HashMap::new();
            for row in rows {
                grouped.entry(row.member_type_id).or_default().push(row);
            }
            Ok(grouped)
        }
    }
}

// SubscribersLoader - users subscribed to each author ID
#[derive(Clone)]
pub struct SubscribersLoader {
    pool: Db,
}

impl SubscribersLoader {
    pub fn new(pool: Db) -> Self {
        Self { pool }
    }
}

impl Loader<String> for SubscribersLoader {
    type Value = Vec<UserRow>;
    type Error = Arc<sqlx::Error>;

    fn load(
        &self,
        keys: &[String],
    ) -> impl Future<Output = std::result::Result<HashMap<String, Self::Value>, Self::Error>> + Send
    {
        let pool = self.pool.clone();
        let author_ids: Vec<String> = keys.to_vec();

        async move {
            if author_ids.is_empty() {
                return Ok(HashMap::new());
            }

            let rows = users::list_subscribers_of_many(&pool, &author_ids)
                .await
                .map_err(Arc::new)?;

            Ok(group_related(rows))
        }
    }
}

// SubscribedAuthorsLoader - authors each subscriber ID is subscribed to
#[derive(Clone)]
pub struct SubscribedAuthorsLoader {
    pool: Db,
}

impl SubscribedAuthorsLoader {
    pub fn new(pool: Db) -> Self {
        Self { pool }
    }
}

impl Loader<String> for SubscribedAuthorsLoader {
    type Value = Vec<UserRow>;
    type Error = Arc<sqlx::Error>;

    fn load(
        &self,
        keys: &[String],
    ) -> impl Future<Output = std::result::Result<HashMap<String, Self::Value>, Self::Error>> + Send
    {
        let pool = self.pool.clone();
        let subscriber_ids: Vec<String> = keys.to_vec();

        async move {
            if subscriber_ids.is_empty() {
                return Ok(HashMap::new());
            }

            let rows = users::list_authors_of_many(&pool, &subscriber_ids)
                .await
                .map_err(Arc::new)?;

            Ok(group_related(rows))
        }
    }
}
