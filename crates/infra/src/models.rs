use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, sqlx::Type, Serialize, Deserialize)]
#[sqlx(type_name = "member_type_id", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MemberTypeId {
    Basic,
    Business,
}

impl MemberTypeId {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberTypeId::Basic => "basic",
            MemberTypeId::Business => "business",
        }
    }
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct UserRow {
    pub id: String,
    pub name: String,
    pub balance: f64,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ProfileRow {
    pub id: String,
    pub is_male: bool,
    pub year_of_birth: i32,
    pub user_id: String,
    pub member_type_id: MemberTypeId,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct PostRow {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author_id: String,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct MemberTypeRow {
    pub id: MemberTypeId,
    pub discount: f64,
    pub posts_limit_per_month: i32,
}

/// A profile fetched together with its member type.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ProfileWithMemberTypeRow {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub profile: ProfileRow,
    pub member_type: Json<MemberTypeRow>,
}

/// A user fetched together with its posts and its profile (with member type).
#[derive(Debug, Clone, FromRow)]
pub struct UserWithIncludesRow {
    #[sqlx(flatten)]
    pub user: UserRow,
    pub posts: Json<Vec<PostRow>>,
    pub profile: Option<Json<ProfileWithMemberTypeRow>>,
}

/// A user reached through a subscription edge, keyed by the user on the other end of it.
#[derive(Debug, Clone, FromRow)]
pub struct RelatedUserRow {
    pub related_id: String,
    #[sqlx(flatten)]
    pub user: UserRow,
}
