use sqlx::{PgExecutor, Result as SqlxResult};

use crate::models::{MemberTypeId, ProfileRow, ProfileWithMemberTypeRow};

pub async fn list<'e>(executor: impl PgExecutor<'e>) -> SqlxResult<Vec<ProfileRow>> {
    sqlx::query_as::<_, ProfileRow>(
        r#"
        SELECT id, is_male, year_of_birth, user_id, member_type_id
        FROM profiles
        ORDER BY id ASC
        "#,
    )
    .fetch_all(executor)
    .await
}

/// Fetch a profile together with its member type.
pub async fn get_with_member_type<'e>(
    executor: impl PgExecutor<'e>,
    id: &str,
) -> SqlxResult<Option<ProfileWithMemberTypeRow>> {
    sqlx::query_as::<_, ProfileWithMemberTypeRow>(
        r#"
        SELECT
            pr.id,
            pr.is_male,
            pr.year_of_birth,
            pr.user_id,
            pr.member_type_id,
            json_build_object(
                'id', mt.id,
                'discount', mt.discount,
                'posts_limit_per_month', mt.posts_limit_per_month
            ) AS member_type
        FROM profiles pr
        JOIN member_types mt ON mt.id = pr.member_type_id
        WHERE pr.id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

pub async fn list_by_user_ids<'e>(
    executor: impl PgExecutor<'e>,
    user_ids: &[String],
) -> SqlxResult<Vec<ProfileRow>> {
    sqlx::query_as::<_, ProfileRow>(
        r#"
        SELECT id, is_male, year_of_birth, user_id, member_type_id
        FROM profiles
        WHERE user_id = ANY($1)
        "#,
    )
    .bind(user_ids)
    .fetch_all(executor)
    .await
}

/// Profiles on any of the given tiers.
pub async fn list_by_member_types<'e>(
    executor: impl PgExecutor<'e>,
    member_type_ids: &[MemberTypeId],
) -> SqlxResult<Vec<ProfileRow>> {
    let labels: Vec<&str> = member_type_ids.iter().map(MemberTypeId::as_str).collect();

    sqlx::query_as::<_, ProfileRow>(
        r#"
        SELECT id, is_male, year_of_birth, user_id, member_type_id
        FROM profiles
        WHERE member_type_id::text = ANY($1)
        ORDER BY id ASC
        "#,
    )
    .bind(labels)
    .fetch_all(executor)
    .await
}
