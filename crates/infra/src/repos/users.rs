use sqlx::{PgExecutor, Result as SqlxResult};

use crate::models::{RelatedUserRow, UserRow, UserWithIncludesRow};

pub async fn list<'e>(executor: impl PgExecutor<'e>) -> SqlxResult<Vec<UserRow>> {
    sqlx::query_as::<_, UserRow>(
        r#"
        SELECT id, name, balance
        FROM users
        ORDER BY id ASC
        "#,
    )
    .fetch_all(executor)
    .await
}

pub async fn get_by_ids<'e>(
    executor: impl PgExecutor<'e>,
    ids: &[String],
) -> SqlxResult<Vec<UserRow>> {
    sqlx::query_as::<_, UserRow>(
        r#"
        SELECT id, name, balance
        FROM users
        WHERE id = ANY($1)
        "#,
    )
    .bind(ids)
    .fetch_all(executor)
    .await
}

/// Fetch a user with its posts and its profile (including the member type) in one statement.
pub async fn get_with_includes<'e>(
    executor: impl PgExecutor<'e>,
    id: &str,
) -> SqlxResult<Option<UserWithIncludesRow>> {
    sqlx::query_as::<_, UserWithIncludesRow>(
        r#"
        SELECT
            u.id,
            u.name,
            u.balance,
            COALESCE(
                (
                    SELECT json_agg(
                        json_build_object(
                            'id', p.id,
                            'title', p.title,
                            'content', p.content,
                            'author_id', p.author_id
                        )
                        ORDER BY p.id
                    )
                    FROM posts p
                    WHERE p.author_id = u.id
                ),
                '[]'::json
            ) AS posts,
            (
                SELECT json_build_object(
                    'id', pr.id,
                    'is_male', pr.is_male,
                    'year_of_birth', pr.year_of_birth,
                    'user_id', pr.user_id,
                    'member_type_id', pr.member_type_id,
                    'member_type', json_build_object(
                        'id', mt.id,
                        'discount', mt.discount,
                        'posts_limit_per_month', mt.posts_limit_per_month
                    )
                )
                FROM profiles pr
                JOIN member_types mt ON mt.id = pr.member_type_id
                WHERE pr.user_id = u.id
            ) AS profile
        FROM users u
        WHERE u.id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

/// Users holding a subscription edge towards `author_id`.
pub async fn list_subscribers_of<'e>(
    executor: impl PgExecutor<'e>,
    author_id: &str,
) -> SqlxResult<Vec<UserRow>> {
    sqlx::query_as::<_, UserRow>(
        r#"
        SELECT u.id, u.name, u.balance
        FROM users u
        WHERE EXISTS (
            SELECT 1
            FROM subscribers_on_authors s
            WHERE s.subscriber_id = u.id AND s.author_id = $1
        )
        ORDER BY u.id ASC
        "#,
    )
    .bind(author_id)
    .fetch_all(executor)
    .await
}

/// Subscribers of each author in `author_ids`; `related_id` is the author.
pub async fn list_subscribers_of_many<'e>(
    executor: impl PgExecutor<'e>,
    author_ids: &[String],
) -> SqlxResult<Vec<RelatedUserRow>> {
    sqlx::query_as::<_, RelatedUserRow>(
        r#"
        SELECT s.author_id AS related_id, u.id, u.name, u.balance
        FROM subscribers_on_authors s
        JOIN users u ON u.id = s.subscriber_id
        WHERE s.author_id = ANY($1)
        ORDER BY u.id ASC
        "#,
    )
    .bind(author_ids)
    .fetch_all(executor)
    .await
}

/// Authors followed by each subscriber in `subscriber_ids`; `related_id` is the subscriber.
pub async fn list_authors_of_many<'e>(
    executor: impl PgExecutor<'e>,
    subscriber_ids: &[String],
) -> SqlxResult<Vec<RelatedUserRow>> {
    sqlx::query_as::<_, RelatedUserRow>(
        r#"
        SELECT s.subscriber_id AS related_id, u.id, u.name, u.balance
        FROM subscribers_on_authors s
        JOIN users u ON u.id = s.author_id
        WHERE s.subscriber_id = ANY($1)
        ORDER BY u.id ASC
        "#,
    )
    .bind(subscriber_ids)
    .fetch_all(executor)
    .await
}
