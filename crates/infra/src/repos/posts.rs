use sqlx::{PgExecutor, Result as SqlxResult};

use crate::models::PostRow;

pub async fn list<'e>(executor: impl PgExecutor<'e>) -> SqlxResult<Vec<PostRow>> {
    sqlx::query_as::<_, PostRow>(
        r#"
        SELECT id, title, content, author_id
        FROM posts
        ORDER BY id ASC
        "#,
    )
    .fetch_all(executor)
    .await
}

pub async fn get_by_id<'e>(executor: impl PgExecutor<'e>, id: &str) -> SqlxResult<Option<PostRow>> {
    sqlx::query_as::<_, PostRow>(
        r#"
        SELECT id, title, content, author_id
        FROM posts
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

pub async fn list_by_author_ids<'e>(
    executor: impl PgExecutor<'e>,
    author_ids: &[String],
) -> SqlxResult<Vec<PostRow>> {
    sqlx::query_as::<_, PostRow>(
        r#"
        SELECT id, title, content, author_id
        FROM posts
        WHERE author_id = ANY($1)
        ORDER BY id ASC
        "#,
    )
    .bind(author_ids)
    .fetch_all(executor)
    .await
}
