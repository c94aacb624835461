use async_graphql::{EmptyMutation, EmptySubscription, Request, Response, Schema};

use super::domains::subscribers_on_authors::SubscribersOnAuthors;
use super::loaders;
use super::QueryRoot;
use crate::state::AppState;

pub type AppSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Build the GraphQL schema and inject shared state (AppState) into the context.
///
/// Build once per process and share it; per-request data is attached by [`execute`].
pub fn build_schema(state: AppState) -> AppSchema {
    let introspection_enabled = state.introspection_enabled();

    let mut builder = Schema::build(QueryRoot::default(), EmptyMutation, EmptySubscription)
        // Not returned by any query field, but part of the declared type graph
        .register_output_type::<SubscribersOnAuthors>()
        .data(state) // AppState is Clone; available in resolvers via ctx.data::<AppState>()
        .limit_depth(15)
        .limit_complexity(200);

    if !introspection_enabled {
        builder = builder.disable_introspection();
    }

    builder.finish()
}

/// Execute a request with a fresh set of per-request loaders.
pub async fn execute(schema: &AppSchema, state: &AppState, request: Request) -> Response {
    let request = loaders::attach(request, &state.db);
    schema.execute(request).await
}
