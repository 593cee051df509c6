use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQLRequest;
use async_graphql_axum::GraphQLResponse;
use axum::extract::State;
use axum::response::Html;
use axum::response::IntoResponse;
use axum::Extension;

use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::inbound::http::router::GRAPHQL_ROUTE;

/// Execute a GraphQL request on behalf of the authenticated user.
pub async fn graphql(
    State(state): State<AppState>,
    Extension(principal): Extension<AuthenticatedUser>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    let request = request.into_inner().data(principal);
    state.schema.execute(request).await.into()
}

/// Serve the GraphiQL IDE pointed at the GraphQL endpoint.
pub async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_ROUTE).finish())
}
