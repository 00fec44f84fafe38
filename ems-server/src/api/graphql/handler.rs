//! GraphQL HTTP Handlers

use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Extension;
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use http::HeaderMap;
use http::header::AUTHORIZATION;

use super::AppSchema;
use crate::auth::JwtService;
use crate::core::ServerState;

/// Execute a GraphQL request
///
/// Bearer tokens are optional: a valid one attaches the current user to
/// the resolver context, an invalid one is logged and dropped. No
/// operation is gated on authentication.
pub async fn graphql(
    State(state): State<ServerState>,
    Extension(schema): Extension<AppSchema>,
    headers: HeaderMap,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let mut request = req.into_inner();

    if let Some(header) = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok())
        && let Some(token) = JwtService::extract_from_header(header)
    {
        match state.auth_service.verify_token(token) {
            Ok(user) => {
                tracing::debug!(username = %user.username, "Authenticated GraphQL request");
                request = request.data(user);
            }
            Err(e) => {
                tracing::warn!("Ignoring invalid bearer token: {}", e);
            }
        }
    }

    schema.execute(request).await.into()
}

/// Serve the Apollo Sandbox page for interactive queries
pub async fn sandbox() -> impl IntoResponse {
    Html(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>EMS Server - Apollo Sandbox</title>
    <style>body { margin: 0; overflow: hidden; }</style>
</head>
<body>
    <div id="sandbox" style="width: 100vw; height: 100vh;"></div>
    <script src="https://embeddable-sandbox.cdn.apollographql.com/_latest/embeddable-sandbox.umd.production.min.js"></script>
    <script>
        new window.EmbeddedSandbox({
            target: '#sandbox',
            initialEndpoint: window.location.origin + '/graphql',
        });
    </script>
</body>
</html>"#,
    )
}
