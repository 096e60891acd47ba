//! `/graphql` transport: POST executes an operation, GET serves GraphiQL.

use actix_web::{HttpResponse, web};
use async_graphql::http::GraphiQLSource;
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};

use crate::inbound::graphql::HotelSchema;

/// Path the schema is mounted on.
pub const GRAPHQL_PATH: &str = "/graphql";

/// Execute a GraphQL request against the shared schema.
pub async fn execute(schema: web::Data<HotelSchema>, request: GraphQLRequest) -> GraphQLResponse {
    schema.execute(request.into_inner()).await.into()
}

/// Serve the GraphiQL explorer pointed at [`GRAPHQL_PATH`].
pub async fn graphiql() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

/// Register the `/graphql` resource on an Actix service config.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(GRAPHQL_PATH)
            .route(web::post().to(execute))
            .route(web::get().to(graphiql)),
    );
}
