use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        bill::{
            __path_create_bill, __path_delete_bill, __path_get_bill, __path_get_bills,
            __path_update_bill, create_bill, delete_bill, get_bill, get_bills, update_bill,
        },
        team::{
            __path_bulk_update_teams, __path_delete_team, __path_get_teams,
            __path_register_teams, __path_update_team, bulk_update_teams, delete_team,
            get_teams, register_teams, update_team,
        },
        tournament::{
            __path_create_tournament, __path_delete_tournament, __path_get_points_table,
            __path_get_tournament, __path_get_tournaments, create_tournament,
            delete_tournament, get_points_table, get_tournament, get_tournaments,
        },
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Tourneyboard API",
        description = "Esports tournaments, team standings and billing records"
    ),
    tags(
        (name = "tournament", description = "Tournaments and their points tables"),
        (name = "team", description = "Team registration and updates"),
        (name = "bill", description = "Billing records")
    )
)]
pub struct ApiDoc;

/// Builds the API routes together with their OpenAPI document.
pub fn router() -> (Router<AppState>, utoipa::openapi::OpenApi) {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(create_tournament, get_tournaments))
        .routes(routes!(get_tournament, delete_tournament))
        .routes(routes!(get_points_table))
        .routes(routes!(register_teams, get_teams))
        .routes(routes!(bulk_update_teams))
        .routes(routes!(update_team, delete_team))
        .routes(routes!(create_bill, get_bills))
        .routes(routes!(get_bill, update_bill, delete_bill))
        .split_for_parts()
}

/// Builds the complete application: API routes, Swagger UI and shared state.
pub fn app(state: AppState) -> Router {
    let (api, openapi) = router();

    api.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .with_state(state)
}
