use axum::{routing::get, Json, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{
    controller::{
        flight::{
            __path_create_flight, __path_get_all_flights, __path_get_available_flights,
            __path_get_flight_by_id, create_flight, get_all_flights, get_available_flights,
            get_flight_by_id,
        },
        pet::{
            __path_create_pet, __path_get_all_pets, __path_get_pet_by_id, __path_search_pets,
            __path_search_pets_with_owner, create_pet, get_all_pets, get_pet_by_id, search_pets,
            search_pets_with_owner,
        },
        user::{
            __path_create_user, __path_get_all_users, __path_get_user_by_id, create_user,
            get_all_users, get_user_by_id,
        },
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pet Transit API",
        description = "Register users, the pets they ship and scheduled flights, and query pets by route"
    ),
    tags(
        (name = "user", description = "Pet owners"),
        (name = "pet", description = "Pets registered for transport"),
        (name = "flight", description = "Flights and per-route availability")
    )
)]
struct ApiDoc;

/// Builds the API router and serves the generated OpenAPI document at
/// `/api-docs/openapi.json`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(get_all_users, create_user))
        .routes(routes!(get_user_by_id))
        .routes(routes!(get_all_pets, create_pet))
        .routes(routes!(search_pets))
        .routes(routes!(search_pets_with_owner))
        .routes(routes!(get_pet_by_id))
        .routes(routes!(get_all_flights, create_flight))
        .routes(routes!(get_flight_by_id))
        .routes(routes!(get_available_flights))
        .split_for_parts();

    router.route("/api-docs/openapi.json", get(move || async move { Json(api) }))
}
