use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        pet::{CreatePetDto, PetDto, PetWithOwnerDto},
    },
    server::{
        error::AppError,
        model::{pet::CreatePetParam, search::PetFilter},
        service::pet::PetService,
        state::AppState,
    },
};

/// Tag for grouping pet endpoints in OpenAPI documentation
pub static PET_TAG: &str = "pet";

/// Query parameters accepted by the pet searches.
///
/// Values are kept as raw strings so that empty values can be treated as absent and
/// malformed dates or IDs reported as validation errors.
#[derive(Deserialize)]
pub struct PetSearchQuery {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub date: Option<String>,
    pub owner_id: Option<String>,
}

impl PetSearchQuery {
    fn into_filter(self) -> Result<PetFilter, AppError> {
        PetFilter::parse(self.origin, self.destination, self.date, self.owner_id)
    }
}

/// List all registered pets.
///
/// # Returns
/// - `200 OK` - Every pet ordered by ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/pets",
    tag = PET_TAG,
    responses(
        (status = 200, description = "Successfully retrieved pets", body = Vec<PetDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_pets(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let pets = PetService::new(&state.db).get_all().await?;

    Ok(Json(pets.into_iter().map(|pet| pet.into_dto()).collect::<Vec<_>>()))
}

/// Register a pet for transport.
///
/// The owner referenced by `user_id` must already exist; otherwise the insert is
/// rejected by the storage foreign key and nothing is stored.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Pet creation data including the owner ID and travel date
///
/// # Returns
/// - `201 Created` - The stored pet
/// - `400 Bad Request` - Body is not valid JSON for this shape
/// - `409 Conflict` - The owner does not exist
/// - `422 Unprocessable Entity` - One or more fields failed validation
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/pets",
    tag = PET_TAG,
    request_body = CreatePetDto,
    responses(
        (status = 201, description = "Successfully created pet", body = PetDto),
        (status = 400, description = "Malformed request body", body = ErrorDto),
        (status = 409, description = "Owner does not exist", body = ErrorDto),
        (status = 422, description = "Invalid pet data", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_pet(
    State(state): State<AppState>,
    payload: Result<Json<CreatePetDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let param = CreatePetParam::from_dto(payload)?;

    let pet = PetService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(pet.into_dto())))
}

/// Get a pet by ID.
///
/// # Returns
/// - `200 OK` - The pet
/// - `404 Not Found` - No pet with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/pets/{id}",
    tag = PET_TAG,
    params(
        ("id" = i32, Path, description = "Pet ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved pet", body = PetDto),
        (status = 404, description = "Pet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pet_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let pet = PetService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Pet not found".to_string()))?;

    Ok(Json(pet.into_dto()))
}

/// Search pets by route, date and owner.
///
/// Every supplied filter must match exactly. Empty or missing filters are ignored,
/// so a request without filters returns every pet.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - Optional origin, destination, date and owner filters
///
/// # Returns
/// - `200 OK` - Matching pets ordered by ID
/// - `422 Unprocessable Entity` - `date` or `owner_id` could not be parsed
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/pets/search",
    tag = PET_TAG,
    params(
        ("origin" = Option<String>, Query, description = "Exact origin to match"),
        ("destination" = Option<String>, Query, description = "Exact destination to match"),
        ("date" = Option<String>, Query, description = "Travel date, YYYY-MM-DD"),
        ("owner_id" = Option<i32>, Query, description = "Owning user ID")
    ),
    responses(
        (status = 200, description = "Successfully searched pets", body = Vec<PetDto>),
        (status = 422, description = "Invalid filter value", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_pets(
    State(state): State<AppState>,
    Query(query): Query<PetSearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    let filter = query.into_filter()?;

    let pets = PetService::new(&state.db).search(&filter).await?;

    Ok(Json(pets.into_iter().map(|pet| pet.into_dto()).collect::<Vec<_>>()))
}

/// Search pets and include each pet's owner.
///
/// Accepts the same filters as `/api/pets/search`. Pets whose owner row is missing
/// are left out of the result.
///
/// # Returns
/// - `200 OK` - Matching pets with owners ordered by pet ID
/// - `422 Unprocessable Entity` - `date` or `owner_id` could not be parsed
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/pets/search/owners",
    tag = PET_TAG,
    params(
        ("origin" = Option<String>, Query, description = "Exact origin to match"),
        ("destination" = Option<String>, Query, description = "Exact destination to match"),
        ("date" = Option<String>, Query, description = "Travel date, YYYY-MM-DD"),
        ("owner_id" = Option<i32>, Query, description = "Owning user ID")
    ),
    responses(
        (status = 200, description = "Successfully searched pets with owners", body = Vec<PetWithOwnerDto>),
        (status = 422, description = "Invalid filter value", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_pets_with_owner(
    State(state): State<AppState>,
    Query(query): Query<PetSearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    let filter = query.into_filter()?;

    let rows = PetService::new(&state.db)
        .search_with_owner(&filter)
        .await?;

    Ok(Json(
        rows.into_iter().map(|row| row.into_dto()).collect::<Vec<_>>(),
    ))
}
