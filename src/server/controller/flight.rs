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
        flight::{AvailableFlightDto, CreateFlightDto, FlightDto},
    },
    server::{
        error::AppError,
        model::{flight::CreateFlightParam, search::PetFilter},
        service::{flight::FlightService, pet::PetService},
        state::AppState,
    },
};

/// Tag for grouping flight endpoints in OpenAPI documentation
pub static FLIGHT_TAG: &str = "flight";

/// Query parameters accepted by the available flights report.
#[derive(Deserialize)]
pub struct AvailableFlightsQuery {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub date: Option<String>,
}

/// List all recorded flights.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - Every flight ordered by ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/vuelos",
    tag = FLIGHT_TAG,
    responses(
        (status = 200, description = "Successfully retrieved flights", body = Vec<FlightDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_flights(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let flights = FlightService::new(&state.db).get_all().await?;

    Ok(Json(
        flights
            .into_iter()
            .map(|flight| flight.into_dto())
            .collect::<Vec<_>>(),
    ))
}

/// Record a new flight.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Flight creation data (origin, destination, date, capacity)
///
/// # Returns
/// - `201 Created` - The stored flight
/// - `400 Bad Request` - Body is not valid JSON for this shape
/// - `422 Unprocessable Entity` - One or more fields failed validation
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/vuelos",
    tag = FLIGHT_TAG,
    request_body = CreateFlightDto,
    responses(
        (status = 201, description = "Successfully created flight", body = FlightDto),
        (status = 400, description = "Malformed request body", body = ErrorDto),
        (status = 422, description = "Invalid flight data", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_flight(
    State(state): State<AppState>,
    payload: Result<Json<CreateFlightDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let param = CreateFlightParam::from_dto(payload)?;

    let flight = FlightService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(flight.into_dto())))
}

/// Get a flight by ID.
///
/// # Returns
/// - `200 OK` - The flight
/// - `404 Not Found` - No flight with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/vuelos/{id}",
    tag = FLIGHT_TAG,
    params(
        ("id" = i32, Path, description = "Flight ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved flight", body = FlightDto),
        (status = 404, description = "Flight not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_flight_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let flight = FlightService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Flight not found".to_string()))?;

    Ok(Json(flight.into_dto()))
}

/// Report available flights derived from pet registrations.
///
/// Groups registered pets by origin, destination and date and returns one entry per
/// group with the number of pets booked on it. The flight table is not consulted.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - Optional origin, destination and date filters applied before grouping
///
/// # Returns
/// - `200 OK` - Groups ordered by origin, destination and date
/// - `422 Unprocessable Entity` - `date` is not a calendar date
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/flights",
    tag = FLIGHT_TAG,
    params(
        ("origin" = Option<String>, Query, description = "Exact origin to match"),
        ("destination" = Option<String>, Query, description = "Exact destination to match"),
        ("date" = Option<String>, Query, description = "Travel date, YYYY-MM-DD")
    ),
    responses(
        (status = 200, description = "Successfully computed available flights", body = Vec<AvailableFlightDto>),
        (status = 422, description = "Invalid filter value", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_available_flights(
    State(state): State<AppState>,
    Query(query): Query<AvailableFlightsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let filter = PetFilter::parse(query.origin, query.destination, query.date, None)?;

    let flights = PetService::new(&state.db).available_flights(&filter).await?;

    Ok(Json(
        flights
            .into_iter()
            .map(|flight| flight.into_dto())
            .collect::<Vec<_>>(),
    ))
}
