use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        user::{CreateUserDto, UserDto},
    },
    server::{
        error::AppError, model::user::CreateUserParam, service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// List all users.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - Every registered user ordered by ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved users", body = Vec<UserDto>),
        (status = 503, description = "Database unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = UserService::new(&state.db).get_all().await?;

    Ok(Json(
        users.into_iter().map(|user| user.into_dto()).collect::<Vec<_>>(),
    ))
}

/// Register a new user.
///
/// Validates every field of the body and stores the user with a generated ID.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - User creation data (name, origin, destination, age)
///
/// # Returns
/// - `201 Created` - The stored user
/// - `400 Bad Request` - Body is not valid JSON for this shape
/// - `422 Unprocessable Entity` - One or more fields failed validation
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Successfully created user", body = UserDto),
        (status = 400, description = "Malformed request body", body = ErrorDto),
        (status = 422, description = "Invalid user data", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let param = CreateUserParam::from_dto(payload)?;

    let user = UserService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Get a user by ID.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - User ID
///
/// # Returns
/// - `200 OK` - The user
/// - `404 Not Found` - No user with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved user", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(Json(user.into_dto()))
}
