use crate::{
    dtos::class::{CreateClassRequest, CreateClassResponse, RosterQuery, RosterStudent},
    error::{ApiError, ErrorKey},
    state::AppState,
};
use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
    http::StatusCode,
};
use database::{db::with_connection, services::class::ClassService};
use models::ErrorBody;

/// List the students of a class level (and stream, for classes 9 and 10)
#[utoipa::path(
    get,
    path = "/classes/newclass",
    params(RosterQuery),
    responses(
        (status = 200, description = "Students of the class level", body = [RosterStudent]),
        (status = 400, description = "Missing class level or stream", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "Classes"
)]
pub async fn list_students(
    State(state): State<AppState>,
    Query(query): Query<RosterQuery>,
) -> Result<Json<Vec<RosterStudent>>, ApiError> {
    let roster = with_connection(&state.database_url, |db| async move {
        ClassService::list_students(&db, query.class_level.as_deref(), query.stream.as_deref())
            .await
    })
    .await
    .map_err(ApiError::class)?;

    Ok(Json(roster.into_iter().map(RosterStudent::from).collect()))
}

/// Create a class from existing students
#[utoipa::path(
    post,
    path = "/classes/newclass",
    request_body = CreateClassRequest,
    responses(
        (status = 201, description = "Class created", body = CreateClassResponse),
        (status = 400, description = "Invalid class or duplicate class name", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "Classes"
)]
pub async fn create_class(
    State(state): State<AppState>,
    body: Result<Json<CreateClassRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateClassResponse>), ApiError> {
    let Json(request) = body.map_err(|e| ApiError::rejected(ErrorKey::Message, e))?;

    let created = with_connection(&state.database_url, |db| async move {
        ClassService::create_class(&db, request.into()).await
    })
    .await
    .map_err(ApiError::class)?;

    Ok((
        StatusCode::CREATED,
        Json(CreateClassResponse {
            message: "Class created successfully".to_string(),
            class_id: created.id,
            class_name: created.class_name,
            students: created.students,
        }),
    ))
}
