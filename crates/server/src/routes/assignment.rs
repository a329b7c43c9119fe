use crate::{
    dtos::assignment::{Action, AssignTeachersRequest, AssignmentQuery},
    error::{ApiError, ErrorKey},
    state::AppState,
};
use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use database::{
    ServiceError,
    db::with_connection,
    services::assignment::{AssignTeachers, AssignmentService},
};
use models::{AssignmentReceipt, ClassDocument, ClassOverview, ErrorBody, TeacherOverview};
use sea_orm::DbErr;

/// Classes or department teachers for the assignment form, depending on `action`
#[utoipa::path(
    get,
    path = "/classes/newclass/assignteachers",
    params(AssignmentQuery),
    responses(
        (status = 200, description = "Classes for `fetchClasses`, teachers for `fetchTeachers`", body = [ClassOverview]),
        (status = 400, description = "Invalid action or missing parameters", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "Assignments"
)]
pub async fn fetch_for_assignment(
    State(state): State<AppState>,
    Query(query): Query<AssignmentQuery>,
) -> Result<Response, ApiError> {
    let database_url = &state.database_url;

    match (query.action(), query.department) {
        (Some(Action::FetchClasses), _) => {
            let classes = with_connection(database_url, |db| async move {
                AssignmentService::fetch_classes_for_assignment(&db).await
            })
            .await
            .map_err(internal)?;

            let classes: Vec<ClassOverview> = classes.into_iter().map(Into::into).collect();
            Ok(Json(classes).into_response())
        }
        (Some(Action::FetchTeachers), Some(department)) => {
            let teachers = with_connection(database_url, |db| async move {
                AssignmentService::fetch_teachers_by_department(&db, Some(department.as_str())).await
            })
            .await
            .map_err(internal)?;

            let teachers: Vec<TeacherOverview> = teachers.into_iter().map(Into::into).collect();
            Ok(Json(teachers).into_response())
        }
        _ => Err(ApiError::bad_request(
            ErrorKey::Error,
            "Invalid action or missing parameters",
        )),
    }
}

/// Replace the course teachers of a class
#[utoipa::path(
    post,
    path = "/classes/newclass/assignteachers",
    request_body = AssignTeachersRequest,
    responses(
        (status = 200, description = "Teachers assigned", body = AssignmentReceipt),
        (status = 400, description = "Invalid input data", body = ErrorBody),
        (status = 404, description = "Class not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "Assignments"
)]
pub async fn assign_teachers(
    State(state): State<AppState>,
    body: Result<Json<AssignTeachersRequest>, JsonRejection>,
) -> Result<Json<AssignmentReceipt>, ApiError> {
    let request: AssignTeachers = match body {
        Ok(Json(request)) => request.into(),
        Err(rejection) => {
            log::warn!("Rejected assignment body: {rejection}");
            return Err(ApiError::bad_request(ErrorKey::Error, "Invalid input data"));
        }
    };

    let updated = with_connection(&state.database_url, |db| async move {
        AssignmentService::assign_teachers(&db, request).await
    })
    .await
    .map_err(ApiError::assignment)?;

    Ok(Json(AssignmentReceipt {
        success: true,
        message: "Teachers assigned successfully!".to_string(),
        updated_class: ClassDocument::from(updated),
    }))
}

fn internal(err: DbErr) -> ApiError {
    ApiError::assignment(ServiceError::Database(err))
}
