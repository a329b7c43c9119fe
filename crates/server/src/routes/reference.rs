use axum::Json;
use models::Catalog;

/// Class levels, streams and departments known to the school
#[utoipa::path(
    get,
    path = "/reference",
    responses(
        (status = 200, description = "Reference data", body = Catalog)
    ),
    tag = "Reference"
)]
pub async fn reference() -> Json<Catalog> {
    Json(Catalog::default())
}
