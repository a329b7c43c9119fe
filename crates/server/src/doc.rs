use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    tags(
        (name = "Classes", description = "Class rosters and class creation"),
        (name = "Assignments", description = "Assigning teachers to the courses of a class"),
        (name = "Registry", description = "Student, teacher and parent records"),
        (name = "Reference", description = "Class levels, streams and departments"),
        (name = "Health", description = "Service status"),
    ),
    info(
        title = "School API",
        version = "1.0.0",
        description = "Class management and teacher assignment",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
