use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header::CONTENT_TYPE},
};
use database::{
    db::create_connection,
    services::registry::{Identity, NewStudent, NewTeacher, RegistryService},
};
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use serde_json::{Value, json};
use server::{app, state::AppState};
use tempfile::TempDir;
use tower::ServiceExt;

struct TestApp {
    router: Router,
    db: DatabaseConnection,
    // Keeps the database file alive for the test
    _dir: TempDir,
}

impl TestApp {
    async fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let url = format!(
            "sqlite://{}?mode=rwc",
            dir.path().join("school.db").display()
        );

        let db = create_connection(&url).await.unwrap();
        Migrator::up(&db, None).await.unwrap();

        Self {
            router: app(AppState::new(url)),
            db,
            _dir: dir,
        }
    }

    async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let body = match body {
            Some(body) => Body::from(body.to_string()),
            None => Body::empty(),
        };
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));

        (status, value)
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body)).await
    }

    async fn add_student(&self, first_name: &str, level: i32, class_type: &str, roll_no: &str) {
        RegistryService::register_student(
            &self.db,
            NewStudent {
                identity: identity(first_name),
                class_level: level,
                class_type: class_type.to_string(),
                roll_no: roll_no.to_string(),
            },
        )
        .await
        .unwrap();
    }

    async fn add_teacher(&self, first_name: &str, department: &str, cnic: &str) -> String {
        RegistryService::register_teacher(
            &self.db,
            NewTeacher {
                identity: identity(first_name),
                cnic: cnic.to_string(),
                department: department.to_string(),
            },
        )
        .await
        .unwrap()
        .id
        .to_string()
    }
}

fn identity(first_name: &str) -> Identity {
    Identity {
        first_name: first_name.to_string(),
        last_name: "Test".to_string(),
        email: format!("{}@school.test", first_name.to_lowercase()),
        password: "argon2-digest".to_string(),
        contact_number: "03001234567".to_string(),
        profile_picture: None,
    }
}

#[tokio::test]
async fn test_create_class_and_assign_teacher() {
    let app = TestApp::new().await;
    app.add_student("Ali", 10, "Science", "100000001").await;
    let teacher_id = app.add_teacher("Ayesha", "Maths", "3520200000001").await;

    let (status, body) = app
        .post(
            "/classes/newclass",
            json!({
                "classLevel": "Class 10",
                "className": "10-A-Science",
                "stream": "Science",
                "students": ["100000001"],
                "courses": ["Maths"]
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Class created successfully");
    assert_eq!(body["className"], "10-A-Science");
    assert_eq!(body["students"], json!(["100000001"]));
    assert!(body["classId"].is_string());

    let (status, classes) = app
        .get("/classes/newclass/assignteachers?action=fetchClasses")
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(classes[0]["className"], "10-A-Science");
    assert_eq!(classes[0]["stream"], "Science");
    assert_eq!(classes[0]["courses"], json!(["Maths"]));
    assert!(classes[0].get("students").is_none());

    let (status, teachers) = app
        .get("/classes/newclass/assignteachers?action=fetchTeachers&department=Maths")
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(teachers[0]["_id"], teacher_id);

    let (status, receipt) = app
        .post(
            "/classes/newclass/assignteachers",
            json!({
                "className": "10-A-Science",
                "teachers": [{"course": "Maths", "teacher": "Ayesha Test", "teacherId": teacher_id}]
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(receipt["success"], true);
    assert_eq!(receipt["message"], "Teachers assigned successfully!");
    assert_eq!(
        receipt["updatedClass"]["teachers"],
        json!([{"course": "Maths", "teacher": "Ayesha Test", "teacherId": teacher_id}])
    );
    assert_eq!(receipt["updatedClass"]["students"], json!(["100000001"]));
}

#[tokio::test]
async fn test_create_class_errors_use_message() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post(
            "/classes/newclass",
            json!({"classLevel": "Class 5", "className": "5-A", "students": ["123456789"]}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"message": "One or more students don't exist"}));

    let (status, body) = app
        .post(
            "/classes/newclass",
            json!({"classLevel": "Class 5", "className": "5-A", "students": "123456789"}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid students format");

    let (status, body) = app
        .post("/classes/newclass", json!({"className": "5-A", "students": []}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Class level and name are required");
}

#[tokio::test]
async fn test_duplicate_class_name_is_rejected() {
    let app = TestApp::new().await;
    let class = json!({"classLevel": "Class 2", "className": "2-A", "students": []});

    let (status, _) = app.post("/classes/newclass", class.clone()).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = app.post("/classes/newclass", class).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Class name already exists");

    let (_, classes) = app
        .get("/classes/newclass/assignteachers?action=fetchClasses")
        .await;
    assert_eq!(classes.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_malformed_json_is_a_validation_error() {
    let app = TestApp::new().await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/classes/newclass")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{\"classLevel\": "))
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["message"].is_string());

    let request = Request::builder()
        .method(Method::POST)
        .uri("/classes/newclass/assignteachers")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("not json"))
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({"error": "Invalid input data"}));
}

#[tokio::test]
async fn test_roster_lookup() {
    let app = TestApp::new().await;
    app.add_student("Zara", 9, "Arts", "400000001").await;
    app.add_student("Umar", 9, "Science", "400000002").await;

    let (status, body) = app.get("/classes/newclass?classLevel=9").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Valid stream required for classes 9-10");

    let (status, body) = app.get("/classes/newclass").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Valid class level parameter required");

    let (status, roster) = app.get("/classes/newclass?classLevel=9&stream=Arts").await;
    assert_eq!(status, StatusCode::OK);
    let roster = roster.as_array().unwrap();
    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0]["rollNo"], "400000001");
    assert_eq!(roster[0]["classType"], "Arts");
    assert!(roster[0].get("password").is_none());
    assert!(roster[0].get("_id").is_none());
}

#[tokio::test]
async fn test_assignment_queries() {
    let app = TestApp::new().await;
    app.add_teacher("Bilal", "Maths", "3520200000002").await;
    app.add_teacher("Farah", "Physics", "3520200000003").await;

    for uri in [
        "/classes/newclass/assignteachers",
        "/classes/newclass/assignteachers?action=dropTables",
        "/classes/newclass/assignteachers?action=fetchTeachers",
    ] {
        let (status, body) = app.get(uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body, json!({"error": "Invalid action or missing parameters"}));
    }

    let (status, teachers) = app
        .get("/classes/newclass/assignteachers?action=fetchTeachers&department=Maths")
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(teachers.as_array().unwrap().len(), 1);
    assert_eq!(teachers[0]["firstName"], "Bilal");
    assert_eq!(teachers[0]["department"], "Maths");

    let (status, teachers) = app
        .get("/classes/newclass/assignteachers?action=fetchTeachers&department=")
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(teachers, json!([]));
}

#[tokio::test]
async fn test_assign_teachers_errors_use_error() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post(
            "/classes/newclass/assignteachers",
            json!({"className": "9-Z", "teachers": []}),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Class not found"}));

    let (status, body) = app
        .post(
            "/classes/newclass/assignteachers",
            json!({"className": "9-Z", "teachers": "Bilal"}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Invalid input data"}));
}

#[tokio::test]
async fn test_registry_endpoints() {
    let app = TestApp::new().await;
    let teacher = json!({
        "firstName": "Sana",
        "lastName": "Iqbal",
        "email": "sana@school.test",
        "password": "argon2-digest",
        "contactNumber": "03001234567",
        "cnic": "3520200000007",
        "department": "Urdu"
    });

    let (status, body) = app.post("/teachers", teacher.clone()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["department"], "Urdu");
    assert!(body["_id"].is_string());
    assert!(body.get("password").is_none());

    let mut duplicate = teacher.clone();
    duplicate["email"] = json!("sana.iqbal@school.test");
    let (status, body) = app.post("/teachers", duplicate).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "CNIC is already registered");

    let mut unknown = teacher;
    unknown["department"] = json!("Biology");
    let (status, _) = app.post("/teachers", unknown).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = app
        .post(
            "/students",
            json!({
                "firstName": "Hina",
                "lastName": "Akram",
                "email": "hina@school.test",
                "password": "argon2-digest",
                "contactNumber": "03001234567",
                "classLevel": 4,
                "rollNo": "1234"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Roll number must be 9 digits");

    let (status, body) = app
        .post("/parents", json!({"firstName": "Khalid", "cnic": "3520200000008"}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "`lastName` is required");
}

#[tokio::test]
async fn test_reference_health_and_docs() {
    let app = TestApp::new().await;

    let (status, catalog) = app.get("/reference").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(catalog["classLevels"].as_array().unwrap().len(), 10);
    assert_eq!(catalog["classLevels"][8], "Class 9");
    assert_eq!(catalog["streams"], json!(["General", "Arts", "Science", "Computer"]));
    assert!(catalog["departments"].as_array().unwrap().contains(&json!("Islamiat")));

    let (status, body) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");

    let (status, doc) = app.get("/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/classes/newclass"]["post"].is_object());
    assert!(doc["paths"]["/classes/newclass/assignteachers"]["get"].is_object());
}
