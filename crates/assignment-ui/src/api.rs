use async_trait::async_trait;
use models::{
    AssignmentReceipt, AssignmentSubmission, ClassOverview, Department, ErrorBody, TeacherOverview,
};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

const ASSIGNMENT_PATH: &str = "/classes/newclass/assignteachers";

#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a response, or its body could not be read
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a failure status
    #[error("server responded with {status}")]
    Status {
        status: u16,
        /// Reason given in the error body, if any
        reason: Option<String>,
    },
}

impl ClientError {
    /// Message worth showing to a user, when the failure carried one
    pub fn display_message(&self) -> Option<String> {
        match self {
            Self::Transport(e) => Some(e.to_string()),
            Self::Status { reason, .. } => reason.clone(),
        }
    }
}

/// The endpoints the assignment form talks to
#[async_trait]
pub trait SchoolApi: Send + Sync {
    /// Classes with their courses and current assignments
    async fn fetch_classes(&self) -> Result<Vec<ClassOverview>, ClientError>;

    /// Teachers of one department
    async fn fetch_teachers(
        &self,
        department: Department,
    ) -> Result<Vec<TeacherOverview>, ClientError>;

    /// Replace the assignments of a class
    async fn submit_assignments(
        &self,
        submission: &AssignmentSubmission,
    ) -> Result<AssignmentReceipt, ClientError>;
}

/// [`SchoolApi`] over HTTP
#[derive(Debug, Clone)]
pub struct HttpSchoolApi {
    client: Client,
    base_url: String,
}

impl HttpSchoolApi {
    /// # Arguments
    /// * `base_url` - Root of the school API, e.g. `http://localhost:3000`
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn assignment_url(&self) -> String {
        format!("{}{ASSIGNMENT_PATH}", self.base_url)
    }
}

#[async_trait]
impl SchoolApi for HttpSchoolApi {
    async fn fetch_classes(&self) -> Result<Vec<ClassOverview>, ClientError> {
        let response = self
            .client
            .get(self.assignment_url())
            .query(&[("action", "fetchClasses")])
            .send()
            .await?;

        decode(response).await
    }

    async fn fetch_teachers(
        &self,
        department: Department,
    ) -> Result<Vec<TeacherOverview>, ClientError> {
        let response = self
            .client
            .get(self.assignment_url())
            .query(&[("action", "fetchTeachers"), ("department", department.as_ref())])
            .send()
            .await?;

        decode(response).await
    }

    async fn submit_assignments(
        &self,
        submission: &AssignmentSubmission,
    ) -> Result<AssignmentReceipt, ClientError> {
        let response = self
            .client
            .post(self.assignment_url())
            .json(submission)
            .send()
            .await?;

        decode(response).await
    }
}

/// Reads a successful body as `T`, or the failure reason from an error body
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();

    if status.is_success() {
        return Ok(response.json().await?);
    }

    let reason = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.reason().map(str::to_string));

    Err(ClientError::Status {
        status: status.as_u16(),
        reason,
    })
}
