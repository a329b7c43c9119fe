pub mod api;
pub mod form;

pub use api::{ClientError, HttpSchoolApi, SchoolApi};
pub use form::{AssignmentForm, Draft, FormError, Stage, SubmissionStatus};
