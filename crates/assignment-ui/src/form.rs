//! Client-side flow of the teacher assignment form.
//!
//! A class is picked from the fetched list, then a department whose teachers
//! can be assigned to the class's courses. Assignments collect in a draft
//! until they are submitted for the whole class.

use crate::api::{ClientError, SchoolApi};
use log::{error, info};
use models::{
    AssignmentReceipt, AssignmentSubmission, ClassOverview, Department, TeacherAssignment,
    TeacherOverview,
};
use thiserror::Error;

/// Shown when a failed submission carried no usable reason
pub const SUBMIT_FALLBACK: &str = "Failed to submit assignments. Please try again.";

/// Where the form is. Each stage needs the selections of the one before.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stage {
    Idle,
    ClassSelected {
        class_name: String,
    },
    DepartmentSelected {
        class_name: String,
        department: Department,
    },
    /// A submission is in flight; `resume` is the stage to return to
    Submitting {
        resume: Box<Stage>,
        submitted: Vec<TeacherAssignment>,
    },
}

impl Stage {
    pub fn class_name(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::ClassSelected { class_name } | Self::DepartmentSelected { class_name, .. } => {
                Some(class_name.as_str())
            }
            Self::Submitting { resume, .. } => resume.class_name(),
        }
    }

    pub fn department(&self) -> Option<Department> {
        match self {
            Self::DepartmentSelected { department, .. } => Some(*department),
            Self::Submitting { resume, .. } => resume.department(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionStatus {
    Success(String),
    Failure(String),
}

impl SubmissionStatus {
    pub fn message(&self) -> &str {
        match self {
            Self::Success(message) | Self::Failure(message) => message,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("No class is selected")]
    NoClassSelected,

    #[error("Class `{0}` is not in the class list")]
    UnknownClass(String),

    #[error("No department is selected")]
    NoDepartmentSelected,

    #[error("`{0}` is not a course of the selected class")]
    UnknownCourse(String),

    #[error("Teacher `{0}` is not in the selected department")]
    UnknownTeacher(String),

    #[error("There are no assignments to submit")]
    EmptyDraft,

    #[error("A submission is already in progress")]
    SubmissionInProgress,

    #[error("No submission is in progress")]
    NoSubmissionInProgress,
}

/// Course to teacher assignments not yet submitted, at most one per course
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft(Vec<TeacherAssignment>);

impl Draft {
    /// Sets the teacher of a course, replacing any earlier choice for it
    pub fn assign(&mut self, assignment: TeacherAssignment) {
        self.0.retain(|a| a.course != assignment.course);
        self.0.push(assignment);
    }

    /// Replaces the whole draft with one teacher for every course
    pub fn assign_to_all(&mut self, courses: &[String], teacher: &TeacherOverview) {
        self.0 = courses
            .iter()
            .map(|course| teacher.assignment_for(course))
            .collect();
    }

    pub fn get(&self, course: &str) -> Option<&TeacherAssignment> {
        self.0.iter().find(|a| a.course == course)
    }

    pub fn entries(&self) -> &[TeacherAssignment] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

pub struct AssignmentForm<A> {
    api: A,
    stage: Stage,
    classes: Vec<ClassOverview>,
    teachers: Vec<TeacherOverview>,
    draft: Draft,
    status: Option<SubmissionStatus>,
}

impl<A: SchoolApi> AssignmentForm<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            stage: Stage::Idle,
            classes: Vec::new(),
            teachers: Vec::new(),
            draft: Draft::default(),
            status: None,
        }
    }

    /// Loads the class list. A failed fetch leaves the list empty.
    pub async fn mount(&mut self) {
        self.classes = match self.api.fetch_classes().await {
            Ok(classes) => classes,
            Err(e) => {
                error!("Error fetching classes: {e}");
                Vec::new()
            }
        };
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn classes(&self) -> &[ClassOverview] {
        &self.classes
    }

    pub fn teachers(&self) -> &[TeacherOverview] {
        &self.teachers
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn status(&self) -> Option<&SubmissionStatus> {
        self.status.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.stage, Stage::Submitting { .. })
    }

    pub fn selected_class(&self) -> Option<&ClassOverview> {
        let class_name = self.stage.class_name()?;
        self.classes.iter().find(|c| c.class_name == class_name)
    }

    /// Courses of the selected class
    pub fn courses(&self) -> &[String] {
        self.selected_class()
            .map(|class| class.courses.as_slice())
            .unwrap_or_default()
    }

    /// Selects a class. Moving to a different class discards the draft.
    pub fn select_class(&mut self, class_name: &str) -> Result<&ClassOverview, FormError> {
        self.ensure_idle()?;

        if !self.classes.iter().any(|c| c.class_name == class_name) {
            return Err(FormError::UnknownClass(class_name.to_string()));
        }

        if self.stage.class_name() != Some(class_name) {
            self.draft.clear();
            self.teachers.clear();
            self.stage = Stage::ClassSelected {
                class_name: class_name.to_string(),
            };
        }

        self.selected_class()
            .ok_or_else(|| FormError::UnknownClass(class_name.to_string()))
    }

    /// Selects a department and loads its teachers. The draft is kept, so
    /// courses can be staffed from several departments.
    pub async fn select_department(&mut self, department: Department) -> Result<(), FormError> {
        self.ensure_idle()?;

        let class_name = self
            .stage
            .class_name()
            .ok_or(FormError::NoClassSelected)?
            .to_string();

        self.teachers = match self.api.fetch_teachers(department).await {
            Ok(teachers) => teachers,
            Err(e) => {
                error!("Error fetching teachers: {e}");
                Vec::new()
            }
        };
        self.stage = Stage::DepartmentSelected {
            class_name,
            department,
        };

        Ok(())
    }

    /// Assigns a teacher of the selected department to one course
    pub fn assign(&mut self, course: &str, teacher_id: &str) -> Result<(), FormError> {
        let teacher = self.department_teacher(teacher_id)?;

        if !self.courses().iter().any(|c| c == course) {
            return Err(FormError::UnknownCourse(course.to_string()));
        }

        let assignment = teacher.assignment_for(course);
        self.draft.assign(assignment);

        Ok(())
    }

    /// Assigns one teacher of the selected department to every course,
    /// replacing the draft
    pub fn assign_to_all(&mut self, teacher_id: &str) -> Result<(), FormError> {
        let teacher = self.department_teacher(teacher_id)?.clone();
        let courses = self.courses().to_vec();

        self.draft.assign_to_all(&courses, &teacher);

        Ok(())
    }

    /// Moves to [`Stage::Submitting`] and returns what to send
    pub fn begin_submit(&mut self) -> Result<AssignmentSubmission, FormError> {
        self.ensure_idle()?;

        let class_name = self
            .stage
            .class_name()
            .ok_or(FormError::NoClassSelected)?
            .to_string();

        if self.draft.is_empty() {
            return Err(FormError::EmptyDraft);
        }

        let submitted = self.draft.entries().to_vec();
        let resume = std::mem::replace(&mut self.stage, Stage::Idle);
        self.stage = Stage::Submitting {
            resume: Box::new(resume),
            submitted: submitted.clone(),
        };
        self.status = None;

        Ok(AssignmentSubmission {
            class_name,
            teachers: submitted,
        })
    }

    /// Records the outcome of a submission and returns to the stage it started from.
    ///
    /// On success the cached class takes the assignments that were sent.
    pub fn finish_submit(
        &mut self,
        outcome: Result<AssignmentReceipt, ClientError>,
    ) -> Result<&SubmissionStatus, FormError> {
        let Stage::Submitting { resume, submitted } = &mut self.stage else {
            return Err(FormError::NoSubmissionInProgress);
        };
        let submitted = std::mem::take(submitted);
        self.stage = std::mem::replace(resume.as_mut(), Stage::Idle);

        let status = match outcome {
            Ok(receipt) => {
                if let Some(class_name) = self.stage.class_name()
                    && let Some(class) = self.classes.iter_mut().find(|c| c.class_name == class_name)
                {
                    class.teachers = submitted;
                }

                info!("{}", receipt.message);
                SubmissionStatus::Success(receipt.message)
            }
            Err(e) => {
                error!("Submission error: {e}");
                SubmissionStatus::Failure(
                    e.display_message()
                        .unwrap_or_else(|| SUBMIT_FALLBACK.to_string()),
                )
            }
        };

        Ok(self.status.insert(status))
    }

    /// Submits the draft for the selected class
    pub async fn submit(&mut self) -> Result<&SubmissionStatus, FormError> {
        let submission = self.begin_submit()?;
        let outcome = self.api.submit_assignments(&submission).await;

        self.finish_submit(outcome)
    }

    fn ensure_idle(&self) -> Result<(), FormError> {
        if self.is_submitting() {
            return Err(FormError::SubmissionInProgress);
        }

        Ok(())
    }

    fn department_teacher(&self, teacher_id: &str) -> Result<&TeacherOverview, FormError> {
        self.ensure_idle()?;

        if self.stage.department().is_none() {
            return Err(FormError::NoDepartmentSelected);
        }

        self.teachers
            .iter()
            .find(|t| t.id == teacher_id)
            .ok_or_else(|| FormError::UnknownTeacher(teacher_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use models::{ClassDocument, ClassLevel, Stream};
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockApi {
        classes: Vec<ClassOverview>,
        teachers: Vec<TeacherOverview>,
        fail_classes: bool,
        submit_reason: Option<Option<String>>,
        submitted: Mutex<Vec<AssignmentSubmission>>,
    }

    #[async_trait]
    impl SchoolApi for MockApi {
        async fn fetch_classes(&self) -> Result<Vec<ClassOverview>, ClientError> {
            if self.fail_classes {
                return Err(ClientError::Status {
                    status: 500,
                    reason: None,
                });
            }
            Ok(self.classes.clone())
        }

        async fn fetch_teachers(
            &self,
            department: Department,
        ) -> Result<Vec<TeacherOverview>, ClientError> {
            Ok(self
                .teachers
                .iter()
                .filter(|t| t.department == department)
                .cloned()
                .collect())
        }

        async fn submit_assignments(
            &self,
            submission: &AssignmentSubmission,
        ) -> Result<AssignmentReceipt, ClientError> {
            self.submitted.lock().unwrap().push(submission.clone());

            if let Some(reason) = &self.submit_reason {
                return Err(ClientError::Status {
                    status: 404,
                    reason: reason.clone(),
                });
            }

            Ok(AssignmentReceipt {
                success: true,
                message: "Teachers assigned successfully!".to_string(),
                updated_class: ClassDocument {
                    id: "c-1".to_string(),
                    class_level: ClassLevel::Ten,
                    class_name: submission.class_name.clone(),
                    stream: Stream::Science,
                    students: Vec::new(),
                    courses: Vec::new(),
                    teachers: submission.teachers.clone(),
                    created_at: Default::default(),
                    updated_at: Default::default(),
                },
            })
        }
    }

    fn class(name: &str, courses: &[&str]) -> ClassOverview {
        ClassOverview {
            id: format!("id-{name}"),
            class_level: ClassLevel::Ten,
            class_name: name.to_string(),
            stream: Stream::Science,
            courses: courses.iter().map(|c| c.to_string()).collect(),
            teachers: Vec::new(),
        }
    }

    fn teacher(id: &str, first_name: &str, department: Department) -> TeacherOverview {
        TeacherOverview {
            id: id.to_string(),
            first_name: first_name.to_string(),
            last_name: "Khan".to_string(),
            department,
        }
    }

    fn api() -> MockApi {
        MockApi {
            classes: vec![
                class("10-A-Science", &["Maths", "Physics", "Chemistry"]),
                class("9-B-Arts", &["History"]),
            ],
            teachers: vec![
                teacher("t-1", "Ayesha", Department::Maths),
                teacher("t-2", "Bilal", Department::Maths),
                teacher("t-3", "Farah", Department::Physics),
            ],
            ..MockApi::default()
        }
    }

    async fn ready_form(api: MockApi) -> AssignmentForm<MockApi> {
        let mut form = AssignmentForm::new(api);
        form.mount().await;
        form.select_class("10-A-Science").unwrap();
        form.select_department(Department::Maths).await.unwrap();
        form
    }

    #[tokio::test]
    async fn test_failed_mount_leaves_list_empty() {
        let mut form = AssignmentForm::new(MockApi {
            fail_classes: true,
            ..api()
        });
        form.mount().await;

        assert!(form.classes().is_empty());
        assert_eq!(form.stage(), &Stage::Idle);
    }

    #[tokio::test]
    async fn test_stages_are_gated() {
        let mut form = AssignmentForm::new(api());
        form.mount().await;

        assert_eq!(
            form.select_department(Department::Maths).await,
            Err(FormError::NoClassSelected)
        );
        assert_eq!(
            form.select_class("1-Z").unwrap_err(),
            FormError::UnknownClass("1-Z".to_string())
        );

        let selected = form.select_class("10-A-Science").unwrap();
        assert_eq!(selected.courses.len(), 3);
        assert_eq!(form.assign("Maths", "t-1"), Err(FormError::NoDepartmentSelected));

        form.select_department(Department::Maths).await.unwrap();
        assert_eq!(form.teachers().len(), 2);
        assert_eq!(form.stage().department(), Some(Department::Maths));
    }

    #[tokio::test]
    async fn test_assign_to_all_overwrites_draft() {
        let mut form = ready_form(api()).await;

        form.assign("Maths", "t-2").unwrap();
        form.assign_to_all("t-1").unwrap();

        let draft = form.draft().entries();
        assert_eq!(draft.len(), 3);
        assert!(draft.iter().all(|a| a.teacher == "Ayesha Khan"));
        assert!(draft.iter().all(|a| a.teacher_id.as_deref() == Some("t-1")));
    }

    #[tokio::test]
    async fn test_per_course_assignment_keeps_one_entry_per_course() {
        let mut form = ready_form(api()).await;

        form.assign("Maths", "t-1").unwrap();
        form.assign("Maths", "t-2").unwrap();

        assert_eq!(form.draft().entries().len(), 1);
        assert_eq!(form.draft().get("Maths").unwrap().teacher, "Bilal Khan");

        assert_eq!(
            form.assign("Biology", "t-1"),
            Err(FormError::UnknownCourse("Biology".to_string()))
        );
        assert_eq!(
            form.assign("Physics", "t-3"),
            Err(FormError::UnknownTeacher("t-3".to_string()))
        );
    }

    #[tokio::test]
    async fn test_draft_survives_department_change_but_not_class_change() {
        let mut form = ready_form(api()).await;
        form.assign("Maths", "t-1").unwrap();

        form.select_department(Department::Physics).await.unwrap();
        form.assign("Physics", "t-3").unwrap();
        assert_eq!(form.draft().entries().len(), 2);

        // Reselecting the current class keeps the draft
        form.select_class("10-A-Science").unwrap();
        assert_eq!(form.draft().entries().len(), 2);

        form.select_class("9-B-Arts").unwrap();
        assert!(form.draft().is_empty());
        assert_eq!(
            form.stage(),
            &Stage::ClassSelected {
                class_name: "9-B-Arts".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_submit_requires_a_draft() {
        let mut form = AssignmentForm::new(api());
        form.mount().await;
        assert_eq!(form.submit().await.unwrap_err(), FormError::NoClassSelected);

        let mut form = ready_form(api()).await;
        assert_eq!(form.submit().await.unwrap_err(), FormError::EmptyDraft);
        assert!(form.api.submitted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_second_submission_is_refused_while_submitting() {
        let mut form = ready_form(api()).await;
        form.assign("Maths", "t-1").unwrap();

        let submission = form.begin_submit().unwrap();
        assert_eq!(submission.class_name, "10-A-Science");
        assert!(form.is_submitting());

        assert_eq!(form.begin_submit(), Err(FormError::SubmissionInProgress));
        assert_eq!(
            form.select_class("9-B-Arts").unwrap_err(),
            FormError::SubmissionInProgress
        );

        form.finish_submit(Err(ClientError::Status {
            status: 500,
            reason: None,
        }))
        .unwrap();
        assert_eq!(form.stage().department(), Some(Department::Maths));
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn test_draft_is_frozen_while_submitting() {
        let mut form = ready_form(api()).await;
        form.assign("Maths", "t-1").unwrap();

        let submission = form.begin_submit().unwrap();

        assert_eq!(
            form.assign("Physics", "t-2"),
            Err(FormError::SubmissionInProgress)
        );
        assert_eq!(form.assign_to_all("t-2"), Err(FormError::SubmissionInProgress));
        assert_eq!(form.draft().entries(), submission.teachers.as_slice());

        let outcome = form.api.submit_assignments(&submission).await;
        form.finish_submit(outcome).unwrap();

        let class = form.selected_class().unwrap();
        assert_eq!(class.teachers, submission.teachers);
        assert_eq!(class.teachers[0].teacher_id.as_deref(), Some("t-1"));
    }

    #[tokio::test]
    async fn test_outcome_without_submission_keeps_stage() {
        let mut form = ready_form(api()).await;
        form.assign("Maths", "t-1").unwrap();

        let err = form
            .finish_submit(Err(ClientError::Status {
                status: 500,
                reason: None,
            }))
            .unwrap_err();

        assert_eq!(err, FormError::NoSubmissionInProgress);
        assert_eq!(form.stage().department(), Some(Department::Maths));
        assert_eq!(form.stage().class_name(), Some("10-A-Science"));
        assert!(form.status().is_none());
        assert_eq!(form.draft().entries().len(), 1);
    }

    #[tokio::test]
    async fn test_success_updates_cached_class() {
        let mut form = ready_form(api()).await;
        form.assign("Maths", "t-1").unwrap();

        let status = form.submit().await.unwrap().clone();

        assert_eq!(
            status,
            SubmissionStatus::Success("Teachers assigned successfully!".to_string())
        );
        let class = form.selected_class().unwrap();
        assert_eq!(class.teachers, form.draft().entries());
        assert_eq!(form.api.submitted.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_failure_shows_server_reason_or_fallback() {
        let mut form = ready_form(MockApi {
            submit_reason: Some(Some("Class not found".to_string())),
            ..api()
        })
        .await;
        form.assign("Maths", "t-1").unwrap();

        let status = form.submit().await.unwrap();
        assert_eq!(status, &SubmissionStatus::Failure("Class not found".to_string()));
        assert!(form.selected_class().unwrap().teachers.is_empty());

        let mut form = ready_form(MockApi {
            submit_reason: Some(None),
            ..api()
        })
        .await;
        form.assign("Maths", "t-1").unwrap();

        let status = form.submit().await.unwrap();
        assert_eq!(status.message(), SUBMIT_FALLBACK);
    }
}
