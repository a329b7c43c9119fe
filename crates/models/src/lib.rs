pub mod catalog;
pub mod format;
pub mod school;

pub use catalog::{Catalog, ClassLevel, Department, Stream};
pub use school::{
    AssignmentReceipt, AssignmentSubmission, ClassDocument, ClassOverview, ErrorBody,
    TeacherAssignment, TeacherOverview,
};
