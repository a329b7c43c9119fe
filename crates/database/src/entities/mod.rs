pub mod class;
pub mod parent;
pub mod student;
pub mod teacher;

pub use class as classes;
pub use parent as parents;
pub use student as students;
pub use teacher as teachers;
