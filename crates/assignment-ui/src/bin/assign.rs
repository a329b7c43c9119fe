use assignment_ui::{AssignmentForm, HttpSchoolApi, SubmissionStatus};
use clap::Parser;
use models::Department;
use std::process::ExitCode;

/// Assign teachers to the courses of a class.
///
/// Without `--class` the classes are listed; without `--department` the courses
/// of the class; without assignments the teachers of the department.
#[derive(Debug, Parser)]
#[command(name = "assign-teachers", version)]
struct Cli {
    /// Root of the school API
    #[arg(long, env = "SCHOOL_API_URL", default_value = "http://localhost:3000")]
    base_url: String,

    /// Name of the class to staff
    #[arg(long)]
    class: Option<String>,

    /// Department to pick teachers from
    #[arg(long)]
    department: Option<Department>,

    /// Teacher id to assign to every course of the class
    #[arg(long, value_name = "TEACHER_ID")]
    all: Option<String>,

    /// Teacher for one course
    #[arg(long = "course", value_name = "COURSE=TEACHER_ID", value_parser = parse_course)]
    courses: Vec<(String, String)>,
}

fn parse_course(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .filter(|(course, teacher)| !course.is_empty() && !teacher.is_empty())
        .map(|(course, teacher)| (course.to_string(), teacher.to_string()))
        .ok_or_else(|| format!("expected COURSE=TEACHER_ID, got `{raw}`"))
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let mut form = AssignmentForm::new(HttpSchoolApi::new(&cli.base_url));
    form.mount().await;

    let Some(class_name) = cli.class else {
        for class in form.classes() {
            println!("{} - {} - {}", class.class_level, class.stream, class.class_name);
        }
        return ExitCode::SUCCESS;
    };

    let class = match form.select_class(&class_name) {
        Ok(class) => class,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let Some(department) = cli.department else {
        for course in &class.courses {
            let teacher = class
                .teachers
                .iter()
                .find(|a| &a.course == course)
                .map_or("unassigned", |a| a.teacher.as_str());
            println!("{course}: {teacher}");
        }
        return ExitCode::SUCCESS;
    };

    if let Err(e) = form.select_department(department).await {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    if cli.all.is_none() && cli.courses.is_empty() {
        for teacher in form.teachers() {
            println!("{} {}", teacher.id, teacher.full_name());
        }
        return ExitCode::SUCCESS;
    }

    let assigned = cli
        .all
        .iter()
        .try_for_each(|teacher_id| form.assign_to_all(teacher_id))
        .and_then(|()| {
            cli.courses
                .iter()
                .try_for_each(|(course, teacher_id)| form.assign(course, teacher_id))
        });

    if let Err(e) = assigned {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    match form.submit().await {
        Ok(SubmissionStatus::Success(message)) => {
            println!("{message}");
            ExitCode::SUCCESS
        }
        Ok(SubmissionStatus::Failure(message)) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
