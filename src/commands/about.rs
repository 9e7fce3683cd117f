//! About command - Serializes course about information.

use super::{print_json, read_json};
use crate::cli::args::AboutArgs;
use crate::config::Settings;
use crate::domain::{serialize_content, AboutInfo, CourseDescriptor};
use crate::errors::EnrollmentResult;

/// Execute the about command
pub async fn execute(args: AboutArgs, settings: &Settings) -> EnrollmentResult<()> {
    let course: CourseDescriptor = read_json(&args.course).await?;
    let about: AboutInfo = match &args.about {
        Some(path) => read_json(path).await?,
        None => AboutInfo::new(),
    };

    tracing::debug!(course_id = %course.id, sections = about.len(), "Serializing course about");
    print_json(&serialize_content(&course, &about, &settings.date_format))
}
