mod course_level;
pub use course_level::CourseLevel;

mod courses;
pub use courses::Courses;

mod exam_info;
pub use exam_info::ExamInfo;

mod not_found;
pub use not_found::PageNotFound;

mod root;
pub use root::Root;
