pub mod admin_login;
pub mod faculty_login;

pub use admin_login::AdminLoginPage;
pub use faculty_login::FacultyLoginPage;
