pub use super::application::Entity as Application;
pub use super::internship::Entity as Internship;
pub use super::startup::Entity as Startup;
pub use super::student_profile::Entity as StudentProfile;
pub use super::user::Entity as User;
