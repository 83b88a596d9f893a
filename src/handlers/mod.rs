pub mod auth_handler;
pub mod exam_handler;
pub mod health_handler;
pub mod progress_handler;

pub use auth_handler::{login, logout, sign_up};
pub use exam_handler::{create_exam, export_exam, grade_exam, record_answers};
pub use health_handler::health_check;
pub use progress_handler::get_progress;
