pub mod exam_service;
pub mod export_service;
pub mod gemini_client;
pub mod grading_service;
pub mod progress_service;

pub use exam_service::ExamService;
pub use export_service::ExportService;
pub use gemini_client::{GeminiClient, GenerativeClient};
pub use grading_service::GradingService;
pub use progress_service::ProgressService;
