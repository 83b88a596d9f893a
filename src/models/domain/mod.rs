pub mod exam_session;
pub mod question;
pub mod result_record;
pub mod user;
pub use exam_session::ExamSession;
pub use question::Question;
pub use result_record::ResultRecord;
pub use user::User;
