use actix_web::{get, post, put, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    auth::CurrentSession,
    errors::AppError,
    models::{
        domain::{ExamSession, ResultRecord},
        dto::{
            request::{GenerateExamRequest, SubmitAnswersRequest},
            response::ExamResponse,
        },
    },
    services::{ExportService, GradingService},
};

#[post("/api/exams")]
pub async fn create_exam(
    state: web::Data<AppState>,
    request: web::Json<GenerateExamRequest>,
    session: CurrentSession,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let exam = state
        .exam_service
        .generate_exam(&request.topic, request.question_count)
        .await?;

    let response = ExamResponse::from(&exam);
    state.session_store.set_exam(&session.session_id, exam);

    Ok(HttpResponse::Created().json(response))
}

#[put("/api/exams/answers")]
pub async fn record_answers(
    state: web::Data<AppState>,
    request: web::Json<SubmitAnswersRequest>,
    session: CurrentSession,
) -> Result<HttpResponse, AppError> {
    let mut exam = current_exam(&session)?;

    if !exam.record_answers(request.into_inner().answers) {
        return Err(AppError::ValidationError(
            "Answer sheet does not match the question list".to_string(),
        ));
    }

    state.session_store.set_exam(&session.session_id, exam);

    Ok(HttpResponse::NoContent().finish())
}

/// Grades the exam in progress and immediately persists the outcome; the
/// two are one user action, there is no grade-without-save mode.
#[post("/api/exams/grade")]
pub async fn grade_exam(
    state: web::Data<AppState>,
    session: CurrentSession,
) -> Result<HttpResponse, AppError> {
    let exam = current_exam(&session)?;

    let report = GradingService::grade(&exam);

    let record = ResultRecord::new(
        &session.context.user.id,
        &exam.topic,
        report.score,
        exam.questions.clone(),
    );
    state.result_repository.insert(record).await?;

    log::info!(
        "Graded exam on '{}' for user {}: {}/{} correct",
        exam.topic,
        session.context.user.id,
        report.correct_count,
        report.total_questions
    );

    Ok(HttpResponse::Ok().json(report))
}

#[get("/api/exams/export")]
pub async fn export_exam(session: CurrentSession) -> Result<HttpResponse, AppError> {
    let exam = current_exam(&session)?;

    let bytes = ExportService::render_pdf(&exam.topic, &exam.questions)?;

    Ok(HttpResponse::Ok()
        .content_type("application/pdf")
        .insert_header((
            "Content-Disposition",
            "attachment; filename=\"prova.pdf\"",
        ))
        .body(bytes))
}

fn current_exam(session: &CurrentSession) -> Result<ExamSession, AppError> {
    session
        .context
        .exam
        .clone()
        .ok_or_else(|| AppError::NotFound("No exam in progress".to_string()))
}
