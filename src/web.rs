use actix_web::{web, App, HttpRequest, HttpServer, HttpResponse, Result, middleware};
use actix_files::Files;
use log::info;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use crate::form::{clamp_courts, validate_request, schedule_csv_bytes, MatchScore, ScheduleRequest};
use crate::parser::{parse_roster_text, RosterError};
use crate::schedule::{generate_schedule, summarize, Player, Schedule, ScheduleStats};

/// The schedule currently shown to users, with the roster it was built from
#[derive(Debug, Clone, Serialize)]
pub struct CurrentSchedule {
    pub courts: usize,
    pub roster: Vec<Player>,
    pub schedule: Schedule,
    pub stats: ScheduleStats,
}

// In-memory storage, nothing survives a restart
pub struct AppState {
    pub current: Mutex<Option<CurrentSchedule>>,
    pub scores: Mutex<HashMap<u32, MatchScore>>,
    pub max_courts: usize,
}

impl AppState {
    pub fn new(max_courts: usize) -> Self {
        Self {
            current: Mutex::new(None),
            scores: Mutex::new(HashMap::new()),
            max_courts,
        }
    }
}

#[derive(Serialize)]
pub struct ScheduleResponse<'a> {
    success: bool,
    #[serde(flatten)]
    current: &'a CurrentSchedule,
    scores: &'a HashMap<u32, MatchScore>,
}

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>> {
    mutex
        .lock()
        .map_err(|_| actix_web::error::ErrorInternalServerError("state lock poisoned"))
}

fn bad_request(error: impl ToString) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({"success": false, "error": error.to_string()}))
}

fn not_found(error: &str) -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({"success": false, "error": error}))
}

// Generate a new schedule from a player list
async fn create_schedule(
    req: web::Json<ScheduleRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    if let Err(e) = validate_request(&req) {
        return Ok(bad_request(e));
    }

    let roster = match parse_roster_text(&req.players) {
        Ok(roster) => roster,
        Err(e) => return Ok(bad_request(e)),
    };
    let courts = clamp_courts(req.courts, state.max_courts);

    let schedule = generate_schedule(&roster, courts);
    if schedule.is_empty() {
        let found = roster.iter().filter(|p| !p.is_bye()).count();
        return Ok(bad_request(RosterError::TooFewPlayers { found }));
    }

    let stats = summarize(&roster, &schedule);
    info!(
        "generated {} rounds ({} matches) for {} players on {} courts",
        stats.rounds,
        stats.matches,
        stats.players.len(),
        courts
    );

    let current = CurrentSchedule { courts, roster, schedule, stats };
    let mut slot = lock(&state.current)?;
    let mut scores = lock(&state.scores)?;
    scores.clear();

    let response = HttpResponse::Ok().json(ScheduleResponse {
        success: true,
        current: &current,
        scores: &scores,
    });
    *slot = Some(current);

    Ok(response)
}

// Current schedule endpoint
async fn get_schedule(state: web::Data<AppState>) -> Result<HttpResponse> {
    let current = lock(&state.current)?;
    let scores = lock(&state.scores)?;

    match current.as_ref() {
        Some(current) => Ok(HttpResponse::Ok().json(ScheduleResponse {
            success: true,
            current,
            scores: &scores,
        })),
        None => Ok(not_found("Schedule not available")),
    }
}

// Score entry for a single match. Scores never influence the schedule.
async fn record_score(
    match_id: web::Path<u32>,
    score: web::Json<MatchScore>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let match_id = match_id.into_inner();
    let current = lock(&state.current)?;

    let known = current
        .as_ref()
        .map(|c| c.schedule.find(match_id).is_some())
        .unwrap_or(false);
    if !known {
        return Ok(not_found("Unknown match"));
    }

    lock(&state.scores)?.insert(match_id, score.into_inner());
    Ok(HttpResponse::Ok().json(serde_json::json!({"success": true, "match_id": match_id})))
}

// Stats endpoint
async fn get_stats(state: web::Data<AppState>) -> Result<HttpResponse> {
    match lock(&state.current)?.as_ref() {
        Some(current) => Ok(HttpResponse::Ok().json(&current.stats)),
        None => Ok(not_found("No data available")),
    }
}

// CSV download of the current schedule
async fn export_csv(state: web::Data<AppState>) -> Result<HttpResponse> {
    let current = lock(&state.current)?;
    let Some(current) = current.as_ref() else {
        return Ok(not_found("Schedule not available"));
    };
    let scores = lock(&state.scores)?;

    let body = schedule_csv_bytes(&current.schedule, &scores)
        .map_err(|e| actix_web::error::ErrorInternalServerError(format!("Failed to export: {}", e)))?;

    Ok(HttpResponse::Ok()
        .content_type("text/csv")
        .insert_header(("Content-Disposition", "attachment; filename=\"schedule.csv\""))
        .body(body))
}

// HTML page handler
async fn index() -> Result<HttpResponse> {
    let html = include_str!("../templates/index.html");
    Ok(HttpResponse::Ok().content_type("text/html").body(html))
}

// Malformed JSON bodies get the same error shape as the handlers
fn json_error(err: actix_web::error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = bad_request(format!("Invalid request body: {}", err));
    actix_web::error::InternalError::from_response(err, response).into()
}

/// Registers the page and API routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error))
        .route("/", web::get().to(index))
        .route("/api/schedule", web::post().to(create_schedule))
        .route("/api/schedule", web::get().to(get_schedule))
        .route("/api/scores/{match_id}", web::post().to(record_score))
        .route("/api/stats", web::get().to(get_stats))
        .route("/api/export", web::get().to(export_csv));
}

pub async fn start_server(bind_address: &str, port: u16, max_courts: usize) -> std::io::Result<()> {
    let app_state = web::Data::new(AppState::new(max_courts));

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(middleware::Logger::default())
            .service(Files::new("/static", "static"))
            .configure(configure)
    })
    .bind((bind_address, port))?
    .run()
    .await
}
