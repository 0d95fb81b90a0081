//! Single binary web server: JSON REST API over the in-memory tournament store.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default so the app is reachable via DNS on a VPS.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080). Log filter via RUST_LOG.

use actix_web::{
    get, post, put,
    web::{Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use chrono::{Local, NaiveDate};
use padel_tournament_web::{
    group_by_phase, import_roster, match_format_for_round, record_match_score, start_category,
    CategoryId, InMemoryStore, MatchFormatConfiguration, MatchId, Tournament, TournamentError,
    TournamentId, TournamentStore,
};
use serde::Deserialize;
use std::sync::RwLock;

/// In-memory state: every tournament by id. Nothing is persisted.
type AppState = Data<RwLock<InMemoryStore>>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct CreateTournamentBody {
    name: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

#[derive(Deserialize)]
struct CreateCategoryBody {
    name: String,
    max_teams: u32,
    #[serde(default)]
    default_match_format: MatchFormatConfiguration,
    #[serde(default)]
    final_match_format: Option<MatchFormatConfiguration>,
}

#[derive(Deserialize)]
struct AddTeamBody {
    name: String,
    player_1: String,
    player_2: String,
    level: f64,
}

#[derive(Deserialize)]
struct StartCategoryBody {
    #[serde(default)]
    num_seeds: usize,
    /// Draw before the category is full.
    #[serde(default)]
    force: bool,
}

#[derive(Deserialize)]
struct ScoreBody {
    score: String,
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

/// Path segments: tournament id and category id.
#[derive(Deserialize)]
struct CategoryPath {
    id: TournamentId,
    category_id: CategoryId,
}

/// Path segments: tournament id, category id, and bracket match id.
#[derive(Deserialize)]
struct MatchPath {
    id: TournamentId,
    category_id: CategoryId,
    match_id: MatchId,
}

/// 404 for unknown ids, 400 for everything else.
fn error_response(e: &TournamentError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e {
        TournamentError::TournamentNotFound(_)
        | TournamentError::CategoryNotFound(_)
        | TournamentError::MatchNotFound(_) => HttpResponse::NotFound().json(body),
        _ => HttpResponse::BadRequest().json(body),
    }
}

/// Run `action` on a tournament under the write lock and answer with the updated tournament.
fn update_tournament<F>(state: &AppState, id: TournamentId, action: F) -> HttpResponse
where
    F: FnOnce(&mut Tournament) -> Result<(), TournamentError>,
{
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let t = match g.get_mut(id) {
        Ok(t) => t,
        Err(e) => return error_response(&e),
    };
    match action(&mut *t) {
        Ok(()) => HttpResponse::Ok().json(&*t),
        Err(e) => {
            log::debug!("Rejected request for tournament {}: {}", id, e);
            error_response(&e)
        }
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "padel-tournament-web",
    })
}

/// Create a tournament (awaiting approval).
#[post("/api/tournaments")]
async fn api_create_tournament(state: AppState, body: Json<CreateTournamentBody>) -> HttpResponse {
    let body = body.into_inner();
    let tournament = match Tournament::new(body.name, body.start_date, body.end_date) {
        Ok(t) => t,
        Err(e) => return error_response(&e),
    };
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    log::info!("Created tournament {} ({})", tournament.name, tournament.id);
    let id = g.insert(tournament);
    match g.get(id) {
        Ok(t) => HttpResponse::Ok().json(t),
        Err(e) => error_response(&e),
    }
}

/// All tournaments, bucketed into current / upcoming / past.
#[get("/api/tournaments")]
async fn api_list_tournaments(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let groups = group_by_phase(g.list(), Local::now().naive_local());
    HttpResponse::Ok().json(&groups)
}

#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get(path.id) {
        Ok(t) => HttpResponse::Ok().json(t),
        Err(e) => error_response(&e),
    }
}

/// PendingApproval -> Planned.
#[post("/api/tournaments/{id}/approve")]
async fn api_approve_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    update_tournament(&state, path.id, |t| t.approve())
}

#[post("/api/tournaments/{id}/cancel")]
async fn api_cancel_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    update_tournament(&state, path.id, |t| t.cancel())
}

/// Add a category (before play starts).
#[post("/api/tournaments/{id}/categories")]
async fn api_add_category(
    state: AppState,
    path: Path<TournamentPath>,
    body: Json<CreateCategoryBody>,
) -> HttpResponse {
    let body = body.into_inner();
    update_tournament(&state, path.id, |t| {
        t.add_category(
            body.name,
            body.max_teams,
            body.default_match_format,
            body.final_match_format,
        )
        .map(|_| ())
    })
}

/// Add one confirmed team to a category.
#[post("/api/tournaments/{id}/categories/{category_id}/teams")]
async fn api_add_team(
    state: AppState,
    path: Path<CategoryPath>,
    body: Json<AddTeamBody>,
) -> HttpResponse {
    let body = body.into_inner();
    update_tournament(&state, path.id, |t| {
        t.category_mut(path.category_id)?
            .add_team(body.name, body.player_1, body.player_2, body.level)
            .map(|_| ())
    })
}

/// Import confirmed teams from a CSV body (`name,player_1,player_2,level`).
#[post("/api/tournaments/{id}/categories/{category_id}/teams/import")]
async fn api_import_teams(state: AppState, path: Path<CategoryPath>, body: String) -> HttpResponse {
    update_tournament(&state, path.id, |t| {
        import_roster(t.category_mut(path.category_id)?, body.as_bytes()).map(|_| ())
    })
}

/// Draw the category: generate its bracket.
#[post("/api/tournaments/{id}/categories/{category_id}/start")]
async fn api_start_category(
    state: AppState,
    path: Path<CategoryPath>,
    body: Json<StartCategoryBody>,
) -> HttpResponse {
    update_tournament(&state, path.id, |t| {
        start_category(t, path.category_id, body.num_seeds, body.force)
    })
}

/// Scoring rules for one match (used to validate score entry).
#[get("/api/tournaments/{id}/categories/{category_id}/matches/{match_id}/format")]
async fn api_match_format(state: AppState, path: Path<MatchPath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let format = g
        .get(path.id)
        .and_then(|t| t.category(path.category_id))
        .and_then(|c| {
            c.get_match(path.match_id)
                .map(|m| *match_format_for_round(c, m))
                .ok_or(TournamentError::MatchNotFound(path.match_id))
        });
    match format {
        Ok(format) => HttpResponse::Ok().json(format),
        Err(e) => error_response(&e),
    }
}

/// Record a played match's score; the winner advances.
#[put("/api/tournaments/{id}/categories/{category_id}/matches/{match_id}/score")]
async fn api_record_score(
    state: AppState,
    path: Path<MatchPath>,
    body: Json<ScoreBody>,
) -> HttpResponse {
    update_tournament(&state, path.id, |t| {
        record_match_score(t, path.category_id, path.match_id, &body.score).map(|_| ())
    })
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(InMemoryStore::new()));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(api_create_tournament)
            .service(api_list_tournaments)
            .service(api_get_tournament)
            .service(api_approve_tournament)
            .service(api_cancel_tournament)
            .service(api_add_category)
            .service(api_add_team)
            .service(api_import_teams)
            .service(api_start_category)
            .service(api_match_format)
            .service(api_record_score)
    })
    .bind(bind)?
    .run()
    .await
}
