/// HTTP server with WebSocket support for browsing a media dataset
use actix_web::{middleware, web, App, Error, HttpRequest, HttpResponse, HttpServer};
use actix_web_actors::ws;
use log::info;

use crate::config::ServerConfig;
use crate::messages::ServerMessage;
use crate::state::ViewState;
use crate::store::RecordStore;
use crate::websocket::{AppState, ViewSocket};

/// WebSocket endpoint handler
async fn ws_index(
    req: HttpRequest,
    stream: web::Payload,
    state: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    let resp = ws::start(ViewSocket::new(state), &req, stream)?;
    Ok(resp)
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "message": format!("MediaView server is running with {} records", state.store.len())
    }))
}

async fn list_records(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.store.records())
}

async fn summary(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.summary_message())
}

/// One composed view; omitted query parameters take their defaults
async fn view(state: web::Data<AppState>, query: web::Query<ViewState>) -> HttpResponse {
    match state.view_message(&query) {
        ServerMessage::View { view } => HttpResponse::Ok().json(view),
        other => HttpResponse::InternalServerError().json(other),
    }
}

/// Route table shared by the server and the tests
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/ws", web::get().to(ws_index))
        .route("/health", web::get().to(health_check))
        .route("/api/records", web::get().to(list_records))
        .route("/api/summary", web::get().to(summary))
        .route("/api/view", web::get().to(view));
}

/// Start the HTTP server for `store`
pub async fn run_server(config: &ServerConfig, store: RecordStore) -> std::io::Result<()> {
    let state = web::Data::new(AppState::new(store));
    let (host, port) = (config.host.as_str(), config.port);

    info!(
        "MediaView server serving {} records ({} genres)",
        state.store.len(),
        state.vocabulary.len()
    );
    info!("WebSocket: ws://{}:{}/ws", host, port);
    info!("View API: http://{}:{}/api/view", host, port);
    info!("Health check: http://{}:{}/health", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(middleware::Logger::default())
            // CORS for development
            .wrap(
                actix_cors::Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .configure(configure)
    })
    .bind((host, port))?
    .run()
    .await
}
