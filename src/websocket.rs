/// WebSocket sessions for interactive view browsing
///
/// Every connection owns its own view state. The shared record store is
/// read-only, so sessions never coordinate with each other.
use actix::prelude::*;
use actix_web::web;
use actix_web_actors::ws;
use log::{debug, warn};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::composer::compose;
use crate::messages::{ClientMessage, ServerMessage, ViewPayload};
use crate::state::ViewState;
use crate::store::{DatasetSummary, RecordStore};
use crate::vocabulary::GenreVocabulary;

/// How often heartbeat pings are sent
const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(5);
/// How long before lack of client response causes a timeout
const CLIENT_TIMEOUT: Duration = Duration::from_secs(10);

/// Shared state for all connections
pub struct AppState {
    pub store: Arc<RecordStore>,
    pub vocabulary: GenreVocabulary,
    pub summary: DatasetSummary,
}

impl AppState {
    pub fn new(store: RecordStore) -> Self {
        let vocabulary = store.genre_vocabulary();
        let summary = store.summary();
        Self {
            store: Arc::new(store),
            vocabulary,
            summary,
        }
    }

    /// Compose the view for `state` and package it for the wire
    pub fn view_message(&self, state: &ViewState) -> ServerMessage {
        let view = compose(self.store.records(), state);
        ServerMessage::View {
            view: ViewPayload::new(state, &view),
        }
    }

    pub fn summary_message(&self) -> ServerMessage {
        ServerMessage::Summary {
            summary: self.summary.clone(),
            genres: self.vocabulary.options().to_vec(),
        }
    }

    /// Total pages `state` currently spans
    pub fn total_pages(&self, state: &ViewState) -> usize {
        compose(self.store.records(), state).total_pages
    }
}

/// WebSocket connection actor
pub struct ViewSocket {
    hb: Instant,
    app: web::Data<AppState>,
    view_state: ViewState,
}

impl ViewSocket {
    pub fn new(app: web::Data<AppState>) -> Self {
        Self {
            hb: Instant::now(),
            app,
            view_state: ViewState::default(),
        }
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view_state
    }

    fn hb(&self, ctx: &mut ws::WebsocketContext<Self>) {
        ctx.run_interval(HEARTBEAT_INTERVAL, |act, ctx| {
            if Instant::now().duration_since(act.hb) > CLIENT_TIMEOUT {
                warn!("WebSocket client heartbeat failed, disconnecting");
                ctx.stop();
                return;
            }
            ctx.ping(b"");
        });
    }

    /// Process one client message and return the reply
    pub fn handle_client_message(&mut self, msg: ClientMessage) -> ServerMessage {
        match msg {
            ClientMessage::Snapshot => self.app.view_message(&self.view_state),

            ClientMessage::Summary => self.app.summary_message(),

            ClientMessage::Update { action } => {
                debug!("Applying {:?}", action);
                let total_pages = self.app.total_pages(&self.view_state);
                self.view_state = self.view_state.apply(action, total_pages);
                self.app.view_message(&self.view_state)
            }

            ClientMessage::Reset { state } => {
                self.view_state = state.unwrap_or_default();
                self.app.view_message(&self.view_state)
            }
        }
    }
}

impl Actor for ViewSocket {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        self.hb(ctx);
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for ViewSocket {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Ping(msg)) => {
                self.hb = Instant::now();
                ctx.pong(&msg);
            }
            Ok(ws::Message::Pong(_)) => {
                self.hb = Instant::now();
            }
            Ok(ws::Message::Text(text)) => {
                let reply = match serde_json::from_str::<ClientMessage>(&text) {
                    Ok(client_msg) => self.handle_client_message(client_msg),
                    Err(e) => ServerMessage::error(format!("Invalid message format: {}", e)),
                };
                ctx.text(reply.to_json());
            }
            Ok(ws::Message::Binary(_)) => {
                warn!("Unexpected binary message");
            }
            Ok(ws::Message::Close(reason)) => {
                ctx.close(reason);
                ctx.stop();
            }
            _ => ctx.stop(),
        }
    }
}
