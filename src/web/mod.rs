//! Web server for previewing highlighted documents.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::extract::{Form, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Result};
use axum::routing::get;
use maud::{html, Markup, DOCTYPE};
use rand::Rng;
use tokio::sync::Mutex;

use crate::render::{render_document, STYLE};

/// Listen address used when `GF_HIGHLIGHT_ADDR` is not set.
pub const DEFAULT_ADDR: &str = "0.0.0.0:3000";

/// Idle sessions older than this are dropped.
const SESSION_TTL: Duration = Duration::from_secs(60 * 60);

struct Session {
    name: String,

    /// Last active time of this session.
    last_active: Instant,

    /// Number of earlier versions of the document.
    revisions: usize,

    text: String,
}

impl Session {
    fn new(name: String) -> Self {
        Session {
            name,
            last_active: Instant::now(),
            revisions: 0,
            text: String::new(),
        }
    }

    fn update(&mut self, text: String) {
        if !self.text.is_empty() {
            self.revisions += 1;
        }
        self.text = text;
        self.last_active = Instant::now();
    }

    fn render(&self) -> Markup {
        html!(
                (DOCTYPE)
                html {
                    head {
                        title { (self.name) }
                        link rel="stylesheet" href="/style.css";
                    }
                    body {
                        main {
                            (render_document(&self.text))
                            form method="post" {
                                textarea class="document" name="text" { (self.text) }
                                input type="submit" value="Highlight";
                            }
                            @if self.revisions > 0 {
                                p class="history" { (self.revisions) " earlier versions" }
                            }
                        }
                    }
                }
        )
    }
}

#[derive(Default, Clone)]
struct SessionHandler {
    sessions: Arc<Mutex<HashMap<String, SessionPtr>>>,
}

type SessionPtr = Arc<Mutex<Session>>;

impl SessionHandler {
    /// Find or create the named session, dropping any that have gone idle.
    async fn session(&self, name: String) -> SessionPtr {
        let mut sessions = self.sessions.lock().await;
        sessions.retain(|_, session| {
            // A session that is busy is not idle.
            session
                .try_lock()
                .map(|session| session.last_active.elapsed() < SESSION_TTL)
                .unwrap_or(true)
        });
        sessions
            .entry(name.clone())
            .or_insert_with(|| {
                tracing::info!(session = %name, "new session");
                Arc::new(Mutex::new(Session::new(name)))
            })
            .clone()
    }

    async fn get(
        handler: State<SessionHandler>,
        Path(session): Path<String>,
    ) -> impl IntoResponse {
        let session_ptr = handler.session(session).await;
        let session = session_ptr.lock().await;
        session.render()
    }

    async fn post(
        handler: State<SessionHandler>,
        Path(session): Path<String>,
        Form(form): Form<HashMap<String, String>>,
    ) -> Result<impl IntoResponse, (StatusCode, String)> {
        let text = form
            .get("text")
            .ok_or_else(|| (StatusCode::BAD_REQUEST, "missing form field \"text\"".to_owned()))?;
        let session_ptr = handler.session(session).await;
        let mut session = session_ptr.lock().await;
        tracing::debug!(session = %session.name, bytes = text.len(), "document updated");
        session.update(text.clone());
        Ok(session.render())
    }
}

fn random_session_name() -> String {
    format!("{:08x}", rand::thread_rng().gen::<u32>())
}

pub fn get_server() -> axum::Router {
    let sessions: SessionHandler = Default::default();

    axum::Router::new()
        .route(
            "/",
            get(|| async { Redirect::temporary(&format!("/sessions/{}", random_session_name())) }),
        )
        .route(
            "/style.css",
            get(|| async { ([(axum::http::header::CONTENT_TYPE, "text/css")], STYLE) }),
        )
        .route(
            "/sessions/:session",
            get(SessionHandler::get).post(SessionHandler::post),
        )
        .with_state(sessions)
}
