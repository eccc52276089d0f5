//! HTTP boundary: game routes, admin corpus routes, and the error mapping
//! from game failures to reason-string responses.

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::auth::{self, AuthConfig};
use crate::categories;
use crate::corpus::CategoryFilter;
use crate::error::GameError;
use crate::session::GuessOutcome;
use crate::state::AppState;
use crate::types::{NewQuestion, QuestionData, QuestionId};

/// Name of the session id cookie
pub const SESSION_COOKIE: &str = "tsid";

#[derive(Debug, Deserialize)]
pub struct StartRequest {
    #[serde(default)]
    pub categories: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct VerifyRequest {
    #[serde(default)]
    pub guess: serde_json::Value,
}

#[derive(Debug, Serialize)]
pub struct StartResponse {
    pub success: bool,
    #[serde(rename = "questionData")]
    pub question_data: QuestionData,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessResults {
    pub score: u32,
    pub is_correct_guess: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_over: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub success: bool,
    pub results: GuessResults,
    #[serde(rename = "questionData", skip_serializing_if = "Option::is_none")]
    pub question_data: Option<QuestionData>,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: bool,
    msg: &'static str,
}

impl IntoResponse for GameError {
    fn into_response(self) -> Response {
        let status = match &self {
            GameError::InvalidCategories
            | GameError::InvalidCategory(_)
            | GameError::InvalidGuess
            | GameError::SessionInvalid => StatusCode::BAD_REQUEST,
            GameError::NotFound(_) => StatusCode::NOT_FOUND,
            GameError::CorpusUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = ErrorBody {
            error: true,
            msg: self.reason(),
        };
        (status, Json(body)).into_response()
    }
}

/// Extract the session id from the request's cookies
fn session_id_from_headers(headers: &HeaderMap) -> Option<String> {
    for value in headers.get_all(header::COOKIE) {
        let Ok(cookie_str) = value.to_str() else {
            continue;
        };
        for pair in cookie_str.split(';') {
            if let Some((name, value)) = pair.trim().split_once('=') {
                if name == SESSION_COOKIE && !value.is_empty() {
                    return Some(value.to_string());
                }
            }
        }
    }
    None
}

fn session_cookie(session_id: &str) -> String {
    format!(
        "{}={}; HttpOnly; Path=/; SameSite=Strict",
        SESSION_COOKIE, session_id
    )
}

/// POST /start - assemble a question pool for the requested categories and
/// begin a new game under the caller's session
pub async fn start_game(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<StartRequest>,
) -> Response {
    // reuse the caller's session id when one is presented, issue one otherwise
    let (session_id, fresh) = match session_id_from_headers(&headers) {
        Some(id) => (id, false),
        None => (ulid::Ulid::new().to_string(), true),
    };

    match state.start_game(&session_id, &req.categories).await {
        Ok(first) => {
            let body = Json(StartResponse {
                success: true,
                question_data: first,
            });
            if fresh {
                ([(header::SET_COOKIE, session_cookie(&session_id))], body).into_response()
            } else {
                body.into_response()
            }
        }
        Err(err) => err.into_response(),
    }
}

/// POST /verify - check the guess against the current question and return the
/// next question or the final result
pub async fn verify_guess(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<VerifyRequest>,
) -> Response {
    let session_id = session_id_from_headers(&headers);

    match state.submit_guess(session_id.as_deref(), &req.guess).await {
        Ok(outcome) => Json(verify_response(outcome)).into_response(),
        Err(err) => err.into_response(),
    }
}

fn verify_response(outcome: GuessOutcome) -> VerifyResponse {
    VerifyResponse {
        success: true,
        results: GuessResults {
            score: outcome.score,
            is_correct_guess: outcome.is_correct,
            game_over: outcome.game_over.then_some(true),
        },
        question_data: outcome.next,
    }
}

#[derive(Debug, Serialize)]
pub struct CategoryInfo {
    pub key: &'static str,
    #[serde(rename = "displayName")]
    pub display_name: &'static str,
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: Vec<CategoryInfo>,
}

/// GET /categories - the selectable category list
pub async fn list_categories() -> Json<CategoriesResponse> {
    let categories = categories::CATEGORIES
        .iter()
        .map(|c| CategoryInfo {
            key: c.key,
            display_name: c.display_name,
        })
        .collect();
    Json(CategoriesResponse {
        success: true,
        categories,
    })
}

#[derive(Debug, Serialize)]
pub struct InsertResponse {
    pub success: bool,
    pub duplicate: bool,
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<QuestionId>,
}

/// POST /admin/questions - insert a question; duplicates are reported, not
/// errors
pub async fn insert_question(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewQuestion>,
) -> Json<InsertResponse> {
    match state.corpus.insert(req).await {
        Some(record) => Json(InsertResponse {
            success: true,
            duplicate: false,
            id: Some(record.id),
        }),
        None => Json(InsertResponse {
            success: true,
            duplicate: true,
            id: None,
        }),
    }
}

#[derive(Debug, Serialize)]
pub struct RemoveResponse {
    pub success: bool,
    pub removed: usize,
}

/// DELETE /admin/questions/{id}
pub async fn remove_question(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    match state.corpus.remove(&id).await {
        Ok(removed) => Json(RemoveResponse {
            success: true,
            removed,
        })
        .into_response(),
        Err(err) => err.into_response(),
    }
}

#[derive(Debug, Serialize)]
pub struct CountResponse {
    pub success: bool,
    pub count: usize,
}

/// GET /admin/questions/count
pub async fn question_count(State(state): State<Arc<AppState>>) -> Json<CountResponse> {
    Json(CountResponse {
        success: true,
        count: state.corpus.count(&CategoryFilter::Any).await,
    })
}

/// 404 fallback
pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: true,
            msg: "notfound",
        }),
    )
        .into_response()
}

/// Build the application router. Admin routes sit behind Basic Auth.
pub fn router(state: Arc<AppState>, auth_config: Arc<AuthConfig>) -> Router {
    let admin_routes = Router::new()
        .route("/admin/questions", post(insert_question))
        .route("/admin/questions/count", get(question_count))
        .route("/admin/questions/{id}", delete(remove_question))
        .layer(middleware::from_fn_with_state(
            auth_config,
            auth::admin_auth_middleware,
        ));

    Router::new()
        .route("/start", post(start_game))
        .route("/verify", post(verify_guess))
        .route("/categories", get(list_categories))
        .merge(admin_routes)
        .fallback(not_found)
        .with_state(state)
}
