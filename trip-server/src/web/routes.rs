//! HTTP route handlers.

use std::path::Path;

use axum::{
    Form, Json, Router,
    extract::{Query, RawQuery, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Redirect, Response},
    routing::get,
};
use chrono::{Local, NaiveDate};
use tower_http::services::ServeDir;
use tracing::{debug, error, info, warn};

use crate::domain::SearchMode;
use crate::form::{RedirectNavigator, SearchForm, SubmitOutcome, ValidationContext};
use crate::query::{SearchQuery, decode};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Route of the results page; accepted searches redirect here.
pub const RESULTS_ROUTE: &str = "/search";

/// Create the application router.
///
/// `static_dir` is the directory served under `/static`.
pub fn create_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route(RESULTS_ROUTE, get(search_results).post(submit_search))
        .route("/api/locations/search", get(search_locations))
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .fallback(not_found)
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Landing page with the tabbed search form.
async fn index_page(
    State(state): State<AppState>,
    Query(req): Query<IndexRequest>,
) -> IndexTemplate {
    let mode = match req.tab.as_deref() {
        None => SearchMode::default(),
        Some(tab) => tab.parse().unwrap_or_else(|e| {
            debug!(error = %e, "falling back to the bus tab");
            SearchMode::default()
        }),
    };

    let form = mode
        .has_form()
        .then(|| FormView::from_form(&SearchForm::new(), &state.locations, today()));

    render_index(mode, form, None)
}

fn render_index(mode: SearchMode, form: Option<FormView>, notice: Option<String>) -> IndexTemplate {
    IndexTemplate {
        tabs: TabView::all(mode),
        form,
        notice,
    }
}

/// Accept a posted bus search.
///
/// A valid search redirects to the results page. An invalid one re-renders
/// the form with its errors.
async fn submit_search(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(submission): Form<SearchFormSubmission>,
) -> Result<Response, AppError> {
    let today = today();
    let ctx = ValidationContext::new(state.policy, today);
    let mut form = submission.to_form();
    let mut navigator = RedirectNavigator::new(RESULTS_ROUTE);

    let outcome = form.submit(&ctx, &mut navigator);
    let html = accepts_html(&headers);

    match outcome {
        SubmitOutcome::Navigated(_) => {
            let location = navigator.into_target().ok_or_else(|| AppError::Internal {
                message: "navigation produced no target".to_string(),
            })?;
            info!(%location, "search accepted");
            if html {
                Ok(Redirect::to(&location).into_response())
            } else {
                Ok(Json(SearchAccepted { location }).into_response())
            }
        }
        SubmitOutcome::Rejected(errors) => {
            if html {
                let view = FormView::from_form(&form, &state.locations, today);
                let page = render_index(SearchMode::Bus, Some(view), None);
                Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response())
            } else {
                Ok((
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(SearchRejected { errors }),
                )
                    .into_response())
            }
        }
        SubmitOutcome::Failed { notice } => {
            if html {
                let view = FormView::from_form(&form, &state.locations, today);
                Ok(render_index(SearchMode::Bus, Some(view), Some(notice.to_string()))
                    .into_response())
            } else {
                Err(AppError::Internal {
                    message: notice.to_string(),
                })
            }
        }
        SubmitOutcome::Busy => Err(AppError::BadRequest {
            message: "search already submitted".to_string(),
        }),
    }
}

/// Results page for a search.
///
/// Reads the raw query so that repeated or malformed keys never reject the
/// request.
async fn search_results(
    State(state): State<AppState>,
    headers: HeaderMap,
    RawQuery(raw): RawQuery,
) -> Response {
    let query = SearchQuery::parse(raw.as_deref().unwrap_or_default());
    let summary = decode(&query, &state.locations);

    if accepts_html(&headers) {
        let template = ResultsTemplate {
            summary: SummaryView::from_summary(&summary),
        };
        template.into_response()
    } else {
        Json(summary).into_response()
    }
}

/// Search locations by name or code.
async fn search_locations(
    State(state): State<AppState>,
    Query(req): Query<LocationSearchRequest>,
) -> Json<LocationSearchResponse> {
    let limit = req.limit.unwrap_or(10).min(50);
    let locations = state
        .locations
        .search(&req.q, limit)
        .into_iter()
        .map(LocationResult::from)
        .collect();

    Json(LocationSearchResponse { locations })
}

async fn not_found(headers: HeaderMap) -> Response {
    if accepts_html(&headers) {
        let page = ErrorTemplate {
            title: "Not found".to_string(),
            message: "The page you asked for does not exist.".to_string(),
        };
        (StatusCode::NOT_FOUND, page).into_response()
    } else {
        AppError::NotFound {
            message: "not found".to_string(),
        }
        .into_response()
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
