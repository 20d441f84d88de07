//! Newcomers listing with content negotiation.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::header::VARY;
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use user_store::UserRepository;

use crate::error::ApiError;
use crate::negotiation::{ResponseFormat, negotiate};
use crate::views::{NEWCOMERS_TITLE, Views};

/// Collaborators of the listing endpoint.
pub struct ListingState<R: UserRepository> {
    pub users: R,
    pub views: Views,
}

impl<R: UserRepository> ListingState<R> {
    pub fn new(users: R, views: Views) -> Self {
        Self { users, views }
    }
}

/// GET /users — the last joined users as an HTML page or JSON array,
/// depending on the `Accept` header. Answers 406 with an empty body when
/// neither representation is acceptable. All three carry `Vary: accept`.
///
/// Repository failures are not handled here and surface as a 500.
#[tracing::instrument(skip(state, headers))]
pub async fn list<R: UserRepository + 'static>(
    State(state): State<Arc<ListingState<R>>>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let users = state.users.last_joined().await?;
    let format = negotiate(&headers);

    metrics::counter!(
        "listing_responses_total",
        "format" => format.map_or("unsupported", ResponseFormat::label)
    )
    .increment(1);

    let mut response = match format {
        Some(ResponseFormat::Html) => {
            Html(state.views.render_listing(NEWCOMERS_TITLE, &users)?).into_response()
        }
        Some(ResponseFormat::Json) => Json(users).into_response(),
        None => {
            tracing::debug!("no acceptable representation");
            StatusCode::NOT_ACCEPTABLE.into_response()
        }
    };

    response
        .headers_mut()
        .insert(VARY, HeaderValue::from_static("accept"));
    Ok(response)
}
