//! Cookbook corpus routes.

#[cfg(test)]
#[path = "docs_test.rs"]
mod docs_test;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use cookbook::doc::doc_id;
use cookbook::sidebar::{SidebarItem, sidebar};
use cookbook::{Doc, Language};
use serde::Deserialize;

use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct SidebarQuery {
    /// Case-insensitive title filter.
    pub q: Option<String>,
}

fn parse_language(code: &str) -> Result<Language, StatusCode> {
    Language::from_code(code).ok_or(StatusCode::NOT_FOUND)
}

/// `GET /api/docs` — every document, in load order.
pub async fn list_docs(State(state): State<AppState>) -> Json<Vec<Doc>> {
    Json(state.docs.docs().to_vec())
}

/// `GET /api/docs/{lang}` — sidebar entries for one language.
pub async fn list_language(
    State(state): State<AppState>,
    Path(lang): Path<String>,
    Query(query): Query<SidebarQuery>,
) -> Result<Json<Vec<SidebarItem>>, StatusCode> {
    let language = parse_language(&lang)?;
    let filter = query.q.unwrap_or_default();
    Ok(Json(sidebar(&state.docs, language, &filter)))
}

/// `GET /api/docs/{lang}/{*path}` — one document by path (`.md` optional).
pub async fn get_doc(
    State(state): State<AppState>,
    Path((lang, path)): Path<(String, String)>,
) -> Result<Json<Doc>, StatusCode> {
    let language = parse_language(&lang)?;
    let id = doc_id(language, path.trim_start_matches('/'));
    state
        .docs
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}
