use axum::{
    extract::{Path, Query, State},
    response::Redirect,
    routing::{get, post},
    Json, Router,
};
use models::company::Sector;
use serde::{Deserialize, Serialize};
use service::company::CompanyDto;
use tracing::info;

use crate::{errors::JsonApiError, state::ServerState};

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct KeywordQuery {
    /// Name fragment; blank or `null` lists every company.
    pub keyword: Option<String>,
}

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ReturnQuery {
    /// Listing page to return to after the action.
    pub page: Option<i64>,
    pub keyword: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CompanyListing {
    pub current_page: i64,
    pub total_pages: u64,
    pub total_items: u64,
    pub companies: Vec<CompanyDto>,
    pub keyword: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CompanyForm {
    pub company: CompanyDto,
    pub sectors: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
}

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/companies", get(list_first_page).post(create))
        .route("/companies/new", get(new_form))
        .route("/companies/page/:page_num", get(list_page))
        .route("/companies/:id", get(get_one).delete(delete))
        .route("/companies/:id/edit", get(edit_form))
        .route("/companies/:id/update", post(update))
        .route("/companies/:id/delete", get(delete))
        .route("/sectors", get(sectors))
}

fn sector_names() -> Vec<&'static str> {
    Sector::all().iter().map(|s| s.as_str()).collect()
}

/// Listing location for a redirect. Pages below 1 go to page 1 and a
/// non-blank keyword is carried along, form-encoded.
pub fn page_location(page: Option<i64>, keyword: Option<&str>) -> String {
    let page = page.unwrap_or(1).max(1);
    match keyword.map(str::trim).filter(|k| !k.is_empty()) {
        Some(k) => {
            let encoded: String = url::form_urlencoded::byte_serialize(k.as_bytes()).collect();
            format!("/companies/page/{page}?keyword={encoded}")
        }
        None => format!("/companies/page/{page}"),
    }
}

#[utoipa::path(
    get, path = "/companies", tag = "companies",
    params(KeywordQuery),
    responses(
        (status = 200, description = "Configured default page of companies", body = crate::openapi::CompanyListingDoc),
        (status = 500, description = "Listing Failed")
    )
)]
pub async fn list_first_page(
    State(state): State<ServerState>,
    Query(q): Query<KeywordQuery>,
) -> Result<Json<CompanyListing>, JsonApiError> {
    listing(&state, state.pagination.default_page, q.keyword).await
}

#[utoipa::path(
    get, path = "/companies/page/{pageNum}", tag = "companies",
    params(("pageNum" = i64, Path, description = "1-based page number"), KeywordQuery),
    responses(
        (status = 200, description = "Page of companies", body = crate::openapi::CompanyListingDoc),
        (status = 500, description = "Listing Failed")
    )
)]
pub async fn list_page(
    State(state): State<ServerState>,
    Path(page_num): Path<i64>,
    Query(q): Query<KeywordQuery>,
) -> Result<Json<CompanyListing>, JsonApiError> {
    listing(&state, page_num, q.keyword).await
}

async fn listing(state: &ServerState, page_num: i64, keyword: Option<String>) -> Result<Json<CompanyListing>, JsonApiError> {
    let page = state
        .companies
        .find_page(keyword.as_deref(), page_num, state.pagination.page_size)
        .await?;
    Ok(Json(CompanyListing {
        current_page: page_num.max(1),
        total_pages: page.total_pages,
        total_items: page.total_elements,
        companies: page.content,
        keyword,
    }))
}

#[utoipa::path(
    get, path = "/companies/new", tag = "companies",
    responses((status = 200, description = "Blank company form", body = crate::openapi::CompanyFormDoc))
)]
pub async fn new_form() -> Json<CompanyForm> {
    Json(CompanyForm { company: CompanyDto::default(), sectors: sector_names(), page: None, keyword: None })
}

#[utoipa::path(
    get, path = "/companies/{id}", tag = "companies",
    params(("id" = i64, Path, description = "Company ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::CompanyDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get_one(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<Json<CompanyDto>, JsonApiError> {
    Ok(Json(state.companies.find_company_by_id(id).await?))
}

#[utoipa::path(
    get, path = "/companies/{id}/edit", tag = "companies",
    params(("id" = i64, Path, description = "Company ID"), ReturnQuery),
    responses(
        (status = 200, description = "Company form", body = crate::openapi::CompanyFormDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn edit_form(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Query(q): Query<ReturnQuery>,
) -> Result<Json<CompanyForm>, JsonApiError> {
    let company = state.companies.find_company_by_id(id).await?;
    Ok(Json(CompanyForm { company, sectors: sector_names(), page: q.page, keyword: q.keyword }))
}

#[utoipa::path(
    post, path = "/companies", tag = "companies",
    request_body = crate::openapi::CompanyDoc,
    responses(
        (status = 303, description = "Saved; redirect to the first page"),
        (status = 500, description = "Save Failed")
    )
)]
pub async fn create(State(state): State<ServerState>, Json(dto): Json<CompanyDto>) -> Result<Redirect, JsonApiError> {
    let saved = state.companies.save_company(dto).await?;
    info!(id = ?saved.id, "company created via api");
    Ok(Redirect::to(&page_location(Some(1), None)))
}

#[utoipa::path(
    post, path = "/companies/{id}/update", tag = "companies",
    params(("id" = i64, Path, description = "Company ID"), ReturnQuery),
    request_body = crate::openapi::CompanyDoc,
    responses(
        (status = 303, description = "Saved; redirect to the listing page"),
        (status = 500, description = "Update Failed")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Query(q): Query<ReturnQuery>,
    Json(mut dto): Json<CompanyDto>,
) -> Result<Redirect, JsonApiError> {
    dto.id = Some(id);
    state.companies.save_company(dto).await?;
    Ok(Redirect::to(&page_location(q.page, q.keyword.as_deref())))
}

#[utoipa::path(
    delete, path = "/companies/{id}", tag = "companies",
    params(("id" = i64, Path, description = "Company ID"), ReturnQuery),
    responses(
        (status = 303, description = "Deleted (or already absent); redirect to the listing page"),
        (status = 500, description = "Delete Failed")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Query(q): Query<ReturnQuery>,
) -> Result<Redirect, JsonApiError> {
    state.companies.delete_company_by_id(id).await?;
    Ok(Redirect::to(&page_location(q.page, None)))
}

#[utoipa::path(
    get, path = "/sectors", tag = "companies",
    responses((status = 200, description = "All sector names", body = [String]))
)]
pub async fn sectors() -> Json<Vec<&'static str>> {
    Json(sector_names())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_location_clamps_and_encodes() {
        assert_eq!(page_location(None, None), "/companies/page/1");
        assert_eq!(page_location(Some(0), None), "/companies/page/1");
        assert_eq!(page_location(Some(-3), Some("   ")), "/companies/page/1");
        assert_eq!(page_location(Some(2), Some("Acme & Co")), "/companies/page/2?keyword=Acme+%26+Co");
    }

    #[test]
    fn sector_list_includes_default() {
        let names = sector_names();
        assert!(names.contains(&"DEFAULT_SECTOR"));
        assert_eq!(names.len(), Sector::all().len());
    }
}
