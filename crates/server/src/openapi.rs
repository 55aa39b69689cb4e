use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct CompanyDoc {
    pub id: Option<i64>,
    pub name: String,
    pub country: Option<String>,
    pub ceo: Option<String>,
    #[schema(example = "1998-09-04")]
    pub foundation_date: Option<String>,
    pub revenue: Option<i64>,
    /// Sector name; omitted or blank means DEFAULT_SECTOR
    #[schema(example = "TECHNOLOGY")]
    pub sector: Option<String>,
}

#[derive(ToSchema)]
pub struct CompanyListingDoc {
    pub current_page: i64,
    pub total_pages: u64,
    pub total_items: u64,
    pub companies: Vec<CompanyDoc>,
    pub keyword: Option<String>,
}

#[derive(ToSchema)]
pub struct CompanyFormDoc {
    pub company: CompanyDoc,
    pub sectors: Vec<String>,
    pub page: Option<i64>,
    pub keyword: Option<String>,
}

#[derive(ToSchema)]
pub struct ErrorDoc {
    pub error: String,
    pub message: Option<String>,
    pub id: Option<i64>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::companies::list_first_page,
        crate::routes::companies::list_page,
        crate::routes::companies::new_form,
        crate::routes::companies::get_one,
        crate::routes::companies::edit_form,
        crate::routes::companies::create,
        crate::routes::companies::update,
        crate::routes::companies::delete,
        crate::routes::companies::sectors,
    ),
    components(
        schemas(
            HealthResponse,
            CompanyDoc,
            CompanyListingDoc,
            CompanyFormDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "companies")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_company_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        assert!(paths.iter().any(|p| p.as_str() == "/companies/{id}"));
        assert!(paths.iter().any(|p| p.as_str() == "/companies/page/{pageNum}"));
        assert!(paths.iter().any(|p| p.as_str() == "/health"));
    }
}
