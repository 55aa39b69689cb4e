use std::sync::Arc;

use models::company::{self, Sector};
use tracing::{debug, info, instrument};

use super::dto::CompanyDto;
use super::repository::CompanyRepository;
use super::search::search_term;
use crate::errors::ServiceError;
use crate::pagination::{Page, PageRequest, Pagination, MAX_PER_PAGE};

/// Company service configuration
#[derive(Clone, Debug)]
pub struct CompanySettings {
    /// Sector written when a saved company carries none
    pub default_sector: Sector,
    pub max_page_size: u64,
}

impl Default for CompanySettings {
    fn default() -> Self {
        Self { default_sector: Sector::DefaultSector, max_page_size: MAX_PER_PAGE }
    }
}

impl CompanySettings {
    pub fn from_config(cfg: &configs::AppConfig) -> Result<Self, ServiceError> {
        Ok(Self {
            default_sector: cfg.company.default_sector.parse()?,
            max_page_size: cfg.pagination.max_page_size,
        })
    }
}

/// Paginated listing, keyword search and persistence of companies,
/// independent of web framework and storage backend.
pub struct CompanyService<R: CompanyRepository> {
    repo: Arc<R>,
    settings: CompanySettings,
}

impl<R: CompanyRepository> CompanyService<R> {
    pub fn new(repo: Arc<R>, settings: CompanySettings) -> Self { Self { repo, settings } }

    /// One page of all companies. `page_num` is 1-based; values below 1 read page 1.
    /// Pages past the end come back empty with correct totals.
    ///
    /// # Examples
    /// ```
    /// use service::company::{CompanyService, CompanySettings, CompanyDto, InMemoryCompanyRepository};
    /// use std::sync::Arc;
    /// let svc = CompanyService::new(Arc::new(InMemoryCompanyRepository::new()), CompanySettings::default());
    /// tokio_test::block_on(svc.save_company(CompanyDto { name: "Acme".into(), ..Default::default() })).unwrap();
    /// let page = tokio_test::block_on(svc.find_paginated_companies(1, 10)).unwrap();
    /// assert_eq!(page.total_elements, 1);
    /// assert_eq!(page.content[0].name, "Acme");
    /// ```
    #[instrument(skip(self))]
    pub async fn find_paginated_companies(&self, page_num: i64, page_size: u64) -> Result<Page<CompanyDto>, ServiceError> {
        let request = self.page_request(page_num, page_size);
        let page = self.repo.find_all(request).await?;
        debug!(total = page.total_elements, returned = page.content.len(), "listed companies");
        Ok(page.map(CompanyDto::from))
    }

    /// One page of companies whose name contains `keyword`.
    #[instrument(skip(self))]
    pub async fn find_paginated_companies_by_name(&self, keyword: &str, pageable: PageRequest) -> Result<Page<CompanyDto>, ServiceError> {
        let page = self.repo.find_by_name_containing(keyword, pageable).await?;
        debug!(total = page.total_elements, returned = page.content.len(), "searched companies");
        Ok(page.map(CompanyDto::from))
    }

    /// Listing entry point for request handlers: searches by name when
    /// `keyword` is a real search term, otherwise lists everything.
    pub async fn find_page(&self, keyword: Option<&str>, page_num: i64, page_size: u64) -> Result<Page<CompanyDto>, ServiceError> {
        match search_term(keyword) {
            Some(term) => {
                let request = self.page_request(page_num, page_size);
                self.find_paginated_companies_by_name(term, request).await
            }
            None => self.find_paginated_companies(page_num, page_size).await,
        }
    }

    #[instrument(skip(self))]
    pub async fn find_company_by_id(&self, id: i64) -> Result<CompanyDto, ServiceError> {
        let found = self.repo.find_by_id(id).await?;
        found.map(CompanyDto::from).ok_or_else(|| ServiceError::not_found(id))
    }

    /// Store a company, inserting when `dto.id` is `None` and overwriting otherwise.
    /// A missing sector becomes the configured default.
    #[instrument(skip(self, dto), fields(id = ?dto.id, name = %dto.name))]
    pub async fn save_company(&self, mut dto: CompanyDto) -> Result<CompanyDto, ServiceError> {
        if dto.sector.is_none() {
            debug!(default = %self.settings.default_sector, "sector missing; applying default");
            dto.sector = Some(self.settings.default_sector);
        }
        let saved = self.repo.save(company::ActiveModel::from(dto)).await?;
        info!(id = saved.id, sector = %saved.sector, "company_saved");
        Ok(CompanyDto::from(saved))
    }

    /// Delete by id. Absent ids are a no-op.
    #[instrument(skip(self))]
    pub async fn delete_company_by_id(&self, id: i64) -> Result<(), ServiceError> {
        self.repo.delete_by_id(id).await?;
        info!(id, "company_deleted");
        Ok(())
    }

    fn page_request(&self, page_num: i64, page_size: u64) -> PageRequest {
        Pagination::new(page_num, page_size).normalize(self.settings.max_page_size)
    }
}
