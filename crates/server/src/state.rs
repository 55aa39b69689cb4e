use std::sync::Arc;

use configs::{AppConfig, PaginationConfig};
use sea_orm::DatabaseConnection;
use service::company::{CompanyService, CompanySettings, SeaOrmCompanyRepository};
use service::errors::ServiceError;

pub type Companies = CompanyService<SeaOrmCompanyRepository>;

#[derive(Clone)]
pub struct ServerState {
    pub companies: Arc<Companies>,
    pub pagination: PaginationConfig,
}

impl ServerState {
    pub fn new(db: DatabaseConnection, cfg: &AppConfig) -> Result<Self, ServiceError> {
        let settings = CompanySettings::from_config(cfg)?;
        let repo = Arc::new(SeaOrmCompanyRepository::new(db));
        Ok(Self {
            companies: Arc::new(CompanyService::new(repo, settings)),
            pagination: cfg.pagination.clone(),
        })
    }
}
