//! Company records: DTO, mapping, storage and the paginated search service.

pub mod dto;
pub mod mapper;
pub mod repository;
pub mod search;
pub mod service;

pub use dto::CompanyDto;
pub use repository::{memory::InMemoryCompanyRepository, CompanyRepository, SeaOrmCompanyRepository};
pub use search::search_term;
pub use service::{CompanyService, CompanySettings};
