//! Service layer providing paginated search and persistence of company records.
//! - Separates business logic from data access (`company::CompanyRepository`).
//! - Reuses entity definitions in the `models` crate.
//! - Provides clear error types and documented interfaces.

pub mod errors;
pub mod pagination;
pub mod company;
#[cfg(test)]
pub mod test_support;
