use async_trait::async_trait;
use models::company;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Select,
};

use crate::errors::ServiceError;
use crate::pagination::{Page, PageRequest};

/// Persistence contract for company records.
///
/// Pages are ordered by ascending id so repeated calls with the same
/// request return the same window.
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<company::Model>, ServiceError>;
    async fn find_all(&self, page: PageRequest) -> Result<Page<company::Model>, ServiceError>;
    async fn find_by_name_containing(&self, name: &str, page: PageRequest) -> Result<Page<company::Model>, ServiceError>;
    /// Insert when `id` is unset (the store assigns one), otherwise overwrite
    /// the existing row. Overwriting an id that is not stored is an error.
    async fn save(&self, company: company::ActiveModel) -> Result<company::Model, ServiceError>;
    /// Remove a record; absent ids are not an error.
    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError>;
}

fn nothing_updated(id: Option<i64>) -> ServiceError {
    match id {
        Some(id) => ServiceError::Db(format!("company {id} does not exist; nothing updated")),
        None => ServiceError::Db("company does not exist; nothing updated".into()),
    }
}

fn set_id(company: &company::ActiveModel) -> Option<i64> {
    match &company.id {
        ActiveValue::Set(id) | ActiveValue::Unchanged(id) => Some(*id),
        ActiveValue::NotSet => None,
    }
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmCompanyRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmCompanyRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    /// Window by `OFFSET`/`LIMIT` from `PageRequest::offset`, which never
    /// exceeds what the database accepts, plus a separate total count.
    async fn fetch_page(&self, select: Select<company::Entity>, page: PageRequest) -> Result<Page<company::Model>, ServiceError> {
        let total = select.clone().count(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
        let rows = select
            .order_by_asc(company::Column::Id)
            .offset(page.offset())
            .limit(page.size())
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(Page::new(rows, page, total))
    }
}

#[async_trait]
impl CompanyRepository for SeaOrmCompanyRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<company::Model>, ServiceError> {
        company::Entity::find_by_id(id).one(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn find_all(&self, page: PageRequest) -> Result<Page<company::Model>, ServiceError> {
        self.fetch_page(company::Entity::find(), page).await
    }

    async fn find_by_name_containing(&self, name: &str, page: PageRequest) -> Result<Page<company::Model>, ServiceError> {
        self.fetch_page(company::Entity::find().filter(company::name_contains(name)), page).await
    }

    async fn save(&self, company: company::ActiveModel) -> Result<company::Model, ServiceError> {
        let id = set_id(&company);
        let saved = if id.is_some() {
            company.update(&self.db).await
        } else {
            company.insert(&self.db).await
        };
        saved.map_err(|e| match e {
            DbErr::RecordNotUpdated => nothing_updated(id),
            other => ServiceError::Db(other.to_string()),
        })
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
        company::Entity::delete_by_id(id).exec(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(())
    }
}

/// In-memory repository for tests and database-less runs
pub mod memory {
    use super::*;
    use sea_orm::TryIntoModel;
    use std::collections::BTreeMap;
    use tokio::sync::RwLock;

    #[derive(Default)]
    struct Rows {
        by_id: BTreeMap<i64, company::Model>,
        // ids are never handed out twice, even after deletes
        last_id: i64,
    }

    /// Ordered map behind an async lock. Name search is case-sensitive.
    #[derive(Default)]
    pub struct InMemoryCompanyRepository {
        inner: RwLock<Rows>,
    }

    impl InMemoryCompanyRepository {
        pub fn new() -> Self { Self::default() }
    }

    fn window<'a>(matches: impl Iterator<Item = &'a company::Model>, page: PageRequest) -> Page<company::Model> {
        let matches: Vec<&company::Model> = matches.collect();
        let total = matches.len() as u64;
        let skip = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let take = usize::try_from(page.size()).unwrap_or(usize::MAX);
        let content = matches.into_iter().skip(skip).take(take).cloned().collect();
        Page::new(content, page, total)
    }

    #[async_trait]
    impl CompanyRepository for InMemoryCompanyRepository {
        async fn find_by_id(&self, id: i64) -> Result<Option<company::Model>, ServiceError> {
            Ok(self.inner.read().await.by_id.get(&id).cloned())
        }

        async fn find_all(&self, page: PageRequest) -> Result<Page<company::Model>, ServiceError> {
            let rows = self.inner.read().await;
            Ok(window(rows.by_id.values(), page))
        }

        async fn find_by_name_containing(&self, name: &str, page: PageRequest) -> Result<Page<company::Model>, ServiceError> {
            let rows = self.inner.read().await;
            Ok(window(rows.by_id.values().filter(|c| c.name.contains(name)), page))
        }

        async fn save(&self, mut company: company::ActiveModel) -> Result<company::Model, ServiceError> {
            let mut rows = self.inner.write().await;
            match set_id(&company) {
                Some(id) if !rows.by_id.contains_key(&id) => return Err(nothing_updated(Some(id))),
                Some(_) => {}
                None => {
                    rows.last_id += 1;
                    company.id = ActiveValue::Set(rows.last_id);
                }
            }
            let model = company.try_into_model().map_err(|e| ServiceError::Db(e.to_string()))?;
            rows.by_id.insert(model.id, model.clone());
            Ok(model)
        }

        async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
            self.inner.write().await.by_id.remove(&id);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use models::company::Sector;
    use sea_orm::ActiveValue::{NotSet, Set};

    fn unsaved(name: &str) -> company::ActiveModel {
        company::ActiveModel {
            id: NotSet,
            name: Set(name.to_string()),
            country: Set(None),
            ceo: Set(None),
            foundation_date: Set(None),
            revenue: Set(None),
            sector: Set(Sector::Retail),
        }
    }

    async fn exercise_contract<R: CompanyRepository>(repo: &R) -> Result<(), anyhow::Error> {
        for name in ["Acme", "Globex", "Global Dynamics", "Initech", "Umbrella"] {
            repo.save(unsaved(name)).await?;
        }

        let first = repo.find_all(PageRequest::new(0, 2)).await?;
        assert_eq!(first.total_elements, 5);
        assert_eq!(first.total_pages, 3);
        let names: Vec<_> = first.content.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Acme", "Globex"]);

        let beyond = repo.find_all(PageRequest::new(9, 2)).await?;
        assert!(beyond.is_empty());
        assert_eq!(beyond.total_elements, 5);

        let far = repo.find_all(PageRequest::new(u64::MAX, 10)).await?;
        assert!(far.is_empty());
        assert_eq!(far.total_elements, 5);
        let far_search = repo.find_by_name_containing("Glob", PageRequest::new(u64::MAX / 2, 3)).await?;
        assert!(far_search.is_empty());
        assert_eq!(far_search.total_elements, 2);

        let glob = repo.find_by_name_containing("Glob", PageRequest::new(0, 10)).await?;
        assert_eq!(glob.total_elements, 2);
        assert!(glob.content.iter().all(|c| c.name.contains("Glob")));

        // update in place
        let mut am: company::ActiveModel = repo.find_by_id(1).await?.expect("stored").into();
        am.name = Set("Acme Corp".into());
        am.id = Set(1);
        let updated = repo.save(am).await?;
        assert_eq!(updated.id, 1);
        assert_eq!(repo.find_by_id(1).await?.expect("stored").name, "Acme Corp");

        // update of an unknown id does not insert
        let mut ghost = unsaved("Ghost");
        ghost.id = Set(999);
        assert!(repo.save(ghost).await.is_err());
        assert!(repo.find_by_id(999).await?.is_none());

        // delete is idempotent
        repo.delete_by_id(1).await?;
        repo.delete_by_id(1).await?;
        repo.delete_by_id(12345).await?;
        assert!(repo.find_by_id(1).await?.is_none());

        // ids are not reused
        let fresh = repo.save(unsaved("Acme")).await?;
        assert_eq!(fresh.id, 6);
        Ok(())
    }

    #[tokio::test]
    async fn in_memory_repository_contract() -> Result<(), anyhow::Error> {
        let repo = memory::InMemoryCompanyRepository::new();
        exercise_contract(&repo).await
    }

    #[tokio::test]
    async fn seaorm_repository_contract() -> Result<(), anyhow::Error> {
        let repo = SeaOrmCompanyRepository::new(get_db().await?);
        exercise_contract(&repo).await
    }

    #[tokio::test]
    async fn in_memory_search_is_case_sensitive() -> Result<(), anyhow::Error> {
        let repo = memory::InMemoryCompanyRepository::new();
        repo.save(unsaved("Globex")).await?;
        let lower = repo.find_by_name_containing("glob", PageRequest::new(0, 10)).await?;
        assert!(lower.is_empty());
        let exact = repo.find_by_name_containing("Glob", PageRequest::new(0, 10)).await?;
        assert_eq!(exact.content.len(), 1);
        Ok(())
    }
}
