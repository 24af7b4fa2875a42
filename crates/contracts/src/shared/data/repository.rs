use thiserror::Error;

use crate::domain::common::{next_record_id, Record};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("{entity} '{id}' not found")]
    NotFound { entity: String, id: String },
    #[error("{entity} '{id}' already exists")]
    DuplicateId { entity: String, id: String },
}

/// Per-entity data access used by the list pages
pub trait Repository<T: Record> {
    /// All records in display order
    fn list(&self) -> Vec<T>;

    fn fetch(&self, id: &str) -> Result<T, RepositoryError>;

    /// Append a record built around a freshly generated id
    fn create(&mut self, build: impl FnOnce(String) -> T) -> Result<T, RepositoryError>;

    /// Replace the record with the same id, keeping its position
    fn update(&mut self, record: T) -> Result<(), RepositoryError>;

    fn delete(&mut self, id: &str) -> Result<T, RepositoryError>;
}

/// Vec-backed repository seeded from a data source
#[derive(Debug, Clone, PartialEq)]
pub struct InMemoryRepository<T> {
    records: Vec<T>,
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T: Record> InMemoryRepository<T> {
    pub fn new(seed: Vec<T>) -> Self {
        Self { records: seed }
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Identifier the next `create` will hand out
    pub fn next_id(&self) -> String {
        next_record_id(T::id_prefix(), self.records.iter().map(|r| r.id()))
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }

    fn not_found(id: &str) -> RepositoryError {
        log::warn!("{}: '{}' not found", T::full_name(), id);
        RepositoryError::NotFound {
            entity: T::element_name().to_string(),
            id: id.to_string(),
        }
    }
}

impl<T: Record> Repository<T> for InMemoryRepository<T> {
    fn list(&self) -> Vec<T> {
        self.records.clone()
    }

    fn fetch(&self, id: &str) -> Result<T, RepositoryError> {
        self.position(id)
            .map(|index| self.records[index].clone())
            .ok_or_else(|| Self::not_found(id))
    }

    fn create(&mut self, build: impl FnOnce(String) -> T) -> Result<T, RepositoryError> {
        let record = build(self.next_id());
        if self.position(record.id()).is_some() {
            log::warn!("{}: duplicate id '{}'", T::full_name(), record.id());
            return Err(RepositoryError::DuplicateId {
                entity: T::element_name().to_string(),
                id: record.id().to_string(),
            });
        }
        log::debug!("{}: created '{}'", T::full_name(), record.id());
        self.records.push(record.clone());
        Ok(record)
    }

    fn update(&mut self, record: T) -> Result<(), RepositoryError> {
        let index = self.position(record.id()).ok_or_else(|| Self::not_found(record.id()))?;
        log::debug!("{}: updated '{}'", T::full_name(), record.id());
        self.records[index] = record;
        Ok(())
    }

    fn delete(&mut self, id: &str) -> Result<T, RepositoryError> {
        let index = self.position(id).ok_or_else(|| Self::not_found(id))?;
        log::debug!("{}: deleted '{}'", T::full_name(), id);
        Ok(self.records.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::aggregate::Product;
    use crate::domain::a001_product::form::ProductDraft;
    use crate::domain::a007_app_user::aggregate::AppUser;
    use crate::shared::data::seed;
    use crate::shared::workflow::ConfirmFlow;

    fn products() -> InMemoryRepository<Product> {
        InMemoryRepository::new(seed::PRODUCTS.clone())
    }

    #[test]
    fn test_create_appends_with_fresh_id() {
        let mut repo = products();
        let before: Vec<String> = repo.records().iter().map(|p| p.id.clone()).collect();

        let draft = ProductDraft {
            merchant: "Kopi Senja Abadi".into(),
            name: "Kopi Tubruk".into(),
            stock: "5".into(),
            price: "9000".into(),
            ..ProductDraft::default()
        };
        let input = draft.validate().unwrap();
        let created = repo.create(|id| input.into_product(id)).unwrap();

        assert_eq!(repo.len(), before.len() + 1);
        assert!(!before.contains(&created.id));
        assert_eq!(repo.records().last(), Some(&created));
    }

    #[test]
    fn test_create_rejects_builder_reusing_an_id() {
        let mut repo = products();
        let existing = repo.records()[0].clone();
        let result = repo.create(|_| existing.clone());
        assert_eq!(
            result,
            Err(RepositoryError::DuplicateId {
                entity: "Produk".into(),
                id: existing.id.clone(),
            })
        );
        assert_eq!(repo.len(), seed::PRODUCTS.len());
    }

    #[test]
    fn test_update_keeps_position_and_size() {
        let mut repo = products();
        let mut second = repo.records()[1].clone();
        second.name = "Seblak Kering Pedas".into();
        repo.update(second.clone()).unwrap();

        assert_eq!(repo.len(), seed::PRODUCTS.len());
        assert_eq!(repo.records()[1], second);
    }

    #[test]
    fn test_missing_ids() {
        let mut repo = products();
        assert!(matches!(repo.fetch("P999"), Err(RepositoryError::NotFound { .. })));
        assert!(repo.delete("P999").is_err());

        let mut ghost = repo.records()[0].clone();
        ghost.id = "P999".into();
        assert!(repo.update(ghost).is_err());
        assert_eq!(repo.list(), seed::PRODUCTS.clone());
    }

    #[test]
    fn test_delete_removes_record() {
        let mut repo: InMemoryRepository<AppUser> = InMemoryRepository::new(seed::APP_USERS.clone());
        let removed = repo.delete("U002").unwrap();
        assert_eq!(removed.name, "Jane Doe");
        assert_eq!(repo.len(), 2);
        assert_eq!(repo.next_id(), "U004");
    }

    #[test]
    fn test_add_product_workflow() {
        let mut repo = products();
        let mut flow = ConfirmFlow::new();
        flow.open();

        // empty required fields: nothing staged, nothing stored
        let errors = flow.submit(ProductDraft::default().validate()).unwrap_err();
        assert!(!errors.is_empty());
        assert!(!flow.is_confirming());
        assert_eq!(repo.len(), seed::PRODUCTS.len());

        // valid submit opens confirmation without touching the set
        let draft = ProductDraft {
            merchant: "Basreng bakar by Hilni".into(),
            name: "Basreng Keju".into(),
            stock: "8".into(),
            price: "17000".into(),
            ..ProductDraft::default()
        };
        flow.submit(draft.validate()).unwrap();
        assert!(flow.is_confirming());
        assert_eq!(repo.len(), seed::PRODUCTS.len());

        // confirm appends exactly one record
        let input = flow.confirm().unwrap();
        let created = repo.create(|id| input.into_product(id)).unwrap();
        assert_eq!(repo.len(), seed::PRODUCTS.len() + 1);
        assert_eq!(created.id, "P004");
        assert!(!flow.is_form_open());
    }
}
