use crate::shared::form_flow::FormFlow;
use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a001_product::form::{ProductDraft, ProductInput, VariationColumn};
use contracts::shared::data::{InMemoryRepository, Repository, RepositoryError};
use leptos::prelude::*;

/// ViewModel for the add/edit product form
#[derive(Clone, Copy)]
pub struct ProductDetailsViewModel {
    pub form: FormFlow<ProductDraft, ProductInput>,
    /// Repository failure on save
    pub error: RwSignal<Option<String>>,
    original: StoredValue<Option<Product>>,
    repo: RwSignal<InMemoryRepository<Product>>,
}

impl ProductDetailsViewModel {
    /// Blank form for `None`, otherwise pre-populated from the stored product
    pub fn load(
        id: Option<String>,
        repo: RwSignal<InMemoryRepository<Product>>,
    ) -> Result<Self, RepositoryError> {
        let original = match id {
            Some(id) => Some(repo.with_untracked(|repo| repo.fetch(&id))?),
            None => None,
        };
        let draft = original
            .as_ref()
            .map(ProductDraft::from_product)
            .unwrap_or_default();

        Ok(Self {
            form: FormFlow::new(draft),
            error: RwSignal::new(None),
            original: StoredValue::new(original),
            repo,
        })
    }

    pub fn is_edit_mode(&self) -> bool {
        self.original.with_value(Option::is_some)
    }

    pub fn add_variation(&self) {
        self.form.edit(ProductDraft::add_variation);
    }

    pub fn remove_variation(&self, index: usize) {
        self.form.edit(|draft| draft.remove_variation(index));
    }

    pub fn update_variation(&self, index: usize, column: VariationColumn, value: String) {
        self.form
            .edit(|draft| draft.update_variation(index, column, value));
    }

    /// Phase 1: validate and stage
    pub fn submit_command(&self) {
        self.form.submit(ProductDraft::validate);
    }

    /// Phase 2: write the staged product and hand it to the page
    pub fn confirm_command(&self, on_saved: Callback<Product>) {
        let Some(input) = self.form.confirm() else {
            return;
        };
        let original = self.original.get_value();

        let saved = self.repo.try_update(|repo| match original {
            Some(original) => {
                let product = input.apply_to(&original);
                repo.update(product.clone()).map(|()| product)
            }
            None => repo.create(|id| input.into_product(id)),
        });

        match saved {
            Some(Ok(product)) => on_saved.run(product),
            Some(Err(e)) => self.error.set(Some(e.to_string())),
            None => {}
        }
    }
}
