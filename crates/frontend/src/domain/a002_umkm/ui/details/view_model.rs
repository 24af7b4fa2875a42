use crate::shared::form_flow::FormFlow;
use contracts::domain::a002_umkm::aggregate::Merchant;
use contracts::domain::a002_umkm::form::{MerchantDraft, MerchantInput};
use contracts::shared::data::{InMemoryRepository, Repository};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct MerchantDetailsViewModel {
    pub form: FormFlow<MerchantDraft, MerchantInput>,
    pub error: RwSignal<Option<String>>,
    repo: RwSignal<InMemoryRepository<Merchant>>,
}

impl MerchantDetailsViewModel {
    pub fn new(repo: RwSignal<InMemoryRepository<Merchant>>) -> Self {
        Self {
            form: FormFlow::new(MerchantDraft::default()),
            error: RwSignal::new(None),
            repo,
        }
    }

    pub fn submit_command(&self) {
        self.form.submit(MerchantDraft::validate);
    }

    pub fn confirm_command(&self, on_saved: Callback<Merchant>) {
        let Some(input) = self.form.confirm() else {
            return;
        };
        match self
            .repo
            .try_update(|repo| repo.create(|id| input.into_merchant(id)))
        {
            Some(Ok(merchant)) => on_saved.run(merchant),
            Some(Err(e)) => self.error.set(Some(e.to_string())),
            None => {}
        }
    }
}
