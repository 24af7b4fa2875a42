use crate::app::today;
use crate::shared::form_flow::FormFlow;
use contracts::domain::a002_umkm::aggregate::{MerchantAccount, MerchantDirectory};
use contracts::domain::a003_finance::aggregate::FinanceRecord;
use contracts::domain::a003_finance::form::{DisbursementDraft, DisbursementInput};
use contracts::shared::data::{InMemoryRepository, Repository};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct DisbursementDetailsViewModel {
    pub form: FormFlow<DisbursementDraft, DisbursementInput>,
    pub error: RwSignal<Option<String>>,
    directory: StoredValue<MerchantDirectory>,
    repo: RwSignal<InMemoryRepository<FinanceRecord>>,
}

impl DisbursementDetailsViewModel {
    pub fn new(
        directory: MerchantDirectory,
        repo: RwSignal<InMemoryRepository<FinanceRecord>>,
    ) -> Self {
        Self {
            form: FormFlow::new(DisbursementDraft::default()),
            error: RwSignal::new(None),
            directory: StoredValue::new(directory),
            repo,
        }
    }

    /// Merchant names offered as suggestions
    pub fn merchant_names(&self) -> Vec<String> {
        self.directory.with_value(|d| d.keys().cloned().collect())
    }

    /// Bank details of the typed merchant (tracked)
    pub fn account(&self) -> Option<MerchantAccount> {
        let draft = self.form.draft;
        draft.with(|d| self.directory.with_value(|dir| d.autofill(dir).cloned()))
    }

    pub fn submit_command(&self) {
        let directory = self.directory;
        self.form
            .submit(|draft| directory.with_value(|dir| draft.validate(dir)));
    }

    pub fn confirm_command(&self, on_saved: Callback<FinanceRecord>) {
        let Some(input) = self.form.confirm() else {
            return;
        };
        let date = today().format_dmy();
        match self
            .repo
            .try_update(|repo| repo.create(|id| input.into_record(id, date)))
        {
            Some(Ok(record)) => {
                log::info!(
                    "finance: disbursement {} of {} to {}",
                    record.id,
                    record.disbursement,
                    record.merchant
                );
                on_saved.run(record)
            }
            Some(Err(e)) => self.error.set(Some(e.to_string())),
            None => {}
        }
    }
}
