use crate::app::today;
use crate::shared::form_flow::FormFlow;
use contracts::domain::a007_app_user::aggregate::AppUser;
use contracts::domain::a007_app_user::form::{AppUserDraft, AppUserInput};
use contracts::shared::data::{InMemoryRepository, Repository, RepositoryError};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct AppUserDetailsViewModel {
    pub form: FormFlow<AppUserDraft, AppUserInput>,
    pub error: RwSignal<Option<String>>,
    original: StoredValue<Option<AppUser>>,
    repo: RwSignal<InMemoryRepository<AppUser>>,
}

impl AppUserDetailsViewModel {
    pub fn load(
        id: Option<String>,
        repo: RwSignal<InMemoryRepository<AppUser>>,
    ) -> Result<Self, RepositoryError> {
        let original = id
            .map(|id| repo.with_untracked(|repo| repo.fetch(&id)))
            .transpose()?;
        let draft = original
            .as_ref()
            .map(AppUserDraft::from_user)
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

    pub fn submit_command(&self) {
        self.form.submit(AppUserDraft::validate);
    }

    pub fn confirm_command(&self, on_saved: Callback<AppUser>) {
        let Some(input) = self.form.confirm() else {
            return;
        };
        let original = self.original.get_value();
        let join_date = today().format_dmy();

        let saved = self.repo.try_update(|repo| match original {
            Some(original) => {
                let user = input.apply_to(&original);
                repo.update(user.clone()).map(|()| user)
            }
            None => repo.create(|id| input.into_user(id, join_date)),
        });

        match saved {
            Some(Ok(user)) => on_saved.run(user),
            Some(Err(e)) => self.error.set(Some(e.to_string())),
            None => {}
        }
    }
}
