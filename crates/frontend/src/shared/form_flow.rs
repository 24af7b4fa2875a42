//! Reactive wrapper around `ConfirmFlow` shared by the details view models
use contracts::shared::validation::FieldErrors;
use contracts::shared::workflow::ConfirmFlow;
use leptos::prelude::*;

/// Draft, field errors and two-phase commit state of one open form
pub struct FormFlow<D: 'static, T: 'static> {
    pub draft: RwSignal<D>,
    pub errors: RwSignal<FieldErrors>,
    pub flow: RwSignal<ConfirmFlow<T>>,
}

impl<D, T> Clone for FormFlow<D, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D, T> Copy for FormFlow<D, T> {}

impl<D, T> FormFlow<D, T>
where
    D: Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    /// Open a form on `draft`
    pub fn new(draft: D) -> Self {
        let mut flow = ConfirmFlow::new();
        flow.open();
        Self {
            draft: RwSignal::new(draft),
            errors: RwSignal::new(FieldErrors::new()),
            flow: RwSignal::new(flow),
        }
    }

    pub fn edit(&self, change: impl FnOnce(&mut D)) {
        self.draft.update(change);
    }

    /// One text field of the draft (tracked)
    pub fn text(&self, get: fn(&D) -> &String) -> Signal<String> {
        let draft = self.draft;
        Signal::derive(move || draft.with(|d| get(d).clone()))
    }

    /// Message for one field (tracked)
    pub fn field_error(&self, field: impl Into<String>) -> Signal<Option<String>> {
        let errors = self.errors;
        let field = field.into();
        Signal::derive(move || errors.with(|errors| errors.get(&field).map(str::to_string)))
    }

    /// Validate the draft; valid input moves the flow to confirmation
    pub fn submit(&self, validate: impl FnOnce(&D) -> Result<T, FieldErrors>) {
        let validated = self.draft.with_untracked(validate);
        match self.flow.try_update(|flow| flow.submit(validated)) {
            Some(Ok(())) => self.errors.set(FieldErrors::new()),
            Some(Err(errors)) => {
                leptos::logging::log!("form: {} field error(s)", errors.len());
                self.errors.set(errors);
            }
            None => {}
        }
    }

    pub fn is_confirming(&self) -> bool {
        self.flow.with(|flow| flow.is_confirming())
    }

    /// Back to the form from the confirmation dialog
    pub fn cancel_confirmation(&self) {
        self.flow.update(|flow| flow.cancel_confirmation());
    }

    /// Second affirmation; `None` unless something was staged
    pub fn confirm(&self) -> Option<T> {
        self.flow.try_update(|flow| flow.confirm()).flatten()
    }
}

/// What the details modal of a list page is showing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailsTarget {
    New,
    Edit(String),
}

impl DetailsTarget {
    pub fn id(&self) -> Option<String> {
        match self {
            DetailsTarget::New => None,
            DetailsTarget::Edit(id) => Some(id.clone()),
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, DetailsTarget::Edit(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_details_target() {
        assert_eq!(DetailsTarget::New.id(), None);
        assert!(!DetailsTarget::New.is_edit());
        let edit = DetailsTarget::Edit("P002".into());
        assert_eq!(edit.id().as_deref(), Some("P002"));
        assert!(edit.is_edit());
    }
}
