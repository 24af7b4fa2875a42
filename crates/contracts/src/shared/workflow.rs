//! Two-phase commit used by every add/edit/destructive flow
//!
//! Phase 1 is data entry; phase 2 is an explicit confirmation holding the validated
//! record. Only `confirm` hands the staged value to the caller.

/// Stage of a confirmation flow
#[derive(Debug, Clone, PartialEq)]
pub enum FlowStage<T> {
    /// Form not shown
    Closed,
    /// Form open, nothing staged
    Editing,
    /// Validated value waiting for the second affirmation
    Confirming(T),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmFlow<T> {
    stage: FlowStage<T>,
}

impl<T> Default for ConfirmFlow<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ConfirmFlow<T> {
    pub fn new() -> Self {
        Self {
            stage: FlowStage::Closed,
        }
    }

    pub fn stage(&self) -> &FlowStage<T> {
        &self.stage
    }

    /// Form visible (editing or confirming on top of it)
    pub fn is_form_open(&self) -> bool {
        !matches!(self.stage, FlowStage::Closed)
    }

    pub fn is_confirming(&self) -> bool {
        matches!(self.stage, FlowStage::Confirming(_))
    }

    pub fn staged(&self) -> Option<&T> {
        match &self.stage {
            FlowStage::Confirming(value) => Some(value),
            _ => None,
        }
    }

    pub fn open(&mut self) {
        self.stage = FlowStage::Editing;
    }

    /// Move to confirmation with a validated value. A failed validation keeps the
    /// flow in editing and returns the error to the caller.
    pub fn submit<E>(&mut self, validated: Result<T, E>) -> Result<(), E> {
        if !self.is_form_open() {
            log::warn!("submit on a closed flow ignored");
            return Ok(());
        }
        let value = validated?;
        self.stage = FlowStage::Confirming(value);
        Ok(())
    }

    /// Back to the still-open form; the staged value is discarded
    pub fn cancel_confirmation(&mut self) {
        if self.is_confirming() {
            self.stage = FlowStage::Editing;
        }
    }

    /// Second affirmation: releases the staged value and closes the flow
    pub fn confirm(&mut self) -> Option<T> {
        match std::mem::replace(&mut self.stage, FlowStage::Closed) {
            FlowStage::Confirming(value) => Some(value),
            other => {
                self.stage = other;
                None
            }
        }
    }

    pub fn close(&mut self) {
        self.stage = FlowStage::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_cycle() {
        let mut flow: ConfirmFlow<u32> = ConfirmFlow::new();
        assert!(!flow.is_form_open());

        flow.open();
        assert_eq!(flow.stage(), &FlowStage::Editing);

        flow.submit::<()>(Ok(5)).unwrap();
        assert!(flow.is_confirming());
        assert_eq!(flow.staged(), Some(&5));

        assert_eq!(flow.confirm(), Some(5));
        assert_eq!(flow.stage(), &FlowStage::Closed);
    }

    #[test]
    fn test_failed_submit_stays_editing() {
        let mut flow: ConfirmFlow<u32> = ConfirmFlow::new();
        flow.open();
        assert_eq!(flow.submit(Err("invalid")), Err("invalid"));
        assert_eq!(flow.stage(), &FlowStage::Editing);
        assert_eq!(flow.confirm(), None);
        assert_eq!(flow.stage(), &FlowStage::Editing);
    }

    #[test]
    fn test_cancel_returns_to_form() {
        let mut flow: ConfirmFlow<u32> = ConfirmFlow::new();
        flow.open();
        flow.submit::<()>(Ok(1)).unwrap();
        flow.cancel_confirmation();
        assert_eq!(flow.stage(), &FlowStage::Editing);
        assert_eq!(flow.staged(), None);
    }

    #[test]
    fn test_submit_on_closed_flow_is_ignored() {
        let mut flow: ConfirmFlow<u32> = ConfirmFlow::new();
        flow.submit::<()>(Ok(1)).unwrap();
        assert_eq!(flow.stage(), &FlowStage::Closed);
    }

    #[test]
    fn test_close_discards_everything() {
        let mut flow: ConfirmFlow<u32> = ConfirmFlow::new();
        flow.open();
        flow.submit::<()>(Ok(1)).unwrap();
        flow.close();
        assert!(!flow.is_form_open());
        assert_eq!(flow.confirm(), None);
    }
}
