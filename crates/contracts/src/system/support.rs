use serde::{Deserialize, Serialize};

use crate::shared::search::Searchable;
use crate::shared::validation::{looks_like_email, FieldErrors};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

/// The FAQ search only looks at questions
impl Searchable for FaqEntry {
    fn search_fields(&self) -> Vec<String> {
        vec![self.question.clone()]
    }
}

pub mod fields {
    pub const NAME: &str = "name";
    pub const EMAIL: &str = "email";
    pub const MESSAGE: &str = "message";
}

/// "Hubungi Dukungan" form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupportMessageDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SupportMessage {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
}

impl SupportMessageDraft {
    pub fn validate(&self) -> Result<SupportMessage, FieldErrors> {
        let mut errors = FieldErrors::new();
        let name = errors.require(fields::NAME, &self.name, "Nama harus diisi.");
        let email = errors.require(fields::EMAIL, &self.email, "Email harus diisi.");
        if !email.is_empty() && !looks_like_email(&email) {
            errors.add(fields::EMAIL, "Format email tidak valid.");
        }
        let message = errors.require(fields::MESSAGE, &self.message, "Pesan harus diisi.");
        let subject = self.subject.trim();
        errors.into_result(SupportMessage {
            name,
            email,
            subject: (!subject.is_empty()).then(|| subject.to_string()),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::seed;
    use crate::shared::search::filter_list;

    #[test]
    fn test_faq_search_matches_questions_only() {
        let found = filter_list(&seed::FAQS, "keuangan");
        assert_eq!(found.len(), 1);
        assert!(found[0].question.contains("keuangan"));

        // "Tambah Produk Baru" only appears in an answer
        assert!(filter_list(&seed::FAQS, "Tambah Produk Baru").is_empty());
    }

    #[test]
    fn test_support_form() {
        let errors = SupportMessageDraft::default().validate().unwrap_err();
        assert!(errors.contains(fields::NAME));
        assert!(errors.contains(fields::EMAIL));
        assert!(errors.contains(fields::MESSAGE));

        let draft = SupportMessageDraft {
            name: "Thomas".into(),
            email: "thomas@umkm.id".into(),
            subject: " ".into(),
            message: "Halo".into(),
        };
        let message = draft.validate().unwrap();
        assert_eq!(message.subject, None);
    }
}
