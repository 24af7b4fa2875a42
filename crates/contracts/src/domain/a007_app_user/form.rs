//! Add/edit app user form
use serde::{Deserialize, Serialize};

use super::aggregate::{AppUser, AVATAR_BASE_URL};
use crate::shared::validation::{looks_like_email, FieldErrors};

pub mod fields {
    pub const NAME: &str = "name";
    pub const EMAIL: &str = "email";
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppUserDraft {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppUserInput {
    pub name: String,
    pub email: String,
}

impl AppUserDraft {
    pub fn from_user(user: &AppUser) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }

    pub fn validate(&self) -> Result<AppUserInput, FieldErrors> {
        let mut errors = FieldErrors::new();
        let name = errors.require(fields::NAME, &self.name, "Nama Pengguna harus diisi.");
        let email = errors.require(fields::EMAIL, &self.email, "Email harus diisi.");
        if !email.is_empty() && !looks_like_email(&email) {
            errors.add(fields::EMAIL, "Format email tidak valid.");
        }
        errors.into_result(AppUserInput { name, email })
    }
}

impl AppUserInput {
    /// New user joining on `join_date` (DD/MM/YYYY)
    pub fn into_user(self, id: String, join_date: String) -> AppUser {
        AppUser {
            avatar: format!("{AVATAR_BASE_URL}{id}"),
            id,
            name: self.name,
            email: self.email,
            total_orders: 0,
            join_date,
        }
    }

    /// Only name and email are editable
    pub fn apply_to(self, original: &AppUser) -> AppUser {
        AppUser {
            name: self.name,
            email: self.email,
            ..original.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_rules() {
        let missing = AppUserDraft {
            name: "Jane".into(),
            email: " ".into(),
        };
        assert_eq!(
            missing.validate().unwrap_err().get(fields::EMAIL),
            Some("Email harus diisi.")
        );

        let malformed = AppUserDraft {
            name: "Jane".into(),
            email: "jane@example".into(),
        };
        assert_eq!(
            malformed.validate().unwrap_err().get(fields::EMAIL),
            Some("Format email tidak valid.")
        );
    }

    #[test]
    fn test_email_accepts_loose_shapes() {
        for email in ["a@b.c.", "Jane jane@doe.com", "a@b..", "x@y.z extra"] {
            let draft = AppUserDraft {
                name: "Jane".into(),
                email: email.into(),
            };
            let input = draft.validate();
            assert!(input.is_ok(), "{email} should be accepted");
            assert_eq!(input.unwrap().email, email);
        }
    }

    #[test]
    fn test_into_user() {
        let draft = AppUserDraft {
            name: "Siti".into(),
            email: "siti@umkm.id".into(),
        };
        let user = draft.validate().unwrap().into_user("U004".into(), "19/10/2026".into());
        assert_eq!(user.avatar, "https://i.pravatar.cc/40?u=U004");
        assert_eq!(user.total_orders, 0);
    }

    #[test]
    fn test_edit_keeps_other_fields() {
        let original = AppUser {
            id: "U002".into(),
            name: "Jane Doe".into(),
            avatar: "https://i.pravatar.cc/40?u=a042581f4e29026705d".into(),
            email: "jane.d@example.com".into(),
            total_orders: 2,
            join_date: "15/11/2025".into(),
        };
        let mut draft = AppUserDraft::from_user(&original);
        draft.email = "jane@umkm.id".into();
        let edited = draft.validate().unwrap().apply_to(&original);
        assert_eq!(edited.id, "U002");
        assert_eq!(edited.total_orders, 2);
        assert_eq!(edited.email, "jane@umkm.id");
    }
}
