//! Add merchant form
use serde::{Deserialize, Serialize};

use super::aggregate::Merchant;
use crate::shared::validation::FieldErrors;

pub mod fields {
    pub const NAME: &str = "name";
    pub const BANK: &str = "bank";
    pub const ACCOUNT_NUMBER: &str = "account_number";
    pub const CONTACT: &str = "contact";
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MerchantDraft {
    pub name: String,
    pub bank: String,
    pub account_number: String,
    pub contact: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MerchantInput {
    pub name: String,
    pub bank: String,
    pub account_number: String,
    pub contact: String,
}

impl MerchantDraft {
    pub fn validate(&self) -> Result<MerchantInput, FieldErrors> {
        let mut errors = FieldErrors::new();
        let input = MerchantInput {
            name: errors.require(fields::NAME, &self.name, "Nama Pengguna harus diisi."),
            bank: errors.require(fields::BANK, &self.bank, "Nama Bank harus diisi."),
            account_number: errors.require(
                fields::ACCOUNT_NUMBER,
                &self.account_number,
                "Nomor Rekening harus diisi.",
            ),
            contact: errors.require(fields::CONTACT, &self.contact, "Kontak harus diisi."),
        };
        errors.into_result(input)
    }
}

impl MerchantInput {
    /// Newly registered merchant: no products, empty balance
    pub fn into_merchant(self, id: String) -> Merchant {
        Merchant {
            id,
            name: self.name,
            total_products: 0,
            contact: self.contact,
            balance: 0.0,
            bank: self.bank,
            account_number: self.account_number,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_fields_required() {
        let errors = MerchantDraft::default().validate().unwrap_err();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get(fields::BANK), Some("Nama Bank harus diisi."));
        assert_eq!(errors.get(fields::CONTACT), Some("Kontak harus diisi."));
    }

    #[test]
    fn test_into_merchant() {
        let draft = MerchantDraft {
            name: " Keripik Mak Ijah ".into(),
            bank: "BNI".into(),
            account_number: "5550001112".into(),
            contact: "0812000111".into(),
        };
        let merchant = draft.validate().unwrap().into_merchant("C004".into());
        assert_eq!(merchant.name, "Keripik Mak Ijah");
        assert_eq!(merchant.total_products, 0);
        assert_eq!(merchant.balance, 0.0);
    }
}
