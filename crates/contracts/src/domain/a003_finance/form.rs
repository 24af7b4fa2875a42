//! Manual disbursement form
use serde::{Deserialize, Serialize};

use super::aggregate::{DisbursementStatus, FinanceRecord};
use crate::domain::a002_umkm::aggregate::{MerchantAccount, MerchantDirectory};
use crate::shared::validation::{digits_only, parse_positive_amount, FieldErrors};

pub mod fields {
    pub const MERCHANT: &str = "merchant";
    pub const NOMINAL: &str = "nominal";
    pub const TRANSFER_REFERENCE: &str = "transfer_reference";
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisbursementDraft {
    pub merchant: String,
    pub nominal: String,
    pub transfer_reference: String,
}

/// Staged disbursement, bank fields filled from the merchant directory
#[derive(Debug, Clone, PartialEq)]
pub struct DisbursementInput {
    pub merchant: String,
    pub balance: f64,
    pub disbursement: f64,
    pub bank: String,
    pub account_number: String,
    pub transfer_reference: String,
}

impl DisbursementDraft {
    /// Directory entry for the typed merchant name (exact match)
    pub fn autofill<'a>(&self, directory: &'a MerchantDirectory) -> Option<&'a MerchantAccount> {
        directory.get(self.merchant.trim())
    }

    pub fn validate(&self, directory: &MerchantDirectory) -> Result<DisbursementInput, FieldErrors> {
        let mut errors = FieldErrors::new();

        let account = self.autofill(directory);
        if self.merchant.trim().is_empty() {
            errors.add(fields::MERCHANT, "User harus diisi.");
        } else if account.is_none() {
            errors.add(fields::MERCHANT, "Pilih pengguna yang valid.");
        }

        let amount = parse_positive_amount(&digits_only(&self.nominal));
        if amount.is_none() {
            errors.add(fields::NOMINAL, "Nominal pencairan harus angka yang valid.");
        }

        let transfer_reference = errors.require(
            fields::TRANSFER_REFERENCE,
            &self.transfer_reference,
            "Bukti transfer harus diisi.",
        );

        match (account, amount) {
            (Some(account), Some(disbursement)) => errors.into_result(DisbursementInput {
                merchant: self.merchant.trim().to_string(),
                balance: account.total_income,
                disbursement,
                bank: account.bank.clone(),
                account_number: account.account_number.clone(),
                transfer_reference,
            }),
            _ => Err(errors),
        }
    }
}

impl DisbursementInput {
    /// Approved record dated `date` (DD/MM/YYYY)
    pub fn into_record(self, id: String, date: String) -> FinanceRecord {
        FinanceRecord {
            id,
            merchant: self.merchant,
            total_products: 0,
            balance: self.balance,
            disbursement: self.disbursement,
            bank: self.bank,
            account_number: self.account_number,
            date,
            status: DisbursementStatus::Approved,
            transfer_reference: Some(self.transfer_reference),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> MerchantDirectory {
        let mut directory = MerchantDirectory::new();
        directory.insert(
            "Kopi Senja Abadi".into(),
            MerchantAccount {
                bank: "BRI".into(),
                account_number: "1234567890".into(),
                total_income: 750000.0,
            },
        );
        directory
    }

    #[test]
    fn test_autofill() {
        let draft = DisbursementDraft {
            merchant: "Kopi Senja Abadi".into(),
            ..Default::default()
        };
        assert_eq!(draft.autofill(&directory()).unwrap().bank, "BRI");

        let unknown = DisbursementDraft {
            merchant: "Kopi".into(),
            ..Default::default()
        };
        assert!(unknown.autofill(&directory()).is_none());
    }

    #[test]
    fn test_nominal_strips_non_digits() {
        let draft = DisbursementDraft {
            merchant: "Kopi Senja Abadi".into(),
            nominal: "Rp 250.000".into(),
            transfer_reference: "TRX-01".into(),
        };
        let input = draft.validate(&directory()).unwrap();
        assert_eq!(input.disbursement, 250000.0);
        assert_eq!(input.balance, 750000.0);
        assert_eq!(input.account_number, "1234567890");

        let record = input.into_record("B011".into(), "25/07/2024".into());
        assert_eq!(record.status, DisbursementStatus::Approved);
        assert_eq!(record.transfer_reference.as_deref(), Some("TRX-01"));
    }

    #[test]
    fn test_disbursement_over_balance_is_accepted() {
        let draft = DisbursementDraft {
            merchant: "Kopi Senja Abadi".into(),
            nominal: "9000000".into(),
            transfer_reference: "TRX-02".into(),
        };
        assert!(draft.validate(&directory()).is_ok());
    }

    #[test]
    fn test_rejections() {
        let errors = DisbursementDraft::default().validate(&directory()).unwrap_err();
        assert!(errors.contains(fields::MERCHANT));
        assert!(errors.contains(fields::NOMINAL));
        assert!(errors.contains(fields::TRANSFER_REFERENCE));

        let unknown = DisbursementDraft {
            merchant: "Toko Lain".into(),
            nominal: "abc".into(),
            transfer_reference: "x".into(),
        };
        let errors = unknown.validate(&directory()).unwrap_err();
        assert_eq!(errors.get(fields::MERCHANT), Some("Pilih pengguna yang valid."));
        assert!(errors.contains(fields::NOMINAL));
    }
}
