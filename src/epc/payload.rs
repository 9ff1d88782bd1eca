use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::iban;

/// Beneficiary names longer than this are truncated, per the EPC spec.
const MAX_NAME_LEN: usize = 70;

/// Parameters of a SEPA Credit Transfer, serializable to the EPC QR
/// text payload.
///
/// Construction is builder-style (cf. the optional reference lines) and
/// infallible — this type is a formatter, not a validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpcPayment {
    /// Beneficiary bank BIC.
    pub bic: String,
    /// Beneficiary name (truncated to 70 characters when serialized).
    pub beneficiary_name: String,
    /// Beneficiary IBAN, normalized when serialized.
    pub iban: String,
    /// Amount in euro; serialized as `EUR` plus fixed 2-decimal point.
    pub amount: Decimal,
    /// Structured creditor reference (e.g. an OGM), if any.
    pub reference: Option<String>,
    /// Unstructured remittance text, if any.
    pub unstructured: Option<String>,
}

impl EpcPayment {
    /// Start a payment with the four mandatory fields.
    pub fn new(
        bic: impl Into<String>,
        beneficiary_name: impl Into<String>,
        iban: impl Into<String>,
        amount: Decimal,
    ) -> Self {
        Self {
            bic: bic.into(),
            beneficiary_name: beneficiary_name.into(),
            iban: iban.into(),
            amount,
            reference: None,
            unstructured: None,
        }
    }

    /// Set the structured creditor reference line.
    pub fn reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    /// Set the unstructured remittance line.
    pub fn unstructured(mut self, text: impl Into<String>) -> Self {
        self.unstructured = Some(text.into());
        self
    }

    /// Serialize to the 11-line EPC QR text payload.
    ///
    /// Line positions are semantically fixed; absent optionals serialize
    /// as empty lines, never as omitted ones. The amount line uses the
    /// machine format mandated by the EPC spec: `.` decimal separator,
    /// exactly 2 decimals, no grouping — independent of any user-facing
    /// locale formatting.
    pub fn build_payload(&self) -> String {
        let name: String = self.beneficiary_name.chars().take(MAX_NAME_LEN).collect();
        let amount = self
            .amount
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        [
            "BCD",
            "002",
            "1",
            "SCT",
            &iban::normalize(&self.bic),
            &name,
            &iban::normalize(&self.iban),
            &format!("EUR{amount:.2}"),
            "",
            self.reference.as_deref().unwrap_or(""),
            self.unstructured.as_deref().unwrap_or(""),
        ]
        .join("\n")
    }
}
