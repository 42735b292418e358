use serde::{Deserialize, Serialize};
use std::fmt;

/// A business attribute that multiplicatively increases the quoted fee.
///
/// Factors are evaluated in declaration order; that order fixes how they
/// appear in the quote's factor list and how their service additions are
/// appended to the service list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ComplexityFactor {
    #[serde(rename = "Payroll Management")]
    PayrollManagement,
    #[serde(rename = "Inventory Management")]
    InventoryManagement,
    #[serde(rename = "Foreign Currency Transactions")]
    ForeignCurrencyTransactions,
    #[serde(rename = "Corporate Compliance")]
    CorporateCompliance,
    #[serde(rename = "Audit Requirements")]
    AuditRequirements,
    #[serde(rename = "Complex Tax Structure")]
    ComplexTaxStructure,
    #[serde(rename = "Extensive Regulatory Reporting")]
    ExtensiveRegulatoryReporting,
}

impl ComplexityFactor {
    pub const ALL: [ComplexityFactor; 7] = [
        ComplexityFactor::PayrollManagement,
        ComplexityFactor::InventoryManagement,
        ComplexityFactor::ForeignCurrencyTransactions,
        ComplexityFactor::CorporateCompliance,
        ComplexityFactor::AuditRequirements,
        ComplexityFactor::ComplexTaxStructure,
        ComplexityFactor::ExtensiveRegulatoryReporting,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            ComplexityFactor::PayrollManagement => "Payroll Management",
            ComplexityFactor::InventoryManagement => "Inventory Management",
            ComplexityFactor::ForeignCurrencyTransactions => "Foreign Currency Transactions",
            ComplexityFactor::CorporateCompliance => "Corporate Compliance",
            ComplexityFactor::AuditRequirements => "Audit Requirements",
            ComplexityFactor::ComplexTaxStructure => "Complex Tax Structure",
            ComplexityFactor::ExtensiveRegulatoryReporting => "Extensive Regulatory Reporting",
        }
    }

    /// Services added to the quote's service list when this factor triggers.
    pub fn service_additions(&self) -> &'static [&'static str] {
        match self {
            ComplexityFactor::PayrollManagement => &[
                "Monthly payroll processing",
                "PAYE, UIF and SDL submissions",
            ],
            ComplexityFactor::InventoryManagement => &[
                "Stock valuation and management",
                "Cost of goods sold calculations",
            ],
            ComplexityFactor::ForeignCurrencyTransactions => &[
                "Foreign exchange gain and loss accounting",
                "Multi-currency account reconciliation",
            ],
            ComplexityFactor::CorporateCompliance => &["Company secretarial maintenance"],
            ComplexityFactor::AuditRequirements => &["Audit file preparation and auditor liaison"],
            ComplexityFactor::ComplexTaxStructure => &["Advanced tax planning and structuring"],
            ComplexityFactor::ExtensiveRegulatoryReporting => {
                &["Regulatory return preparation and submission"]
            }
        }
    }
}

impl fmt::Display for ComplexityFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
