use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::pricing::factors::ComplexityFactor;
use crate::types::{Money, Rate};
use crate::{FeeQuoteError, FeeQuoteResult};

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Legal entity type, the sole determinant of the base monthly fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntityType {
    SoleProprietor,
    Partnership,
    CloseCorporation,
    PrivateCompany,
    PublicCompany,
    Trust,
    NPO,
    Other,
}

/// Annual revenue band, ordered lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RevenueBand {
    #[serde(rename = "0-100k")]
    UpTo100k,
    #[serde(rename = "100k-500k")]
    From100kTo500k,
    #[serde(rename = "500k-2M")]
    From500kTo2m,
    #[serde(rename = "2M-5M")]
    From2mTo5m,
    #[serde(rename = "5M-20M")]
    From5mTo20m,
    #[serde(rename = "over20M")]
    Over20m,
}

/// Employee headcount band. Payroll cost is flat per band, not per head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EmployeeBand {
    #[serde(rename = "1-5")]
    OneToFive,
    #[serde(rename = "6-20")]
    SixToTwenty,
    #[serde(rename = "21-50")]
    TwentyOneToFifty,
    #[serde(rename = "51-100")]
    FiftyOneToHundred,
    #[serde(rename = "over100")]
    OverHundred,
}

// ---------------------------------------------------------------------------
// Rate card
// ---------------------------------------------------------------------------

/// Base fee and included service package for one entity type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityPricing {
    pub base_price: Money,
    pub services: Vec<String>,
    pub description: String,
}

/// One named industry and its fee multiplier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndustryModifier {
    pub industry: String,
    pub modifier: Rate,
}

/// The complete pricing table set.
///
/// Treated as read-only once constructed; the calculator takes it by shared
/// reference, so one card can serve any number of concurrent callers. Cards
/// loaded from external files must pass [`RateCard::validate`] before use.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateCard {
    pub base_prices: BTreeMap<EntityType, EntityPricing>,
    pub revenue_modifiers: BTreeMap<RevenueBand, Rate>,
    pub payroll_costs: BTreeMap<EmployeeBand, Money>,
    pub factor_multipliers: BTreeMap<ComplexityFactor, Rate>,
    pub industry_modifiers: Vec<IndustryModifier>,
    pub minimum_quote: Money,
}

impl Default for RateCard {
    fn default() -> Self {
        RateCard::standard()
    }
}

fn entity_pricing(base_price: Money, description: &str, services: &[&str]) -> EntityPricing {
    EntityPricing {
        base_price,
        services: services.iter().map(|s| s.to_string()).collect(),
        description: description.to_string(),
    }
}

impl RateCard {
    /// The firm's published rate card.
    pub fn standard() -> Self {
        let base_prices = BTreeMap::from([
            (
                EntityType::SoleProprietor,
                entity_pricing(
                    dec!(800),
                    "Essential compliance for owner-managed businesses",
                    &[
                        "Monthly bookkeeping",
                        "Annual financial statements",
                        "Personal income tax return",
                    ],
                ),
            ),
            (
                EntityType::Partnership,
                entity_pricing(
                    dec!(1200),
                    "Compliance and profit-sharing support for partnerships",
                    &[
                        "Monthly bookkeeping",
                        "Annual financial statements",
                        "Partnership income allocation",
                        "Partner tax returns",
                    ],
                ),
            ),
            (
                EntityType::CloseCorporation,
                entity_pricing(
                    dec!(1500),
                    "Statutory accounting for close corporations",
                    &[
                        "Monthly bookkeeping",
                        "Annual financial statements",
                        "CIPC annual return",
                        "Corporate income tax return",
                    ],
                ),
            ),
            (
                EntityType::PrivateCompany,
                entity_pricing(
                    dec!(2500),
                    "Full statutory accounting for private companies",
                    &[
                        "Monthly bookkeeping",
                        "Annual financial statements",
                        "CIPC annual return",
                        "Corporate income tax return",
                        "Provisional tax submissions",
                    ],
                ),
            ),
            (
                EntityType::PublicCompany,
                entity_pricing(
                    dec!(5000),
                    "Reporting and compliance for listed and public entities",
                    &[
                        "Monthly management accounts",
                        "Annual financial statements",
                        "Listed-entity reporting support",
                        "Corporate income tax return",
                        "Provisional tax submissions",
                    ],
                ),
            ),
            (
                EntityType::Trust,
                entity_pricing(
                    dec!(1800),
                    "Fiduciary accounting and trust tax compliance",
                    &[
                        "Trust bookkeeping",
                        "Annual financial statements",
                        "Trust income tax return",
                        "Beneficiary distribution statements",
                    ],
                ),
            ),
            (
                EntityType::NPO,
                entity_pricing(
                    dec!(1000),
                    "Affordable compliance for non-profit organisations",
                    &[
                        "Monthly bookkeeping",
                        "Annual financial statements",
                        "NPO annual report",
                        "Tax exemption maintenance",
                    ],
                ),
            ),
            (
                EntityType::Other,
                entity_pricing(
                    dec!(1500),
                    "General accounting support for other entity forms",
                    &[
                        "Monthly bookkeeping",
                        "Annual financial statements",
                        "Income tax returns",
                    ],
                ),
            ),
        ]);

        let revenue_modifiers = BTreeMap::from([
            (RevenueBand::UpTo100k, dec!(0.8)),
            (RevenueBand::From100kTo500k, dec!(1.0)),
            (RevenueBand::From500kTo2m, dec!(1.2)),
            (RevenueBand::From2mTo5m, dec!(1.5)),
            (RevenueBand::From5mTo20m, dec!(1.9)),
            (RevenueBand::Over20m, dec!(2.5)),
        ]);

        let payroll_costs = BTreeMap::from([
            (EmployeeBand::OneToFive, dec!(300)),
            (EmployeeBand::SixToTwenty, dec!(800)),
            (EmployeeBand::TwentyOneToFifty, dec!(1500)),
            (EmployeeBand::FiftyOneToHundred, dec!(2500)),
            (EmployeeBand::OverHundred, dec!(4000)),
        ]);

        let factor_multipliers = BTreeMap::from([
            (ComplexityFactor::PayrollManagement, dec!(1.15)),
            (ComplexityFactor::InventoryManagement, dec!(1.20)),
            (ComplexityFactor::ForeignCurrencyTransactions, dec!(1.25)),
            (ComplexityFactor::CorporateCompliance, dec!(1.10)),
            (ComplexityFactor::AuditRequirements, dec!(1.30)),
            (ComplexityFactor::ComplexTaxStructure, dec!(1.20)),
            (ComplexityFactor::ExtensiveRegulatoryReporting, dec!(1.15)),
        ]);

        let industry_modifiers = [
            ("Agriculture", dec!(0.95)),
            ("Construction", dec!(1.15)),
            ("Education", dec!(0.95)),
            ("Financial Services", dec!(1.25)),
            ("Healthcare", dec!(1.10)),
            ("Hospitality", dec!(1.05)),
            ("Information Technology", dec!(1.05)),
            ("Legal Services", dec!(1.20)),
            ("Manufacturing", dec!(1.15)),
            ("Mining", dec!(1.25)),
            ("Non-Profit", dec!(0.90)),
            ("Professional Services", dec!(1.10)),
            ("Real Estate", dec!(1.15)),
            ("Retail", dec!(1.10)),
            ("Telecommunications", dec!(1.15)),
            ("Tourism", dec!(1.05)),
            ("Transport and Logistics", dec!(1.10)),
            ("Wholesale Trade", dec!(1.05)),
            ("Other", dec!(1.00)),
        ]
        .iter()
        .map(|(industry, modifier)| IndustryModifier {
            industry: industry.to_string(),
            modifier: *modifier,
        })
        .collect();

        RateCard {
            base_prices,
            revenue_modifiers,
            payroll_costs,
            factor_multipliers,
            industry_modifiers,
            minimum_quote: dec!(500),
        }
    }

    /// Structural validation for externally loaded cards.
    ///
    /// Revenue modifiers must be non-decreasing in band order so that a
    /// higher revenue band can never lower a quote.
    pub fn validate(&self) -> FeeQuoteResult<()> {
        if self.minimum_quote < Decimal::ZERO {
            return Err(FeeQuoteError::InvalidRateCard {
                field: "minimum_quote".to_string(),
                reason: "Minimum quote must be non-negative".to_string(),
            });
        }

        for (entity_type, pricing) in &self.base_prices {
            if pricing.base_price < Decimal::ZERO {
                return Err(FeeQuoteError::InvalidRateCard {
                    field: "base_prices".to_string(),
                    reason: format!("Base price for {:?} must be non-negative", entity_type),
                });
            }
        }

        let mut previous: Option<(RevenueBand, Rate)> = None;
        for (band, modifier) in &self.revenue_modifiers {
            if *modifier <= Decimal::ZERO {
                return Err(FeeQuoteError::InvalidRateCard {
                    field: "revenue_modifiers".to_string(),
                    reason: format!("Modifier for {:?} must be positive", band),
                });
            }
            if let Some((prev_band, prev_modifier)) = previous {
                if *modifier < prev_modifier {
                    return Err(FeeQuoteError::InvalidRateCard {
                        field: "revenue_modifiers".to_string(),
                        reason: format!(
                            "Modifier for {:?} is lower than the one for {:?}",
                            band, prev_band
                        ),
                    });
                }
            }
            previous = Some((*band, *modifier));
        }

        for (band, cost) in &self.payroll_costs {
            if *cost < Decimal::ZERO {
                return Err(FeeQuoteError::InvalidRateCard {
                    field: "payroll_costs".to_string(),
                    reason: format!("Payroll cost for {:?} must be non-negative", band),
                });
            }
        }

        for (factor, multiplier) in &self.factor_multipliers {
            if *multiplier <= Decimal::ZERO {
                return Err(FeeQuoteError::InvalidRateCard {
                    field: "factor_multipliers".to_string(),
                    reason: format!("Multiplier for '{}' must be positive", factor),
                });
            }
        }

        for entry in &self.industry_modifiers {
            if entry.modifier <= Decimal::ZERO {
                return Err(FeeQuoteError::InvalidRateCard {
                    field: "industry_modifiers".to_string(),
                    reason: format!("Modifier for '{}' must be positive", entry.industry),
                });
            }
        }

        Ok(())
    }

    // -- Lookups --------------------------------------------------------------

    pub fn entity_pricing(&self, entity_type: EntityType) -> FeeQuoteResult<&EntityPricing> {
        self.base_prices
            .get(&entity_type)
            .ok_or_else(|| FeeQuoteError::UnknownEntityType {
                entity_type: format!("{:?}", entity_type),
            })
    }

    /// Unrecognized bands fall back to a neutral 1.0.
    pub fn revenue_modifier(&self, band: RevenueBand) -> Rate {
        self.revenue_modifiers
            .get(&band)
            .copied()
            .unwrap_or(Decimal::ONE)
    }

    /// Unpriced bands fall back to zero.
    pub fn payroll_cost(&self, band: EmployeeBand) -> Money {
        self.payroll_costs
            .get(&band)
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    /// Factors missing from the card contribute a neutral 1.0.
    pub fn factor_multiplier(&self, factor: ComplexityFactor) -> Rate {
        self.factor_multipliers
            .get(&factor)
            .copied()
            .unwrap_or(Decimal::ONE)
    }

    /// Trimmed, case-insensitive match against the card's industry names.
    pub fn industry_entry(&self, industry: &str) -> Option<&IndustryModifier> {
        let wanted = industry.trim();
        self.industry_modifiers
            .iter()
            .find(|entry| entry.industry.eq_ignore_ascii_case(wanted))
    }

    /// Unrecognized industries are neutral.
    pub fn industry_modifier(&self, industry: &str) -> Rate {
        self.industry_entry(industry)
            .map(|entry| entry.modifier)
            .unwrap_or(Decimal::ONE)
    }
}
