use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::pricing::factors::ComplexityFactor;
use crate::pricing::rate_card::{EmployeeBand, EntityType, RateCard, RevenueBand};
use crate::types::{Money, Rate};
use crate::FeeQuoteResult;

// ---------------------------------------------------------------------------
// Input types
// ---------------------------------------------------------------------------

/// How involved the company's tax affairs are.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaxComplexity {
    #[default]
    Simple,
    Moderate,
    Complex,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuditRequirement {
    Required,
    Voluntary,
    #[default]
    NotRequired,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegulatoryReporting {
    #[default]
    Minimal,
    Standard,
    Extensive,
}

/// Compliance attributes that only exist for private companies.
///
/// Every field defaults to its non-triggering value, so a submission that
/// omits one simply doesn't trigger the matching complexity factor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComplianceProfile {
    pub tax_complexity: TaxComplexity,
    pub audit_requirements: AuditRequirement,
    pub regulatory_reporting: RegulatoryReporting,
}

/// Legal form of the business. Only the `PrivateCompany` variant carries
/// compliance attributes, so entity type and compliance fields cannot get
/// out of step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "entityType")]
pub enum EntityKind {
    SoleProprietor,
    Partnership,
    CloseCorporation,
    PrivateCompany(ComplianceProfile),
    PublicCompany,
    Trust,
    NPO,
    Other,
}

impl EntityKind {
    pub fn entity_type(&self) -> EntityType {
        match self {
            EntityKind::SoleProprietor => EntityType::SoleProprietor,
            EntityKind::Partnership => EntityType::Partnership,
            EntityKind::CloseCorporation => EntityType::CloseCorporation,
            EntityKind::PrivateCompany(_) => EntityType::PrivateCompany,
            EntityKind::PublicCompany => EntityType::PublicCompany,
            EntityKind::Trust => EntityType::Trust,
            EntityKind::NPO => EntityType::NPO,
            EntityKind::Other => EntityType::Other,
        }
    }
}

/// A validated business profile, as produced by the submission form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessProfile {
    #[serde(flatten)]
    pub entity: EntityKind,
    pub annual_revenue_band: RevenueBand,
    #[serde(default)]
    pub industry: String,
    pub has_employees: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_count_band: Option<EmployeeBand>,
    pub manages_stock: bool,
    pub deals_foreign_currency: bool,
}

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// Itemized deltas between the successive pricing stages. Each delta is
/// rounded from the full-precision intermediates, never recomputed from
/// already-rounded values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteBreakdown {
    pub revenue_adjustment: Money,
    pub complexity_adjustment: Money,
    pub industry_adjustment: Money,
    pub payroll_cost: Money,
    pub total: Money,
}

/// The entity type's base service package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseServices {
    pub entity_type: EntityType,
    pub services: Vec<String>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteOutput {
    #[serde(rename = "quote")]
    pub final_quote: Money,
    pub base_price: Money,
    pub payroll_cost: Money,
    pub revenue_modifier: Rate,
    pub complexity_modifier: Rate,
    pub industry_modifier: Rate,
    pub complexity_factors: Vec<ComplexityFactor>,
    pub service_list: Vec<String>,
    pub breakdown: QuoteBreakdown,
    pub base_services: BaseServices,
    pub warnings: Vec<String>,
}

// ---------------------------------------------------------------------------
// Factor derivation
// ---------------------------------------------------------------------------

/// Factors trigger in a fixed order; the order shows in the factor list and
/// in how service additions are appended. The modifier itself is a product,
/// so the order never changes the number.
fn triggered_factors(profile: &BusinessProfile) -> Vec<ComplexityFactor> {
    let mut factors = Vec::new();

    if profile.has_employees {
        factors.push(ComplexityFactor::PayrollManagement);
    }
    if profile.manages_stock {
        factors.push(ComplexityFactor::InventoryManagement);
    }
    if profile.deals_foreign_currency {
        factors.push(ComplexityFactor::ForeignCurrencyTransactions);
    }

    if let EntityKind::PrivateCompany(compliance) = &profile.entity {
        // Corporate compliance applies to every private company, the
        // sub-factors only when the matching attribute is at its top tier.
        factors.push(ComplexityFactor::CorporateCompliance);
        if compliance.audit_requirements == AuditRequirement::Required {
            factors.push(ComplexityFactor::AuditRequirements);
        }
        if compliance.tax_complexity == TaxComplexity::Complex {
            factors.push(ComplexityFactor::ComplexTaxStructure);
        }
        if compliance.regulatory_reporting == RegulatoryReporting::Extensive {
            factors.push(ComplexityFactor::ExtensiveRegulatoryReporting);
        }
    }

    factors
}

// ---------------------------------------------------------------------------
// Calculation
// ---------------------------------------------------------------------------

/// Round to a whole currency amount, half away from zero.
fn round_whole(amount: Decimal) -> Money {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Price a business profile against a rate card.
///
/// Pure and deterministic: identical inputs produce identical outputs, and
/// the card is never mutated, so this is safe to call from any number of
/// concurrent callers. The only error condition is an entity type the card
/// has no base price for; every other lookup miss has a defined fallback.
pub fn calculate_quote(profile: &BusinessProfile, rates: &RateCard) -> FeeQuoteResult<QuoteOutput> {
    let entity_type = profile.entity.entity_type();
    let pricing = rates.entity_pricing(entity_type)?;

    let mut warnings = Vec::new();

    let base_price = pricing.base_price;
    let revenue_modifier = rates.revenue_modifier(profile.annual_revenue_band);

    let industry = profile.industry.trim();
    let industry_modifier = rates.industry_modifier(industry);
    if !industry.is_empty() && rates.industry_entry(industry).is_none() {
        warnings.push(format!(
            "Industry '{}' is not on the rate card; a neutral modifier of 1.0 was applied.",
            industry
        ));
    }

    let complexity_factors = triggered_factors(profile);
    let complexity_modifier = complexity_factors
        .iter()
        .fold(Decimal::ONE, |acc, factor| {
            acc * rates.factor_multiplier(*factor)
        });

    let payroll_cost = if profile.has_employees {
        match profile.employee_count_band {
            Some(band) => rates.payroll_cost(band),
            None => {
                warnings.push(
                    "Employee count band not provided; payroll cost excluded from the quote."
                        .to_string(),
                );
                Decimal::ZERO
            }
        }
    } else {
        Decimal::ZERO
    };

    // Full-precision stages; rounding happens once per reported figure.
    let adjusted_price = base_price * revenue_modifier;
    let after_complexity = adjusted_price * complexity_modifier;
    let with_industry = after_complexity * industry_modifier;

    let raw_total = round_whole(with_industry) + payroll_cost;
    let final_quote = raw_total.max(rates.minimum_quote);
    if final_quote > raw_total {
        warnings.push(format!(
            "Calculated total {} is below the minimum monthly fee; floor of {} applied.",
            raw_total, rates.minimum_quote
        ));
    }

    let breakdown = QuoteBreakdown {
        revenue_adjustment: round_whole(adjusted_price - base_price),
        complexity_adjustment: round_whole(after_complexity - adjusted_price),
        industry_adjustment: round_whole(with_industry - after_complexity),
        payroll_cost,
        total: final_quote,
    };

    let mut service_list = pricing.services.clone();
    for factor in &complexity_factors {
        service_list.extend(
            factor
                .service_additions()
                .iter()
                .map(|s| s.to_string()),
        );
    }

    Ok(QuoteOutput {
        final_quote,
        base_price,
        payroll_cost,
        revenue_modifier,
        complexity_modifier,
        industry_modifier,
        complexity_factors,
        service_list,
        breakdown,
        base_services: BaseServices {
            entity_type,
            services: pricing.services.clone(),
            description: pricing.description.clone(),
        },
        warnings,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
