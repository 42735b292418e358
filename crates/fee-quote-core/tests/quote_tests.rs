use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

use fee_quote_core::pricing::factors::ComplexityFactor;
use fee_quote_core::pricing::quote::{
    calculate_quote, AuditRequirement, BusinessProfile, ComplianceProfile, EntityKind,
    RegulatoryReporting, TaxComplexity,
};
use fee_quote_core::pricing::rate_card::{EmployeeBand, EntityType, RateCard, RevenueBand};
use fee_quote_core::FeeQuoteError;

// ===========================================================================
// Scenario tests
// ===========================================================================

fn sole_proprietor_startup() -> BusinessProfile {
    // Smallest realistic client: owner-managed, no staff, no stock.
    BusinessProfile {
        entity: EntityKind::SoleProprietor,
        annual_revenue_band: RevenueBand::UpTo100k,
        industry: "Other".to_string(),
        has_employees: false,
        employee_count_band: None,
        manages_stock: false,
        deals_foreign_currency: false,
    }
}

fn complex_private_company() -> BusinessProfile {
    // Every complexity factor triggered at once.
    BusinessProfile {
        entity: EntityKind::PrivateCompany(ComplianceProfile {
            tax_complexity: TaxComplexity::Complex,
            audit_requirements: AuditRequirement::Required,
            regulatory_reporting: RegulatoryReporting::Extensive,
        }),
        annual_revenue_band: RevenueBand::From2mTo5m,
        industry: "Unlisted Sector".to_string(),
        has_employees: true,
        employee_count_band: Some(EmployeeBand::SixToTwenty),
        manages_stock: true,
        deals_foreign_currency: true,
    }
}

#[test]
fn test_scenario_sole_proprietor_startup() {
    let result = calculate_quote(&sole_proprietor_startup(), &RateCard::standard()).unwrap();

    assert_eq!(result.base_price, dec!(800));
    assert_eq!(result.revenue_modifier, dec!(0.8));
    assert_eq!(result.complexity_modifier, dec!(1));
    assert_eq!(result.industry_modifier, dec!(1));
    assert_eq!(result.payroll_cost, dec!(0));
    // 800 * 0.8 = 640, already above the 500 floor
    assert_eq!(result.final_quote, dec!(640));
    assert!(result.complexity_factors.is_empty());
}

#[test]
fn test_scenario_complex_private_company() {
    let result = calculate_quote(&complex_private_company(), &RateCard::standard()).unwrap();

    assert_eq!(result.base_price, dec!(2500));
    assert_eq!(result.revenue_modifier, dec!(1.5));
    assert_eq!(result.payroll_cost, dec!(800));
    // Industry is not on the rate card, so it stays neutral.
    assert_eq!(result.industry_modifier, dec!(1));

    // All seven factors, in evaluation order.
    assert_eq!(
        result.complexity_factors,
        vec![
            ComplexityFactor::PayrollManagement,
            ComplexityFactor::InventoryManagement,
            ComplexityFactor::ForeignCurrencyTransactions,
            ComplexityFactor::CorporateCompliance,
            ComplexityFactor::AuditRequirements,
            ComplexityFactor::ComplexTaxStructure,
            ComplexityFactor::ExtensiveRegulatoryReporting,
        ]
    );

    // 1.15 * 1.20 * 1.25 * 1.10 * 1.30 * 1.20 * 1.15
    assert_eq!(result.complexity_modifier, dec!(3.404115));

    // round(2500 * 1.5 * 3.404115) + 800 = 12765 + 800
    assert_eq!(result.final_quote, dec!(13565));
    assert_eq!(result.breakdown.total, dec!(13565));
}

// ===========================================================================
// Properties
// ===========================================================================

#[test]
fn test_floor_holds_for_every_entity_and_band() {
    let card = RateCard::standard();
    let entities = [
        EntityKind::SoleProprietor,
        EntityKind::Partnership,
        EntityKind::CloseCorporation,
        EntityKind::PrivateCompany(ComplianceProfile::default()),
        EntityKind::PublicCompany,
        EntityKind::Trust,
        EntityKind::NPO,
        EntityKind::Other,
    ];
    let bands = [
        RevenueBand::UpTo100k,
        RevenueBand::From100kTo500k,
        RevenueBand::From500kTo2m,
        RevenueBand::From2mTo5m,
        RevenueBand::From5mTo20m,
        RevenueBand::Over20m,
    ];

    for entity in &entities {
        for band in bands {
            let mut profile = sole_proprietor_startup();
            profile.entity = entity.clone();
            profile.annual_revenue_band = band;
            let result = calculate_quote(&profile, &card).unwrap();
            assert!(
                result.final_quote >= dec!(500),
                "{:?} in {:?} quoted below the floor",
                entity,
                band
            );
        }
    }
}

#[test]
fn test_higher_revenue_band_never_lowers_the_quote() {
    let card = RateCard::standard();
    let bands = [
        RevenueBand::UpTo100k,
        RevenueBand::From100kTo500k,
        RevenueBand::From500kTo2m,
        RevenueBand::From2mTo5m,
        RevenueBand::From5mTo20m,
        RevenueBand::Over20m,
    ];

    let mut profile = complex_private_company();
    let mut previous = None;
    for band in bands {
        profile.annual_revenue_band = band;
        let quote = calculate_quote(&profile, &card).unwrap().final_quote;
        if let Some(prev) = previous {
            assert!(quote >= prev, "quote dropped moving up to {:?}", band);
        }
        previous = Some(quote);
    }
}

#[test]
fn test_identical_profiles_yield_identical_results() {
    let card = RateCard::standard();
    let profile = complex_private_company();

    let first = calculate_quote(&profile, &card).unwrap();
    let second = calculate_quote(&profile, &card).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_unknown_entity_type_produces_no_partial_result() {
    let mut card = RateCard::standard();
    card.base_prices.remove(&EntityType::PublicCompany);

    let mut profile = sole_proprietor_startup();
    profile.entity = EntityKind::PublicCompany;

    match calculate_quote(&profile, &card) {
        Err(FeeQuoteError::UnknownEntityType { entity_type }) => {
            assert_eq!(entity_type, "PublicCompany");
        }
        other => panic!("expected UnknownEntityType, got {:?}", other),
    }
}

// ===========================================================================
// Wire shapes
// ===========================================================================

#[test]
fn test_profile_deserializes_from_submission_payload() {
    let payload = r#"{
        "entityType": "PrivateCompany",
        "taxComplexity": "Complex",
        "auditRequirements": "Required",
        "regulatoryReporting": "Extensive",
        "annualRevenueBand": "2M-5M",
        "industry": "Manufacturing",
        "hasEmployees": true,
        "employeeCountBand": "6-20",
        "managesStock": true,
        "dealsForeignCurrency": true
    }"#;

    let profile: BusinessProfile = serde_json::from_str(payload).unwrap();
    assert_eq!(
        profile.entity,
        EntityKind::PrivateCompany(ComplianceProfile {
            tax_complexity: TaxComplexity::Complex,
            audit_requirements: AuditRequirement::Required,
            regulatory_reporting: RegulatoryReporting::Extensive,
        })
    );
    assert_eq!(profile.annual_revenue_band, RevenueBand::From2mTo5m);
    assert_eq!(profile.employee_count_band, Some(EmployeeBand::SixToTwenty));
}

#[test]
fn test_missing_compliance_fields_do_not_trigger_factors() {
    let payload = r#"{
        "entityType": "PrivateCompany",
        "annualRevenueBand": "100k-500k",
        "industry": "Retail",
        "hasEmployees": false,
        "managesStock": false,
        "dealsForeignCurrency": false
    }"#;

    let profile: BusinessProfile = serde_json::from_str(payload).unwrap();
    let result = calculate_quote(&profile, &RateCard::standard()).unwrap();
    assert_eq!(
        result.complexity_factors,
        vec![ComplexityFactor::CorporateCompliance]
    );
}

#[test]
fn test_output_uses_published_field_names() {
    let result = calculate_quote(&complex_private_company(), &RateCard::standard()).unwrap();
    let value = serde_json::to_value(&result).unwrap();
    let object = value.as_object().unwrap();

    for key in [
        "quote",
        "basePrice",
        "payrollCost",
        "revenueModifier",
        "complexityModifier",
        "industryModifier",
        "complexityFactors",
        "serviceList",
        "breakdown",
        "baseServices",
        "warnings",
    ] {
        assert!(object.contains_key(key), "missing key '{}'", key);
    }

    let factors = object["complexityFactors"].as_array().unwrap();
    assert_eq!(factors[0], "Payroll Management");

    let base_services = object["baseServices"].as_object().unwrap();
    assert_eq!(base_services["entityType"], "PrivateCompany");

    let breakdown = object["breakdown"].as_object().unwrap();
    for key in [
        "revenueAdjustment",
        "complexityAdjustment",
        "industryAdjustment",
        "payrollCost",
        "total",
    ] {
        assert!(breakdown.contains_key(key), "missing breakdown key '{}'", key);
    }
}
