use napi::Result as NapiResult;
use napi_derive::napi;

use fee_quote_core::pricing::quote::BusinessProfile;
use fee_quote_core::pricing::rate_card::{EntityType, RateCard};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

/// Quote request as submitted by the JS layers: the business profile fields,
/// plus an optional embedded rate-card override.
#[derive(serde::Deserialize)]
struct QuoteRequest {
    #[serde(flatten)]
    profile: BusinessProfile,
    #[serde(rename = "rateCard")]
    rate_card: Option<RateCard>,
}

/// Price a business profile. Both the web preview and the serverless
/// backend call this, so the two layers can never drift apart.
#[napi]
pub fn calculate_quote(input_json: String) -> NapiResult<String> {
    let request: QuoteRequest = serde_json::from_str(&input_json).map_err(to_napi_error)?;

    let card = match request.rate_card {
        Some(card) => {
            card.validate().map_err(to_napi_error)?;
            card
        }
        None => RateCard::standard(),
    };

    let output = fee_quote_core::pricing::quote::calculate_quote(&request.profile, &card)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

/// Base service package for one entity type, e.g. `"PrivateCompany"`.
#[napi]
pub fn base_services(entity_type_json: String) -> NapiResult<String> {
    let entity_type: EntityType =
        serde_json::from_str(&entity_type_json).map_err(to_napi_error)?;
    let card = RateCard::standard();
    let pricing = card.entity_pricing(entity_type).map_err(to_napi_error)?;
    serde_json::to_string(pricing).map_err(to_napi_error)
}

/// The firm's published rate card as JSON.
#[napi]
pub fn standard_rate_card() -> NapiResult<String> {
    serde_json::to_string(&RateCard::standard()).map_err(to_napi_error)
}
