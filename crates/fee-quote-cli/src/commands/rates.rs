use clap::{Args, ValueEnum};
use serde_json::Value;

use fee_quote_core::pricing::rate_card::EntityType;

use super::quote::load_rate_card;

/// Arguments for showing an entity type's base service package
#[derive(Args)]
pub struct ServicesArgs {
    /// Entity type whose package to show
    #[arg(long, value_enum)]
    pub entity_type: EntityTypeArg,

    /// Path to a custom rate card (JSON)
    #[arg(long)]
    pub rates: Option<String>,
}

/// Arguments for printing the rate card
#[derive(Args)]
pub struct RatesArgs {
    /// Path to a custom rate card (JSON)
    #[arg(long)]
    pub rates: Option<String>,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum EntityTypeArg {
    SoleProprietor,
    Partnership,
    CloseCorporation,
    PrivateCompany,
    PublicCompany,
    Trust,
    Npo,
    Other,
}

impl From<EntityTypeArg> for EntityType {
    fn from(arg: EntityTypeArg) -> Self {
        match arg {
            EntityTypeArg::SoleProprietor => EntityType::SoleProprietor,
            EntityTypeArg::Partnership => EntityType::Partnership,
            EntityTypeArg::CloseCorporation => EntityType::CloseCorporation,
            EntityTypeArg::PrivateCompany => EntityType::PrivateCompany,
            EntityTypeArg::PublicCompany => EntityType::PublicCompany,
            EntityTypeArg::Trust => EntityType::Trust,
            EntityTypeArg::Npo => EntityType::NPO,
            EntityTypeArg::Other => EntityType::Other,
        }
    }
}

pub fn run_services(args: ServicesArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let card = load_rate_card(args.rates.as_deref())?;
    let entity_type: EntityType = args.entity_type.into();
    let pricing = card.entity_pricing(entity_type)?;

    Ok(serde_json::json!({
        "entityType": entity_type,
        "basePrice": pricing.base_price,
        "description": pricing.description,
        "services": pricing.services,
    }))
}

pub fn run_rates(args: RatesArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let card = load_rate_card(args.rates.as_deref())?;
    Ok(serde_json::to_value(card)?)
}
