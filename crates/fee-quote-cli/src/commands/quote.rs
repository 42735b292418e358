use clap::Args;
use serde_json::Value;

use fee_quote_core::pricing::quote::{calculate_quote, BusinessProfile};
use fee_quote_core::pricing::rate_card::RateCard;

use crate::input;

/// Arguments for pricing a business profile
#[derive(Args)]
pub struct QuoteArgs {
    /// Path to a JSON or YAML business profile
    #[arg(long)]
    pub input: Option<String>,

    /// Path to a custom rate card (JSON); defaults to the standard card
    #[arg(long)]
    pub rates: Option<String>,
}

pub fn run_quote(args: QuoteArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let profile: BusinessProfile = if let Some(ref path) = args.input {
        input::read_profile(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--input <profile.json|profile.yaml> or stdin required for a quote".into());
    };

    let card = load_rate_card(args.rates.as_deref())?;
    let result = calculate_quote(&profile, &card)?;
    Ok(serde_json::to_value(result)?)
}

/// Load and validate a custom rate card, or fall back to the standard one.
pub(crate) fn load_rate_card(path: Option<&str>) -> Result<RateCard, Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            let card: RateCard = input::read_json(p)?;
            card.validate()?;
            Ok(card)
        }
        None => Ok(RateCard::standard()),
    }
}
