use rust_decimal::Decimal;

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Multipliers expressed as decimals (1.15 = +15%). Never as percentages.
pub type Rate = Decimal;
