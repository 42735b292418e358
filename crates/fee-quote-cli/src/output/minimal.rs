use rust_decimal::Decimal;
use serde_json::Value;

/// Print just the key answer value from the output.
///
/// For a quote, that is the monthly amount; otherwise the first field.
pub fn print_minimal(value: &Value) {
    if let Value::Object(map) = value {
        for key in ["quote", "basePrice"] {
            if let Some(val) = map.get(key) {
                if !val.is_null() {
                    println!("{}", format_minimal(val));
                    return;
                }
            }
        }

        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_minimal(val));
            return;
        }
    }

    println!("{}", format_minimal(value));
}

fn format_minimal(value: &Value) -> String {
    match value {
        // Amounts arrive as decimal strings; normalize trailing zeros.
        Value::String(s) => match s.parse::<Decimal>() {
            Ok(d) => d.normalize().to_string(),
            Err(_) => s.clone(),
        },
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
