use serde_json::Value;
use tabled::{builder::Builder, Table};

/// Render output as tables using the tabled crate.
///
/// Quote output gets a dedicated layout: headline figures, the breakdown,
/// then the service list and any warnings. Everything else (rate card,
/// service packages) falls back to a flat field/value table.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) if map.contains_key("quote") => print_quote_tables(map),
        Value::Object(_) => print_flat_object(value),
        _ => println!("{}", value),
    }
}

fn print_quote_tables(quote: &serde_json::Map<String, Value>) {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for key in [
        "quote",
        "basePrice",
        "payrollCost",
        "revenueModifier",
        "complexityModifier",
        "industryModifier",
    ] {
        if let Some(val) = quote.get(key) {
            builder.push_record([key, &format_value(val)]);
        }
    }
    if let Some(Value::Array(factors)) = quote.get("complexityFactors") {
        let names: Vec<String> = factors.iter().map(format_value).collect();
        builder.push_record(["complexityFactors", &names.join(", ")]);
    }
    println!("{}", Table::from(builder));

    if let Some(Value::Object(breakdown)) = quote.get("breakdown") {
        let mut builder = Builder::default();
        builder.push_record(["Breakdown", "Amount"]);
        for (key, val) in breakdown {
            builder.push_record([key.as_str(), &format_value(val)]);
        }
        println!("\n{}", Table::from(builder));
    }

    if let Some(Value::Array(services)) = quote.get("serviceList") {
        println!("\nIncluded services:");
        for service in services {
            println!("  - {}", format_value(service));
        }
    }

    if let Some(Value::Array(warnings)) = quote.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for warning in warnings {
                println!("  - {}", format_value(warning));
            }
        }
    }
}

fn print_flat_object(value: &Value) {
    if let Value::Object(map) = value {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in map {
            builder.push_record([key.as_str(), &format_value(val)]);
        }
        println!("{}", Table::from(builder));
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(format_value).collect();
            items.join(", ")
        }
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}
