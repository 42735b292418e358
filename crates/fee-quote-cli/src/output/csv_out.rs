use serde_json::Value;
use std::io;

/// Write output as two-column CSV to stdout.
///
/// Nested objects are flattened with dotted keys; arrays are joined with
/// semicolons so a quote fits one flat record set.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    let _ = wtr.write_record(["field", "value"]);
    match value {
        Value::Object(_) => write_flattened(&mut wtr, "", value),
        _ => {
            let _ = wtr.write_record(["value", &format_csv_value(value)]);
        }
    }

    let _ = wtr.flush();
}

fn write_flattened(wtr: &mut csv::Writer<io::StdoutLock<'_>>, prefix: &str, value: &Value) {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                write_flattened(wtr, &path, val);
            }
        }
        _ => {
            let _ = wtr.write_record([prefix, &format_csv_value(value)]);
        }
    }
}

fn format_csv_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(format_csv_value).collect();
            items.join("; ")
        }
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}
