use serde_json::{Map, Value};
use tabled::{builder::Builder, Table};

use super::display_value;

/// Format output as a two-column table, amounts in dollars and rates in
/// percent.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => match map.get("result") {
            Some(Value::Object(result)) => print_envelope(result, map),
            _ => println!("{}", field_table(map)),
        },
        _ => println!("{}", value),
    }
}

fn print_envelope(result: &Map<String, Value>, envelope: &Map<String, Value>) {
    println!("{}", field_table(result));

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings.iter().filter_map(Value::as_str) {
                println!("  - {}", w);
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

fn field_table(map: &Map<String, Value>) -> Table {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in map {
        builder.push_record([key.clone(), display_value(key, val)]);
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_table_renders_formatted_values() {
        let v = json!({"monthly_savings": 411.53, "blended_rate": 4.0526});
        let table = field_table(v.as_object().unwrap()).to_string();
        assert!(table.contains("$412"));
        assert!(table.contains("4.05%"));
    }
}
