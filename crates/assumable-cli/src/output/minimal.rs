use serde_json::Value;

/// Headline figures, most important first.
const PRIORITY_KEYS: [&str; 3] = ["monthly_savings", "monthly_payment", "assumable_monthly_payment"];

/// Print just the headline number: monthly savings for a comparison, the
/// payment for a single loan, otherwise the first field.
pub fn print_minimal(value: &Value) {
    println!("{}", minimal_line(value));
}

fn minimal_line(value: &Value) -> String {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    if let Value::Object(map) = result_obj {
        for key in PRIORITY_KEYS {
            if let Some(val) = map.get(key) {
                if !val.is_null() {
                    return raw(val);
                }
            }
        }
        if let Some((key, val)) = map.iter().next() {
            return format!("{}: {}", key, raw(val));
        }
    }

    raw(result_obj)
}

fn raw(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
