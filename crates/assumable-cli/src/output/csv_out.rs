use serde_json::Value;
use std::io;

/// Write output as a `field,value` CSV to stdout. Values stay raw numbers so
/// the file can be re-imported; absent fields are empty cells.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());
    if let Err(e) = write_csv(&mut wtr, value) {
        eprintln!("CSV write error: {}", e);
    }
}

fn write_csv<W: io::Write>(wtr: &mut csv::Writer<W>, value: &Value) -> csv::Result<()> {
    let fields = match value {
        Value::Object(map) => match map.get("result") {
            Some(Value::Object(result)) => result,
            _ => map,
        },
        _ => {
            wtr.write_record([csv_value(value)])?;
            return wtr.flush().map_err(csv::Error::from);
        }
    };

    wtr.write_record(["field", "value"])?;
    for (key, val) in fields {
        wtr.write_record([key.as_str(), &csv_value(val)])?;
    }
    wtr.flush().map_err(csv::Error::from)
}

fn csv_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_result_written_as_rows() {
        let v = json!({"result": {"equity_gap": 80000.0, "monthly_savings": 411.5}, "warnings": []});
        let mut wtr = csv::Writer::from_writer(Vec::new());
        write_csv(&mut wtr, &v).unwrap();
        let out = String::from_utf8(wtr.into_inner().unwrap()).unwrap();
        assert_eq!(out, "field,value\nequity_gap,80000.0\nmonthly_savings,411.5\n");
    }
}
