use serde_json::Value;

/// Drop object keys whose value is an empty or whitespace-only string, at
/// every depth. `{ pokemon: { nickname: "", species: "x" } }` becomes
/// `{ pokemon: { species: "x" } }`. Array elements are left alone.
pub fn remove_blank_fields(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, v| !matches!(v, Value::String(s) if s.trim().is_empty()));
            for v in map.values_mut() {
                remove_blank_fields(v);
            }
        }
        Value::Array(items) => {
            for v in items.iter_mut() {
                if v.is_object() {
                    remove_blank_fields(v);
                }
            }
        }
        _ => {}
    }
}
