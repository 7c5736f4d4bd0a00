//! Allow-list checks for client-supplied update payloads.
//!
//! Mutable fields are declared once per entity as an explicit
//! allow-list; anything else in the payload is rejected before any
//! mutation happens. A deny-list of "sensitive" fields is not an
//! option here: new fields must be opted in.

/// Return the payload keys not present in `allowed`, sorted.
///
/// An empty result means the payload only touches mutable fields.
/// Non-object payloads report no offending keys; their shape is
/// rejected by typed deserialization afterwards.
pub fn disallowed_fields(payload: &serde_json::Value, allowed: &[&str]) -> Vec<String> {
    let Some(map) = payload.as_object() else {
        return Vec::new();
    };

    let mut offending: Vec<String> = map
        .keys()
        .filter(|key| !allowed.contains(&key.as_str()))
        .cloned()
        .collect();
    offending.sort();
    offending
}
