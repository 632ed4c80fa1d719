use serde::Serialize;

/// Pretty-printed JSON with two-space indentation and a trailing newline.
///
/// Every field is kept, empty or not. serde_json writes `&`, `<` and `>`
/// as-is, so titles reach the output unchanged.
pub fn format_json<T>(value: &T) -> serde_json::Result<String>
where
    T: Serialize + ?Sized,
{
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}
