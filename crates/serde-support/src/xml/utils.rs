//! Small helpers for XML text handling.

/// Converts a Rust boolean to its `xs:boolean` representation.
pub fn bool_to_string(b: bool) -> &'static str {
    if b { "true" } else { "false" }
}

/// Parses the `xs:boolean` lexical space (`true`, `false`, `1`, `0`).
pub fn parse_bool(text: &str) -> Option<bool> {
    match text.trim() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

/// Whitespace as XML defines it (space, tab, CR, LF).
pub fn is_whitespace(text: &str) -> bool {
    text.bytes()
        .all(|b| matches!(b, b' ' | b'\n' | b'\r' | b'\t'))
}

/// Resolves the name of a general entity or character reference
/// (the part between `&` and `;`).
pub fn resolve_reference(name: &str) -> Result<String, String> {
    let predefined = match name {
        "amp" => Some("&"),
        "lt" => Some("<"),
        "gt" => Some(">"),
        "quot" => Some("\""),
        "apos" => Some("'"),
        _ => None,
    };
    if let Some(text) = predefined {
        return Ok(text.to_string());
    }

    let Some(number) = name.strip_prefix('#') else {
        return Err(format!("undeclared entity &{name};"));
    };
    let code = match number.strip_prefix('x') {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => number.parse::<u32>(),
    }
    .map_err(|_| format!("invalid character reference &{name};"))?;
    char::from_u32(code)
        .filter(|c| *c != '\0')
        .map(String::from)
        .ok_or_else(|| format!("character reference &{name}; is not a valid character"))
}
