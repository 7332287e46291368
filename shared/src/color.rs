/// Formats the low 24 bits of `value` as `#rrggbb`.
pub fn random_color(value: u32) -> String {
    format!("#{:06x}", value & 0x00ff_ffff)
}

/// Accepts `#rrggbb` (any case) and returns it lowercased. Blank input is
/// `Ok(None)`.
pub fn sanitize_color(raw: &str) -> crate::Result<Option<String>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let valid = trimmed.len() == 7
        && trimmed.starts_with('#')
        && trimmed[1..].chars().all(|c| c.is_ascii_hexdigit());
    if !valid {
        return Err(crate::Error::InvalidColor(trimmed.to_string()));
    }
    Ok(Some(trimmed.to_ascii_lowercase()))
}
