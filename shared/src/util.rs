/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Current UTC date as `YYYY-MM-DD`
pub fn today_iso() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}

/// Local part of an email address (`"ada@example.com"` -> `"ada"`)
///
/// Used to derive a display name for accounts that have no profile row yet.
pub fn email_local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

/// Generated placeholder avatar URL keyed by display name.
///
/// Presentation convenience only; nothing in the gateway depends on this
/// being reachable. ui-avatars accepts `+` as a space separator, so the
/// encoding here stays deliberately minimal.
pub fn placeholder_avatar_url(name: &str) -> String {
    let encoded: String = name
        .chars()
        .map(|c| if c == ' ' { '+' } else { c })
        .filter(|c| c.is_alphanumeric() || *c == '+' || *c == '-' || *c == '.')
        .collect();
    format!("https://ui-avatars.com/api/?name={encoded}&background=random")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_local_part() {
        assert_eq!(email_local_part("ada@example.com"), "ada");
        assert_eq!(email_local_part("no-at-sign"), "no-at-sign");
    }

    #[test]
    fn test_placeholder_avatar_url() {
        let url = placeholder_avatar_url("Ada Lovelace");
        assert_eq!(
            url,
            "https://ui-avatars.com/api/?name=Ada+Lovelace&background=random"
        );
    }
}
