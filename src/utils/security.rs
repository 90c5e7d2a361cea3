use chrono::{DateTime, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

use crate::utils::clock::Clock;

static SCRIPT_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<script\b.*?</script>").expect("script pattern is valid"));
static JAVASCRIPT_SCHEME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)javascript:").expect("scheme pattern is valid"));
static INLINE_HANDLER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)on\w+\s*=").expect("handler pattern is valid"));
static PHONE_SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s\-()]").expect("separator pattern is valid"));
static PERUVIAN_MOBILE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\+?51)?9\d{8}$").expect("mobile pattern is valid"));

pub static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));
pub static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\d\s\-+()]+$").expect("phone pattern is valid"));
pub static NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-ZáéíóúÁÉÍÓÚñÑ\s]{2,50}$").expect("name pattern is valid")
});

const MAX_EMAIL_LEN: usize = 254;

/// Removes inline `<script>...</script>` blocks, nothing else.
pub fn strip_scripts(input: &str) -> String {
    SCRIPT_BLOCK.replace_all(input, "").into_owned()
}

/// Stricter cleanup for free text: scripts, `javascript:` and `onX=` handlers, trimmed.
pub fn sanitize_input(input: &str) -> String {
    let without_scripts = SCRIPT_BLOCK.replace_all(input, "");
    let without_scheme = JAVASCRIPT_SCHEME.replace_all(&without_scripts, "");
    INLINE_HANDLER
        .replace_all(&without_scheme, "")
        .trim()
        .to_string()
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email) && email.len() <= MAX_EMAIL_LEN
}

pub fn is_valid_peruvian_phone(phone: &str) -> bool {
    let compact = PHONE_SEPARATORS.replace_all(phone, "");
    PERUVIAN_MOBILE.is_match(&compact)
}

pub fn is_valid_length(value: &str, min: usize, max: usize) -> bool {
    let len = value.chars().count();
    len >= min && len <= max
}

/// True when `value` is a date (`YYYY-MM-DD` or RFC 3339) strictly after `today`.
pub fn is_future_date(value: &str, today: NaiveDate) -> bool {
    let parsed = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(value.trim())
                .ok()
                .map(|dt| dt.date_naive())
        });
    matches!(parsed, Some(date) if date > today)
}

/// Sliding-window limiter keyed by an identifier (form name, user, ...).
pub struct RateLimiter<C: Clock> {
    clock: C,
    max_requests: usize,
    window_ms: i64,
    requests: HashMap<String, Vec<i64>>,
}

impl<C: Clock> RateLimiter<C> {
    pub fn new(clock: C, max_requests: usize, window_ms: i64) -> Self {
        Self {
            clock,
            max_requests,
            window_ms,
            requests: HashMap::new(),
        }
    }

    /// Records a request and returns false when the identifier is over its budget.
    pub fn check(&mut self, identifier: &str) -> bool {
        let now = self.clock.now_millis();
        let window_ms = self.window_ms;
        let recent = self.requests.entry(identifier.to_string()).or_default();
        recent.retain(|&at| now - at < window_ms);

        if recent.len() >= self.max_requests {
            return false;
        }
        recent.push(now);
        true
    }

    #[allow(dead_code)]
    pub fn reset(&mut self, identifier: &str) {
        self.requests.remove(identifier);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::clock::testing::ManualClock;

    #[test]
    fn strip_scripts_removes_blocks_case_insensitively() {
        let dirty = "hola <SCRIPT type=\"x\">alert(1)</script> mundo <script>\nsteal()\n</script>!";
        assert_eq!(strip_scripts(dirty), "hola  mundo !");
    }

    #[test]
    fn strip_scripts_leaves_plain_markup_alone() {
        assert_eq!(strip_scripts("<b>ok</b>"), "<b>ok</b>");
    }

    #[test]
    fn sanitize_input_removes_handlers_and_schemes() {
        let dirty = "  <a href=\"javascript:run()\" onclick = \"x\">hi</a>  ";
        assert_eq!(sanitize_input(dirty), "<a href=\"run()\"  \"x\">hi</a>");
    }

    #[test]
    fn email_validation() {
        assert!(is_valid_email("juan@example.com"));
        assert!(!is_valid_email("juan@example"));
        assert!(!is_valid_email("juan perez@example.com"));
        let long = format!("{}@example.com", "a".repeat(250));
        assert!(!is_valid_email(&long));
    }

    #[test]
    fn peruvian_phone_validation() {
        assert!(is_valid_peruvian_phone("+51 999 888 777"));
        assert!(is_valid_peruvian_phone("987-654-321"));
        assert!(is_valid_peruvian_phone("51987654321"));
        assert!(!is_valid_peruvian_phone("(01) 234-5678"));
        assert!(!is_valid_peruvian_phone("+51 899 888 777"));
    }

    #[test]
    fn length_counts_characters() {
        assert!(is_valid_length("ñandú", 5, 5));
        assert!(!is_valid_length("", 1, 10));
    }

    #[test]
    fn future_date_is_strictly_after_today() {
        let today = NaiveDate::from_ymd_opt(2025, 5, 10).unwrap();
        assert!(is_future_date("2025-05-11", today));
        assert!(!is_future_date("2025-05-10", today));
        assert!(!is_future_date("2025-05-09", today));
        assert!(is_future_date("2025-06-01T10:00:00Z", today));
        assert!(!is_future_date("mañana", today));
    }

    #[test]
    fn rate_limiter_blocks_then_recovers() {
        let clock = ManualClock::at(0);
        let mut limiter = RateLimiter::new(&clock, 3, 60_000);

        assert!(limiter.check("reservar"));
        assert!(limiter.check("reservar"));
        assert!(limiter.check("reservar"));
        assert!(!limiter.check("reservar"));
        assert!(limiter.check("contacto"));

        clock.advance(60_000);
        assert!(limiter.check("reservar"));
    }

    #[test]
    fn rate_limiter_reset_clears_history() {
        let clock = ManualClock::at(5);
        let mut limiter = RateLimiter::new(&clock, 1, 1_000);
        assert!(limiter.check("a"));
        assert!(!limiter.check("a"));
        limiter.reset("a");
        assert!(limiter.check("a"));
    }
}
