use lru::LruCache;
use regex::Regex;
use std::num::NonZeroUsize;
use std::sync::{Mutex, OnceLock};

static FIELD_REGEX_CACHE: OnceLock<Mutex<LruCache<String, Regex>>> = OnceLock::new();

fn get_cache() -> &'static Mutex<LruCache<String, Regex>> {
    FIELD_REGEX_CACHE.get_or_init(|| {
        let capacity =
            NonZeroUsize::new(32).expect("32 is a valid non-zero capacity for the field regex cache");
        Mutex::new(LruCache::new(capacity))
    })
}

/// Regex matching a quoted `"field":"value"` token, value in capture group 1.
pub fn field_value_regex(field: &str) -> Result<Regex, regex::Error> {
    // Try to get from cache first
    if let Ok(mut cache) = get_cache().try_lock()
        && let Some(regex) = cache.get(field) {
            return Ok(regex.clone());
        }

    let pattern = format!("\"{}\":\"([^\"]+)\"", regex::escape(field));
    let regex = Regex::new(&pattern)?;

    // Try to cache it
    if let Ok(mut cache) = get_cache().try_lock() {
        cache.put(field.to_string(), regex.clone());
    }

    Ok(regex)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_field_value() {
        let regex = field_value_regex("serviceId").unwrap();
        let caps = regex
            .captures(r#"{"serviceId":"org-42","type":"cudb"}"#)
            .unwrap();
        assert_eq!(&caps[1], "org-42");
    }

    #[test]
    fn test_no_match_without_quoted_value() {
        let regex = field_value_regex("serviceId").unwrap();
        assert!(regex.captures(r#"{"serviceId":42}"#).is_none());
        assert!(regex.captures(r#"{"serviceId":""}"#).is_none());
    }

    #[test]
    fn test_field_name_is_escaped() {
        // A field name with regex metacharacters must match literally
        let regex = field_value_regex("info.id").unwrap();
        assert!(regex.captures(r#""info.id":"x""#).is_some());
        assert!(regex.captures(r#""infoXid":"x""#).is_none());
    }

    #[test]
    fn test_cache_returns_same_pattern() {
        let first = field_value_regex("serviceId").unwrap();
        let second = field_value_regex("serviceId").unwrap();
        assert_eq!(first.as_str(), second.as_str());
    }
}
