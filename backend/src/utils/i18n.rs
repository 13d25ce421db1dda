//! Internationalization utilities for the backend
//!
//! This module provides locale extraction from HTTP requests and
//! task-local storage for the locale of the request being served.

use std::future::Future;

tokio::task_local! {
    static CURRENT_LOCALE: String;
}

/// Supported locales
pub const SUPPORTED_LOCALES: &[&str] = &["zh", "en"];
pub const DEFAULT_LOCALE: &str = "zh";

/// Run `fut` with `locale` as the current locale
pub async fn with_locale<F: Future>(locale: &str, fut: F) -> F::Output {
    CURRENT_LOCALE.scope(normalize_locale(locale), fut).await
}

/// Get the current locale, falling back to the default outside a request scope
pub fn get_locale() -> String {
    CURRENT_LOCALE
        .try_with(|l| l.clone())
        .unwrap_or_else(|_| DEFAULT_LOCALE.to_string())
}

/// Normalize locale string to supported format
/// Accepts: "zh", "zh-CN", "zh_CN", "en", "en-US", "en_US", etc.
fn normalize_locale(locale: &str) -> String {
    let locale = locale.trim().to_lowercase();

    let primary = locale
        .split(['-', '_', ','])
        .next()
        .unwrap_or(DEFAULT_LOCALE);

    if primary.starts_with("zh") {
        "zh".to_string()
    } else if primary.starts_with("en") {
        "en".to_string()
    } else {
        DEFAULT_LOCALE.to_string()
    }
}

/// Extract locale from Accept-Language header value
pub fn extract_locale_from_header(header_value: Option<&str>) -> String {
    match header_value {
        Some(value) => normalize_locale(value),
        None => DEFAULT_LOCALE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_locale() {
        assert_eq!(normalize_locale("zh"), "zh");
        assert_eq!(normalize_locale("zh-CN"), "zh");
        assert_eq!(normalize_locale("zh_CN"), "zh");
        assert_eq!(normalize_locale("en"), "en");
        assert_eq!(normalize_locale("en-US,en;q=0.9"), "en");
        assert_eq!(normalize_locale("fr"), "zh"); // Unsupported, fallback to default
        assert_eq!(normalize_locale(""), "zh");
    }

    #[test]
    fn test_extract_locale_from_header() {
        assert_eq!(extract_locale_from_header(Some("en-GB")), "en");
        assert_eq!(extract_locale_from_header(None), DEFAULT_LOCALE);
    }

    #[tokio::test]
    async fn test_scoped_locale() {
        assert_eq!(get_locale(), DEFAULT_LOCALE);
        let inner = with_locale("en-US", async { get_locale() }).await;
        assert_eq!(inner, "en");
        assert_eq!(get_locale(), DEFAULT_LOCALE);
    }
}
