//! URL helpers for upstream image sources

use url::Url;

/// Query parameters whose values never reach the logs
const SENSITIVE_PARAMS: [&str; 8] = [
    "username", "password", "user", "pass", "pwd", "passwd", "token", "client_secret",
];

/// URL utilities shared by the fetcher and the orchestrator
pub struct UrlUtils;

impl UrlUtils {
    /// Replace credentials in a URL with `****` for logging.
    ///
    /// Strings that do not parse as URLs are returned unchanged.
    pub fn obfuscate_credentials(url: &str) -> String {
        let Ok(mut parsed) = Url::parse(url) else {
            return url.to_string();
        };

        if !parsed.username().is_empty() || parsed.password().is_some() {
            let _ = parsed.set_username("****");
            let _ = parsed.set_password(Some("****"));
        }

        let has_sensitive = parsed
            .query_pairs()
            .any(|(key, _)| Self::is_sensitive(&key));
        if has_sensitive {
            let pairs: Vec<(String, String)> = parsed
                .query_pairs()
                .map(|(key, value)| {
                    let value = if Self::is_sensitive(&key) {
                        "****".to_string()
                    } else {
                        value.into_owned()
                    };
                    (key.into_owned(), value)
                })
                .collect();
            parsed.query_pairs_mut().clear().extend_pairs(pairs);
        }

        parsed.to_string()
    }

    /// Fill a generation endpoint template.
    ///
    /// `{prompt}` receives the percent-encoded prompt text, `{width}` and
    /// `{height}` the requested dimensions.
    pub fn generation_url(template: &str, prompt: &str, width: u32, height: u32) -> String {
        template
            .replace("{prompt}", &urlencoding::encode(prompt))
            .replace("{width}", &width.to_string())
            .replace("{height}", &height.to_string())
    }

    /// Host part of a URL, for compact log lines
    pub fn host(url: &str) -> Option<String> {
        Url::parse(url)
            .ok()
            .and_then(|u| u.host_str().map(|h| h.to_string()))
    }

    fn is_sensitive(key: &str) -> bool {
        SENSITIVE_PARAMS
            .iter()
            .any(|param| param.eq_ignore_ascii_case(key))
    }
}
