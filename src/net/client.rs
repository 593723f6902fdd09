use log::debug;
use reqwest::header::{CACHE_CONTROL, HeaderMap, HeaderValue, USER_AGENT};
use std::time::Duration;

use super::NetError;

/// Upper bound for a whole page or API request. Downloads have none.
pub const PAGE_TIMEOUT: Duration = Duration::from_secs(30);

/// Builds the client every request goes through.
///
/// Sends `User-Agent` and `Cache-Control: max-age=600` on every request,
/// which gets past the simple robots blocking some mirrors do. `idle` bounds
/// connecting and each read, so a long download that keeps receiving data
/// is never cut off.
pub fn build_client(user_agent: &str, idle: Duration) -> Result<reqwest::Client, NetError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        USER_AGENT,
        HeaderValue::from_str(user_agent).map_err(|e| NetError::Parse(e.to_string()))?,
    );
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("max-age=600"));
    debug!("Building HTTP client (idle timeout={:?})", idle);

    reqwest::Client::builder()
        .default_headers(headers)
        .connect_timeout(idle)
        .read_timeout(idle)
        .build()
        .map_err(|e| NetError::Network(e.to_string()))
}

/// Rewrites an `http://` URL to `https://`. Other URLs are returned unchanged.
pub fn force_https(url: &str) -> String {
    match url.get(..7) {
        Some(scheme) if scheme.eq_ignore_ascii_case("http://") => format!("https://{}", &url[7..]),
        _ => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_force_https() {
        assert_eq!(force_https("http://a.com/x.exe"), "https://a.com/x.exe");
        assert_eq!(force_https("HTTP://a.com/"), "https://a.com/");
        assert_eq!(force_https("https://a.com/"), "https://a.com/");
        assert_eq!(force_https("ftp://a.com/"), "ftp://a.com/");
        assert_eq!(force_https("a"), "a");
    }

    #[test]
    fn test_build_client_rejects_bad_user_agent() {
        assert!(build_client("Mozilla/5.0", Duration::from_secs(5)).is_ok());
        assert!(matches!(
            build_client("bad\nagent", Duration::from_secs(5)),
            Err(NetError::Parse(_))
        ));
    }
}
