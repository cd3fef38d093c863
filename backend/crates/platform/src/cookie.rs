//! Cookie Management Infrastructure
//!
//! Session cookie building/parsing and HTTPS detection for the `Secure` flag.

use axum::http::{HeaderMap, Uri, header};

/// SameSite policy for cookies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SameSite {
    Strict,
    #[default]
    Lax,
    None,
}

impl SameSite {
    pub fn as_str(&self) -> &'static str {
        match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        }
    }
}

/// Cookie configuration
#[derive(Debug, Clone)]
pub struct CookieConfig {
    pub name: String,
    pub secure: bool,
    pub http_only: bool,
    pub same_site: SameSite,
    pub path: String,
    pub max_age_secs: Option<u64>,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: "session".to_string(),
            secure: true,
            http_only: true,
            same_site: SameSite::Lax,
            path: "/".to_string(),
            max_age_secs: None,
        }
    }
}

impl CookieConfig {
    /// Build Set-Cookie header value
    ///
    /// The value is percent-encoded; read it back with [`extract_cookie_decoded`].
    pub fn build_set_cookie(&self, value: &str) -> String {
        let mut cookie = format!("{}={}", self.name, urlencoding::encode(value));

        cookie.push_str(&format!("; Path={}", self.path));
        if let Some(max_age) = self.max_age_secs {
            cookie.push_str(&format!("; Max-Age={}", max_age));
        }
        if self.http_only {
            cookie.push_str("; HttpOnly");
        }
        if self.secure {
            cookie.push_str("; Secure");
        }
        cookie.push_str(&format!("; SameSite={}", self.same_site.as_str()));

        cookie
    }

    /// Build Set-Cookie header for deletion (expired)
    pub fn build_delete_cookie(&self) -> String {
        let mut cookie = format!("{}=; Path={}; Max-Age=0", self.name, self.path);
        if self.http_only {
            cookie.push_str("; HttpOnly");
        }
        if self.secure {
            cookie.push_str("; Secure");
        }
        cookie.push_str(&format!("; SameSite={}", self.same_site.as_str()));
        cookie
    }
}

/// Extract a cookie value from headers
pub fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .find_map(|cookie| {
            let (key, value) = cookie.trim().split_once('=')?;

            if key == name {
                Some(value.to_string())
            } else {
                None
            }
        })
}

/// Extract a cookie value and percent-decode it
///
/// Values that do not decode to UTF-8 are treated as absent.
pub fn extract_cookie_decoded(headers: &HeaderMap, name: &str) -> Option<String> {
    let raw = extract_cookie(headers, name)?;
    urlencoding::decode(&raw).ok().map(|value| value.into_owned())
}

/// Whether the request reached us over HTTPS
///
/// Checks the request URI scheme first, then the reverse proxy headers
/// `X-Forwarded-Proto: https` and `X-Forwarded-Ssl: on`.
pub fn is_secure_request(headers: &HeaderMap, uri: &Uri) -> bool {
    if uri.scheme_str() == Some("https") {
        return true;
    }

    let header_is = |name: &str, expected: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.trim().eq_ignore_ascii_case(expected))
    };

    header_is("x-forwarded-proto", "https") || header_is("x-forwarded-ssl", "on")
}
