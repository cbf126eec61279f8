// Start of file: /src/request/locale.rs

// * Resolves the client locale from Accept-Language: highest quality wins,
// * ties keep header order, `*` and q=0 entries never win.

use std::fmt;

use axum::http::{header::ACCEPT_LANGUAGE, HeaderMap};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale(String);

impl Locale {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Picks the preferred language from every `Accept-Language` header,
    /// falling back to `default` when none is usable.
    pub fn resolve(headers: &HeaderMap, default: &str) -> Self {
        let mut best: Option<(&str, f32)> = None;

        let entries = headers
            .get_all(ACCEPT_LANGUAGE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(','));

        for entry in entries {
            let Some((tag, quality)) = parse_entry(entry) else {
                continue;
            };
            if best.is_none_or(|(_, q)| quality > q) {
                best = Some((tag, quality));
            }
        }

        match best {
            Some((tag, _)) => Self::new(tag),
            None => Self::new(default),
        }
    }
}

// "ko-KR;q=0.9" -> ("ko-KR", 0.9)
fn parse_entry(entry: &str) -> Option<(&str, f32)> {
    let mut parts = entry.split(';').map(str::trim);
    let tag: &str = parts.next().filter(|t| !t.is_empty() && *t != "*")?;

    let mut quality: f32 = 1.0;
    for param in parts {
        if let Some((name, value)) = param.split_once('=') {
            if name.trim().eq_ignore_ascii_case("q") {
                quality = value.trim().parse().ok().filter(|q: &f32| (0.0..=1.0).contains(q))?;
            }
        }
    }

    (quality > 0.0).then_some((tag, quality))
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}


// End of file: /src/request/locale.rs
