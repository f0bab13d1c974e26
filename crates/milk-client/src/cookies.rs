//! Cookie jar that can be persisted between process runs.
//!
//! The API authenticates with an HTTP-only cookie (`ceialmilk_token`) plus a
//! refresh cookie. A browser keeps these for us; a CLI has to write them to
//! disk and bring them back. [`SessionJar`] delegates to reqwest's [`Jar`] and
//! keeps a copy of every live `Set-Cookie` value so it can be snapshotted.
//!
//! A relative `Max-Age` is rewritten to an absolute `Expires` when recorded,
//! so a saved cookie keeps the deadline the server gave it.

use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError, RwLock};

use chrono::{DateTime, TimeDelta, Utc};
use reqwest::Url;
use reqwest::cookie::{CookieStore, Jar};
use reqwest::header::HeaderValue;

/// Name of the access-token cookie set by `/api/auth/login`.
pub const TOKEN_COOKIE: &str = "ceialmilk_token";

/// `Expires` layout from RFC 6265 (`Wed, 21 Oct 2015 07:28:00 GMT`).
const EXPIRES_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

#[derive(Debug, Default)]
pub struct SessionJar {
    inner: RwLock<Jar>,
    raw: Mutex<BTreeMap<String, String>>,
}

impl SessionJar {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every cookie currently held, as the raw `Set-Cookie` strings the
    /// server sent. Ordered by cookie name.
    #[must_use]
    pub fn snapshot(&self) -> Vec<String> {
        self.raw
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .cloned()
            .collect()
    }

    /// Re-seed the jar from a previous [`snapshot`](Self::snapshot).
    /// Cookies whose saved expiry has passed are dropped.
    pub fn restore(&self, url: &Url, cookies: &[String]) {
        let now = Utc::now();
        let jar = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        for raw in cookies {
            if is_expired(raw, now) {
                tracing::debug!(cookie = cookie_name(raw), "dropping expired saved cookie");
                continue;
            }
            let absolute = self.record(raw, now);
            jar.add_cookie_str(&absolute, url);
        }
    }

    /// Forget every cookie, both the ones sent on requests and the snapshot.
    pub fn clear(&self) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = Jar::default();
        self.raw.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }

    /// Whether an access-token cookie is currently held.
    #[must_use]
    pub fn has_token(&self) -> bool {
        self.raw
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(TOKEN_COOKIE)
    }

    /// Track `raw` for snapshots and return it with any `Max-Age` made
    /// absolute.
    fn record(&self, raw: &str, now: DateTime<Utc>) -> String {
        let absolute = absolute_expiry(raw, now);
        let Some((name, value)) = split_name_value(raw) else {
            return absolute;
        };
        let mut map = self.raw.lock().unwrap_or_else(PoisonError::into_inner);
        if value.is_empty() || is_expired(raw, now) {
            map.remove(name);
        } else {
            map.insert(name.to_string(), absolute.clone());
        }
        absolute
    }
}

impl CookieStore for SessionJar {
    fn set_cookies(&self, cookie_headers: &mut dyn Iterator<Item = &HeaderValue>, url: &Url) {
        let headers: Vec<&HeaderValue> = cookie_headers.collect();
        let now = Utc::now();
        for header in &headers {
            if let Ok(raw) = header.to_str() {
                self.record(raw, now);
            }
        }
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .set_cookies(&mut headers.into_iter(), url);
    }

    fn cookies(&self, url: &Url) -> Option<HeaderValue> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .cookies(url)
    }
}

/// `name=value; Path=/; ...` → `("name", "value")`.
fn split_name_value(raw: &str) -> Option<(&str, &str)> {
    let pair = raw.split(';').next()?;
    let (name, value) = pair.split_once('=')?;
    let name = name.trim();
    (!name.is_empty()).then_some((name, value.trim()))
}

fn cookie_name(raw: &str) -> &str {
    split_name_value(raw).map_or("", |(name, _)| name)
}

/// `(key, value)` of every attribute after the name/value pair.
fn attributes(raw: &str) -> impl Iterator<Item = (&str, &str)> {
    raw.split(';')
        .skip(1)
        .filter_map(|attr| attr.split_once('='))
        .map(|(key, value)| (key.trim(), value.trim()))
}

fn max_age(raw: &str) -> Option<i64> {
    attributes(raw)
        .find(|(key, _)| key.eq_ignore_ascii_case("max-age"))
        .and_then(|(_, value)| value.parse().ok())
}

fn expires(raw: &str) -> Option<DateTime<Utc>> {
    attributes(raw)
        .find(|(key, _)| key.eq_ignore_ascii_case("expires"))
        .and_then(|(_, value)| DateTime::parse_from_rfc2822(value).ok())
        .map(|at| at.with_timezone(&Utc))
}

/// A non-positive `Max-Age` is how the server clears a cookie; an `Expires`
/// in the past means the same. `Max-Age` wins when both are present.
fn is_expired(raw: &str, now: DateTime<Utc>) -> bool {
    match max_age(raw) {
        Some(secs) => secs <= 0,
        None => expires(raw).is_some_and(|at| at <= now),
    }
}

/// Replace a positive `Max-Age` with the `Expires` it stands for at `now`.
fn absolute_expiry(raw: &str, now: DateTime<Utc>) -> String {
    let Some(deadline) = max_age(raw)
        .filter(|secs| *secs > 0)
        .and_then(TimeDelta::try_seconds)
        .and_then(|ttl| now.checked_add_signed(ttl))
    else {
        return raw.to_string();
    };
    let mut parts: Vec<String> = raw
        .split(';')
        .map(str::trim)
        .filter(|part| {
            part.split_once('=').is_none_or(|(key, _)| {
                let key = key.trim();
                !key.eq_ignore_ascii_case("max-age") && !key.eq_ignore_ascii_case("expires")
            })
        })
        .map(str::to_string)
        .collect();
    parts.push(format!("Expires={}", deadline.format(EXPIRES_FORMAT)));
    parts.join("; ")
}
