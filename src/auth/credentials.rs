// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 HealthTrack

//! Credential extraction from request metadata.
//!
//! A credential is an opaque token string carried in one of two places:
//! the `Authorization` header as a bearer token, or the `token` cookie.
//! The header wins when both are present: API and service clients send
//! bearer headers, browser sessions ride on the cookie. No other location
//! is consulted.

use axum::http::{header, HeaderMap};

/// Literal prefix of a bearer `Authorization` value. Case-sensitive, one
/// space; anything else falls through to the cookie.
const BEARER_PREFIX: &str = "Bearer ";

/// Name of the session cookie carrying the access token.
pub const TOKEN_COOKIE: &str = "token";

/// Pull the candidate credential from a request's headers, if any.
///
/// The returned string is unverified.
pub fn extract_credential(headers: &HeaderMap) -> Option<String> {
    if let Some(value) = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
    {
        if let Some(token) = value.strip_prefix(BEARER_PREFIX) {
            return Some(token.to_string());
        }
    }

    cookie_value(headers, TOKEN_COOKIE)
}

/// Scan `Cookie` headers for a cookie with the given name.
fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
}
