// SPDX-License-Identifier: MPL-2.0
//! Link construction carrying an explicit locale choice, plus the raw
//! query-string helpers shared with preference initialization.
//!
//! Paths are relative; there is no base URL anywhere in the site, so the
//! helpers work on the path/query/fragment split directly instead of going
//! through a full URL parser.

use crate::locale::LocalePreference;
use std::borrow::Cow;

const LANG_PARAM: &str = "lang";

/// Returns `pathname` carrying the given preference as a `lang` query
/// parameter.
///
/// `Auto` links stay clean so a visitor who never chose a language keeps
/// getting browser detection. Existing query parameters and fragments are
/// preserved; an existing `lang` value is replaced in place.
pub fn localized_href(pathname: &str, preference: LocalePreference) -> String {
    if preference == LocalePreference::Auto {
        return pathname.to_string();
    }

    let (without_fragment, fragment) = match pathname.split_once('#') {
        Some((head, fragment)) => (head, Some(fragment)),
        None => (pathname, None),
    };
    let (path, query) = match without_fragment.split_once('?') {
        Some((path, query)) => (path, query),
        None => (without_fragment, ""),
    };

    let query = set_query_param(query, LANG_PARAM, preference.as_str());
    let mut href = format!("{}?{}", path, query);
    if let Some(fragment) = fragment {
        href.push('#');
        href.push_str(fragment);
    }
    href
}

/// First value of `name` in a raw query string (no leading `?`),
/// percent-decoded.
pub(crate) fn query_param(query: &str, name: &str) -> Option<String> {
    for pair in query.trim_start_matches('?').split('&') {
        if pair.is_empty() {
            continue;
        }
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if decode(key) == name {
            return Some(decode(value).into_owned());
        }
    }
    None
}

/// Sets `name=value` in a raw query string, replacing the first existing
/// occurrence in place and dropping any duplicates.
fn set_query_param(query: &str, name: &str, value: &str) -> String {
    let mut pairs: Vec<(Cow<'_, str>, Cow<'_, str>)> = Vec::new();
    let mut replaced = false;
    for pair in query.split('&') {
        if pair.is_empty() {
            continue;
        }
        let (key, existing) = pair.split_once('=').unwrap_or((pair, ""));
        if decode(key) == name {
            if !replaced {
                pairs.push((Cow::Borrowed(name), Cow::Borrowed(value)));
                replaced = true;
            }
            continue;
        }
        pairs.push((decode(key), decode(existing)));
    }
    if !replaced {
        pairs.push((Cow::Borrowed(name), Cow::Borrowed(value)));
    }

    let encoded: Vec<String> = pairs
        .iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect();
    encoded.join("&")
}

fn decode(component: &str) -> Cow<'_, str> {
    // Undecodable input stays raw; these strings come from URLs we do not
    // control and must never make the helpers fail.
    urlencoding::decode(component).unwrap_or(Cow::Borrowed(component))
}
