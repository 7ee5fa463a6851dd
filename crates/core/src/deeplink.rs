//! Deep-link parsing
//!
//! Two link formats ride in the URL fragment: a generic app launch
//! (`#app+<id>?<query>`) and the KYC magic link, which arrives in one of
//! three shapes depending on which side minted it.

use url::form_urlencoded;

use crate::types::KycAuthParams;

/// App launch target extracted from a fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppLink {
    pub app_id: String,
    pub query: String,
}

fn strip_fragment_marker(input: &str) -> &str {
    input.strip_prefix('#').unwrap_or(input)
}

fn query_param(query: &str, name: &str) -> Option<String> {
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

/// Parse an `app+<id>?<query>` launch link.
///
/// Returns `None` when the `app+` marker is absent or the app id is empty.
pub fn parse_app_link(fragment: &str) -> Option<AppLink> {
    let clean = strip_fragment_marker(fragment);
    let (_, after_marker) = clean.split_once("app+")?;
    let (app_id, query) = match after_marker.split_once('?') {
        Some((id, query)) => (id, query),
        None => (after_marker, ""),
    };
    if app_id.is_empty() {
        return None;
    }
    Some(AppLink {
        app_id: app_id.to_string(),
        query: query.to_string(),
    })
}

fn params_from_query(query: &str) -> Option<KycAuthParams> {
    let uid = query_param(query, "uid")?;
    let code = query_param(query, "code")?;
    if uid.is_empty() || code.is_empty() {
        return None;
    }
    Some(KycAuthParams {
        uid,
        code,
        kind: query_param(query, "type").filter(|kind| !kind.is_empty()),
    })
}

/// Parse KYC magic-link credentials out of a fragment or query string.
///
/// Accepted shapes, in priority order:
/// 1. `kyc?uid=..&code=..&type=..`
/// 2. a bare query string with the same parameters
/// 3. positional `<uid>/<code>[/<type>]`
///
/// The first shape yielding both a uid and a code wins. The values are not
/// validated beyond being non-empty.
pub fn parse_kyc_link(input: &str) -> Option<KycAuthParams> {
    let clean = strip_fragment_marker(input);

    if let Some(query) = clean.strip_prefix("kyc?")
        && let Some(params) = params_from_query(query)
    {
        return Some(params);
    }

    if let Some(params) = params_from_query(clean) {
        return Some(params);
    }

    let mut parts = clean.split('/');
    let uid = parts.next()?;
    let code = parts.next()?;
    if uid.is_empty() || code.is_empty() {
        return None;
    }
    Some(KycAuthParams {
        uid: uid.to_string(),
        code: code.to_string(),
        kind: parts.next().filter(|kind| !kind.is_empty()).map(str::to_string),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_link_with_query() {
        let link = parse_app_link("#app+gift-cards?ref=menu").unwrap();
        assert_eq!(link.app_id, "gift-cards");
        assert_eq!(link.query, "ref=menu");
    }

    #[test]
    fn test_app_link_without_query() {
        let link = parse_app_link("app+statement").unwrap();
        assert_eq!(link.app_id, "statement");
        assert_eq!(link.query, "");
    }

    #[test]
    fn test_app_link_rejects_missing_marker_or_id() {
        assert_eq!(parse_app_link("#gift-cards?x=1"), None);
        assert_eq!(parse_app_link("#app+?x=1"), None);
        assert_eq!(parse_app_link(""), None);
    }

    #[test]
    fn test_kyc_link_query_shape() {
        let params = parse_kyc_link("kyc?uid=a&code=b").unwrap();
        assert_eq!(params.uid, "a");
        assert_eq!(params.code, "b");
        assert_eq!(params.kind, None);
    }

    #[test]
    fn test_kyc_link_query_shape_with_type_and_hash() {
        let params = parse_kyc_link("#kyc?uid=u1&code=c1&type=resubmit").unwrap();
        assert_eq!(params.uid, "u1");
        assert_eq!(params.code, "c1");
        assert_eq!(params.kind.as_deref(), Some("resubmit"));
    }

    #[test]
    fn test_kyc_link_bare_query_shape() {
        let params = parse_kyc_link("uid=a&code=b&type=t").unwrap();
        assert_eq!(params.uid, "a");
        assert_eq!(params.code, "b");
        assert_eq!(params.kind.as_deref(), Some("t"));
    }

    #[test]
    fn test_kyc_link_positional_shape() {
        let params = parse_kyc_link("a/b/c").unwrap();
        assert_eq!(params.uid, "a");
        assert_eq!(params.code, "b");
        assert_eq!(params.kind.as_deref(), Some("c"));

        let params = parse_kyc_link("a/b").unwrap();
        assert_eq!(params.kind, None);
    }

    #[test]
    fn test_kyc_link_percent_decoding() {
        let params = parse_kyc_link("kyc?uid=a%40b&code=c%2Fd").unwrap();
        assert_eq!(params.uid, "a@b");
        assert_eq!(params.code, "c/d");
    }

    #[test]
    fn test_kyc_link_no_match() {
        assert_eq!(parse_kyc_link(""), None);
        assert_eq!(parse_kyc_link("kyc?uid=a"), None);
        assert_eq!(parse_kyc_link("uid=a"), None);
        assert_eq!(parse_kyc_link("just-a-token"), None);
        assert_eq!(parse_kyc_link("/b/c"), None);
    }

    #[test]
    fn test_kyc_link_query_shape_wins_over_positional() {
        // "kyc?uid=a&code=b" also splits on '/', but the query shape is
        // checked first.
        let params = parse_kyc_link("kyc?uid=a&code=b").unwrap();
        assert_eq!(params.uid, "a");
    }
}
