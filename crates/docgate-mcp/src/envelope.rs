//! Success/error envelopes for tool results.
//!
//! Gateway failures are never protocol errors: they come back as a tool
//! result flagged `is_error` whose body names the error kind and carries
//! the details a caller needs to recover.

use rmcp::model::{CallToolResult, Content};
use serde_json::{json, Value};

use docgate_core::{FetchFailure, GatewayError, SiteSearch};

/// A successful plain-text result.
pub fn text(body: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(body)])
}

/// A successful JSON result.
pub fn json(body: &Value) -> CallToolResult {
    let rendered = serde_json::to_string_pretty(body).unwrap_or_else(|_| "{}".to_string());
    CallToolResult::success(vec![Content::text(rendered)])
}

/// A failed result describing `err`.
pub fn error(err: &GatewayError) -> CallToolResult {
    let rendered =
        serde_json::to_string_pretty(&error_body(err)).unwrap_or_else(|_| err.to_string());
    CallToolResult::error(vec![Content::text(rendered)])
}

/// JSON body for a gateway failure.
pub fn error_body(err: &GatewayError) -> Value {
    let mut body = json!({
        "error": err.kind(),
        "message": err.to_string(),
    });
    match err {
        GatewayError::UnknownSite(e) => {
            body["site"] = json!(e.key);
            body["valid_sites"] = json!(e.valid_keys);
        }
        GatewayError::Fetch(e) => {
            body["url"] = json!(e.locator);
            match &e.failure {
                FetchFailure::Status(code) => body["status"] = json!(code),
                FetchFailure::Transport(cause) => body["cause"] = json!(cause),
            }
        }
    }
    body
}

/// JSON body for a search, keeping at most `limit` matches.
pub fn search_body(found: SiteSearch, limit: Option<usize>) -> Value {
    let total = found.result.len();
    let result = match limit {
        Some(limit) => found.result.truncated(limit),
        None => found.result,
    };

    let mut body = json!({
        "site": found.site,
        "url": found.locator,
        "query": found.query,
        "case_insensitive": found.case_insensitive,
        "total": total,
        "returned": result.len(),
        "matches": result.matches,
    });
    if total == 0 {
        body["message"] = json!(format!(
            "No matches found for '{}' in {}",
            found.query,
            found.site.descriptor().display_name
        ));
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;
    use docgate_core::{search, FetchError, SiteKey, UnknownSiteError};

    fn found(text: &str, query: &str) -> SiteSearch {
        SiteSearch {
            site: SiteKey::AiSdk,
            locator: "https://ai-sdk.dev/llms.txt".to_string(),
            query: query.to_string(),
            case_insensitive: true,
            result: search::search(text, query, true),
        }
    }

    #[test]
    fn unknown_site_body_lists_valid_sites() {
        let err = GatewayError::UnknownSite(UnknownSiteError {
            key: "nope".to_string(),
            valid_keys: vec!["mcp".to_string(), "ai-sdk".to_string()],
        });
        let body = error_body(&err);
        assert_eq!(body["error"], "unknown_site");
        assert_eq!(body["site"], "nope");
        assert_eq!(body["valid_sites"], json!(["mcp", "ai-sdk"]));
    }

    #[test]
    fn fetch_body_carries_status_or_cause() {
        let body = error_body(&FetchError::status("https://x/y", 404).into());
        assert_eq!(body["error"], "fetch_failed");
        assert_eq!(body["url"], "https://x/y");
        assert_eq!(body["status"], 404);

        let body = error_body(&FetchError::transport("https://x/y", "timed out").into());
        assert_eq!(body["cause"], "timed out");
        assert!(body.get("status").is_none());
    }

    #[test]
    fn error_result_is_flagged() {
        let result = error(&FetchError::status("https://x", 500).into());
        assert_eq!(result.is_error, Some(true));
        assert_eq!(text("ok").is_error, Some(false));
    }

    #[test]
    fn search_body_reports_total_and_truncates() {
        let body = search_body(found("alpha\nbeta\nalpha\ngamma", "alpha"), Some(1));
        assert_eq!(body["site"], "ai-sdk");
        assert_eq!(body["total"], 2);
        assert_eq!(body["returned"], 1);
        assert_eq!(body["matches"][0]["line_index"], 0);
        assert_eq!(body["matches"][0]["line"], "alpha");
        assert!(body.get("message").is_none());
    }

    #[test]
    fn search_body_without_limit_keeps_all() {
        let body = search_body(found("a\nb\nc", ""), None);
        assert_eq!(body["returned"], 3);
    }

    #[test]
    fn empty_search_has_message() {
        let body = search_body(found("alpha\nbeta", "delta"), Some(10));
        assert_eq!(body["total"], 0);
        assert_eq!(body["matches"], json!([]));
        assert_eq!(body["message"], "No matches found for 'delta' in Vercel AI SDK");
    }
}
