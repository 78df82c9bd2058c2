use thiserror::Error;

use crate::models::{ContentBundle, Verdict};

/// Literal token the supervisor must emit to approve a draft
pub const APPROVAL_KEYWORD: &str = "APPROVED";

/// Markdown decoration stripped from line ends before matching the keyword
const DECORATION: &[char] = &['#', '*', '_', '`', '-', '>', '.', '!', ':', ',', ' ', '\t'];

/// Contract violations from the finalize stage's strict-JSON response
#[derive(Debug, Error)]
pub enum BundleError {
    #[error("no JSON object found in response")]
    NoJson,
    #[error("bundle JSON is invalid: {0}")]
    Invalid(#[from] serde_json::Error),
}

/// Decide whether a supervisor response approves the draft.
///
/// A response approves iff some line, once stripped of surrounding Markdown
/// decoration, begins with the uppercase token `APPROVED` at a word
/// boundary. Anything else (including "NOT APPROVED" and lowercase forms)
/// means the response is revision notes.
pub fn parse_verdict(response: &str) -> Verdict {
    if response.lines().any(line_approves) {
        Verdict::Approved
    } else {
        Verdict::Revise
    }
}

fn line_approves(line: &str) -> bool {
    let stripped = line.trim().trim_matches(DECORATION);
    match stripped.strip_prefix(APPROVAL_KEYWORD) {
        Some(rest) => rest
            .chars()
            .next()
            .is_none_or(|c| !c.is_ascii_alphanumeric()),
        None => false,
    }
}

/// Slice out the first balanced JSON object in a response, tolerating code
/// fences and surrounding prose. Braces inside string values do not count
/// toward nesting.
pub fn extract_json_object(response: &str) -> Option<&str> {
    let start = response.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in response[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&response[start..=start + offset]);
                }
            }
            _ => {}
        }
    }

    None
}

/// Parse a finalizer response into a bundle, requiring all five contract
/// keys with the right types
pub fn parse_bundle(response: &str) -> Result<ContentBundle, BundleError> {
    let json = extract_json_object(response).ok_or(BundleError::NoJson)?;
    let bundle: ContentBundle = serde_json::from_str(json)?;
    Ok(bundle)
}
