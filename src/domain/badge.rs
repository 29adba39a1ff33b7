use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Everything except RFC 3986 unreserved characters.
const BRANCH_ESCAPE: &AsciiSet =
    &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

/// Markdown for a GitHub Actions status badge linking to the workflow page.
///
/// The branch is percent-encoded, so `feature/x` becomes `feature%2Fx`.
pub fn badge_markdown(repo: &str, workflow: &str, title: &str, branch: &str) -> String {
    let page = format!("https://github.com/{repo}/actions/workflows/{workflow}");
    let branch = utf8_percent_encode(branch, BRANCH_ESCAPE);
    format!("[![{title}]({page}/badge.svg?branch={branch})]({page})")
}
