//! Domain extraction, normalization and matching.
//!
//! Key functions:
//! - `extract_domain()` - Pulls the authority out of a feed URL
//! - `normalize_domain()` - Normalizes domain names (lowercase, trim, removes www)
//! - `domains_match()` - Decides whether a feed domain and a ranked domain are the same site

use log::warn;

const WWW_PREFIX: &str = "www.";

/// Normalizes a domain for comparison.
///
/// Lower-cases and trims the input, then strips a leading `www.`. The strip
/// repeats until the result no longer starts with `www.`, so the function is
/// idempotent. Total over any string: malformed input is treated as ordinary text.
pub fn normalize_domain(domain: &str) -> String {
    let mut normalized = domain.trim().to_lowercase();
    while let Some(rest) = normalized.strip_prefix(WWW_PREFIX) {
        normalized = rest.trim_start().to_string();
    }
    normalized
}

/// Returns true if `domain` is a strict dot-delimited subdomain of `parent`.
fn is_subdomain_of(domain: &str, parent: &str) -> bool {
    domain
        .strip_suffix(parent)
        .is_some_and(|head| head.ends_with('.'))
}

/// Checks whether a feed's domain and a ranking entry's domain refer to the same site.
///
/// Both sides are normalized first. The first rule that fires wins:
///
/// 1. Exact equality.
/// 2. The feed domain is a subdomain of the ranked domain
///    (`blog.example.com` vs `example.com`).
/// 3. The ranked domain is a subdomain of the feed domain.
/// 4. The ranked domain carries a path (`devblogs.microsoft.com/oldnewthing`):
///    the part before the first `/` is compared as in rules 1 to 3, so
///    `microsoft.com`, `devblogs.microsoft.com` and `eng.devblogs.microsoft.com`
///    all match that entry.
///
/// Only the ranked side ever has its path stripped. A feed domain containing
/// a `/` is compared verbatim.
pub fn domains_match(feed_domain: &str, ranked_domain: &str) -> bool {
    let feed = normalize_domain(feed_domain);
    let ranked = normalize_domain(ranked_domain);

    if feed == ranked {
        return true;
    }

    if is_subdomain_of(&feed, &ranked) {
        return true;
    }

    if is_subdomain_of(&ranked, &feed) {
        return true;
    }

    if let Some((base, _path)) = ranked.split_once('/') {
        if feed == base || is_subdomain_of(&feed, base) || is_subdomain_of(base, &feed) {
            return true;
        }
    }

    false
}

/// Extracts the domain of a feed URL.
///
/// Returns the URL's host (with the port when one is spelled out and is not
/// the scheme default), lower-cased and without a leading `www.`. URLs that do
/// not parse as absolute URLs, or that have no host, yield an empty string so
/// a single bad row never aborts a run.
pub fn extract_domain(url: &str) -> String {
    let parsed = match url::Url::parse(url) {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!("Could not parse feed URL {url:?}: {e}");
            return String::new();
        }
    };

    let Some(host) = parsed.host_str() else {
        warn!("Feed URL has no host component: {url}");
        return String::new();
    };

    let authority = match parsed.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    };

    normalize_domain(&authority)
}
