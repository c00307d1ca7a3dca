//! URL extraction with scheme normalization, hosts, and TLDs.
//!
//! URL-shaped tokens are accepted without validation. Matched tokens are
//! normalized before entering the engine: anything starting
//! (case-insensitively) with `www` or `ftp` gets an `http://` prefix, so
//! the base summary already contains normalized forms. Hosts and last-label
//! TLDs are derived from the normalized URLs and ranked with the standard
//! descending-frequency / first-occurrence rules.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::engine::{build_summary, PrecomputedMatches};
use crate::error::Result;
use crate::input::IntoTexts;
use crate::patterns;
use crate::summary::{rank_by_frequency, ExtractionSummary};

/// URL summary: base shape plus host and TLD rankings.
#[derive(Debug, Clone)]
pub struct UrlSummary {
    /// Base summary over normalized URLs, feature name `url`.
    pub base: ExtractionSummary,
    /// Per-record hosts, parallel to `base.matches`. A URL with no
    /// scheme separator has an empty host, mirroring network-location
    /// parsing rules.
    pub hosts: Vec<Vec<String>>,
    /// Per-record last-label TLDs, parallel to `hosts`.
    pub tlds: Vec<Vec<String>>,
    /// Hosts ranked by descending frequency.
    pub top_domains: Vec<(String, usize)>,
    /// TLDs ranked by descending frequency.
    pub top_tlds: Vec<(String, usize)>,
}

impl Serialize for UrlSummary {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        self.base.write_fields(&mut map)?;
        map.serialize_entry("top_domains", &self.top_domains)?;
        map.serialize_entry("top_tlds", &self.top_tlds)?;
        map.end()
    }
}

/// The network-location segment of a URL: everything between `://` and the
/// first `/`, `?`, or `#`. URLs without a scheme separator have none.
fn host_of(url: &str) -> String {
    match url.find("://") {
        Some(pos) => url[pos + 3..]
            .split(['/', '?', '#'])
            .next()
            .unwrap_or("")
            .to_string(),
        None => String::new(),
    }
}

/// The substring after the last `.` of a host.
fn tld_of(host: &str) -> String {
    host.rsplit('.').next().unwrap_or("").to_string()
}

/// Summarize URL-shaped tokens in `texts`.
///
/// This does NOT validate URLs — `www.a.b` counts as a URL.
///
/// # Examples
///
/// ```
/// use lexstats::extract_urls;
///
/// let summary = extract_urls("two: http://a.com www.b.com")?;
/// assert_eq!(summary.base.flat, vec!["http://a.com", "http://www.b.com"]);
/// assert_eq!(summary.hosts[0][1], "www.b.com");
/// # Ok::<(), lexstats::ExtractError>(())
/// ```
pub fn extract_urls<T: IntoTexts>(texts: T) -> Result<UrlSummary> {
    let records = texts.into_texts();

    // Match on original-case text, then normalize in place; the engine
    // sees the normalized lists.
    let normalized: Vec<Vec<String>> = records
        .iter()
        .map(|record| {
            patterns::URL
                .find_iter(record)
                .map(|m| {
                    let url = m.as_str();
                    let lowered = url.to_lowercase();
                    if lowered.starts_with("www") || lowered.starts_with("ftp") {
                        format!("http://{url}")
                    } else {
                        url.to_string()
                    }
                })
                .collect()
        })
        .collect();

    let base = build_summary(&records, &PrecomputedMatches::new(normalized), "url")?;

    let hosts: Vec<Vec<String>> = base
        .matches
        .iter()
        .map(|urls| urls.iter().map(|url| host_of(url)).collect())
        .collect();
    let tlds: Vec<Vec<String>> = hosts
        .iter()
        .map(|record_hosts| record_hosts.iter().map(|host| tld_of(host)).collect())
        .collect();

    let hosts_flat: Vec<String> = hosts.iter().flatten().cloned().collect();
    let tlds_flat: Vec<String> = tlds.iter().flatten().cloned().collect();
    let top_domains = rank_by_frequency(&hosts_flat);
    let top_tlds = rank_by_frequency(&tlds_flat);

    Ok(UrlSummary {
        base,
        hosts,
        tlds,
        top_domains,
        top_tlds,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const POSTS: [&str; 4] = [
        "one link http://example.com",
        "two: http://a.com www.b.com",
        "no links here",
        "long url http://example.com/one/two/?1=one&2=two",
    ];

    #[test]
    fn test_www_token_gets_scheme_prefix() {
        let summary = extract_urls(&POSTS).unwrap();
        assert_eq!(
            summary.base.matches[1],
            vec!["http://a.com", "http://www.b.com"]
        );
        assert_eq!(summary.hosts[1], vec!["a.com", "www.b.com"]);
    }

    #[test]
    fn test_counts_and_freq() {
        let summary = extract_urls(&POSTS).unwrap();
        assert_eq!(summary.base.counts, vec![1, 2, 0, 1]);
        assert_eq!(summary.base.count_freq, vec![(0, 1), (1, 2), (2, 1)]);
        assert_eq!(summary.base.overview.num_matches, 4);
        assert_eq!(summary.base.overview.unique_matches, 4);
    }

    #[test]
    fn test_top_domains_and_tlds() {
        let summary = extract_urls(&POSTS).unwrap();
        assert_eq!(summary.top_domains[0], ("example.com".to_string(), 2));
        assert_eq!(summary.top_tlds, vec![("com".to_string(), 4)]);
    }

    #[test]
    fn test_path_and_query_excluded_from_host() {
        let summary = extract_urls("go http://example.com/one/two/?1=one").unwrap();
        assert_eq!(summary.hosts[0], vec!["example.com"]);
    }

    #[test]
    fn test_ftp_token_also_prefixed() {
        let summary = extract_urls("get ftp://files.example.org/x").unwrap();
        assert_eq!(summary.base.flat, vec!["http://ftp://files.example.org/x"]);
    }

    #[test]
    fn test_bare_domain_counts_but_has_no_host() {
        let summary = extract_urls("visit example.org today").unwrap();
        assert_eq!(summary.base.flat, vec!["example.org"]);
        assert_eq!(summary.hosts[0], vec![""]);
        assert_eq!(summary.top_tlds, vec![("".to_string(), 1)]);
    }

    #[test]
    fn test_original_case_preserved() {
        let summary = extract_urls("see HTTP://Example.COM/Path").unwrap();
        assert_eq!(summary.base.flat, vec!["HTTP://Example.COM/Path"]);
        assert_eq!(summary.hosts[0], vec!["Example.COM"]);
    }

    #[test]
    fn test_serialized_keys() {
        let summary = extract_urls("at http://x.io").unwrap();
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["urls"][0][0], "http://x.io");
        assert_eq!(json["top_domains"][0][0], "x.io");
        assert_eq!(json["top_tlds"][0][0], "io");
        assert_eq!(json["overview"]["num_urls"], 1);
    }
}
