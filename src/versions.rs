use crate::version::GoVersion;
use anyhow::{Context, Result};
use regex::Regex;
use std::collections::HashSet;

/// Fetch the release listing page and return the installable versions,
/// newest first. An empty page yields an empty list, not an error.
pub async fn fetch_versions(listing_url: &str) -> Result<Vec<GoVersion>> {
    tracing::debug!("Fetching Go release listing from: {}", listing_url);

    let response = reqwest::get(listing_url)
        .await
        .and_then(|r| r.error_for_status())
        .with_context(|| format!("Failed to fetch Go versions from {}", listing_url))?;
    let body = response.text().await?;

    extract_versions(&body)
}

/// Scrape every hyperlink target out of an HTML listing page and collect the
/// distinct versions whose final path segment matches the linux-amd64 archive
/// naming scheme, sorted in descending version order.
pub fn extract_versions(html: &str) -> Result<Vec<GoVersion>> {
    let href_re = Regex::new(r#"href=["']?([^"'\s>]+)"#)?;
    let archive_re = Regex::new(r"^go(\d+\.\d+(?:\.\d+)?)\.linux-amd64\.tar\.gz$")?;

    let mut seen = HashSet::new();
    let mut versions = Vec::new();

    for cap in href_re.captures_iter(html) {
        let target = &cap[1];
        if !target.ends_with(".tar.gz") {
            continue;
        }

        let filename = target.rsplit('/').next().unwrap_or(target);
        let m = match archive_re.captures(filename) {
            Some(m) => m,
            None => continue,
        };

        match m[1].parse::<GoVersion>() {
            Ok(version) => {
                if seen.insert(version.clone()) {
                    versions.push(version);
                }
            }
            Err(e) => tracing::debug!("Skipping unparsable version link {}: {}", filename, e),
        }
    }

    // Stable sort, so equal inputs produce identical output across calls.
    versions.sort_by(|a, b| b.cmp(a));

    Ok(versions)
}
