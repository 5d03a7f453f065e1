use url::Url;

use crate::config::ConvertConfig;
use crate::error::Result;
use crate::har::Entry;

/// A HAR entry that survived filtering, tagged with its 1-based position in
/// the original entry list. The sequence number names the sampler, so it
/// reflects the capture order even after other entries are dropped.
pub struct FilteredEntry<'a> {
    pub seq: usize,
    pub entry: &'a Entry,
}

/// Select the entries to convert, preserving capture order.
///
/// Rules short-circuit per entry: method gate, ignore-substring gate, then
/// domain gate. Rejections are silent. A candidate that reaches the domain
/// gate with an unparseable URL aborts the run; by that point the URL is
/// needed verbatim by the sampler builder, so there is nothing sensible to
/// emit for it.
pub fn filter_entries<'a>(
    entries: &'a [Entry],
    config: &ConvertConfig,
) -> Result<Vec<FilteredEntry<'a>>> {
    let mut kept = Vec::new();

    for (index, entry) in entries.iter().enumerate() {
        let method = entry.request.method.to_uppercase();
        if !config.allowed_methods.contains(&method) {
            continue;
        }

        let url_lower = entry.request.url.to_lowercase();
        if config
            .ignore_url_substrings
            .iter()
            .any(|sub| url_lower.contains(&sub.to_lowercase()))
        {
            continue;
        }

        let parsed = Url::parse(&entry.request.url)?;
        if !config.allowed_domains.is_empty() {
            let host = match parsed.host_str() {
                Some(host) => host.to_lowercase(),
                None => continue,
            };
            if !config.allowed_domains.contains(&host) {
                continue;
            }
        }

        kept.push(FilteredEntry {
            seq: index + 1,
            entry,
        });
    }

    Ok(kept)
}
