use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Har2JmxError, Result};

/// Converter configuration, fixed for the length of one run.
///
/// The defaults mirror the capture setup this tool grew out of: replay GETs
/// and POSTs, drop well-known analytics/telemetry noise, and never copy
/// transport-level headers into the generated plan.
#[derive(Clone, Debug)]
pub struct ConvertConfig {
    /// Accepted HTTP methods, uppercase.
    pub allowed_methods: HashSet<String>,
    /// Lowercase hostnames (no port) eligible for conversion. Empty set
    /// disables the domain gate and accepts any host.
    pub allowed_domains: HashSet<String>,
    /// Substrings matched case-insensitively against the full URL; a hit
    /// drops the entry regardless of method or domain.
    pub ignore_url_substrings: Vec<String>,
    /// Lowercase header names never copied into the header manager.
    pub skip_headers: HashSet<String>,
    /// Display name of the generated test plan.
    pub plan_name: String,
    /// Variable name substituted for the captured origin, rendered as
    /// `${base_url}` in the plan.
    pub base_url_var: String,
    /// Attach a cookie manager per sampler for entries with recorded cookies.
    pub include_cookies: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            allowed_methods: ["GET", "POST"].iter().map(|s| s.to_string()).collect(),
            allowed_domains: HashSet::new(),
            ignore_url_substrings: [
                "google-analytics.com",
                "optimizely",
                "hotjar",
                "logz.io",
                "fonts.gstatic.com",
                "doubleclick.net",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            skip_headers: ["content-length", "host", "accept-encoding"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            plan_name: "HAR Import Plan".to_string(),
            base_url_var: "base_url".to_string(),
            include_cookies: false,
        }
    }
}

impl ConvertConfig {
    /// The placeholder token written into the plan, e.g. `${base_url}`.
    pub fn base_url_placeholder(&self) -> String {
        format!("${{{}}}", self.base_url_var)
    }

    /// Layer file values over the defaults. Lists replace, they do not merge.
    pub fn apply_file(&mut self, file: &FileConfig) {
        if let Some(methods) = &file.allowed_methods {
            self.allowed_methods = methods.iter().map(|m| m.to_uppercase()).collect();
        }
        if let Some(domains) = &file.allowed_domains {
            self.allowed_domains = domains.iter().map(|d| normalize_domain(d)).collect();
        }
        if let Some(subs) = &file.ignore_url_substrings {
            self.ignore_url_substrings = subs.iter().map(|s| s.to_lowercase()).collect();
        }
        if let Some(headers) = &file.skip_headers {
            self.skip_headers = headers.iter().map(|h| h.to_lowercase()).collect();
        }
        if let Some(name) = &file.plan_name {
            self.plan_name = name.clone();
        }
        if let Some(var) = &file.base_url_var {
            self.base_url_var = var.clone();
        }
        if let Some(cookies) = file.include_cookies {
            self.include_cookies = cookies;
        }
    }
}

/// Normalize a configured domain the same way entry hosts are normalized:
/// lowercase, port stripped.
pub fn normalize_domain(domain: &str) -> String {
    let lower = domain.trim().to_lowercase();
    match lower.split_once(':') {
        Some((host, _port)) => host.to_string(),
        None => lower,
    }
}

/// Optional TOML overrides for [`ConvertConfig`]; every field may be absent.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub allowed_methods: Option<Vec<String>>,
    pub allowed_domains: Option<Vec<String>>,
    pub ignore_url_substrings: Option<Vec<String>>,
    pub skip_headers: Option<Vec<String>>,
    pub plan_name: Option<String>,
    pub base_url_var: Option<String>,
    pub include_cookies: Option<bool>,
}

/// Load a TOML config file from disk.
pub fn load_config_file(path: &Path) -> Result<FileConfig> {
    let text = fs::read_to_string(path)?;
    toml::from_str(&text)
        .map_err(|e| Har2JmxError::Config(format!("{}: {e}", path.display())))
}
