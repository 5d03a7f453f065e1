use clap::Parser;
use std::path::PathBuf;
use std::process;

use har2jmx::config::{load_config_file, normalize_domain, ConvertConfig};
use har2jmx::convert::run_convert;
use har2jmx::error::Result;

#[derive(Parser)]
#[command(name = "har2jmx")]
#[command(about = "Convert HAR captures into parameterized JMeter test plans.")]
#[command(version)]
struct Cli {
    /// Input HAR file
    input: PathBuf,

    /// Output JMX file
    output: PathBuf,

    /// Only convert entries to this host (repeatable); when absent, any
    /// non-ignored host is converted
    #[arg(long = "domain", value_name = "HOST")]
    domains: Vec<String>,

    /// Accepted HTTP method (repeatable; default: GET, POST)
    #[arg(long = "method", value_name = "METHOD")]
    methods: Vec<String>,

    /// Drop entries whose URL contains this substring; replaces the built-in
    /// analytics ignore list (repeatable)
    #[arg(long = "ignore", value_name = "SUBSTRING")]
    ignores: Vec<String>,

    /// TOML file with converter overrides
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Display name of the generated test plan
    #[arg(long, value_name = "NAME")]
    plan_name: Option<String>,

    /// Variable name for the base-URL placeholder (default: base_url)
    #[arg(long, value_name = "NAME")]
    base_url_var: Option<String>,

    /// Attach a cookie manager for entries with recorded cookies
    #[arg(long)]
    cookies: bool,
}

fn build_config(cli: &Cli) -> Result<ConvertConfig> {
    let mut config = ConvertConfig::default();

    if let Some(path) = &cli.config {
        let file = load_config_file(path)?;
        config.apply_file(&file);
    }

    // CLI flags win over file values.
    if !cli.domains.is_empty() {
        config.allowed_domains = cli.domains.iter().map(|d| normalize_domain(d)).collect();
    }
    if !cli.methods.is_empty() {
        config.allowed_methods = cli.methods.iter().map(|m| m.to_uppercase()).collect();
    }
    if !cli.ignores.is_empty() {
        config.ignore_url_substrings = cli.ignores.iter().map(|s| s.to_lowercase()).collect();
    }
    if let Some(name) = &cli.plan_name {
        config.plan_name = name.clone();
    }
    if let Some(var) = &cli.base_url_var {
        config.base_url_var = var.clone();
    }
    if cli.cookies {
        config.include_cookies = true;
    }

    Ok(config)
}

fn main() {
    let cli = Cli::parse();

    let result = build_config(&cli).and_then(|config| run_convert(&cli.input, &cli.output, &config));

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
