//! # News Harvest
//!
//! A batch pipeline that fetches the homepage of one or more news sites,
//! extracts hyperlinks and article summaries, cleans the summary text, and
//! writes one CSV file per site.
//!
//! ## Architecture
//!
//! Each configured site runs the same three stages in sequence:
//!
//! 1. **Extract**: one HTTP GET, parsed into links and article blocks
//! 2. **Normalize**: each article summary is stripped of markup and
//!    punctuation, lowercased, and filtered of English stopwords
//! 3. **Write**: links and cleaned articles become a `Link,Title,Description`
//!    CSV at the site's destination path
//!
//! Sites are independent: they run concurrently, share no mutable state, and
//! a failed site is logged without aborting its siblings. Scheduling cadence
//! (e.g. a daily run) belongs to an external scheduler invoking this binary.
//!
//! ## Usage
//!
//! ```sh
//! news_harvest --sites sites.yaml -o ./data
//! ```

use clap::Parser;
use futures::stream::{self, StreamExt};
use std::error::Error;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod error;
mod extract;
mod models;
mod normalize;
mod outputs;
mod stopwords;
mod utils;

use cli::Cli;
use config::SiteTarget;
use normalize::Normalizer;
use utils::ensure_writable_dir;

/// How many site pipelines run at once.
const PARALLEL_SITES: usize = 4;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("news_harvest starting up");

    let args = Cli::parse();
    debug!(?args.sites, ?args.output_dir, args.timeout_secs, "Parsed CLI arguments");

    // Early check: ensure the output dir is writable before any network work
    if let Err(e) = ensure_writable_dir(&args.output_dir).await {
        error!(
            path = %args.output_dir,
            error = %e,
            "Output directory is not writable (fix perms or choose a different path)"
        );
        return Err(e);
    }

    let sites = match args.sites {
        Some(ref path) => config::load_sites(path)?,
        None => config::default_sites(),
    };
    info!(count = sites.len(), "Site list ready");

    // One client for all sites, with explicit timeouts on connect and on the
    // whole request. No retries: a failed fetch fails that site's run.
    let client = reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(10))
        .timeout(Duration::from_secs(args.timeout_secs))
        .build()?;
    let normalizer = Normalizer::new();

    let outcomes: Vec<bool> = stream::iter(&sites)
        .map(|site| {
            let client = &client;
            let normalizer = &normalizer;
            let output_dir = args.output_dir.as_str();
            async move {
                match run_site(client, normalizer, site, output_dir).await {
                    Ok(()) => true,
                    Err(e) => {
                        error!(url = %site.url, error = %e, "Site pipeline failed");
                        false
                    }
                }
            }
        })
        .buffer_unordered(PARALLEL_SITES)
        .collect()
        .await;

    let successful = outcomes.iter().filter(|ok| **ok).count();
    let failed = outcomes.len() - successful;
    let elapsed = start_time.elapsed();
    info!(
        total = outcomes.len(),
        successful,
        failed,
        ?elapsed,
        "Harvest complete"
    );

    if successful == 0 && !sites.is_empty() {
        return Err("every site pipeline failed".into());
    }
    Ok(())
}

/// Run the extract -> normalize -> write pipeline for one site.
///
/// The stages are strictly sequential for a given site; only sites overlap
/// with each other.
#[instrument(level = "info", skip(client, normalizer), fields(url = %site.url))]
async fn run_site(
    client: &reqwest::Client,
    normalizer: &Normalizer,
    site: &SiteTarget,
    output_dir: &str,
) -> Result<(), Box<dyn Error>> {
    let mut result = extract::extract(client, &site.url).await?;
    info!(
        links = result.links.len(),
        articles = result.articles.len(),
        "Extraction finished"
    );

    for article in &mut result.articles {
        article.summary = normalizer.clean(&article.summary);
    }

    let destination = Path::new(output_dir).join(&site.destination);
    outputs::csv::write_csv(&result, &destination)?;
    info!(path = %destination.display(), "Site pipeline finished");
    Ok(())
}
