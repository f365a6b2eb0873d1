use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use gallery_cards::cli::Cli;
use gallery_cards::{logging, HttpTransport, Orchestrator, Page, Targets};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Cli::parse().into_config();
    logging::init(&config.log_level, config.log_format);

    // load the page shell and resolve its containers up front
    let page = match &config.template {
        Some(path) => {
            let html = fs::read_to_string(path)
                .with_context(|| format!("couldn't read template {}", path.display()))?;
            Page::parse(&html)
        }
        None => Page::default_shell(),
    };

    let art = page
        .container(&config.art_container)
        .with_context(|| format!("no element with id {:?} in page", config.art_container))?;
    let social = match &config.social_container {
        Some(id) => Some(
            page.container(id)
                .with_context(|| format!("no element with id {id:?} in page"))?,
        ),
        None => None,
    };
    let targets = Targets { art, social };

    let transport = HttpTransport::new(config.request_timeout)?;
    let report = Orchestrator::new(transport, config.endpoints())
        .run(&targets)
        .await;
    info!(phase = ?report.phase, "finished");

    let html = page.to_html()?;
    match &config.output {
        Some(path) => {
            fs::write(path, html)
                .with_context(|| format!("couldn't write {}", path.display()))?;
            info!(path = %path.display(), "page written");
        }
        None => print!("{html}"),
    }

    Ok(())
}
