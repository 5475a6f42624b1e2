//! `marquee` command-line entry point.

mod cli;
mod output;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Parser;
use marquee_config::{Config, ConfigLoader};
use marquee_core::{
    CatalogApi, Message, MyMemoryTranslator, Runtime, Session, SessionOptions,
    TmdbCatalog, UiStrings,
};
use marquee_model::{Language, SelectionMode};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Command, SearchArgs};

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries results; logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,marquee_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Languages { json } => output::print_languages(json),
        Command::Search(ref args) => {
            let config = load_config(&cli)?;
            run_search(config, args.clone()).await
        }
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    if let Some(path) = &cli.env_file {
        loader = loader.with_env_file(path);
    }

    let load = loader.load().context("failed to load configuration")?;
    for warning in &load.warnings.items {
        match &warning.hint {
            Some(hint) => warn!(hint = %hint, "{}", warning.message),
            None => warn!("{}", warning.message),
        }
    }
    if let Some(path) = &load.config.metadata.config_path {
        info!(path = %path.display(), "configuration loaded");
    }
    Ok(load.config)
}

fn region_or(
    flag: Option<&str>,
    configured: &str,
) -> Result<&'static Language> {
    let region = flag.unwrap_or(configured);
    Language::by_region(region)
        .with_context(|| format!("unknown region code '{region}'"))
}

async fn run_search(config: Config, args: SearchArgs) -> Result<()> {
    let source = region_or(args.from.as_deref(), &config.session.source_region)?;
    let target = region_or(args.to.as_deref(), &config.session.target_region)?;
    if source.same_region(target) {
        bail!("source and target must be different regions");
    }

    let catalog: Arc<dyn CatalogApi> = Arc::new(
        TmdbCatalog::new(&config.catalog)
            .context("failed to build catalog client")?,
    );

    let mut options = SessionOptions::from_config(&config);
    // one-shot run: no typing to debounce
    options.debounce = Duration::ZERO;
    if args.pick.is_some() {
        options.selection_mode = SelectionMode::Explicit;
    }

    let mut session = Session::new(catalog, source, target, options)
        .with_strings(UiStrings::for_locale(&config.session.ui_locale));
    if config.translator.enabled {
        let translator = MyMemoryTranslator::new(&config.translator)
            .context("failed to build translation client")?;
        session = session.with_translator(Arc::new(translator));
    }

    let mut runtime = Runtime::new();
    runtime.dispatch(&mut session, Message::QueryChanged(args.query.clone()));
    runtime.run_until_idle(&mut session).await;

    for _ in 0..args.more {
        runtime.dispatch(&mut session, Message::LoadMore);
    }

    if let Some(pick) = args.pick {
        let index = usize::from(pick) - 1;
        let Some(candidate) = session.state().visible_candidates().get(index)
        else {
            bail!(
                "--pick {pick} is out of range ({} candidates shown)",
                session.state().visible_candidates().len()
            );
        };
        let id = candidate.id;
        runtime.dispatch(&mut session, Message::CandidateChosen(id));
        runtime.run_until_idle(&mut session).await;
    }

    if args.speak && !session.speak() {
        warn!("nothing to speak for this selection");
    }

    output::print_search(&session, args.json)
}
