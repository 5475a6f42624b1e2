use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "marquee",
    version,
    about = "Find how a movie title is officially localized in another language"
)]
pub struct Cli {
    /// TOML config file (defaults to marquee.toml or config/marquee.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// .env file to load before reading the environment
    #[arg(long, global = true)]
    pub env_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the selectable languages
    Languages {
        #[arg(long)]
        json: bool,
    },
    /// Search for a movie and show its localized title
    Search(SearchArgs),
}

#[derive(Debug, Clone, Args)]
pub struct SearchArgs {
    pub query: String,

    /// Source region code (e.g. US)
    #[arg(long)]
    pub from: Option<String>,

    /// Target region code (e.g. JP)
    #[arg(long)]
    pub to: Option<String>,

    /// Select the Nth visible candidate (1-based)
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub pick: Option<u16>,

    /// Reveal more candidates before picking
    #[arg(long, default_value_t = 0)]
    pub more: u16,

    /// Hand the translated title to the speech output
    #[arg(long)]
    pub speak: bool,

    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn search_flags_parse() {
        let cli = Cli::try_parse_from([
            "marquee", "search", "star wars", "--from", "US", "--to", "FR",
            "--pick", "2", "--more", "1", "--json",
        ])
        .unwrap();

        match cli.command {
            Command::Search(args) => {
                assert_eq!(args.query, "star wars");
                assert_eq!(args.from.as_deref(), Some("US"));
                assert_eq!(args.to.as_deref(), Some("FR"));
                assert_eq!(args.pick, Some(2));
                assert_eq!(args.more, 1);
                assert!(args.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn pick_is_one_based() {
        assert!(
            Cli::try_parse_from(["marquee", "search", "x", "--pick", "0"])
                .is_err()
        );
    }

    #[test]
    fn global_flags_follow_subcommands() {
        let cli = Cli::try_parse_from([
            "marquee",
            "languages",
            "--config",
            "alt.toml",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("alt.toml")));
    }
}
