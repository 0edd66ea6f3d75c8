use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::debug;

use crate::config::Preferences;
use crate::endpoints::GithubClient;
use crate::models::OutputFormat;
use crate::render::RenderResultList;
use crate::router;

/// GitHub search (ghsearch) - launcher backend for finding GitHub and GitHub Enterprise repositories
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Preferences file, defaults to <config dir>/ghsearch/preferences.toml
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Output format of printed results
    #[arg(short, long, default_value_t = OutputFormat::Json, value_enum)]
    pub format: OutputFormat,
    /// Log debug output to stderr
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a launcher query into a result list
    ///
    /// Takes no options of its own: every word after the keyword is query
    /// text, even when it starts with `-`. Global options go before `query`.
    #[command(disable_help_flag = true)]
    Query {
        /// Launcher keyword that triggered the query
        keyword: String,
        /// Query text, for example: `my notif` or `tokio`
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        argument: Vec<String>,
    },
    /// Print the login of the user owning the token for a keyword
    Whoami {
        /// Launcher keyword selecting github.com or the enterprise host
        keyword: String,
    },
    /// Generates shell completion scripts
    Completions {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}

pub async fn execute(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Query { keyword, argument } => {
            let prefs = Preferences::load(cli.config.as_deref())?;
            let endpoint = prefs.endpoint_for(&keyword)?;
            let argument = argument.join(" ");
            debug!("query for keyword {:?}: {:?}", keyword, argument);
            let items = router::run(endpoint, &argument)
                .await
                .with_context(|| format!("query {:?} failed", argument))?;
            print_output(&RenderResultList::new(items), cli.format)?;
        }
        Commands::Whoami { keyword } => {
            let prefs = Preferences::load(cli.config.as_deref())?;
            let client = GithubClient::new(prefs.endpoint_for(&keyword)?)?;
            let login = client
                .viewer_login()
                .await
                .context("failed to fetch viewer login")?;
            println!("{}", login);
        }
        Commands::Completions { shell } => {
            use clap::CommandFactory;
            let mut cmd = Cli::command();
            let cmd_name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, cmd_name, &mut std::io::stdout());
        }
    }
    Ok(())
}

fn print_output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    write_output(&mut stdout.lock(), value, format)
}

pub fn write_output<W, T>(out: &mut W, value: &T, format: OutputFormat) -> anyhow::Result<()>
where
    W: Write,
    T: Serialize,
{
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
    };
    writeln!(out, "{}", rendered.trim_end())?;
    Ok(())
}
