use agti_advisor::{ConsultantAgent, GeminiClient};
use agti_app::config::AppConfig;
use agti_app::handlers::{self, directory::DirectoryQuery};
use agti_app::render::render_about;
use agti_app::AppState;
use anyhow::Context;
use clap::{Parser, Subcommand};
use shared_types::{CompanyType, Language, Province};
use std::sync::Arc;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(author, version, about = "DIRECTORY AGTI: member registry and industry consultation", long_about = None)]
struct Cli {
    /// Interface language (id or en)
    #[arg(long, global = true)]
    lang: Option<Language>,

    /// Also write logs to this file
    #[arg(long, global = true)]
    log_file_path: Option<String>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Executive overview of the registry
    Dashboard,
    /// List members, optionally filtered
    Directory {
        /// Case-insensitive match on name or specialization
        #[arg(long)]
        search: Option<String>,
        /// Industry type: garment, textile, spinning, accessories
        #[arg(long = "type")]
        company_type: Option<CompanyType>,
        /// Province, e.g. west-java or "Jawa Barat"
        #[arg(long)]
        province: Option<Province>,
    },
    /// Full profile of one member
    Show { id: String },
    /// Ask the consultant a single question
    Ask {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// Interactive consultation
    Consult,
    /// About the directory
    About,
    /// Show the effective configuration
    Settings,
}

fn init_tracing(log_file_path: Option<&str>) -> Option<WorkerGuard> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_ansi(true)
        .with_writer(std::io::stderr);

    if let Some(log_path) = log_file_path {
        let log_path = std::path::Path::new(log_path);
        let file_appender = tracing_appender::rolling::never(
            log_path.parent().unwrap_or(std::path::Path::new(".")),
            log_path
                .file_name()
                .unwrap_or(std::ffi::OsStr::new("agti.log")),
        );
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(stderr_layer)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(non_blocking),
            )
            .init();
        Some(guard)
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(stderr_layer)
            .init();
        None
    }
}

fn build_agent(config: &AppConfig) -> anyhow::Result<ConsultantAgent<'static>> {
    let resolved = config.resolve_api_key();
    if let Some(key) = &resolved {
        tracing::debug!(source = %key.source, "Using Gemini API key");
    }

    let mut client = GeminiClient::new(resolved.map(|r| r.key))
        .context("Failed to create Gemini client")?;
    if !client.has_api_key() {
        tracing::warn!("No Gemini API key configured; consultation will fall back");
    }
    if let Some(base_url) = config.base_url() {
        client = client.with_base_url(base_url);
    }

    Ok(
        ConsultantAgent::new(Arc::new(client), directory::members())
            .with_model(config.model())
            .with_temperature(config.temperature()),
    )
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = init_tracing(cli.log_file_path.as_deref());

    let (config, config_path) = AppConfig::load().context("Failed to load config")?;
    tracing::debug!(path = %config_path.display(), "Configuration loaded");

    let language = cli.lang.or(config.language()).unwrap_or_default();
    let state = AppState::new(language);

    match cli.command {
        Command::Dashboard => {
            println!("{}", handlers::dashboard::dashboard(language, cli.json)?);
        }
        Command::Directory {
            search,
            company_type,
            province,
        } => {
            let query = DirectoryQuery {
                search,
                company_type,
                province,
            };
            let (_, output) = handlers::directory::list_companies(state, query, cli.json)?;
            println!("{output}");
        }
        Command::Show { id } => {
            let (_, output) = handlers::directory::show_company(state, &id, cli.json)?;
            println!("{output}");
        }
        Command::Ask { query } => {
            let agent = build_agent(&config)?;
            let (_, output) =
                handlers::consult::ask(&agent, state, &query.join(" "), cli.json).await?;
            println!("{output}");
        }
        Command::Consult => {
            let agent = build_agent(&config)?;
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            let mut stdout = tokio::io::stdout();
            handlers::consult::run_repl(&agent, state, stdin, &mut stdout).await?;
        }
        Command::About => {
            println!("{}", render_about(language));
        }
        Command::Settings => {
            println!(
                "{}",
                handlers::settings::settings(&config, &config_path, language, cli.json)?
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["agti", "dashboard", "--lang", "en", "--json"]).unwrap();
        assert_eq!(cli.lang, Some(Language::En));
        assert!(cli.json);
        assert!(matches!(cli.command, Command::Dashboard));
    }

    #[test]
    fn directory_filters_parse() {
        let cli = Cli::try_parse_from([
            "agti",
            "directory",
            "--search",
            "denim",
            "--type",
            "spinning",
            "--province",
            "west-java",
        ])
        .unwrap();

        match cli.command {
            Command::Directory {
                search,
                company_type,
                province,
            } => {
                assert_eq!(search.as_deref(), Some("denim"));
                assert_eq!(company_type, Some(CompanyType::Spinning));
                assert_eq!(province, Some(Province::WestJava));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn ask_joins_words_and_requires_a_query() {
        let cli = Cli::try_parse_from(["agti", "ask", "how", "to", "dye"]).unwrap();
        match cli.command {
            Command::Ask { query } => assert_eq!(query.join(" "), "how to dye"),
            other => panic!("unexpected command {other:?}"),
        }

        assert!(Cli::try_parse_from(["agti", "ask"]).is_err());
        assert!(Cli::try_parse_from(["agti", "about", "--lang", "fr"]).is_err());
    }
}
