use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use interns::api::InternApi;
use interns::api::http::HttpInternApi;
use interns::banner::{BannerInfo, print_banner};
use interns::codec::decode_record;
use interns::commands::{CommandRegistry, CommandResult};
use interns::config::{self, Config, KNOWN_KEYS};
use interns::consts::default_db_path;
use interns::form::{EditForm, SubmitOutcome};
use interns::logging;
use interns::model::{Field, InternId};
use interns::roster::render_roster;
use interns::spinner::while_waiting;

#[derive(Parser)]
#[command(name = "interns", version, about = "Manage the intern roster.")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Base URL of the roster API (overrides INTERNS_API_URL and stored config)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// SQLite database for settings (use :memory: for ephemeral)
    #[arg(long, global = true)]
    db: Option<String>,

    /// Request timeout in seconds
    #[arg(short, long, global = true, value_parser = clap::value_parser!(u64).range(1..))]
    timeout: Option<u64>,

    /// Log debug output to stderr
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// List all participants
    List,
    /// Show one intern with dates as YYYY-MM-DD
    Show {
        /// Intern id
        id: String,
    },
    /// Edit an intern interactively
    Edit {
        /// Intern id
        id: String,
    },
    /// Change fields of an intern and save in one go
    Update {
        /// Intern id
        id: String,
        /// Full name
        #[arg(long)]
        name: Option<String>,
        /// Email address
        #[arg(long)]
        email: Option<String>,
        /// Internship start (YYYY-MM-DD)
        #[arg(long)]
        start: Option<String>,
        /// Internship end (YYYY-MM-DD)
        #[arg(long)]
        end: Option<String>,
    },
    /// Read or change stored settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print a stored value
    Get { key: String },
    /// Store a value
    Set { key: String, value: String },
    /// Remove a stored value
    Unset { key: String },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let db_path = match &cli.db {
        Some(path) => path.clone(),
        None => prepare_default_db()?,
    };
    let store = Config::open(&db_path)?;

    let api_url = config::resolve_api_url(cli.api_url.as_deref(), &store)?;
    let connect = || -> Result<Arc<dyn InternApi>> {
        let timeout = config::resolve_timeout(cli.timeout, &store)?;
        debug!(%api_url, ?timeout, db = %db_path, "resolved settings");
        Ok(Arc::new(HttpInternApi::new(&api_url, timeout)?))
    };

    match cli.command {
        Command::Config { action } => return handle_config(&store, &action),
        Command::List => {
            let api = connect()?;
            let interns = while_waiting("loading interns", api.list()).await?;
            print!("{}", render_roster(&interns));
        }
        Command::Show { id } => {
            let api = connect()?;
            let id = InternId::from(id.as_str());
            let stored = while_waiting("loading intern", api.get(&id)).await?;
            let display = decode_record(stored);
            println!("{}", serde_json::to_string_pretty(&display)?);
        }
        Command::Edit { id } => {
            let api = connect()?;
            let id = InternId::from(id.as_str());
            let form = while_waiting("loading intern", EditForm::load(api, id)).await?;
            print_banner(&BannerInfo {
                api_url: &api_url,
                intern: form.id(),
                config: &db_path,
            });
            edit_repl(form).await?;
        }
        Command::Update {
            id,
            name,
            email,
            start,
            end,
        } => {
            let api = connect()?;
            let id = InternId::from(id.as_str());
            let mut form = while_waiting("loading intern", EditForm::load(api, id)).await?;
            let changes = [
                (Field::Name, name),
                (Field::Email, email),
                (Field::InternshipStart, start),
                (Field::InternshipEnd, end),
            ];
            for (field, value) in changes {
                if let Some(value) = value {
                    form.set_field(field, value);
                }
            }
            match while_waiting("saving intern", form.submit()).await? {
                SubmitOutcome::Saved => println!("✓ saved intern {}", form.id()),
                SubmitOutcome::Rejected(errors) => {
                    for (field, message) in errors.iter() {
                        eprintln!("{}: {}", field.label(), message);
                    }
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn prepare_default_db() -> Result<String> {
    let path: PathBuf = default_db_path()?;
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
    }
    Ok(path.to_string_lossy().into_owned())
}

fn handle_config(config: &Config, action: &ConfigAction) -> Result<ExitCode> {
    match action {
        ConfigAction::Get { key } => match config.get(key)? {
            Some(value) => println!("{value}"),
            None => {
                eprintln!("{key} is not set (known keys: {})", KNOWN_KEYS.join(", "));
                return Ok(ExitCode::FAILURE);
            }
        },
        ConfigAction::Set { key, value } => {
            config.set(key, value)?;
            println!("✓ {key} = {value}");
        }
        ConfigAction::Unset { key } => {
            config.remove(key)?;
            println!("✓ {key} unset");
        }
    }
    Ok(ExitCode::SUCCESS)
}

async fn edit_repl(mut form: EditForm) -> Result<()> {
    let registry = CommandRegistry::new();
    print!("{}", form.state().render());

    // async stdin so Ctrl+C is caught at the prompt too
    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        print!("\nintern {}> ", form.id());
        io::stdout().flush()?;

        let line = tokio::select! {
            result = lines.next_line() => {
                match result {
                    Ok(Some(line)) => line,
                    Ok(None) => {
                        // Ctrl+D (EOF)
                        println!();
                        break;
                    }
                    Err(e) => {
                        eprintln!("input error: {e}");
                        break;
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                println!();
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        match registry.dispatch(&line, &mut form).await {
            CommandResult::Quit => break,
            CommandResult::Handled => {}
            CommandResult::NotACommand => {
                println!("commands start with /, e.g. /name Ada Lovelace");
                println!("type /help for available commands");
            }
        }
    }

    Ok(())
}
