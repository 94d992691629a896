mod client;
mod config;
mod path;
mod registry;
mod table;

use crate::client::{ApiClient, ResponseData};
use crate::config::{Overrides, Scope, save};
use crate::registry::ResourceKind;
use anyhow::{Context, Result};
use clap::{ArgAction, CommandFactory, Parser, Subcommand, ValueEnum};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "proxyctl",
    version,
    about = "Administration CLI for a MariaDB database proxy REST API",
    disable_help_flag = true
)]
struct Cli {
    #[arg(
        short = 'u',
        long,
        global = true,
        value_name = "USER",
        help = "Username for the REST API [default: mariadb]"
    )]
    user: Option<String>,

    #[arg(
        short = 'p',
        long,
        global = true,
        value_name = "PASSWORD",
        help = "Password for the user [default: admin]"
    )]
    password: Option<String>,

    #[arg(
        short = 'h',
        long,
        global = true,
        value_name = "HOST",
        help = "Hostname or address where the proxy is located [default: localhost]"
    )]
    host: Option<String>,

    #[arg(
        short = 'P',
        long,
        global = true,
        value_name = "PORT",
        help = "Port where the REST API listens [default: 8989]"
    )]
    port: Option<u16>,

    #[arg(
        short = 's',
        long,
        global = true,
        help = "Enable TLS encryption of the connection"
    )]
    secure: bool,

    #[arg(
        long,
        global = true,
        help = "Verify the TLS certificate of the REST API (self-signed certs fail with this set)"
    )]
    tls_verify: bool,

    #[arg(
        long,
        short = 'o',
        value_enum,
        default_value_t = OutputFormat::Table,
        global = true,
        help = "Output format (propagates to subcommands)"
    )]
    output: OutputFormat,

    #[arg(long, global = true, action = ArgAction::HelpLong, help = "Print help")]
    help: Option<bool>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List objects
    #[command(subcommand)]
    List(ListCommand),
    /// Show one object
    #[command(subcommand)]
    Show(ShowCommand),
    /// Persist the global connection flags to the chosen scope
    Configure {
        #[arg(
            long,
            value_enum,
            default_value_t = ScopeArg::User,
            help = "Where to write the config (local project dir or user config dir)"
        )]
        scope: ScopeArg,
    },
    /// Show current configuration (password masked)
    ConfigShow,
    /// Generate shell completion scripts
    Completion {
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Subcommand)]
enum ListCommand {
    /// List servers
    Servers,
    /// List services
    Services,
    /// List monitors
    Monitors,
    /// List sessions
    Sessions,
    /// List filters
    Filters,
    /// List loaded modules
    Modules,
}

#[derive(Subcommand)]
enum ShowCommand {
    /// Show server
    Server {
        #[arg(value_name = "SERVER")]
        id: String,
    },
    /// Show service
    Service {
        #[arg(value_name = "SERVICE")]
        id: String,
    },
    /// Show monitor
    Monitor {
        #[arg(value_name = "MONITOR")]
        id: String,
    },
    /// Show session
    Session {
        #[arg(value_name = "SESSION")]
        id: String,
    },
    /// Show filter
    Filter {
        #[arg(value_name = "FILTER")]
        id: String,
    },
    /// Show loaded module
    Module {
        #[arg(value_name = "MODULE")]
        id: String,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CompletionShell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq)]
enum OutputFormat {
    Table,
    Json,
    Raw,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ScopeArg {
    Local,
    User,
}

impl From<ScopeArg> for Scope {
    fn from(value: ScopeArg) -> Self {
        match value {
            ScopeArg::Local => Scope::Local,
            ScopeArg::User => Scope::User,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cwd = std::env::current_dir().context("reading current directory")?;

    if let Commands::Configure { scope } = &cli.command {
        let mut existing = config::load_scope((*scope).into(), &cwd)?;
        if let Some(user) = cli.user.clone() {
            existing.user = Some(user);
        }
        if let Some(password) = cli.password.clone() {
            existing.password = Some(password);
        }
        if let Some(host) = cli.host.clone() {
            existing.host = Some(host);
        }
        if let Some(port) = cli.port {
            existing.port = Some(port);
        }
        if cli.secure {
            existing.secure = Some(true);
        }
        if cli.tls_verify {
            existing.verify_tls = Some(true);
        }

        let path = save((*scope).into(), &existing, &cwd)?;
        println!("Saved connection settings to {}", path.display());
        return Ok(());
    }

    let settings = config::resolve(
        &cwd,
        Overrides {
            user: cli.user.clone(),
            password: cli.password.clone(),
            host: cli.host.clone(),
            port: cli.port,
            secure: cli.secure,
            verify_tls: cli.tls_verify,
        },
    )?;

    match cli.command {
        Commands::List(command) => {
            let kind = match command {
                ListCommand::Servers => ResourceKind::Server,
                ListCommand::Services => ResourceKind::Service,
                ListCommand::Monitors => ResourceKind::Monitor,
                ListCommand::Sessions => ResourceKind::Session,
                ListCommand::Filters => ResourceKind::Filter,
                ListCommand::Modules => ResourceKind::Module,
            };
            let client = ApiClient::new(&settings)?;
            run_list(&client, kind, cli.output)?;
        }
        Commands::Show(command) => {
            let (kind, id) = match command {
                ShowCommand::Server { id } => (ResourceKind::Server, id),
                ShowCommand::Service { id } => (ResourceKind::Service, id),
                ShowCommand::Monitor { id } => (ResourceKind::Monitor, id),
                ShowCommand::Session { id } => (ResourceKind::Session, id),
                ShowCommand::Filter { id } => (ResourceKind::Filter, id),
                ShowCommand::Module { id } => (ResourceKind::Module, id),
            };
            let client = ApiClient::new(&settings)?;
            run_show(&client, kind, &id, cli.output)?;
        }
        Commands::ConfigShow => {
            let mut masked = config::load(&cwd)?;
            if masked.password.is_some() {
                masked.password = Some("*****".into());
            }
            println!("{}", serde_json::to_string_pretty(&masked)?);
        }
        Commands::Completion { shell } => {
            use clap_complete::{generate, shells};
            let mut cmd = Cli::command();
            let bin = cmd.get_name().to_string();
            match shell {
                CompletionShell::Bash => {
                    generate(shells::Bash, &mut cmd, bin, &mut std::io::stdout())
                }
                CompletionShell::Zsh => {
                    generate(shells::Zsh, &mut cmd, bin, &mut std::io::stdout())
                }
                CompletionShell::Fish => {
                    generate(shells::Fish, &mut cmd, bin, &mut std::io::stdout())
                }
                CompletionShell::PowerShell => {
                    generate(shells::PowerShell, &mut cmd, bin, &mut std::io::stdout())
                }
            }
        }
        Commands::Configure { .. } => unreachable!("handled earlier"),
    }

    Ok(())
}

fn run_list(client: &ApiClient, kind: ResourceKind, output: OutputFormat) -> Result<()> {
    let desc = kind.list_descriptor();
    let response = client.get(desc.endpoint)?;
    render_response(&response, output, |json| {
        table::collection(desc.headers, desc.rows(json)).to_string()
    })
}

fn run_show(client: &ApiClient, kind: ResourceKind, id: &str, output: OutputFormat) -> Result<()> {
    let desc = kind.show_descriptor();
    let response = client.get(&desc.object_endpoint(id))?;
    render_response(&response, output, |json| {
        table::resource(desc.rows(json)).to_string()
    })
}

fn render_response(
    response: &ResponseData,
    output: OutputFormat,
    to_table: impl FnOnce(&Value) -> String,
) -> Result<()> {
    match output {
        OutputFormat::Raw => println!("{}", response.body),
        OutputFormat::Json => println!("{}", serde_json::to_string(&response.json)?),
        OutputFormat::Table => println!("{}", to_table(&response.json)),
    }
    Ok(())
}
