use anyhow::Result;
use clap::{Parser, Subcommand};

mod bootstrap;
mod commands;

#[derive(Parser)]
#[command(name = "anisearch")]
#[command(about = "Anisearch CLI - session and search cache for the anime search service", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and cache the session
    Login {
        #[arg(short, long)]
        username: String,
        /// Read from stdin when omitted
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Create an account and log into it
    Register {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        email: String,
        /// Read from stdin when omitted
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Drop the cached session and search results
    Logout,
    /// Change the current user's password
    /// Passwords are read from stdin unless given as flags
    Passwd {
        #[arg(long)]
        old: Option<String>,
        #[arg(long)]
        new: Option<String>,
    },
    /// Show the cached session
    Whoami,
    /// Manage the cached search results
    Search {
        #[command(subcommand)]
        action: SearchAction,
    },
}

#[derive(Subcommand)]
enum SearchAction {
    /// Replace the cached results
    Set {
        /// Result ids, in display order
        ids: Vec<i64>,
        #[arg(short, long, default_value = "")]
        keyword: String,
        #[arg(short, long, default_value = anisearch_core::search::DEFAULT_SORT_METHOD)]
        sort: String,
    },
    /// Reset the cached results
    Clear,
    /// Print the cached results
    Show,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let app = bootstrap::AppBootstrap::init().await?;

    match cli.command {
        Commands::Login { username, password } => {
            let password = commands::prompt::secret(password, "Password")?;
            commands::auth::login(&app, &username, &password).await?
        }
        Commands::Register {
            username,
            email,
            password,
        } => {
            let password = commands::prompt::secret(password, "Password")?;
            commands::auth::register(&app, &username, &email, &password).await?
        }
        Commands::Logout => commands::auth::logout(&app).await,
        Commands::Passwd { old, new } => {
            let old = commands::prompt::secret(old, "Current password")?;
            let new = commands::prompt::secret(new, "New password")?;
            commands::auth::passwd(&app, &old, &new).await?
        }
        Commands::Whoami => commands::auth::whoami(&app),
        Commands::Search { action } => match action {
            SearchAction::Set { ids, keyword, sort } => {
                commands::search::set(&app, ids, keyword, sort).await
            }
            SearchAction::Clear => commands::search::clear(&app).await,
            SearchAction::Show => commands::search::show(&app),
        },
    }

    Ok(())
}
