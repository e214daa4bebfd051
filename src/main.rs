//! CLI entry point for folio-rs

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_rs::commands::{self, list::ListOptions};

#[derive(Parser)]
#[command(name = "folio-rs")]
#[command(version = "0.1.0")]
#[command(about = "Content engine and admin editor for a portfolio site", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new portfolio site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Print the resolved content, or one field of it
    Show {
        /// Dotted field path, e.g. hero.name or projects.0.links
        path: Option<String>,

        /// Only print where the content was resolved from
        #[arg(short, long)]
        source: bool,
    },

    /// List site content
    List {
        /// Type of content to list (projects, posts, categories, tags, skills)
        #[arg(default_value = "projects")]
        r#type: String,

        /// Only projects in this category
        #[arg(long)]
        category: Option<String>,

        /// Case-insensitive search over project title, summary, tags and tools
        #[arg(long)]
        search: Option<String>,

        /// Include unpublished posts
        #[arg(short, long)]
        all: bool,
    },

    /// Show one project or post by id
    Get {
        /// project or post
        r#type: String,
        id: String,
    },

    /// Create a new project or post
    New {
        /// project or post
        r#type: String,

        /// Title; its slug becomes the id
        title: String,
    },

    /// Set one field of the content
    Set {
        path: String,

        /// JSON value, or plain text
        value: String,

        /// Treat the value as comma-separated text and store a list
        #[arg(short, long)]
        list: bool,
    },

    /// Remove a link or social profile by key
    Unset { path: String },

    /// Insert an item into a list
    Insert {
        /// Dotted path of the list, e.g. about.certifications
        path: String,

        /// JSON value, or plain text
        item: String,

        /// Position; appends when omitted
        #[arg(short, long)]
        index: Option<usize>,
    },

    /// Remove an item from a list
    Remove { path: String, index: usize },

    /// Move a list item to a new position
    Move { path: String, from: usize, to: usize },

    /// Write the content to a JSON file
    Export {
        /// Output file, `-` for stdout (defaults to export_file in _config.yml)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Replace the content with a JSON file
    Import { file: PathBuf },

    /// Delete the saved draft and restore the default content
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Start the admin server
    #[command(alias = "s")]
    Server {
        /// Port to listen on (defaults to server.port in _config.yml)
        #[arg(short, long)]
        port: Option<u16>,

        /// IP address to bind to (defaults to server.ip in _config.yml)
        #[arg(short, long)]
        ip: Option<String>,

        /// Admin passcode
        #[arg(long, env = "FOLIO_ADMIN_PASSCODE", hide_env_values = true)]
        passcode: Option<String>,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "folio_rs=debug,info"
    } else {
        "folio_rs=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to read the current directory")?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing portfolio site in {:?}", target_dir);
            commands::init::init_site(&target_dir)?;
            println!("Initialized portfolio site in {:?}", target_dir);
        }

        Commands::Show { path, source } => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            commands::show::run(&folio, path.as_deref(), source).await?;
        }

        Commands::List {
            r#type,
            category,
            search,
            all,
        } => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            let options = ListOptions {
                category,
                search,
                all,
            };
            commands::list::run(&folio, &r#type, &options).await?;
        }

        Commands::Get { r#type, id } => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            commands::get::run(&folio, &r#type, &id).await?;
        }

        Commands::New { r#type, title } => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            tracing::info!("Creating new {} with title: {}", r#type, title);
            commands::new::run(&folio, &r#type, &title).await?;
        }

        Commands::Set { path, value, list } => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            commands::edit::set(&folio, &path, &value, list).await?;
        }

        Commands::Unset { path } => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            commands::edit::unset(&folio, &path).await?;
        }

        Commands::Insert { path, item, index } => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            commands::edit::insert(&folio, &path, &item, index).await?;
        }

        Commands::Remove { path, index } => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            commands::edit::remove(&folio, &path, index).await?;
        }

        Commands::Move { path, from, to } => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            commands::edit::move_item(&folio, &path, from, to).await?;
        }

        Commands::Export { output } => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            commands::transfer::export(&folio, output.as_deref()).await?;
        }

        Commands::Import { file } => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            let file = if file.is_absolute() {
                file
            } else {
                base_dir.join(file)
            };
            commands::transfer::import(&folio, &file).await?;
        }

        Commands::Reset { yes } => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            commands::reset::run(&folio, yes).await?;
        }

        Commands::Server { port, ip, passcode } => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            let ip = ip.unwrap_or_else(|| folio.config.server.ip.clone());
            let port = port.unwrap_or(folio.config.server.port);

            tracing::info!("Starting server at http://{}:{}", ip, port);
            folio_rs::server::start(&folio, &ip, port, passcode.as_deref()).await?;
        }

        Commands::Version => {
            println!("folio-rs version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
