use clap::Parser;
use tinybeans::cli::{format_children, format_entries, format_followings, Cli, Commands};
use tinybeans::error::TinybeansError;
use tinybeans::infrastructure::Config;
use tinybeans::TinybeansClient;
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();

    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Log to stderr, filtered by RUST_LOG (default: warn)
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), TinybeansError> {
    // Every command needs an authenticated client
    let path = Config::resolve_path(cli.config.as_deref());
    let config = Config::load(&path)?;
    let password = config.get_password()?;

    let mut client = TinybeansClient::from_config(&config.api)?;
    client.login(&config.username, &password)?;

    match cli.command {
        Commands::Followings => {
            let followings = client.get_followings()?.collect::<Result<Vec<_>, _>>()?;
            println!("{}", format_followings(&followings).trim_end());
            Ok(())
        }
        Commands::Children => {
            let children = client.children()?;
            println!("{}", format_children(&children).trim_end());
            Ok(())
        }
        Commands::Entries { child_id, last } => {
            let child = client.find_child(child_id)?;
            let entries = client.get_entries(&child, last)?;
            println!("{}", format_entries(&entries).trim_end());
            Ok(())
        }
        Commands::Export {
            journal_id,
            from,
            to,
        } => {
            let journal = client.find_journal(journal_id)?;
            if !client.request_export(&journal, from, to)? {
                return Err(TinybeansError::ExportRejected(journal_id));
            }
            println!(
                "Export requested for journal {} ({} to {})",
                journal_id, from, to
            );
            Ok(())
        }
    }
}
