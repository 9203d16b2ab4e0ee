use backend::config::db::{db_url, DbOwner, DbProfile};
use backend::infra::db::connect_db;
use clap::{Parser, ValueEnum};
use migration::MigrationCommand;

#[derive(Clone, ValueEnum)]
enum Profile {
    Prod,
    Test,
}

#[derive(Parser)]
#[command(name = "migration-cli")]
#[command(about = "Level Up database migration tool")]
struct Args {
    /// Migration command to run
    command: String,

    /// Database profile. The test profile is in-memory SQLite, which the
    /// state builder migrates itself, so CLI runs target prod by default.
    #[arg(short, long, value_enum, default_value = "prod")]
    profile: Profile,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .without_time()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_line_number(false)
        .with_file(false)
        .with_env_filter("migration=info,sqlx=warn")
        .init();

    let args = Args::parse();

    let command = match args.command.as_str() {
        "up" => MigrationCommand::Up,
        "down" => MigrationCommand::Down,
        "fresh" => MigrationCommand::Fresh,
        "reset" => MigrationCommand::Reset,
        "refresh" => MigrationCommand::Refresh,
        "status" => MigrationCommand::Status,
        other => {
            eprintln!("Unknown command: {other}. Use: up | down | fresh | reset | refresh | status");
            std::process::exit(2);
        }
    };

    let profile = match args.profile {
        Profile::Prod => DbProfile::Prod,
        Profile::Test => DbProfile::Test,
    };

    // Migrations run with owner credentials; the app itself connects as App.
    let url = match db_url(profile, DbOwner::Owner) {
        Ok(url) => url,
        Err(e) => {
            eprintln!("❌ Could not resolve database URL: {e}");
            std::process::exit(1);
        }
    };

    let db = match connect_db(&url).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("❌ Could not connect to database: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = migration::migrate(&db, command).await {
        eprintln!("Migration failed: {e}");
        std::process::exit(1);
    }
}
