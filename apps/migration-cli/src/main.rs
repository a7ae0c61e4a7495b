use clap::{Parser, ValueEnum};
use draft_backend::config::db::{db_kind_from_env, DbKind};
use draft_backend::infra::db::connect_db;
use draft_backend::telemetry::init_tracing;
use migration::{migrate, MigrationCommand};
use tracing::{error, info};

#[derive(Clone, Copy, ValueEnum)]
enum Command {
    Up,
    Down,
    Fresh,
    Reset,
    Refresh,
    Status,
}

impl From<Command> for MigrationCommand {
    fn from(command: Command) -> Self {
        match command {
            Command::Up => MigrationCommand::Up,
            Command::Down => MigrationCommand::Down,
            Command::Fresh => MigrationCommand::Fresh,
            Command::Reset => MigrationCommand::Reset,
            Command::Refresh => MigrationCommand::Refresh,
            Command::Status => MigrationCommand::Status,
        }
    }
}

/// In-memory SQLite is left out: the database would vanish with the process.
#[derive(Clone, Copy, ValueEnum)]
enum Db {
    Postgres,
    SqliteFile,
}

#[derive(Parser)]
#[command(name = "migration-cli")]
#[command(about = "Draft database migration tool")]
struct Args {
    /// Migration command to run
    #[arg(value_enum)]
    command: Command,

    /// Database type; falls back to `DRAFT_DB_KIND`
    #[arg(short, long, value_enum)]
    db: Option<Db>,
}

#[tokio::main]
async fn main() {
    init_tracing();
    let args = Args::parse();

    let kind = match args.db {
        Some(Db::Postgres) => DbKind::Postgres,
        Some(Db::SqliteFile) => DbKind::SqliteFile,
        None => match db_kind_from_env() {
            Ok(DbKind::SqliteMemory) => {
                error!("In-memory SQLite vanishes with the process; pick a persistent database");
                std::process::exit(2);
            }
            Ok(kind) => kind,
            Err(e) => {
                error!(error = %e, "Invalid database kind");
                std::process::exit(2);
            }
        },
    };

    let conn = match connect_db(kind).await {
        Ok(conn) => conn,
        Err(e) => {
            error!(error = %e, "Could not connect to database");
            std::process::exit(1);
        }
    };

    let command = MigrationCommand::from(args.command);
    if let Err(e) = migrate(&conn, command).await {
        error!(error = %e, "Migration failed");
        std::process::exit(1);
    }
    info!(?kind, "Migration finished");
}
