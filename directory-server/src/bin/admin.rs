//! Operator CLI for the staff directory
//!
//! Administrative operations that talk straight to the database: seeding,
//! listing admin accounts, creating accounts, resetting passwords. The
//! server does not have to be running.

use std::io::{BufRead, Write};

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};

use directory_server::core::Config;
use directory_server::db::DbService;
use directory_server::db::repository::admin;
use directory_server::services::provision;
use shared::models::AdminCreate;

#[derive(Parser)]
#[command(name = "directory-admin")]
#[command(about = "Staff directory administration CLI", long_about = None)]
struct Cli {
    /// SQLite database path (defaults to DATABASE_URL, then staff_directory.db)
    #[arg(long, global = true)]
    database: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed the default admin account and sample employees
    Seed,

    /// List all admin accounts
    ListAdmins,

    /// Create an admin account
    CreateAdmin {
        #[arg(long)]
        email: String,

        #[arg(long)]
        name: String,

        /// Read from stdin when omitted
        #[arg(long)]
        password: Option<String>,
    },

    /// Reset an admin account password
    SetPassword {
        #[arg(long)]
        email: String,

        /// Read from stdin when omitted
        #[arg(long)]
        password: Option<String>,
    },
}

fn prompt_password() -> anyhow::Result<String> {
    eprint!("New password: ");
    std::io::stderr().flush().context("Failed to flush stderr")?;

    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read password from stdin")?;

    let password = line.trim_end_matches(['\r', '\n']).to_string();
    if password.is_empty() {
        bail!("Password must not be empty");
    }

    Ok(password)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    directory_server::setup_environment()?;

    let cli = Cli::parse();

    let db_path = cli
        .database
        .clone()
        .unwrap_or_else(Config::database_path_from_env);

    let db = DbService::new(&db_path)
        .await
        .with_context(|| format!("Failed to open database at {db_path}"))?;

    match cli.command {
        Commands::Seed => {
            let report = provision::seed(&db.pool).await?;
            println!(
                "Seeded {} admin account(s) and {} employee record(s)",
                report.admins_created, report.employees_created
            );
        }
        Commands::ListAdmins => {
            let admins = admin::find_all(&db.pool).await?;
            println!("Found {} admin account(s):", admins.len());
            for a in admins {
                let created = chrono::DateTime::from_timestamp_millis(a.created_at)
                    .map(|t| t.to_rfc3339())
                    .unwrap_or_else(|| a.created_at.to_string());
                println!("  {:<18} {:<32} {} (created {})", a.id, a.email, a.name, created);
            }
        }
        Commands::CreateAdmin {
            email,
            name,
            password,
        } => {
            let password = match password {
                Some(p) => p,
                None => prompt_password()?,
            };
            let account = provision::create_admin(
                &db.pool,
                AdminCreate {
                    email,
                    password,
                    name,
                },
            )
            .await?;
            println!("Admin account created: {} <{}>", account.name, account.email);
        }
        Commands::SetPassword { email, password } => {
            let password = match password {
                Some(p) => p,
                None => prompt_password()?,
            };
            let account = provision::reset_password(&db.pool, &email, &password).await?;
            println!("Password updated for {} <{}>", account.name, account.email);
        }
    }

    Ok(())
}
