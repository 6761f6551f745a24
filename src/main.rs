use anyhow::Result;
use clap::Parser;
use sigur_syncconf::cli::{Cli, Command};
use sigur_syncconf::core::{apply, db, output, settings};
use sigur_syncconf::core::settings::ServerSyncSettings;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Apply {
            db: db_path,
            config,
            dry_run,
            format,
        } => {
            let settings = ServerSyncSettings::load(&config)?;
            if dry_run {
                output::print_assignments(&settings.assignments(), &format)?;
                return Ok(());
            }
            let mut conn = db::db_connect(&db_path.to_string_lossy())?;
            let report = apply::apply_settings(&mut conn, &settings)?;
            output::print_apply_report(&report, &format)?;
        }
        Command::Show { db: db_path, format } => {
            let conn = db::db_connect(&db_path.to_string_lossy())?;
            let readings = apply::snapshot(&conn)?;
            output::print_snapshot(&readings, &format)?;
        }
        Command::Disable { db: db_path } => {
            let mut conn = db::db_connect(&db_path.to_string_lossy())?;
            let report = apply::set_enabled(&mut conn, false)?;
            output::print_apply_report(&report, "text")?;
        }
        Command::Template => {
            print!("{}", settings::SETTINGS_TEMPLATE);
        }
    }

    Ok(())
}
