use crate::cli::commands::{Session, resolve_period};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::audit;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        period,
        force,
    } = cmd
    {
        let period = resolve_period(cfg, period)?;
        let mut session = Session::open(cfg)?;
        let owner = session.owner().to_string();
        let report = Core::load_report(session.store(), &owner, &period)?;

        if ExportLogic::export(&report, *format, file, *force)? {
            audit(
                session.store(),
                "export",
                file,
                &format!("{} export of {}", format.as_str(), period.id),
            );
        }
    }
    Ok(())
}
