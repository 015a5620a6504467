use crate::cli::commands::{Session, resolve_period};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::narrative::{GeminiNarrator, NarrativeInput, Narrator, narrative_report};
use crate::ui::messages::{header, info};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report { period } = cmd {
        let period = resolve_period(cfg, period)?;
        let mut session = Session::open(cfg)?;
        let owner = session.owner().to_string();
        let report = Core::load_report(session.store(), &owner, &period)?;

        header(format!("Analysis - {}", period.label));

        let narrator = GeminiNarrator::from_config(&cfg.narrative)?;
        if narrator.is_some() {
            info(format!("Asking {} ...", cfg.narrative.model));
        }

        let input = NarrativeInput::from(&report);
        let text = narrative_report(narrator.as_ref().map(|n| n as &dyn Narrator), &input);
        println!("{text}");
    }
    Ok(())
}
