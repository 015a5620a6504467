use crate::cli::commands::Session;
use crate::cli::parser::{Commands, UserAction};
use crate::config::Config;
use crate::core::users::UserLogic;
use crate::errors::AppResult;
use crate::models::user::Role;
use crate::ui::messages::{header, success};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::User { action } = cmd {
        let mut session = Session::open(cfg)?;
        let actor = session.user.clone();

        match action {
            UserAction::Add {
                username,
                name,
                admin,
            } => {
                let role = if *admin { Role::Admin } else { Role::User };
                let user = UserLogic::create(session.store(), &actor, username, name, role)?;
                success(format!("User '{}' created ({}).", user.username, role.to_db_str()));
            }
            UserAction::List => {
                header("Users");
                let mut table = Table::new(vec![
                    Column::left("Username"),
                    Column::left("Name"),
                    Column::left("Role"),
                    Column::left("Active"),
                ]);
                for u in session.store().load_users()? {
                    table.add_row(vec![
                        u.username.clone(),
                        u.name.clone(),
                        u.role.to_db_str().to_string(),
                        if u.is_active { "yes" } else { "no" }.to_string(),
                    ]);
                }
                print!("{}", table.render());
            }
            UserAction::Del { username } => {
                UserLogic::delete(session.store(), &actor, username)?;
                success(format!("User '{}' deleted.", username));
            }
        }
    }
    Ok(())
}
