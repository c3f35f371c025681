use crate::cli::commands::open_pool;
use crate::cli::parser::{Commands, UserCommands};
use crate::config::Config;
use crate::core::user::UserLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::User { action } = cmd else {
        return Ok(());
    };

    let mut pool = open_pool(cfg)?;

    match action {
        UserCommands::Add { name, email } => {
            let u = UserLogic::add(&mut pool, name, email)?;
            success(format!("User #{} {} <{}> added.", u.id, u.name, u.email));
        }
        UserCommands::List => {
            let users = UserLogic::list(&pool)?;
            if users.is_empty() {
                info("No users registered.");
                return Ok(());
            }

            let sep = cfg.separator_char.chars().next().unwrap_or('-');
            let mut table = Table::new(
                vec![
                    Column::right("ID"),
                    Column::left("NAME"),
                    Column::left("E-MAIL"),
                    Column::left(""),
                ],
                sep,
            );
            for u in users {
                let current = if u.id == cfg.current_user { "*" } else { "" };
                table.add_row(vec![u.id.to_string(), u.name, u.email, current.into()]);
            }
            print!("{}", table.render());
        }
        UserCommands::Edit { id, name, email } => {
            let u = UserLogic::edit(&mut pool, *id, name.as_deref(), email.as_deref())?;
            success(format!("User #{} is now {} <{}>.", u.id, u.name, u.email));
        }
        UserCommands::Remove { id } => {
            UserLogic::remove(&mut pool, *id)?;
            success(format!("User #{} removed.", id));
        }
    }

    Ok(())
}
