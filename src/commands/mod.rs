pub mod attachment;
pub mod comment;
pub mod create;
pub mod dashboard;
pub mod delete;
pub mod init;
pub mod list;
pub mod session;
pub mod settings;
pub mod show;
pub mod update;

use anyhow::{bail, Result};

use crate::app::App;
use crate::cli::{AttachmentCommands, Commands, SettingsCommands};

/// Runs one parsed command against the application state.
pub async fn dispatch(app: &mut App, command: Commands) -> Result<()> {
    match command {
        Commands::Init => {
            let cwd = std::env::current_dir()?;
            init::run(&cwd)
        }

        Commands::Login { email, password } => {
            session::login(app, &email, password.as_deref()).await
        }

        Commands::Logout => session::logout(app),

        Commands::Whoami => session::whoami(app),

        Commands::Dashboard => dashboard::run(app),

        Commands::List {
            search,
            status,
            priority,
            page,
            per_page,
        } => list::run(app, search.as_deref(), &status, &priority, page, per_page),

        Commands::Show { id } => show::run(app, &id).await,

        Commands::Create {
            title,
            description,
            priority,
            assign,
        } => create::run(
            app,
            &title,
            description.as_deref(),
            priority.as_deref(),
            assign.as_deref(),
        ),

        Commands::Edit {
            id,
            title,
            description,
            status,
            priority,
        } => {
            update::run(
                app,
                &id,
                title.as_deref(),
                description.as_deref(),
                status.as_deref(),
                priority.as_deref(),
            )
            .await
        }

        Commands::Assign { id, assignee } => update::assign(app, &id, Some(&assignee)).await,

        Commands::Unassign { id } => update::assign(app, &id, None).await,

        Commands::Comment { id, text, file } => {
            comment::run(app, &id, &text, file.as_deref()).await
        }

        Commands::Attachment { action } => match action {
            AttachmentCommands::Save {
                ticket,
                comment,
                dest,
            } => attachment::save(app, &ticket, &comment, &dest),
        },

        Commands::Delete { id, force } => delete::run(app, &id, force),

        Commands::Settings { action } => match action {
            SettingsCommands::Show => settings::show(app),
            SettingsCommands::Set { key, value } => settings::set(app, &key, &value).await,
            SettingsCommands::Reset => settings::reset(app).await,
        },

        Commands::Shell => bail!("Already in the shell"),
    }
}
