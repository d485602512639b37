use anyhow::{bail, Result};
use std::io::{self, Write};

use crate::app::App;

pub fn run(app: &mut App, id: &str, force: bool) -> Result<()> {
    app.require_user()?;
    let ticket = app.store.find(id)?;

    if !force {
        print!("Delete ticket #{} \"{}\"? [y/N] ", id, ticket.title);
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Cancelled.");
            return Ok(());
        }
    }

    if app.store.delete(id) {
        println!("Deleted ticket #{}", id);
    } else {
        bail!("Failed to delete ticket #{}", id);
    }

    Ok(())
}

/// Internal function for testing without stdin interaction
#[cfg(test)]
pub fn run_force(app: &mut App, id: &str) -> Result<()> {
    run(app, id, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Latency;
    use crate::auth::Credentials;
    use crate::models::{CommentAuthor, TicketDraft};
    use chrono::Utc;
    use proptest::prelude::*;

    fn setup_app() -> App {
        let mut app = App::in_memory(Latency::none()).unwrap();
        app.auth
            .login(&app.storage, &Credentials::new("admin@example.com", "admin123"))
            .unwrap();
        app
    }

    #[test]
    fn test_delete_existing_ticket_force() {
        let mut app = setup_app();
        run_force(&mut app, "3").unwrap();
        assert!(app.store.get("3").is_none());
        assert_eq!(app.store.len(), 3);
    }

    #[test]
    fn test_delete_nonexistent_ticket() {
        let mut app = setup_app();
        let err = run_force(&mut app, "99999").unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_delete_ticket_with_comments() {
        let mut app = setup_app();
        let author = CommentAuthor::from(app.require_user().unwrap());
        app.store.add_comment("1", "First", author, None, Utc::now()).unwrap();

        run_force(&mut app, "1").unwrap();
        assert!(app.store.get("1").is_none());
    }

    #[test]
    fn test_delete_requires_login() {
        let mut app = App::in_memory(Latency::none()).unwrap();
        assert!(run_force(&mut app, "1").is_err());
        assert_eq!(app.store.len(), 4);
    }

    #[test]
    fn test_delete_twice() {
        let mut app = setup_app();
        run_force(&mut app, "2").unwrap();
        assert!(run_force(&mut app, "2").is_err());
    }

    proptest! {
        #[test]
        fn prop_delete_force_removes_ticket(title in "[a-zA-Z0-9][a-zA-Z0-9 ]{0,49}") {
            let mut app = setup_app();
            let id = app
                .store
                .create(TicketDraft::new(&title, "1"), Utc::now())
                .unwrap()
                .id
                .clone();

            run_force(&mut app, &id).unwrap();
            prop_assert!(app.store.get(&id).is_none());
            prop_assert_eq!(app.store.len(), 4);
        }

        #[test]
        fn prop_delete_nonexistent_fails(id in 1000u64..10000) {
            let mut app = setup_app();
            prop_assert!(run_force(&mut app, &id.to_string()).is_err());
        }
    }
}
