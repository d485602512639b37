use anyhow::Result;
use std::io::{self, Write};

use crate::app::App;
use crate::auth::Credentials;

pub async fn login(app: &mut App, email: &str, password: Option<&str>) -> Result<()> {
    let password = match password {
        Some(p) => p.to_string(),
        None => prompt_password()?,
    };

    if app.api.latency().login.as_millis() > 0 {
        eprintln!("Signing in...");
    }

    let credentials = Credentials::new(email, &password);
    let user = app.api.login(&mut app.auth, &app.storage, &credentials).await?;

    println!("Logged in as {} <{}> ({})", user.name, user.email, user.role);
    Ok(())
}

fn prompt_password() -> Result<String> {
    eprint!("Password: ");
    io::stderr().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim_end_matches(['\r', '\n']).to_string())
}

pub fn logout(app: &mut App) -> Result<()> {
    if !app.auth.is_authenticated() {
        println!("Not logged in.");
        return Ok(());
    }

    app.auth.logout(&app.storage)?;
    println!("Logged out.");
    Ok(())
}

pub fn whoami(app: &App) -> Result<()> {
    match app.auth.user() {
        Some(user) if app.auth.is_authenticated() => {
            println!("{} <{}>", user.name, user.email);
            println!("Role: {}", user.role);
            println!("ID: {}", user.id);
        }
        _ => println!("Not logged in."),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Latency;
    use crate::auth::AUTH_KEY;

    fn setup_app() -> App {
        App::in_memory(Latency::none()).unwrap()
    }

    #[tokio::test]
    async fn test_login_and_logout() {
        let mut app = setup_app();

        login(&mut app, "admin@example.com", Some("admin123")).await.unwrap();
        assert!(app.auth.is_authenticated());
        assert!(app.storage.get_item(AUTH_KEY).unwrap().is_some());
        assert!(whoami(&app).is_ok());

        logout(&mut app).unwrap();
        assert!(!app.auth.is_authenticated());
        assert!(app.storage.get_item(AUTH_KEY).unwrap().is_none());
    }

    #[tokio::test]
    async fn test_login_bad_password() {
        let mut app = setup_app();

        let err = login(&mut app, "admin@example.com", Some("wrong"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Invalid email or password"));
        assert!(!app.auth.is_authenticated());
    }

    #[test]
    fn test_logout_when_signed_out() {
        let mut app = setup_app();
        assert!(logout(&mut app).is_ok());
    }
}
