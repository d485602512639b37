use anyhow::Result;

use crate::app::App;
use crate::settings::Settings;

pub fn show(app: &App) -> Result<()> {
    app.require_user()?;
    for (key, value) in app.settings.entries() {
        let value = if value.is_empty() { "(none)".to_string() } else { value };
        println!("{:<22} {}", key, value);
    }
    Ok(())
}

pub async fn set(app: &mut App, key: &str, value: &str) -> Result<()> {
    app.require_user()?;
    let mut next = app.settings.clone();
    next.set(key, value)?;

    app.api.save_settings(&app.storage, &next).await?;
    app.settings = next;
    println!("Settings saved.");
    Ok(())
}

pub async fn reset(app: &mut App) -> Result<()> {
    app.require_user()?;
    let defaults = Settings::default();
    app.api.save_settings(&app.storage, &defaults).await?;
    app.settings = defaults;
    println!("Settings restored to defaults.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Latency;
    use crate::auth::Credentials;
    use crate::settings::{Language, SETTINGS_KEY};

    fn setup_app() -> App {
        let mut app = App::in_memory(Latency::none()).unwrap();
        app.auth
            .login(&app.storage, &Credentials::new("admin@example.com", "admin123"))
            .unwrap();
        app
    }

    #[tokio::test]
    async fn test_set_persists() {
        let mut app = setup_app();
        set(&mut app, "language", "en").await.unwrap();

        assert_eq!(app.settings.language, Language::En);
        assert_eq!(Settings::load(&app.storage).unwrap().language, Language::En);
    }

    #[tokio::test]
    async fn test_set_invalid_leaves_settings_alone() {
        let mut app = setup_app();
        assert!(set(&mut app, "tickets_per_page", "500").await.is_err());
        assert!(set(&mut app, "theme", "dark").await.is_err());

        assert_eq!(app.settings, Settings::default());
        assert!(app.storage.get_item(SETTINGS_KEY).unwrap().is_none());
    }

    #[tokio::test]
    async fn test_reset() {
        let mut app = setup_app();
        set(&mut app, "tickets_per_page", "25").await.unwrap();
        reset(&mut app).await.unwrap();

        assert_eq!(app.settings.tickets_per_page, 5);
        assert_eq!(Settings::load(&app.storage).unwrap(), Settings::default());
    }

    #[test]
    fn test_show() {
        assert!(show(&setup_app()).is_ok());
    }

    #[tokio::test]
    async fn test_settings_require_login() {
        let mut app = App::in_memory(Latency::none()).unwrap();

        assert!(show(&app).is_err());
        assert!(set(&mut app, "tickets_per_page", "25").await.is_err());
        assert!(reset(&mut app).await.is_err());

        assert_eq!(app.settings, Settings::default());
        assert!(app.storage.get_item(SETTINGS_KEY).unwrap().is_none());
    }
}
