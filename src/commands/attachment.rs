use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::Path;

use crate::app::App;
use crate::attachment::decode_data_url;

/// Writes a comment's attachment to `dest`. When `dest` is a directory the
/// original file name is kept.
pub fn save(app: &App, ticket_id: &str, comment_id: &str, dest: &Path) -> Result<()> {
    app.require_user()?;
    let ticket = app.store.find(ticket_id)?;
    let comment = ticket
        .comments
        .iter()
        .find(|c| c.id == comment_id)
        .ok_or_else(|| anyhow!("Comment {} not found on ticket #{}", comment_id, ticket_id))?;

    let (url, name) = match (&comment.file_url, &comment.file_name) {
        (Some(url), Some(name)) => (url, name),
        _ => return Err(anyhow!("Comment {} has no attachment", comment_id)),
    };

    let (_, bytes) = decode_data_url(url)?;
    let target = if dest.is_dir() {
        dest.join(name)
    } else {
        dest.to_path_buf()
    };

    fs::write(&target, &bytes)
        .with_context(|| format!("Failed to write {}", target.display()))?;
    println!("Saved {} ({} bytes) to {}", name, bytes.len(), target.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Latency;
    use crate::attachment::Attachment;
    use crate::auth::Credentials;
    use crate::models::CommentAuthor;
    use chrono::Utc;
    use tempfile::tempdir;

    fn setup_app() -> (App, String, String) {
        let mut app = App::in_memory(Latency::none()).unwrap();
        app.auth
            .login(&app.storage, &Credentials::new("admin@example.com", "admin123"))
            .unwrap();
        let author = CommentAuthor::from(app.require_user().unwrap());

        let attachment = Attachment::from_bytes("error.log", b"panic at line 12\n").unwrap();
        let with_file = app
            .store
            .add_comment("2", "Log attached", author.clone(), Some(attachment), Utc::now())
            .unwrap()
            .id
            .clone();
        let plain = app
            .store
            .add_comment("2", "No file here", author, None, Utc::now())
            .unwrap()
            .id
            .clone();

        (app, with_file, plain)
    }

    #[test]
    fn test_save_into_directory_keeps_name() {
        let (app, comment, _) = setup_app();
        let dir = tempdir().unwrap();

        save(&app, "2", &comment, dir.path()).unwrap();
        let written = fs::read(dir.path().join("error.log")).unwrap();
        assert_eq!(written, b"panic at line 12\n");
    }

    #[test]
    fn test_save_to_explicit_path() {
        let (app, comment, _) = setup_app();
        let dir = tempdir().unwrap();
        let target = dir.path().join("copy.txt");

        save(&app, "2", &comment, &target).unwrap();
        assert!(target.exists());
    }

    #[test]
    fn test_save_comment_without_attachment() {
        let (app, _, plain) = setup_app();
        let dir = tempdir().unwrap();
        let err = save(&app, "2", &plain, dir.path()).unwrap_err();
        assert!(err.to_string().contains("no attachment"));
    }

    #[test]
    fn test_save_unknown_comment() {
        let (app, _, _) = setup_app();
        let dir = tempdir().unwrap();
        assert!(save(&app, "2", "nope", dir.path()).is_err());
        assert!(save(&app, "404", "nope", dir.path()).is_err());
    }
}
