use anyhow::Result;
use std::path::Path;

use crate::app::App;
use crate::attachment::Attachment;
use crate::models::CommentAuthor;

pub async fn run(app: &mut App, id: &str, text: &str, file: Option<&Path>) -> Result<()> {
    let author = CommentAuthor::from(&app.current_user()?);
    let attachment = file.map(Attachment::from_path).transpose()?;

    let comment = app
        .api
        .add_comment(&mut app.store, id, text, author, attachment)
        .await?;

    match &comment.file_name {
        Some(name) => println!("Added comment {} to ticket #{} (attached {})", comment.id, id, name),
        None => println!("Added comment {} to ticket #{}", comment.id, id),
    }
    Ok(())
}
