use tracing::info;
use warp::http::StatusCode;

use crate::types::payload::{ContentBody, Html, Message, NewNote};
use crate::workflow::NoteService;

pub async fn get_every_note(service: NoteService) -> Result<impl warp::Reply, warp::Rejection> {
    match service.list().await {
        Ok(notes) => Ok(warp::reply::json(&notes)),
        Err(e) => Err(warp::reject::custom(e)),
    }
}

pub async fn check_content(
    service: NoteService,
    body: ContentBody,
) -> Result<impl warp::Reply, warp::Rejection> {
    let content = body.content.unwrap_or_default();
    match service.preflight(&content).await {
        Ok(()) => Ok(warp::reply::json(&Message::new("OK"))),
        Err(e) => Err(warp::reject::custom(e)),
    }
}

pub async fn add_note(
    service: NoteService,
    note: NewNote,
) -> Result<impl warp::Reply, warp::Rejection> {
    let title = note.title.unwrap_or_default();
    let content = note.content.unwrap_or_default();
    match service.submit(&title, &content).await {
        Ok(note) => {
            info!("added note: {}", note.title);
            Ok(warp::reply::with_status(
                warp::reply::json(&Message::new("Saved Successfully")),
                StatusCode::OK,
            ))
        }
        Err(e) => Err(warp::reject::custom(e)),
    }
}

pub async fn markdown_to_html(
    service: NoteService,
    body: ContentBody,
) -> Result<impl warp::Reply, warp::Rejection> {
    let content = body.content.unwrap_or_default();
    let html = service.render(&content).map_err(warp::reject::custom)?;
    Ok(warp::reply::json(&Html { html }))
}
