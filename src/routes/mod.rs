pub mod note;

use handle_errors::return_error;
use serde::de::DeserializeOwned;
use warp::{http::Method, Filter};

use crate::workflow::NoteService;

const MAX_BODY_BYTES: u64 = 100 * 1024;

/// Request body as JSON or as an urlencoded form.
fn body<T>() -> impl Filter<Extract = (T,), Error = warp::Rejection> + Clone
where
    T: DeserializeOwned + Send + 'static,
{
    warp::body::content_length_limit(MAX_BODY_BYTES)
        .and(warp::body::json().or(warp::body::form()).unify())
}

pub fn routes(
    service: NoteService,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    let service_filter = warp::any().map(move || service.clone());

    let cors = warp::cors()
        .allow_any_origin()
        .allow_headers(vec!["Content-Type"])
        .allow_methods(&[Method::GET, Method::POST]);

    let list = warp::path("list")
        .and(warp::path::end())
        .and(warp::get())
        .and(service_filter.clone())
        .and_then(note::get_every_note);

    let check = warp::path("check")
        .and(warp::path::end())
        .and(warp::post())
        .and(service_filter.clone())
        .and(body())
        .and_then(note::check_content);

    let add = warp::path("add")
        .and(warp::path::end())
        .and(warp::post())
        .and(service_filter.clone())
        .and(body())
        .and_then(note::add_note);

    let md_to_html = warp::path("md-to-html")
        .and(warp::path::end())
        .and(warp::post())
        .and(service_filter.clone())
        .and(body())
        .and_then(note::markdown_to_html);

    list.or(check)
        .or(add)
        .or(md_to_html)
        .recover(return_error)
        .with(cors)
        .with(warp::trace(|info| {
            tracing::info_span!(
                "request",
                method = %info.method(),
                path = %info.path(),
                id = %uuid::Uuid::new_v4(),
            )
        }))
}
