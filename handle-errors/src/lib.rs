use config::ConfigError;
use reqwest::Error as ReqwestError;
use serde::Serialize;
use sqlx::migrate::MigrateError;
use tracing::{event, instrument, Level};
use warp::{
    filters::{body::BodyDeserializeError, cors::CorsForbidden},
    http::StatusCode,
    reject::{MethodNotAllowed, Reject},
    Rejection, Reply,
};

#[derive(Debug)]
pub enum Error {
    MissingFields,
    EmptyContent,
    EmptyMarkdown,
    ContentLength { min: usize, max: usize },
    GrammarIssues(serde_json::Value),
    DuplicateTitle,
    DatabaseQueryError(sqlx::Error),
    MigrationError(MigrateError),
    ExternalAPIError(ReqwestError),
    ConfigurationError(ConfigError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Error::MissingFields => write!(f, "Title and Content can't be empty"),
            Error::EmptyContent => write!(f, "Content can't be empty"),
            Error::EmptyMarkdown => write!(f, "Markdown content is required"),
            Error::ContentLength { min, max } => {
                write!(f, "Content should be between {} and {} characters", min, max)
            }
            Error::GrammarIssues(_) => {
                write!(f, "Please correct your Content, it has some grammatical mistakes in it.")
            }
            Error::DuplicateTitle => write!(f, "Already exists with same title"),
            Error::DatabaseQueryError(ref e) => {
                write!(f, "Query could not be executed: {}", e)
            }
            Error::MigrationError(ref e) => write!(f, "Cannot migrate the database: {}", e),
            Error::ExternalAPIError(ref err) if err.is_timeout() => {
                write!(f, "Grammar service did not answer in time")
            }
            Error::ExternalAPIError(ref err) => {
                write!(f, "Grammar service call failed: {}", err)
            }
            Error::ConfigurationError(ref e) => write!(f, "Invalid configuration: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl Reject for Error {}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::MissingFields
            | Error::EmptyContent
            | Error::EmptyMarkdown
            | Error::ContentLength { .. } => StatusCode::BAD_REQUEST,
            Error::GrammarIssues(_) | Error::DuplicateTitle => StatusCode::CONFLICT,
            Error::DatabaseQueryError(_)
            | Error::MigrationError(_)
            | Error::ExternalAPIError(_)
            | Error::ConfigurationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn details(&self) -> Option<&serde_json::Value> {
        match self {
            Error::GrammarIssues(details) => Some(details),
            _ => None,
        }
    }
}

#[derive(Serialize, Debug)]
pub struct ErrorBody<'a> {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<&'a serde_json::Value>,
}

fn reply(
    message: String,
    details: Option<&serde_json::Value>,
    status: StatusCode,
) -> warp::reply::WithStatus<warp::reply::Json> {
    warp::reply::with_status(warp::reply::json(&ErrorBody { message, details }), status)
}

#[instrument]
pub async fn return_error(r: Rejection) -> Result<impl Reply, Rejection> {
    if let Some(error) = r.find::<Error>() {
        let status = error.status();
        if status.is_server_error() {
            event!(Level::ERROR, "{}", error);
        } else {
            event!(Level::WARN, "{}", error);
        }
        Ok(reply(error.to_string(), error.details(), status))
    } else if let Some(error) = r.find::<CorsForbidden>() {
        event!(Level::ERROR, "{}", error);
        Ok(reply(error.to_string(), None, StatusCode::FORBIDDEN))
    } else if let Some(error) = r.find::<BodyDeserializeError>() {
        event!(Level::WARN, "{}", error);
        Ok(reply(error.to_string(), None, StatusCode::BAD_REQUEST))
    } else if let Some(error) = r.find::<warp::reject::PayloadTooLarge>() {
        event!(Level::WARN, "{}", error);
        Ok(reply(error.to_string(), None, StatusCode::PAYLOAD_TOO_LARGE))
    } else if let Some(error) = r.find::<warp::reject::LengthRequired>() {
        event!(Level::WARN, "{}", error);
        Ok(reply(error.to_string(), None, StatusCode::LENGTH_REQUIRED))
    } else if let Some(error) = r.find::<warp::reject::UnsupportedMediaType>() {
        event!(Level::WARN, "{}", error);
        Ok(reply(error.to_string(), None, StatusCode::UNSUPPORTED_MEDIA_TYPE))
    } else if let Some(error) = r.find::<MethodNotAllowed>() {
        event!(Level::WARN, "{}", error);
        Ok(reply(error.to_string(), None, StatusCode::METHOD_NOT_ALLOWED))
    } else {
        Ok(reply(
            "Route not found".to_string(),
            None,
            StatusCode::NOT_FOUND,
        ))
    }
}
