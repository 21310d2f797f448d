use reqwest::Error as ReqwestError;
use std::io::Error as stdIoError;
use tracing::{event, instrument, Level};
use warp::{
    filters::{body::BodyDeserializeError, cors::CorsForbidden},
    http::StatusCode,
    reject::{MethodNotAllowed, Reject},
    Rejection, Reply,
};

#[derive(Debug)]
pub enum Error {
    InvalidParameter,
    UnsupportedWord,
    ExternalAPIError(ReqwestError),
    MalformedResponse(String),
    StdFileError(stdIoError),
    ConfigError(String),
}

impl Error {
    /// 上游請求、回應解析與快取讀寫失敗，對外一律視為伺服器錯誤
    pub fn is_upstream_failure(&self) -> bool {
        matches!(
            self,
            Error::ExternalAPIError(_) | Error::MalformedResponse(_) | Error::StdFileError(_)
        )
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Error::InvalidParameter | Error::UnsupportedWord => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Error::InvalidParameter => write!(f, "无效的单词参数"),
            Error::UnsupportedWord => write!(f, "不支持的单词"),
            Error::ExternalAPIError(ref err) => write!(f, "{}", err),
            Error::MalformedResponse(ref msg) => write!(f, "{}", msg),
            Error::StdFileError(ref err) => write!(f, "{}", err),
            Error::ConfigError(ref msg) => write!(f, "config error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl Reject for Error {}

impl From<stdIoError> for Error {
    fn from(err: stdIoError) -> Self {
        Error::StdFileError(err)
    }
}

impl From<ReqwestError> for Error {
    fn from(err: ReqwestError) -> Self {
        Error::ExternalAPIError(err)
    }
}

fn error_reply(message: String, status: StatusCode) -> impl Reply {
    warp::reply::with_status(
        warp::reply::json(&serde_json::json!({ "error": message })),
        status,
    )
}

#[instrument]
pub async fn return_error(r: Rejection) -> Result<impl Reply, Rejection> {
    if let Some(error) = r.find::<Error>() {
        if error.is_upstream_failure() {
            event!(Level::ERROR, "{}", error);
        } else {
            event!(Level::WARN, "{}", error);
        }
        Ok(error_reply(error.to_string(), error.status()))
    } else if let Some(error) = r.find::<CorsForbidden>() {
        event!(Level::ERROR, "{}", error);
        Ok(error_reply(error.to_string(), StatusCode::FORBIDDEN))
    } else if let Some(error) = r.find::<BodyDeserializeError>() {
        event!(Level::WARN, "{}", error);
        Ok(error_reply(
            Error::InvalidParameter.to_string(),
            StatusCode::BAD_REQUEST,
        ))
    } else if let Some(error) = r.find::<MethodNotAllowed>() {
        event!(Level::WARN, "{}", error);
        Ok(error_reply(
            "Method not allowed".to_string(),
            StatusCode::METHOD_NOT_ALLOWED,
        ))
    } else {
        Ok(error_reply(
            "Route not found".to_string(),
            StatusCode::NOT_FOUND,
        ))
    }
}
