pub mod word_info;

use crate::service::WordService;
use handle_errors::return_error;
use warp::{http::Method, Filter};

pub fn word_info_routes(
    service: WordService,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    let service_filter = warp::any().map(move || service.clone());

    let cors = warp::cors()
        .allow_any_origin()
        .allow_headers(vec!["Content-Type"])
        .allow_methods(&[Method::POST]);

    let get_word_info = warp::post()
        .and(warp::path!("api" / "word-info"))
        .and(service_filter)
        .and(warp::body::json())
        .and_then(word_info::get_word_info)
        .with(warp::trace(|info| {
            tracing::info_span!(
                "word_info request",
                method = %info.method(),
                path = %info.path(),
                id = %uuid::Uuid::new_v4(),
            )
        }));

    get_word_info
        .with(warp::trace::request())
        .with(cors)
        .recover(return_error)
}
