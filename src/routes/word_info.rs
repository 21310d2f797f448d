use crate::service::WordService;
use serde_json::Value;
use tracing::info;

/// `{ "word": string }`，word 缺少、不是字串或為空字串時回傳 InvalidParameter
pub async fn get_word_info(
    service: WordService,
    body: Value,
) -> Result<impl warp::Reply, warp::Rejection> {
    let word = match body.get("word").and_then(Value::as_str) {
        Some(word) if !word.is_empty() => word,
        _ => return Err(warp::reject::custom(handle_errors::Error::InvalidParameter)),
    };

    match service.get_word_info(word).await {
        Ok(word_info) => {
            info!("成功獲取：{}", word);
            // 回傳 JSON 字串（內容本身也是 JSON 文字）
            Ok(warp::reply::json(&word_info))
        }
        Err(e) => Err(warp::reject::custom(e)),
    }
}
