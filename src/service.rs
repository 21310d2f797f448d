use crate::store::Store;
use crate::upstream::WordSource;
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;
use tracing::{info, instrument};
use word_list::Dictionary;

static LEADING_FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^```json\s*").unwrap());
static TRAILING_FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*```$").unwrap());

/// 去掉模型回覆最前面的 ```json 與最後面的 ```，中間的內容不動
pub fn strip_code_fence(text: &str) -> String {
    let text = LEADING_FENCE.replace(text, "");
    TRAILING_FENCE.replace(&text, "").into_owned()
}

#[derive(Clone)]
pub struct WordService {
    dictionary: Arc<Dictionary>,
    store: Store,
    source: Arc<dyn WordSource>,
}

impl WordService {
    pub fn new(dictionary: Dictionary, store: Store, source: Arc<dyn WordSource>) -> Self {
        WordService {
            dictionary: Arc::new(dictionary),
            store,
            source,
        }
    }

    /// 先查快取檔，沒有才向上游請求並寫入快取
    #[instrument(skip(self))]
    pub async fn get_word_info(&self, word: &str) -> Result<String, handle_errors::Error> {
        if word.is_empty() {
            return Err(handle_errors::Error::InvalidParameter);
        }
        if !self.dictionary.contains(word) {
            return Err(handle_errors::Error::UnsupportedWord);
        }

        if let Some(cached) = self.store.get_word(word).await? {
            info!("快取命中：{}", word);
            return Ok(cached);
        }

        let reply = self.source.fetch_word_info(word).await?;
        let word_info = strip_code_fence(&reply);
        self.store.save_word(word, &word_info).await?;
        info!("已快取：{}", word);
        Ok(word_info)
    }
}
