use crate::types::chat::{ChatMessage, ChatRequest, ChatResponse};
use async_trait::async_trait;
use tracing::{info, instrument};

pub const OPENROUTER_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "deepseek/deepseek-r1-distill-qwen-32b:free";
pub const DEFAULT_REFERER: &str = "http://localhost:3000";
pub const DEFAULT_PROXY: &str = "http://127.0.0.1:7890";

const WORD_PROMPT: &str = r#"分析英语单词 "{word}" 并按以下 JSON 格式返回信息：
{
  "forms": {
    "base": {
      "value": "单词原形",
      "examples": [
        { "en": "英文例句1", "zh": "中文翻译1" },
        { "en": "英文例句2", "zh": "中文翻译2" }
      ]
    },
    "past": {
      "value": "过去式（如果是动词）",
      "examples": [
        { "en": "过去式英文例句1", "zh": "过去式中文翻译1" },
        { "en": "过去式英文例句2", "zh": "过去式中文翻译2" }
      ]
    },
    "pastParticiple": {
      "value": "过去分词（如果是动词）",
      "examples": [
        { "en": "过去分词英文例句1", "zh": "过去分词中文翻译1" },
        { "en": "过去分词英文例句2", "zh": "过去分词中文翻译2" }
      ]
    }
  }
}

注意：
1. 如果某个变形形式不存在，整个对象设为 null
2. 必须严格按照这个 JSON 格式返回
3. 只返回 JSON 字符串，不要包含其他说明文字
4. 每种形式都需要提供 2 个例句
5. 例句必须是完整的英文句子
6. 每个例句都必须提供准确的中文翻译"#;

pub fn word_prompt(word: &str) -> String {
    WORD_PROMPT.replace("{word}", word)
}

/// 產生單字資料的上游來源，回傳模型的原始文字
#[async_trait]
pub trait WordSource: Send + Sync {
    async fn fetch_word_info(&self, word: &str) -> Result<String, handle_errors::Error>;
}

#[derive(Debug, Clone)]
pub struct OpenRouterConfig {
    pub api_key: String,
    pub url: String,
    pub model: String,
    pub referer: String,
    pub proxy: Option<String>,
}

#[derive(Debug, Clone)]
pub struct OpenRouter {
    client: reqwest::Client,
    config: OpenRouterConfig,
}

impl OpenRouter {
    pub fn new(config: OpenRouterConfig) -> Result<Self, handle_errors::Error> {
        let builder = reqwest::Client::builder().use_rustls_tls();
        let builder = match config.proxy.as_deref() {
            Some(proxy) => builder.proxy(reqwest::Proxy::all(proxy)?),
            None => builder.no_proxy(),
        };
        let client = builder.build()?;
        Ok(OpenRouter { client, config })
    }
}

#[async_trait]
impl WordSource for OpenRouter {
    #[instrument(skip(self))]
    async fn fetch_word_info(&self, word: &str) -> Result<String, handle_errors::Error> {
        let body = ChatRequest {
            messages: vec![ChatMessage::user(word_prompt(word))],
            model: self.config.model.clone(),
        };

        info!("向 {} 請求單字：{}", self.config.model, word);
        let response = self
            .client
            .post(&self.config.url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("HTTP-Referer", &self.config.referer)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let res: ChatResponse = response.json().await?;
        res.first_content().ok_or_else(|| {
            handle_errors::Error::MalformedResponse(
                "upstream response has no choices[0].message.content".to_string(),
            )
        })
    }
}
