use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

#[derive(Clone, Debug)]
pub struct Store {
    pub data_dir: PathBuf, // 每個單字一個 <word>.json
}

impl Store {
    pub async fn new(data_dir: impl Into<PathBuf>) -> Result<Self, handle_errors::Error> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir).await?;
        info!("資料目錄：{}", data_dir.display());
        Ok(Store { data_dir })
    }

    pub fn word_path(&self, word: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", word))
    }

    /// 讀取快取內容，不存在時回傳 None。非 UTF-8 的位元組以替換字元讀出
    pub async fn get_word(&self, word: &str) -> Result<Option<String>, handle_errors::Error> {
        match fs::read(self.word_path(word)).await {
            Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(handle_errors::Error::StdFileError(e)),
        }
    }

    /// 先寫入暫存檔再改名，寫到一半失敗不會留下殘缺的 <word>.json
    pub async fn save_word(&self, word: &str, content: &str) -> Result<(), handle_errors::Error> {
        let target = self.word_path(word);
        let tmp = self
            .data_dir
            .join(format!(".{}.{}.tmp", word, uuid::Uuid::new_v4()));

        if let Err(e) = write_then_rename(&tmp, &target, content).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(handle_errors::Error::StdFileError(e));
        }
        debug!("已寫入：{}", target.display());
        Ok(())
    }
}

async fn write_then_rename(tmp: &Path, target: &Path, content: &str) -> std::io::Result<()> {
    fs::write(tmp, content).await?;
    fs::rename(tmp, target).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn new_creates_nested_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let data_dir = dir.path().join("a").join("data");
        let store = Store::new(&data_dir).await.unwrap();
        assert!(data_dir.is_dir());
        assert_eq!(store.word_path("run"), data_dir.join("run.json"));
    }

    #[tokio::test]
    async fn missing_word_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path()).await.unwrap();
        assert!(store.get_word("run").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn saved_word_is_read_back_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path()).await.unwrap();
        let content = "{\"forms\": {\"base\": null}}\n";

        store.save_word("run", content).await.unwrap();

        assert_eq!(store.get_word("run").await.unwrap().as_deref(), Some(content));
        let on_disk = std::fs::read_to_string(dir.path().join("run.json")).unwrap();
        assert_eq!(on_disk, content);
    }

    #[tokio::test]
    async fn invalid_utf8_is_read_with_replacement_characters() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path()).await.unwrap();
        std::fs::write(store.word_path("run"), b"{\"a\":\"\xff\"}").unwrap();

        let content = store.get_word("run").await.unwrap();
        assert_eq!(content.as_deref(), Some("{\"a\":\"\u{FFFD}\"}"));
    }

    #[tokio::test]
    async fn save_leaves_no_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path()).await.unwrap();
        store.save_word("swim", "{}").await.unwrap();
        store.save_word("swim", "{\"a\":1}").await.unwrap();

        let names: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["swim.json".to_string()]);
        assert_eq!(store.get_word("swim").await.unwrap().as_deref(), Some("{\"a\":1}"));
    }

    #[tokio::test]
    async fn failed_save_reports_file_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path()).await.unwrap();
        std::fs::remove_dir_all(dir.path()).unwrap();

        let err = store.save_word("run", "{}").await.unwrap_err();
        assert!(matches!(err, handle_errors::Error::StdFileError(_)));
        assert!(err.is_upstream_failure());
    }
}
