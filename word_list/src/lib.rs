use std::collections::HashSet;
use std::path::Path;

/// 內建的常用英文單字表，一行一個單字
const BUNDLED_WORDS: &str = include_str!("../words.txt");

#[derive(Debug)]
pub enum WordListError {
    Io(std::io::Error),
    Empty,
}

impl std::fmt::Display for WordListError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            WordListError::Io(ref e) => write!(f, "cannot read word list: {}", e),
            WordListError::Empty => write!(f, "word list is empty"),
        }
    }
}

impl std::error::Error for WordListError {}

/// 允許查詢的單字集合，啟動時載入後不再變動
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    pub fn bundled() -> Self {
        Dictionary::parse(BUNDLED_WORDS)
    }

    /// 一行一個單字，空行與 `#` 開頭的註解會被略過。大小寫保持原樣
    pub fn parse(text: &str) -> Self {
        let words = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(|line| line.to_string())
            .collect();
        Dictionary { words }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, WordListError> {
        let text = std::fs::read_to_string(path).map_err(WordListError::Io)?;
        let dictionary = Dictionary::parse(&text);
        if dictionary.is_empty() {
            return Err(WordListError::Empty);
        }
        Ok(dictionary)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
