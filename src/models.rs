use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 一条已提交的反馈
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackEntry {
    pub id: String,
    pub submitted_at: DateTime<Local>,
    pub text: String,
}

impl FeedbackEntry {
    pub fn new(text: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            submitted_at: Local::now(),
            text,
        }
    }
}

/// TOML文件结构
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackJournal {
    pub meta: JournalMeta,
    #[serde(default)]
    pub entries: Vec<FeedbackEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalMeta {
    pub version: String,
    pub created_at: DateTime<Local>,
    pub last_modified: DateTime<Local>,
}

impl Default for FeedbackJournal {
    fn default() -> Self {
        let now = Local::now();
        Self {
            meta: JournalMeta {
                version: "1.0".to_string(),
                created_at: now,
                last_modified: now,
            },
            entries: Vec::new(),
        }
    }
}

impl FeedbackJournal {
    /// 追加一条反馈并刷新修改时间
    pub fn append(&mut self, text: String) {
        self.entries.push(FeedbackEntry::new(text));
        self.meta.last_modified = Local::now();
    }
}
