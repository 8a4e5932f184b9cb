//! 反馈接收端 (Sink)
//!
//! 把提交的反馈交给外部协作者；UI 层只依赖 trait

use std::io;
use std::path::PathBuf;

use crate::models::FeedbackJournal;
use crate::storage::{load_journal, save_journal};

/// 接收提交反馈的外部协作者
pub trait FeedbackSink {
    /// 提交一条反馈，失败时返回错误供 UI 展示
    fn submit(&mut self, text: &str) -> io::Result<()>;
}

/// 默认实现：记录诊断日志并追加到本地 TOML 日志文件
pub struct JournalSink {
    path: PathBuf,
    journal: FeedbackJournal,
}

impl JournalSink {
    pub fn open(path: PathBuf) -> io::Result<Self> {
        let journal = load_journal(&path)?;
        Ok(Self { path, journal })
    }

    #[allow(dead_code)]
    pub fn entry_count(&self) -> usize {
        self.journal.entries.len()
    }
}

impl FeedbackSink for JournalSink {
    fn submit(&mut self, text: &str) -> io::Result<()> {
        log::info!("收到反馈: {}", text);

        self.journal.append(text.to_string());
        // 每次提交立即落盘，避免进程异常退出丢失反馈
        save_journal(&self.journal, &self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;
    use uuid::Uuid;

    #[test]
    fn test_journal_sink_persists_each_submit() {
        let path = env::temp_dir().join(format!("lamina-sink-{}.toml", Uuid::new_v4()));

        let mut sink = JournalSink::open(path.clone()).unwrap();
        sink.submit("面板切换很顺手").unwrap();
        sink.submit("想要深色主题").unwrap();

        // 重新打开应能看到两条记录
        let reopened = JournalSink::open(path.clone()).unwrap();
        assert_eq!(reopened.entry_count(), 2);

        fs::remove_file(&path).unwrap();
    }
}
