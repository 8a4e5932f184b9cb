use std::fs;
use std::io;
use std::path::Path;

use crate::models::FeedbackJournal;

/// 从TOML文件加载反馈日志
pub fn load_journal(path: &Path) -> io::Result<FeedbackJournal> {
    if !path.exists() {
        return Ok(FeedbackJournal::default());
    }

    let content = fs::read_to_string(path)?;
    let journal: FeedbackJournal =
        toml::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    Ok(journal)
}

/// 保存反馈日志到TOML文件
pub fn save_journal(journal: &FeedbackJournal, path: &Path) -> io::Result<()> {
    let content = toml::to_string_pretty(journal)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    fs::write(path, content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;
    use uuid::Uuid;

    fn temp_path() -> PathBuf {
        env::temp_dir().join(format!("lamina-test-{}.toml", Uuid::new_v4()))
    }

    #[test]
    fn test_load_missing_file_yields_empty_journal() {
        let path = temp_path();
        let journal = load_journal(&path).unwrap();
        assert!(journal.entries.is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path();

        let mut journal = FeedbackJournal::default();
        journal.append("终端字体太小".to_string());
        journal.append("希望支持导出".to_string());
        save_journal(&journal, &path).unwrap();

        let loaded = load_journal(&path).unwrap();
        assert_eq!(loaded.entries.len(), 2);
        assert_eq!(loaded.entries[0].text, "终端字体太小");
        assert_eq!(loaded.entries[1].text, "希望支持导出");

        fs::remove_file(&path).unwrap();
    }
}
