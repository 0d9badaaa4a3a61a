use std::fmt;
use std::process::ExitStatus;

/// 寫入 drop_caches 的等級
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DropLevel {
    /// free pagecache
    PageCache = 1,
    /// free dentries and inodes
    DentriesInodes = 2,
    /// free pagecache, dentries and inodes
    All = 3,
}

impl DropLevel {
    pub const ALL_LEVELS: [DropLevel; 3] = [Self::PageCache, Self::DentriesInodes, Self::All];

    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn menu_label(self) -> &'static str {
        match self {
            Self::PageCache => "Clear PageCache only (safest option)",
            Self::DentriesInodes => "Clear dentries and inodes",
            Self::All => "Clear PageCache, dentries, and inodes (most aggressive)",
        }
    }
}

impl fmt::Display for DropLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl TryFrom<i64> for DropLevel {
    type Error = i64;

    fn try_from(value: i64) -> std::result::Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::PageCache),
            2 => Ok(Self::DentriesInodes),
            3 => Ok(Self::All),
            other => Err(other),
        }
    }
}

/// 使用者在選單輸入的選項
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    Drop(DropLevel),
    ShowInfo,
    InvalidOption(i64),
    InvalidInput(String),
}

impl MenuChoice {
    pub const INFO_OPTION: &'static str = "4";

    /// 解析一行輸入；`4` 先於數字解析判斷
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed == Self::INFO_OPTION {
            return Self::ShowInfo;
        }

        match trimmed.parse::<i64>() {
            Ok(value) => match DropLevel::try_from(value) {
                Ok(level) => Self::Drop(level),
                Err(value) => Self::InvalidOption(value),
            },
            Err(_) => Self::InvalidInput(trimmed.to_string()),
        }
    }
}

/// 一次特權指令執行的結果
#[derive(Debug, Clone)]
pub struct DropReport {
    pub level: DropLevel,
    pub command: String,
    /// 沒有取得結束狀態時為 `None`；指令無法啟動的原因記在 `spawn_error`
    pub exit_status: Option<ExitStatus>,
    pub spawn_error: Option<String>,
}

impl DropReport {
    pub fn succeeded(&self) -> bool {
        self.spawn_error.is_none() && self.exit_status.map(|s| s.success()).unwrap_or(true)
    }
}

#[derive(Debug, Clone)]
pub enum RunOutcome {
    InfoShown,
    CacheDropped(DropReport),
    DryRun { level: DropLevel, command: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_drop_levels() {
        assert_eq!(MenuChoice::parse("1"), MenuChoice::Drop(DropLevel::PageCache));
        assert_eq!(MenuChoice::parse("2\n"), MenuChoice::Drop(DropLevel::DentriesInodes));
        assert_eq!(MenuChoice::parse("  3  "), MenuChoice::Drop(DropLevel::All));
    }

    #[test]
    fn test_parse_info_and_invalid() {
        assert_eq!(MenuChoice::parse("4"), MenuChoice::ShowInfo);
        assert_eq!(MenuChoice::parse(" 4\n"), MenuChoice::ShowInfo);
        assert_eq!(MenuChoice::parse("04"), MenuChoice::InvalidOption(4));
        assert_eq!(MenuChoice::parse("5"), MenuChoice::InvalidOption(5));
        assert_eq!(MenuChoice::parse("-1"), MenuChoice::InvalidOption(-1));
        assert_eq!(MenuChoice::parse("abc"), MenuChoice::InvalidInput("abc".to_string()));
        assert_eq!(MenuChoice::parse(""), MenuChoice::InvalidInput(String::new()));
        assert_eq!(MenuChoice::parse("1.0"), MenuChoice::InvalidInput("1.0".to_string()));
    }

    #[test]
    fn test_drop_level_display_and_try_from() {
        assert_eq!(DropLevel::PageCache.to_string(), "1");
        assert_eq!(DropLevel::DentriesInodes.to_string(), "2");
        assert_eq!(DropLevel::All.to_string(), "3");
        assert_eq!(DropLevel::try_from(3), Ok(DropLevel::All));
        assert_eq!(DropLevel::try_from(4), Err(4));
    }
}
