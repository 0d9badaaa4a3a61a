use crate::domain::model::{DropLevel, DropReport};
use crate::utils::error::Result;
use async_trait::async_trait;

/// 特權指令的設定來源
pub trait DropCommandConfig: Send + Sync {
    /// 提權程式，例如 `sudo`；空字串代表直接執行
    fn escalation(&self) -> &str;
    fn shell(&self) -> &str;
    fn control_file(&self) -> &str;
    fn sync_first(&self) -> bool;
}

#[async_trait]
pub trait CacheDropper: Send + Sync {
    /// 顯示在 `Running:` 後面的完整指令
    fn describe(&self, level: DropLevel) -> String;

    async fn drop_caches(&self, level: DropLevel) -> Result<DropReport>;
}
