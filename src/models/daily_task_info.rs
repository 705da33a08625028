use serde::{Deserialize, Serialize};

/// 今日任务完成情况
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTaskInfo {
    #[serde(default)]
    pub login: bool,
    #[serde(default)]
    pub watch: bool,
    /// 今日投币已获得的经验
    #[serde(default)]
    pub coins: u32,
    #[serde(default)]
    pub share: bool,
}

