//! 经验值字典
//!
//! 启动时加载一次，之后只读注入到需要它的任务中。

use serde::Deserialize;
use std::collections::HashMap;

pub const DAILY_LOGIN: &str = "每日登录";
pub const DAILY_WATCH_VIDEO: &str = "每日观看视频";
pub const DAILY_SHARE_VIDEO: &str = "每日分享视频";
pub const DAILY_ADD_COIN: &str = "每日投币";

/// 奖励名称 → 经验值
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "HashMap<String, u32>")]
pub struct ExpDictionary {
    entries: HashMap<String, u32>,
}

impl ExpDictionary {
    /// 查询经验值，未配置的奖励视为 0
    pub fn get(&self, key: &str) -> u32 {
        self.entries.get(key).copied().unwrap_or(0)
    }
}

impl Default for ExpDictionary {
    fn default() -> Self {
        let entries = [
            (DAILY_LOGIN, 5),
            (DAILY_WATCH_VIDEO, 5),
            (DAILY_SHARE_VIDEO, 5),
            (DAILY_ADD_COIN, 10),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
        Self { entries }
    }
}

/// 配置文件中的条目覆盖默认值，未出现的条目保留默认
impl From<HashMap<String, u32>> for ExpDictionary {
    fn from(overrides: HashMap<String, u32>) -> Self {
        let mut dict = Self::default();
        dict.entries.extend(overrides);
        dict
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_daily_rewards() {
        let dict = ExpDictionary::default();
        assert_eq!(dict.get(DAILY_LOGIN), 5);
        assert_eq!(dict.get(DAILY_ADD_COIN), 10);
        assert_eq!(dict.get("不存在的奖励"), 0);
    }

    #[test]
    fn overrides_merge_with_defaults() {
        let dict = ExpDictionary::from(HashMap::from([
            (DAILY_LOGIN.to_string(), 7),
            ("额外奖励".to_string(), 1),
        ]));
        assert_eq!(dict.get(DAILY_LOGIN), 7);
        assert_eq!(dict.get(DAILY_WATCH_VIDEO), 5);
        assert_eq!(dict.get("额外奖励"), 1);
        assert_eq!(dict.entries.len(), 5);
    }
}
