//! 程序配置
//!
//! 配置在一次运行期间保持不变：先读 TOML 文件（可选），再用环境变量覆盖。

use crate::error::ConfigError;
use crate::locale::Locale;
use crate::models::ExpDictionary;
use serde::Deserialize;
use std::path::Path;

/// 指定配置文件路径的环境变量
pub const CONFIG_FILE_ENV: &str = "BILI_CONFIG_FILE";

/// 程序配置
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 每日任务开关
    pub daily_task: DailyTaskOptions,
    /// 经验值字典
    pub exp: ExpDictionary,
    pub logging: LoggingOptions,
    /// 日志语言
    pub locale: Locale,
}

/// 每日任务开关
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DailyTaskOptions {
    /// 是否观看视频
    pub is_watch_video: bool,
    /// 是否分享视频
    pub is_share_video: bool,
    /// 达到 LV6 后是否停止投币
    pub save_coins_when_lv6: bool,
}

impl Default for DailyTaskOptions {
    fn default() -> Self {
        Self {
            is_watch_video: true,
            is_share_video: true,
            save_coins_when_lv6: false,
        }
    }
}

/// 日志配置
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingOptions {
    /// 日志级别（RUST_LOG 优先）
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingOptions {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Compact,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Full,
    #[default]
    Compact,
}

impl Config {
    /// 从 TOML 文件加载
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content, &path.display().to_string())
    }

    /// 解析 TOML 文本，`origin` 仅用于错误信息
    pub fn from_toml_str(content: &str, origin: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: origin.to_string(),
            source,
        })
    }

    /// 读取 `BILI_CONFIG_FILE`（若设置）并应用环境变量覆盖
    pub fn from_env() -> Result<Self, ConfigError> {
        let base = match std::env::var(CONFIG_FILE_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::load(path.trim())?,
            _ => Self::default(),
        };
        base.with_overrides(|name| std::env::var(name).ok())
    }

    /// 用给定的变量查找函数覆盖配置项
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = parse_bool(&lookup, "BILI_IS_WATCH_VIDEO")? {
            self.daily_task.is_watch_video = v;
        }
        if let Some(v) = parse_bool(&lookup, "BILI_IS_SHARE_VIDEO")? {
            self.daily_task.is_share_video = v;
        }
        if let Some(v) = parse_bool(&lookup, "BILI_SAVE_COINS_WHEN_LV6")? {
            self.daily_task.save_coins_when_lv6 = v;
        }
        if let Some(level) = lookup("BILI_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(locale) = lookup("BILI_LOCALE") {
            self.locale = Locale::parse(&locale);
        }
        Ok(self)
    }
}

fn parse_bool<F>(lookup: &F, var_name: &str) -> Result<Option<bool>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(var_name) else {
        return Ok(None);
    };
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(Some(true)),
        "false" | "0" | "no" | "off" => Ok(Some(false)),
        _ => Err(ConfigError::EnvVarParseFailed {
            var_name: var_name.to_string(),
            value: raw,
            expected_type: "bool",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::exp::{DAILY_LOGIN, DAILY_SHARE_VIDEO};
    use std::collections::HashMap;

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = Config::from_toml_str(
            r#"
            locale = "en-US"

            [daily_task]
            save_coins_when_lv6 = true

            [exp]
            "每日登录" = 8
            "#,
            "inline",
        )
        .expect("解析配置失败");

        assert!(config.daily_task.is_watch_video);
        assert!(config.daily_task.is_share_video);
        assert!(config.daily_task.save_coins_when_lv6);
        assert_eq!(config.exp.get(DAILY_LOGIN), 8);
        assert_eq!(config.exp.get(DAILY_SHARE_VIDEO), 5);
        assert_eq!(config.locale, Locale::EnUs);
        assert_eq!(config.logging, LoggingOptions::default());
    }

    #[test]
    fn toml_locale_uses_lenient_parsing() {
        let unknown = Config::from_toml_str("locale = \"fr-FR\"\n", "inline").expect("解析配置失败");
        assert_eq!(unknown.locale, Locale::ZhCn);

        let upper = Config::from_toml_str("locale = \"EN\"\n", "inline").expect("解析配置失败");
        assert_eq!(upper.locale, Locale::EnUs);

        let underscore =
            Config::from_toml_str("locale = \"en_US\"\n", "inline").expect("解析配置失败");
        assert_eq!(underscore.locale, Locale::EnUs);
    }

    #[test]
    fn malformed_toml_reports_origin() {
        let err = Config::from_toml_str("[daily_task\n", "bad.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { ref path, .. } if path == "bad.toml"));
    }

    #[test]
    fn env_overrides_apply() {
        let vars = HashMap::from([
            ("BILI_IS_WATCH_VIDEO", "false"),
            ("BILI_IS_SHARE_VIDEO", "0"),
            ("BILI_LOG_LEVEL", "debug"),
            ("BILI_LOCALE", "en"),
        ]);
        let config = Config::default()
            .with_overrides(|name| vars.get(name).map(|v| v.to_string()))
            .expect("覆盖配置失败");

        assert!(!config.daily_task.is_watch_video);
        assert!(!config.daily_task.is_share_video);
        assert!(!config.daily_task.save_coins_when_lv6);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.locale, Locale::EnUs);
    }

    #[test]
    fn env_override_rejects_non_bool() {
        let err = Config::default()
            .with_overrides(|name| (name == "BILI_SAVE_COINS_WHEN_LV6").then(|| "maybe".to_string()))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::EnvVarParseFailed { ref var_name, .. } if var_name == "BILI_SAVE_COINS_WHEN_LV6"
        ));
    }
}
