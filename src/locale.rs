//! 日志文案本地化
//!
//! 所有面向用户的进度日志都经由 [`Locale`] 渲染，默认简体中文。

use serde::Deserialize;
use std::fmt;

/// 日志语言
///
/// 配置文件与环境变量使用同一套解析规则，无法识别的取值回落到简体中文。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum Locale {
    /// 简体中文
    #[default]
    ZhCn,
    /// English
    EnUs,
}

impl From<String> for Locale {
    fn from(value: String) -> Self {
        Locale::parse(&value)
    }
}

impl Locale {
    /// 从字符串解析语言，无法识别时回落到简体中文
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "en" | "en-us" | "en-gb" => Locale::EnUs,
            _ => Locale::ZhCn,
        }
    }

    /// 任务开始横幅文本
    ///
    /// # 参数
    /// - `name`: 任务显示名
    pub fn task_started(self, name: &str) -> String {
        match self {
            Locale::ZhCn => format!("开始【{}】", name),
            Locale::EnUs => format!("Starting [{}]", name),
        }
    }

    /// 任务结束横幅文本
    ///
    /// # 参数
    /// - `name`: 任务显示名
    pub fn task_completed(self, name: &str) -> String {
        match self {
            Locale::ZhCn => format!("【{}】结束", name),
            Locale::EnUs => format!("[{}] completed", name),
        }
    }

    /// 任务失败日志
    ///
    /// # 参数
    /// - `name`: 任务显示名
    /// - `reason`: 失败原因（含上下文链）
    pub fn task_failed(self, name: &str, reason: &str) -> String {
        match self {
            Locale::ZhCn => format!("【{}】失败，失败信息: {}", name, reason),
            Locale::EnUs => format!("[{}] failed: {}", name, reason),
        }
    }

    /// 非致命失败后的提示
    pub fn continue_after_failure(self) -> &'static str {
        match self {
            Locale::ZhCn => "继续执行其他任务",
            Locale::EnUs => "continuing with the remaining tasks",
        }
    }

    /// 致命失败后的提示
    pub fn abort_after_failure(self) -> &'static str {
        match self {
            Locale::ZhCn => "终止后续任务",
            Locale::EnUs => "aborting the remaining tasks",
        }
    }

    /// 登录未返回用户信息时的错误信息
    pub fn login_failed(self) -> &'static str {
        match self {
            Locale::ZhCn => "登录失败，请检查Cookie",
            Locale::EnUs => "login failed, please check the cookie",
        }
    }

    /// 登录成功日志
    ///
    /// # 参数
    /// - `exp`: 每日登录获得的经验值
    pub fn login_succeeded(self, exp: u32) -> String {
        match self {
            Locale::ZhCn => format!("登录成功，经验+{} √", exp),
            Locale::EnUs => format!("logged in, exp +{} √", exp),
        }
    }

    /// 任务被配置关闭时的跳过提示
    pub fn task_disabled(self) -> &'static str {
        match self {
            Locale::ZhCn => "已配置为关闭，跳过任务",
            Locale::EnUs => "disabled by configuration, skipping",
        }
    }

    /// 达到 LV6 后跳过投币的提示
    pub fn save_coins_at_lv6(self) -> &'static str {
        match self {
            Locale::ZhCn => "已经为LV6大佬，开始白嫖",
            Locale::EnUs => "already LV6, keeping the coins",
        }
    }

    /// 硬币余额日志
    ///
    /// # 参数
    /// - `balance`: 当前硬币余额
    pub fn coin_balance(self, balance: f64) -> String {
        match self {
            Locale::ZhCn => format!("【硬币余额】 {}", balance),
            Locale::EnUs => format!("[coin balance] {}", balance),
        }
    }

    /// 领取福利后刷新用户信息失败
    ///
    /// # 参数
    /// - `reason`: 失败原因
    pub fn refresh_failed(self, reason: &str) -> String {
        match self {
            Locale::ZhCn => format!("领取福利成功，但之后刷新用户信息时异常，信息：{}", reason),
            Locale::EnUs => format!(
                "privilege claimed, but refreshing the account afterwards failed: {}",
                reason
            ),
        }
    }

    /// 领取福利后刷新用户信息成功
    pub fn refresh_succeeded(self) -> &'static str {
        match self {
            Locale::ZhCn => "领取福利成功，已刷新用户信息",
            Locale::EnUs => "privilege claimed, account info refreshed",
        }
    }

    /// 运行终止汇总
    ///
    /// # 参数
    /// - `task`: 终止时所在任务的显示名
    pub fn run_aborted(self, task: &str) -> String {
        match self {
            Locale::ZhCn => format!("❌ 每日任务终止于【{}】", task),
            Locale::EnUs => format!("❌ daily tasks aborted at [{}]", task),
        }
    }

    pub fn run_completed(self) -> &'static str {
        match self {
            Locale::ZhCn => "✅ 每日任务执行完毕",
            Locale::EnUs => "✅ daily tasks finished",
        }
    }

    /// 运行开始时间
    ///
    /// # 参数
    /// - `time`: 格式化后的本地时间
    pub fn run_started_at(self, time: &str) -> String {
        match self {
            Locale::ZhCn => format!("开始时间: {}", time),
            Locale::EnUs => format!("started at: {}", time),
        }
    }

    /// 运行完成时间
    ///
    /// # 参数
    /// - `time`: 格式化后的本地时间
    pub fn run_finished_at(self, time: &str) -> String {
        match self {
            Locale::ZhCn => format!("完成时间: {}", time),
            Locale::EnUs => format!("finished at: {}", time),
        }
    }
}

/// 任务名称
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskName {
    DailyTask,
    Login,
    WatchAndShareVideo,
    AddCoinsForVideo,
    LiveSign,
    MangaSign,
    MangaRead,
    ExchangeSilverToCoin,
    ReceiveVipPrivilege,
    ReceiveMangaVipReward,
    Charge,
}

impl TaskName {
    /// 按语言渲染任务名
    pub fn display(self, locale: Locale) -> &'static str {
        match locale {
            Locale::ZhCn => match self {
                TaskName::DailyTask => "每日任务",
                TaskName::Login => "登录",
                TaskName::WatchAndShareVideo => "观看、分享视频",
                TaskName::AddCoinsForVideo => "投币",
                TaskName::LiveSign => "直播签到",
                TaskName::MangaSign => "漫画签到",
                TaskName::MangaRead => "漫画阅读",
                TaskName::ExchangeSilverToCoin => "银瓜子兑换硬币",
                TaskName::ReceiveVipPrivilege => "领取大会员福利",
                TaskName::ReceiveMangaVipReward => "领取大会员漫画权益",
                TaskName::Charge => "B币券充电",
            },
            Locale::EnUs => match self {
                TaskName::DailyTask => "Daily tasks",
                TaskName::Login => "Login",
                TaskName::WatchAndShareVideo => "Watch & share video",
                TaskName::AddCoinsForVideo => "Donate coins",
                TaskName::LiveSign => "Live sign-in",
                TaskName::MangaSign => "Comic sign-in",
                TaskName::MangaRead => "Comic reading",
                TaskName::ExchangeSilverToCoin => "Exchange silver for coins",
                TaskName::ReceiveVipPrivilege => "Claim VIP privilege",
                TaskName::ReceiveMangaVipReward => "Claim VIP comic reward",
                TaskName::Charge => "Charge with B-coin coupon",
            },
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::ZhCn => write!(f, "zh-CN"),
            Locale::EnUs => write!(f, "en-US"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_falls_back_to_chinese() {
        assert_eq!(Locale::parse("en_US"), Locale::EnUs);
        assert_eq!(Locale::parse("EN"), Locale::EnUs);
        assert_eq!(Locale::parse("zh-CN"), Locale::ZhCn);
        assert_eq!(Locale::parse("fr-FR"), Locale::ZhCn);
        assert_eq!(Locale::parse(""), Locale::ZhCn);
    }

    #[test]
    fn every_task_has_a_name_in_both_locales() {
        let all = [
            TaskName::DailyTask,
            TaskName::Login,
            TaskName::WatchAndShareVideo,
            TaskName::AddCoinsForVideo,
            TaskName::LiveSign,
            TaskName::MangaSign,
            TaskName::MangaRead,
            TaskName::ExchangeSilverToCoin,
            TaskName::ReceiveVipPrivilege,
            TaskName::ReceiveMangaVipReward,
            TaskName::Charge,
        ];
        for name in all {
            assert!(!name.display(Locale::ZhCn).is_empty());
            assert!(!name.display(Locale::EnUs).is_empty());
            assert_ne!(name.display(Locale::ZhCn), name.display(Locale::EnUs));
        }
    }

    #[test]
    fn banners_embed_the_task_name() {
        assert_eq!(Locale::ZhCn.task_started("登录"), "开始【登录】");
        assert_eq!(Locale::EnUs.task_completed("Login"), "[Login] completed");
        assert!(Locale::ZhCn.login_succeeded(5).contains("+5"));
    }
}
