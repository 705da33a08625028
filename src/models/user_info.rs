use serde::{Deserialize, Serialize};

/// 登录后的账户快照
///
/// 由登录任务产生，后续任务只读使用；刷新时整体替换，不原地修改。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(default)]
    pub mid: u64,
    #[serde(default)]
    pub uname: String,
    #[serde(default)]
    pub level_info: LevelInfo,
    /// 硬币余额
    #[serde(default)]
    pub money: f64,
    #[serde(default)]
    pub wallet: Wallet,
    #[serde(default, rename = "vipStatus")]
    pub vip_status: u8,
    #[serde(default, rename = "vipType")]
    pub vip_type: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LevelInfo {
    pub current_level: u8,
    #[serde(default)]
    pub current_exp: u32,
    /// 满级时平台返回 "--"，这里只保留数值
    #[serde(default, deserialize_with = "deserialize_next_exp")]
    pub next_exp: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    #[serde(default)]
    pub bcoin_balance: f64,
    #[serde(default)]
    pub coupon_balance: f64,
}

impl UserInfo {
    /// 当前等级
    pub fn level(&self) -> u8 {
        self.level_info.current_level
    }

    /// 打码后的用户名，用于日志
    pub fn masked_uname(&self) -> String {
        let chars: Vec<char> = self.uname.chars().collect();
        match chars.len() {
            0 => String::new(),
            1 => "*".to_string(),
            2 => format!("{}*", chars[0]),
            n => format!("{}{}{}", chars[0], "*".repeat(n - 2), chars[n - 1]),
        }
    }
}

fn deserialize_next_exp<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NextExp {
        Number(u32),
        Text(String),
    }

    Ok(match Option::<NextExp>::deserialize(deserializer)? {
        Some(NextExp::Number(n)) => Some(n),
        Some(NextExp::Text(s)) => s.parse().ok(),
        None => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_nav_payload() {
        let user: UserInfo = serde_json::from_value(json!({
            "mid": 20_001,
            "uname": "测试用户",
            "level_info": { "current_level": 6, "current_exp": 28_800, "next_exp": "--" },
            "money": 233.5,
            "wallet": { "bcoin_balance": 5.0, "coupon_balance": 5.0 },
            "vipStatus": 1,
            "vipType": 2
        }))
        .expect("解析用户信息失败");

        assert_eq!(user.level(), 6);
        assert_eq!(user.level_info.next_exp, None);
        assert_eq!((user.vip_status, user.vip_type), (1, 2));
        assert_eq!(user.wallet.coupon_balance, 5.0);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let user: UserInfo =
            serde_json::from_value(json!({ "level_info": { "current_level": 3, "next_exp": 1500 } }))
                .expect("解析用户信息失败");

        assert_eq!(user.level(), 3);
        assert_eq!(user.level_info.next_exp, Some(1500));
        assert_eq!(user.vip_status, 0);
    }

    #[test]
    fn masks_user_name() {
        let mut user = UserInfo::default();
        assert_eq!(user.masked_uname(), "");
        user.uname = "Ray".to_string();
        assert_eq!(user.masked_uname(), "R*y");
        user.uname = "小明".to_string();
        assert_eq!(user.masked_uname(), "小*");
    }
}
