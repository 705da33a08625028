pub mod daily_task_info;
pub mod exp;
pub mod user_info;

pub use daily_task_info::DailyTaskInfo;
pub use exp::ExpDictionary;
pub use user_info::{LevelInfo, UserInfo, Wallet};
