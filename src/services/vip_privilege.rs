use crate::models::UserInfo;
use crate::shutdown::ShutdownSignal;
use anyhow::Result;
use async_trait::async_trait;

/// 大会员福利能力
#[async_trait]
pub trait VipPrivilegeService: Send + Sync {
    /// 领取每月大会员福利，返回是否实际领取成功
    async fn receive_vip_privilege(
        &self,
        user: &UserInfo,
        shutdown: &ShutdownSignal,
    ) -> Result<bool>;
}
