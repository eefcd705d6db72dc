// ==========================================
// 全球服装生产管理系统 - 会话状态
// ==========================================
// 职责: 装配单个用户会话的全部仓储/引擎/API 实例
// 红线: 会话之间互不共享状态 (无进程级单例)
// ==========================================

use std::sync::{Arc, Mutex};

use crate::api::{CapacityApi, DashboardApi, OrderApi};
use crate::config::SessionConfig;
use crate::db;
use crate::repository::{CapacityLogRepository, OrderRepository, SiteRepository};

// ==========================================
// SessionState - 会话状态
// ==========================================

/// 会话状态
///
/// 每个用户会话持有一份: 私有内存库连接 + 全部 API 实例。
/// 会话结束时状态随连接一并消亡 (不落盘)。
pub struct SessionState {
    /// 订单 API
    pub order_api: Arc<OrderApi>,

    /// 产能管理 API
    pub capacity_api: Arc<CapacityApi>,

    /// 仪表盘 API
    pub dashboard_api: Arc<DashboardApi>,

    /// 会话配置
    pub config: Arc<SessionConfig>,
}

impl SessionState {
    /// 创建新的会话状态
    ///
    /// # 说明
    /// 该方法会:
    /// 1. 打开会话内存库并建表、写入种子基地目录
    /// 2. 初始化所有 Repository
    /// 3. 创建所有 API 实例
    pub fn new() -> Result<Self, String> {
        Self::with_config(SessionConfig::from_env())
    }

    /// 使用指定配置创建会话状态
    pub fn with_config(config: SessionConfig) -> Result<Self, String> {
        tracing::info!("初始化会话状态");

        // 会话内存库 (建表 + 种子数据)
        let conn = db::init_session_db().map_err(|e| format!("无法初始化会话库: {}", e))?;
        let conn = Arc::new(Mutex::new(conn));

        // ==========================================
        // 初始化 Repository 层
        // ==========================================
        let site_repo = Arc::new(SiteRepository::new(conn.clone()));
        let order_repo = Arc::new(OrderRepository::new(conn.clone()));
        let capacity_log_repo = Arc::new(CapacityLogRepository::new(conn));

        // ==========================================
        // 初始化 API 层
        // ==========================================
        let config = Arc::new(config);

        let order_api = Arc::new(OrderApi::new(order_repo.clone(), site_repo.clone()));
        let capacity_api = Arc::new(CapacityApi::new(
            site_repo.clone(),
            capacity_log_repo,
            config.clone(),
        ));
        let dashboard_api = Arc::new(DashboardApi::new(order_repo, site_repo));

        tracing::info!("会话状态初始化完成");

        Ok(Self {
            order_api,
            capacity_api,
            dashboard_api,
            config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sessions_are_isolated() {
        let a = SessionState::new().unwrap();
        let b = SessionState::new().unwrap();

        // 会话 A 落账一单, 会话 B 不可见
        let draft = crate::domain::OrderDraft::new(
            "ACME",
            "ST-001",
            100,
            5.0,
            chrono::NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            "VNM",
            crate::domain::PoolType::Main,
            "第一缝制厂",
            1,
        );
        a.order_api.submit_estimated(draft).unwrap();

        assert_eq!(a.order_api.count_orders().unwrap(), 1);
        assert_eq!(b.order_api.count_orders().unwrap(), 0);
    }
}
