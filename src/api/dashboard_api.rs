// ==========================================
// 全球服装生产管理系统 - 仪表盘 API
// ==========================================
// 职责: 按基地/池聚合产能占用快照, 汇总台账收益
// 说明: 年份过滤为展示策略, 由调用方选择
//       (None = 全年份累计, Some(y) = 仅当年)
// ==========================================

use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::domain::types::{PoolType, Region};
use crate::engine::profitability::{ProfitSummary, ProfitabilityEngine};
use crate::engine::utilization::UtilizationAggregator;
use crate::repository::order_repo::OrderRepository;
use crate::repository::site_repo::SiteRepository;
use serde::{Deserialize, Serialize};

// ==========================================
// 快照数据结构
// ==========================================

/// 单池占用
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PoolUsage {
    pub used: i64,  // 已占用线数
    pub total: i64, // 产能上限
    pub over: bool, // 是否用满/超用 (UI 红色高亮规则)
}

/// 单基地占用
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteUtilization {
    pub site_code: String,     // 基地代码
    pub site_name: String,     // 基地名称
    pub region: Region,        // 所属区域
    pub main: PoolUsage,       // 本厂
    pub outsourced: PoolUsage, // 外协
}

/// 仪表盘快照
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub year: Option<i32>,           // 使用的年份过滤 (None = 全年份)
    pub sites: Vec<SiteUtilization>, // 按注册表顺序
}

// ==========================================
// DashboardApi - 仪表盘 API
// ==========================================

/// 仪表盘 API
///
/// 职责:
/// 1. 产能占用快照 (每基地两池的 used/total)
/// 2. 台账收益汇总
pub struct DashboardApi {
    /// 订单台账仓储
    order_repo: Arc<OrderRepository>,
    /// 生产基地仓储
    site_repo: Arc<SiteRepository>,
    /// 产能占用聚合引擎
    utilization: UtilizationAggregator,
    /// 收益核算引擎
    profitability: ProfitabilityEngine,
}

impl DashboardApi {
    /// 创建新的 DashboardApi 实例
    pub fn new(order_repo: Arc<OrderRepository>, site_repo: Arc<SiteRepository>) -> Self {
        Self {
            order_repo,
            site_repo,
            utilization: UtilizationAggregator::new(),
            profitability: ProfitabilityEngine::new(),
        }
    }

    /// 产能占用快照
    ///
    /// # 参数
    /// - `year`: 可选年份过滤 (按纳期年份)
    ///
    /// # 返回
    /// 每个基地两个池的 {used, total, over}; 基地顺序与注册表一致
    pub fn snapshot(&self, year: Option<i32>) -> ApiResult<DashboardSnapshot> {
        let sites = self.site_repo.find_all()?;
        let orders = self.order_repo.find_all()?;
        let usage = self.utilization.usage_by_pool(&orders, year);

        let site_utils = sites
            .into_iter()
            .map(|site| {
                let pool_usage = |pool: PoolType, total: i64| {
                    let used = usage
                        .get(&(site.site_code.clone(), pool))
                        .copied()
                        .unwrap_or(0);
                    PoolUsage {
                        used,
                        total,
                        // 用满即高亮 (total 为 0 的池不高亮)
                        over: used >= total && total > 0,
                    }
                };
                SiteUtilization {
                    main: pool_usage(PoolType::Main, site.main_lines),
                    outsourced: pool_usage(PoolType::Outsourced, site.outsourced_lines),
                    site_code: site.site_code,
                    site_name: site.site_name,
                    region: site.region,
                }
            })
            .collect();

        Ok(DashboardSnapshot {
            year,
            sites: site_utils,
        })
    }

    /// 台账收益汇总 (仅统计带成本明细的订单)
    pub fn profitability_overview(&self, year: Option<i32>) -> ApiResult<ProfitSummary> {
        use chrono::Datelike;

        let orders = self.order_repo.find_all()?;
        let filtered: Vec<_> = match year {
            Some(y) => orders
                .into_iter()
                .filter(|o| o.delivery_date.year() == y)
                .collect(),
            None => orders,
        };
        Ok(self.profitability.aggregate(&filtered))
    }
}
