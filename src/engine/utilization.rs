// ==========================================
// 全球服装生产管理系统 - 产能占用聚合引擎
// ==========================================
// 职责: 按基地/产能池汇总台账中的需用线数
// 红线: 每次全量扫描台账重算, 不维护增量计数
//       (台账与占用不可能出现漂移)
// 红线: 超产能只做提示, 不阻断落账
// ==========================================

use crate::domain::order::Order;
use crate::domain::types::PoolType;
use chrono::Datelike;
use std::collections::HashMap;

// ==========================================
// UtilizationAggregator - 产能占用聚合引擎
// ==========================================
pub struct UtilizationAggregator {
    // 无状态引擎, 不需要注入依赖
}

impl UtilizationAggregator {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    /// 汇总指定基地/池的当前占用线数
    ///
    /// # 参数
    /// - `orders`: 全量台账
    /// - `site_code`: 基地代码
    /// - `pool`: 产能池
    /// - `year`: 可选的基准年份过滤 (按纳期年份匹配);
    ///           None 为全年份累计, Some(y) 为仅当年 (仪表盘展示策略)
    ///
    /// # 返回
    /// 匹配订单的 lines_required 之和, 无匹配时为 0
    pub fn usage(
        &self,
        orders: &[Order],
        site_code: &str,
        pool: PoolType,
        year: Option<i32>,
    ) -> i64 {
        orders
            .iter()
            .filter(|o| o.site_code == site_code && o.pool == pool)
            .filter(|o| year.map_or(true, |y| o.delivery_date.year() == y))
            .map(|o| o.lines_required)
            .sum()
    }

    /// 汇总全部 (基地, 池) 的占用线数
    ///
    /// 用途: 仪表盘快照一次取全表
    pub fn usage_by_pool(
        &self,
        orders: &[Order],
        year: Option<i32>,
    ) -> HashMap<(String, PoolType), i64> {
        let mut usage: HashMap<(String, PoolType), i64> = HashMap::new();
        for order in orders {
            if let Some(y) = year {
                if order.delivery_date.year() != y {
                    continue;
                }
            }
            *usage
                .entry((order.site_code.clone(), order.pool))
                .or_insert(0) += order.lines_required;
        }
        usage
    }

    /// 判断追加指定线数后是否超产能
    ///
    /// 说明: 仅用于提示, 超产能不会阻断提交
    pub fn is_over_capacity(&self, usage: i64, additional_lines: i64, limit: i64) -> bool {
        usage + additional_lines > limit
    }

    /// 剩余线数 (可为负, 表示已超用)
    pub fn remaining(&self, usage: i64, limit: i64) -> i64 {
        limit - usage
    }
}

impl Default for UtilizationAggregator {
    fn default() -> Self {
        Self::new()
    }
}
