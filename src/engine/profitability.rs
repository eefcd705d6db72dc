// ==========================================
// 全球服装生产管理系统 - 收益核算引擎
// ==========================================
// 职责: 由数量/单价/成本明细推导收入、成本、利润、利润率
// 红线: 纯函数, 不缓存 (表单编辑时实时重算)
// 说明: 全部金额按同一币种 (USD) 处理, 不做汇率换算
// ==========================================

use crate::domain::order::Order;
use serde::{Deserialize, Serialize};

// ==========================================
// ProfitSummary - 收益摘要
// ==========================================
// 说明: 派生数据, 不作为独立事实来源
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfitSummary {
    pub revenue: f64,    // 收入 = 数量 x 单价
    pub total_cost: f64, // 制造成本合计 = 单件成本 x 数量
    pub sga_total: f64,  // 销售管理费合计
    pub profit: f64,     // 营业利润
    pub margin_pct: f64, // 利润率 (%), 收入为 0 时为 0
}

impl ProfitSummary {
    /// 全零摘要
    pub fn zero() -> Self {
        Self {
            revenue: 0.0,
            total_cost: 0.0,
            sga_total: 0.0,
            profit: 0.0,
            margin_pct: 0.0,
        }
    }
}

// ==========================================
// ProfitabilityEngine - 收益核算引擎
// ==========================================
pub struct ProfitabilityEngine {
    // 无状态引擎, 不需要注入依赖
}

impl ProfitabilityEngine {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    /// 核算收益
    ///
    /// # 参数
    /// - `quantity`: 数量
    /// - `unit_price`: 单价 (USD)
    /// - `cost_components`: 单件制造成本分项 (不含销售管理费)
    /// - `sga_per_unit`: 单件销售管理费
    ///
    /// # 返回
    /// 收益摘要; 收入为 0 时利润率按 0 处理 (除零保护, 非错误)
    pub fn compute(
        &self,
        quantity: i64,
        unit_price: f64,
        cost_components: &[f64],
        sga_per_unit: f64,
    ) -> ProfitSummary {
        let qty = quantity as f64;
        let revenue = qty * unit_price;
        let unit_cost: f64 = cost_components.iter().sum();
        let total_cost = unit_cost * qty;
        let sga_total = sga_per_unit * qty;
        let profit = revenue - total_cost - sga_total;
        let margin_pct = if revenue > 0.0 {
            profit / revenue * 100.0
        } else {
            0.0
        };

        ProfitSummary {
            revenue,
            total_cost,
            sga_total,
            profit,
            margin_pct,
        }
    }

    /// 核算单个订单的收益
    ///
    /// # 返回
    /// - Some(summary): 订单带成本明细
    /// - None: 订单未录入成本明细
    pub fn for_order(&self, order: &Order) -> Option<ProfitSummary> {
        let costs = order.costs.as_ref()?;
        Some(self.compute(
            order.quantity,
            order.unit_price,
            &costs.components(),
            costs.sga,
        ))
    }

    /// 汇总台账收益 (仅统计带成本明细的订单)
    ///
    /// 说明: 汇总利润率由累计收入/利润重新推导, 同样做除零保护
    pub fn aggregate(&self, orders: &[Order]) -> ProfitSummary {
        let mut total = ProfitSummary::zero();
        for order in orders {
            if let Some(summary) = self.for_order(order) {
                total.revenue += summary.revenue;
                total.total_cost += summary.total_cost;
                total.sga_total += summary.sga_total;
                total.profit += summary.profit;
            }
        }
        total.margin_pct = if total.revenue > 0.0 {
            total.profit / total.revenue * 100.0
        } else {
            0.0
        };
        total
    }
}

impl Default for ProfitabilityEngine {
    fn default() -> Self {
        Self::new()
    }
}
