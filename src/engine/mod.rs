// ==========================================
// 全球服装生产管理系统 - 引擎层
// ==========================================
// 职责: 实现业务规则引擎, 不拼 SQL
// 红线: Engine 不拼 SQL, 纯函数优先
// ==========================================

pub mod profitability;
pub mod utilization;

// 重导出核心引擎
pub use profitability::{ProfitSummary, ProfitabilityEngine};
pub use utilization::UtilizationAggregator;
