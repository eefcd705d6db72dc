// ==========================================
// 全球服装生产管理系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体与类型
// 红线: 不含数据访问逻辑, 不含引擎逻辑
// ==========================================

pub mod capacity_log;
pub mod order;
pub mod site;
pub mod types;

// 重导出核心类型
pub use capacity_log::CapacityEditRecord;
pub use order::{CostBreakdown, EsgMetrics, Order, OrderDraft, VendorAssignment};
pub use site::{seed_catalog, Site};
pub use types::{OrderStatus, PoolType, ProgressStage, Region};
