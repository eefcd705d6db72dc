// ==========================================
// 全球服装生产管理系统 - 订单 API
// ==========================================
// 职责: 订单提交流程 (校验 -> 产能提示 -> 落账)、台账查询、
//       表格导出、收益实时试算
// 红线: 超产能只提示不阻断 (管理层可明知超订)
// 红线: 台账只追加; 重复内容的两笔订单是两条独立记录
// ==========================================

use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::api::validator::OrderDraftValidator;
use crate::domain::order::{Order, OrderDraft};
use crate::domain::types::{OrderStatus, PoolType, ProgressStage};
use crate::engine::profitability::{ProfitSummary, ProfitabilityEngine};
use crate::engine::utilization::UtilizationAggregator;
use crate::repository::order_repo::OrderRepository;
use crate::repository::site_repo::SiteRepository;
use serde::{Deserialize, Serialize};

// ==========================================
// AdmissionReceipt - 提交回执
// ==========================================

/// 提交回执
///
/// 说明: over_capacity 为提示标志, 不代表失败;
///       remaining_lines 为本单落账前的剩余线数 (可为负)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdmissionReceipt {
    pub order_id: String,     // 订单ID
    pub seq: i64,             // 落账序号
    pub over_capacity: bool,  // 是否超产能 (提示)
    pub remaining_lines: i64, // 落账前剩余线数
    pub lines_required: i64,  // 本单需用线数
}

// ==========================================
// OrderApi - 订单 API
// ==========================================

/// 订单 API
///
/// 提交流程状态机:
/// Draft -> Validated -> CapacityChecked -> Committed | Rejected
/// - Validated -> CapacityChecked 恒成功, 只计算是否超产能
/// - CapacityChecked -> Committed 恒执行 (超产能不阻断)
/// - Rejected 无任何副作用
pub struct OrderApi {
    /// 订单台账仓储
    order_repo: Arc<OrderRepository>,
    /// 生产基地仓储
    site_repo: Arc<SiteRepository>,
    /// 草案校验器
    validator: OrderDraftValidator,
    /// 产能占用聚合引擎
    utilization: UtilizationAggregator,
    /// 收益核算引擎
    profitability: ProfitabilityEngine,
}

impl OrderApi {
    /// 创建新的 OrderApi 实例
    pub fn new(order_repo: Arc<OrderRepository>, site_repo: Arc<SiteRepository>) -> Self {
        Self {
            order_repo,
            site_repo,
            validator: OrderDraftValidator::new(),
            utilization: UtilizationAggregator::new(),
            profitability: ProfitabilityEngine::new(),
        }
    }

    /// 提交预估单
    pub fn submit_estimated(&self, draft: OrderDraft) -> ApiResult<AdmissionReceipt> {
        self.submit(draft, OrderStatus::Estimated)
    }

    /// 提交确定单
    ///
    /// 说明: 与预估单走同一流程, 仅落账状态不同;
    ///       草案未带物流进度时默认置为"接单"
    pub fn submit_confirmed(&self, mut draft: OrderDraft) -> ApiResult<AdmissionReceipt> {
        if draft.progress.is_none() {
            draft.progress = Some(ProgressStage::OrderReceived);
        }
        self.submit(draft, OrderStatus::Confirmed)
    }

    /// 提交订单 (内部统一入口)
    fn submit(&self, draft: OrderDraft, status: OrderStatus) -> ApiResult<AdmissionReceipt> {
        // Draft -> Validated (失败即 Rejected, 无副作用)
        self.validator.validate(&draft)?;

        // 基地必须存在于注册表
        let site = self
            .site_repo
            .find_by_code(&draft.site_code)?
            .ok_or_else(|| ApiError::NotFound(format!("Site(id={})不存在", draft.site_code)))?;
        let limit = site.pool_limit(draft.pool);

        // Validated -> CapacityChecked: 只计算提示, 不阻断
        let orders = self.order_repo.find_all()?;
        let usage = self
            .utilization
            .usage(&orders, &draft.site_code, draft.pool, None);
        let over_capacity =
            self.utilization
                .is_over_capacity(usage, draft.lines_required, limit);
        let remaining_lines = self.utilization.remaining(usage, limit);

        if over_capacity {
            tracing::warn!(
                site_code = %draft.site_code,
                pool = draft.pool.as_str(),
                remaining_lines,
                lines_required = draft.lines_required,
                "产能超限提示: 仍继续落账"
            );
        }

        // CapacityChecked -> Committed
        let order = Order {
            order_id: uuid::Uuid::new_v4().to_string(),
            seq: 0, // 由数据库分配
            buyer: draft.buyer,
            style_no: draft.style_no,
            quantity: draft.quantity,
            unit_price: draft.unit_price,
            delivery_date: draft.delivery_date,
            site_code: draft.site_code,
            pool: draft.pool,
            detail_factory: draft.detail_factory,
            lines_required: draft.lines_required,
            status,
            costs: draft.costs,
            progress: draft.progress,
            vendors: draft.vendors,
            esg: draft.esg,
            created_at: chrono::Utc::now().naive_utc(),
        };

        let seq = self.order_repo.insert(&order)?;

        tracing::info!(
            order_id = %order.order_id,
            seq,
            buyer = %order.buyer,
            status = status.as_str(),
            over_capacity,
            "订单已落账"
        );

        Ok(AdmissionReceipt {
            order_id: order.order_id,
            seq,
            over_capacity,
            remaining_lines,
            lines_required: order.lines_required,
        })
    }

    /// 查询全量台账 (按落账顺序)
    pub fn list_orders(&self) -> ApiResult<Vec<Order>> {
        Ok(self.order_repo.find_all()?)
    }

    /// 台账长度
    pub fn count_orders(&self) -> ApiResult<i64> {
        Ok(self.order_repo.count()?)
    }

    /// 收益实时试算 (表单编辑时调用, 不落账)
    pub fn preview_profit(
        &self,
        quantity: i64,
        unit_price: f64,
        cost_components: &[f64],
        sga_per_unit: f64,
    ) -> ProfitSummary {
        self.profitability
            .compute(quantity, unit_price, cost_components, sga_per_unit)
    }

    /// 导出台账为 CSV 字节流 (每单一行, 全部属性为列)
    pub fn export_ledger(&self) -> ApiResult<Vec<u8>> {
        let orders = self.order_repo.find_all()?;

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record([
                "seq",
                "order_id",
                "buyer",
                "style_no",
                "quantity",
                "unit_price",
                "delivery_date",
                "site_code",
                "pool",
                "detail_factory",
                "lines_required",
                "status",
                "yarn_cost",
                "fabric_cost",
                "processing_cost",
                "sewing_cost",
                "finishing_cost",
                "transport_cost",
                "overhead_cost",
                "sga_cost",
                "progress_stage",
                "yarn_vendor",
                "fabric_vendor",
                "processing_vendor",
                "transport_vendor",
                "power_kwh",
                "water_ton",
                "carbon_kg",
                "created_at",
            ])
            .map_err(|e| ApiError::InternalError(format!("表头写入失败: {}", e)))?;

        for order in &orders {
            let costs = order.costs;
            let vendors = order.vendors.clone().unwrap_or_default();
            let esg = order.esg;
            let fmt_cost = |v: Option<f64>| v.map(|v| v.to_string()).unwrap_or_default();

            writer
                .write_record([
                    order.seq.to_string(),
                    order.order_id.clone(),
                    order.buyer.clone(),
                    order.style_no.clone(),
                    order.quantity.to_string(),
                    order.unit_price.to_string(),
                    order.delivery_date.format("%Y-%m-%d").to_string(),
                    order.site_code.clone(),
                    order.pool.as_str().to_string(),
                    order.detail_factory.clone(),
                    order.lines_required.to_string(),
                    order.status.as_str().to_string(),
                    fmt_cost(costs.map(|c| c.yarn)),
                    fmt_cost(costs.map(|c| c.fabric)),
                    fmt_cost(costs.map(|c| c.processing)),
                    fmt_cost(costs.map(|c| c.sewing)),
                    fmt_cost(costs.map(|c| c.finishing)),
                    fmt_cost(costs.map(|c| c.transport)),
                    fmt_cost(costs.map(|c| c.overhead)),
                    fmt_cost(costs.map(|c| c.sga)),
                    order
                        .progress
                        .map(|p| p.as_str().to_string())
                        .unwrap_or_default(),
                    vendors.yarn_vendor.unwrap_or_default(),
                    vendors.fabric_vendor.unwrap_or_default(),
                    vendors.processing_vendor.unwrap_or_default(),
                    vendors.transport_vendor.unwrap_or_default(),
                    fmt_cost(esg.map(|e| e.power_kwh)),
                    fmt_cost(esg.map(|e| e.water_ton)),
                    fmt_cost(esg.map(|e| e.carbon_kg)),
                    order.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
                ])
                .map_err(|e| ApiError::InternalError(format!("行写入失败: {}", e)))?;
        }

        writer
            .into_inner()
            .map_err(|e| ApiError::InternalError(format!("导出缓冲区回收失败: {}", e)))
    }

    /// 按基地/池查询当前占用 (可选年份过滤)
    pub fn usage(&self, site_code: &str, pool: PoolType, year: Option<i32>) -> ApiResult<i64> {
        let orders = self.order_repo.find_all()?;
        Ok(self.utilization.usage(&orders, site_code, pool, year))
    }
}
