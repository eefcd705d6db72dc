// ==========================================
// 全球服装生产管理系统 - 生产订单领域模型
// ==========================================
// 红线: 订单落账后不可修改/删除 (仅追加)
// 说明: 后期迭代新增的属性 (成本明细/物流进度/供应商/ESG)
//       统一收敛为可选字段
// ==========================================

use crate::domain::types::{OrderStatus, PoolType, ProgressStage};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

// ==========================================
// CostBreakdown - 单件成本明细
// ==========================================
// 说明: 全部为单件成本 (USD), 不做币种换算
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub yarn: f64,       // 纱线
    pub fabric: f64,     // 面料
    pub processing: f64, // 加工
    pub sewing: f64,     // 缝制
    pub finishing: f64,  // 后整理
    pub transport: f64,  // 运输
    pub overhead: f64,   // 制造费用
    pub sga: f64,        // 销售管理费 (单独核算, 不计入制造成本)
}

impl CostBreakdown {
    /// 制造成本分项 (不含销售管理费)
    pub fn components(&self) -> [f64; 7] {
        [
            self.yarn,
            self.fabric,
            self.processing,
            self.sewing,
            self.finishing,
            self.transport,
            self.overhead,
        ]
    }

    /// 单件制造成本合计
    pub fn unit_cost(&self) -> f64 {
        self.components().iter().sum()
    }

    /// 是否全部分项非负
    pub fn is_non_negative(&self) -> bool {
        self.components().iter().all(|c| *c >= 0.0) && self.sga >= 0.0
    }
}

// ==========================================
// VendorAssignment - 成本类目供应商
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VendorAssignment {
    pub yarn_vendor: Option<String>,       // 纱线供应商
    pub fabric_vendor: Option<String>,     // 面料供应商
    pub processing_vendor: Option<String>, // 加工厂
    pub transport_vendor: Option<String>,  // 货代/船司
}

// ==========================================
// EsgMetrics - 可持续性指标
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EsgMetrics {
    pub power_kwh: f64, // 耗电量 (kWh)
    pub water_ton: f64, // 耗水量 (吨)
    pub carbon_kg: f64, // 碳排放 (kgCO2)
}

// ==========================================
// Order - 生产订单 (台账记录)
// ==========================================
// 生命周期: 提交通过后追加落账, 会话内不可变
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    // ===== 主键/排序 =====
    pub order_id: String,          // 订单ID (UUID)
    pub seq: i64,                  // 落账序号 (台账展示的规范顺序)

    // ===== 必填字段 =====
    pub buyer: String,             // 买家
    pub style_no: String,          // 款号
    pub quantity: i64,             // 数量 (> 0)
    pub unit_price: f64,           // 单价 (USD, >= 0)
    pub delivery_date: NaiveDate,  // 纳期
    pub site_code: String,         // 生产基地 (外键 site)
    pub pool: PoolType,            // 生产池 (本厂/外协)
    pub detail_factory: String,    // 相细工厂名 (自由文本)
    pub lines_required: i64,       // 需用线数 (>= 1)
    pub status: OrderStatus,       // 订单状态 (预估/确定)

    // ===== 可选字段 (后期迭代收敛) =====
    pub costs: Option<CostBreakdown>,      // 单件成本明细
    pub progress: Option<ProgressStage>,   // 物流进度节点
    pub vendors: Option<VendorAssignment>, // 成本类目供应商
    pub esg: Option<EsgMetrics>,           // 可持续性指标

    // ===== 审计 =====
    pub created_at: NaiveDateTime, // 落账时间
}

// ==========================================
// OrderDraft - 订单草案 (提交入参)
// ==========================================
// 说明: 对应提交流程的 Draft 态, 校验通过后才会落账
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDraft {
    pub buyer: String,             // 买家
    pub style_no: String,          // 款号
    pub quantity: i64,             // 数量
    pub unit_price: f64,           // 单价 (USD)
    pub delivery_date: NaiveDate,  // 纳期
    pub site_code: String,         // 生产基地代码
    pub pool: PoolType,            // 生产池
    pub detail_factory: String,    // 相细工厂名
    pub lines_required: i64,       // 需用线数
    pub costs: Option<CostBreakdown>,      // 单件成本明细
    pub progress: Option<ProgressStage>,   // 物流进度节点
    pub vendors: Option<VendorAssignment>, // 成本类目供应商
    pub esg: Option<EsgMetrics>,           // 可持续性指标
}

impl OrderDraft {
    /// 创建最小草案 (必填字段)
    pub fn new(
        buyer: &str,
        style_no: &str,
        quantity: i64,
        unit_price: f64,
        delivery_date: NaiveDate,
        site_code: &str,
        pool: PoolType,
        detail_factory: &str,
        lines_required: i64,
    ) -> Self {
        Self {
            buyer: buyer.to_string(),
            style_no: style_no.to_string(),
            quantity,
            unit_price,
            delivery_date,
            site_code: site_code.to_string(),
            pool,
            detail_factory: detail_factory.to_string(),
            lines_required,
            costs: None,
            progress: None,
            vendors: None,
            esg: None,
        }
    }

    /// 设置成本明细
    pub fn with_costs(mut self, costs: CostBreakdown) -> Self {
        self.costs = Some(costs);
        self
    }

    /// 设置物流进度节点
    pub fn with_progress(mut self, progress: ProgressStage) -> Self {
        self.progress = Some(progress);
        self
    }

    /// 设置供应商分配
    pub fn with_vendors(mut self, vendors: VendorAssignment) -> Self {
        self.vendors = Some(vendors);
        self
    }

    /// 设置可持续性指标
    pub fn with_esg(mut self, esg: EsgMetrics) -> Self {
        self.esg = Some(esg);
        self
    }
}
