// ==========================================
// 全球服装生产管理系统 - 领域类型
// ==========================================
// 职责: 定义核心枚举类型
// 红线: 类型层不含数据访问逻辑
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// PoolType - 生产池类型
// ==========================================
// 用途: 每个生产基地有两个独立核算的产能池
// 红线: 本厂/外协产能互不挪用
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PoolType {
    Main,       // 本厂 (自有生产线)
    Outsourced, // 外协 (外包生产线)
}

impl PoolType {
    /// 转换为字符串 (用于数据库存储)
    pub fn as_str(&self) -> &'static str {
        match self {
            PoolType::Main => "Main",
            PoolType::Outsourced => "Outsourced",
        }
    }

    /// 从字符串解析
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Main" => Some(PoolType::Main),
            "Outsourced" => Some(PoolType::Outsourced),
            _ => None,
        }
    }
}

// ==========================================
// Region - 生产区域
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    Asia,           // 亚洲
    CentralAmerica, // 中美洲
}

impl Region {
    /// 转换为字符串 (用于数据库存储)
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Asia => "Asia",
            Region::CentralAmerica => "CentralAmerica",
        }
    }

    /// 从字符串解析
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Asia" => Some(Region::Asia),
            "CentralAmerica" => Some(Region::CentralAmerica),
            _ => None,
        }
    }
}

// ==========================================
// OrderStatus - 订单状态
// ==========================================
// 说明: 两条提交路径仅在落库状态上不同
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Estimated, // 预估单
    Confirmed, // 确定单
}

impl OrderStatus {
    /// 转换为字符串 (用于数据库存储)
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Estimated => "Estimated",
            OrderStatus::Confirmed => "Confirmed",
        }
    }

    /// 从字符串解析
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Estimated" => Some(OrderStatus::Estimated),
            "Confirmed" => Some(OrderStatus::Confirmed),
            _ => None,
        }
    }
}

// ==========================================
// ProgressStage - 物流进度节点
// ==========================================
// 说明: 节点按物流顺序排列, 枚举序即业务序
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ProgressStage {
    OrderReceived,  // 接单
    MaterialPrep,   // 原辅料备料
    Sewing,         // 缝制
    Finishing,      // 后整理
    Inspection,     // 检品
    Shipped,        // 出运
    InTransit,      // 海上运输
    CustomsCleared, // 清关
    Delivered,      // 交付
}

impl ProgressStage {
    /// 转换为字符串 (用于数据库存储)
    pub fn as_str(&self) -> &'static str {
        match self {
            ProgressStage::OrderReceived => "OrderReceived",
            ProgressStage::MaterialPrep => "MaterialPrep",
            ProgressStage::Sewing => "Sewing",
            ProgressStage::Finishing => "Finishing",
            ProgressStage::Inspection => "Inspection",
            ProgressStage::Shipped => "Shipped",
            ProgressStage::InTransit => "InTransit",
            ProgressStage::CustomsCleared => "CustomsCleared",
            ProgressStage::Delivered => "Delivered",
        }
    }

    /// 从字符串解析
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "OrderReceived" => Some(ProgressStage::OrderReceived),
            "MaterialPrep" => Some(ProgressStage::MaterialPrep),
            "Sewing" => Some(ProgressStage::Sewing),
            "Finishing" => Some(ProgressStage::Finishing),
            "Inspection" => Some(ProgressStage::Inspection),
            "Shipped" => Some(ProgressStage::Shipped),
            "InTransit" => Some(ProgressStage::InTransit),
            "CustomsCleared" => Some(ProgressStage::CustomsCleared),
            "Delivered" => Some(ProgressStage::Delivered),
            _ => None,
        }
    }

    /// 全部节点 (按物流顺序)
    pub fn all() -> &'static [ProgressStage] {
        &[
            ProgressStage::OrderReceived,
            ProgressStage::MaterialPrep,
            ProgressStage::Sewing,
            ProgressStage::Finishing,
            ProgressStage::Inspection,
            ProgressStage::Shipped,
            ProgressStage::InTransit,
            ProgressStage::CustomsCleared,
            ProgressStage::Delivered,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_type_roundtrip() {
        assert_eq!(PoolType::from_str("Main"), Some(PoolType::Main));
        assert_eq!(PoolType::from_str("Outsourced"), Some(PoolType::Outsourced));
        assert_eq!(PoolType::from_str("Unknown"), None);
        assert_eq!(PoolType::Main.as_str(), "Main");
    }

    #[test]
    fn test_progress_stage_order() {
        // 枚举序即物流顺序
        assert!(ProgressStage::OrderReceived < ProgressStage::Sewing);
        assert!(ProgressStage::Shipped < ProgressStage::Delivered);
        assert_eq!(ProgressStage::all().len(), 9);
    }
}
