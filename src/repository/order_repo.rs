// ==========================================
// 全球服装生产管理系统 - 订单台账数据仓储
// ==========================================
// 红线: Repository 不含业务逻辑, 只做数据映射
// 红线: 台账只追加, 无更新/删除接口
// ==========================================

use crate::domain::order::{CostBreakdown, EsgMetrics, Order, VendorAssignment};
use crate::domain::types::{OrderStatus, PoolType, ProgressStage};
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{params, Connection, Result as SqliteResult, Row};
use std::sync::{Arc, Mutex};

// ==========================================
// OrderRepository - 订单台账仓储
// ==========================================

/// 订单台账仓储
/// 职责: production_order 表的追加与全量读取
pub struct OrderRepository {
    conn: Arc<Mutex<Connection>>,
}

impl OrderRepository {
    /// 从共享连接创建仓储实例
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    /// 获取数据库连接
    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 追加订单记录
    ///
    /// # 参数
    /// - `order`: 订单实体 (order.seq 由数据库分配, 入参值被忽略)
    ///
    /// # 返回
    /// - Ok(seq): 落账序号
    pub fn insert(&self, order: &Order) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;

        let vendors_json = match &order.vendors {
            Some(v) => Some(serde_json::to_string(v).map_err(|e| {
                RepositoryError::InternalError(format!("供应商信息序列化失败: {}", e))
            })?),
            None => None,
        };

        conn.execute(
            r#"
            INSERT INTO production_order (
                order_id, buyer, style_no, quantity, unit_price, delivery_date,
                site_code, pool, detail_factory, lines_required, status,
                yarn_cost, fabric_cost, processing_cost, sewing_cost,
                finishing_cost, transport_cost, overhead_cost, sga_cost,
                progress_stage, vendors_json, power_kwh, water_ton, carbon_kg,
                created_at
            ) VALUES (
                ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11,
                ?12, ?13, ?14, ?15, ?16, ?17, ?18, ?19,
                ?20, ?21, ?22, ?23, ?24, ?25
            )
            "#,
            params![
                order.order_id,
                order.buyer,
                order.style_no,
                order.quantity,
                order.unit_price,
                order.delivery_date.format("%Y-%m-%d").to_string(),
                order.site_code,
                order.pool.as_str(),
                order.detail_factory,
                order.lines_required,
                order.status.as_str(),
                order.costs.as_ref().map(|c| c.yarn),
                order.costs.as_ref().map(|c| c.fabric),
                order.costs.as_ref().map(|c| c.processing),
                order.costs.as_ref().map(|c| c.sewing),
                order.costs.as_ref().map(|c| c.finishing),
                order.costs.as_ref().map(|c| c.transport),
                order.costs.as_ref().map(|c| c.overhead),
                order.costs.as_ref().map(|c| c.sga),
                order.progress.map(|p| p.as_str()),
                vendors_json,
                order.esg.map(|e| e.power_kwh),
                order.esg.map(|e| e.water_ton),
                order.esg.map(|e| e.carbon_kg),
                order.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            ],
        )?;

        let seq = conn.last_insert_rowid();
        Ok(seq)
    }

    /// 查询全量台账 (按落账顺序)
    ///
    /// 说明: 落账顺序 (seq) 是历史展示与稳定排序的规范顺序
    pub fn find_all(&self) -> RepositoryResult<Vec<Order>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT
                seq, order_id, buyer, style_no, quantity, unit_price, delivery_date,
                site_code, pool, detail_factory, lines_required, status,
                yarn_cost, fabric_cost, processing_cost, sewing_cost,
                finishing_cost, transport_cost, overhead_cost, sga_cost,
                progress_stage, vendors_json, power_kwh, water_ton, carbon_kg,
                created_at
            FROM production_order
            ORDER BY seq
            "#,
        )?;

        let orders = stmt
            .query_map([], Self::map_row)?
            .collect::<SqliteResult<Vec<Order>>>()?;

        Ok(orders)
    }

    /// 台账长度
    pub fn count(&self) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        let count: i64 =
            conn.query_row("SELECT COUNT(*) FROM production_order", [], |row| row.get(0))?;
        Ok(count)
    }

    /// 行映射
    fn map_row(row: &Row) -> rusqlite::Result<Order> {
        let pool_str: String = row.get(8)?;
        let status_str: String = row.get(11)?;
        let progress_str: Option<String> = row.get(20)?;
        let vendors_json: Option<String> = row.get(21)?;

        // 成本列为整组写入: 取任一列判断明细是否存在
        let yarn: Option<f64> = row.get(12)?;
        let costs = yarn.map(|yarn| {
            Ok::<CostBreakdown, rusqlite::Error>(CostBreakdown {
                yarn,
                fabric: row.get(13)?,
                processing: row.get(14)?,
                sewing: row.get(15)?,
                finishing: row.get(16)?,
                transport: row.get(17)?,
                overhead: row.get(18)?,
                sga: row.get(19)?,
            })
        });
        let costs = match costs {
            Some(c) => Some(c?),
            None => None,
        };

        let power_kwh: Option<f64> = row.get(22)?;
        let esg = match power_kwh {
            Some(power_kwh) => Some(EsgMetrics {
                power_kwh,
                water_ton: row.get(23)?,
                carbon_kg: row.get(24)?,
            }),
            None => None,
        };

        let created_at_str: String = row.get(25)?;
        let delivery_date_str: String = row.get(6)?;

        Ok(Order {
            seq: row.get(0)?,
            order_id: row.get(1)?,
            buyer: row.get(2)?,
            style_no: row.get(3)?,
            quantity: row.get(4)?,
            unit_price: row.get(5)?,
            delivery_date: NaiveDate::parse_from_str(&delivery_date_str, "%Y-%m-%d")
                .unwrap_or_else(|_| NaiveDate::from_ymd_opt(1970, 1, 1).unwrap()),
            site_code: row.get(7)?,
            pool: PoolType::from_str(&pool_str).unwrap_or(PoolType::Main),
            detail_factory: row.get(9)?,
            lines_required: row.get(10)?,
            status: OrderStatus::from_str(&status_str).unwrap_or(OrderStatus::Estimated),
            costs,
            progress: progress_str.as_deref().and_then(ProgressStage::from_str),
            vendors: vendors_json
                .as_deref()
                .and_then(|s| serde_json::from_str::<VendorAssignment>(s).ok()),
            esg,
            created_at: NaiveDateTime::parse_from_str(&created_at_str, "%Y-%m-%d %H:%M:%S")
                .unwrap_or_else(|_| {
                    NaiveDate::from_ymd_opt(1970, 1, 1)
                        .unwrap()
                        .and_hms_opt(0, 0, 0)
                        .unwrap()
                }),
        })
    }
}
