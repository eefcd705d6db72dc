// ==========================================
// OrderApi 订单提交流程集成测试
// ==========================================
// 测试目标: 校验拒绝、超产能提示不阻断、落账顺序、
//           两条提交路径的差异
// ==========================================

use chrono::NaiveDate;
use garment_pms::domain::{CostBreakdown, OrderDraft};
use garment_pms::{ApiError, OrderStatus, PoolType, ProgressStage, SessionState};

// ==========================================
// 测试辅助函数
// ==========================================

/// 创建测试用的订单草案
fn create_test_draft(buyer: &str, style_no: &str, lines: i64) -> OrderDraft {
    OrderDraft::new(
        buyer,
        style_no,
        1000,
        10.0,
        NaiveDate::from_ymd_opt(2026, 9, 30).unwrap(),
        "VNM",
        PoolType::Main,
        "第一缝制厂",
        lines,
    )
}

// ==========================================
// 测试用例 1: 校验拒绝无副作用
// ==========================================

#[test]
fn test_validation_rejection_leaves_ledger_unchanged() {
    let session = SessionState::new().unwrap();

    let mut draft = create_test_draft("", "ST-001", 1);
    draft.buyer = String::new();

    let result = session.order_api.submit_estimated(draft);
    match result {
        Err(ApiError::ValidationError { violations, .. }) => {
            assert!(violations.iter().any(|v| v.field == "buyer"));
        }
        other => panic!("Expected ValidationError, got {:?}", other.map(|r| r.order_id)),
    }

    // Rejected 终态: 台账长度不变
    assert_eq!(session.order_api.count_orders().unwrap(), 0);
}

#[test]
fn test_zero_quantity_rejected() {
    let session = SessionState::new().unwrap();

    let mut draft = create_test_draft("ACME", "ST-001", 1);
    draft.quantity = 0;

    assert!(session.order_api.submit_estimated(draft).is_err());
    assert_eq!(session.order_api.count_orders().unwrap(), 0);
}

#[test]
fn test_unknown_site_not_found() {
    let session = SessionState::new().unwrap();

    let mut draft = create_test_draft("ACME", "ST-001", 1);
    draft.site_code = "XXX".to_string();

    match session.order_api.submit_estimated(draft) {
        Err(ApiError::NotFound(msg)) => assert!(msg.contains("XXX")),
        other => panic!("Expected NotFound, got {:?}", other.map(|r| r.order_id)),
    }
}

// ==========================================
// 测试用例 2: 超产能提示不阻断
// ==========================================

#[test]
fn test_over_capacity_is_advisory_not_blocking() {
    let session = SessionState::new().unwrap();

    // VNM 本厂上限 30: 先占 28 线
    let receipt = session
        .order_api
        .submit_estimated(create_test_draft("ACME", "ST-001", 28))
        .unwrap();
    assert!(!receipt.over_capacity);
    assert_eq!(receipt.remaining_lines, 30);

    // 再要 5 线: 超限但仍落账
    let receipt = session
        .order_api
        .submit_estimated(create_test_draft("ACME", "ST-002", 5))
        .unwrap();
    assert!(receipt.over_capacity);
    assert_eq!(receipt.remaining_lines, 2);
    assert_eq!(receipt.lines_required, 5);

    // 台账长度仍加一
    assert_eq!(session.order_api.count_orders().unwrap(), 2);
    // 占用照常累计
    assert_eq!(
        session.order_api.usage("VNM", PoolType::Main, None).unwrap(),
        33
    );
}

#[test]
fn test_exact_fit_is_not_over_capacity() {
    let session = SessionState::new().unwrap();

    // 恰好用满 (30/30) 不算超
    let receipt = session
        .order_api
        .submit_estimated(create_test_draft("ACME", "ST-001", 30))
        .unwrap();
    assert!(!receipt.over_capacity);
}

// ==========================================
// 测试用例 3: 落账顺序与重复记录
// ==========================================

#[test]
fn test_ledger_preserves_insertion_order() {
    let session = SessionState::new().unwrap();

    let a = session
        .order_api
        .submit_estimated(create_test_draft("Buyer-A", "ST-A", 1))
        .unwrap();
    let b = session
        .order_api
        .submit_estimated(create_test_draft("Buyer-B", "ST-B", 1))
        .unwrap();
    assert!(a.seq < b.seq);

    let orders = session.order_api.list_orders().unwrap();
    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0].buyer, "Buyer-A");
    assert_eq!(orders[1].buyer, "Buyer-B");
}

#[test]
fn test_identical_drafts_are_distinct_entries() {
    let session = SessionState::new().unwrap();

    let r1 = session
        .order_api
        .submit_estimated(create_test_draft("ACME", "ST-001", 2))
        .unwrap();
    let r2 = session
        .order_api
        .submit_estimated(create_test_draft("ACME", "ST-001", 2))
        .unwrap();

    // 不去重不合并
    assert_ne!(r1.order_id, r2.order_id);
    assert_eq!(session.order_api.count_orders().unwrap(), 2);
}

// ==========================================
// 测试用例 4: 两条提交路径
// ==========================================

#[test]
fn test_estimated_vs_confirmed_paths() {
    let session = SessionState::new().unwrap();

    session
        .order_api
        .submit_estimated(create_test_draft("ACME", "ST-001", 1))
        .unwrap();
    session
        .order_api
        .submit_confirmed(create_test_draft("ACME", "ST-002", 1))
        .unwrap();

    let orders = session.order_api.list_orders().unwrap();
    assert_eq!(orders[0].status, OrderStatus::Estimated);
    assert_eq!(orders[0].progress, None);

    // 确定单默认置物流进度为"接单"
    assert_eq!(orders[1].status, OrderStatus::Confirmed);
    assert_eq!(orders[1].progress, Some(ProgressStage::OrderReceived));
}

#[test]
fn test_confirmed_keeps_explicit_progress() {
    let session = SessionState::new().unwrap();

    let draft =
        create_test_draft("ACME", "ST-001", 1).with_progress(ProgressStage::Sewing);
    session.order_api.submit_confirmed(draft).unwrap();

    let orders = session.order_api.list_orders().unwrap();
    assert_eq!(orders[0].progress, Some(ProgressStage::Sewing));
}

// ==========================================
// 测试用例 5: 可选字段落账往返
// ==========================================

#[test]
fn test_optional_fields_roundtrip() {
    let session = SessionState::new().unwrap();

    let costs = CostBreakdown {
        yarn: 2.0,
        fabric: 1.0,
        processing: 1.0,
        sewing: 1.0,
        finishing: 1.0,
        transport: 1.0,
        overhead: 1.0,
        sga: 0.5,
    };
    let draft = create_test_draft("ACME", "ST-001", 1).with_costs(costs);
    session.order_api.submit_estimated(draft).unwrap();

    let orders = session.order_api.list_orders().unwrap();
    let stored = orders[0].costs.expect("成本明细应已落账");
    assert_eq!(stored.unit_cost(), 8.0);
    assert_eq!(stored.sga, 0.5);
    assert!(orders[0].vendors.is_none());
    assert!(orders[0].esg.is_none());
}

#[test]
fn test_negative_cost_component_rejected() {
    let session = SessionState::new().unwrap();

    let costs = CostBreakdown {
        yarn: -1.0,
        fabric: 1.0,
        processing: 1.0,
        sewing: 1.0,
        finishing: 1.0,
        transport: 1.0,
        overhead: 1.0,
        sga: 0.5,
    };
    let draft = create_test_draft("ACME", "ST-001", 1).with_costs(costs);
    assert!(session.order_api.submit_estimated(draft).is_err());
    assert_eq!(session.order_api.count_orders().unwrap(), 0);
}
