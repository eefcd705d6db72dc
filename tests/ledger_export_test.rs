// ==========================================
// 台账导出集成测试
// ==========================================
// 测试目标: CSV 字节流内容 (表头 + 每单一行)
// ==========================================

use chrono::NaiveDate;
use garment_pms::domain::{CostBreakdown, OrderDraft, VendorAssignment};
use garment_pms::{PoolType, SessionState};
use std::io::Write;

// ==========================================
// 测试辅助函数
// ==========================================

fn create_test_draft(buyer: &str, lines: i64) -> OrderDraft {
    OrderDraft::new(
        buyer,
        "ST-001",
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
// 测试用例
// ==========================================

#[test]
fn test_export_empty_ledger_has_header_only() {
    let session = SessionState::new().unwrap();

    let bytes = session.order_api.export_ledger().unwrap();
    let text = String::from_utf8(bytes).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("seq,order_id,buyer,style_no"));
}

#[test]
fn test_export_one_row_per_order() {
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
    let vendors = VendorAssignment {
        yarn_vendor: Some("YarnCo".to_string()),
        fabric_vendor: None,
        processing_vendor: None,
        transport_vendor: Some("ShipCo".to_string()),
    };
    session
        .order_api
        .submit_estimated(create_test_draft("ACME", 2).with_costs(costs).with_vendors(vendors))
        .unwrap();
    session
        .order_api
        .submit_confirmed(create_test_draft("Globex", 3))
        .unwrap();

    let bytes = session.order_api.export_ledger().unwrap();
    let text = String::from_utf8(bytes).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    // 表头 + 两行数据, 顺序与落账一致
    assert_eq!(lines.len(), 3);
    assert!(lines[1].contains("ACME"));
    assert!(lines[1].contains("YarnCo"));
    assert!(lines[1].contains("Estimated"));
    assert!(lines[2].contains("Globex"));
    assert!(lines[2].contains("Confirmed"));

    // 未录入的可选列为空, 但列数一致
    let header_cols = lines[0].split(',').count();
    assert_eq!(lines[2].split(',').count(), header_cols);
}

#[test]
fn test_export_bytes_can_be_written_to_file() {
    let session = SessionState::new().unwrap();
    session
        .order_api
        .submit_estimated(create_test_draft("ACME", 1))
        .unwrap();

    let bytes = session.order_api.export_ledger().unwrap();

    // 字节流可直接写入下载文件
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&bytes).unwrap();
    let written = std::fs::read(file.path()).unwrap();
    assert_eq!(written, bytes);
}
