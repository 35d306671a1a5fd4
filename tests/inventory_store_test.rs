mod common;

use common::TestInventory;
use inventory_tracker::{entities::StockReportLine, NewProduct, StockUpdate};

#[tokio::test]
async fn widget_gadget_reorder_scenario() {
    let inv = TestInventory::in_memory().await;
    let svc = &inv.service;

    let widget = svc.create(NewProduct::new("Widget", "Acme", 5, 10)).await.unwrap();
    let gadget = svc.create(NewProduct::new("Gadget", "Acme", 20, 10)).await.unwrap();
    assert_eq!(widget, 1);
    assert_eq!(gadget, 2);

    assert_eq!(svc.reorder_candidates().await.unwrap(), vec!["Widget".to_string()]);

    assert_eq!(svc.update_stock(1, 15).await.unwrap(), StockUpdate::Updated);
    assert!(svc.reorder_candidates().await.unwrap().is_empty());
}

#[tokio::test]
async fn ids_strictly_increase() {
    let inv = TestInventory::in_memory().await;

    let mut last = 0;
    for i in 0..25 {
        let id = inv
            .service
            .create(NewProduct::new(format!("Item {}", i), "Acme", i, 5))
            .await
            .unwrap();
        assert!(id > last, "id {} did not increase past {}", id, last);
        last = id;
    }
}

#[tokio::test]
async fn list_returns_records_in_creation_order() {
    let inv = TestInventory::in_memory().await;
    let svc = &inv.service;

    svc.create(NewProduct::new("R1", "North", 1, 2)).await.unwrap();
    svc.create(NewProduct::new("R2", "South", 3, 4)).await.unwrap();
    svc.create(NewProduct::new("R3", "East", 5, 6)).await.unwrap();

    let products = svc.list_all().await.unwrap();
    let summary: Vec<_> = products
        .iter()
        .map(|p| (p.id, p.name.as_str(), p.supplier.as_str(), p.stock_level, p.reorder_point))
        .collect();

    assert_eq!(
        summary,
        vec![
            (1, "R1", "North", 1, 2),
            (2, "R2", "South", 3, 4),
            (3, "R3", "East", 5, 6),
        ]
    );
}

#[tokio::test]
async fn report_has_one_line_per_product() {
    let inv = TestInventory::in_memory().await;
    let svc = &inv.service;

    svc.create(NewProduct::new("Low", "Acme", 1, 10)).await.unwrap();
    svc.create(NewProduct::new("High", "Acme", 100, 10)).await.unwrap();
    svc.create(NewProduct::new("Zero", "Acme", 0, 0)).await.unwrap();

    let report = svc.low_stock_report().await.unwrap();
    let expected: Vec<StockReportLine> = svc
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .map(StockReportLine::from)
        .collect();

    assert_eq!(report.len(), 3);
    assert_eq!(report, expected);
}

#[tokio::test]
async fn repeated_update_is_idempotent() {
    let inv = TestInventory::in_memory().await;
    let svc = &inv.service;
    let id = svc.create(NewProduct::new("Widget", "Acme", 5, 10)).await.unwrap();

    svc.update_stock(id, 8).await.unwrap();
    svc.update_stock(id, 8).await.unwrap();

    let stored = svc.get(id).await.unwrap().unwrap();
    assert_eq!(stored.stock_level, 8);
    assert_eq!(stored.reorder_point, 10);
}

#[tokio::test]
async fn update_of_unknown_id_changes_nothing() {
    let inv = TestInventory::in_memory().await;
    let svc = &inv.service;
    svc.create(NewProduct::new("Widget", "Acme", 5, 10)).await.unwrap();
    let before = svc.list_all().await.unwrap();

    assert_eq!(svc.update_stock(0, 50).await.unwrap(), StockUpdate::NoMatch);
    assert_eq!(svc.update_stock(2, 50).await.unwrap(), StockUpdate::NoMatch);

    assert_eq!(svc.list_all().await.unwrap(), before);
}

#[tokio::test]
async fn records_survive_reopen_and_ids_continue() {
    let dir = tempfile::tempdir().unwrap();

    let inv = TestInventory::on_disk(dir.path()).await;
    inv.service.create(NewProduct::new("Widget", "Acme", 5, 10)).await.unwrap();
    inv.service.create(NewProduct::new("Gadget", "Acme", 20, 10)).await.unwrap();
    inv.service.update_stock(1, 12).await.unwrap();
    inv.close().await;

    let inv = TestInventory::on_disk(dir.path()).await;
    let products = inv.service.list_all().await.unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[0].stock_level, 12);

    let next = inv.service.create(NewProduct::new("Bolt", "Initech", 0, 3)).await.unwrap();
    assert_eq!(next, 3);
    inv.close().await;
}
