use sea_orm::entity::prelude::*;
use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};

/// Product entity, mapped onto the `Product` table.
///
/// The store applies no range or emptiness checks: `name` and `supplier`
/// accept any text and the integer columns accept any `i64`. Numeric checks
/// belong to the shell that collects operator input.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "Product")]
pub struct Model {
    /// Primary key, assigned by the database on insert and never reused
    #[sea_orm(primary_key, column_name = "product_id")]
    pub id: i64,

    /// Product name
    #[sea_orm(column_name = "product_name")]
    pub name: String,

    /// Supplier name
    #[sea_orm(column_name = "supplier_name")]
    pub supplier: String,

    /// Current on-hand quantity
    pub stock_level: i64,

    /// Threshold below which a reorder is suggested; fixed at creation
    pub reorder_point: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// A product is a reorder candidate when stock is strictly below its reorder point.
    pub fn needs_reorder(&self) -> bool {
        self.stock_level < self.reorder_point
    }
}

/// One line of the stock report: name, stock level and reorder point.
#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult, Serialize, Deserialize)]
pub struct StockReportLine {
    pub name: String,
    pub stock_level: i64,
    pub reorder_point: i64,
}

impl From<Model> for StockReportLine {
    fn from(model: Model) -> Self {
        Self {
            name: model.name,
            stock_level: model.stock_level,
            reorder_point: model.reorder_point,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(stock_level: i64, reorder_point: i64) -> Model {
        Model {
            id: 1,
            name: "Widget".into(),
            supplier: "Acme".into(),
            stock_level,
            reorder_point,
        }
    }

    #[test]
    fn reorder_threshold_is_strict() {
        assert!(product(9, 10).needs_reorder());
        assert!(!product(10, 10).needs_reorder());
        assert!(!product(11, 10).needs_reorder());
    }

    #[test]
    fn report_line_keeps_stock_fields() {
        let line = StockReportLine::from(product(5, 10));
        assert_eq!(line.name, "Widget");
        assert_eq!(line.stock_level, 5);
        assert_eq!(line.reorder_point, 10);
    }
}
