use crate::{
    entities::product::{self, Entity as Product, StockReportLine},
    errors::ServiceError,
};
use sea_orm::{
    sea_query::Expr, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Fields of a product to be added; the id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub supplier: String,
    pub stock_level: i64,
    pub reorder_point: i64,
}

impl NewProduct {
    pub fn new(
        name: impl Into<String>,
        supplier: impl Into<String>,
        stock_level: i64,
        reorder_point: i64,
    ) -> Self {
        Self {
            name: name.into(),
            supplier: supplier.into(),
            stock_level,
            reorder_point,
        }
    }
}

/// Outcome of a stock update.
///
/// An update naming an id that does not exist is not an error: the table is
/// left unchanged and the caller receives `NoMatch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StockUpdate {
    Updated,
    NoMatch,
}

/// Store for product records and their stock levels.
#[derive(Clone)]
pub struct InventoryService {
    db_pool: Arc<DatabaseConnection>,
}

impl InventoryService {
    /// Creates a new inventory service instance
    pub fn new(db_pool: Arc<DatabaseConnection>) -> Self {
        Self { db_pool }
    }

    /// Adds a product and returns the id the database assigned to it.
    #[instrument(skip(self))]
    pub async fn create(&self, input: NewProduct) -> Result<i64, ServiceError> {
        let db = &*self.db_pool;

        let product = product::ActiveModel {
            id: NotSet,
            name: Set(input.name.clone()),
            supplier: Set(input.supplier),
            stock_level: Set(input.stock_level),
            reorder_point: Set(input.reorder_point),
        };

        let id = Product::insert(product).exec(db).await?.last_insert_id;

        info!(product_id = id, name = %input.name, "Product added to inventory");
        Ok(id)
    }

    /// Overwrites the stock level of one product. Name, supplier and reorder
    /// point are never touched.
    #[instrument(skip(self))]
    pub async fn update_stock(
        &self,
        product_id: i64,
        new_stock_level: i64,
    ) -> Result<StockUpdate, ServiceError> {
        let db = &*self.db_pool;

        let result = Product::update_many()
            .col_expr(product::Column::StockLevel, Expr::value(new_stock_level))
            .filter(product::Column::Id.eq(product_id))
            .exec(db)
            .await?;

        if result.rows_affected == 0 {
            warn!(product_id, "Stock update matched no product");
            Ok(StockUpdate::NoMatch)
        } else {
            info!(product_id, new_stock_level, "Stock updated");
            Ok(StockUpdate::Updated)
        }
    }

    /// Gets a single product by id
    #[instrument(skip(self))]
    pub async fn get(&self, product_id: i64) -> Result<Option<product::Model>, ServiceError> {
        let db = &*self.db_pool;
        Ok(Product::find_by_id(product_id).one(db).await?)
    }

    /// Lists every product in insertion order.
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<product::Model>, ServiceError> {
        let db = &*self.db_pool;

        let products = Product::find()
            .order_by_asc(product::Column::Id)
            .all(db)
            .await?;

        Ok(products)
    }

    /// Name, stock level and reorder point of every product, low or not.
    ///
    /// Filtering by threshold is the job of [`InventoryService::reorder_candidates`].
    #[instrument(skip(self))]
    pub async fn low_stock_report(&self) -> Result<Vec<StockReportLine>, ServiceError> {
        let db = &*self.db_pool;

        let lines = Product::find()
            .select_only()
            .column_as(product::Column::Name, "name")
            .column_as(product::Column::StockLevel, "stock_level")
            .column_as(product::Column::ReorderPoint, "reorder_point")
            .order_by_asc(product::Column::Id)
            .into_model::<StockReportLine>()
            .all(db)
            .await?;

        Ok(lines)
    }

    /// Names of products whose stock level is strictly below their reorder point.
    #[instrument(skip(self))]
    pub async fn reorder_candidates(&self) -> Result<Vec<String>, ServiceError> {
        let db = &*self.db_pool;

        let names = Product::find()
            .select_only()
            .column(product::Column::Name)
            .filter(
                Expr::col(product::Column::StockLevel)
                    .lt(Expr::col(product::Column::ReorderPoint)),
            )
            .order_by_asc(product::Column::Id)
            .into_tuple::<String>()
            .all(db)
            .await?;

        if !names.is_empty() {
            info!(count = names.len(), "Products below reorder point");
        }
        Ok(names)
    }
}
