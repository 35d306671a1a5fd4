pub mod product;

pub use product::{
    ActiveModel as ProductActiveModel, Column as ProductColumn, Entity as Product,
    Model as ProductModel, StockReportLine,
};
