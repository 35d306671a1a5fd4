use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20240101_000001_create_product_table::Migration)]
    }
}

mod m20240101_000001_create_product_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000001_create_product_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            // AUTOINCREMENT keeps ids from being reused after the highest row goes away
            manager
                .create_table(
                    Table::create()
                        .table(Product::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Product::ProductId)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Product::ProductName).text().not_null())
                        .col(ColumnDef::new(Product::SupplierName).text().not_null())
                        .col(ColumnDef::new(Product::StockLevel).integer().not_null())
                        .col(ColumnDef::new(Product::ReorderPoint).integer().not_null())
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Product::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub enum Product {
        #[sea_orm(iden = "Product")]
        Table,
        ProductId,
        ProductName,
        SupplierName,
        StockLevel,
        ReorderPoint,
    }
}
