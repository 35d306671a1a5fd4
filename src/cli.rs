//! Command-line shell over the inventory store.
//!
//! Every subcommand maps to exactly one store operation. Numeric fields are
//! taken as raw text and checked here, before the store is touched, the same
//! way an entry form would check them.

use crate::{
    entities::{ProductModel, StockReportLine},
    errors::{AppError, ServiceError},
    services::{InventoryService, NewProduct, StockUpdate},
};
use clap::{ArgAction, Args, Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use std::io::Write;
use tracing::warn;

const ADD_NUMERIC_MESSAGE: &str = "Stock Level and Reorder Point must be numeric values.";
const UPDATE_NUMERIC_MESSAGE: &str = "Product ID and Stock Level must be numeric values.";

#[derive(Parser, Debug)]
#[command(
    name = "inventory",
    about = "Track products, stock levels and reorder points",
    version
)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        action = ArgAction::SetTrue,
        help = "Render command output as pretty JSON"
    )]
    pub json: bool,
    #[arg(
        long,
        global = true,
        value_name = "URL",
        help = "SQLite database URL; overrides the configured database_url"
    )]
    pub database: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a product to the inventory
    Add(AddProductArgs),
    /// Overwrite the stock level of a product
    UpdateStock(UpdateStockArgs),
    /// Show every product
    List,
    /// Show name, stock level and reorder point of every product
    Report,
    /// List products whose stock is below their reorder point
    Reorder,
}

#[derive(Args, Debug)]
pub struct AddProductArgs {
    #[arg(long, help = "Product name")]
    pub name: String,
    #[arg(long, help = "Supplier name")]
    pub supplier: String,
    #[arg(long, allow_hyphen_values = true, help = "Current stock level")]
    pub stock: String,
    #[arg(long, allow_hyphen_values = true, help = "Reorder point")]
    pub reorder_point: String,
}

#[derive(Args, Debug)]
pub struct UpdateStockArgs {
    #[arg(long, allow_hyphen_values = true, help = "Product ID")]
    pub id: String,
    #[arg(long, allow_hyphen_values = true, help = "New stock level")]
    pub stock: String,
}

/// Parses a form field that must hold a non-negative integer.
///
/// Only ASCII digits are accepted: signs, whitespace, decimal points and the
/// empty string are rejected, as are values that overflow `i64`.
pub fn parse_form_integer(raw: &str) -> Option<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

impl AddProductArgs {
    pub fn validate(&self) -> Result<NewProduct, ServiceError> {
        match (
            parse_form_integer(&self.stock),
            parse_form_integer(&self.reorder_point),
        ) {
            (Some(stock_level), Some(reorder_point)) => Ok(NewProduct::new(
                self.name.clone(),
                self.supplier.clone(),
                stock_level,
                reorder_point,
            )),
            _ => Err(ServiceError::InvalidInput(ADD_NUMERIC_MESSAGE.to_string())),
        }
    }
}

impl UpdateStockArgs {
    /// Returns `(product_id, new_stock_level)`.
    pub fn validate(&self) -> Result<(i64, i64), ServiceError> {
        match (parse_form_integer(&self.id), parse_form_integer(&self.stock)) {
            (Some(id), Some(stock)) => Ok((id, stock)),
            _ => Err(ServiceError::InvalidInput(UPDATE_NUMERIC_MESSAGE.to_string())),
        }
    }
}

/// Runs one command against the store and renders its result to `out`.
///
/// Validation failures return before any store call is made.
pub async fn execute<W: Write>(
    service: &InventoryService,
    command: Commands,
    json: bool,
    out: &mut W,
) -> Result<(), ServiceError> {
    match command {
        Commands::Add(args) => {
            let input = args.validate()?;
            let name = input.name.clone();
            let id = service.create(input).await?;
            if json {
                print_json(out, &json!({ "id": id, "name": name }))?;
            } else {
                writeln!(out, "Product '{}' added to inventory (id {})", name, id)?;
            }
        }
        Commands::UpdateStock(args) => {
            let (product_id, stock_level) = args.validate()?;
            let outcome = service.update_stock(product_id, stock_level).await?;
            if json {
                print_json(
                    out,
                    &json!({
                        "product_id": product_id,
                        "stock_level": stock_level,
                        "outcome": outcome,
                    }),
                )?;
            } else {
                render_stock_update(out, product_id, outcome)?;
            }
        }
        Commands::List => {
            let products = service.list_all().await?;
            if json {
                print_json(out, &products)?;
            } else {
                for product in &products {
                    render_product(out, product)?;
                }
            }
        }
        Commands::Report => {
            let report = service.low_stock_report().await?;
            if json {
                print_json(out, &report)?;
            } else {
                for line in &report {
                    render_report_line(out, line)?;
                }
            }
        }
        Commands::Reorder => {
            let names = service.reorder_candidates().await?;
            if json {
                print_json(
                    out,
                    &json!({ "reorder_needed": !names.is_empty(), "products": names }),
                )?;
            } else {
                render_reorder_alert(out, &names)?;
            }
        }
    }

    Ok(())
}

/// Combines the result of a command with the result of closing the database.
///
/// A command error always wins; a close failure surfaces only when the
/// command itself succeeded.
pub fn settle(
    result: Result<(), ServiceError>,
    closed: Result<(), AppError>,
) -> Result<(), ServiceError> {
    match (result, closed) {
        (Err(err), Err(close_err)) => {
            warn!(error = %close_err, "Failed to close inventory database after command error");
            Err(err)
        }
        (Err(err), Ok(())) => Err(err),
        (Ok(()), closed) => closed.map_err(ServiceError::from),
    }
}

fn print_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<(), ServiceError> {
    writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}

fn render_stock_update<W: Write>(
    out: &mut W,
    product_id: i64,
    outcome: StockUpdate,
) -> std::io::Result<()> {
    match outcome {
        StockUpdate::Updated => writeln!(out, "Stock updated for product ID {}", product_id),
        StockUpdate::NoMatch => {
            writeln!(out, "No product with ID {}; nothing updated", product_id)
        }
    }
}

fn render_product<W: Write>(out: &mut W, product: &ProductModel) -> std::io::Result<()> {
    writeln!(
        out,
        "ID: {}, Name: {}, Stock: {}",
        product.id, product.name, product.stock_level
    )
}

fn render_report_line<W: Write>(out: &mut W, line: &StockReportLine) -> std::io::Result<()> {
    writeln!(
        out,
        "Product: {}, Stock: {}, Reorder Point: {}",
        line.name, line.stock_level, line.reorder_point
    )
}

fn render_reorder_alert<W: Write>(out: &mut W, names: &[String]) -> std::io::Result<()> {
    if names.is_empty() {
        return writeln!(out, "All products have sufficient stock.");
    }
    writeln!(out, "Place order for the following products:")?;
    for name in names {
        writeln!(out, "{}", name)?;
    }
    Ok(())
}
