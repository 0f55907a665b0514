//! # bookstore
//!
//! Command-line front end for the inventory: list the grid, add a book, delete a book.
//!
//! ```bash
//! bookstore list --sort year --desc --filter author=herbert
//! bookstore add --title Dune --author Herbert --year 1965 --isbn 123 --price 9.99
//! bookstore delete -Nabc123
//! ```
//!
//! The store URL comes from `BOOKSTORE_URL` (see [`InventoryConfig`]) unless `--url` is
//! given. `--memory` runs against an empty in-process store instead.

use anyhow::{Context, Result};
use bookstore_inventory::clients::CollectionClient;
use bookstore_inventory::config::InventoryConfig;
use bookstore_inventory::framework::Row;
use bookstore_inventory::grid::{ColumnFilter, GridQuery, SortDirection, SortKey};
use bookstore_inventory::lifecycle::{setup_tracing, InventorySystem};
use bookstore_inventory::model::{Book, Column, UnknownColumn};
use bookstore_inventory::store::MemoryStore;
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing::{info, Instrument};

#[derive(Parser, Debug)]
#[command(name = "bookstore")]
#[command(about = "Bookstore inventory synchronized with a remote JSON collection")]
struct Args {
    /// Base URL of the backing store (overrides BOOKSTORE_URL)
    #[arg(long)]
    url: Option<String>,

    /// Use an empty in-process store instead of the remote one
    #[arg(long, conflicts_with = "url")]
    memory: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the inventory grid
    List {
        /// Column to sort by (title, author, year, isbn, price)
        #[arg(long)]
        sort: Option<Column>,

        /// Sort descending
        #[arg(long, requires = "sort")]
        desc: bool,

        /// Keep rows whose column contains TEXT, ignoring case (COLUMN=TEXT, repeatable)
        #[arg(long, value_parser = parse_filter)]
        filter: Vec<ColumnFilter>,
    },
    /// Add a book; every field is optional free text
    Add {
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long, default_value = "")]
        author: String,
        #[arg(long, default_value = "")]
        year: String,
        #[arg(long, default_value = "")]
        isbn: String,
        #[arg(long, default_value = "")]
        price: String,
    },
    /// Delete the book with the given id
    Delete {
        #[arg(allow_hyphen_values = true)]
        id: String,
    },
}

fn parse_filter(arg: &str) -> Result<ColumnFilter, String> {
    let (column, text) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected COLUMN=TEXT, got {arg:?}"))?;
    let column: Column = column
        .parse()
        .map_err(|e: UnknownColumn| e.to_string())?;
    Ok(ColumnFilter::new(column, text))
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    setup_tracing();

    let mut config = InventoryConfig::from_env().context("reading BOOKSTORE_* settings")?;
    if let Some(url) = args.url {
        config.store_url = url;
    }

    let system = if args.memory {
        info!("Using in-memory store");
        InventorySystem::with_store(Arc::new(MemoryStore::<Book>::new()), config.mailbox_capacity)
    } else {
        InventorySystem::new(&config).context("creating HTTP store client")?
    };
    let client = &system.book_client;

    let query = match args.command {
        Command::List { sort, desc, filter } => {
            let span = tracing::info_span!("list");
            client.refresh().instrument(span).await?;
            GridQuery {
                sort: sort.map(|column| SortKey {
                    column,
                    direction: if desc {
                        SortDirection::Descending
                    } else {
                        SortDirection::Ascending
                    },
                }),
                filters: filter,
            }
        }
        Command::Add {
            title,
            author,
            year,
            isbn,
            price,
        } => {
            let book = Book::new(title, author, year, isbn, price);
            let span = tracing::info_span!("add_book");
            client.add_book(book).instrument(span).await?;
            GridQuery::default()
        }
        Command::Delete { id } => {
            let span = tracing::info_span!("delete_book", %id);
            client.delete(id).instrument(span).await?;
            GridQuery::default()
        }
    };

    print_grid(&client.grid(&query));

    system.shutdown().await.map_err(anyhow::Error::msg)?;
    Ok(())
}

fn print_grid(rows: &[Row<Book>]) {
    let mut widths: Vec<usize> = std::iter::once("ID".len())
        .chain(Column::ALL.iter().map(|c| c.header().len()))
        .collect();
    for row in rows {
        widths[0] = widths[0].max(row.id.chars().count());
        for (i, column) in Column::ALL.iter().enumerate() {
            widths[i + 1] = widths[i + 1].max(row.record.field(*column).chars().count());
        }
    }

    let header: Vec<&str> = std::iter::once("ID")
        .chain(Column::ALL.iter().map(|c| c.header()))
        .collect();
    print_line(&header, &widths);
    for row in rows {
        let cells: Vec<&str> = std::iter::once(row.id.as_str())
            .chain(Column::ALL.iter().map(|c| row.record.field(*c)))
            .collect();
        print_line(&cells, &widths);
    }
    println!("({} books)", rows.len());
}

fn print_line(cells: &[&str], widths: &[usize]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    println!("{}", padded.join("  ").trim_end());
}
