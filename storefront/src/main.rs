//! # Storefront CLI
//!
//! Headless walkthrough of the storefront client against a running API.
//!
//! ```text
//! storefront categories           list categories
//! storefront menus [name]         menu of a category (default: first)
//! storefront search <text>        search all menus by name
//! storefront cart                 cart entries and order summary
//! storefront add <menu-id>        add a menu item to the cart
//! storefront remove <entry-id>    remove a cart entry
//!
//! storefront category-add <name> [status]
//! storefront category-delete <category-id>
//! storefront menu-add <category-id> <price> <stock> <image> <name> <description...>
//! ```

use shared::{format_price, CartEntry, MenuItem};
use std::path::PathBuf;
use storefront::app::{AddOutcome, Notice, OrderSummary, Storefront};
use storefront::config::StorefrontConfig;
use storefront::utils::validation::MenuForm;
use storefront::{AppError, Result};
use tokio_util::sync::CancellationToken;

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Categories,
    Menus(Option<String>),
    Search(String),
    Cart,
    Add(i64),
    Remove(i64),
    CreateCategory { name: String, status: String },
    DeleteCategory(i64),
    CreateMenu(MenuForm),
}

impl Command {
    fn parse(args: &[String]) -> Result<Self> {
        let arg = |i: usize| args.get(i).map(String::as_str);

        match arg(0).unwrap_or("categories") {
            "categories" => Ok(Command::Categories),
            "menus" => Ok(Command::Menus(
                (args.len() > 1).then(|| args[1..].join(" ")),
            )),
            "search" => Ok(Command::Search(args.get(1..).unwrap_or_default().join(" "))),
            "cart" => Ok(Command::Cart),
            "add" => parse_id(arg(1), "menu id").map(Command::Add),
            "remove" => parse_id(arg(1), "entry id").map(Command::Remove),
            "category-add" => Ok(Command::CreateCategory {
                name: arg(1).unwrap_or_default().to_string(),
                status: arg(2).unwrap_or("Active").to_string(),
            }),
            "category-delete" => parse_id(arg(1), "category id").map(Command::DeleteCategory),
            "menu-add" => Ok(Command::CreateMenu(MenuForm {
                category_id: arg(1).and_then(|v| v.parse().ok()),
                price: arg(2).unwrap_or_default().to_string(),
                stock: arg(3).unwrap_or_default().to_string(),
                image: arg(4).map(PathBuf::from),
                name: arg(5).unwrap_or_default().to_string(),
                description: args.get(6..).unwrap_or_default().join(" "),
                status: String::new(),
            })),
            other => Err(AppError::Validation(format!("Unknown command: {}", other))),
        }
    }

    /// Wording shown instead of transport detail when the command fails.
    fn failure_message(&self) -> Option<&'static str> {
        match self {
            Command::Menus(_) => Some("Failed to load menu items"),
            Command::Add(_) => Some("Failed to add item to cart."),
            Command::CreateCategory { .. } => Some("Failed to create category. Please try again."),
            Command::DeleteCategory(_) => Some("Failed to delete category. Please try again."),
            Command::CreateMenu(_) => Some("Failed to create menu"),
            _ => None,
        }
    }
}

fn parse_id(value: Option<&str>, what: &str) -> Result<i64> {
    value
        .and_then(|v| v.parse().ok())
        .ok_or_else(|| AppError::Validation(format!("Expected a numeric {}", what)))
}

#[tokio::main]
async fn main() -> Result<()> {
    let _log_guard = storefront::debug::init();

    let config = StorefrontConfig::from_env().map_err(AppError::Validation)?;
    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = Command::parse(&args)?;

    tracing::info!(api_url = %config.api_url, ?command, "Storefront CLI started");

    let store = Storefront::new(&config);
    let cancel = CancellationToken::new();

    let ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c.cancel();
        }
    });

    let fallback = command.failure_message();
    if let Err(e) = run(&store, command, &cancel).await {
        let notice = match fallback {
            Some(message) => Notice::failed(message, &e),
            None => Notice::from(&e),
        };
        println!("{}", notice);
        return Err(e);
    }
    Ok(())
}

async fn run(store: &Storefront, command: Command, cancel: &CancellationToken) -> Result<()> {
    match command {
        Command::Categories => {
            store.menus.load_categories(cancel).await?;
            for category in store.menus.categories() {
                println!("{:>4}  {:<24} {}", category.id, category.name, category.status);
            }
        }
        Command::Menus(name) => {
            let first = store.menus.load_categories(cancel).await?;
            let Some(name) = name.or(first) else {
                println!("No categories");
                return Ok(());
            };
            store.menus.select_category(&name, cancel).await?;
            println!("[{}]", name);
            print_menus(&store.menus.get_items_for(&name));
        }
        Command::Search(text) => {
            store.admin.load_menus(cancel).await?;
            print_menus(&store.admin.search(&text));
        }
        Command::Cart => {
            store.cart.load(cancel).await?;
            print_cart(&store.cart.snapshot(), &store.summary());
        }
        Command::Add(menu_id) => {
            store.admin.load_menus(cancel).await?;
            if let AddOutcome::Added(_) = store.add_to_cart(menu_id, cancel).await? {
                println!("{}", Notice::item_added());
            }
        }
        Command::Remove(entry_id) => {
            store.cart.load(cancel).await?;
            store.cart.remove(entry_id, cancel).await?;
            print_cart(&store.cart.snapshot(), &store.summary());
        }
        Command::CreateCategory { name, status } => {
            store.admin.create_category(&name, &status, cancel).await?;
            println!("{}", Notice::category_created());
        }
        Command::DeleteCategory(id) => {
            store.admin.delete_category(id, cancel).await?;
            println!("{}", Notice::category_deleted());
        }
        Command::CreateMenu(form) => {
            store.admin.create_menu(&form, cancel).await?;
            println!("{}", Notice::menu_created());
        }
    }
    Ok(())
}

fn print_menus(items: &[MenuItem]) {
    if items.is_empty() {
        println!("No menu items");
        return;
    }
    for item in items {
        println!(
            "{:>4}  {:<24} Rp {:>10}  stock {}",
            item.id,
            item.name,
            format_price(item.price),
            item.stock
        );
    }
}

fn print_cart(entries: &[CartEntry], summary: &OrderSummary) {
    for entry in entries {
        println!(
            "{:>4}  {:<24} {} x Rp {:>10}",
            entry.id,
            entry.name,
            entry.qty,
            format_price(entry.price)
        );
    }
    println!("Subtotal  Rp {:>10}", format_price(summary.subtotal));
    println!("Tax       Rp {:>10}", format_price(summary.tax));
    println!("Fee       Rp {:>10}", format_price(summary.fee));
    println!("Total     Rp {:>10}", format_price(summary.total));
}
