// src/main.rs
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use catalog_admin::handlers::{
    CatalogBrowser, Dashboard, ProductCreator, SubmitOutcome, CATEGORY_LIMIT,
};
use catalog_admin::models::StockStatus;
use catalog_admin::pagination::PerPage;
use catalog_admin::shell::run_shell;
use catalog_admin::state::{Draft, Filters};
use catalog_admin::{view, ApiConfig, AppResult, CatalogApi, HttpCatalogApi};
use clap::{Parser, Subcommand};
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "catalog-admin")]
#[command(about = "Manage a remote product catalog")]
struct Cli {
    /// Backend origin (`/api` is appended). Defaults to $API_BASE_URL.
    #[arg(long, global = true)]
    base_url: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Products {
        #[command(subcommand)]
        command: ProductsCommand,
    },
    /// List category choices.
    Categories,
    /// Interactive listing with filters, paging, create and delete.
    Browse,
}

#[derive(Subcommand)]
enum ProductsCommand {
    List {
        #[arg(long)]
        q: Option<String>,
        #[arg(long)]
        stock_status: Option<StockStatus>,
        #[arg(long)]
        category: Option<i64>,
        #[arg(long, default_value_t = 1)]
        page: u64,
        #[arg(long, default_value = "10")]
        per_page: PerPage,
    },
    Create {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "0")]
        price: String,
        #[arg(long, default_value = "in_stock")]
        stock_status: StockStatus,
        #[arg(long)]
        category: Option<String>,
    },
    Delete {
        id: i64,
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so listings on stdout stay clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "catalog-admin failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> AppResult<ExitCode> {
    let config = match cli.base_url.as_deref() {
        Some(url) => ApiConfig::from_base_url(url)?,
        None => ApiConfig::from_env()?,
    };
    let api = HttpCatalogApi::new(config)?;

    match cli.command {
        Commands::Products { command } => products(api, command).await,
        Commands::Categories => {
            // No fallback to an empty list: a failed lookup exits non-zero.
            let categories = api.list_categories(CATEGORY_LIMIT).await?;
            print!("{}", view::render_categories(&categories));
            Ok(ExitCode::SUCCESS)
        }
        Commands::Browse => {
            let mut dashboard = Dashboard::mount(api).await;
            let input = BufReader::new(tokio::io::stdin());
            let mut out = io::stdout();
            run_shell(&mut dashboard, input, &mut out).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn products(api: HttpCatalogApi, command: ProductsCommand) -> AppResult<ExitCode> {
    match command {
        ProductsCommand::List {
            q,
            stock_status,
            category,
            page,
            per_page,
        } => {
            let mut browser = CatalogBrowser::new(api);
            let filters = Filters {
                q: q.unwrap_or_default(),
                stock_status,
                category_id: category,
            };
            browser.apply_filters(filters, per_page).await;
            if page > 1 {
                browser.go_to_page(page).await;
            }
            let state = browser.state();
            print!("{}", view::render_table(state));
            println!("{}", view::render_footer(state));
            Ok(if state.error().is_some() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            })
        }
        ProductsCommand::Create {
            name,
            price,
            stock_status,
            category,
        } => {
            let mut form = ProductCreator::new(api);
            form.state_mut().draft = Draft {
                name,
                price,
                stock_status,
                category,
            };
            match form.submit().await {
                SubmitOutcome::Created { product, notice } => {
                    println!("{}", view::render_notice(&notice));
                    if let Some(product) = product {
                        println!("#{} {} ({:.2})", product.id, product.name, product.price);
                    }
                    Ok(ExitCode::SUCCESS)
                }
                SubmitOutcome::Invalid => {
                    eprintln!("product not created:");
                    eprint!("{}", view::render_field_errors(form.state().errors()));
                    Ok(ExitCode::FAILURE)
                }
                SubmitOutcome::Failed(notice) => {
                    eprintln!("{}", view::render_notice(&notice));
                    eprint!("{}", view::render_field_errors(form.state().errors()));
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        ProductsCommand::Delete { id, yes } => {
            if !yes && !confirm(&format!("Delete product #{id}? This action cannot be undone."))? {
                println!("cancelled");
                return Ok(ExitCode::SUCCESS);
            }
            match api.delete_product(id).await {
                Ok(()) => {
                    println!("[ok] Deleted product #{id}");
                    Ok(ExitCode::SUCCESS)
                }
                Err(e) => {
                    tracing::error!(?e, id, "Failed to delete product");
                    eprintln!("[error] {}", e.user_message("Failed to delete product"));
                    Ok(ExitCode::FAILURE)
                }
            }
        }
    }
}

fn confirm(question: &str) -> AppResult<bool> {
    print!("{question} [y/N] ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}
