// src/shell.rs
//! Line-oriented front end over `Dashboard` used by `catalog-admin browse`.
use std::io::{self, Write};
use std::str::FromStr;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

use crate::handlers::{Dashboard, SubmitOutcome};
use crate::models::StockStatus;
use crate::pagination::PerPage;
use crate::routes::CatalogApi;
use crate::state::Draft;
use crate::view;

pub const HELP: &str = "\
commands:
  search TEXT          filter by name (empty TEXT clears)
  stock in|out|any     filter by stock status
  category ID|any      filter by category
  per-page 10|20|50    page size
  next | prev          move between pages
  refresh              reload the current page
  reset                clear all filters
  delete ID            delete a listed product (asks for confirmation)
  add NAME;PRICE;STATUS;CATEGORY
                       create a product, e.g. add Desk Lamp;19.99;in_stock;3
  categories           list category choices
  help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Search(String),
    Stock(Option<StockStatus>),
    Category(Option<i64>),
    PerPage(PerPage),
    Next,
    Prev,
    Refresh,
    Reset,
    Delete(i64),
    Add(Draft),
    Categories,
    Help,
    Quit,
}

impl FromStr for ShellCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();

        let command = match word {
            "search" => ShellCommand::Search(rest.to_string()),
            "stock" => ShellCommand::Stock(match rest {
                "any" | "" => None,
                other => Some(other.parse()?),
            }),
            "category" => ShellCommand::Category(match rest {
                "any" | "" => None,
                other => Some(
                    other
                        .parse()
                        .map_err(|_| format!("invalid category id '{other}'"))?,
                ),
            }),
            "per-page" => ShellCommand::PerPage(rest.parse()?),
            "next" => ShellCommand::Next,
            "prev" => ShellCommand::Prev,
            "refresh" => ShellCommand::Refresh,
            "reset" => ShellCommand::Reset,
            "delete" => ShellCommand::Delete(
                rest.parse()
                    .map_err(|_| format!("invalid product id '{rest}'"))?,
            ),
            "add" => ShellCommand::Add(parse_draft(rest)?),
            "categories" => ShellCommand::Categories,
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" => ShellCommand::Quit,
            other => return Err(format!("unknown command '{other}', try 'help'")),
        };
        Ok(command)
    }
}

fn parse_draft(fields: &str) -> Result<Draft, String> {
    let parts: Vec<&str> = fields.split(';').map(str::trim).collect();
    let [name, price, status, category] = parts[..] else {
        return Err("usage: add NAME;PRICE;STATUS;CATEGORY".to_string());
    };
    Ok(Draft {
        name: name.to_string(),
        price: price.to_string(),
        stock_status: if status.is_empty() {
            StockStatus::default()
        } else {
            status.parse()?
        },
        category: (!category.is_empty()).then(|| category.to_string()),
    })
}

fn print_listing<A: CatalogApi + Clone, W: Write>(
    dashboard: &Dashboard<A>,
    out: &mut W,
) -> io::Result<()> {
    let state = dashboard.browser().state();
    writeln!(out, "{}", view::render_filters(state))?;
    write!(out, "{}", view::render_table(state))?;
    writeln!(out, "{}", view::render_footer(state))
}

fn prompt<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}

/// Reads commands until `quit` or end of input, re-printing the listing
/// after each command that changes it.
pub async fn run_shell<A, R, W>(dashboard: &mut Dashboard<A>, input: R, out: &mut W) -> io::Result<()>
where
    A: CatalogApi + Clone,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    print_listing(dashboard, out)?;
    prompt(out)?;

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            prompt(out)?;
            continue;
        }
        match line.parse::<ShellCommand>() {
            Ok(ShellCommand::Quit) => break,
            Ok(command) => {
                if execute(dashboard, command, &mut lines, out).await? {
                    print_listing(dashboard, out)?;
                }
            }
            Err(message) => writeln!(out, "{message}")?,
        }
        prompt(out)?;
    }
    Ok(())
}

/// Runs one command; returns whether the listing should be shown again.
async fn execute<A, R, W>(
    dashboard: &mut Dashboard<A>,
    command: ShellCommand,
    lines: &mut Lines<R>,
    out: &mut W,
) -> io::Result<bool>
where
    A: CatalogApi + Clone,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let browser = dashboard.browser_mut();
    match command {
        ShellCommand::Search(text) => browser.search(text).await,
        ShellCommand::Stock(status) => browser.set_stock_status(status).await,
        ShellCommand::Category(id) => browser.set_category(id).await,
        ShellCommand::PerPage(per_page) => browser.set_per_page(per_page).await,
        ShellCommand::Refresh => browser.refresh().await,
        ShellCommand::Reset => browser.reset_filters().await,
        ShellCommand::Next => {
            if !browser.next_page().await {
                writeln!(out, "already on the last page")?;
                return Ok(false);
            }
        }
        ShellCommand::Prev => {
            if !browser.previous_page().await {
                writeln!(out, "already on the first page")?;
                return Ok(false);
            }
        }
        ShellCommand::Delete(id) => {
            let Some(pending) = browser.request_delete(id) else {
                writeln!(out, "no product #{id} on this page")?;
                return Ok(false);
            };
            writeln!(out, "{}", view::render_confirmation(pending))?;
            write!(out, "Confirm delete? [y/N] ")?;
            out.flush()?;
            let answer = lines.next_line().await?.unwrap_or_default();
            if !matches!(answer.trim(), "y" | "Y" | "yes") {
                browser.cancel_delete();
                writeln!(out, "cancelled")?;
                return Ok(false);
            }
            if let Some(notice) = browser.confirm_delete().await {
                writeln!(out, "{}", view::render_notice(&notice))?;
            }
        }
        ShellCommand::Add(draft) => {
            dashboard.open_form();
            dashboard.form_mut().state_mut().draft = draft;
            match dashboard.submit_form().await {
                SubmitOutcome::Invalid => {
                    writeln!(out, "product not created:")?;
                    write!(out, "{}", view::render_field_errors(dashboard.form().state().errors()))?;
                    dashboard.close_form();
                    return Ok(false);
                }
                SubmitOutcome::Created { notice, .. } => {
                    writeln!(out, "{}", view::render_notice(&notice))?;
                }
                SubmitOutcome::Failed(notice) => {
                    writeln!(out, "{}", view::render_notice(&notice))?;
                    write!(out, "{}", view::render_field_errors(dashboard.form().state().errors()))?;
                    dashboard.close_form();
                    return Ok(false);
                }
            }
        }
        ShellCommand::Categories => {
            write!(out, "{}", view::render_categories(dashboard.form().state().categories()))?;
            return Ok(false);
        }
        ShellCommand::Help => {
            writeln!(out, "{HELP}")?;
            return Ok(false);
        }
        ShellCommand::Quit => return Ok(false),
    }
    Ok(true)
}
