//! Mandap360 report runner
//!
//! Reads a JSON export of the hosted store and prints filtered expense lists,
//! financial-year summaries and GST breakdowns.

mod data;

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::info;

use mandap_core::filter::{
    FilterState, FilterUpdate, FilterValue, PaymentStatus, distinct_categories, distinct_vendors,
};
use mandap_core::fiscal::{Clock, FinancialYear, SystemClock, parse_item_date};
use mandap_core::reports::{FinancialYearReport, ReportService};
use mandap_core::tax::{TaxCalculator, TaxRateBook, TaxSelection};
use mandap_shared::AppConfig;
use mandap_shared::format::{format_display_date, format_inr};

use crate::data::{Export, Snapshot};

#[derive(Parser)]
#[command(
    name = "mandap",
    version,
    about = "Reports over a Mandap360 data export"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List expenses matching the filters, most recent first
    Expenses {
        /// Path to the JSON export
        #[arg(short, long, env = "MANDAP_DATA")]
        data: PathBuf,
        /// Category name, or "all"
        #[arg(short, long, default_value = "all")]
        category: FilterValue<String>,
        /// Vendor name, or "all"
        #[arg(short, long, default_value = "all")]
        vendor: FilterValue<String>,
        /// paid, unpaid or all
        #[arg(short, long, default_value = "all")]
        status: FilterValue<PaymentStatus>,
        /// Earliest date (inclusive); disables the financial-year default
        #[arg(long, value_parser = parse_item_date)]
        from: Option<NaiveDate>,
        /// Latest date (inclusive); disables the financial-year default
        #[arg(long, value_parser = parse_item_date)]
        to: Option<NaiveDate>,
    },

    /// Summarise one financial year
    Report {
        /// Path to the JSON export
        #[arg(short, long, env = "MANDAP_DATA")]
        data: PathBuf,
        /// Financial year such as 2024-25 (defaults to the current one)
        #[arg(short, long)]
        year: Option<FinancialYear>,
    },

    /// List recent financial years
    Years {
        /// How many years to list
        #[arg(short, long, default_value_t = 5)]
        count: usize,
    },

    /// Show the GST breakdown of an amount at every configured rate
    Tax {
        /// Base amount
        amount: Decimal,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;
    mandap_shared::telemetry::init(&config.logging);

    let clock = SystemClock::from_name(&config.locale.timezone)?;
    info!(timezone = %clock.timezone(), today = %clock.today(), "Clock ready");

    let cli = Cli::parse();
    match cli.command {
        Commands::Expenses {
            data,
            category,
            vendor,
            status,
            from,
            to,
        } => {
            let snapshot = Snapshot::load(Export::read(&data)?).await?;

            let mut filters = FilterState::new();
            filters.update(FilterUpdate::Category(category));
            filters.update(FilterUpdate::Vendor(vendor));
            filters.update(FilterUpdate::PaymentStatus(status));
            filters.update(FilterUpdate::StartDate(from));
            filters.update(FilterUpdate::EndDate(to));

            print_expenses(&snapshot, &filters, &clock);
        }
        Commands::Report { data, year } => {
            let snapshot = Snapshot::load(Export::read(&data)?).await?;
            let year = year.unwrap_or_else(|| FinancialYear::current(&clock));

            let report = ReportService::financial_year_report(
                year,
                &snapshot.bookings,
                &snapshot.payments,
                &snapshot.additional_income,
                &snapshot.expenses,
            );
            print_report(&report);
        }
        Commands::Years { count } => {
            for year in FinancialYear::recent(&clock, count) {
                let marker = if year.is_current(&clock) { " (current)" } else { "" };
                println!("FY {year}{marker}");
            }
        }
        Commands::Tax { amount } => {
            let book = TaxRateBook::with_defaults(&config.tax.default_rates);
            let untaxed = TaxCalculator::calculate_for(amount, TaxSelection::None, &book)?;
            println!("{:<12} {:>14}", "No tax", format_inr(untaxed.total_amount));

            for rate in book.iter() {
                let calc = TaxCalculator::calculate_for(amount, TaxSelection::Rate(rate.id), &book)?;
                println!(
                    "{:<12} {:>14}  CGST {:>12}  SGST {:>12}  total {:>14}",
                    rate.name,
                    format_inr(calc.base_amount),
                    format_inr(calc.cgst_amount),
                    format_inr(calc.sgst_amount),
                    format_inr(calc.total_amount),
                );
            }
        }
    }

    Ok(())
}

fn print_expenses(snapshot: &Snapshot, filters: &FilterState, clock: &impl Clock) {
    let rows = filters.apply(&snapshot.expenses, clock);

    if rows.is_empty() {
        println!("No expenses match the filters.");
    }
    for expense in &rows {
        println!(
            "{:<12} {:<16} {:<20} {:>14} {}",
            format_display_date(expense.date),
            expense.category,
            expense.vendor_name,
            format_inr(expense.tax.total_amount),
            if expense.is_paid { "paid" } else { "unpaid" },
        );
    }

    let total: Decimal = rows.iter().map(|e| e.tax.total_amount).sum();
    println!("{} expense(s), total {}", rows.len(), format_inr(total));

    if !filters.has_active_filters() {
        println!(
            "Categories: {}",
            distinct_categories(&snapshot.expenses).join(", ")
        );
        println!("Vendors: {}", distinct_vendors(&snapshot.expenses).join(", "));
    }
}

fn print_report(report: &FinancialYearReport) {
    println!("Financial year {}", report.financial_year);
    println!("  Bookings            {:>6}", report.bookings);
    println!("  Rent billed         {:>16}", format_inr(report.rent_billed));
    println!("  Payments received   {:>16}", format_inr(report.payments_received));
    println!("  Additional income   {:>16}", format_inr(report.additional_income));
    println!("  Total income        {:>16}", format_inr(report.total_income));
    println!("  Expenses paid       {:>16}", format_inr(report.expenses_paid));
    println!("  Expenses due        {:>16}", format_inr(report.expenses_outstanding));
    println!("  CGST paid           {:>16}", format_inr(report.cgst_paid));
    println!("  SGST paid           {:>16}", format_inr(report.sgst_paid));
    println!("  Net                 {:>16}", format_inr(report.net));

    if !report.expenses_by_category.is_empty() {
        println!("Expenses by category");
        for line in &report.expenses_by_category {
            println!(
                "  {:<20} {:>4} {:>16}",
                line.category,
                line.count,
                format_inr(line.total)
            );
        }
    }
}
