//! Terminal rendering for calendar views, validation reports and quotes

use chrono::Datelike;
use colored::*;
use price_calendar::{DayCell, MonthView, PriceBadge, ValidationReport};
use trip_catalog::QuoteSummary;

const CELL_WIDTH: usize = 12;

pub fn print_month(view: &MonthView) {
    let title = view.month.first_day().format("%B %Y").to_string();
    println!("\n{}", title.bold());
    println!("{}", "=".repeat(CELL_WIDTH * 7));
    for name in ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"] {
        print!("{:<width$}", name.dimmed(), width = CELL_WIDTH);
    }
    println!();

    let lead = view.month.first_day().weekday().num_days_from_monday() as usize;
    print!("{}", " ".repeat(lead * CELL_WIDTH));

    for (i, cell) in view.cells.iter().enumerate() {
        print!("{}", cell_text(cell));
        if (lead + i + 1) % 7 == 0 {
            println!();
        }
    }
    println!();

    for cell in view.cells.iter().filter(|c| !c.tooltip.is_empty()) {
        println!("{}", cell.date.to_string().yellow());
        for line in cell.tooltip.lines() {
            println!("  {line}");
        }
    }
}

fn cell_text(cell: &DayCell) -> String {
    let day = format!("{:>2} ", cell.date.day());
    let Some(badge) = &cell.badge else {
        return format!("{day}{}", " ".repeat(CELL_WIDTH - 3));
    };

    let extra = match badge {
        PriceBadge::Price { overflow: Some(count), .. } => format!("+{}", count - 1),
        _ => String::new(),
    };
    let text = clip(badge.text(), (CELL_WIDTH - 4).saturating_sub(extra.len()));
    let padding = " ".repeat((CELL_WIDTH - 3).saturating_sub(text.chars().count() + extra.len()));
    let styled = if badge.is_flight_day() { text.cyan().bold() } else { text.green() };

    format!("{day}{styled}{}{padding}", extra.yellow())
}

fn clip(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

pub fn print_day(cell: &DayCell) {
    println!("{} {}", "📅".bold(), cell.date.format("%A %Y-%m-%d").to_string().bold());
    if cell.matches.is_empty() {
        println!("  {}", "No price tiers for this date".dimmed());
        return;
    }

    for tier in &cell.matches {
        let name = tier.destination_name.as_deref().unwrap_or("-");
        if tier.is_flight_day {
            println!("  {:<28} {} {}", name, "flight day".cyan(), tier.label().unwrap_or(""));
        } else {
            println!("  {:<28} {}", name, tier.price);
        }
    }

    if let Some(badge) = &cell.badge {
        println!("Badge: {}", badge.text().bold());
    }
    if !cell.tooltip.is_empty() {
        println!("Tooltip:\n{}", cell.tooltip);
    }
}

pub fn print_report(destination: &str, report: &ValidationReport) {
    if report.is_clean() {
        println!("✅ {} ({} tiers)", destination.bold(), report.tier_count);
        return;
    }

    println!(
        "⚠️  {} ({} tiers, {} issues)",
        destination.bold(),
        report.tier_count,
        report.issues.len().to_string().yellow()
    );
    for issue in &report.issues {
        println!("    {issue}");
    }
}

pub fn print_quote(summary: &QuoteSummary) {
    if let Some(client) = &summary.client_name {
        println!("Quote for {}", client.bold());
    }
    println!("{}", "=".repeat(72));
    for line in &summary.lines {
        println!(
            "{:<30} {}  {:>10} x {:<3} {:>12}",
            line.destination_name, line.start_date, line.unit_price, line.passengers, line.subtotal
        );
    }
    println!("{}", "-".repeat(72));
    println!("{:<52} {:>12}", "Total".bold(), summary.total.to_string().bold());
    println!("{:<52} {:>12}", "", summary.total_display.green());
}
