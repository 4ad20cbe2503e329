//! Output formatting for the CLI.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use sweetshop_catalog::catalog::parse_timestamp;

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            let body = serde_json::json!({ "error": msg });
            eprintln!("{}", body);
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a table row. Columns are padded by character count.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| {
                console::pad_str(col, *width, console::Alignment::Left, Some("…")).into_owned()
            })
            .collect();
        println!("  {}", formatted.join("  "));
    }

    /// Create a spinner for an in-flight fetch.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(spinner_style) =
            ProgressStyle::default_spinner().template("{spinner:.green} {msg}")
        {
            pb.set_style(spinner_style);
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(80));
        pb
    }

    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Status badge for fetch states.
pub fn status_badge(status: &str) -> String {
    match status.to_lowercase().as_str() {
        "succeeded" => style(status).green().to_string(),
        "loading" => style(status).yellow().to_string(),
        "failed" => style(status).red().to_string(),
        "idle" => style(status).dim().to_string(),
        _ => status.to_string(),
    }
}

/// Format a price in dollars.
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

/// Shorten an ISO-8601 timestamp to its date.
pub fn format_date(created_at: &str) -> String {
    parse_timestamp(created_at)
        .map(|ts| ts.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| created_at.to_string())
}
