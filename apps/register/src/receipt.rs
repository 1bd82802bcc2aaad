//! # Receipt Rendering
//!
//! Turns a checkout report into something a human (text) or a script
//! (JSON) can read.
//!
//! ## Rendering Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Report (pure, timeless)                                                │
//! │     │                                                                   │
//! │     ▼  + store name, + clock                                            │
//! │  Receipt (presentation DTO, camelCase, timestamped)                     │
//! │     │                                                                   │
//! │     ├── RenderFormat::Text ──► 32-column till roll                      │
//! │     └── RenderFormat::Json ──► pretty JSON on stdout                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The timestamp lives here and not on the Report on purpose: the engine
//! stays deterministic, the receipt records when it was printed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::RegisterConfig;
use tally_core::checkout::Report;

/// Width of the text receipt in characters.
const RECEIPT_WIDTH: usize = 32;

// =============================================================================
// Render Format
// =============================================================================

/// Output format for rendering a receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

// =============================================================================
// Receipt DTO
// =============================================================================

/// A printable receipt: one report plus store identity and print time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub store_name: String,
    /// RFC 3339 print timestamp.
    pub timestamp: String,
    pub items: Vec<ReceiptLine>,
    pub not_sold: Vec<ReceiptRejection>,
    pub subtotal_cents: i64,
    pub tax_subtotal_cents: i64,
    pub total_cents: i64,
}

/// One sold line on the receipt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptLine {
    pub label: String,
    pub price_cents: i64,
    pub tax_cents: i64,
}

/// One refused line on the receipt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptRejection {
    pub label: String,
    pub reason: String,
}

impl Receipt {
    /// Snapshots a report into a receipt.
    pub fn from_report(report: &Report, store_name: &str, timestamp: DateTime<Utc>) -> Self {
        Receipt {
            store_name: store_name.to_string(),
            timestamp: timestamp.to_rfc3339(),
            items: report
                .accepted
                .iter()
                .map(|a| ReceiptLine {
                    label: a.label.clone(),
                    price_cents: a.price_cents,
                    tax_cents: a.tax_cents,
                })
                .collect(),
            not_sold: report
                .rejected
                .iter()
                .map(|r| ReceiptRejection {
                    label: r.label.clone(),
                    reason: r.failed_restriction.clone(),
                })
                .collect(),
            subtotal_cents: report.subtotal_cents,
            tax_subtotal_cents: report.tax_subtotal_cents,
            total_cents: report.total_cents,
        }
    }

    /// Renders the receipt in the configured format.
    pub fn render(&self, config: &RegisterConfig) -> String {
        match config.output {
            RenderFormat::Text => self.render_text(config),
            RenderFormat::Json => serde_json::to_string_pretty(self).unwrap_or_default(),
        }
    }

    /// Renders the classic till-roll layout.
    ///
    /// ```text
    /// Tally Dev Store
    /// 2025-01-15T10:30:00+00:00
    /// --------------------------------
    /// Apple                      $1.50
    /// Candy Bar                  $4.00
    ///   tax                      $0.40
    ///
    /// NOT SOLD: Beer (minimum age 18)
    /// --------------------------------
    /// Subtotal                   $5.50
    /// Tax                        $0.40
    /// TOTAL                      $5.90
    /// ```
    fn render_text(&self, config: &RegisterConfig) -> String {
        let sep = "-".repeat(RECEIPT_WIDTH);
        let mut out = String::new();

        out.push_str(&self.store_name);
        out.push('\n');
        out.push_str(&self.timestamp);
        out.push('\n');
        out.push_str(&sep);
        out.push('\n');

        for line in &self.items {
            out.push_str(&format!(
                "{:<24}{:>8}\n",
                line.label,
                config.format_currency(line.price_cents)
            ));
            // Untaxed lines stay clean; only a real contribution prints.
            if line.tax_cents > 0 {
                out.push_str(&format!(
                    "  {:<22}{:>8}\n",
                    "tax",
                    config.format_currency(line.tax_cents)
                ));
            }
        }

        if !self.not_sold.is_empty() {
            out.push('\n');
            for rejection in &self.not_sold {
                out.push_str(&format!(
                    "NOT SOLD: {} ({})\n",
                    rejection.label, rejection.reason
                ));
            }
        }

        out.push_str(&sep);
        out.push('\n');
        out.push_str(&format!(
            "{:<24}{:>8}\n",
            "Subtotal",
            config.format_currency(self.subtotal_cents)
        ));
        out.push_str(&format!(
            "{:<24}{:>8}\n",
            "Tax",
            config.format_currency(self.tax_subtotal_cents)
        ));
        out.push_str(&format!(
            "{:<24}{:>8}",
            "TOTAL",
            config.format_currency(self.total_cents)
        ));

        out
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
