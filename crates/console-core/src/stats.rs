//! Dashboard figures derived from the two collections.

use crate::domain::{Lead, Opportunity, Stage};

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub leads_count: usize,
    pub opportunities_count: usize,
    /// Opportunities per lead as a rounded whole percentage
    pub conversion_rate: u32,
    pub total_value: f64,
    pub won_value: f64,
}

impl DashboardStats {
    pub fn compute(leads: &[Lead], opportunities: &[Opportunity]) -> Self {
        let conversion_rate = if leads.is_empty() {
            0
        } else {
            (opportunities.len() as f64 / leads.len() as f64 * 100.0).round() as u32
        };
        let total_value = opportunities.iter().filter_map(|o| o.amount).sum();
        let won_value = opportunities
            .iter()
            .filter(|o| o.stage == Stage::ClosedWon)
            .filter_map(|o| o.amount)
            .sum();

        Self {
            leads_count: leads.len(),
            opportunities_count: opportunities.len(),
            conversion_rate,
            total_value,
            won_value,
        }
    }
}

/// `$12,345` style rendering with thousands separators and no cents
pub fn format_currency(value: f64) -> String {
    let whole = value.round() as i64;
    let digits = whole.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if whole < 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}
