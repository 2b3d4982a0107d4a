//! Groups positions by sector.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::portfolio::summary::total_value;
use crate::positions::Position;
use crate::utils::decimal_utils::percent_of;

use super::SectorAllocationEntry;

/// Sums position value per sector and expresses it as a share of the total.
///
/// Entries are sorted by percent, highest first. Sectors with equal
/// percents keep the order in which they first appear in `positions`.
/// Every position lands in exactly one entry, so the entry values add up to
/// the portfolio value.
pub fn sector_allocation(positions: &[Position]) -> Vec<SectorAllocationEntry> {
    let portfolio_value = total_value(positions);

    // Sector -> index into `entries`, keeping first-seen order
    let mut index_by_sector: HashMap<&str, usize> = HashMap::new();
    let mut entries: Vec<SectorAllocationEntry> = Vec::new();

    for position in positions {
        let sector = position.sector_or_unknown();
        let index = *index_by_sector.entry(sector).or_insert_with(|| {
            entries.push(SectorAllocationEntry {
                sector: sector.to_string(),
                value: Decimal::ZERO,
                percent: Decimal::ZERO,
                position_count: 0,
            });
            entries.len() - 1
        });
        let entry = &mut entries[index];
        entry.value += position.total_value();
        entry.position_count += 1;
    }

    for entry in &mut entries {
        entry.percent = percent_of(entry.value, portfolio_value);
    }

    entries.sort_by(|a, b| b.percent.cmp(&a.percent));
    entries
}

/// Percent of portfolio value held by the largest sector; zero when empty.
pub fn largest_sector_percent(positions: &[Position]) -> Decimal {
    sector_allocation(positions)
        .first()
        .map(|entry| entry.percent)
        .unwrap_or(Decimal::ZERO)
}
