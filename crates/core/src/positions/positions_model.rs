use log::warn;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CURRENCY, UNKNOWN_SECTOR};
use crate::errors::{Error, Result, ValidationError};
use crate::utils::decimal_utils::percent_of;

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

/// One brokerage holding as supplied by a sync or market-data collaborator.
///
/// Only the raw inputs are stored; value, cost and gain are derived on
/// demand. Missing numeric fields deserialize to zero.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub symbol: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub shares: Decimal,
    /// Average cost per share.
    #[serde(default)]
    pub average_cost: Decimal,
    /// Current market price per share.
    #[serde(default)]
    pub current_price: Decimal,
    /// Annual dividend per share.
    #[serde(default)]
    pub annual_dividend: Option<Decimal>,
    /// Previous session close per share, when the price feed provides one.
    #[serde(default)]
    pub previous_close: Option<Decimal>,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for Position {
    fn default() -> Self {
        Position {
            symbol: String::new(),
            name: None,
            shares: Decimal::ZERO,
            average_cost: Decimal::ZERO,
            current_price: Decimal::ZERO,
            annual_dividend: None,
            previous_close: None,
            sector: None,
            currency: default_currency(),
        }
    }
}

impl Position {
    pub fn new(
        symbol: impl Into<String>,
        shares: Decimal,
        average_cost: Decimal,
        current_price: Decimal,
    ) -> Self {
        Position {
            symbol: symbol.into(),
            shares,
            average_cost,
            current_price,
            ..Default::default()
        }
    }

    pub fn with_dividend(mut self, annual_dividend: Decimal) -> Self {
        self.annual_dividend = Some(annual_dividend);
        self
    }

    pub fn with_sector(mut self, sector: impl Into<String>) -> Self {
        self.sector = Some(sector.into());
        self
    }

    pub fn with_previous_close(mut self, previous_close: Decimal) -> Self {
        self.previous_close = Some(previous_close);
        self
    }

    /// Market value: shares × current price.
    pub fn total_value(&self) -> Decimal {
        self.shares * self.current_price
    }

    /// Cost basis: shares × average cost.
    pub fn total_cost(&self) -> Decimal {
        self.shares * self.average_cost
    }

    pub fn gain_loss(&self) -> Decimal {
        self.total_value() - self.total_cost()
    }

    /// Gain/loss as a percentage of cost basis; zero when the cost is zero.
    pub fn gain_loss_percent(&self) -> Decimal {
        percent_of(self.gain_loss(), self.total_cost())
    }

    /// Annual dividend income: shares × annual dividend per share.
    pub fn annual_income(&self) -> Decimal {
        self.shares * self.annual_dividend.unwrap_or(Decimal::ZERO)
    }

    /// Sector label, with blank or missing sectors mapped to "Unknown".
    pub fn sector_or_unknown(&self) -> &str {
        match self.sector.as_deref().map(str::trim) {
            Some(sector) if !sector.is_empty() => sector,
            _ => UNKNOWN_SECTOR,
        }
    }

    /// Checks that the position describes a real holding.
    pub fn validate(&self) -> Result<()> {
        if self.symbol.trim().is_empty() {
            return Err(ValidationError::MissingField("symbol".to_string()).into());
        }

        let checks: [(&'static str, Option<Decimal>); 5] = [
            ("shares", Some(self.shares)),
            ("averageCost", Some(self.average_cost)),
            ("currentPrice", Some(self.current_price)),
            ("annualDividend", self.annual_dividend),
            ("previousClose", self.previous_close),
        ];
        for (field, value) in checks {
            if let Some(value) = value {
                if value < Decimal::ZERO {
                    return Err(ValidationError::NegativeValue {
                        symbol: self.symbol.clone(),
                        field,
                        value,
                    }
                    .into());
                }
            }
        }

        Ok(())
    }
}

/// Validates every position in the list, failing on the first bad entry.
///
/// Also rejects lists whose per-position products or portfolio totals would
/// overflow `Decimal`, so aggregation over an accepted list cannot panic.
pub fn validate_positions(positions: &[Position]) -> Result<()> {
    // Running value, cost, income and previous-close value
    let mut totals = [Decimal::ZERO; 4];

    for (index, position) in positions.iter().enumerate() {
        if let Err(e) = position.validate() {
            warn!("Rejecting position list: entry {} is invalid: {}", index, e);
            return Err(e);
        }

        let shares = position.shares;
        let products = [
            ("value", shares.checked_mul(position.current_price)),
            ("cost", shares.checked_mul(position.average_cost)),
            (
                "dividend income",
                shares.checked_mul(position.annual_dividend.unwrap_or(Decimal::ZERO)),
            ),
            (
                "previous close value",
                shares.checked_mul(position.previous_close.unwrap_or(Decimal::ZERO)),
            ),
        ];
        for (total, (label, product)) in totals.iter_mut().zip(products) {
            let running = *total;
            *total = product
                .and_then(|amount| running.checked_add(amount))
                .ok_or_else(|| {
                    warn!(
                        "Rejecting position list: {} overflows at entry {}",
                        label, index
                    );
                    Error::Calculation(format!(
                        "Position {}: portfolio {} exceeds the supported numeric range",
                        position.symbol, label
                    ))
                })?;
        }
    }
    Ok(())
}

/// Parses a JSON array of positions and validates it.
///
/// Anything other than an array of position objects is rejected before
/// aggregation can run on a partial list.
pub fn parse_positions(json: &str) -> Result<Vec<Position>> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    if !value.is_array() {
        return Err(ValidationError::Malformed(format!(
            "expected an array of positions, found {}",
            json_kind(&value)
        ))
        .into());
    }
    let positions: Vec<Position> = serde_json::from_value(value)?;
    validate_positions(&positions)?;
    Ok(positions)
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// Per-position performance view used by ranked lists.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PositionPerformance {
    pub symbol: String,
    pub name: Option<String>,
    pub sector: String,
    pub shares: Decimal,
    pub current_price: Decimal,
    pub total_value: Decimal,
    pub total_cost: Decimal,
    pub gain_loss: Decimal,
    pub gain_loss_percent: Decimal,
}

impl From<&Position> for PositionPerformance {
    fn from(position: &Position) -> Self {
        PositionPerformance {
            symbol: position.symbol.clone(),
            name: position.name.clone(),
            sector: position.sector_or_unknown().to_string(),
            shares: position.shares,
            current_price: position.current_price,
            total_value: position.total_value(),
            total_cost: position.total_cost(),
            gain_loss: position.gain_loss(),
            gain_loss_percent: position.gain_loss_percent(),
        }
    }
}
