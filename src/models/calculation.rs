use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Raw form fields for POST /calculate
///
/// Every field is kept as text so that parse failures can be reported with
/// the offending value instead of a generic deserializer rejection.
#[derive(Debug, Clone, Default)]
pub struct CalculationForm {
    pub address: Option<String>,
    pub square_feet: Option<String>,
    pub arv: Option<String>,
    pub transaction_percent: Option<String>,
    pub investor_roi_percent: Option<String>,
    pub rehab_ppsf: Option<String>,
    pub wholesale_fee: Option<String>,
}

/// Numeric inputs of a single deal evaluation
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationInput {
    pub address: String,
    pub square_feet: f64,
    pub arv: f64,
    pub transaction_percent: f64,  // percentage points, e.g. 5.0 for 5%
    pub investor_roi_percent: f64, // percentage points
    pub rehab_ppsf: f64,           // rehab cost per square foot
    pub wholesale_fee: f64,
}

/// Derived deal metrics, echoed together with the inputs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResult {
    pub address: String,
    pub square_feet: f64,
    pub arv: f64,
    pub transaction_percent: f64,
    pub investor_roi_percent: f64,
    pub rehab_ppsf: f64,
    pub transaction_cost: f64,
    pub investor_roi: f64,
    pub rehab_cost: f64,
    pub mao: f64,
    pub wholesale_fee: f64,
    pub buyer_entry_fee: f64,
    pub total_costs: f64,
    pub profit_margin: f64, // percent of ARV
    pub cost_per_sqft: f64,
    pub timestamp: DateTime<Utc>,
}

impl CalculationForm {
    /// Builds a form from raw name/value pairs.
    ///
    /// The first occurrence of a field wins; unknown names are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut form = Self::default();

        for (name, value) in pairs {
            let slot = match name.as_str() {
                "address" => &mut form.address,
                "square_feet" => &mut form.square_feet,
                "arv" => &mut form.arv,
                "transaction_percent" => &mut form.transaction_percent,
                "investor_roi_percent" => &mut form.investor_roi_percent,
                "rehab_ppsf" => &mut form.rehab_ppsf,
                "wholesale_fee" => &mut form.wholesale_fee,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }

        form
    }

    /// Parses the raw form into numeric inputs.
    ///
    /// Absent fields default to zero. Present fields are trimmed and must
    /// parse as a finite float, otherwise `AppError::InvalidInput` names the
    /// field.
    pub fn parse(self) -> Result<CalculationInput, AppError> {
        Ok(CalculationInput {
            address: self.address.unwrap_or_default(),
            square_feet: parse_number("square_feet", self.square_feet)?,
            arv: parse_number("arv", self.arv)?,
            transaction_percent: parse_number("transaction_percent", self.transaction_percent)?,
            investor_roi_percent: parse_number("investor_roi_percent", self.investor_roi_percent)?,
            rehab_ppsf: parse_number("rehab_ppsf", self.rehab_ppsf)?,
            wholesale_fee: parse_number("wholesale_fee", self.wholesale_fee)?,
        })
    }
}

fn parse_number(field: &'static str, raw: Option<String>) -> Result<f64, AppError> {
    match raw {
        None => Ok(0.0),
        Some(value) => match value.trim().parse::<f64>() {
            Ok(number) if number.is_finite() => Ok(number),
            _ => Err(AppError::InvalidInput { field, value }),
        },
    }
}
