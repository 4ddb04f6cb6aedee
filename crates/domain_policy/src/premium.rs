//! Premium frequency and monthly equivalents

use serde::{Deserialize, Serialize};

use core_kernel::Rand;

/// How often a premium is collected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PremiumFrequency {
    /// Debit order every month
    Monthly,
    /// Single payment per policy year
    Annually,
}

impl PremiumFrequency {
    /// Returns the number of payments per year
    pub fn payments_per_year(&self) -> u32 {
        match self {
            PremiumFrequency::Monthly => 12,
            PremiumFrequency::Annually => 1,
        }
    }

    /// Converts a premium at this frequency to its monthly equivalent
    ///
    /// Annual premiums are spread over twelve months and rounded to cents.
    pub fn monthly_equivalent(&self, premium: Rand) -> Rand {
        match self {
            PremiumFrequency::Monthly => premium,
            // divide only fails on zero parts
            PremiumFrequency::Annually => premium.divide(12).unwrap_or(premium),
        }
    }

    /// Annualised premium
    pub fn annual_equivalent(&self, premium: Rand) -> Rand {
        (0..self.payments_per_year()).map(|_| premium).sum()
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            PremiumFrequency::Monthly => "Monthly",
            PremiumFrequency::Annually => "Annually",
        }
    }
}
