/// Cent-level threshold below which a USD debt is considered settled.
pub const DEBT_EPSILON_USD: f64 = 0.01;

/// UZS/USD rates at or below this are treated as data artifacts (a real rate
/// is in the thousands), and the caller-supplied default rate is used instead.
pub(crate) const MIN_PLAUSIBLE_RATE: f64 = 100.0;

/// Heuristic ceiling for a value appearing in a USD-denominated context.
/// Anything above it is almost certainly an unconverted UZS amount.
pub(crate) const MAX_PLAUSIBLE_USD: f64 = 100_000.0;

/// Caller-supplied default UZS/USD exchange rate, used wherever a historical
/// record carries no plausible snapshot rate of its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExchangeRate(f64);

impl ExchangeRate {
    pub fn new(uzs_per_usd: f64) -> Self {
        Self(uzs_per_usd)
    }

    pub fn get(&self) -> f64 {
        self.0
    }

    pub fn is_plausible(rate: f64) -> bool {
        rate.is_finite() && rate > MIN_PLAUSIBLE_RATE
    }

    /// Rate to use for a record carrying the given snapshot rate: the snapshot
    /// wins when plausible, otherwise the default.
    pub fn effective(&self, snapshot: Option<f64>) -> f64 {
        snapshot.filter(|r| Self::is_plausible(*r)).unwrap_or(self.0)
    }
}

/// Non-finite values (a decode artifact) coerce to zero rather than
/// poisoning downstream sums.
pub(crate) fn sanitize_amount(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
