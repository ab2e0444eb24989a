//! Future value, present value and amortization formulas

/// Convert a nominal annual percentage into a decimal monthly rate
///
/// 12% per year becomes `12 / 12 / 100 = 0.01` per month. This is the
/// nominal convention, not the effective `(1 + r)^(1/12) - 1` conversion.
pub fn monthly_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / 12.0 / 100.0
}

/// `(1 + rate)^periods` for a decimal rate; periods may be negative
pub fn compound_growth(rate: f64, periods: f64) -> f64 {
    (1.0 + rate).powf(periods)
}

/// Future value of one unit paid at the end of each of `periods` periods
///
/// `((1 + i)^n - 1) / i`
pub fn ordinary_annuity_factor(rate: f64, periods: u32) -> f64 {
    (compound_growth(rate, periods as f64) - 1.0) / rate
}

/// Future value of a level payment made at the start of each period
///
/// `FV = P * ((1 + i)^n - 1) / i * (1 + i)`
pub fn annuity_due_future_value(payment: f64, rate: f64, periods: u32) -> f64 {
    payment * ordinary_annuity_factor(rate, periods) * (1.0 + rate)
}

/// Future value of a single amount compounded annually at `annual_rate_percent`
pub fn lump_sum_future_value(amount: f64, annual_rate_percent: f64, years: u32) -> f64 {
    amount * compound_growth(annual_rate_percent / 100.0, years as f64)
}

/// Present value of one unit paid at the end of each of `periods` periods
///
/// `(1 - (1 + r)^-n) / r`
pub fn present_value_annuity_factor(rate: f64, periods: u32) -> f64 {
    (1.0 - compound_growth(rate, -(periods as f64))) / rate
}

/// Level payment that amortizes `principal` over `periods` at a decimal periodic rate
///
/// `EMI = P * i * (1 + i)^n / ((1 + i)^n - 1)`
pub fn emi_payment(principal: f64, rate: f64, periods: u32) -> f64 {
    let growth = compound_growth(rate, periods as f64);
    principal * rate * growth / (growth - 1.0)
}

/// Interest/principal split of one level payment against an outstanding balance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmortizationStep {
    pub interest: f64,
    pub principal: f64,
    pub closing_balance: f64,
}

impl AmortizationStep {
    /// Apply one payment to `opening_balance`
    pub fn apply(opening_balance: f64, rate: f64, payment: f64) -> Self {
        let interest = opening_balance * rate;
        let principal = payment - interest;
        Self {
            interest,
            principal,
            closing_balance: opening_balance - principal,
        }
    }
}
