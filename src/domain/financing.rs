// src/domain/financing.rs

/// Loan terms the calculator form offers. Anything else is a caller error.
pub const LOAN_TERMS_MONTHS: [u32; 6] = [12, 24, 36, 48, 60, 72];

/// Annual interest rate bounds, in percent. The form clamps to this range
/// before the quote is computed.
pub const MIN_ANNUAL_RATE: f64 = 0.0;
pub const MAX_ANNUAL_RATE: f64 = 50.0;

/// The down payment floor is 30% of the asking price.
const MIN_DOWN_PAYMENT_FRACTION: f64 = 0.30;

/// Form defaults for a fresh calculator.
pub const DEFAULT_TERM_MONTHS: u32 = 48;
pub const DEFAULT_ANNUAL_RATE: f64 = 12.5;

/// Why a down payment is unusable for a quote. The two cases are mutually
/// exclusive and each gets its own warning in the calculator UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownPaymentError {
    BelowMinimum,
    ExceedsPrice,
}

impl DownPaymentError {
    pub fn message(&self) -> &'static str {
        match self {
            DownPaymentError::BelowMinimum => "Down payment is below the 30% minimum",
            DownPaymentError::ExceedsPrice => "Down payment exceeds the vehicle price",
        }
    }
}

/// An amortized loan quote for one vehicle. All currency fields are in the
/// same unit as `price`; nothing is rounded internally except the
/// down-payment floor, so callers round for display only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinancingQuote {
    pub price: f64,
    pub down_payment: f64,
    pub loan_term_months: u32,
    pub annual_rate_percent: f64,
    pub monthly_payment: f64,
    pub total_payment: f64,
    pub total_interest: f64,
}

pub fn min_down_payment(price: f64) -> f64 {
    (price * MIN_DOWN_PAYMENT_FRACTION).round()
}

pub fn validate_down_payment(price: f64, down_payment: f64) -> Result<(), DownPaymentError> {
    if down_payment < min_down_payment(price) {
        return Err(DownPaymentError::BelowMinimum);
    }
    if down_payment > price {
        return Err(DownPaymentError::ExceedsPrice);
    }
    Ok(())
}

pub fn clamp_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent.clamp(MIN_ANNUAL_RATE, MAX_ANNUAL_RATE)
}

pub fn is_allowed_term(loan_term_months: u32) -> bool {
    LOAN_TERMS_MONTHS.contains(&loan_term_months)
}

impl FinancingQuote {
    /// Computes the quote. Pure arithmetic, no I/O, no failure modes: an
    /// out-of-bounds down payment yields a quote whose monthly payment is
    /// the `0.0` sentinel, and callers must check [`Self::is_valid`]
    /// (or [`validate_down_payment`] for the specific warning) before
    /// trusting the numbers.
    ///
    /// Preconditions: `price > 0`, `loan_term_months` is one of
    /// [`LOAN_TERMS_MONTHS`], and `annual_rate_percent` already clamped to
    /// `[0, 50]` by the caller.
    pub fn compute(
        price: f64,
        down_payment: f64,
        loan_term_months: u32,
        annual_rate_percent: f64,
    ) -> Self {
        let monthly_payment = if validate_down_payment(price, down_payment).is_err() {
            0.0
        } else {
            let principal = price - down_payment;
            let monthly_rate = (annual_rate_percent / 100.0) / 12.0;
            let n = f64::from(loan_term_months);

            if monthly_rate == 0.0 {
                principal / n
            } else {
                let growth = (1.0 + monthly_rate).powf(n);
                principal * (monthly_rate * growth) / (growth - 1.0)
            }
        };

        let total_payment = down_payment + monthly_payment * f64::from(loan_term_months);
        let total_interest = total_payment - price;

        Self {
            price,
            down_payment,
            loan_term_months,
            annual_rate_percent,
            monthly_payment,
            total_payment,
            total_interest,
        }
    }

    pub fn is_valid(&self) -> bool {
        validate_down_payment(self.price, self.down_payment).is_ok()
    }
}
