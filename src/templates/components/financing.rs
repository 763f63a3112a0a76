use crate::domain::financing::{
    min_down_payment, validate_down_payment, FinancingQuote, LOAN_TERMS_MONTHS,
};
use maud::{html, Markup};

/// Calculator form for the detail page. Recomputes over htmx on every
/// change, swapping only the quote fragment.
pub fn financing_calculator(listing_id: i64, price: i64, quote: &FinancingQuote) -> Markup {
    html! {
        section class="financing" id="financing" {
            h2 { "Finance this car" }
            form hx-get={ "/listings/" (listing_id) "/financing" }
                 hx-target="#financing-result"
                 hx-trigger="change, submit"
                 action={ "/listings/" (listing_id) "/financing" }
                 method="get" {
                label {
                    "Down payment (min " (min_down_payment(price as f64) as i64) ")"
                    input type="number" name="down_payment" min="0"
                          value=(quote.down_payment as i64);
                }
                label {
                    "Term"
                    select name="term_months" {
                        @for term in LOAN_TERMS_MONTHS {
                            option value=(term) selected[quote.loan_term_months == term] {
                                (term) " months"
                            }
                        }
                    }
                }
                label {
                    "Annual interest rate (%)"
                    input type="number" name="annual_rate" min="0" max="50" step="0.1"
                          value=(quote.annual_rate_percent);
                }
                noscript { button type="submit" { "Calculate" } }
            }
            div id="financing-result" {
                (financing_quote_fragment(quote))
            }
        }
    }
}

/// The swappable result block: either the three quote figures or exactly
/// one of the two down-payment warnings. Figures are rounded here, for
/// display only.
pub fn financing_quote_fragment(quote: &FinancingQuote) -> Markup {
    html! {
        @match validate_down_payment(quote.price, quote.down_payment) {
            Err(err) => {
                p class="financing-warning" { (err.message()) }
            }
            Ok(()) => {
                dl class="financing-quote" {
                    dt { "Monthly payment" }
                    dd class="financing-monthly" { (format_money(quote.monthly_payment)) }
                    dt { "Total payment" }
                    dd { (format_money(quote.total_payment)) }
                    dt { "Total interest" }
                    dd { (format_money(quote.total_interest)) }
                }
            }
        }
    }
}

fn format_money(amount: f64) -> String {
    format!("{:.0}", amount.round())
}
