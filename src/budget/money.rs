use rust_decimal::{Decimal, RoundingStrategy};

const CURRENCY_DP: u32 = 2;
const PERCENTAGE_DP: u32 = 1;

/// Formats an amount as dollars with exactly two decimals, e.g. `$-5.00`.
pub fn format_currency(amount: Decimal) -> String {
    format!("${}", to_places(amount, CURRENCY_DP))
}

/// Formats a percentage with one decimal and a trailing `%`, e.g. `71.4%`.
pub fn format_percentage(percentage: Decimal) -> String {
    format!("{}%", to_places(percentage, PERCENTAGE_DP))
}

/// Rounds half away from zero and pads with zeros so exactly `places`
/// decimals are displayed.
fn to_places(value: Decimal, places: u32) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(places);

    rounded
}
