use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use thiserror::Error;

pub const MENU_MIN: i32 = 1;
pub const MENU_MAX: i32 = 4;

/// Largest amount a single entry may carry. Far enough below `Decimal::MAX`
/// that no realistic number of entries can overflow a total.
pub const MAX_AMOUNT: Decimal = dec!(1000000000000000);

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MenuChoice {
    AddIncome,
    AddExpense,
    ViewSummary,
    Exit,
}

/// Free text fields the user has to fill in.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Field {
    Source,
    Category,
    Date,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Source => write!(f, "Source"),
            Field::Category => write!(f, "Category"),
            Field::Date => write!(f, "Date"),
        }
    }
}

#[derive(Debug, PartialEq, Error)]
pub enum InputError {
    #[error("not a whole number")]
    NotAWholeNumber,
    #[error("choice outside of {min}..={max}")]
    OutOfRange { min: i32, max: i32 },
    #[error("not a number")]
    NotANumber,
    #[error("amount must be positive")]
    NonPositiveAmount,
    #[error("amount above {0}")]
    AmountTooLarge(Decimal),
    #[error("{0} cannot be empty")]
    EmptyField(Field),
}

impl InputError {
    /// What the user sees before being asked again. Amount prompts keep the
    /// `$` so the retry reads the same as the first ask.
    pub fn retry_prompt(&self) -> String {
        match self {
            InputError::NotAWholeNumber => "Invalid input. Please enter a whole number: ".to_string(),
            InputError::OutOfRange { min, max } => format!("Please enter a number between {} and {}: ", min, max),
            InputError::NotANumber => "Invalid input. Please enter a number: $".to_string(),
            InputError::NonPositiveAmount => "Amount must be positive. Try again: $".to_string(),
            InputError::AmountTooLarge(max) => format!("Amount cannot exceed ${}. Try again: $", max),
            InputError::EmptyField(field) => format!("{} cannot be empty. Try again: ", field),
        }
    }
}

pub fn parse_menu_choice(token: &str) -> Result<MenuChoice, InputError> {
    let choice: i32 = token.trim().parse().map_err(|_| InputError::NotAWholeNumber)?;

    match choice {
        1 => Ok(MenuChoice::AddIncome),
        2 => Ok(MenuChoice::AddExpense),
        3 => Ok(MenuChoice::ViewSummary),
        4 => Ok(MenuChoice::Exit),
        _ => Err(InputError::OutOfRange {
            min: MENU_MIN,
            max: MENU_MAX,
        }),
    }
}

/// Accepts plain (`20`, `12.50`) and scientific (`1e3`) notation. Values
/// finer than the decimal precision are not numbers we can hold, so they are
/// rejected as such rather than silently rounded to zero.
pub fn parse_amount(token: &str) -> Result<Decimal, InputError> {
    let token = token.trim();
    let amount = Decimal::from_str(token)
        .or_else(|_| Decimal::from_scientific(token))
        .map_err(|_| InputError::NotANumber)?;

    if amount.is_zero() && has_nonzero_digit(token) {
        return Err(InputError::NotANumber);
    }

    if amount <= Decimal::ZERO {
        return Err(InputError::NonPositiveAmount);
    }

    if amount > MAX_AMOUNT {
        return Err(InputError::AmountTooLarge(MAX_AMOUNT));
    }

    Ok(amount)
}

fn has_nonzero_digit(token: &str) -> bool {
    let mantissa = token.split(['e', 'E']).next().unwrap_or(token);
    mantissa.chars().any(|c| ('1'..='9').contains(&c))
}

pub fn parse_required(line: &str, field: Field) -> Result<String, InputError> {
    let value = line.trim();
    if value.is_empty() {
        return Err(InputError::EmptyField(field));
    }

    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_menu_choice() {
        assert_eq!(parse_menu_choice("1"), Ok(MenuChoice::AddIncome));
        assert_eq!(parse_menu_choice("2"), Ok(MenuChoice::AddExpense));
        assert_eq!(parse_menu_choice(" 3 "), Ok(MenuChoice::ViewSummary));
        assert_eq!(parse_menu_choice("4"), Ok(MenuChoice::Exit));
    }

    #[test]
    fn test_menu_choice_out_of_range() {
        let expected = Err(InputError::OutOfRange { min: 1, max: 4 });
        assert_eq!(parse_menu_choice("7"), expected);
        assert_eq!(parse_menu_choice("0"), expected);
        assert_eq!(parse_menu_choice("-1"), expected);
    }

    #[test]
    fn test_menu_choice_not_a_whole_number() {
        assert_eq!(parse_menu_choice("x"), Err(InputError::NotAWholeNumber));
        assert_eq!(parse_menu_choice("2.5"), Err(InputError::NotAWholeNumber));
        assert_eq!(parse_menu_choice("99999999999"), Err(InputError::NotAWholeNumber));
    }

    #[test]
    fn test_amount() {
        assert_eq!(parse_amount("20"), Ok(dec!(20)));
        assert_eq!(parse_amount("12.50"), Ok(dec!(12.5)));
        assert_eq!(parse_amount("0.01"), Ok(dec!(0.01)));
        assert_eq!(parse_amount("1e3"), Ok(dec!(1000)));
    }

    #[test]
    fn test_amount_rejections_are_distinct() {
        assert_eq!(parse_amount("-5"), Err(InputError::NonPositiveAmount));
        assert_eq!(parse_amount("0"), Err(InputError::NonPositiveAmount));
        assert_eq!(parse_amount("abc"), Err(InputError::NotANumber));
        assert_eq!(parse_amount("$20"), Err(InputError::NotANumber));
    }

    #[test]
    fn test_amount_ceiling() {
        assert_eq!(parse_amount("1000000000000000"), Ok(MAX_AMOUNT));
        assert_eq!(parse_amount("1000000000000000.01"), Err(InputError::AmountTooLarge(MAX_AMOUNT)));
        assert_eq!(
            parse_amount("50000000000000000000000000000"),
            Err(InputError::AmountTooLarge(MAX_AMOUNT))
        );
        assert_eq!(parse_amount("1e20"), Err(InputError::AmountTooLarge(MAX_AMOUNT)));
    }

    #[test]
    fn test_amount_below_precision_is_not_a_number() {
        assert_eq!(parse_amount("0.00000000000000000000000000001"), Err(InputError::NotANumber));
        assert_eq!(parse_amount("1e-30"), Err(InputError::NotANumber));
        assert_eq!(parse_amount("0.000"), Err(InputError::NonPositiveAmount));
        assert_eq!(parse_amount("0e5"), Err(InputError::NonPositiveAmount));
    }

    #[test]
    fn test_required_field() {
        assert_eq!(parse_required("  Salary \n", Field::Source), Ok("Salary".to_string()));
        assert_eq!(parse_required(" \n", Field::Category), Err(InputError::EmptyField(Field::Category)));
    }

    #[test]
    fn test_retry_prompts() {
        assert_eq!(
            InputError::NotAWholeNumber.retry_prompt(),
            "Invalid input. Please enter a whole number: "
        );
        assert_eq!(
            InputError::OutOfRange { min: 1, max: 4 }.retry_prompt(),
            "Please enter a number between 1 and 4: "
        );
        assert_eq!(InputError::NotANumber.retry_prompt(), "Invalid input. Please enter a number: $");
        assert_eq!(InputError::NonPositiveAmount.retry_prompt(), "Amount must be positive. Try again: $");
        assert_eq!(
            InputError::AmountTooLarge(dec!(100)).retry_prompt(),
            "Amount cannot exceed $100. Try again: $"
        );
        assert_eq!(
            InputError::EmptyField(Field::Date).retry_prompt(),
            "Date cannot be empty. Try again: "
        );
    }
}
