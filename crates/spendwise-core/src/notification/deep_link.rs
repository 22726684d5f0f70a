//! `add-expense` deep links carrying a pre-filled amount.

use std::str::FromStr;

use rust_decimal::Decimal;
use url::Url;

use crate::error::DeepLinkError;

/// Route name of the add-expense screen.
pub const ADD_EXPENSE_ROUTE: &str = "add-expense";

/// Build `{scheme}://add-expense?amount={amount}`.
pub fn add_expense_url(scheme: &str, amount: Decimal) -> String {
    format!("{}://{}?amount={}", scheme, ADD_EXPENSE_ROUTE, amount)
}

/// Parse an add-expense deep link and return its amount.
///
/// Accepts both `scheme://add-expense?...` and development URLs where the
/// route is the last path segment (`exp://host:port/--/add-expense?...`).
pub fn parse_add_expense_url(link: &str) -> Result<Decimal, DeepLinkError> {
    let url = Url::parse(link.trim()).map_err(|e| DeepLinkError::Malformed(e.to_string()))?;

    let on_route = url.host_str() == Some(ADD_EXPENSE_ROUTE)
        || url
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .is_some_and(|last| last == ADD_EXPENSE_ROUTE);

    if !on_route {
        return Err(DeepLinkError::UnexpectedRoute(url.to_string()));
    }

    let raw = url
        .query_pairs()
        .find(|(key, _)| key == "amount")
        .map(|(_, value)| value.into_owned())
        .ok_or(DeepLinkError::MissingAmount)?;

    match Decimal::from_str(raw.trim()) {
        Ok(amount) if amount > Decimal::ZERO => Ok(amount),
        _ => Err(DeepLinkError::InvalidAmount(raw)),
    }
}
