//! Fixed response texts.

/// Returned by the root endpoint.
pub const RUNNING_MESSAGE: &str =
    "Bakery API is running. Use /check endpoint to check item availability.";

/// Acknowledge a free-text query.
///
/// The opening days are part of the template; neither the hours table nor the
/// menu is consulted.
pub fn query_received(query: &str) -> String {
    format!(
        "We received your query: '{query}'. Our bakery is open Monday-Saturday and closed on Sunday."
    )
}
