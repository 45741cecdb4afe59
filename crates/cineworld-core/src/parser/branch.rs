//! Branch details parser
//!
//! Reads the branch identity and the day selector shown at the top of a
//! branch page.

use crate::dates::dates_from_days;
use crate::types::Branch;

use super::query;
use super::selectors;
use super::ExtractionContext;

/// Parse the branch shown on the page.
///
/// Only the day buttons displayed by default are read. They start with
/// "Today"; further dates live behind a calendar that mostly lists advance
/// screenings.
pub fn parse_branch(ctx: &ExtractionContext<'_>) -> Branch {
    let root = ctx.root();

    let name = ctx.window_name().trim().to_string();
    let description = query::text(root, selectors::BRANCH_DESCRIPTION);
    let days = query::find(root, selectors::DAYS_WRAPPER)
        .map(|wrapper| query::texts(wrapper, selectors::DAY_BUTTON))
        .unwrap_or_default();
    let dates = dates_from_days(&days, ctx.clock().today());

    Branch {
        name,
        description,
        dates,
    }
}
