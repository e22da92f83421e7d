//! Autocomplete handlers for Discord slash command parameters.

use crate::{
    bot::BotData,
    db::{expenses, members},
    entities::expense,
    errors::Error,
};

/// Discord autocomplete limit
const MAX_SUGGESTIONS: usize = 25;

/// Names of `expenses` containing `partial` (case-insensitive), sorted and deduplicated.
#[must_use]
pub fn matching_expense_names(expenses: Vec<expense::Model>, partial: &str) -> Vec<String> {
    let partial_lower = partial.to_lowercase();

    let mut matching: Vec<String> = expenses
        .into_iter()
        .filter(|e| e.name.to_lowercase().contains(&partial_lower))
        .map(|e| e.name)
        .collect();

    matching.sort();
    matching.dedup();
    matching.truncate(MAX_SUGGESTIONS);
    matching
}

/// Provides autocomplete suggestions for the active expenses of the author's household.
///
/// Users who are not in a household get no suggestions.
pub async fn autocomplete_expense_name(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    let db = &ctx.data().database;
    let user_id = ctx.author().id.to_string();

    let Ok(Some(member)) = members::get_member_by_user_id(db, &user_id).await else {
        return Vec::new();
    };
    let Ok(active) = expenses::get_active_expenses(db, member.household_id).await else {
        return Vec::new();
    };

    matching_expense_names(active, partial)
}
