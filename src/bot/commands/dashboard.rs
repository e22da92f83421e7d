//! Dashboard Discord commands - `dashboard`, `settlement` and `settle`.
//!
//! These commands load a snapshot of the author's household for the requested month and
//! run it through the core calculators. Nothing here does budget arithmetic.

use crate::{
    core::{dashboard::Dashboard, money::format_euros},
    errors::Result,
};
use std::fmt::Write;

/// Name shown for a user ID, falling back to the raw ID
fn display_name(dashboard: &Dashboard, user_id: &str) -> String {
    dashboard
        .income
        .iter()
        .find(|m| m.user_id == user_id)
        .map_or_else(|| format!("User {user_id}"), |m| m.first_name.clone())
}

/// Builds the embed fields of the dashboard: income, expenses, savings and settlement.
pub fn dashboard_fields(dashboard: &Dashboard) -> Result<Vec<(String, String, bool)>> {
    let mut income = String::new();
    for member in &dashboard.income {
        write!(
            &mut income,
            "**{}:** {}",
            member.first_name,
            format_euros(member.current_salary)
        )?;
        if member.current_salary != member.default_salary {
            write!(&mut income, " (usually {})", format_euros(member.default_salary))?;
        }
        writeln!(&mut income)?;
    }
    if income.is_empty() {
        income.push_str("No members yet");
    }

    let expenses_data = &dashboard.expenses;
    let mut expenses = String::new();
    for personal in &expenses_data.personal_expenses {
        writeln!(
            &mut expenses,
            "**{}:** {} personal, {} unpaid",
            display_name(dashboard, &personal.user_id),
            format_euros(personal.personal_expenses_total),
            format_euros(personal.remaining_expenses)
        )?;
    }
    writeln!(
        &mut expenses,
        "**Shared:** {}",
        format_euros(expenses_data.shared_expenses_total)
    )?;
    writeln!(
        &mut expenses,
        "**Total:** {}",
        format_euros(expenses_data.total_household_expenses)
    )?;
    write!(
        &mut expenses,
        "**Still to pay:** {}",
        format_euros(expenses_data.remaining_household_expenses)
    )?;

    let mut savings = String::new();
    for member in &dashboard.savings.members {
        writeln!(
            &mut savings,
            "**{}:** saved {} + {} shared, {} left",
            display_name(dashboard, &member.user_id),
            format_euros(member.personal_savings),
            format_euros(member.shared_savings),
            format_euros(member.remaining_budget)
        )?;
    }
    write!(
        &mut savings,
        "**Household:** {} saved, {} left",
        format_euros(dashboard.savings.total_savings),
        format_euros(dashboard.savings.total_remaining_budget)
    )?;

    let mut settlement = dashboard.settlement.message.clone();
    if dashboard.settlement.is_settled {
        settlement.push_str("\n✅ Settled");
    }

    Ok(vec![
        ("💶 Income".to_string(), income, false),
        ("🧾 Expenses".to_string(), expenses, false),
        ("🐷 Savings".to_string(), savings, false),
        ("🤝 Settlement".to_string(), settlement, false),
    ])
}

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use super::dashboard_fields;
    use crate::{
        bot::{BotData, author_membership, requested_period},
        core::{dashboard::build_dashboard, money::format_euros},
        db::{settlements, snapshot::load_snapshot},
        errors::{Error, Result},
    };
    use poise::serenity_prelude as serenity;

    /// Shows the household dashboard for a month.
    ///
    /// Income, expense totals, savings, remaining budgets and the settlement, all computed
    /// for the requested month (default: the current one).
    #[poise::command(slash_command, prefix_command)]
    pub async fn dashboard(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Month (1-12), defaults to the current month"] month: Option<u32>,
        #[description = "Year, defaults to the current year"] year: Option<i32>,
    ) -> Result<()> {
        let period = requested_period(month, year)?;
        let member = author_membership(ctx).await?;
        let db = &ctx.data().database;

        let snapshot = load_snapshot(db, member.household_id, period).await?;
        let dashboard = build_dashboard(&snapshot, &member.user_id, period)?;

        let embed = serenity::CreateEmbed::default()
            .title(format!("🏠 Household dashboard - {period}"))
            .color(0x0034_98DB)
            .fields(dashboard_fields(&dashboard)?)
            .footer(serenity::CreateEmbedFooter::new(format!(
                "HouseholdBuddy | {} member{}",
                dashboard.income.len(),
                if dashboard.income.len() == 1 { "" } else { "s" }
            )));

        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        Ok(())
    }

    /// Shows who owes whom for a month's shared expenses.
    #[poise::command(slash_command, prefix_command)]
    pub async fn settlement(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Month (1-12), defaults to the current month"] month: Option<u32>,
        #[description = "Year, defaults to the current year"] year: Option<i32>,
    ) -> Result<()> {
        let period = requested_period(month, year)?;
        let member = author_membership(ctx).await?;
        let db = &ctx.data().database;

        let snapshot = load_snapshot(db, member.household_id, period).await?;
        let summary = build_dashboard(&snapshot, &member.user_id, period)?.settlement;

        let status = if summary.is_settled {
            "✅ already settled"
        } else {
            "⏳ not settled yet"
        };
        ctx.say(format!("🤝 **{period}:** {} ({status})", summary.message))
            .await?;
        Ok(())
    }

    /// Records the month's settlement as paid.
    #[poise::command(slash_command, prefix_command)]
    pub async fn settle(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Month (1-12), defaults to the current month"] month: Option<u32>,
        #[description = "Year, defaults to the current year"] year: Option<i32>,
    ) -> Result<()> {
        let period = requested_period(month, year)?;
        let member = author_membership(ctx).await?;
        let db = &ctx.data().database;

        match settlements::record_settlement(db, member.household_id, &member.user_id, period)
            .await
        {
            Ok(record) => {
                ctx.say(format!(
                    "✅ Settlement for {period} recorded: <@{}> paid <@{}> {}",
                    record.paid_by_user_id,
                    record.paid_to_user_id,
                    format_euros(record.amount)
                ))
                .await?;
            }
            Err(e @ (Error::AlreadySettled { .. } | Error::NothingToSettle { .. })) => {
                ctx.say(format!("ℹ️ {e}")).await?;
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }
}

pub use inner::*;
