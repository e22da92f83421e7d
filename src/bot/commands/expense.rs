//! Expense Discord commands - `expense add/list/delete` and `paid`.

use crate::{
    core::period::Period,
    db::expenses::ExpensePlan,
    entities::expense::{ExpenseType, InstallmentFrequency},
};

/// Personal or shared, as offered in the command picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, poise::ChoiceParameter)]
pub enum ExpenseKind {
    /// Paid from one member's own budget
    Personal,
    /// Household cost split between the members
    Shared,
}

impl From<ExpenseKind> for ExpenseType {
    fn from(kind: ExpenseKind) -> Self {
        match kind {
            ExpenseKind::Personal => Self::Personal,
            ExpenseKind::Shared => Self::Shared,
        }
    }
}

/// Payment plan, as offered in the command picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, poise::ChoiceParameter)]
pub enum PlanChoice {
    /// Every month
    Monthly,
    /// Once a year, in full
    #[name = "Yearly (in full)"]
    YearlyFull,
    /// Once a year, in installments
    #[name = "Yearly (installments)"]
    YearlyInstallments,
    /// Once
    #[name = "One time"]
    OneTime,
    /// Once, in installments
    #[name = "One time (installments)"]
    OneTimeInstallments,
}

/// Installment spacing, as offered in the command picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, poise::ChoiceParameter)]
pub enum InstallmentChoice {
    /// Every month
    Monthly,
    /// Every three months
    Quarterly,
    /// Every six months
    #[name = "Semi-annual"]
    SemiAnnual,
}

impl From<InstallmentChoice> for InstallmentFrequency {
    fn from(choice: InstallmentChoice) -> Self {
        match choice {
            InstallmentChoice::Monthly => Self::Monthly,
            InstallmentChoice::Quarterly => Self::Quarterly,
            InstallmentChoice::SemiAnnual => Self::SemiAnnual,
        }
    }
}

/// Combines the optional command arguments into a plan, or explains what is missing.
///
/// `due` is the month of a one-time expense (or its first installment).
pub fn build_plan(
    plan: PlanChoice,
    payment_month: Option<u32>,
    installments: Option<InstallmentChoice>,
    count: Option<u32>,
    due: Period,
) -> Result<ExpensePlan, String> {
    match plan {
        PlanChoice::Monthly => Ok(ExpensePlan::Monthly),
        PlanChoice::YearlyFull => payment_month
            .map(|payment_month| ExpensePlan::YearlyFull { payment_month })
            .ok_or_else(|| "A yearly expense paid in full needs `payment_month`".to_string()),
        PlanChoice::YearlyInstallments => Ok(ExpensePlan::YearlyInstallments {
            frequency: installments.map_or(InstallmentFrequency::Monthly, Into::into),
        }),
        PlanChoice::OneTime => Ok(ExpensePlan::OneTime { period: due }),
        PlanChoice::OneTimeInstallments => match count {
            Some(count) if count > 0 => Ok(ExpensePlan::OneTimeInstallments {
                start: due,
                frequency: installments.map_or(InstallmentFrequency::Monthly, Into::into),
                count,
            }),
            _ => Err("A one-time expense in installments needs a `count` above zero".to_string()),
        },
    }
}

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use super::{ExpenseKind, InstallmentChoice, PlanChoice, build_plan};
    use crate::{
        bot::{BotData, author_membership, handlers::autocomplete, requested_period},
        core::{
            money::{amount_from_input, format_euros},
            schedule::resolve_monthly_amount,
        },
        db::{
            expenses::{self, NewExpense},
            payments,
        },
        errors::{Error, Result},
    };
    use poise::serenity_prelude as serenity;
    use std::fmt::Write;

    /// Manage household expenses. Use the `add`, `list` and `delete` subcommands.
    #[poise::command(slash_command, prefix_command, subcommands("add", "list", "delete"))]
    pub async fn expense(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let help_text = "Expense subcommands:\n\
            `/expense add name:<name> amount:<amount> type:<Personal|Shared> plan:<plan> ...`\n\
            > Adds an expense. Yearly in full needs `payment_month`; installments take \
            `installments` and, for one-time expenses, `count`.\n\
            `/expense list [month] [year]`\n\
            > Lists the household's expenses and what each costs in the month.\n\
            `/expense delete name:<name>`\n\
            > Removes an expense from every month.";
        ctx.send(
            poise::CreateReply::default()
                .content(help_text)
                .ephemeral(true),
        )
        .await?;
        Ok(())
    }

    /// Adds an expense to your household.
    #[allow(clippy::too_many_arguments)]
    #[poise::command(slash_command, prefix_command)]
    pub async fn add(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Name of the expense"] name: String,
        #[description = "Full amount"] amount: f64,
        #[description = "Personal or shared"]
        #[rename = "type"]
        kind: ExpenseKind,
        #[description = "How the expense is paid over time"] plan: PlanChoice,
        #[description = "Shared only: member who paid the whole bill"] paid_by: Option<
            serenity::User,
        >,
        #[description = "Yearly in full: month it is paid (1-12)"] payment_month: Option<u32>,
        #[description = "Installment spacing, monthly by default"] installments: Option<
            InstallmentChoice,
        >,
        #[description = "One-time installments: number of installments"] count: Option<u32>,
        #[description = "One-time: month (1-12), defaults to the current month"] month: Option<
            u32,
        >,
        #[description = "One-time: year, defaults to the current year"] year: Option<i32>,
    ) -> Result<()> {
        let amount = amount_from_input(amount)?;
        let member = author_membership(ctx).await?;

        let plan = match build_plan(
            plan,
            payment_month,
            installments,
            count,
            requested_period(month, year)?,
        ) {
            Ok(plan) => plan,
            Err(message) => {
                ctx.say(format!("❌ {message}")).await?;
                return Ok(());
            }
        };

        let saved = expenses::create_expense(
            &ctx.data().database,
            NewExpense {
                household_id: member.household_id,
                user_id: member.user_id.clone(),
                name,
                amount,
                expense_type: kind.into(),
                paid_by_user_id: paid_by.map(|user| user.id.to_string()),
                plan,
                created_at: chrono::Utc::now(),
            },
        )
        .await?;

        ctx.say(format!(
            "✅ Added {} expense '{}' ({})",
            saved.expense_type.to_lowercase(),
            saved.name,
            format_euros(saved.amount)
        ))
        .await?;
        Ok(())
    }

    /// Lists the household's expenses and what each costs in a month.
    #[poise::command(slash_command, prefix_command)]
    pub async fn list(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Month (1-12), defaults to the current month"] month: Option<u32>,
        #[description = "Year, defaults to the current year"] year: Option<i32>,
    ) -> Result<()> {
        let period = requested_period(month, year)?;
        let member = author_membership(ctx).await?;
        let db = &ctx.data().database;

        let all = expenses::get_active_expenses(db, member.household_id).await?;
        if all.is_empty() {
            ctx.say("🧾 No expenses yet. Add one with `/expense add`.")
                .await?;
            return Ok(());
        }

        let ids: Vec<i64> = all.iter().map(|e| e.id).collect();
        let statuses = payments::get_payment_statuses_for_period(db, &ids, period).await?;
        let paid = crate::core::expenses::paid_expense_ids(&statuses, period);

        let mut text = format!("🧾 **Expenses for {period}**\n");
        for expense in &all {
            let due = resolve_monthly_amount(expense, period);
            let marker = if paid.contains(&expense.id) { "✅" } else { "▫️" };
            writeln!(
                &mut text,
                "{marker} **{}** ({}) - {} this month, {} total",
                expense.name,
                expense.expense_type.to_lowercase(),
                format_euros(due),
                format_euros(expense.amount)
            )?;
        }

        ctx.say(text).await?;
        Ok(())
    }

    /// Removes an expense from every month.
    #[poise::command(slash_command, prefix_command)]
    pub async fn delete(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Name of the expense"]
        #[autocomplete = "autocomplete::autocomplete_expense_name"]
        name: String,
    ) -> Result<()> {
        let member = author_membership(ctx).await?;
        let db = &ctx.data().database;

        let Some(existing) = expenses::get_expense_by_name(db, member.household_id, &name).await?
        else {
            return Err(Error::ExpenseNotFound { name });
        };

        expenses::soft_delete_expense(db, existing.id).await?;
        ctx.say(format!("🗑️ Deleted expense '{}'", existing.name))
            .await?;
        Ok(())
    }

    /// Marks an expense as paid (or unpaid) for a month.
    #[poise::command(slash_command, prefix_command)]
    pub async fn paid(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Name of the expense"]
        #[autocomplete = "autocomplete::autocomplete_expense_name"]
        name: String,
        #[description = "Mark as unpaid instead"] unpaid: Option<bool>,
        #[description = "Month (1-12), defaults to the current month"] month: Option<u32>,
        #[description = "Year, defaults to the current year"] year: Option<i32>,
    ) -> Result<()> {
        let period = requested_period(month, year)?;
        let member = author_membership(ctx).await?;
        let db = &ctx.data().database;

        let Some(existing) = expenses::get_expense_by_name(db, member.household_id, &name).await?
        else {
            return Err(Error::ExpenseNotFound { name });
        };

        if unpaid.unwrap_or(false) {
            payments::mark_unpaid(db, existing.id, period).await?;
            ctx.say(format!("▫️ '{}' marked unpaid for {period}", existing.name))
                .await?;
        } else {
            payments::mark_paid(db, existing.id, period).await?;
            ctx.say(format!("✅ '{}' marked paid for {period}", existing.name))
                .await?;
        }
        Ok(())
    }
}

pub use inner::*;
