//! Salary and savings Discord commands - `salary` and `saving`.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, author_membership, requested_period},
        core::money::{amount_from_input, format_euros},
        db::{salaries, savings},
        errors::{Error, Result},
    };

    /// Sets your salary for a month.
    ///
    /// The default salary is your usual pay; `current` is what you actually received this
    /// month and defaults to the usual amount.
    #[poise::command(slash_command, prefix_command)]
    pub async fn salary(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Usual monthly salary"] default: f64,
        #[description = "Actual salary this month, if different"] current: Option<f64>,
        #[description = "Month (1-12), defaults to the current month"] month: Option<u32>,
        #[description = "Year, defaults to the current year"] year: Option<i32>,
    ) -> Result<()> {
        let period = requested_period(month, year)?;
        let default = amount_from_input(default)?;
        let current = current.map(amount_from_input).transpose()?;
        let member = author_membership(ctx).await?;

        let record = salaries::set_salary(
            &ctx.data().database,
            &member.user_id,
            period,
            default,
            current,
        )
        .await?;

        ctx.say(format!(
            "💶 Salary for {period} set to {} (usual {})",
            format_euros(record.current_amount),
            format_euros(record.default_amount)
        ))
        .await?;
        Ok(())
    }

    /// Records money you put aside this month.
    #[poise::command(slash_command, prefix_command)]
    pub async fn saving(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Amount saved"] amount: f64,
        #[description = "Contributed to the household pool"] shared: Option<bool>,
        #[description = "What the saving is for"] description: Option<String>,
        #[description = "Month (1-12), defaults to the current month"] month: Option<u32>,
        #[description = "Year, defaults to the current year"] year: Option<i32>,
    ) -> Result<()> {
        let period = requested_period(month, year)?;
        let amount = amount_from_input(amount)?;
        let member = author_membership(ctx).await?;
        let is_shared = shared.unwrap_or(false);

        let record = savings::add_saving(
            &ctx.data().database,
            member.household_id,
            &member.user_id,
            amount,
            is_shared,
            period,
            description,
        )
        .await?;

        ctx.say(format!(
            "🐷 Saved {} for {period}{}",
            format_euros(record.amount),
            if is_shared { " (shared)" } else { "" }
        ))
        .await?;
        Ok(())
    }
}

pub use inner::*;
