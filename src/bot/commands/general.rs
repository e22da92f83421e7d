//! General Discord commands - ping and help.
//! This module contains simple commands that don't require database operations
//! and provide basic bot functionality and user assistance.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        errors::{Error, Result},
    };

    /// Responds with "Pong!" to test bot connectivity.
    #[poise::command(slash_command, prefix_command)]
    pub async fn ping(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        ctx.say("Pong!").await?;
        Ok(())
    }

    /// Displays help information about available commands.
    #[poise::command(slash_command, prefix_command)]
    pub async fn help(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let help_text = "**HouseholdBuddy Help**\n\
        Month and year default to the current month everywhere.\n\n\
        **Dashboard**\n\
        • `/dashboard [month] [year]` - Income, expenses, savings and settlement for a month.\n\
        • `/settlement [month] [year]` - Shows who owes whom for shared expenses.\n\
        • `/settle [month] [year]` - Records the month's settlement as paid.\n\n\
        **Money in**\n\
        • `/salary <default> [current] [month] [year]` - Sets your salary for a month.\n\
        • `/saving <amount> [shared] [description] [month] [year]` - Records a saving.\n\n\
        **Expenses**\n\
        • `/expense add <name> <amount> <type> <plan> ...` - Adds an expense.\n\
        • `/expense list [month] [year]` - Lists expenses and what they cost this month.\n\
        • `/expense delete <name>` - Removes an expense.\n\
        • `/paid <name> [unpaid] [month] [year]` - Marks an expense paid (or unpaid) for a month.\n\n\
        **Utility**\n\
        • `/ping` - Checks if the bot is responsive.\n\
        • `/help` - Shows this help message.";

        ctx.say(help_text).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
