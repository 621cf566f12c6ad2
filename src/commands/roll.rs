use rand::Rng;
use serenity::all::{
    Colour, CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateEmbed, ResolvedOption,
};

use crate::{commands::integer_option, discord_helpers::embed_response};

const DEFAULT_MIN: i64 = 1;
const DEFAULT_MAX: i64 = 10;

/// Rolls a number in `min..=max` if the bounds are more than two apart.
pub fn roll(min: i64, max: i64) -> Option<i64> {
    if max.checked_sub(min)? > 2 {
        Some(rand::thread_rng().gen_range(min..=max))
    } else {
        None
    }
}

pub async fn run(options: &[ResolvedOption<'_>], ctx: &Context, cmd: &CommandInteraction) {
    let min = integer_option(options, "min").unwrap_or(DEFAULT_MIN);
    let max = integer_option(options, "max").unwrap_or(DEFAULT_MAX);

    let embed = match roll(min, max) {
        Some(number) => CreateEmbed::new()
            .title("Random Roll")
            .description(format!("The random number is: {}", number))
            .color(Colour::BLURPLE),
        None => CreateEmbed::new()
            .title("Random Roll")
            .description("Please specify numbers with difference of **at least 2**")
            .color(Colour::RED),
    };

    embed_response(ctx, cmd, embed).await;
}

pub fn register() -> CreateCommand {
    CreateCommand::new("roll")
        .description("Roll a random number")
        .add_option(
            CreateCommandOption::new(CommandOptionType::Integer, "min", "Lowest possible number (default 1)")
                .required(false),
        )
        .add_option(
            CreateCommandOption::new(CommandOptionType::Integer, "max", "Highest possible number (default 10)")
                .required(false),
        )
        .dm_permission(true)
}
