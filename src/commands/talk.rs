use rand::seq::SliceRandom;
use serenity::all::{
    Colour, CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateEmbed, Mentionable, ResolvedOption, User, UserId,
};

use crate::{
    commands::user_option,
    discord_helpers::{command_response, embed_response},
    game_data::PromptCategory,
};

pub async fn run_would_you_rather(ctx: &Context, cmd: &CommandInteraction) {
    let embed = CreateEmbed::new()
        .title("Would you rather?")
        .description(format!("Would you rather ..{}", PromptCategory::WouldYouRather.random()))
        .color(Colour::DARK_MAGENTA);

    embed_response(ctx, cmd, embed).await;
}

pub async fn run_have_i_ever(ctx: &Context, cmd: &CommandInteraction) {
    let embed = CreateEmbed::new()
        .title("Have I ever?")
        .description(format!("Have you ever ..{}", PromptCategory::HaveYouEver.random()))
        .color(Colour::DARK_MAGENTA);

    embed_response(ctx, cmd, embed).await;
}

/// Handles both `/truth` and `/dare`.
pub async fn run_challenge(
    category: PromptCategory,
    options: &[ResolvedOption<'_>],
    ctx: &Context,
    cmd: &CommandInteraction,
) {
    let Some(target) = user_option(options, "user") else {
        command_response(ctx, cmd, "You must specify a user!").await;
        return;
    };

    let named = random_member(ctx, cmd).unwrap_or(target.id);
    let verb = if category == PromptCategory::Dares { "dared" } else { "asked" };

    let embed = CreateEmbed::new()
        .title(format!("{} {} {}", cmd.user.name, verb, target.name))
        .description(fill_prompt(category.random(), named))
        .color(Colour::DARK_MAGENTA);

    embed_response(ctx, cmd, embed).await;
}

fn fill_prompt(prompt: &str, named: UserId) -> String {
    prompt.replace("{name}", &named.mention().to_string())
}

/// A random non-bot member of the command's guild, as far as the cache knows.
fn random_member(ctx: &Context, cmd: &CommandInteraction) -> Option<UserId> {
    let guild = ctx.cache.guild(cmd.guild_id?)?;

    let humans: Vec<UserId> = guild
        .members
        .values()
        .map(|member| &member.user)
        .filter(|user: &&User| !user.bot)
        .map(|user| user.id)
        .collect();

    humans.choose(&mut rand::thread_rng()).copied()
}

pub fn register_would_you_rather() -> CreateCommand {
    CreateCommand::new("wyr")
        .description("Would you rather?")
        .dm_permission(true)
}

pub fn register_have_i_ever() -> CreateCommand {
    CreateCommand::new("haveiever")
        .description("Have I ever?")
        .dm_permission(true)
}

pub fn register_truth() -> CreateCommand {
    CreateCommand::new("truth")
        .description("Ask a truth question to a random user")
        .add_option(
            CreateCommandOption::new(CommandOptionType::User, "user", "Who gets asked")
                .required(true),
        )
        .dm_permission(false)
}

pub fn register_dare() -> CreateCommand {
    CreateCommand::new("dare")
        .description("Dare someone")
        .add_option(
            CreateCommandOption::new(CommandOptionType::User, "user", "Who gets dared")
                .required(true),
        )
        .dm_permission(false)
}
