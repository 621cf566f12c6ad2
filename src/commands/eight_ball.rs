use serenity::all::{
    Colour, CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateEmbed, ResolvedOption,
};

use crate::{
    commands::string_option,
    discord_helpers::{command_response, embed_response},
    game_data::eight_ball_reply,
};

pub async fn run(options: &[ResolvedOption<'_>], ctx: &Context, cmd: &CommandInteraction) {
    let Some(question) = string_option(options, "question") else {
        command_response(ctx, cmd, "You must ask the 8-ball a question!").await;
        return;
    };

    let embed = CreateEmbed::new()
        .title("Magic 8-ball")
        .field("Question", question, true)
        .field("Answer", eight_ball_reply(), true)
        .color(Colour::BLURPLE);

    embed_response(ctx, cmd, embed).await;
}

pub fn register() -> CreateCommand {
    CreateCommand::new("8ball")
        .description("Ask the all-knowing 8ball your burning questions")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "question", "Your question")
                .required(true),
        )
        .dm_permission(true)
}
