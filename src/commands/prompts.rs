use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    ResolvedOption,
};

use crate::{
    commands::string_option,
    discord_helpers::{
        command_response,
        multipage_embed::{Invoker, Outcome, Paginator, PaginatorOptions, SerenityMessenger},
    },
    game_data::PromptCategory,
    nay, say,
};

fn numbered(prompts: &[&str]) -> Vec<String> {
    prompts
        .iter()
        .enumerate()
        .map(|(i, prompt)| format!("**{}.** {}", i + 1, prompt))
        .collect()
}

pub async fn run(
    options: &[ResolvedOption<'_>],
    ctx: &Context,
    cmd: &CommandInteraction,
    paginator_options: PaginatorOptions,
) {
    let Some(category) = string_option(options, "category").and_then(PromptCategory::from_key)
    else {
        command_response(ctx, cmd, "You must pick a category: `wyr`, `nhie`, `truths` or `dares`").await;
        return;
    };

    let entries = numbered(category.prompts());
    let messenger = SerenityMessenger::new(ctx, cmd.guild_id.is_none());
    let invoker = Invoker {
        id: cmd.user.id,
        name: cmd.user.name.clone(),
        command: cmd.data.name.clone(),
    };

    let paginator =
        match Paginator::new(&messenger, cmd.channel_id, invoker, &entries, paginator_options).await {
            Ok(paginator) => paginator,
            Err(e) => {
                command_response(ctx, cmd, e.to_string()).await;
                return;
            }
        };

    command_response(
        ctx,
        cmd,
        format!("📜 {} ({} prompts)", category.title(), entries.len()),
    )
    .await;

    match paginator.send().await {
        Ok(Outcome::ExitedByUser) => say!("{} closed their prompt list", cmd.user.name),
        Ok(Outcome::ExitedByTimeout) => {}
        Err(e) => nay!("Failed to paginate /{}: {}", cmd.data.name, e),
    }
}

pub fn register() -> CreateCommand {
    let mut category = CreateCommandOption::new(
        CommandOptionType::String,
        "category",
        "Which prompts to browse",
    )
    .required(true);

    for choice in PromptCategory::ALL {
        category = category.add_string_choice(choice.title(), choice.key());
    }

    CreateCommand::new("prompts")
        .description("Browse every prompt of a talking game")
        .add_option(category)
        .dm_permission(true)
}
