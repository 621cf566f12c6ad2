use std::sync::Arc;

use serenity::{
    all::{ActivityData, Context, EventHandler, Interaction, OnlineStatus, Ready, ResumedEvent},
    async_trait,
};

use crate::{
    commands,
    config::ConfigSettings,
    discord_helpers::{command_response, register_command},
    game_data::PromptCategory,
    hey,
    pokeapi::PokeApi,
    yay,
};

pub(crate) struct Handler {
    pub config: Arc<ConfigSettings>,
    pub pokeapi: PokeApi,
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        // register commands
        register_command(&ctx, commands::roll::register()).await;
        register_command(&ctx, commands::eight_ball::register()).await;
        register_command(&ctx, commands::talk::register_would_you_rather()).await;
        register_command(&ctx, commands::talk::register_have_i_ever()).await;
        register_command(&ctx, commands::talk::register_truth()).await;
        register_command(&ctx, commands::talk::register_dare()).await;
        register_command(&ctx, commands::prompts::register()).await;
        register_command(&ctx, commands::pokemon::register()).await;

        yay!("{} is connected!", ready.user.name);

        ctx.set_presence(
            Some(ActivityData::playing("truth or dare")),
            OnlineStatus::Online,
        );
    }

    async fn resume(&self, _: Context, _: ResumedEvent) {
        hey!("Resumed");
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Command(command) = interaction else {
            return;
        };

        let command_options = &command.data.options();

        match command.data.name.as_str() {
            "roll" => commands::roll::run(command_options, &ctx, &command).await,
            "8ball" => commands::eight_ball::run(command_options, &ctx, &command).await,
            "wyr" => commands::talk::run_would_you_rather(&ctx, &command).await,
            "haveiever" => commands::talk::run_have_i_ever(&ctx, &command).await,
            "truth" => {
                commands::talk::run_challenge(PromptCategory::Truths, command_options, &ctx, &command)
                    .await
            }
            "dare" => {
                commands::talk::run_challenge(PromptCategory::Dares, command_options, &ctx, &command)
                    .await
            }
            "prompts" => {
                let options = self.config.paginator_options();
                commands::prompts::run(command_options, &ctx, &command, options).await
            }
            "pokemon" => {
                commands::pokemon::run(command_options, &ctx, &command, &self.pokeapi).await
            }
            _ => command_response(&ctx, &command, "Unknown command!").await,
        }
    }
}
