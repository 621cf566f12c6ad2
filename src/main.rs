use serenity::all::GatewayIntents;
use serenity::Client;
use std::env;
use std::sync::Arc;

use crate::config::ConfigSettings;
use crate::discord_handler::Handler;
use crate::pokeapi::PokeApi;

pub mod config;
pub mod game_data;
pub mod logging;
pub mod pokeapi;

mod commands;
mod discord_handler;
mod discord_helpers;

#[tokio::main]
async fn main() {
    yay!("🎲 Game Bot is starting up!");

    if let Err(e) = dotenv::dotenv() {
        hey!("No .env file loaded: {}", e);
    }

    let Ok(token) = env::var("DISCORD_TOKEN") else {
        nay!("DISCORD_TOKEN not found in environment");
        return;
    };

    say!("Loading config...");
    let config = ConfigSettings::get();

    let pokeapi = match PokeApi::new() {
        Ok(pokeapi) => pokeapi,
        Err(e) => {
            nay!("Failed to build PokéAPI client: {}", e);
            return;
        }
    };

    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGE_REACTIONS
        | GatewayIntents::DIRECT_MESSAGE_REACTIONS;

    let Ok(mut client) = Client::builder(token, intents)
        .event_handler(Handler {
            config: Arc::new(config),
            pokeapi,
        })
        .await
    else {
        nay!("Error creating client");
        return;
    };

    if let Err(err) = client.start().await {
        nay!("Client error: {}", err);
    }
}
