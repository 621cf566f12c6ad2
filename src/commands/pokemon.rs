use serenity::all::{
    Colour, CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateEmbed, ResolvedOption,
};

use crate::{
    commands::string_option,
    discord_helpers::{command_response, embed_response},
    nay,
    pokeapi::{PokeApi, PokeApiError, Pokemon},
};

const STAT_NAMES: [&str; 6] = ["Hp", "Attack", "Defence", "Special-Attack", "Special-Defence", "Speed"];

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn base_stats(pokemon: &Pokemon) -> String {
    STAT_NAMES
        .iter()
        .zip(&pokemon.stats)
        .map(|(name, slot)| format!("**{}**: `{}`", name, slot.base_stat))
        .collect::<Vec<_>>()
        .join("\n ")
}

fn code_list<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names
        .map(|name| format!("`{}`", name))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn pokemon_embed(pokemon: &Pokemon) -> CreateEmbed {
    let types = code_list(pokemon.types.iter().map(|slot| slot.kind.name.as_str()));
    let abilities = code_list(pokemon.abilities.iter().map(|slot| slot.ability.name.as_str()));

    let embed = CreateEmbed::new()
        .title(format!("{} Info", capitalize(&pokemon.name)))
        .color(Colour::BLURPLE)
        .field("❯❯Base Stats", base_stats(pokemon), true)
        .field("❯❯Type", types, true)
        .field("❯❯Weight", format!("`{}`", pokemon.weight), true)
        .field("❯❯Abilities", abilities, true);

    match &pokemon.sprites.front_default {
        Some(sprite) => embed.thumbnail(sprite),
        None => embed,
    }
}

pub async fn run(
    options: &[ResolvedOption<'_>],
    ctx: &Context,
    cmd: &CommandInteraction,
    api: &PokeApi,
) {
    let Some(name) = string_option(options, "name") else {
        command_response(ctx, cmd, "You must specify a pokemon!").await;
        return;
    };

    match api.pokemon(name).await {
        Ok(pokemon) => embed_response(ctx, cmd, pokemon_embed(&pokemon)).await,
        Err(e @ (PokeApiError::NotFound(_) | PokeApiError::InvalidName(_))) => {
            command_response(ctx, cmd, capitalize(&e.to_string())).await
        }
        Err(e) => {
            nay!("Failed to look up pokemon `{}`: {}", name, e);
            command_response(ctx, cmd, "Could not reach the PokéAPI, try again later.").await;
        }
    }
}

pub fn register() -> CreateCommand {
    CreateCommand::new("pokemon")
        .description("Fetch data about a pokemon, e.g. `/pokemon pikachu`")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "name", "Name or number of the pokemon")
                .required(true),
        )
        .dm_permission(true)
}
