use serenity::all::{ResolvedOption, ResolvedValue, User};

pub(crate) mod eight_ball;
pub(crate) mod pokemon;
pub(crate) mod prompts;
pub(crate) mod roll;
pub(crate) mod talk;

fn find_option<'a>(options: &'a [ResolvedOption<'a>], name: &str) -> Option<&'a ResolvedValue<'a>> {
    options
        .iter()
        .find(|option| option.name == name)
        .map(|option| &option.value)
}

pub(crate) fn integer_option(options: &[ResolvedOption<'_>], name: &str) -> Option<i64> {
    match find_option(options, name) {
        Some(ResolvedValue::Integer(value)) => Some(*value),
        _ => None,
    }
}

pub(crate) fn string_option<'a>(options: &'a [ResolvedOption<'a>], name: &str) -> Option<&'a str> {
    match find_option(options, name) {
        Some(ResolvedValue::String(value)) => Some(*value),
        _ => None,
    }
}

pub(crate) fn user_option<'a>(options: &'a [ResolvedOption<'a>], name: &str) -> Option<&'a User> {
    match find_option(options, name) {
        Some(ResolvedValue::User(user, _)) => Some(*user),
        _ => None,
    }
}
