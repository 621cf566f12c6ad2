use std::sync::Arc;

use futures::{stream::BoxStream, StreamExt};
use serenity::{
    all::{
        Cache, ChannelId, Colour, Context, CreateEmbed, CreateEmbedFooter, CreateMessage,
        EditMessage, MessageId, ModelError, Permissions, Reaction, ReactionCollector,
        ReactionType, UserId,
    },
    async_trait,
};

use super::navigation::ControlBinding;

/// Permissions a direct message channel always grants to the bot.
fn direct_message_permissions() -> Permissions {
    Permissions::SEND_MESSAGES
        | Permissions::EMBED_LINKS
        | Permissions::ADD_REACTIONS
        | Permissions::READ_MESSAGE_HISTORY
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MessageHandle {
    pub channel_id: ChannelId,
    pub message_id: MessageId,
}

/// Content of a single page as it is shown to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedPage {
    pub description: String,
    pub footer: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ReactionEvent {
    pub message_id: MessageId,
    pub user_id: Option<UserId>,
    pub glyph: ReactionType,
    /// Whether the reacting user is a bot account.
    pub automated: bool,
}

impl ReactionEvent {
    /// `is_known_bot` is consulted when the reaction carries no member, e.g.
    /// in direct messages.
    pub fn from_reaction(reaction: &Reaction, is_known_bot: impl Fn(UserId) -> bool) -> Self {
        let member_is_bot = reaction.member.as_ref().map(|member| member.user.bot);

        Self {
            message_id: reaction.message_id,
            user_id: reaction.user_id,
            glyph: reaction.emoji.clone(),
            automated: is_automated(member_is_bot, reaction.user_id, is_known_bot),
        }
    }
}

fn is_automated(
    member_is_bot: Option<bool>,
    user_id: Option<UserId>,
    is_known_bot: impl Fn(UserId) -> bool,
) -> bool {
    match member_is_bot {
        Some(bot) => bot,
        None => user_id.is_some_and(is_known_bot),
    }
}

fn cached_bot(cache: &Cache, user_id: UserId) -> bool {
    cache.user(user_id).is_some_and(|user| user.bot)
}

/// Decides which reaction events a pagination session reacts to.
#[derive(Clone, Debug)]
pub struct ReactionFilter {
    pub message_id: MessageId,
    pub controls: ControlBinding,
    pub bot_id: UserId,
    pub invoker_id: UserId,
}

impl ReactionFilter {
    pub fn matches(&self, event: &ReactionEvent) -> bool {
        let Some(user_id) = event.user_id else {
            return false;
        };

        event.message_id == self.message_id
            && self.controls.action_for(&event.glyph).is_some()
            && user_id != self.bot_id
            && !event.automated
            && user_id == self.invoker_id
    }
}

/// Everything a paginator needs from the chat platform.
#[async_trait]
pub trait Messenger: Send + Sync {
    fn current_user_id(&self) -> UserId;

    async fn permissions(
        &self,
        user: UserId,
        channel: ChannelId,
    ) -> Result<Permissions, serenity::Error>;

    async fn send_page(
        &self,
        channel: ChannelId,
        page: &RenderedPage,
    ) -> Result<MessageHandle, serenity::Error>;

    async fn edit_page(
        &self,
        message: MessageHandle,
        page: &RenderedPage,
    ) -> Result<(), serenity::Error>;

    async fn delete_message(&self, message: MessageHandle) -> Result<(), serenity::Error>;

    async fn add_reaction(
        &self,
        message: MessageHandle,
        glyph: &ReactionType,
    ) -> Result<(), serenity::Error>;

    async fn remove_reaction(
        &self,
        message: MessageHandle,
        glyph: &ReactionType,
        user: UserId,
    ) -> Result<(), serenity::Error>;

    /// Removes all reactions. `controls` are the glyphs the session added, for
    /// platforms that can only retract their own reactions.
    async fn clear_reactions(
        &self,
        message: MessageHandle,
        controls: &ControlBinding,
    ) -> Result<(), serenity::Error>;

    /// Subscribes to every event passing `filter` until the stream is dropped.
    fn reaction_stream(&self, filter: ReactionFilter) -> BoxStream<'static, ReactionEvent>;
}

/// [`Messenger`] on top of a serenity gateway context.
#[derive(Clone)]
pub struct SerenityMessenger {
    ctx: Context,
    direct_message: bool,
}

impl SerenityMessenger {
    /// `direct_message` marks a private channel in which other users'
    /// reactions cannot be removed.
    pub fn new(ctx: &Context, direct_message: bool) -> Self {
        Self {
            ctx: ctx.clone(),
            direct_message,
        }
    }

    fn embed(page: &RenderedPage) -> CreateEmbed {
        let embed = CreateEmbed::new()
            .description(page.description.as_str())
            .color(Colour::BLURPLE);

        match &page.footer {
            Some(footer) => embed.footer(CreateEmbedFooter::new(footer.as_str())),
            None => embed,
        }
    }
}

#[async_trait]
impl Messenger for SerenityMessenger {
    fn current_user_id(&self) -> UserId {
        self.ctx.cache.current_user().id
    }

    async fn permissions(
        &self,
        user: UserId,
        channel: ChannelId,
    ) -> Result<Permissions, serenity::Error> {
        if self.direct_message {
            return Ok(direct_message_permissions());
        }

        let Some(channel) = channel.to_channel(&self.ctx).await?.guild() else {
            return Ok(direct_message_permissions());
        };

        let member = channel.guild_id.member(&self.ctx, user).await?;

        self.ctx
            .cache
            .guild(channel.guild_id)
            .map(|guild| guild.user_permissions_in(&channel, &member))
            .ok_or(serenity::Error::Model(ModelError::GuildNotFound))
    }

    async fn send_page(
        &self,
        channel: ChannelId,
        page: &RenderedPage,
    ) -> Result<MessageHandle, serenity::Error> {
        let builder = CreateMessage::new().embed(Self::embed(page));
        let msg = channel.send_message(&self.ctx.http, builder).await?;

        Ok(MessageHandle {
            channel_id: msg.channel_id,
            message_id: msg.id,
        })
    }

    async fn edit_page(
        &self,
        message: MessageHandle,
        page: &RenderedPage,
    ) -> Result<(), serenity::Error> {
        let builder = EditMessage::new().embed(Self::embed(page));
        message
            .channel_id
            .edit_message(&self.ctx, message.message_id, builder)
            .await?;

        Ok(())
    }

    async fn delete_message(&self, message: MessageHandle) -> Result<(), serenity::Error> {
        message
            .channel_id
            .delete_message(&self.ctx.http, message.message_id)
            .await
    }

    async fn add_reaction(
        &self,
        message: MessageHandle,
        glyph: &ReactionType,
    ) -> Result<(), serenity::Error> {
        message
            .channel_id
            .create_reaction(&self.ctx.http, message.message_id, glyph.clone())
            .await
    }

    async fn remove_reaction(
        &self,
        message: MessageHandle,
        glyph: &ReactionType,
        user: UserId,
    ) -> Result<(), serenity::Error> {
        if self.direct_message {
            return Ok(());
        }

        message
            .channel_id
            .delete_reaction(&self.ctx.http, message.message_id, Some(user), glyph.clone())
            .await
    }

    async fn clear_reactions(
        &self,
        message: MessageHandle,
        controls: &ControlBinding,
    ) -> Result<(), serenity::Error> {
        if !self.direct_message {
            return message
                .channel_id
                .delete_reactions(&self.ctx.http, message.message_id)
                .await;
        }

        for glyph in controls.glyphs() {
            message
                .channel_id
                .delete_reaction(&self.ctx.http, message.message_id, None, glyph.clone())
                .await?;
        }

        Ok(())
    }

    fn reaction_stream(&self, filter: ReactionFilter) -> BoxStream<'static, ReactionEvent> {
        let cache: Arc<Cache> = Arc::clone(&self.ctx.cache);
        let filter_cache = Arc::clone(&cache);

        ReactionCollector::new(&self.ctx.shard)
            .message_id(filter.message_id)
            .filter(move |reaction| {
                let event = ReactionEvent::from_reaction(reaction, |id| cached_bot(&filter_cache, id));
                filter.matches(&event)
            })
            .stream()
            .map(move |reaction| ReactionEvent::from_reaction(&reaction, |id| cached_bot(&cache, id)))
            .boxed()
    }
}
