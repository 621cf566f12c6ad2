use std::collections::VecDeque;

use futures::{
    future,
    stream::{self, BoxStream},
    StreamExt,
};
use parking_lot::Mutex;
use serenity::{
    all::{ChannelId, MessageId, Permissions, ReactionType, UserId},
    async_trait,
};

use super::{
    messenger::{MessageHandle, Messenger, ReactionEvent, ReactionFilter, RenderedPage},
    navigation::ControlBinding,
};

pub const BOT_ID: u64 = 1;
pub const INVOKER_ID: u64 = 2;
pub const MESSAGE_ID: u64 = 100;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Send(RenderedPage),
    Edit(RenderedPage),
    Delete,
    AddReaction(String),
    RemoveReaction(String, UserId),
    Clear,
}

/// Records every call and replays scripted reactions through the session's
/// filter. Once the script is exhausted the stream stays silent, so the
/// session only ends through its own timeout.
pub struct MockMessenger {
    permissions: Permissions,
    fail_edits: bool,
    events: Mutex<VecDeque<ReactionEvent>>,
    calls: Mutex<Vec<Call>>,
    subscriptions: Mutex<usize>,
}

impl MockMessenger {
    pub fn new() -> Self {
        Self {
            permissions: Permissions::all(),
            fail_edits: false,
            events: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
            subscriptions: Mutex::new(0),
        }
    }

    pub fn with_permissions(mut self, permissions: Permissions) -> Self {
        self.permissions = permissions;
        self
    }

    pub fn with_events(self, events: impl IntoIterator<Item = ReactionEvent>) -> Self {
        self.events.lock().extend(events);
        self
    }

    pub fn failing_edits(mut self) -> Self {
        self.fail_edits = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn edits(&self) -> Vec<RenderedPage> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                Call::Edit(page) => Some(page.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn subscriptions(&self) -> usize {
        *self.subscriptions.lock()
    }

    pub fn handle() -> MessageHandle {
        MessageHandle {
            channel_id: ChannelId::new(50),
            message_id: MessageId::new(MESSAGE_ID),
        }
    }

    fn record(&self, call: Call) {
        self.calls.lock().push(call);
    }
}

/// A reaction on the paginated message.
pub fn reaction(user_id: u64, glyph: &str) -> ReactionEvent {
    ReactionEvent {
        message_id: MessageId::new(MESSAGE_ID),
        user_id: Some(UserId::new(user_id)),
        glyph: ReactionType::Unicode(glyph.to_owned()),
        automated: false,
    }
}

#[async_trait]
impl Messenger for MockMessenger {
    fn current_user_id(&self) -> UserId {
        UserId::new(BOT_ID)
    }

    async fn permissions(
        &self,
        _user: UserId,
        _channel: ChannelId,
    ) -> Result<Permissions, serenity::Error> {
        Ok(self.permissions)
    }

    async fn send_page(
        &self,
        _channel: ChannelId,
        page: &RenderedPage,
    ) -> Result<MessageHandle, serenity::Error> {
        self.record(Call::Send(page.clone()));
        Ok(Self::handle())
    }

    async fn edit_page(
        &self,
        _message: MessageHandle,
        page: &RenderedPage,
    ) -> Result<(), serenity::Error> {
        if self.fail_edits {
            return Err(serenity::Error::Other("edit rejected"));
        }

        self.record(Call::Edit(page.clone()));
        Ok(())
    }

    async fn delete_message(&self, _message: MessageHandle) -> Result<(), serenity::Error> {
        self.record(Call::Delete);
        Ok(())
    }

    async fn add_reaction(
        &self,
        _message: MessageHandle,
        glyph: &ReactionType,
    ) -> Result<(), serenity::Error> {
        self.record(Call::AddReaction(glyph.to_string()));
        Ok(())
    }

    async fn remove_reaction(
        &self,
        _message: MessageHandle,
        glyph: &ReactionType,
        user: UserId,
    ) -> Result<(), serenity::Error> {
        self.record(Call::RemoveReaction(glyph.to_string(), user));
        Ok(())
    }

    async fn clear_reactions(
        &self,
        _message: MessageHandle,
        _controls: &ControlBinding,
    ) -> Result<(), serenity::Error> {
        self.record(Call::Clear);
        Ok(())
    }

    fn reaction_stream(&self, filter: ReactionFilter) -> BoxStream<'static, ReactionEvent> {
        *self.subscriptions.lock() += 1;

        let events: Vec<_> = self.events.lock().drain(..).collect();

        stream::iter(events)
            .filter(move |event| future::ready(filter.matches(event)))
            .chain(stream::pending())
            .boxed()
    }
}
