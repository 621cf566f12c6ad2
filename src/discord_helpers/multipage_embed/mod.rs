//! Reaction driven pagination of long text inside a single embed.
//!
//! A [`Paginator`] splits its entries into pages, checks that the bot may
//! paginate in the target channel, and then lets the invoking user browse the
//! pages through reactions until they delete the message or stop reacting.

use std::time::Duration;

use futures::StreamExt;
use serenity::all::{ChannelId, Permissions, UserId};
use tokio::time::timeout;

pub use self::{
    error::PaginatorError,
    messenger::{
        MessageHandle, Messenger, ReactionEvent, ReactionFilter, RenderedPage, SerenityMessenger,
    },
    navigation::{Action, ControlBinding, NavigationState, Step},
    page_source::paginate,
};
use crate::{hey, say};

mod error;
mod messenger;
mod navigation;
mod page_source;

#[cfg(test)]
mod mock;

const REQUIRED_PERMISSIONS: [Permissions; 4] = [
    Permissions::SEND_MESSAGES,
    Permissions::EMBED_LINKS,
    Permissions::ADD_REACTIONS,
    Permissions::READ_MESSAGE_HISTORY,
];

/// The user whose command started the pagination.
#[derive(Clone, Debug)]
pub struct Invoker {
    pub id: UserId,
    pub name: String,
    pub command: String,
}

#[derive(Clone, Debug)]
pub struct PaginatorOptions {
    /// Soft cap for the amount of characters per page.
    pub max_size: usize,
    /// Whether to show `Page x/y` in the footer.
    pub show_page_length: bool,
    /// How long to wait for the next reaction before giving up.
    pub timeout: Duration,
    pub controls: ControlBinding,
}

impl Default for PaginatorOptions {
    fn default() -> Self {
        Self {
            max_size: 500,
            show_page_length: true,
            timeout: Duration::from_secs(300),
            controls: ControlBinding::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The invoker pressed the exit control and the message was deleted.
    ExitedByUser,
    /// No reaction arrived in time, the message stays without controls.
    ExitedByTimeout,
}

pub struct Paginator<'m, M> {
    messenger: &'m M,
    channel: ChannelId,
    invoker: Invoker,
    pages: Vec<String>,
    state: NavigationState,
    options: PaginatorOptions,
}

impl<'m, M: Messenger> Paginator<'m, M> {
    /// Fails with [`PaginatorError::PermissionDenied`] before anything is sent
    /// if the bot is missing one of the permissions pagination relies on.
    pub async fn new<S: AsRef<str>>(
        messenger: &'m M,
        channel: ChannelId,
        invoker: Invoker,
        entries: &[S],
        options: PaginatorOptions,
    ) -> Result<Self, PaginatorError> {
        let permissions = messenger
            .permissions(messenger.current_user_id(), channel)
            .await?;

        let missing = REQUIRED_PERMISSIONS
            .into_iter()
            .find(|&permission| !permissions.contains(permission));

        if let Some(permission) = missing {
            let err = PaginatorError::PermissionDenied {
                permission,
                channel,
                command: invoker.command,
                author_id: invoker.id,
                author_name: invoker.name,
            };
            hey!("Cannot paginate: {}", err);

            return Err(err);
        }

        let pages = paginate(entries, options.max_size);
        let state = NavigationState::new(pages.len());

        Ok(Self {
            messenger,
            channel,
            invoker,
            pages,
            state,
            options,
        })
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    fn render(&self, state: NavigationState) -> RenderedPage {
        RenderedPage {
            description: self.pages[state.index()].clone(),
            footer: self.options.show_page_length.then(|| state.footer()),
        }
    }

    /// Sends the first page and handles reactions until the session ends.
    pub async fn send(mut self) -> Result<Outcome, PaginatorError> {
        let message = self
            .messenger
            .send_page(self.channel, &self.render(self.state))
            .await?;

        let filter = ReactionFilter {
            message_id: message.message_id,
            controls: self.options.controls.clone(),
            bot_id: self.messenger.current_user_id(),
            invoker_id: self.invoker.id,
        };

        // must exist before the controls are added
        let mut reactions = self.messenger.reaction_stream(filter);

        for glyph in self.options.controls.glyphs() {
            self.messenger.add_reaction(message, glyph).await?;
        }

        say!(
            "Paginating {} pages in channel {} for {}",
            self.state.total(),
            self.channel,
            self.invoker.name
        );

        loop {
            let event = match timeout(self.options.timeout, reactions.next()).await {
                Ok(Some(event)) => event,
                // the subscription closed or stayed silent for too long
                Ok(None) | Err(_) => {
                    self.messenger
                        .clear_reactions(message, &self.options.controls)
                        .await?;
                    say!("Pagination in channel {} timed out", self.channel);

                    return Ok(Outcome::ExitedByTimeout);
                }
            };

            let Some(action) = self.options.controls.action_for(&event.glyph) else {
                continue;
            };

            if let Some(outcome) = self.apply(message, action).await? {
                return Ok(outcome);
            }

            self.messenger
                .remove_reaction(message, &event.glyph, self.invoker.id)
                .await?;
        }
    }

    /// Shows the page `action` leads to. The new state is only kept once the
    /// message was edited successfully.
    async fn apply(
        &mut self,
        message: MessageHandle,
        action: Action,
    ) -> Result<Option<Outcome>, PaginatorError> {
        match self.state.step(action) {
            Step::Render(next) => {
                self.messenger
                    .edit_page(message, &self.render(next))
                    .await?;
                self.state = next;

                Ok(None)
            }
            Step::Stay => Ok(None),
            Step::Exit => {
                self.messenger.delete_message(message).await?;
                say!("Pagination in channel {} closed by {}", self.channel, self.invoker.name);

                Ok(Some(Outcome::ExitedByUser))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use tokio::time::Instant;

    use super::{
        mock::{reaction, Call, MockMessenger, BOT_ID, INVOKER_ID},
        *,
    };

    fn invoker() -> Invoker {
        Invoker {
            id: UserId::new(INVOKER_ID),
            name: "tester".to_owned(),
            command: "prompts".to_owned(),
        }
    }

    fn channel() -> ChannelId {
        ChannelId::new(50)
    }

    fn entries() -> Vec<String> {
        ['a', 'b', 'c']
            .into_iter()
            .map(|c| std::iter::repeat(c).take(200).collect())
            .collect()
    }

    async fn paginator<'m>(
        messenger: &'m MockMessenger,
        entries: &[String],
    ) -> Paginator<'m, MockMessenger> {
        Paginator::new(messenger, channel(), invoker(), entries, PaginatorOptions::default())
            .await
            .unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn missing_permission_prevents_sending() {
        let messenger = MockMessenger::new()
            .with_permissions(Permissions::all() - Permissions::ADD_REACTIONS);

        let result = Paginator::new(
            &messenger,
            channel(),
            invoker(),
            &entries(),
            PaginatorOptions::default(),
        )
        .await;

        match result {
            Err(PaginatorError::PermissionDenied {
                permission,
                channel: denied_in,
                command,
                author_id,
                ..
            }) => {
                assert_eq!(permission, Permissions::ADD_REACTIONS);
                assert_eq!(denied_in, channel());
                assert_eq!(command, "prompts");
                assert_eq!(author_id, UserId::new(INVOKER_ID));
            }
            Err(err) => panic!("unexpected error: {err}"),
            Ok(_) => panic!("pagination should have been denied"),
        }

        assert!(messenger.calls().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn denial_names_the_missing_permission() {
        let messenger = MockMessenger::new()
            .with_permissions(Permissions::all() - Permissions::READ_MESSAGE_HISTORY);

        let err = Paginator::new(&messenger, channel(), invoker(), &entries(), PaginatorOptions::default())
            .await
            .err()
            .unwrap();
        let text = err.to_string();

        assert!(text.contains("`Read Message History`"), "{text}");
        assert!(text.contains("`prompts`"), "{text}");
        assert!(text.contains("tester"), "{text}");
    }

    #[tokio::test(start_paused = true)]
    async fn builds_pages_and_starts_on_first() {
        let messenger = MockMessenger::new();
        let paginator = paginator(&messenger, &entries()).await;

        assert_eq!(paginator.pages().len(), 2);
        assert_eq!(paginator.state().index(), 0);
        assert_eq!(paginator.state().total(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn empty_entries_still_have_one_page() {
        let messenger = MockMessenger::new();
        let paginator = paginator(&messenger, &[]).await;

        assert_eq!(paginator.pages(), [String::new()]);
        assert_eq!(paginator.state().total(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn times_out_without_reactions() {
        let messenger = MockMessenger::new();
        let started = Instant::now();
        let outcome = paginator(&messenger, &entries()).await.send().await.unwrap();

        assert_eq!(outcome, Outcome::ExitedByTimeout);
        assert_eq!(started.elapsed(), Duration::from_secs(300));

        let calls = messenger.calls();
        assert_eq!(
            calls[0],
            Call::Send(RenderedPage {
                description: entries()[..2].join("\n"),
                footer: Some("Page 1/2".to_owned()),
            })
        );

        let added: Vec<_> = calls[1..6].to_vec();
        let expected: Vec<_> = ["⏮️", "⬅️", "➡️", "⏭️", "🗑️"]
            .into_iter()
            .map(|glyph| Call::AddReaction(glyph.to_owned()))
            .collect();
        assert_eq!(added, expected);

        assert_eq!(calls.last(), Some(&Call::Clear));
        assert!(messenger.edits().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn next_moves_to_second_page() {
        let messenger = MockMessenger::new().with_events([reaction(INVOKER_ID, "➡️")]);
        let outcome = paginator(&messenger, &entries()).await.send().await.unwrap();

        assert_eq!(outcome, Outcome::ExitedByTimeout);
        assert_eq!(
            messenger.edits(),
            vec![RenderedPage {
                description: entries()[2].clone(),
                footer: Some("Page 2/2".to_owned()),
            }]
        );

        let removed = Call::RemoveReaction("➡️".to_owned(), UserId::new(INVOKER_ID));
        assert!(messenger.calls().contains(&removed));
    }

    #[tokio::test(start_paused = true)]
    async fn reactions_of_others_are_ignored() {
        let messenger = MockMessenger::new().with_events([
            reaction(3, "➡️"),
            reaction(BOT_ID, "➡️"),
            ReactionEvent {
                automated: true,
                ..reaction(INVOKER_ID, "➡️")
            },
        ]);
        let outcome = paginator(&messenger, &entries()).await.send().await.unwrap();

        assert_eq!(outcome, Outcome::ExitedByTimeout);
        assert!(messenger.edits().is_empty());
        assert!(!messenger
            .calls()
            .iter()
            .any(|call| matches!(call, Call::RemoveReaction(..))));
    }

    #[tokio::test(start_paused = true)]
    async fn boundary_presses_are_consumed_without_edit() {
        let messenger = MockMessenger::new().with_events([
            reaction(INVOKER_ID, "⬅️"),
            reaction(INVOKER_ID, "⏭️"),
            reaction(INVOKER_ID, "➡️"),
        ]);
        paginator(&messenger, &entries()).await.send().await.unwrap();

        let edits = messenger.edits();
        assert_eq!(edits.len(), 1);
        assert_eq!(edits[0].footer.as_deref(), Some("Page 2/2"));

        let removed = messenger
            .calls()
            .into_iter()
            .filter(|call| matches!(call, Call::RemoveReaction(..)))
            .count();
        assert_eq!(removed, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn first_and_last_jump_to_the_ends() {
        let many: Vec<String> = (0..5).map(|i| format!("entry {i}")).collect();
        let messenger = MockMessenger::new().with_events([
            reaction(INVOKER_ID, "⏭️"),
            reaction(INVOKER_ID, "⏮️"),
            reaction(INVOKER_ID, "⏮️"),
        ]);
        let options = PaginatorOptions {
            max_size: 7,
            ..Default::default()
        };
        Paginator::new(&messenger, channel(), invoker(), &many, options)
            .await
            .unwrap()
            .send()
            .await
            .unwrap();

        let footers: Vec<_> = messenger
            .edits()
            .into_iter()
            .filter_map(|page| page.footer)
            .collect();
        assert_eq!(footers, ["Page 5/5", "Page 1/5", "Page 1/5"]);
    }

    #[tokio::test(start_paused = true)]
    async fn exit_deletes_the_message() {
        let messenger = MockMessenger::new().with_events([
            reaction(INVOKER_ID, "➡️"),
            reaction(INVOKER_ID, "🗑️"),
            reaction(INVOKER_ID, "⬅️"),
        ]);
        let outcome = paginator(&messenger, &entries()).await.send().await.unwrap();

        assert_eq!(outcome, Outcome::ExitedByUser);

        let calls = messenger.calls();
        assert_eq!(calls.last(), Some(&Call::Delete));
        assert!(!calls.contains(&Call::Clear));
        assert_eq!(messenger.edits().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn custom_glyphs_drive_navigation() {
        let messenger = MockMessenger::new().with_events([
            reaction(INVOKER_ID, "➡️"),
            reaction(INVOKER_ID, "❌"),
        ]);
        let options = PaginatorOptions {
            controls: ControlBinding::default().with(
                Action::Exit,
                serenity::all::ReactionType::Unicode("❌".to_owned()),
            ),
            ..Default::default()
        };
        let outcome = Paginator::new(&messenger, channel(), invoker(), &entries(), options)
            .await
            .unwrap()
            .send()
            .await
            .unwrap();

        assert_eq!(outcome, Outcome::ExitedByUser);
        assert!(messenger.calls().contains(&Call::AddReaction("❌".to_owned())));
    }

    #[tokio::test(start_paused = true)]
    async fn hidden_page_length_has_no_footer() {
        let messenger = MockMessenger::new();
        let options = PaginatorOptions {
            show_page_length: false,
            ..Default::default()
        };
        Paginator::new(&messenger, channel(), invoker(), &entries(), options)
            .await
            .unwrap()
            .send()
            .await
            .unwrap();

        match &messenger.calls()[0] {
            Call::Send(page) => assert_eq!(page.footer, None),
            call => panic!("expected send, got {call:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn failed_edit_keeps_current_page() {
        let messenger = MockMessenger::new().failing_edits();
        let mut paginator = paginator(&messenger, &entries()).await;

        let result = paginator.apply(MockMessenger::handle(), Action::Next).await;

        assert!(matches!(result, Err(PaginatorError::Delivery(_))));
        assert_eq!(paginator.state().index(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn failed_edit_ends_the_session() {
        let messenger = MockMessenger::new()
            .failing_edits()
            .with_events([reaction(INVOKER_ID, "⏭️"), reaction(INVOKER_ID, "🗑️")]);
        let result = paginator(&messenger, &entries()).await.send().await;

        assert!(matches!(result, Err(PaginatorError::Delivery(_))));
        assert!(!messenger.calls().contains(&Call::Delete));
    }

    #[tokio::test(start_paused = true)]
    async fn rapid_presses_share_one_subscription() {
        let many: Vec<String> = (0..5).map(|i| format!("entry {i}")).collect();
        let messenger = MockMessenger::new().with_events([
            reaction(INVOKER_ID, "➡️"),
            reaction(INVOKER_ID, "➡️"),
            reaction(INVOKER_ID, "⏭️"),
            reaction(INVOKER_ID, "⬅️"),
        ]);
        let options = PaginatorOptions {
            max_size: 7,
            ..Default::default()
        };
        let outcome = Paginator::new(&messenger, channel(), invoker(), &many, options)
            .await
            .unwrap()
            .send()
            .await
            .unwrap();

        assert_eq!(outcome, Outcome::ExitedByTimeout);
        assert_eq!(messenger.subscriptions(), 1);

        let footers: Vec<_> = messenger
            .edits()
            .into_iter()
            .filter_map(|page| page.footer)
            .collect();
        assert_eq!(footers, ["Page 2/5", "Page 3/5", "Page 5/5", "Page 4/5"]);
    }

    #[tokio::test(start_paused = true)]
    async fn idle_time_restarts_after_each_press() {
        let messenger = MockMessenger::new().with_events([reaction(INVOKER_ID, "➡️")]);
        let options = PaginatorOptions {
            timeout: Duration::from_secs(30),
            ..Default::default()
        };
        let started = Instant::now();
        let outcome = Paginator::new(&messenger, channel(), invoker(), &entries(), options)
            .await
            .unwrap()
            .send()
            .await
            .unwrap();

        assert_eq!(outcome, Outcome::ExitedByTimeout);
        assert_eq!(started.elapsed(), Duration::from_secs(30));
        assert_eq!(messenger.calls().last(), Some(&Call::Clear));
    }
}
