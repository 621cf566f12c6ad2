use serenity::all::ReactionType;

/// Navigation controls offered on a paginated message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    First,
    Prev,
    Next,
    Last,
    Exit,
}

impl Action {
    /// All actions, in the order their reactions are added to the message.
    pub const ALL: [Action; 5] = [
        Action::First,
        Action::Prev,
        Action::Next,
        Action::Last,
        Action::Exit,
    ];

    fn slot(self) -> usize {
        match self {
            Action::First => 0,
            Action::Prev => 1,
            Action::Next => 2,
            Action::Last => 3,
            Action::Exit => 4,
        }
    }

    fn default_glyph(self) -> &'static str {
        match self {
            Action::First => "⏮️",
            Action::Prev => "⬅️",
            Action::Next => "➡️",
            Action::Last => "⏭️",
            Action::Exit => "🗑️",
        }
    }
}

/// Maps every [`Action`] to the reaction that triggers it.
#[derive(Clone, Debug)]
pub struct ControlBinding {
    glyphs: [ReactionType; 5],
}

impl Default for ControlBinding {
    fn default() -> Self {
        Self {
            glyphs: Action::ALL.map(|action| ReactionType::Unicode(action.default_glyph().to_owned())),
        }
    }
}

impl ControlBinding {
    /// Replaces the glyph of a single action.
    pub fn with(mut self, action: Action, glyph: ReactionType) -> Self {
        self.glyphs[action.slot()] = glyph;
        self
    }

    pub fn glyph(&self, action: Action) -> &ReactionType {
        &self.glyphs[action.slot()]
    }

    /// Glyphs in [`Action::ALL`] order.
    pub fn glyphs(&self) -> impl Iterator<Item = &ReactionType> {
        self.glyphs.iter()
    }

    /// Reverse lookup of the action bound to `glyph`.
    pub fn action_for(&self, glyph: &ReactionType) -> Option<Action> {
        Action::ALL
            .into_iter()
            .find(|&action| same_glyph(self.glyph(action), glyph))
    }
}

/// Compares custom emojis by id and unicode emojis by name, ignoring the
/// emoji variation selector Discord sometimes strips from reaction events.
pub fn same_glyph(a: &ReactionType, b: &ReactionType) -> bool {
    match (a, b) {
        (ReactionType::Custom { id: a, .. }, ReactionType::Custom { id: b, .. }) => a == b,
        (ReactionType::Unicode(a), ReactionType::Unicode(b)) => {
            a.trim_end_matches('\u{fe0f}') == b.trim_end_matches('\u{fe0f}')
        }
        _ => false,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationState {
    index: usize,
    total: usize,
}

/// What a navigation action resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Show the page of the contained state.
    Render(NavigationState),
    /// Already at the boundary, nothing to show.
    Stay,
    Exit,
}

impl NavigationState {
    /// Starts on the first page. A zero `total` is treated as one page.
    pub fn new(total: usize) -> Self {
        Self {
            index: 0,
            total: total.max(1),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn total(&self) -> usize {
        self.total
    }

    fn last_index(&self) -> usize {
        self.total - 1
    }

    /// Resolves `action` without mutating `self`.
    pub fn step(&self, action: Action) -> Step {
        let index = match action {
            Action::First => 0,
            Action::Last => self.last_index(),
            Action::Prev if self.index > 0 => self.index - 1,
            Action::Next if self.index < self.last_index() => self.index + 1,
            Action::Prev | Action::Next => return Step::Stay,
            Action::Exit => return Step::Exit,
        };

        Step::Render(Self { index, ..*self })
    }

    /// Footer text, e.g. `Page 2/5`.
    pub fn footer(&self) -> String {
        format!("Page {}/{}", self.index + 1, self.total)
    }
}
