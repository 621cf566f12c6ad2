use rand::seq::SliceRandom;

pub const POSITIVE_REPLIES: &[&str] = &[
    "Yep.",
    "Absolutely!",
    "Can do!",
    "Affirmative!",
    "Yeah okay.",
    "Sure.",
    "Sure thing!",
    "You're the boss!",
    "Okay.",
    "No problem.",
    "I got you.",
    "Alright.",
    "You got it!",
    "ROGER THAT",
    "Of course!",
    "Aye aye, cap'n!",
    "I'll allow it.",
];

pub const NEGATIVE_REPLIES: &[&str] = &[
    "Noooooo!!",
    "Nope.",
    "I'm sorry Dave, I'm afraid I can't do that.",
    "I don't think so.",
    "Not gonna happen.",
    "Out of the question.",
    "Huh? No.",
    "Nah.",
    "Naw.",
    "Not likely.",
    "No way, José.",
    "Not in a million years.",
    "Fat chance.",
    "Certainly not.",
    "NEGATORY.",
];

pub const ERROR_REPLIES: &[&str] = &[
    "Please don't do that.",
    "You have to stop.",
    "Do you mind?",
    "In the future, don't do that.",
    "That was a mistake.",
    "You blew it.",
    "You're bad at computers.",
    "Are you trying to kill me?",
    "Noooooo!!",
    "I can't believe you've done this",
];

const WOULD_YOU_RATHER: &[&str] = &[
    "be able to fly or be invisible?",
    "live without music or without movies?",
    "always be ten minutes late or twenty minutes early?",
    "have a rewind button or a pause button for your life?",
    "speak every language or play every instrument?",
    "explore the deep sea or outer space?",
    "never use social media again or never watch another show?",
    "be the funniest person in the room or the smartest?",
    "have unlimited sushi or unlimited tacos for life?",
    "know how you will die or when you will die?",
    "live in a treehouse or in a houseboat?",
    "give up coffee or give up chocolate?",
];

const HAVE_YOU_EVER: &[&str] = &[
    "fallen asleep in class?",
    "sung in the shower?",
    "pretended to be sick to skip school or work?",
    "laughed so hard you cried?",
    "gotten lost in your own neighbourhood?",
    "sent a text to the wrong person?",
    "eaten food that fell on the floor?",
    "stayed up for more than 24 hours?",
    "forgotten someone's name right after hearing it?",
    "talked to yourself in public?",
    "broken a bone?",
    "waved back at someone who wasn't waving at you?",
];

const TRUTHS: &[&str] = &[
    "What is the most embarrassing thing {name} has seen you do?",
    "What is a secret you have never told {name}?",
    "What do you honestly think of {name}'s taste in music?",
    "If you could swap lives with {name} for a day, what would you do?",
    "What is the worst gift you have ever received?",
    "Have you ever blamed {name} for something you did?",
    "What is the biggest lie you have ever told?",
    "Which song would you never admit to liking in front of {name}?",
    "What is your most irrational fear?",
    "What was your first impression of {name}?",
];

const DARES: &[&str] = &[
    "Send {name} a compliment in all caps.",
    "Change your nickname to one {name} picks for the next hour.",
    "Type the next message with your elbows.",
    "Let {name} choose your profile picture for a day.",
    "Write a short poem about {name}.",
    "Speak only in questions for the next ten minutes.",
    "Describe {name} using only emojis.",
    "Share the last photo in your gallery.",
    "Sing the chorus of the last song you listened to in voice chat.",
    "Tell {name} your most unpopular opinion.",
];

/// Prompt collections of the talking games.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromptCategory {
    WouldYouRather,
    HaveYouEver,
    Truths,
    Dares,
}

impl PromptCategory {
    pub const ALL: [PromptCategory; 4] = [
        PromptCategory::WouldYouRather,
        PromptCategory::HaveYouEver,
        PromptCategory::Truths,
        PromptCategory::Dares,
    ];

    /// Identifier used in command options.
    pub fn key(self) -> &'static str {
        match self {
            PromptCategory::WouldYouRather => "wyr",
            PromptCategory::HaveYouEver => "nhie",
            PromptCategory::Truths => "truths",
            PromptCategory::Dares => "dares",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            PromptCategory::WouldYouRather => "Would you rather?",
            PromptCategory::HaveYouEver => "Have I ever?",
            PromptCategory::Truths => "Truths",
            PromptCategory::Dares => "Dares",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.to_lowercase();
        Self::ALL.into_iter().find(|category| category.key() == key)
    }

    pub fn prompts(self) -> &'static [&'static str] {
        match self {
            PromptCategory::WouldYouRather => WOULD_YOU_RATHER,
            PromptCategory::HaveYouEver => HAVE_YOU_EVER,
            PromptCategory::Truths => TRUTHS,
            PromptCategory::Dares => DARES,
        }
    }

    pub fn random(self) -> &'static str {
        self.prompts()
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or_default()
    }
}

/// Picks one of the three reply moods, then a reply of that mood.
pub fn eight_ball_reply() -> &'static str {
    let mut rng = rand::thread_rng();

    [POSITIVE_REPLIES, NEGATIVE_REPLIES, ERROR_REPLIES]
        .choose(&mut rng)
        .and_then(|replies| replies.choose(&mut rng))
        .copied()
        .unwrap_or_default()
}
