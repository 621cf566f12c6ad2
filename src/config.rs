use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::Path,
    time::Duration,
};

use serde::{Deserialize, Serialize};
use serenity::all::ReactionType;

use crate::{
    discord_helpers::multipage_embed::{Action, ControlBinding, PaginatorOptions},
    hey, nay,
};

const CONFIG_PATH: &str = "./config.json";

/// Reaction overrides, `None` keeps the built-in glyph.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct GlyphSettings {
    pub first: Option<String>,
    pub prev: Option<String>,
    pub next: Option<String>,
    pub last: Option<String>,
    pub exit: Option<String>,
}

impl GlyphSettings {
    fn get(&self, action: Action) -> Option<&str> {
        let glyph = match action {
            Action::First => &self.first,
            Action::Prev => &self.prev,
            Action::Next => &self.next,
            Action::Last => &self.last,
            Action::Exit => &self.exit,
        };

        glyph.as_deref()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct PaginatorSettings {
    pub max_size: usize,
    pub show_page_length: bool,
    pub timeout_secs: u64,
    pub glyphs: GlyphSettings,
}

impl Default for PaginatorSettings {
    fn default() -> Self {
        let defaults = PaginatorOptions::default();

        Self {
            max_size: defaults.max_size,
            show_page_length: defaults.show_page_length,
            timeout_secs: defaults.timeout.as_secs(),
            glyphs: GlyphSettings::default(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ConfigSettings {
    pub paginator: PaginatorSettings,
}

impl ConfigSettings {
    pub fn get() -> Self {
        let path = Path::new(CONFIG_PATH);

        if !path.exists() {
            Self::generate(path);
            return Self::default();
        }

        let data = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(e) => {
                hey!("Failed to read {}, using defaults: {}", CONFIG_PATH, e);
                return Self::default();
            }
        };

        Self::parse(&data)
    }

    fn parse(data: &str) -> Self {
        match serde_json::from_str(data) {
            Ok(cfg) => cfg,
            Err(e) => {
                hey!("Failed to deserialize config data, using defaults: {}", e);
                Self::default()
            }
        }
    }

    fn generate(path: &Path) {
        let Ok(mut file) = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
        else {
            hey!("Failed to create config file.");
            return;
        };

        let Ok(data) = serde_json::to_string_pretty(&Self::default()) else {
            nay!("Failed to serialize config data.");
            return;
        };

        if let Err(e) = write!(file, "{}", data) {
            hey!("Failed to write to file for config: {}", e);
        }
    }

    pub fn paginator_options(&self) -> PaginatorOptions {
        let settings = &self.paginator;
        let defaults = PaginatorOptions::default();

        let max_size = if settings.max_size == 0 {
            hey!("Paginator max_size must be positive, using {}", defaults.max_size);
            defaults.max_size
        } else {
            settings.max_size
        };

        let timeout = if settings.timeout_secs == 0 {
            hey!("Paginator timeout_secs must be positive, using {}", defaults.timeout.as_secs());
            defaults.timeout
        } else {
            Duration::from_secs(settings.timeout_secs)
        };

        let mut controls = ControlBinding::default();

        for action in Action::ALL {
            let Some(glyph) = settings.glyphs.get(action) else {
                continue;
            };

            match ReactionType::try_from(glyph) {
                Ok(glyph) => controls = controls.with(action, glyph),
                Err(e) => hey!("Invalid glyph `{}` for {:?}, keeping default: {}", glyph, action, e),
            }
        }

        PaginatorOptions {
            max_size,
            show_page_length: settings.show_page_length,
            timeout,
            controls,
        }
    }
}
