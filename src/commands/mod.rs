pub mod career;
pub mod page;
pub mod player;
pub mod seasons;
pub mod stats;
pub mod teams;

use crate::config::DisplayConfig;
use crate::i18n::Language;
use crate::stats::Career;

/// Everything a command needs to render: the data, the language and the
/// box characters.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    pub career: &'a Career,
    pub lang: Language,
    pub display: &'a DisplayConfig,
}

impl<'a> RenderContext<'a> {
    pub fn new(career: &'a Career, lang: Language, display: &'a DisplayConfig) -> Self {
        RenderContext {
            career,
            lang,
            display,
        }
    }

    pub fn label(&self, key: &'static str) -> &'static str {
        self.lang.label(key)
    }
}
