// SPDX-License-Identifier: MPL-2.0
//! Before/after comparison slider.
//!
//! Two images share one area: the background layer fills it and the
//! foreground layer is clipped at the split position. The split moves by
//! pointer drag, keyboard, the range input, or autoplay.

pub mod canvas;
pub mod component;
pub mod layer;
pub mod state;
pub mod ticker;
pub mod transition;

pub use component::{Effect, KeyOutcome, Message, SliderSettings, State, ViewEnv};
pub use state::{Direction, LayerSlot, Orientation, Phase, SliderState, StepDirection, Steps};

use crate::config::CompareConfig;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::palette;
use crate::ui::theming::{parse_hex_color, CompareTheme};
use iced::Color;

/// Inputs of one comparison widget.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompareOptions {
    pub before_src: String,
    pub after_src: String,
    /// Accessible description shared by both images.
    pub alt: Option<String>,
    /// Divider accent as `#rrggbb`.
    pub accent_color: Option<String>,
    pub theme: CompareTheme,
    pub before_label: Option<String>,
    pub after_label: Option<String>,
}

/// Comparison values given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompareArgs {
    pub before: Option<String>,
    pub after: Option<String>,
    pub alt: Option<String>,
    pub accent: Option<String>,
    pub theme: Option<String>,
    pub before_label: Option<String>,
    pub after_label: Option<String>,
}

impl CompareOptions {
    #[must_use]
    pub fn new(before_src: impl Into<String>, after_src: impl Into<String>) -> Self {
        Self {
            before_src: before_src.into(),
            after_src: after_src.into(),
            ..Self::default()
        }
    }

    /// Merges command-line values over the `[compare]` settings.
    ///
    /// Returns `None` when either source is missing from both.
    #[must_use]
    pub fn resolve(args: CompareArgs, config: &CompareConfig) -> Option<Self> {
        let before_src = args.before.or_else(|| config.before_src.clone())?;
        let after_src = args.after.or_else(|| config.after_src.clone())?;

        let theme = match args.theme.as_deref().map(str::parse::<CompareTheme>) {
            Some(Ok(theme)) => theme,
            Some(Err(err)) => {
                log::warn!("{err}; using the configured theme");
                config.theme.unwrap_or_default()
            }
            None => config.theme.unwrap_or_default(),
        };

        Some(Self {
            before_src,
            after_src,
            alt: args.alt.or_else(|| config.alt.clone()),
            accent_color: args.accent.or_else(|| config.accent_color.clone()),
            theme,
            before_label: args.before_label,
            after_label: args.after_label,
        })
    }

    /// Parsed accent color, or the brand default when unset or invalid.
    #[must_use]
    pub fn accent(&self) -> Color {
        match self.accent_color.as_deref() {
            Some(value) => parse_hex_color(value).unwrap_or_else(|| {
                log::warn!("Ignoring invalid accent color {value:?}");
                palette::PRIMARY_500
            }),
            None => palette::PRIMARY_500,
        }
    }

    #[must_use]
    pub fn before_label(&self, i18n: &I18n) -> String {
        self.before_label
            .clone()
            .unwrap_or_else(|| i18n.tr("compare-before-label"))
    }

    #[must_use]
    pub fn after_label(&self, i18n: &I18n) -> String {
        self.after_label
            .clone()
            .unwrap_or_else(|| i18n.tr("compare-after-label"))
    }

    #[must_use]
    pub fn alt_text(&self, i18n: &I18n) -> String {
        self.alt
            .clone()
            .unwrap_or_else(|| i18n.tr("compare-default-alt"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn english() -> I18n {
        I18n::new(Some("en-US".to_string()), &Config::default())
    }

    #[test]
    fn resolve_prefers_command_line_sources() {
        let config = CompareConfig {
            before_src: Some("config-before.png".into()),
            after_src: Some("config-after.png".into()),
            ..CompareConfig::default()
        };
        let args = CompareArgs {
            before: Some("cli-before.png".into()),
            ..CompareArgs::default()
        };

        let options = CompareOptions::resolve(args, &config).unwrap();
        assert_eq!(options.before_src, "cli-before.png");
        assert_eq!(options.after_src, "config-after.png");
    }

    #[test]
    fn resolve_requires_both_sources() {
        let args = CompareArgs {
            before: Some("a.png".into()),
            ..CompareArgs::default()
        };
        assert!(CompareOptions::resolve(args, &CompareConfig::default()).is_none());
    }

    #[test]
    fn resolve_falls_back_on_unknown_theme() {
        let config = CompareConfig {
            theme: Some(CompareTheme::Ocean),
            ..CompareConfig::default()
        };
        let args = CompareArgs {
            before: Some("a.png".into()),
            after: Some("b.png".into()),
            theme: Some("neon".into()),
            ..CompareArgs::default()
        };

        let options = CompareOptions::resolve(args, &config).unwrap();
        assert_eq!(options.theme, CompareTheme::Ocean);
    }

    #[test]
    fn labels_default_to_translations() {
        let options = CompareOptions::new("a.png", "b.png");
        let i18n = english();
        assert_eq!(options.before_label(&i18n), "Before");
        assert_eq!(options.after_label(&i18n), "After");
    }

    #[test]
    fn custom_labels_win() {
        let options = CompareOptions {
            before_label: Some("2019".into()),
            after_label: Some("2024".into()),
            ..CompareOptions::new("a.png", "b.png")
        };
        let i18n = english();
        assert_eq!(options.before_label(&i18n), "2019");
        assert_eq!(options.after_label(&i18n), "2024");
    }

    #[test]
    fn invalid_accent_uses_default() {
        let options = CompareOptions {
            accent_color: Some("not-a-color".into()),
            ..CompareOptions::new("a.png", "b.png")
        };
        assert_eq!(options.accent(), palette::PRIMARY_500);
    }

    #[test]
    fn valid_accent_is_parsed() {
        let options = CompareOptions {
            accent_color: Some("#ff0000".into()),
            ..CompareOptions::new("a.png", "b.png")
        };
        assert_eq!(options.accent(), Color::from_rgb8(255, 0, 0));
    }
}
