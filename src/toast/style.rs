// SPDX-License-Identifier: MPL-2.0
//! Message types and the styles they resolve to.
//!
//! Every [`MessageType`] maps to exactly one [`ResolvedStyle`]; the mapping
//! is an exhaustive `match`, so adding a variant without a style does not
//! compile.

use crate::config::{TimingConfig, SMALL_TOAST_HEIGHT, TOAST_HEIGHT};
use crate::ui::design_tokens::{opacity, palette};
use iced::Color;
use std::time::Duration;

/// Kind of toast to show. Determines color, icon, height and spinner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MessageType {
    /// Black message with no icon.
    #[default]
    Default,
    DefaultSmall,
    /// Orange message with warning icon.
    Warning,
    WarningSmall,
    /// Orange message with no icon.
    WarningNoIcon,
    WarningNoIconSmall,
    /// Green message with success icon.
    Success,
    SuccessSmall,
    /// Green message with no icon.
    SuccessNoIcon,
    SuccessNoIconSmall,
    /// Red message with error icon.
    Error,
    ErrorSmall,
    /// Red message with no icon.
    ErrorNoIcon,
    ErrorNoIconSmall,
    /// Black message with a loading indicator.
    Loading,
    LoadingSmall,
    /// Orange message with a loading indicator.
    LoadingOrange,
    LoadingOrangeSmall,
}

impl MessageType {
    pub const ALL: [MessageType; 18] = [
        MessageType::Default,
        MessageType::DefaultSmall,
        MessageType::Warning,
        MessageType::WarningSmall,
        MessageType::WarningNoIcon,
        MessageType::WarningNoIconSmall,
        MessageType::Success,
        MessageType::SuccessSmall,
        MessageType::SuccessNoIcon,
        MessageType::SuccessNoIconSmall,
        MessageType::Error,
        MessageType::ErrorSmall,
        MessageType::ErrorNoIcon,
        MessageType::ErrorNoIconSmall,
        MessageType::Loading,
        MessageType::LoadingSmall,
        MessageType::LoadingOrange,
        MessageType::LoadingOrangeSmall,
    ];

    /// Resolves the visual parameters for this type.
    #[must_use]
    pub fn style(self) -> ResolvedStyle {
        resolve(self)
    }

    /// Returns how long this type stays on screen when no duration was asked for.
    ///
    /// `None` means the type is persistent by default (loading indicators).
    #[must_use]
    pub fn default_duration(self, timing: &TimingConfig) -> Option<Duration> {
        let traits = self.traits();
        if traits.spinner {
            return None;
        }
        Some(match traits.theme {
            ColorTheme::Neutral | ColorTheme::Success => timing.default_duration(),
            ColorTheme::Warning => timing.warning_duration(),
            ColorTheme::Error => timing.error_duration(),
        })
    }

    /// Whether this is a compact variant.
    #[must_use]
    pub fn is_small(self) -> bool {
        self.traits().small
    }

    fn traits(self) -> Traits {
        use ColorTheme::{Error, Neutral, Success, Warning};

        let (theme, icon, small, spinner) = match self {
            MessageType::Default => (Neutral, false, false, false),
            MessageType::DefaultSmall => (Neutral, false, true, false),
            MessageType::Warning => (Warning, true, false, false),
            MessageType::WarningSmall => (Warning, true, true, false),
            MessageType::WarningNoIcon => (Warning, false, false, false),
            MessageType::WarningNoIconSmall => (Warning, false, true, false),
            MessageType::Success => (Success, true, false, false),
            MessageType::SuccessSmall => (Success, true, true, false),
            MessageType::SuccessNoIcon => (Success, false, false, false),
            MessageType::SuccessNoIconSmall => (Success, false, true, false),
            MessageType::Error => (Error, true, false, false),
            MessageType::ErrorSmall => (Error, true, true, false),
            MessageType::ErrorNoIcon => (Error, false, false, false),
            MessageType::ErrorNoIconSmall => (Error, false, true, false),
            MessageType::Loading => (Neutral, false, false, true),
            MessageType::LoadingSmall => (Neutral, false, true, true),
            MessageType::LoadingOrange => (Warning, false, false, true),
            MessageType::LoadingOrangeSmall => (Warning, false, true, true),
        };

        Traits {
            theme,
            icon,
            small,
            spinner,
        }
    }
}

struct Traits {
    theme: ColorTheme,
    icon: bool,
    small: bool,
    spinner: bool,
}

/// Color family of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorTheme {
    Neutral,
    Warning,
    Success,
    Error,
}

impl ColorTheme {
    #[must_use]
    pub fn background(self) -> Color {
        let base = match self {
            ColorTheme::Neutral => palette::GRAY_900,
            ColorTheme::Warning => palette::WARNING_500,
            ColorTheme::Success => palette::SUCCESS_500,
            ColorTheme::Error => palette::ERROR_500,
        };
        Color {
            a: opacity::SURFACE,
            ..base
        }
    }

    #[must_use]
    pub fn text(self) -> Color {
        palette::WHITE
    }
}

/// Identifies which icon asset a toast shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKey {
    Warning,
    Success,
    Error,
}

impl IconKey {
    /// Glyph used when rendering without image assets.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            IconKey::Warning => "\u{26a0}",
            IconKey::Success => "\u{2714}",
            IconKey::Error => "\u{2716}",
        }
    }
}

/// Vertical size of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HeightClass {
    #[default]
    Normal,
    Small,
}

impl HeightClass {
    #[must_use]
    pub fn height(self) -> f32 {
        match self {
            HeightClass::Normal => TOAST_HEIGHT,
            HeightClass::Small => SMALL_TOAST_HEIGHT,
        }
    }
}

/// Concrete visual parameters of a toast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedStyle {
    pub theme: ColorTheme,
    pub background: Color,
    pub text_color: Color,
    pub icon: Option<IconKey>,
    pub height: HeightClass,
    pub shows_spinner: bool,
}

/// Maps a message type to its style. Pure and total.
#[must_use]
pub fn resolve(message_type: MessageType) -> ResolvedStyle {
    let traits = message_type.traits();

    let icon = if traits.icon {
        match traits.theme {
            ColorTheme::Warning => Some(IconKey::Warning),
            ColorTheme::Success => Some(IconKey::Success),
            ColorTheme::Error => Some(IconKey::Error),
            ColorTheme::Neutral => None,
        }
    } else {
        None
    };

    ResolvedStyle {
        theme: traits.theme,
        background: traits.theme.background(),
        text_color: traits.theme.text(),
        icon,
        height: if traits.small {
            HeightClass::Small
        } else {
            HeightClass::Normal
        },
        shows_spinner: traits.spinner,
    }
}
