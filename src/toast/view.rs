// SPDX-License-Identifier: MPL-2.0
//! Renderable toast: text, resolved style and frame.
//!
//! A `ToastView` is built fresh for each display request and rendered as an
//! Iced element positioned on its frame inside the host surface.

use super::request::ToastId;
use super::style::{HeightClass, ResolvedStyle};
use crate::ui::design_tokens::{palette, radius, shadow, sizing, spacing, typography};
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{mouse_area, Container, Row, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Padding, Rectangle, Shadow, Theme};
use std::time::Duration;

/// Per-frame rendering inputs coming from the animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance {
    pub opacity: f32,
    /// Downward displacement from the resting frame.
    pub offset: f32,
    /// Time since the toast was attached, drives the spinner.
    pub elapsed: Duration,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            offset: 0.0,
            elapsed: Duration::ZERO,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ToastView {
    id: ToastId,
    message: String,
    style: ResolvedStyle,
    frame: Rectangle,
}

impl ToastView {
    #[must_use]
    pub fn new(id: ToastId, message: String, style: ResolvedStyle, frame: Rectangle) -> Self {
        Self {
            id,
            message,
            style,
            frame,
        }
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn style(&self) -> &ResolvedStyle {
        &self.style
    }

    #[must_use]
    pub fn frame(&self) -> Rectangle {
        self.frame
    }

    /// Renders the toast on its frame. `on_press` makes it tappable.
    ///
    /// The element owns its data, so it can outlive the view.
    pub fn render<'a, Message: Clone + 'static>(
        &self,
        appearance: Appearance,
        on_press: Option<Message>,
    ) -> Element<'a, Message> {
        let opacity = appearance.opacity.clamp(0.0, 1.0);
        let text_color = fade(self.style.text_color, opacity);
        let background = fade(self.style.background, opacity);
        let small = self.style.height == HeightClass::Small;

        let mut content = Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center);

        if self.style.shows_spinner {
            let spinner: Element<'a, Message> = AnimatedSpinner::new(text_color, appearance.elapsed)
                .size(if small { sizing::ICON_SM } else { sizing::ICON_MD })
                .into_element();
            content = content.push(spinner);
        }

        if let Some(icon) = self.style.icon {
            content = content.push(
                Text::new(icon.glyph())
                    .size(if small { sizing::ICON_SM } else { sizing::ICON_MD })
                    .color(text_color),
            );
        }

        content = content.push(
            Text::new(self.message.clone())
                .size(if small {
                    typography::BODY_SM
                } else {
                    typography::BODY
                })
                .color(text_color),
        );

        let card = Container::new(content)
            .width(Length::Fixed(self.frame.width))
            .height(Length::Fixed(self.frame.height))
            .padding([0.0, spacing::SM])
            .align_y(alignment::Vertical::Center)
            .style(move |_theme: &Theme| toast_container_style(background, text_color, opacity));

        let card: Element<'a, Message> = match on_press {
            Some(message) => mouse_area(card).on_press(message).into(),
            None => card.into(),
        };

        Container::new(card)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(Padding {
                top: (self.frame.y + appearance.offset).max(0.0),
                left: self.frame.x.max(0.0),
                right: 0.0,
                bottom: 0.0,
            })
            .into()
    }
}

fn fade(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity,
        ..color
    }
}

/// Style function for the toast card.
fn toast_container_style(
    background: Color,
    text_color: Color,
    opacity: f32,
) -> iced::widget::container::Style {
    iced::widget::container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        shadow: Shadow {
            color: fade(Color { a: 0.3, ..palette::BLACK }, opacity),
            ..shadow::MD
        },
        text_color: Some(text_color),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::style::{resolve, MessageType};
    use iced::{Point, Size};

    fn sample() -> ToastView {
        ToastView::new(
            ToastId::next(),
            "Saved".to_string(),
            resolve(MessageType::Success),
            Rectangle::new(Point::new(10.0, 300.0), Size::new(200.0, 40.0)),
        )
    }

    #[test]
    fn container_style_uses_background_and_radius() {
        let bg = resolve(MessageType::Error).background;
        let style = toast_container_style(bg, Color::WHITE, 1.0);

        assert_eq!(style.background, Some(Background::Color(bg)));
        assert_eq!(style.border.radius, iced::border::Radius::from(radius::MD));
        assert_eq!(style.text_color, Some(Color::WHITE));
    }

    #[test]
    fn fade_scales_alpha_only() {
        let faded = fade(Color::from_rgba(0.2, 0.4, 0.6, 0.8), 0.5);
        assert_eq!(faded, Color::from_rgba(0.2, 0.4, 0.6, 0.4));
    }

    #[test]
    fn view_exposes_its_parts() {
        let view = sample();
        assert_eq!(view.message(), "Saved");
        assert_eq!(view.frame().width, 200.0);
        assert_eq!(view.style().icon, resolve(MessageType::Success).icon);
    }

    #[test]
    fn render_does_not_panic_for_any_type() {
        for message_type in MessageType::ALL {
            let view = ToastView::new(
                ToastId::next(),
                "Working".to_string(),
                resolve(message_type),
                Rectangle::new(Point::ORIGIN, Size::new(120.0, 32.0)),
            );
            let _element: Element<'_, ()> = view.render(Appearance::default(), Some(()));
        }
    }
}
