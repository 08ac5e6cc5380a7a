// SPDX-License-Identifier: MPL-2.0
//! Loading indicator drawn on a canvas, sized to sit inside a toast.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, path::Arc, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Radians, Rectangle, Renderer, Theme};
use std::f32::consts::{PI, TAU};
use std::time::Duration;

/// One full turn of the spinner.
const REVOLUTION: Duration = Duration::from_millis(900);

/// Spinner whose angle is derived from how long it has been on screen.
pub struct AnimatedSpinner {
    cache: Cache,
    rotation: f32,
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    /// Creates a spinner at the rotation matching `elapsed`.
    #[must_use]
    pub fn new(color: Color, elapsed: Duration) -> Self {
        Self {
            cache: Cache::default(),
            rotation: rotation_for(elapsed),
            color,
            size: sizing::ICON_MD,
        }
    }

    /// Overrides the rendered size.
    #[must_use]
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Returns the current rotation in radians.
    #[must_use]
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

/// Maps elapsed time onto `[0, TAU)`.
fn rotation_for(elapsed: Duration) -> f32 {
    let turns = elapsed.as_secs_f32() / REVOLUTION.as_secs_f32();
    turns.fract() * TAU
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let radius = frame.width().min(frame.height()) / 2.0 - 2.0;

                frame.stroke(
                    &Path::circle(center, radius),
                    Stroke::default().with_width(2.0).with_color(Color {
                        a: 0.25,
                        ..self.color
                    }),
                );

                // Quarter-turn offset so rotation 0 starts at the top
                let start = self.rotation - PI / 2.0;
                let arc = Path::new(|builder| {
                    builder.arc(Arc {
                        center,
                        radius,
                        start_angle: Radians(start),
                        end_angle: Radians(start + PI),
                    });
                });
                frame.stroke(
                    &arc,
                    Stroke::default()
                        .with_width(2.0)
                        .with_color(self.color)
                        .with_line_cap(canvas::LineCap::Round),
                );
            });

        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn rotation_starts_at_zero() {
        assert_abs_diff_eq!(rotation_for(Duration::ZERO), 0.0);
    }

    #[test]
    fn rotation_wraps_after_full_turn() {
        let half = rotation_for(REVOLUTION / 2);
        let wrapped = rotation_for(REVOLUTION + REVOLUTION / 2);
        assert_abs_diff_eq!(half, PI, epsilon = 1e-3);
        assert_abs_diff_eq!(wrapped, half, epsilon = 1e-3);
    }

    #[test]
    fn spinner_defaults_to_icon_size() {
        let spinner = AnimatedSpinner::new(Color::WHITE, Duration::ZERO);
        assert_abs_diff_eq!(spinner.size, sizing::ICON_MD);
        assert_abs_diff_eq!(spinner.size(12.0).size, 12.0);
    }
}
