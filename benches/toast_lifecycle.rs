// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the toast lifecycle.
//!
//! Measures the performance of:
//! - Style resolution for every message type
//! - A full display/tick/dismiss cycle on a manual clock
//! - Back-to-back replacement of the visible toast

use criterion::{criterion_group, criterion_main, Criterion};
use iced::Size;
use iced_toast::config::ToastConfig;
use iced_toast::toast::{
    resolve, HostHandle, ManualClock, MessageType, Surface, ToastController, ToastRequest,
};
use std::hint::black_box;
use std::time::Duration;

fn controller() -> (ToastController, ManualClock, HostHandle) {
    let clock = ManualClock::new();
    let controller = ToastController::with_clock(ToastConfig::default(), clock.clone());
    let host: HostHandle = Surface::shared(Size::new(1280.0, 720.0));
    (controller, clock, host)
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("toast_style");

    group.bench_function("resolve_all_types", |b| {
        b.iter(|| {
            for message_type in MessageType::ALL {
                black_box(resolve(black_box(message_type)));
            }
        });
    });

    group.finish();
}

/// Display, run the entrance, dismiss and run the exit.
fn bench_full_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("toast_lifecycle");
    let (mut controller, clock, host) = controller();
    let frame = Duration::from_millis(16);

    group.bench_function("display_dismiss_cycle", |b| {
        b.iter(|| {
            controller
                .display(ToastRequest::new("Saved"), &host)
                .expect("host has area");
            for _ in 0..16 {
                clock.advance(frame);
                controller.tick();
            }
            controller.dismiss();
            for _ in 0..16 {
                clock.advance(frame);
                controller.tick();
            }
            black_box(controller.state());
        });
    });

    group.finish();
}

/// Replaces the visible toast without letting time pass.
fn bench_replacement(c: &mut Criterion) {
    let mut group = c.benchmark_group("toast_lifecycle");
    let (mut controller, _clock, host) = controller();

    group.bench_function("replace_visible_toast", |b| {
        b.iter(|| {
            let id = controller
                .display(
                    ToastRequest::new("Replacing").message_type(MessageType::Warning),
                    &host,
                )
                .expect("host has area");
            black_box(id);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_resolve, bench_full_cycle, bench_replacement);
criterion_main!(benches);
