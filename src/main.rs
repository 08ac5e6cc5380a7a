// SPDX-License-Identifier: MPL-2.0
//! Interactive demo: one button per toast flavour.

use iced::widget::{button, column, container, row, stack, text, Column};
use iced::{window, Element, Length, Size, Subscription};
use iced_toast::config::{self, ToastConfig};
use iced_toast::toast::{
    self, HostHandle, MessageType, Surface, ToastController, ToastDelegate, ToastRequest,
};
use iced_toast::ui::design_tokens::{spacing, typography};
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

const WINDOW_SIZE: Size = Size::new(800.0, 600.0);
const LOG_LINES: usize = 8;

#[derive(Debug, Clone)]
enum Message {
    Show(MessageType),
    ShowPersistent,
    ShowTappable,
    Dismiss,
    Resized(Size),
    Toast(toast::Message),
}

/// Records lifecycle events for display.
#[derive(Default)]
struct EventLog(RefCell<Vec<String>>);

impl EventLog {
    fn push(&self, line: String) {
        let mut lines = self.0.borrow_mut();
        lines.push(line);
        let excess = lines.len().saturating_sub(LOG_LINES);
        lines.drain(..excess);
    }
}

impl ToastDelegate for EventLog {
    fn will_display(&self, message_type: MessageType) {
        self.push(format!("will display {message_type:?}"));
    }
    fn did_display(&self, message_type: MessageType) {
        self.push(format!("did display {message_type:?}"));
    }
    fn will_dismiss(&self, message_type: MessageType) {
        self.push(format!("will dismiss {message_type:?}"));
    }
    fn did_dismiss(&self, message_type: MessageType) {
        self.push(format!("did dismiss {message_type:?}"));
    }
}

struct Demo {
    surface: Rc<Surface>,
    host: HostHandle,
    controller: ToastController,
    log: Rc<EventLog>,
    // Keeps the weakly held delegate alive.
    _delegate: Rc<dyn ToastDelegate>,
}

impl Demo {
    fn new(config: ToastConfig) -> Self {
        let surface = Surface::shared(WINDOW_SIZE);
        let host: HostHandle = surface.clone();
        let log = Rc::new(EventLog::default());
        let delegate: Rc<dyn ToastDelegate> = log.clone();
        let mut controller = ToastController::with_config(config);
        controller.set_delegate(&delegate);
        Self {
            surface,
            host,
            controller,
            log,
            _delegate: delegate,
        }
    }

    fn show(&mut self, request: ToastRequest) {
        if let Err(err) = self.controller.display(request, &self.host) {
            self.log.push(format!("display failed: {err}"));
        }
    }

    fn update(&mut self, message: Message) {
        match message {
            Message::Show(message_type) => {
                self.show(
                    ToastRequest::new(format!("{message_type:?} toast"))
                        .message_type(message_type),
                );
            }
            Message::ShowPersistent => {
                self.show(ToastRequest::new("Stays until dismissed").persistent());
            }
            Message::ShowTappable => {
                let log = self.log.clone();
                self.show(
                    ToastRequest::new("Tap me")
                        .duration_secs(5.0)
                        .on_tap(move || log.push("tapped".to_string())),
                );
            }
            Message::Dismiss => {
                self.controller.dismiss();
            }
            Message::Resized(size) => self.surface.resize(size),
            Message::Toast(message) => self.controller.update(message),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let types = MessageType::ALL.chunks(6).fold(
            Column::new().spacing(spacing::XS),
            |column, chunk| {
                column.push(chunk.iter().fold(
                    row![].spacing(spacing::XS),
                    |row, &message_type| {
                        row.push(
                            button(text(format!("{message_type:?}")).size(typography::BODY_SM))
                                .on_press(Message::Show(message_type)),
                        )
                    },
                ))
            },
        );

        let actions = row![
            button("Persistent").on_press(Message::ShowPersistent),
            button("Tappable").on_press(Message::ShowTappable),
            button("Dismiss").on_press(Message::Dismiss),
        ]
        .spacing(spacing::XS);

        let events = self
            .log
            .0
            .borrow()
            .iter()
            .fold(Column::new().spacing(spacing::XXS), |column, line| {
                column.push(text(line.clone()).size(typography::BODY_SM))
            });

        let content = container(
            column![types, actions, events]
                .spacing(spacing::MD)
                .padding(spacing::MD),
        )
        .width(Length::Fill)
        .height(Length::Fill);

        stack![content, self.controller.view().map(Message::Toast)].into()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            self.controller.subscription().map(Message::Toast),
            window::resize_events().map(|(_id, size)| Message::Resized(size)),
        ])
    }
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = pico_args::Arguments::from_env();
    let config_path: Option<PathBuf> = match args.opt_value_from_str("--config") {
        Ok(path) => path,
        Err(err) => {
            log::warn!("ignoring --config: {err}");
            None
        }
    };

    let (config, warning) = match config_path {
        Some(path) => match config::load_from_path(&path) {
            Ok(config) => (config, None),
            Err(err) => (ToastConfig::default(), Some(err.to_string())),
        },
        None => config::load(),
    };
    if let Some(warning) = warning {
        log::warn!("using default toast config: {warning}");
    }

    let boot_config = RefCell::new(Some(config));
    let boot = move || Demo::new(boot_config.borrow_mut().take().unwrap_or_default());

    iced::application(boot, Demo::update, Demo::view)
        .title("iced_toast demo")
        .window_size(WINDOW_SIZE)
        .subscription(Demo::subscription)
        .run()
}
