// SPDX-License-Identifier: MPL-2.0
//! Demo application hosting a single many-options button.
//!
//! The application owns the button, forwards canvas pointer events to it and
//! shows the selections reported to its observer.

pub mod config;
pub mod paths;

use crate::domain::button::{ButtonState, Location, Slot};
use crate::error::Result;
use crate::ui::icons;
use crate::ui::widgets::many_options_button::{ManyOptionsButton, PointerEvent, SelectionObserver};
use iced::widget::{button, column, container, row, text};
use iced::{window, Element, Length, Padding, Point, Size, Task, Theme};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

pub const WINDOW_DEFAULT_WIDTH: f32 = 480.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 480.0;

/// Side length of the square area the button lives in.
const STAGE_SIZE: f32 = 360.0;

/// Runtime flags collected from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Directory holding `settings.toml`.
    pub config_dir: Option<String>,
    /// Spacing override, taking precedence over the config file.
    pub spacing: Option<f32>,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// A pointer event mapped to the button's local coordinates.
    Pointer(PointerEvent),
    /// Force the button into a state.
    ForceState(ButtonState),
    ClearSelections,
}

/// Observer recording every selection the button reports.
#[derive(Debug, Default)]
pub struct SelectionLog {
    entries: RefCell<Vec<Location>>,
}

impl SelectionLog {
    #[must_use]
    pub fn entries(&self) -> Vec<Location> {
        self.entries.borrow().clone()
    }

    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}

impl SelectionObserver for SelectionLog {
    fn on_button_selected(&self, _button: &ManyOptionsButton, location: Location) {
        tracing::info!(%location, "option selected");
        self.entries.borrow_mut().push(location);
    }
}

pub struct App {
    button: ManyOptionsButton,
    selections: Rc<SelectionLog>,
    /// Last selection returned by the button itself.
    last_selection: Option<Location>,
    config_warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("state", &self.button.state())
            .field("selections", &self.selections.entries())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(STAGE_SIZE, STAGE_SIZE)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
///
/// # Errors
///
/// Returns an error if the demo button cannot be built or the window fails.
pub fn run(flags: Flags) -> Result<()> {
    paths::init_cli_overrides(flags.config_dir.clone());
    let app = App::load(&flags)?;

    // iced 0.14 requires an Fn boot closure; the app is handed over once.
    let boot_state = RefCell::new(Some(app));
    let boot = move || {
        let app = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        (app, Task::none())
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()?;
    Ok(())
}

/// Builds the demo button from the built-in icons.
///
/// # Errors
///
/// Returns an error if an embedded icon cannot be rasterized.
pub fn build_button(config: &config::Config, spacing: Option<f32>) -> Result<ManyOptionsButton> {
    let icon = |slot| icons::slot_icon(slot, icons::NORMAL_COLOR).map(Some);

    let mut button = ManyOptionsButton::from_images(
        icon(Slot::Center)?,
        icon(Slot::Left)?,
        icon(Slot::Right)?,
        icon(Slot::Top)?,
        icon(Slot::Bottom)?,
    )?
    .with_spacing(spacing.unwrap_or_else(|| config.spacing()))
    .with_closed_transform(config.closed_transform());

    for slot in Slot::ALL {
        let highlighted = icons::slot_icon(slot, icons::HIGHLIGHT_COLOR)?;
        button.set_highlighted_image(slot, Some(highlighted));
    }
    button.set_anchor(Point::new(STAGE_SIZE / 2.0, STAGE_SIZE / 2.0));
    Ok(button)
}

impl App {
    /// Loads the config and builds the demo button from the built-in icons.
    ///
    /// # Errors
    ///
    /// Returns an error if an embedded icon cannot be rasterized.
    pub fn load(flags: &Flags) -> Result<Self> {
        let (config, config_warning) = config::load();
        if let Some(warning) = &config_warning {
            tracing::warn!("{warning}");
        }

        let button = build_button(&config, flags.spacing)?;
        Ok(Self::with_button(button, config_warning))
    }

    /// Wraps an existing button and registers the selection log as its observer.
    #[must_use]
    pub fn with_button(mut button: ManyOptionsButton, config_warning: Option<String>) -> Self {
        let selections = Rc::new(SelectionLog::default());
        button.set_observer(&selections);
        Self {
            button,
            selections,
            last_selection: None,
            config_warning,
        }
    }

    #[must_use]
    pub fn button(&self) -> &ManyOptionsButton {
        &self.button
    }

    #[must_use]
    pub fn selections(&self) -> Vec<Location> {
        self.selections.entries()
    }

    #[must_use]
    pub fn last_selection(&self) -> Option<Location> {
        self.last_selection
    }

    fn title(&self) -> String {
        match self.last_selection {
            Some(location) => format!("Many Options - {location}"),
            None => "Many Options".to_string(),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Pointer(event) => {
                if let Some(location) = self.button.handle_pointer(event) {
                    self.last_selection = Some(location);
                }
            }
            Message::ForceState(state) => self.button.set_state(state),
            Message::ClearSelections => {
                self.selections.clear();
                self.last_selection = None;
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let frame = self.button.frame();
        let stage = container(self.button.view(Message::Pointer))
            .padding(Padding {
                top: frame.y.max(0.0),
                left: frame.x.max(0.0),
                ..Padding::ZERO
            })
            .width(Length::Fixed(STAGE_SIZE))
            .height(Length::Fixed(STAGE_SIZE));

        let history = self
            .selections
            .entries()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        let mut info = column![
            text(format!("State: {:?}", self.button.state())),
            text(format!("Selections: {history}")),
        ]
        .spacing(4);
        if let Some(warning) = &self.config_warning {
            info = info.push(text(warning.clone()));
        }

        let controls = row![
            button("Open").on_press(Message::ForceState(ButtonState::Open)),
            button("Close").on_press(Message::ForceState(ButtonState::Closed)),
            button("Clear").on_press(Message::ClearSelections),
        ]
        .spacing(8);

        container(column![stage, info, controls].spacing(12))
            .center_x(Length::Fill)
            .padding(16)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::button::ButtonImage;
    use crate::ui::widgets::many_options_button::{PointerId, PointerKind};

    fn app() -> App {
        let image = || Some(ButtonImage::placeholder(Size::new(40.0, 40.0)));
        let button = ManyOptionsButton::from_images(image(), image(), image(), image(), image())
            .expect("center present")
            .with_spacing(10.0);
        App::with_button(button, None)
    }

    fn pointer(kind: PointerKind) -> Message {
        Message::Pointer(PointerEvent::new(PointerId::Mouse, kind))
    }

    #[test]
    fn new_app_starts_closed_without_selections() {
        let app = app();
        assert_eq!(app.button().state(), ButtonState::Closed);
        assert!(app.selections().is_empty());
        assert_eq!(app.title(), "Many Options");
    }

    #[test]
    fn swipe_from_center_records_selection() {
        let mut app = app();
        // Closed center is 40x40 at the origin; open cells are 40x40, 10 apart.
        let _ = app.update(pointer(PointerKind::Pressed(Point::new(20.0, 20.0))));
        assert_eq!(app.button().state(), ButtonState::Open);
        let _ = app.update(pointer(PointerKind::Moved(Point::new(120.0, 70.0))));
        assert_eq!(app.button().state(), ButtonState::Expanded(Location::Right));
        let _ = app.update(pointer(PointerKind::Released(Point::new(120.0, 70.0))));

        assert_eq!(app.button().state(), ButtonState::Closed);
        assert_eq!(app.selections(), vec![Location::Right]);
        assert_eq!(app.last_selection(), Some(Location::Right));
        assert_eq!(app.title(), "Many Options - right");
    }

    #[test]
    fn clear_empties_the_log() {
        let mut app = app();
        let _ = app.update(Message::ForceState(ButtonState::Expanded(Location::Top)));
        let _ = app.update(pointer(PointerKind::Pressed(Point::new(70.0, 20.0))));
        let _ = app.update(pointer(PointerKind::Released(Point::new(70.0, 20.0))));
        assert_eq!(app.selections(), vec![Location::Top]);

        let _ = app.update(Message::ClearSelections);
        assert!(app.selections().is_empty());
        assert_eq!(app.last_selection(), None);
        assert_eq!(app.title(), "Many Options");
    }

    #[test]
    fn demo_button_uses_config_spacing_unless_overridden() {
        let config = config::Config::default();
        let from_config = build_button(&config, None).expect("icons render");
        assert_eq!(from_config.spacing(), config.spacing());

        let overridden = build_button(&config, Some(30.0)).expect("icons render");
        assert_eq!(overridden.spacing(), 30.0);
        assert_eq!(overridden.active_locations().len(), 4);
    }
}
