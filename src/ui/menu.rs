//! Vertical keyboard-driven menu

use glam::Vec2;

use crate::input::{InputFrame, Key};
use crate::render::{DrawList, draw_text, measure_text};

/// One selectable menu entry
#[derive(Debug, Clone)]
pub struct MenuItem {
    /// Stable identifier returned on activation
    pub id: &'static str,
    /// Displayed label (bitmap font, uppercased on draw)
    pub label: String,
}

impl MenuItem {
    /// Create a menu item
    #[must_use]
    pub fn new(id: &'static str, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
}

/// Colors and sizing for menu rendering
#[derive(Debug, Clone)]
pub struct MenuStyle {
    /// Title text color
    pub title_color: [f32; 4],
    /// Title font scale
    pub title_scale: f32,
    /// Item label color
    pub label_color: [f32; 4],
    /// Item label font scale
    pub label_scale: f32,
    /// Button fill color
    pub button_fill: [f32; 4],
    /// Button border color
    pub button_border: [f32; 4],
    /// Border color of the selected button
    pub selected_border: [f32; 4],
    /// Button size in pixels
    pub button_size: Vec2,
    /// Vertical gap between buttons
    pub button_gap: f32,
    /// Hint text color
    pub hint_color: [f32; 4],
}

impl Default for MenuStyle {
    fn default() -> Self {
        Self {
            title_color: [0.92, 0.92, 0.95, 1.0],
            title_scale: 4.0,
            label_color: [0.92, 0.92, 0.95, 1.0],
            label_scale: 2.0,
            button_fill: [0.16, 0.16, 0.22, 1.0],
            button_border: [0.35, 0.35, 0.45, 1.0],
            selected_border: [0.95, 0.85, 0.30, 1.0],
            button_size: Vec2::new(280.0, 44.0),
            button_gap: 14.0,
            hint_color: [0.55, 0.55, 0.62, 1.0],
        }
    }
}

/// A vertical menu with wrap-around keyboard navigation.
///
/// Navigation accepts both arrow keys and W/S so menus work with either
/// hand on the keyboard. Enter or Space activates the selected item.
#[derive(Debug, Clone)]
pub struct Menu {
    title: String,
    items: Vec<MenuItem>,
    selected: usize,
    hint: Option<String>,
    style: MenuStyle,
}

impl Menu {
    /// Create a menu with a title and items
    #[must_use]
    pub fn new(title: impl Into<String>, items: Vec<MenuItem>) -> Self {
        Self {
            title: title.into(),
            items,
            selected: 0,
            hint: None,
            style: MenuStyle::default(),
        }
    }

    /// Set the hint line drawn under the buttons
    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Override the default style
    #[must_use]
    pub fn with_style(mut self, style: MenuStyle) -> Self {
        self.style = style;
        self
    }

    /// Index of the selected item
    #[must_use]
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Id of the selected item
    #[must_use]
    pub fn selected_id(&self) -> Option<&'static str> {
        self.items.get(self.selected).map(|item| item.id)
    }

    /// Replace an item's label, e.g. a live difficulty readout
    pub fn set_label(&mut self, id: &str, label: impl Into<String>) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.label = label.into();
        }
    }

    /// Process one tick of input.
    ///
    /// Returns the id of the activated item, if any.
    pub fn handle(&mut self, frame: &InputFrame) -> Option<&'static str> {
        if self.items.is_empty() {
            return None;
        }

        let len = self.items.len();
        if frame.just_pressed(Key::Up) || frame.just_pressed(Key::W) {
            self.selected = (self.selected + len - 1) % len;
        }
        if frame.just_pressed(Key::Down) || frame.just_pressed(Key::S) {
            self.selected = (self.selected + 1) % len;
        }

        if frame.just_pressed(Key::Enter) || frame.just_pressed(Key::Space) {
            return self.selected_id();
        }
        None
    }

    /// Draw the menu centered in the viewport
    pub fn draw(&self, list: &mut DrawList, viewport: Vec2) {
        let style = &self.style;

        let title_size = measure_text(&self.title, style.title_scale);
        let title_y = viewport.y * 0.18;
        draw_text(
            list,
            &self.title,
            Vec2::new((viewport.x - title_size.x) * 0.5, title_y),
            style.title_scale,
            style.title_color,
        );

        let block_height = self.items.len() as f32 * (style.button_size.y + style.button_gap)
            - style.button_gap;
        let mut y = (viewport.y - block_height) * 0.5 + viewport.y * 0.06;

        for (index, item) in self.items.iter().enumerate() {
            let pos = Vec2::new((viewport.x - style.button_size.x) * 0.5, y);
            list.push_rect(pos, style.button_size, style.button_fill);

            let border = if index == self.selected {
                style.selected_border
            } else {
                style.button_border
            };
            list.push_border(pos, style.button_size, 2.0, border);

            let label_size = measure_text(&item.label, style.label_scale);
            draw_text(
                list,
                &item.label,
                pos + (style.button_size - label_size) * 0.5,
                style.label_scale,
                style.label_color,
            );

            y += style.button_size.y + style.button_gap;
        }

        if let Some(hint) = &self.hint {
            let hint_size = measure_text(hint, 1.5);
            draw_text(
                list,
                hint,
                Vec2::new((viewport.x - hint_size.x) * 0.5, viewport.y * 0.88),
                1.5,
                style.hint_color,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu() -> Menu {
        Menu::new(
            "DEJA BOUNCE",
            vec![
                MenuItem::new("start", "Start"),
                MenuItem::new("difficulty", "Difficulty: Normal"),
                MenuItem::new("quit", "Quit"),
            ],
        )
    }

    fn pressed(keys: &[Key]) -> InputFrame {
        InputFrame::from_keys(keys, keys)
    }

    #[test]
    fn test_navigation_wraps() {
        let mut menu = menu();
        assert_eq!(menu.selected(), 0);

        menu.handle(&pressed(&[Key::Up]));
        assert_eq!(menu.selected(), 2, "up from first wraps to last");

        menu.handle(&pressed(&[Key::Down]));
        assert_eq!(menu.selected(), 0, "down from last wraps to first");

        menu.handle(&pressed(&[Key::S]));
        assert_eq!(menu.selected(), 1, "W/S navigate too");
    }

    #[test]
    fn test_activation() {
        let mut menu = menu();
        assert_eq!(menu.handle(&pressed(&[])), None);
        assert_eq!(menu.handle(&pressed(&[Key::Enter])), Some("start"));

        menu.handle(&pressed(&[Key::Down]));
        assert_eq!(menu.handle(&pressed(&[Key::Space])), Some("difficulty"));
    }

    #[test]
    fn test_set_label() {
        let mut menu = menu();
        menu.set_label("difficulty", "Difficulty: Hard");
        assert_eq!(menu.items[1].label, "Difficulty: Hard");
    }

    #[test]
    fn test_draw_produces_buttons() {
        let menu = menu();
        let mut list = DrawList::new([0.0; 4]);
        menu.draw(&mut list, Vec2::new(800.0, 480.0));
        // 3 fills + 3 borders of 4 rects each, plus text pixels
        assert!(list.len() > 15);
    }
}
