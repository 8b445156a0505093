pub mod components;
pub mod screens;
pub mod style;

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::app::App;
use crate::ui::components::companion::{companion_rect, render_companion};
use crate::ui::screens::landing::render_landing;

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        render_landing(self, area, buf);
        // the companion floats above the page
        render_companion(
            &self.companion,
            &self.content.footer.bubble,
            companion_rect(area),
            buf,
        );
    }
}
