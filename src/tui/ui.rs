use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{Alert, MovieList, NewMovieFormView, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;

/// Below this width the catalog stacks under the form instead of beside it.
const SIDE_BY_SIDE_MIN_WIDTH: u16 = 90;
const FORM_WIDTH: u16 = 48;

const HELP_TEXT: &str = " Tab/↓ next  Shift+Tab/↑ prev  Enter add  Esc quit ";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let [title_area, main_area, help_area] =
        Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame.area());

    TitleBar::new(app.movies.len(), &app.status_message).render(frame, title_area);

    let (form_area, list_area) = split_main(main_area);
    tui.form.render(frame, form_area);
    MovieList::new(&app.movies).render(frame, list_area);

    frame.render_widget(
        Line::styled(HELP_TEXT, Style::default().fg(Color::DarkGray)),
        help_area,
    );

    if let Some(message) = &app.alert {
        Alert::new(message).render(frame, frame.area());
    }
}

/// Form on the left and catalog on the right, or stacked on narrow terminals.
fn split_main(area: Rect) -> (Rect, Rect) {
    use Constraint::{Length, Min};
    if area.width >= SIDE_BY_SIDE_MIN_WIDTH {
        let [form, list] = Layout::horizontal([Length(FORM_WIDTH), Min(0)])
            .spacing(2)
            .areas(area);
        (form, list)
    } else {
        let [form, list] =
            Layout::vertical([Length(NewMovieFormView::required_height()), Min(0)]).areas(area);
        (form, list)
    }
}
