pub mod about;
pub mod command_bar;
pub mod error_popup;
pub mod help;
pub mod home;
pub mod nav_bar;
pub mod side_menu;
pub mod status_bar;
pub mod tweet;
pub mod tweets;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::app::{App, AppMode};
use crate::event::PageId;

use about::AboutView;
use command_bar::CommandBar;
use error_popup::ErrorPopup;
use help::HelpView;
use home::HomeView;
use nav_bar::NavBar;
use side_menu::SideMenu;
use status_bar::StatusBar;
use tweets::TweetListView;

pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Layout: nav bar + page content + status bar + optional command bar
    let bottom_height = if app.mode != AppMode::Normal { 2 } else { 1 };

    let [nav_area, main_area, bottom_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(bottom_height),
    ])
    .areas(area);

    frame.render_widget(NavBar::new(app), nav_area);

    // Exactly one page renders, keyed off the current PageId.
    match app.page {
        PageId::Home => frame.render_widget(HomeView::new(), main_area),
        PageId::Tweets => frame.render_widget(TweetListView::new(app), main_area),
        PageId::About => frame.render_widget(AboutView::new(), main_area),
    }

    // Split bottom into status bar and optional command bar
    if app.mode != AppMode::Normal {
        let [status_area, cmd_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(bottom_area);
        frame.render_widget(StatusBar::new(app), status_area);
        frame.render_widget(CommandBar::new(app), cmd_area);
    } else {
        frame.render_widget(StatusBar::new(app), bottom_area);
    }

    // The side menu is an overlay independent of the current page.
    if app.menu_open {
        frame.render_widget(SideMenu::new(app), main_area);
    }

    if app.show_help {
        frame.render_widget(HelpView::new(), main_area);
    }

    // Error detail popup overlay (renders on top of everything)
    if let Some(ref detail) = app.error_detail {
        frame.render_widget(ErrorPopup::new(detail), frame.area());
    }
}
