//! Root view — the single widget the event loop draws each frame.
//!
//! It receives the whole [`AppState`], including the shared [`AppContext`],
//! and hands the pieces each pane needs down to it.  Building a `RootView`
//! borrows; it never constructs stores.
//!
//! [`AppContext`]: crate::app::context::AppContext

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::app::state::{ActivePane, AppState};
use crate::core::version::AppVersion;

use super::{about, layout::AppLayout, theme::Theme};

pub struct RootView<'a> {
    state: &'a AppState,
    version: AppVersion,
}

impl<'a> RootView<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self {
            state,
            version: AppVersion::CURRENT,
        }
    }

    /// Render as if running `version` instead of the current build.
    pub fn version(mut self, version: AppVersion) -> Self {
        self.version = version;
        self
    }

    fn pane_block(&self, title: String, pane: ActivePane) -> Block<'static> {
        Block::default()
            .title(title)
            .title_style(Theme::title_style())
            .borders(Borders::ALL)
            .border_style(Theme::border_style(self.state.active_pane == pane))
    }

    fn render_feed(&self, area: Rect, buf: &mut Buffer) {
        let feed = self.state.ctx.feed();
        let lines = vec![
            Line::from(Span::styled("No posts loaded.", Theme::muted_style())),
            Line::raw(""),
            Line::from(Span::styled(feed.status_line(), Theme::text_style())),
        ];
        Paragraph::new(lines)
            .block(self.pane_block(" Feed ".into(), ActivePane::Feed))
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }

    fn render_about(&self, area: Rect, buf: &mut Buffer) {
        let show_details = self.state.ctx.preferences().show_thinker_details;

        let mut lines: Vec<Line> = about::about_lines(self.version, show_details)
            .into_iter()
            .enumerate()
            .map(|(i, l)| {
                let style = if i == 0 {
                    Theme::codename_style()
                } else {
                    Theme::text_style()
                };
                Line::from(Span::styled(l, style))
            })
            .collect();

        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled("Lineage", Theme::title_style())));
        lines.extend(
            about::lineage_lines(self.version.major)
                .into_iter()
                .skip(self.state.lineage_offset)
                .map(|l| {
                    let style = if l.starts_with('*') {
                        Theme::current_style()
                    } else {
                        Theme::muted_style()
                    };
                    Line::from(Span::styled(l, style))
                }),
        );

        let title = format!(" About · {} ", self.version.full());
        Paragraph::new(lines)
            .block(self.pane_block(title, ActivePane::About))
            .render(area, buf);
    }
}

impl Widget for RootView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = AppLayout::from_area(area);

        self.render_feed(layout.feed_area, buf);
        self.render_about(layout.about_area, buf);

        let hint = self.state.config.status_bar_hint();
        let status_text = self.state.status_message.as_deref().unwrap_or(&hint);
        Paragraph::new(status_text)
            .style(Theme::status_bar_style())
            .render(layout.status_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::context::AppContext;
    use crate::app::handler::apply_action;
    use crate::config::{Action, AppConfig};
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buf = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn draw(terminal: &mut Terminal<TestBackend>, state: &AppState) -> String {
        terminal
            .draw(|frame| frame.render_widget(RootView::new(state), frame.area()))
            .unwrap();
        screen_text(terminal)
    }

    #[test]
    fn renders_display_name_and_follows_preferences() {
        let ctx = AppContext::bootstrap();
        let mut state = AppState::new(ctx.clone(), AppConfig::default());
        let mut terminal = Terminal::new(TestBackend::new(160, 40)).unwrap();

        let text = draw(&mut terminal, &state);
        assert!(text.contains("Agentic Feed 1.0.0 \"David Allen\" (Getting Things Done)"));
        assert!(text.contains("not refreshed yet"));

        apply_action(&mut state, Action::ToggleDetails);
        let text = draw(&mut terminal, &state);
        assert!(text.contains("Agentic Feed 1.0.0-allen"));
        assert!(!ctx.preferences().show_thinker_details);
    }

    #[test]
    fn redrawing_reuses_the_shared_stores() {
        let ctx = AppContext::bootstrap();
        let state = AppState::new(ctx.clone(), AppConfig::default());
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();

        draw(&mut terminal, &state);
        draw(&mut terminal, &state);

        assert!(state.ctx.shares_state_with(&ctx));
        ctx.feed_mut().request_refresh(chrono::Utc::now());
        let text = draw(&mut terminal, &state);
        assert!(text.contains("revision 1"));
    }

    #[test]
    fn unnamed_major_shows_bare_semver() {
        let state = AppState::new(AppContext::bootstrap(), AppConfig::default());
        let mut terminal = Terminal::new(TestBackend::new(160, 40)).unwrap();

        terminal
            .draw(|frame| {
                let view = RootView::new(&state).version(AppVersion::new(40, 0, 0));
                frame.render_widget(view, frame.area());
            })
            .unwrap();
        let text = screen_text(&terminal);

        assert!(text.contains("Agentic Feed 40.0.0 "));
        assert!(text.contains("About · 40.0.0-thinker40"));
        assert!(text.contains("Letter:   ?"));
        assert!(text.contains("Thinker:  unassigned"));
        assert!(!text.contains("David Allen\" ("));
    }

    #[test]
    fn status_bar_shows_hint_until_message() {
        let mut state = AppState::new(AppContext::bootstrap(), AppConfig::default());
        let mut terminal = Terminal::new(TestBackend::new(120, 20)).unwrap();

        let text = draw(&mut terminal, &state);
        assert!(text.contains("Tab: switch pane"));

        apply_action(&mut state, Action::RefreshFeed);
        let text = draw(&mut terminal, &state);
        assert!(text.contains("Refresh requested (revision 1)"));
    }
}
