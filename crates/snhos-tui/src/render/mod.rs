//! Main render/view function (View in TEA pattern)


use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;
use snhos_app::modes::Mode;
use snhos_app::state::{AppState, Focus, Screen};
use snhos_core::Theme;

use super::{layout, widgets};
use crate::theme::{palette, styles};
use crate::widgets::modal_overlay::dim_background;
use crate::widgets::modes;

/// Render the complete UI (View in TEA)
///
/// Only mutates state to size the matrix rain to the terminal panel.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    // Fill the whole terminal with the void background
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::VOID_BG)),
        area,
    );

    match &state.screen {
        Screen::Boot(boot) => {
            frame.render_widget(widgets::BootScreen::new(boot, state.theme), area);
            return;
        }
        Screen::Crash => {
            frame.render_widget(widgets::CrashScreen, area);
            return;
        }
        Screen::Desktop => {}
    }

    let areas = layout::create(area);

    frame.render_widget(
        widgets::MainHeader::new(state.theme, state.section)
            .god_mode(state.god_mode)
            .sections_focused(state.focus == Focus::Sections),
        areas.header,
    );

    let name = state.glitch.render();
    frame.render_widget(
        widgets::SectionsPanel::new(state.catalog(), state.section, state.theme)
            .focused(state.focus == Focus::Sections)
            .selected_project(state.selected_project)
            .display_name(&name),
        areas.sections,
    );

    render_terminal(frame, areas.terminal, state);
    render_footer(frame, areas.footer, state.theme);

    if let Some(index) = state.blueprint {
        if let Some(project) = state.catalog().projects.get(index) {
            dim_background(frame.buffer_mut(), area);
            frame.render_widget(widgets::BlueprintModal::new(project, index, state.theme), area);
        }
    }

    if let Some(palette) = &state.palette {
        dim_background(frame.buffer_mut(), area);
        frame.render_widget(widgets::CommandPaletteModal::new(palette, state.theme), area);
    }

    frame.render_widget(widgets::ToastStack::new(state.toasts.toasts(), state.theme), area);
}

/// Terminal panel: the shell or whichever mode has taken it over
fn render_terminal(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let theme = state.theme;
    let mode = state.shell.mode();
    let title = if mode.is_shell() {
        " SYSTEM_ACCESS_TERMINAL ".to_string()
    } else {
        format!(" SYSTEM_ACCESS_TERMINAL :: {} ", mode.name().to_uppercase())
    };

    let block = styles::panel_block(state.focus == Focus::Terminal, theme)
        .title(Span::styled(title, styles::primary_bold(theme)))
        .title_top(
            Line::from(Span::styled(" CONNECTION_SECURE ", styles::success())).right_aligned(),
        );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if let Mode::Matrix(rain) = state.shell.mode_mut() {
        rain.resize(inner.width, inner.height);
    }

    match state.shell.mode() {
        Mode::Shell => frame.render_widget(widgets::ShellView::new(&state.shell, theme), inner),
        Mode::Hacking(game) => frame.render_widget(modes::HackingView::new(game, theme), inner),
        Mode::Matrix(rain) => frame.render_widget(modes::MatrixView::new(rain), inner),
        Mode::Vim(editor) => frame.render_widget(modes::VimView::new(editor, theme), inner),
        Mode::Nano(editor) => frame.render_widget(modes::NanoView::new(editor), inner),
        Mode::Runner(game) => frame.render_widget(modes::RunnerView::new(game, theme), inner),
        Mode::Pong(game) => frame.render_widget(modes::PongView::new(game, theme), inner),
    }
}

fn render_footer(frame: &mut Frame, area: Rect, theme: Theme) {
    let tips = Line::from(vec![
        Span::styled(" * ", styles::primary(theme)),
        Span::styled("Tip: Use 'ls', 'cd', 'cat' to explore", styles::text_faint()),
        Span::styled("  * ", styles::primary(theme)),
        Span::styled("Try 'neofetch' or 'game'", styles::text_faint()),
    ]);
    frame.render_widget(Paragraph::new(tips), area);

    let credits = Line::styled("Built with Rust & Ratatui. ", styles::text_faint());
    let width = credits.width() as u16;
    if area.width > width + 70 {
        let credit_area = Rect::new(area.right() - width, area.y, width, 1);
        frame.render_widget(Paragraph::new(credits), credit_area);
    }
}
