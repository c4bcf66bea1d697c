//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Line Rendering**: Turn the view model into one ANSI-styled string per
//!    terminal row, then print each at its row
//!
//! # Layout
//!
//! ```text
//!               Menu (level 1)              ← header
//! ──────────────────────────────────────────
//!   Save                                     ← depth 0
//!   Export                               ›  ← hosts a nested menu
//!     PDF                                   ← depth 1, selected
//!     HTML
//! ──────────────────────────────────────────
//!  ↑/↓: move  →/Enter: open  ←: back  Esc    ← footer
//! ```

use crate::app::AppState;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FooterInfo, HeaderInfo, MenuRow, UIViewModel};

const INDENT: usize = 2;
const SUBMENU_MARKER: &str = "›";

/// Renders the plugin UI to stdout.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    for (index, line) in render_lines(&viewmodel, &state.theme, cols).iter().enumerate() {
        position_cursor(index + 1, 1);
        print!("{line}");
    }
}

/// Renders a view model into styled lines, one per terminal row.
#[must_use]
pub fn render_lines(vm: &UIViewModel, theme: &Theme, cols: usize) -> Vec<String> {
    let mut lines = Vec::with_capacity(vm.rows.len() + 5);
    lines.push(header_line(&vm.header, theme, cols));
    lines.push(separator_line(theme, cols));
    lines.extend(vm.rows.iter().map(|row| row_line(row, theme, cols)));
    lines.push(separator_line(theme, cols));
    lines.extend(footer_lines(&vm.footer, theme, cols));
    lines
}

fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

fn centered(text: &str, cols: usize) -> String {
    let text: String = text.chars().take(cols).collect();
    let len = text.chars().count();
    let padding = cols.saturating_sub(len) / 2;
    format!(
        "{}{text}{}",
        " ".repeat(padding),
        " ".repeat(cols.saturating_sub(padding + len))
    )
}

fn header_line(header: &HeaderInfo, theme: &Theme, cols: usize) -> String {
    let background = theme.colors.header_bg.as_deref().map(Theme::bg).unwrap_or_default();
    format!(
        "{}{}{background}{}{}",
        Theme::bold(),
        Theme::fg(&theme.colors.header_fg),
        centered(&header.title, cols),
        Theme::reset()
    )
}

fn separator_line(theme: &Theme, cols: usize) -> String {
    format!("{}{}{}", Theme::fg(&theme.colors.border), "─".repeat(cols), Theme::reset())
}

fn row_line(row: &MenuRow, theme: &Theme, cols: usize) -> String {
    let indent = " ".repeat(INDENT * (row.depth + 1));
    let marker = if row.has_child_menu { SUBMENU_MARKER } else { " " };
    let label_width = cols.saturating_sub(indent.len() + 3);
    let label: String = row.label.chars().take(label_width).collect();
    let fill = " ".repeat(label_width.saturating_sub(label.chars().count()));

    let style = if row.is_selected {
        format!(
            "{}{}{}",
            Theme::bold(),
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        )
    } else if row.is_disabled {
        format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_disabled))
    } else {
        Theme::fg(&theme.colors.text_normal)
    };

    let marker_style = if row.is_selected {
        String::new()
    } else {
        Theme::fg(&theme.colors.submenu_marker)
    };

    format!(
        "{style}{indent}{label}{fill} {marker_style}{marker} {}",
        Theme::reset()
    )
}

fn footer_lines(footer: &FooterInfo, theme: &Theme, cols: usize) -> Vec<String> {
    let mut lines = vec![format!(
        "{}{}{}",
        Theme::fg(&theme.colors.text_dim),
        centered(&footer.keybindings, cols),
        Theme::reset()
    )];
    if let Some(status) = &footer.status {
        lines.push(format!(
            "{}{}{}",
            Theme::fg(&theme.colors.status_fg),
            centered(&format!("activated: {status}"), cols),
            Theme::reset()
        ));
    }
    lines
}
