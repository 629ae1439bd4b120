use marquee_core::{CategoryView, Movie, PageViewModel, SectionView, Theme};

use super::constants::*;
use super::palette::Palette;

/// Render the whole page as terminal lines: app bar, sections, footer.
pub fn render(view: &PageViewModel, palette: Palette) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(app_bar(view.theme, palette));
    for section in &view.sections {
        lines.push(String::new());
        lines.extend(render_section(section, palette));
    }
    lines.push(String::new());
    lines.push(format!("{}{}{}", palette.muted, FOOTER_TEXT, palette.reset));

    lines
}

fn app_bar(theme: Theme, palette: Palette) -> String {
    let mode = match theme {
        Theme::Light => "Light mode",
        Theme::Dark => "Dark mode",
    };
    let gap = PAGE_WIDTH.saturating_sub(APP_TITLE.len() + mode.len()).max(1);
    format!(
        "{}{}{}{}{}",
        palette.bar,
        APP_TITLE,
        " ".repeat(gap),
        mode,
        palette.reset
    )
}

fn render_section(section: &SectionView, palette: Palette) -> Vec<String> {
    match &section.content {
        CategoryView::Loading => vec![format!(
            "{}{}{}",
            palette.muted, LOADING_LABEL, palette.reset
        )],
        CategoryView::Failed(_) => vec![format!(
            "{}{}{}",
            palette.error, ERROR_LABEL, palette.reset
        )],
        CategoryView::Empty => vec![format!(
            "{}{}{}",
            palette.muted,
            section.category.empty_label(),
            palette.reset
        )],
        CategoryView::Ready(movies) => {
            let mut lines = vec![format!(
                "{}{}{}",
                palette.heading, section.title, palette.reset
            )];
            lines.extend(carousel(movies, palette));
            lines
        }
    }
}

/// Cards laid out left to right, wrapping every `CARDS_PER_ROW` movies.
fn carousel(movies: &[Movie], palette: Palette) -> Vec<String> {
    let mut lines = Vec::new();
    for (index, row) in movies.chunks(CARDS_PER_ROW).enumerate() {
        if index > 0 {
            lines.push(String::new());
        }
        let titles: Vec<String> = row.iter().map(|m| truncate(&m.title, CARD_WIDTH)).collect();
        let dates: Vec<String> = row
            .iter()
            .map(|m| match m.release_date {
                Some(date) => date.to_string(),
                None => "TBA".to_string(),
            })
            .collect();
        let ratings: Vec<String> = row
            .iter()
            .map(|m| format!("★ {:.1}", m.vote_average))
            .collect();

        lines.push(join_cells(&titles));
        lines.push(join_cells(&dates));
        lines.push(format!(
            "{}{}{}",
            palette.accent,
            join_cells(&ratings),
            palette.reset
        ));
    }
    lines
}

fn join_cells(cells: &[String]) -> String {
    let gap = " ".repeat(CARD_GAP);
    cells
        .iter()
        .map(|cell| format!("{cell:<CARD_WIDTH$}"))
        .collect::<Vec<_>>()
        .join(&gap)
        .trim_end()
        .to_string()
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}
