//! Minimal UI rendering

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Paragraph, Row, Table},
    Frame,
};

use crate::app::{App, Focus, RatesOrigin};
use crate::popups;

/// Color palette - minimal and elegant (TTY 16-color compatible)
pub(crate) mod palette {
    use ratatui::style::Color;

    pub const DIM: Color = Color::DarkGray;
    pub const ACCENT: Color = Color::Cyan;
    pub const NUMBER: Color = Color::Yellow;
    pub const SOURCE: Color = Color::LightGreen;
    pub const TARGET: Color = Color::Magenta;
    pub const ERROR: Color = Color::Red;
    pub const TEXT: Color = Color::Gray;
}

/// Width of the currency selector column
const SELECTOR_WIDTH: u16 = 14;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Layout: Header | Form | Caption | Cards | Footer
    let [header_area, form_area, caption_area, cards_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(6),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(area);

    draw_header(frame, header_area, app);
    draw_form(frame, form_area, app);
    draw_caption(frame, caption_area, app);
    draw_cards(frame, cards_area, app);
    draw_footer(frame, footer_area, app);

    if app.show_help {
        popups::draw_help_popup(frame, area);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let origin = match &app.origin {
        RatesOrigin::Fixture => "built-in rates",
        RatesOrigin::File(path) => path.as_str(),
    };
    let title = format!(" convr - {} ", origin);

    let block = Block::default().style(Style::new().bg(palette::DIM).fg(Color::White));
    let paragraph = Paragraph::new(title).block(block);
    frame.render_widget(paragraph, area);
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::new().fg(palette::ACCENT)
    } else {
        Style::new().fg(palette::DIM)
    }
}

fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let [top, bottom] =
        Layout::vertical([Constraint::Length(3), Constraint::Length(3)]).areas(area);
    let [amount_area, source_area] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(SELECTOR_WIDTH)]).areas(top);
    let [converted_area, target_area] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(SELECTOR_WIDTH)])
            .areas(bottom);

    // Left field: editable, keeps whatever was typed
    let focused = app.focus == Focus::Amount;
    let mut spans = vec![Span::styled(
        app.converter.amount().to_string(),
        Style::new().fg(palette::NUMBER),
    )];
    if focused {
        spans.push(Span::styled(
            " ",
            Style::new().bg(Color::White).fg(Color::Black),
        ));
    }
    let amount = Paragraph::new(Line::from(spans)).block(
        Block::bordered()
            .title(" amount ")
            .border_style(border_style(focused)),
    );
    frame.render_widget(amount, amount_area);

    // Right field: derived only
    let focused = app.focus == Focus::Converted;
    let converted = Paragraph::new(app.converter.converted_text().fg(palette::ACCENT)).block(
        Block::bordered()
            .title(" converted amount ")
            .title_bottom(Line::from(" read-only ").right_aligned())
            .border_style(border_style(focused)),
    );
    frame.render_widget(converted, converted_area);

    draw_selector(
        frame,
        source_area,
        " from ",
        &app.converter.source().code,
        app.focus == Focus::Source,
    );
    draw_selector(
        frame,
        target_area,
        " to ",
        &app.converter.target().code,
        app.focus == Focus::Target,
    );
}

fn draw_selector(frame: &mut Frame, area: Rect, title: &str, code: &str, focused: bool) {
    let arrow = if focused {
        Style::new().fg(palette::ACCENT)
    } else {
        Style::new().fg(palette::DIM)
    };
    let line = Line::from(vec![
        Span::styled("◂ ", arrow),
        code.to_string().bold(),
        Span::styled(" ▸", arrow),
    ])
    .centered();
    let selector = Paragraph::new(line).block(
        Block::bordered()
            .title(title.to_string())
            .border_style(border_style(focused)),
    );
    frame.render_widget(selector, area);
}

fn draw_caption(frame: &mut Frame, area: Rect, app: &App) {
    let caption = Paragraph::new(app.converter.caption().fg(palette::TEXT).italic()).centered();
    frame.render_widget(caption, area);
}

fn draw_cards(frame: &mut Frame, area: Rect, app: &App) {
    let source = &app.converter.source().code;
    let rows: Vec<Row> = app
        .converter
        .cards()
        .into_iter()
        .map(|card| {
            let marker = if card.is_source {
                "from".fg(palette::SOURCE)
            } else if card.is_target {
                "to".fg(palette::TARGET)
            } else {
                "".into()
            };
            let quote = card
                .quote
                .map(|q| format!("{q} {}", card.code))
                .unwrap_or_else(|| "n/a".to_string());
            Row::new(vec![
                Line::from(card.flag),
                Line::from(card.code.bold()),
                Line::from(card.name),
                Line::from(quote.fg(palette::NUMBER)).right_aligned(),
                Line::from(marker),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(4),
            Constraint::Length(5),
            Constraint::Fill(1),
            Constraint::Length(18),
            Constraint::Length(5),
        ],
    )
    .block(
        Block::bordered()
            .title(format!(" currencies (per 1 {source}) "))
            .border_style(Style::new().fg(palette::DIM)),
    )
    .column_spacing(1);

    frame.render_widget(table, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let mut hints = vec![
        " tab".fg(palette::ACCENT),
        " focus ".dim(),
        "←→".fg(palette::ACCENT),
        " currency ".dim(),
        "^r".fg(palette::ACCENT),
        " reverse ".dim(),
        "^u".fg(palette::ACCENT),
        " clear ".dim(),
        "F1".fg(palette::ACCENT),
        " help ".dim(),
        "esc".fg(palette::ACCENT),
        " quit ".dim(),
    ];

    if let Some(msg) = &app.status_message {
        hints.push(format!(" {msg}").fg(palette::ERROR));
    }

    let footer = Paragraph::new(Line::from(hints)).style(Style::new().bg(palette::DIM));
    frame.render_widget(footer, area);
}
