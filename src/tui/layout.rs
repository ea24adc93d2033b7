use chrono::{DateTime, Utc};
use html_escape::decode_html_entities;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::config::ColorConfig;
use crate::domain::article::FALLBACK_IMAGE;
use crate::domain::TABS;
use crate::feed::FeedPhase;
use crate::tui::app::{TuiApp, View};

const SKELETON_CARDS: usize = 6;

pub fn render(frame: &mut Frame, app: &mut TuiApp, colors: &ColorConfig) {
    match app.view {
        View::Feed => render_feed(frame, app, colors),
        View::Detail => render_detail(frame, app, colors),
    }
}

fn render_feed(frame: &mut Frame, app: &mut TuiApp, colors: &ColorConfig) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Hero banner
            Constraint::Length(3), // Search bar
            Constraint::Length(1), // Tab bar
            Constraint::Min(8),    // Article feed
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_hero(frame, app, chunks[0], colors);
    render_search_bar(frame, app, chunks[1], colors);
    render_tab_bar(frame, app, chunks[2], colors);
    render_articles(frame, app, chunks[3], colors);
    render_status_bar(frame, app, chunks[4], colors);
}

/// Hero banner: promotes the top headline of the current feed, falling
/// back to static copy while nothing is loaded.
fn render_hero(frame: &mut Frame, app: &TuiApp, area: Rect, colors: &ColorConfig) {
    let mut lines = Vec::new();

    if let Some(top) = app.phase.articles().first() {
        lines.push(Line::from(Span::styled(
            top.display_title().to_string(),
            Style::default()
                .fg(colors.hero_title)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            top.display_description().to_string(),
            Style::default().fg(colors.hero_text),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "Breaking: Major Political Event Unfolds",
            Style::default()
                .fg(colors.hero_title)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            "Today's top stories, curated from around the world.",
            Style::default().fg(colors.hero_text),
        )));
    }

    let block = Block::default()
        .title(" newsdeck ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.inactive_border));

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

fn render_search_bar(frame: &mut Frame, app: &TuiApp, area: Rect, colors: &ColorConfig) {
    let border_style = if app.searching {
        Style::default().fg(colors.active_border)
    } else {
        Style::default().fg(colors.inactive_border)
    };

    let content = if app.search.is_empty() && !app.searching {
        Line::from(Span::styled(
            "search for news, topics...",
            Style::default().fg(colors.empty_text),
        ))
    } else {
        let mut spans = vec![Span::raw(app.search.clone())];
        if app.searching {
            spans.push(Span::styled(
                "█",
                Style::default().fg(colors.active_border),
            ));
        }
        Line::from(spans)
    };

    let block = Block::default()
        .title(" Search ")
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(content).block(block), area);
}

fn render_tab_bar(frame: &mut Frame, app: &TuiApp, area: Rect, colors: &ColorConfig) {
    let mut spans = Vec::new();

    for (index, tab) in TABS.iter().enumerate() {
        let style = if index == app.tab_index {
            Style::default()
                .bg(colors.tab_active_bg)
                .fg(colors.tab_active_fg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors.tab_inactive_fg)
        };
        spans.push(Span::styled(format!(" {} ", tab), style));
        spans.push(Span::raw(" "));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_articles(frame: &mut Frame, app: &mut TuiApp, area: Rect, colors: &ColorConfig) {
    match &app.phase {
        FeedPhase::Loading => render_skeletons(frame, area, colors),
        FeedPhase::Failed(message) => render_feed_error(frame, message, area, colors),
        FeedPhase::Ready(headlines) if headlines.articles.is_empty() => {
            render_empty_feed(frame, area, colors)
        }
        FeedPhase::Ready(_) => render_article_list(frame, app, area, colors),
    }
}

fn render_skeletons(frame: &mut Frame, area: Rect, colors: &ColorConfig) {
    let style = Style::default().fg(colors.skeleton);
    let items: Vec<ListItem> = (0..SKELETON_CARDS)
        .map(|_| {
            ListItem::new(Text::from(vec![
                Line::from(Span::styled("▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇", style)),
                Line::from(Span::styled("▇▇▇▇▇▇▇▇▇▇▇▇▇▇", style)),
                Line::from(Span::styled("▇▇▇▇▇▇", style)),
                Line::from(""),
            ]))
        })
        .collect();

    let block = Block::default()
        .title(" Recent Articles ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.inactive_border));

    frame.render_widget(List::new(items).block(block), area);
}

fn render_feed_error(frame: &mut Frame, message: &str, area: Rect, colors: &ColorConfig) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Oops! Something went wrong",
            Style::default()
                .fg(colors.error_text)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(message.to_string(), Style::default().fg(colors.error_text))),
        Line::from(""),
        Line::from(Span::styled(
            "Press R to reload",
            Style::default().fg(colors.empty_text),
        )),
    ];

    let block = Block::default()
        .title(" Recent Articles ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.inactive_border));

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

fn render_empty_feed(frame: &mut Frame, area: Rect, colors: &ColorConfig) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "No articles found",
            Style::default()
                .fg(colors.empty_text)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Try changing your search",
            Style::default().fg(colors.empty_text),
        )),
    ];

    let block = Block::default()
        .title(" Recent Articles ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.inactive_border));

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn render_article_list(frame: &mut Frame, app: &mut TuiApp, area: Rect, colors: &ColorConfig) {
    let articles = app.phase.articles();

    let items: Vec<ListItem> = articles
        .iter()
        .map(|article| {
            let date = format_date(article.published_at, "%Y-%m-%d");
            ListItem::new(Text::from(vec![
                Line::from(Span::styled(
                    article.display_title().to_string(),
                    Style::default()
                        .fg(colors.card_title)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    article.display_description().to_string(),
                    Style::default().fg(colors.card_description),
                )),
                Line::from(Span::styled(date, Style::default().fg(colors.card_date))),
                Line::from(""),
            ]))
        })
        .collect();

    let title = format!(
        " Recent Articles ({}) [{}/{}] ",
        articles.len(),
        app.article_index + 1,
        articles.len().max(1)
    );

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.active_border));

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(colors.selection_bg)
                .fg(colors.selection_fg)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, area, &mut app.article_list_state);
}

fn render_detail(frame: &mut Frame, app: &mut TuiApp, colors: &ColorConfig) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // Article
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_detail_article(frame, app, chunks[0], colors);
    render_status_bar(frame, app, chunks[1], colors);
}

fn render_detail_article(frame: &mut Frame, app: &TuiApp, area: Rect, colors: &ColorConfig) {
    let Some(detail) = app.detail.as_ref() else {
        let block = Block::default()
            .title(" Article ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.inactive_border));
        frame.render_widget(
            Paragraph::new("Article not found").block(block),
            area,
        );
        return;
    };

    let article = &detail.article;
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        format!("news / {}", article.category),
        Style::default().fg(colors.card_date),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        decode_html_entities(&article.title).to_string(),
        Style::default()
            .fg(colors.card_title)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    if let Some(date) = article.published_at {
        lines.push(Line::from(Span::styled(
            format!("published on {}", date.format("%B %-d, %Y")),
            Style::default().fg(colors.metadata_date),
        )));
    }
    lines.push(Line::from(Span::styled(
        format!(
            "Image: {}",
            article.image_url.as_deref().unwrap_or(FALLBACK_IMAGE)
        ),
        Style::default().fg(colors.metadata_link),
    )));
    lines.push(Line::from(Span::styled(
        format!("Link: {}", article.url),
        Style::default().fg(colors.metadata_link),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(
        "─".repeat(area.width.saturating_sub(2) as usize),
    ));
    lines.push(Line::from(""));

    let description = article
        .description
        .as_deref()
        .filter(|d| !d.is_empty())
        .map(|d| decode_html_entities(d).to_string())
        .unwrap_or_else(|| "No description available at the moment".to_string());
    for line in description.lines() {
        lines.push(Line::from(Span::styled(
            line.to_string(),
            Style::default().fg(colors.card_description),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Related Articles",
        Style::default()
            .fg(colors.card_title)
            .add_modifier(Modifier::BOLD),
    )));

    if detail.related.is_empty() {
        lines.push(Line::from(Span::styled(
            "No related articles available",
            Style::default().fg(colors.empty_text),
        )));
    } else {
        for related in &detail.related {
            lines.push(Line::from(Span::styled(
                format!("• {}", related.display_title()),
                Style::default().fg(colors.card_title),
            )));
            lines.push(Line::from(Span::styled(
                format!("  {}", related.display_description()),
                Style::default().fg(colors.card_description),
            )));
            lines.push(Line::from(Span::styled(
                format!("  {}", format_date(related.published_at, "%Y-%m-%d")),
                Style::default().fg(colors.card_date),
            )));
        }
    }

    let block = Block::default()
        .title(format!(" {} ", decode_html_entities(&article.title)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.active_border));

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.detail_scroll, 0));

    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame, app: &TuiApp, area: Rect, colors: &ColorConfig) {
    let status = if app.searching {
        "Type to search  Enter:Done  Esc:Cancel".to_string()
    } else if let Some(ref msg) = app.status_message {
        msg.clone()
    } else {
        match app.view {
            View::Feed => {
                "j/k:Nav  n/p:Page  Tab:Tabs  /:Search  Enter:Read  o:Open  R:Refresh  q:Quit"
                    .to_string()
            }
            View::Detail => "j/k:Scroll  n/p:Page  o:Open  Esc:Back  q:Quit".to_string(),
        }
    };

    let paragraph =
        Paragraph::new(status).style(Style::default().fg(colors.status_fg).bg(colors.status_bg));

    frame.render_widget(paragraph, area);
}

fn format_date(date: Option<DateTime<Utc>>, fmt: &str) -> String {
    date.map(|d| d.format(fmt).to_string()).unwrap_or_default()
}
