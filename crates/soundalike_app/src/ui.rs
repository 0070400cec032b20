//! Immediate-mode rendering of the view model. Interactions are collected
//! into an outbox of messages; this module never touches state directly.

use eframe::egui;
use soundalike_core::{
    AppViewModel, ArtistCardView, Msg, PageStrip, PageToken, Theme, ViewContent,
};

/// Available width below which the strip collapses to first/current/last.
const COMPACT_STRIP_WIDTH: f32 = 420.0;
const GRID_COLUMNS: usize = 3;
const CARD_IMAGE_SIZE: [f32; 2] = [160.0, 120.0];

pub fn draw(ui: &mut egui::Ui, view: &AppViewModel, outbox: &mut Vec<Msg>) {
    draw_header(ui, view.theme, outbox);
    ui.separator();

    // Exactly one of these renders per frame.
    match &view.content {
        ViewContent::Loading => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading...");
            });
        }
        ViewContent::Error { message, .. } => {
            ui.colored_label(ui.visuals().error_fg_color, format!("Error: {message}"));
        }
        ViewContent::Empty => {
            ui.label("No data available");
        }
        ViewContent::Grid { cards, strip } => {
            draw_grid(ui, cards);
            ui.add_space(12.0);
            draw_strip(ui, strip, outbox);
        }
    }
}

fn draw_header(ui: &mut egui::Ui, theme: Theme, outbox: &mut Vec<Msg>) {
    ui.horizontal(|ui| {
        ui.heading("Artists");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let icon = match theme {
                Theme::Light => "🌙",
                Theme::Dark => "☀",
            };
            if ui.button(icon).on_hover_text("Toggle theme").clicked() {
                outbox.push(Msg::ThemeToggleClicked);
            }
        });
    });
}

fn draw_grid(ui: &mut egui::Ui, cards: &[ArtistCardView]) {
    egui::Grid::new("artist_grid")
        .num_columns(GRID_COLUMNS)
        .spacing([12.0, 12.0])
        .show(ui, |ui| {
            for (index, card) in cards.iter().enumerate() {
                draw_card(ui, card);
                if (index + 1) % GRID_COLUMNS == 0 {
                    ui.end_row();
                }
            }
        });
}

fn draw_card(ui: &mut egui::Ui, card: &ArtistCardView) {
    ui.push_id(&card.key, |ui| {
        ui.group(|ui| {
            ui.vertical(|ui| {
                if !card.image_url.is_empty() {
                    ui.add(
                        egui::Image::new(card.image_url.as_str())
                            .fit_to_exact_size(CARD_IMAGE_SIZE.into()),
                    );
                }
                ui.strong(&card.name);
                ui.hyperlink_to("More info", &card.url);
            });
        });
    });
}

fn draw_strip(ui: &mut egui::Ui, strip: &PageStrip, outbox: &mut Vec<Msg>) {
    let tokens = if ui.available_width() < COMPACT_STRIP_WIDTH {
        compact_tokens(strip)
    } else {
        strip.tokens.clone()
    };

    ui.horizontal(|ui| {
        if ui
            .add_enabled(strip.prev_enabled, egui::Button::new("Previous"))
            .clicked()
        {
            outbox.push(Msg::PageRequested(strip.current_page - 1));
        }
        for token in &tokens {
            match token {
                PageToken::Page(page) => {
                    let selected = *page == strip.current_page;
                    if ui.selectable_label(selected, page.to_string()).clicked() && !selected {
                        outbox.push(Msg::PageRequested(*page));
                    }
                }
                PageToken::Ellipsis => {
                    ui.label("…");
                }
            }
        }
        if ui
            .add_enabled(strip.next_enabled, egui::Button::new("Next"))
            .clicked()
        {
            outbox.push(Msg::PageRequested(strip.current_page + 1));
        }
    });
}

/// Narrow-width simplification built atop the same window data: only the
/// first, current, and last pages, with ellipses for any omitted runs.
fn compact_tokens(strip: &PageStrip) -> Vec<PageToken> {
    let current = strip.current_page;
    let total = strip.total_pages;

    let mut tokens = Vec::with_capacity(5);
    if current > 1 {
        tokens.push(PageToken::Page(1));
    }
    if current > 2 {
        tokens.push(PageToken::Ellipsis);
    }
    tokens.push(PageToken::Page(current));
    if current + 1 < total {
        tokens.push(PageToken::Ellipsis);
    }
    if current < total {
        tokens.push(PageToken::Page(total));
    }
    tokens
}
