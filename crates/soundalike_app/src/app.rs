use std::time::Duration;

use eframe::egui;
use grid_logging::{grid_info, grid_warn};
use soundalike_core::{
    update, AppState, Artist, Effect, ErrorInfo, FetchState, Msg, Theme,
};
use soundalike_engine::{
    ArtistRecord, EngineEvent, EngineHandle, FetchError, FetchSettings, RequestDescriptor,
};

use crate::config::AppConfig;
use crate::ui;

/// How soon to wake up for engine events while a fetch is in flight.
const POLL_INTERVAL: Duration = Duration::from_millis(75);

pub struct SoundalikeApp {
    state: AppState,
    engine: EngineHandle,
    config: AppConfig,
}

impl SoundalikeApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let mut app = Self {
            state: AppState::new(),
            engine: EngineHandle::new(FetchSettings::default()),
            config,
        };
        app.dispatch(Msg::ViewMounted);
        app
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.run_effects(effects);
    }

    fn run_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::IssueFetch { generation } => {
                    grid_info!(
                        "IssueFetch generation={} artist={}",
                        generation,
                        self.config.artist
                    );
                    let descriptor = RequestDescriptor::similar_artists(
                        &self.config.endpoint,
                        &self.config.artist,
                        &self.config.api_key,
                    );
                    self.engine.issue(generation, descriptor);
                }
            }
        }
    }

    /// Feeds completed engine work back into the state machine. Stale
    /// results are dropped by the update function, not here.
    fn drain_engine_events(&mut self) {
        while let Some(event) = self.engine.try_recv() {
            let EngineEvent::FetchCompleted { generation, result } = event;
            let result = match result {
                Ok(records) => Ok(records.into_iter().map(into_artist).collect()),
                Err(err) => {
                    grid_warn!("fetch generation={} failed: {}", generation, err);
                    Err(into_error_info(err))
                }
            };
            self.dispatch(Msg::FetchResolved { generation, result });
        }
    }
}

impl eframe::App for SoundalikeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_engine_events();

        if ctx.input(|i| i.viewport().close_requested()) {
            self.dispatch(Msg::ViewUnmounted);
        }

        let view = self.state.view();
        ctx.set_visuals(match view.theme {
            Theme::Light => egui::Visuals::light(),
            Theme::Dark => egui::Visuals::dark(),
        });

        let mut outbox = Vec::new();
        egui::CentralPanel::default().show(ctx, |panel| {
            egui::ScrollArea::vertical().show(panel, |panel| {
                ui::draw(panel, &view, &mut outbox);
            });
        });
        for msg in outbox {
            self.dispatch(msg);
        }

        if matches!(self.state.fetch(), FetchState::Loading) {
            ctx.request_repaint_after(POLL_INTERVAL);
        }
    }
}

fn into_artist(record: ArtistRecord) -> Artist {
    Artist {
        id: record.id,
        name: record.name,
        url: record.url,
        image_url: record.image_url,
    }
}

fn into_error_info(err: FetchError) -> ErrorInfo {
    ErrorInfo {
        status: err.status(),
        message: err.to_string(),
    }
}
