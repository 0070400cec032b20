use crate::{AppState, Effect, FetchState, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::ViewMounted => {
            // One request per mount; a second cycle may only start once the
            // machine has left `Loading`.
            if matches!(state.fetch(), FetchState::Loading) {
                Vec::new()
            } else {
                let generation = state.begin_fetch();
                vec![Effect::IssueFetch { generation }]
            }
        }
        Msg::ViewUnmounted => {
            state.set_unmounted();
            Vec::new()
        }
        Msg::FetchResolved { generation, result } => {
            // Stale-result suppression: drop resolutions for an unmounted
            // view, a superseded generation, or a machine not in `Loading`.
            let applicable = state.is_mounted()
                && generation == state.generation()
                && matches!(state.fetch(), FetchState::Loading);
            if applicable {
                match result {
                    Ok(artists) => state.resolve_success(artists),
                    Err(info) => state.resolve_failure(info),
                }
            }
            Vec::new()
        }
        Msg::PageRequested(page) => {
            state.request_page(page);
            Vec::new()
        }
        Msg::ThemeToggleClicked => {
            state.toggle_theme();
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
