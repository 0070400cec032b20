use std::sync::{mpsc, Arc};
use std::thread;

use grid_logging::grid_debug;

use crate::fetch::{ArtistFetcher, FetchSettings, ReqwestFetcher};
use crate::{EngineEvent, FetchGeneration, RequestDescriptor};

enum EngineCommand {
    Issue {
        generation: FetchGeneration,
        descriptor: RequestDescriptor,
    },
}

/// Bridge between the synchronous UI loop and the async fetch: commands go
/// in over a channel, completion events come back out over another.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let fetcher = Arc::new(ReqwestFetcher::new(settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let fetcher = fetcher.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(fetcher.as_ref(), command, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn issue(&self, generation: FetchGeneration, descriptor: RequestDescriptor) {
        grid_debug!(
            "issue fetch generation={} artist={}",
            generation,
            descriptor.artist
        );
        let _ = self.cmd_tx.send(EngineCommand::Issue {
            generation,
            descriptor,
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    fetcher: &dyn ArtistFetcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Issue {
            generation,
            descriptor,
        } => {
            let result = fetcher.fetch(&descriptor).await;
            // The receiver may be gone if the app shut down mid-flight;
            // the result is simply discarded then.
            let _ = event_tx.send(EngineEvent::FetchCompleted { generation, result });
        }
    }
}
