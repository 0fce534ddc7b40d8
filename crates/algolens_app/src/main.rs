// SPDX-License-Identifier: MIT OR Apache-2.0
//! AlgoLens - terminal driver for the animation state-log engine.
//!
//! Picks a sorting algorithm (command-line argument, resume flag, or
//! bubble sort by default), records a run over a random list and plays
//! it back frame by frame, then demonstrates a graph traversal the same
//! way. Rendering goes through the minimal terminal renderer; the engine
//! itself never touches the clock or the screen.

mod renderer;
mod resume;
mod session;

use algolens_graph::{traversal, Graph};
use algolens_player::{PlaybackController, PlaybackState};
use algolens_sort::algorithms::{SortKind, ALL_KINDS};
use renderer::TermRenderer;
use session::Session;
use std::time::{Duration, Instant};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Demo playback interval; much shorter than the interactive default so
/// a full run stays watchable
const DEMO_INTERVAL: Duration = Duration::from_millis(50);

fn parse_kind(name: &str) -> Option<SortKind> {
    let normalized = name.to_ascii_lowercase();
    ALL_KINDS.into_iter().find(|kind| {
        kind.name()
            .to_ascii_lowercase()
            .split_whitespace()
            .next()
            .is_some_and(|first| first == normalized)
    })
}

fn main() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive("algolens=info".parse().unwrap());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting AlgoLens v{}", env!("CARGO_PKG_VERSION"));

    let resume_dir = std::env::temp_dir().join("algolens");
    let kind = match std::env::args().nth(1) {
        Some(argument) => match parse_kind(&argument) {
            Some(kind) => kind,
            None => {
                tracing::error!(%argument, "unknown algorithm");
                std::process::exit(1);
            }
        },
        None => resume::take_resume_flag(&resume_dir).unwrap_or(SortKind::Bubble),
    };
    if let Err(error) = resume::write_resume_flag(&resume_dir, kind) {
        tracing::warn!(%error, "could not record resume flag");
    }

    let mut renderer = TermRenderer::new();
    let mut session = Session::new(kind);
    tracing::info!(algorithm = kind.name(), "running");

    session.create_random_list(&mut renderer);
    session.set_interval(DEMO_INTERVAL);
    session.run(&mut renderer);
    drive_sort(&mut session, &mut renderer);

    run_traversal_demo(&mut renderer);
}

fn drive_sort(session: &mut Session, renderer: &mut TermRenderer) {
    let mut last = Instant::now();
    while session.playback_state() == PlaybackState::Playing {
        std::thread::sleep(DEMO_INTERVAL / 4);
        let now = Instant::now();
        session.update(now - last, renderer);
        last = now;
    }
    tracing::info!(frames = session.total_frames(), "sort playback finished");
}

fn run_traversal_demo(renderer: &mut TermRenderer) {
    let mut graph = Graph::new();
    let a = graph.add_node();
    let b = graph.add_node();
    let c = graph.add_node();
    let d = graph.add_node();
    graph.connect(a, b).expect("valid nodes");
    graph.connect(a, c).expect("valid nodes");
    graph.connect(b, d).expect("valid nodes");
    graph.connect(c, d).expect("valid nodes");

    let log = match traversal::run(&graph, a) {
        Ok(log) => log,
        Err(error) => {
            tracing::warn!(%error, "traversal produced no log");
            return;
        }
    };

    let mut controller = PlaybackController::new();
    controller.load(log);
    controller.set_interval(DEMO_INTERVAL);
    controller.play(renderer);

    let mut last = Instant::now();
    while controller.state() == PlaybackState::Playing {
        std::thread::sleep(DEMO_INTERVAL / 4);
        let now = Instant::now();
        controller.update(now - last, renderer);
        last = now;
    }
    tracing::info!(
        frames = controller.total_frames(),
        "traversal playback finished"
    );
}
