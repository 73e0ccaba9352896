use std::collections::BTreeMap;
use std::time::Duration;

use anyhow::Context;
use clockface_engine::logging::{init_logging, LoggingConfig};
use clockface_engine::scene::{DrawCmd, DrawList};
use clockface_ui::prelude::*;
use tokio::time::{self, Instant};

/// How long the demo keeps the clock mounted.
const RUN_FOR: Duration = Duration::from_secs(3);
const VIEWPORT: Vec2 = Vec2::new(480.0, 480.0);
const TEXT_SIZE: f32 = 24.0;

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_time()
        .build()
        .context("failed to start the tokio runtime")?;

    runtime.block_on(run())
}

async fn run() -> anyhow::Result<()> {
    let mut scene = UiScene::new();
    let font = match load_font() {
        Some(bytes) => scene
            .load_font(&bytes)
            .context("system font is not a valid TrueType file")?,
        None => {
            log::warn!("no system font found, text will not be measured");
            FontId::default()
        }
    };

    let clock = AnalogClock::mount(&tokio::runtime::Handle::current(), font, TEXT_SIZE);
    let mut changes = clock.subscribe();
    let root: Element = clock.into();
    log::info!("clock mounted at {}x{}", VIEWPORT.x, VIEWPORT.y);

    let deadline = Instant::now() + RUN_FOR;
    let mut frames = 0usize;
    let mut reported_second = None;

    loop {
        match time::timeout_at(deadline, changes.changed()).await {
            Err(_) => break,
            Ok(Err(_)) => {
                log::warn!("sampler stopped before the demo ended");
                break;
            }
            Ok(Ok(())) => {}
        }

        let state = *changes.borrow_and_update();
        let draw_list = scene.frame_ref(&root, VIEWPORT);
        frames += 1;

        // One summary per clock second is enough to follow the hands.
        let second = (state.second_angle / 6.0) as u32;
        if reported_second != Some(second) {
            reported_second = Some(second);
            report(draw_list, state);
        }
    }

    drop(root);
    log::info!("clock unmounted after {frames} frames");
    Ok(())
}

/// Logs the frame in paint order: command counts and how far the ticks and
/// hands reach from the face center.
fn report(draw_list: &mut DrawList, state: ClockState) {
    let center = VIEWPORT / 2.0;
    let mut kinds: BTreeMap<&'static str, usize> = BTreeMap::new();
    let mut reach = 0.0_f32;

    for item in draw_list.iter_in_paint_order() {
        *kinds.entry(item.cmd.kind()).or_default() += 1;
        let extent = match &item.cmd {
            DrawCmd::Rect(rect) => rect
                .corners()
                .iter()
                .map(|&corner| (corner - center).length())
                .fold(0.0, f32::max),
            DrawCmd::Line(line) => (line.end - center).length(),
            _ => 0.0,
        };
        reach = reach.max(extent);
    }

    log::info!(
        "h={:6.2}° m={:6.2}° s={:6.2}° {} | {} cmds {:?}, reach {:.1}px",
        state.hour_angle,
        state.minute_angle,
        state.second_angle,
        if state.is_day { "day" } else { "night" },
        draw_list.len(),
        kinds,
        reach,
    );
}

fn load_font() -> Option<Vec<u8>> {
    [
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/noto/NotoSans-Regular.ttf",
        "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    ]
    .iter()
    .find_map(|p| std::fs::read(p).ok())
}
