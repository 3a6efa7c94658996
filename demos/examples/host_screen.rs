// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted host screen.
//!
//! Loads a panel into a container, replays one drag on its handle and prints the
//! panel's top edge every frame until it comes to rest.
//!
//! Run:
//! - `cargo run -p draggable_panel_demos --example host_screen -- --drag 740,600,400`
//! - `RUST_LOG=trace cargo run -p draggable_panel_demos --example host_screen -- --open --drag 70,300,500 --hold-ms 400`

use std::error::Error;

use clap::Parser;
use draggable_panel::{PanelConfig, SpringConfig};
use draggable_panel_demos::HostScreen;
use kurbo::{Point, Rect};

const FRAME: f64 = 1.0 / 60.0;
const SAMPLE_MS: u64 = 16;

#[derive(Parser, Debug)]
#[command(about = "Replay a drag on a draggable panel and print its motion")]
struct Args {
    /// Container width.
    #[arg(long, default_value_t = 390.0)]
    width: f64,
    /// Container height.
    #[arg(long, default_value_t = 800.0)]
    height: f64,
    /// Handle strip height.
    #[arg(long, default_value_t = 40.0)]
    handle: f64,
    /// Gap below the handle when closed.
    #[arg(long, default_value_t = draggable_panel::DEFAULT_MARGIN)]
    margin: f64,
    /// Spring duration in seconds.
    #[arg(long, default_value_t = default_duration())]
    duration: f64,
    /// Open the panel before the drag.
    #[arg(long)]
    open: bool,
    /// Pointer y positions, the first being the press on the handle.
    #[arg(long, value_delimiter = ',', required = true)]
    drag: Vec<f64>,
    /// Time the pointer rests on the last position before release.
    #[arg(long, default_value_t = 0)]
    hold_ms: u64,
}

fn default_duration() -> f64 {
    SpringConfig::default().duration
}

fn settle(screen: &mut HostScreen) {
    let mut t = 0.0;
    while screen.panel().is_animating() {
        screen.tick(FRAME);
        t += FRAME;
        if let Some(frame) = screen.panel().frame() {
            println!("t={t:.3}s y={:.1}", frame.y0);
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let config = PanelConfig::default()
        .with_margin(args.margin)
        .with_spring(SpringConfig::default().with_duration(args.duration));
    let container = Rect::new(0.0, 0.0, args.width, args.height);
    let mut screen = HostScreen::new(container, args.handle, config);
    screen.load()?;

    if args.open {
        screen.panel_mut().open();
        settle(&mut screen);
    }

    let x = args.width / 2.0;
    let (first, rest) = args
        .drag
        .split_first()
        .ok_or("--drag needs at least one position")?;
    if !screen.pointer_down(Point::new(x, *first), 0) {
        return Err(format!("y = {first} is not on the handle").into());
    }
    let mut time = 0;
    for y in rest {
        time += SAMPLE_MS;
        screen.pointer_move(Point::new(x, *y), time);
        println!("drag y={y:.1}");
    }
    let last = rest.last().unwrap_or(first);
    screen.pointer_up(Point::new(x, *last), time + args.hold_ms);
    settle(&mut screen);

    println!(
        "rest: {} at y={:.1}",
        if screen.panel().is_open() { "open" } else { "closed" },
        screen.panel().frame().map_or(f64::NAN, |frame| frame.y0)
    );
    Ok(())
}
