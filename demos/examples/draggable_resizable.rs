// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A floating panel that moves by its title strip and resizes from all eight handles.
//!
//! The panel starts at (300, 400), 200x200, and is limited to 200..=500 on both axes.
//! Only the 50px strip along its top edge drags the body. The pointer script below
//! stands in for a windowing backend.
//!
//! Run:
//! - `cargo run -p understory_demos --example draggable_resizable`

use kurbo::{Point, Rect, Size};
use understory_event_state::drag::PointerId;
use understory_resizable::transform::{Length, TransformOptions};
use understory_resizable::{InlineStyle, Panel, PanelConfig, PanelInput, Surface};

enum Event {
    Down(Point),
    Move(Point),
    Up,
}

fn main() {
    let config = PanelConfig::new(300.0, 400.0, 200.0, 200.0)
        .with_min_size(200.0, 200.0)
        .with_max_size(500.0, 500.0)
        .with_drag_region(Rect::new(0.0, 0.0, 200.0, 50.0));
    let mut panel = match Panel::new(&config, Size::new(1280.0, 1024.0)) {
        Ok(panel) => panel,
        Err(err) => {
            eprintln!("invalid panel config: {err}");
            return;
        }
    };
    panel.attach_surface(InlineStyle::default());
    let mut input = PanelInput::new(&panel);

    println!("handles:");
    for (spec, rect) in panel.handle_regions() {
        println!("  {:?} {:?} cursor={}", spec.handle, rect, spec.cursor.as_css());
    }

    let pointer: Option<PointerId> = None;
    let script = [
        // Grab the drag strip and move the panel by (50, 50).
        Event::Down(Point::new(400.0, 420.0)),
        Event::Move(Point::new(430.0, 440.0)),
        Event::Move(Point::new(450.0, 470.0)),
        Event::Up,
        // Pressing below the strip does nothing.
        Event::Down(Point::new(450.0, 600.0)),
        Event::Up,
        // Bottom-right corner: width grows to 300, height would shrink to 150 and is held.
        Event::Down(Point::new(550.0, 650.0)),
        Event::Move(Point::new(650.0, 600.0)),
        Event::Up,
        // Left edge: pull past the max width; the last accepted width stays.
        Event::Down(Point::new(350.0, 560.0)),
        Event::Move(Point::new(250.0, 560.0)),
        Event::Move(Point::new(100.0, 560.0)),
        Event::Up,
    ];

    for event in script {
        match event {
            Event::Down(at) => {
                let target = input.pointer_down(&mut panel, pointer, at);
                println!("down {at:?} -> {target:?}");
            }
            Event::Move(at) => {
                input.pointer_move(&mut panel, pointer, at);
            }
            Event::Up => {
                input.pointer_up(&mut panel, pointer);
                println!("up: {:?}", panel.geometry());
            }
        }
    }

    // Nudge the panel visually without touching its geometry.
    panel.translate(
        TransformOptions::translate(Length::Px(12.0), Length::Px(0.0))
            .with_duration(300)
            .with_timing_function("ease-out"),
    );
    panel.run_frame();
    if let Some(style) = panel.surface() {
        println!(
            "transform: {} ({:?}ms), box {:?}",
            style.transform,
            style.transition.duration(),
            style.bounding_box()
        );
    }

    panel.clear_transform();
    panel.run_frame();
    if let Some(style) = panel.surface() {
        println!("cleared: {:?}", style.transform);
    }
}
