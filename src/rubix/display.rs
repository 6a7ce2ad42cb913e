use itertools::Itertools;

use crate::controller::CoreEvent;
use crate::cube::{Cube, Face, Sticker};
use crate::grid::{Grid, TurnDirection};
use crate::orientation::Orientation;

pub const HELP_TEXT: &str = "\
Commands:
  TC  turn the side facing you clockwise
  TP  turn the side facing you counter-clockwise
  RU, RD, RL, RR  look up, down, left or right
  RC, RP  roll your view clockwise or counter-clockwise
  h   show this reference sheet
The cube is solved when every face shows a single colour.";

pub fn render_grid(grid: &Grid<Sticker>) -> String {
    grid.rows().map(|row| row.iter().join(" ")).join("\n")
}

pub fn render_cube(cube: &Cube) -> String {
    Face::ALL
        .iter()
        .map(|face| {
            format!(
                "Face {} ({})\n{}",
                face.index(),
                face,
                render_grid(cube.face(*face))
            )
        })
        .join("\n\n")
}

pub fn render_facing(cube: &Cube, camera: &Orientation) -> String {
    let face = camera.current_face();
    format!(
        "Current side: {} ({}), {} above\n{}",
        face.index(),
        face,
        camera.facing_up(),
        render_grid(cube.face(face))
    )
}

pub fn describe(event: &CoreEvent) -> String {
    match event {
        CoreEvent::Help => HELP_TEXT.to_string(),
        CoreEvent::Reoriented { facing, up } => format!("Now facing {}, {} above", facing, up),
        CoreEvent::Turned { face, direction } => {
            let how = match direction {
                TurnDirection::Clockwise => "clockwise",
                TurnDirection::CounterClockwise => "counter-clockwise",
            };
            format!("Turned {} {}", face, how)
        }
        CoreEvent::Ignored => "Unknown command, type h for help.".to_string(),
    }
}
