use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::cube::{Cube, Face};
use crate::grid::TurnDirection;
use crate::orientation::{Axis, Orientation, Sense};

static COMMAND_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<kind>\S)(?P<param>\S)?").unwrap());

/// Where the viewer moves their gaze.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Look {
    Up,
    Down,
    Left,
    Right,
    RollClockwise,
    RollCounterClockwise,
}

impl Look {
    fn from_char(ch: char) -> Option<Look> {
        match ch {
            'U' => Some(Look::Up),
            'D' => Some(Look::Down),
            'L' => Some(Look::Left),
            'R' => Some(Look::Right),
            'C' => Some(Look::RollClockwise),
            'P' => Some(Look::RollCounterClockwise),
            _ => None,
        }
    }

    fn rotation(&self) -> (Axis, Sense) {
        match self {
            Look::Up => (Axis::X, Sense::Positive),
            Look::Down => (Axis::X, Sense::Negative),
            Look::Right => (Axis::Y, Sense::Positive),
            Look::Left => (Axis::Y, Sense::Negative),
            Look::RollClockwise => (Axis::Z, Sense::Positive),
            Look::RollCounterClockwise => (Axis::Z, Sense::Negative),
        }
    }
}

/// A parameter that is missing or unknown is kept as `None`; applying such a
/// command does nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Reorient(Option<Look>),
    Turn(Option<TurnDirection>),
    Unrecognized(char),
}

impl Command {
    /// Returns `None` for blank input.
    pub fn parse(s: &str) -> Option<Command> {
        let captures = COMMAND_RE.captures(s.trim())?;
        let kind = captures["kind"].chars().next()?;
        let param = captures
            .name("param")
            .and_then(|m| m.as_str().chars().next());

        Some(match kind {
            'h' => Command::Help,
            'R' => Command::Reorient(param.and_then(Look::from_char)),
            'T' => Command::Turn(param.and_then(TurnDirection::from_char)),
            other => Command::Unrecognized(other),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreEvent {
    Help,
    Reoriented { facing: Face, up: Face },
    Turned { face: Face, direction: TurnDirection },
    Ignored,
}

/// A cube together with the single viewer looking at it.
#[derive(Debug, Clone)]
pub struct Session {
    cube: Cube,
    camera: Orientation,
}

impl Session {
    pub fn new(cube: Cube) -> Session {
        Session {
            cube,
            camera: Orientation::new(),
        }
    }

    pub fn cube(&self) -> &Cube {
        &self.cube
    }

    pub fn camera(&self) -> &Orientation {
        &self.camera
    }

    pub fn apply_command(&mut self, command: &Command) -> CoreEvent {
        match *command {
            Command::Help => CoreEvent::Help,
            Command::Reorient(Some(look)) => {
                let (axis, sense) = look.rotation();
                self.camera.rotate(axis, sense);
                CoreEvent::Reoriented {
                    facing: self.camera.current_face(),
                    up: self.camera.facing_up(),
                }
            }
            Command::Turn(Some(direction)) => {
                let face = self.camera.current_face();
                self.cube.turn(face, direction);
                CoreEvent::Turned { face, direction }
            }
            Command::Reorient(None) | Command::Turn(None) | Command::Unrecognized(_) => {
                debug!("ignoring {:?}", command);
                CoreEvent::Ignored
            }
        }
    }
}
