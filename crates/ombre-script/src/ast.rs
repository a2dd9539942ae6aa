/// A parsed interaction script: commands in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Script {
    pub commands: Vec<Command>,
}

/// One command and the 1-based line it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    pub line: usize,
    pub kind: CommandKind,
}

/// Pointer data attached to `move` / `dblclick`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pointer {
    /// `X Y`: a mouse event at client coordinates.
    Mouse { x: f64, y: f64 },
    /// `touch X Y`: a touch event with one changed touch point.
    Touch { x: f64, y: f64 },
    /// `none`: an event carrying no coordinate at all.
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisName {
    Vertical,
    Horizontal,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KindName {
    /// `kind linear [ANGLE]`; the angle defaults to 180.
    Linear { angle_deg: f64 },
    /// `kind radial`.
    Radial,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CommandKind {
    /// `bounds X Y W H`: preview surface rectangle in client pixels.
    Bounds { x: f64, y: f64, w: f64, h: f64 },
    /// `axis vertical|horizontal`.
    Axis(AxisName),
    /// `kind linear [ANGLE]` / `kind radial`.
    Kind(KindName),
    /// `press N`: press on the stop created N-th (0-based).
    Press { stop: usize },
    /// `press none`: press on the background.
    PressBackground,
    /// `move POINTER`.
    Move(Pointer),
    /// `release`.
    Release,
    /// `dblclick POINTER`.
    DoubleClick(Pointer),
    /// `click N`.
    Click { stop: usize },
    /// `color CSS...`: the picker reports a new color.
    Color(String),
    /// `render`: print the current gradient.
    Render,
    /// `stops`: print the stops as JSON.
    Stops,
}
