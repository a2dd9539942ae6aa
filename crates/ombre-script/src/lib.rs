//! Lexer and parser for **ombre interaction scripts**.
//!
//! A script is a list of recorded pointer and picker events, one per line,
//! replayed against a gradient creator by `ombre-studio`. This crate is
//! dependency-free; it only turns text into [`Command`]s.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`ast`] | `Script`, `Command`, `CommandKind`, `Pointer` |
//! | [`error`] | `ParseError` |
//! | [`lexer`] | `Lexer`, `Token` |
//! | [`parser`] | `parse_str` entry point |
//!
//! # Quick start
//!
//! ```rust
//! use ombre_script::{parse_str, CommandKind};
//!
//! let src = "
//!     bounds 0 0 40 200   // preview bar
//!     press 0
//!     move 20 100
//!     release
//!     color rgb(255, 0, 0)
//! ";
//!
//! let script = parse_str(src).unwrap();
//! assert_eq!(script.commands.len(), 5);
//! assert_eq!(script.commands[1].kind, CommandKind::Press { stop: 0 });
//! ```

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;

pub use ast::{AxisName, Command, CommandKind, KindName, Pointer, Script};
pub use error::ParseError;
pub use parser::parse_str;

#[cfg(test)]
mod parse_tests {
    use super::*;

    fn ok(src: &str) -> Vec<CommandKind> {
        parse_str(src).unwrap().commands.into_iter().map(|c| c.kind).collect()
    }
    fn err(src: &str) -> ParseError { parse_str(src).unwrap_err() }

    #[test] fn empty_script() { assert!(ok("").is_empty()); }
    #[test] fn blank_lines_and_comments() { assert!(ok("\n\n// nothing\n   \n").is_empty()); }
    #[test] fn bounds() {
        assert_eq!(ok("bounds 10 20 40 200"), vec![CommandKind::Bounds { x: 10.0, y: 20.0, w: 40.0, h: 200.0 }]);
    }
    #[test] fn axis() {
        assert_eq!(ok("axis horizontal"), vec![CommandKind::Axis(AxisName::Horizontal)]);
    }
    #[test] fn kind_defaults_to_top_to_bottom() {
        assert_eq!(ok("kind linear"), vec![CommandKind::Kind(KindName::Linear { angle_deg: 180.0 })]);
        assert_eq!(ok("kind linear 45"), vec![CommandKind::Kind(KindName::Linear { angle_deg: 45.0 })]);
        assert_eq!(ok("kind radial"), vec![CommandKind::Kind(KindName::Radial)]);
    }
    #[test] fn press_stop_and_background() {
        assert_eq!(ok("press 3\npress none"), vec![CommandKind::Press { stop: 3 }, CommandKind::PressBackground]);
    }
    #[test] fn pointers() {
        assert_eq!(
            ok("move 1 2\nmove touch 3 4\nmove none"),
            vec![
                CommandKind::Move(Pointer::Mouse { x: 1.0, y: 2.0 }),
                CommandKind::Move(Pointer::Touch { x: 3.0, y: 4.0 }),
                CommandKind::Move(Pointer::Empty),
            ]
        );
    }
    #[test] fn dblclick_click_release() {
        assert_eq!(
            ok("dblclick 5 66\nclick 2\nrelease"),
            vec![
                CommandKind::DoubleClick(Pointer::Mouse { x: 5.0, y: 66.0 }),
                CommandKind::Click { stop: 2 },
                CommandKind::Release,
            ]
        );
    }
    #[test] fn color_keeps_css_verbatim() {
        assert_eq!(ok("color rgba(0, 0, 0, 0.5)"), vec![CommandKind::Color("rgba(0, 0, 0, 0.5)".into())]);
    }
    #[test] fn render_and_stops() {
        assert_eq!(ok("render // now\nstops"), vec![CommandKind::Render, CommandKind::Stops]);
    }
    #[test] fn line_numbers_are_recorded() {
        let script = parse_str("\n\nrelease").unwrap();
        assert_eq!(script.commands[0].line, 3);
    }
    #[test] fn err_unknown_command() {
        let e = err("release\nteleport 1");
        assert_eq!((e.line, e.col), (2, 1));
    }
    #[test] fn err_missing_argument() { err("bounds 1 2 3"); }
    #[test] fn err_trailing_token() { err("release 4"); }
    #[test] fn err_fractional_index() { err("press 1.5"); }
    #[test] fn err_negative_index() { err("click -1"); }
    #[test] fn err_empty_color() { err("color   // nothing"); }
    #[test] fn err_empty_color_points_past_the_command() {
        let e = err("release\n  color\nrender");
        assert_eq!((e.line, e.col), (2, 8));
    }
    #[test] fn err_bad_axis() { err("axis diagonal"); }
    #[test] fn error_display_has_position() {
        assert_eq!(err("jump").to_string(), "script error at 1:1: unknown command \"jump\"");
    }
}
