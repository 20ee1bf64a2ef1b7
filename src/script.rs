//! Gesture scripts for the headless shell.
//!
//! A script is plain text with one action per line. Blank lines and `#`
//! comments are ignored:
//!
//! ```text
//! tool rectangle
//! fill on
//! press 10 10
//! move 40 60
//! release
//! save-as out/box.png
//! ```
//!
//! `press`/`move` take image-space `ROW COL`; `pointer-down`/`pointer-move`
//! take screen-space `X Y` and are divided by the current zoom.

use crate::document::{Document, DocumentError, SavePrompt};
use crate::draw::{Color, RenderError};
use crate::input::{Point, SketchSession, ToolKind};
use crate::util;
use log::{debug, info, warn};
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while parsing or replaying a script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("line {line}: {source}")]
    Render {
        line: usize,
        #[source]
        source: RenderError,
    },

    #[error("line {line}: {source}")]
    Document {
        line: usize,
        #[source]
        source: DocumentError,
    },
}

/// One scripted input event or control change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Press(Point),
    Move(Point),
    Release,
    Cancel,
    PointerDown { x: i32, y: i32 },
    PointerMove { x: i32, y: i32 },
    Undo,
    Tool(ToolKind),
    Fill(bool),
    Centre(bool),
    Freehand(bool),
    Thickness(u32),
    Color(Color),
    Zoom(u32),
    Save,
    SaveAs(PathBuf),
}

impl FromStr for Action {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let command = words.next().ok_or_else(|| "empty line".to_string())?;
        let args: Vec<&str> = words.collect();

        let action = match command.to_lowercase().as_str() {
            "press" => Action::Press(point(&args)?),
            "move" => Action::Move(point(&args)?),
            "release" => no_args(&args, Action::Release)?,
            "cancel" => no_args(&args, Action::Cancel)?,
            "pointer-down" => {
                let (x, y) = pair(&args)?;
                Action::PointerDown { x, y }
            }
            "pointer-move" => {
                let (x, y) = pair(&args)?;
                Action::PointerMove { x, y }
            }
            "undo" => no_args(&args, Action::Undo)?,
            "tool" => Action::Tool(single(&args)?.parse()?),
            "fill" => Action::Fill(switch(single(&args)?)?),
            "centre" | "center" => Action::Centre(switch(single(&args)?)?),
            "freehand" => Action::Freehand(switch(single(&args)?)?),
            "thickness" => Action::Thickness(number(single(&args)?)?),
            "color" | "colour" => {
                let spec = single(&args)?;
                Action::Color(
                    util::parse_color(spec).ok_or_else(|| format!("Unknown color '{spec}'"))?,
                )
            }
            "zoom" => Action::Zoom(number(single(&args)?)?),
            "save" => no_args(&args, Action::Save)?,
            "save-as" => {
                // paths may contain spaces
                if args.is_empty() {
                    return Err("save-as expects a path".to_string());
                }
                Action::SaveAs(PathBuf::from(args.join(" ")))
            }
            other => return Err(format!("Unknown command '{other}'")),
        };
        Ok(action)
    }
}

fn no_args(args: &[&str], action: Action) -> Result<Action, String> {
    if args.is_empty() {
        Ok(action)
    } else {
        Err(format!("unexpected arguments: {}", args.join(" ")))
    }
}

fn single<'a>(args: &[&'a str]) -> Result<&'a str, String> {
    match args {
        [value] => Ok(value),
        _ => Err(format!("expected 1 argument, got {}", args.len())),
    }
}

fn pair(args: &[&str]) -> Result<(i32, i32), String> {
    match args {
        [a, b] => Ok((number(a)?, number(b)?)),
        _ => Err(format!("expected 2 arguments, got {}", args.len())),
    }
}

fn point(args: &[&str]) -> Result<Point, String> {
    let (row, col) = pair(args)?;
    Ok(Point::new(row, col))
}

fn number<T: FromStr>(text: &str) -> Result<T, String> {
    text.parse()
        .map_err(|_| format!("'{text}' is not a valid number"))
}

fn switch(text: &str) -> Result<bool, String> {
    match text.to_lowercase().as_str() {
        "on" | "true" | "yes" => Ok(true),
        "off" | "false" | "no" => Ok(false),
        other => Err(format!("expected on/off, got '{other}'")),
    }
}

/// Cuts a `# comment`. A `#` opens a comment at the start of a line or after
/// whitespace, except when the word is a colour such as `#ff8000`.
fn strip_comment(raw: &str) -> &str {
    for (index, c) in raw.char_indices() {
        if c != '#' {
            continue;
        }
        let before = &raw[..index];
        if before.trim().is_empty() {
            return before;
        }
        if !before.ends_with(char::is_whitespace) {
            continue;
        }
        let word = raw[index..].split_whitespace().next().unwrap_or_default();
        if Color::from_hex(word).is_none() {
            return before;
        }
    }
    raw
}

/// A parsed script: actions tagged with their 1-based source line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    steps: Vec<(usize, Action)>,
}

impl Script {
    /// Parses a whole script, stopping at the first bad line.
    pub fn parse(text: &str) -> Result<Self, ScriptError> {
        let mut steps = Vec::new();
        for (index, raw) in text.lines().enumerate() {
            let line = index + 1;
            let content = strip_comment(raw).trim();
            if content.is_empty() {
                continue;
            }
            let action = content
                .parse::<Action>()
                .map_err(|message| ScriptError::Parse { line, message })?;
            steps.push((line, action));
        }
        debug!("Parsed script with {} actions", steps.len());
        Ok(Self { steps })
    }

    /// Replays every action against `session`.
    ///
    /// `save` and `save-as` write the committed image through `document`;
    /// untitled saves ask `prompt` for a path.
    pub fn run(
        &self,
        session: &mut SketchSession,
        document: &mut Document,
        prompt: &mut dyn SavePrompt,
    ) -> Result<(), ScriptError> {
        info!("Replaying {} actions", self.steps.len());
        for (line, action) in &self.steps {
            apply(action, session, document, prompt).map_err(|err| err.at(*line))?;
        }
        Ok(())
    }
}

enum StepError {
    Render(RenderError),
    Document(DocumentError),
}

impl StepError {
    fn at(self, line: usize) -> ScriptError {
        match self {
            StepError::Render(source) => ScriptError::Render { line, source },
            StepError::Document(source) => ScriptError::Document { line, source },
        }
    }
}

impl From<RenderError> for StepError {
    fn from(err: RenderError) -> Self {
        StepError::Render(err)
    }
}

impl From<DocumentError> for StepError {
    fn from(err: DocumentError) -> Self {
        StepError::Document(err)
    }
}

fn apply(
    action: &Action,
    session: &mut SketchSession,
    document: &mut Document,
    prompt: &mut dyn SavePrompt,
) -> Result<(), StepError> {
    match action {
        Action::Press(point) => session.press(*point)?,
        Action::Move(point) => session.move_to(*point)?,
        Action::Release => session.release()?,
        Action::Cancel => session.cancel()?,
        Action::PointerDown { x, y } => session.pointer_down(*x, *y)?,
        Action::PointerMove { x, y } => session.pointer_move(*x, *y)?,
        Action::Undo => session.undo()?,
        Action::Tool(kind) => session.select_tool(*kind),
        Action::Fill(fill) => {
            if !session.set_fill(*fill) {
                warn!("The {} tool has no fill option", session.tools.selected);
            }
        }
        Action::Centre(centered) => session.set_centered(*centered),
        Action::Freehand(freehand) => session.set_freehand(*freehand),
        Action::Thickness(thickness) => session.set_thickness(*thickness),
        Action::Color(color) => {
            session.set_color(*color);
            debug!("Color set to {}", util::color_label(color));
        }
        Action::Zoom(zoom) => session.set_zoom(*zoom),
        Action::Save => {
            if document.save(session.image(), prompt)?.is_some() {
                info!("{}", document.title());
            }
        }
        Action::SaveAs(path) => {
            let mut target = crate::document::FixedPath(Some(path.clone()));
            if document.save_as(session.image(), &mut target)?.is_some() {
                info!("{}", document.title());
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{FixedPath, load_image};
    use crate::draw::{BLUE, GREEN, Raster, WHITE};
    use crate::input::{Style, ToolBox};

    fn session() -> SketchSession {
        let style = Style {
            thickness: 1,
            color: BLUE,
            freehand: false,
            zoom: 1,
        };
        SketchSession::new(
            Raster::blank(40, 30, WHITE).unwrap(),
            style,
            ToolBox::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_parse_skips_comments_and_blank_lines() {
        let script = Script::parse(
            "# a square\n\ntool rect   # box tool\npress 1 2\nmove 3 4\nrelease\n",
        )
        .unwrap();
        let actions: Vec<_> = script.steps.iter().map(|(_, action)| action.clone()).collect();
        assert_eq!(
            actions,
            vec![
                Action::Tool(ToolKind::Rectangle),
                Action::Press(Point::new(1, 2)),
                Action::Move(Point::new(3, 4)),
                Action::Release,
            ]
        );
    }

    #[test]
    fn test_hex_colors_are_not_comments() {
        let script = Script::parse("color #00ff00 # green
#comment
").unwrap();
        let actions: Vec<_> = script.steps.iter().map(|(_, action)| action.clone()).collect();
        assert_eq!(actions, vec![Action::Color(GREEN)]);
    }

    #[test]
    fn test_comment_without_space_after_hash() {
        let script = Script::parse("press 1 2 #note\ncolor #00ff00 #green\n").unwrap();
        let actions: Vec<_> = script.steps.iter().map(|(_, action)| action.clone()).collect();
        assert_eq!(
            actions,
            vec![Action::Press(Point::new(1, 2)), Action::Color(GREEN)]
        );

        assert_eq!(strip_comment("#ff0000 is red"), "");
        assert_eq!(strip_comment("move 3 4#5"), "move 3 4#5");
    }

    #[test]
    fn test_color_action_sets_session_color() {
        let mut session = session();
        Script::parse("color #123456\ncolor green\n")
            .unwrap()
            .run(&mut session, &mut Document::untitled(), &mut FixedPath(None))
            .unwrap();
        assert_eq!(session.style.color, GREEN);
    }

    #[test]
    fn test_huge_zoom_is_clamped() {
        let mut session = session();
        Script::parse("zoom 50000000")
            .unwrap()
            .run(&mut session, &mut Document::untitled(), &mut FixedPath(None))
            .unwrap();
        assert_eq!(session.style.zoom, crate::input::MAX_ZOOM);
        assert!(session.display().is_ok());
    }

    #[test]
    fn test_parse_controls() {
        assert_eq!("fill on".parse::<Action>(), Ok(Action::Fill(true)));
        assert_eq!("center off".parse::<Action>(), Ok(Action::Centre(false)));
        assert_eq!("freehand yes".parse::<Action>(), Ok(Action::Freehand(true)));
        assert_eq!("thickness 12".parse::<Action>(), Ok(Action::Thickness(12)));
        assert_eq!("color green".parse::<Action>(), Ok(Action::Color(GREEN)));
        assert_eq!("color #0000ff".parse::<Action>(), Ok(Action::Color(BLUE)));
        assert_eq!("zoom 3".parse::<Action>(), Ok(Action::Zoom(3)));
        assert_eq!(
            "pointer-down 8 -2".parse::<Action>(),
            Ok(Action::PointerDown { x: 8, y: -2 })
        );
        assert_eq!(
            "save-as my picture".parse::<Action>(),
            Ok(Action::SaveAs(PathBuf::from("my picture")))
        );
    }

    #[test]
    fn test_parse_error_reports_line() {
        let err = Script::parse("press 1 1\nrelease\nmove 4\n").unwrap_err();
        assert!(matches!(err, ScriptError::Parse { line: 3, .. }));
        assert!(err.to_string().starts_with("line 3:"));

        let err = Script::parse("wiggle").unwrap_err();
        assert!(err.to_string().contains("Unknown command 'wiggle'"));

        let err = Script::parse("thickness -2").unwrap_err();
        assert!(err.to_string().contains("not a valid number"));

        let err = Script::parse("release now").unwrap_err();
        assert!(err.to_string().contains("unexpected arguments"));
    }

    #[test]
    fn test_run_draws_and_undoes() {
        let mut session = session();
        let mut document = Document::untitled();
        let script = Script::parse("press 5 2\nmove 5 30\nrelease\nundo\n").unwrap();
        script
            .run(&mut session, &mut document, &mut FixedPath(None))
            .unwrap();
        assert_eq!(session.pixel(15, 5).unwrap(), Some(WHITE));

        Script::parse("undo")
            .unwrap()
            .run(&mut session, &mut document, &mut FixedPath(None))
            .unwrap();
        assert_eq!(session.pixel(15, 5).unwrap(), Some(BLUE));
    }

    #[test]
    fn test_run_save_as_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("line");
        let text = format!(
            "press 5 2\nmove 5 30\nrelease\nsave-as {}\n",
            target.display()
        );
        let mut session = session();
        let mut document = Document::untitled();
        Script::parse(&text)
            .unwrap()
            .run(&mut session, &mut document, &mut FixedPath(None))
            .unwrap();

        let saved = dir.path().join("line.png");
        assert_eq!(document.path(), Some(saved.as_path()));
        let mut image = load_image(&saved).unwrap();
        assert_eq!(image.pixel(15, 5).unwrap(), Some(BLUE));
    }

    #[test]
    fn test_untitled_save_with_dismissed_prompt_does_nothing() {
        let mut session = session();
        let mut document = Document::untitled();
        Script::parse("save")
            .unwrap()
            .run(&mut session, &mut document, &mut FixedPath(None))
            .unwrap();
        assert!(document.path().is_none());
    }

    #[test]
    fn test_save_failure_reports_line() {
        let dir = tempfile::tempdir().unwrap();
        let text = format!("release\nsave-as {}\n", dir.path().join("no/such/dir/x").display());
        let err = Script::parse(&text)
            .unwrap()
            .run(&mut session(), &mut Document::untitled(), &mut FixedPath(None))
            .unwrap_err();
        assert!(matches!(err, ScriptError::Document { line: 2, .. }));
    }
}
