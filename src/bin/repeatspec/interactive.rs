//! Selecting a track by asking an operator.

use std::io;
use std::io::BufRead;
use std::io::Write;

use repeatspec::selection::Choice;
use repeatspec::selection::Selection;
use repeatspec::selection::Selector;
use repeatspec::Survey;
use repeatspec::Track;
use tabled::settings::Style;
use tabled::Table;
use tabled::Tabled;

/// The instructions shown alongside the matched tracks.
const MATCHED_INSTRUCTIONS: &str = "Choose a repeat track by typing <unit>,<count> (e.g., GAA,7):
  - type `max` for the largest matched track
  - type `more` if the list is empty or to see every track in the region";

/// The instructions shown alongside every track in the region.
const ALL_INSTRUCTIONS: &str = "Choose a repeat track by typing <unit>,<count> from every track \
                                in the region:
  - type `none` if there is no suitable track";

/// A row within a table of tracks.
#[derive(Tabled)]
struct Row {
    /// The repeat unit.
    unit: String,

    /// The number of copies of the unit.
    count: usize,

    /// The offset of the track within the region's sequence.
    offset: String,

    /// How the track matched the motif.
    #[tabled(rename = "match")]
    kind: &'static str,
}

impl Row {
    /// Creates a row for `track`.
    fn new(track: &Track, kind: &'static str) -> Self {
        Self {
            unit: track.unit().to_string(),
            count: track.count(),
            offset: track
                .start()
                .map(|start| start.to_string())
                .unwrap_or_default(),
            kind,
        }
    }
}

/// Renders `rows` as a table.
fn render(rows: Vec<Row>) -> String {
    if rows.is_empty() {
        return String::from("(no tracks)");
    }

    Table::new(rows).with(Style::modern()).to_string()
}

/// A [`Selector`] that prompts an operator.
pub struct Interactive<R, W> {
    /// Where the operator's answers are read from.
    reader: R,

    /// Where prompts are written to.
    writer: W,
}

impl<R, W> Interactive<R, W>
where
    R: BufRead,
    W: Write,
{
    /// Creates a new interactive selector.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Reads a single line from the operator.
    ///
    /// Returns [`None`] at the end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut line = String::new();
        match self.reader.read_line(&mut line)? {
            0 => Ok(None),
            _ => Ok(Some(line)),
        }
    }

    /// Prompts until the operator makes a valid [`Choice`].
    ///
    /// Returns [`None`] at the end of input.
    fn choose(&mut self) -> io::Result<Option<Choice>> {
        loop {
            let line = match self.read_line("> ")? {
                Some(line) => line,
                None => return Ok(None),
            };

            match line.parse::<Choice>() {
                Ok(choice) => return Ok(Some(choice)),
                Err(err) => writeln!(self.writer, "error: {err}")?,
            }
        }
    }

    /// Asks the operator a yes or no question.
    ///
    /// The end of input is treated as "no".
    pub fn confirm(&mut self, question: &str) -> io::Result<bool> {
        loop {
            let line = match self.read_line(&format!("{question} [y] or [n]: "))? {
                Some(line) => line,
                None => return Ok(false),
            };

            match line.trim().to_ascii_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => writeln!(self.writer, "please answer `y` or `n`")?,
            }
        }
    }

    /// Writes a message to the operator.
    pub fn show(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.writer, "{message}")
    }
}

impl<R, W> Selector for Interactive<R, W>
where
    R: BufRead,
    W: Write,
{
    type Error = io::Error;

    fn select(&mut self, survey: &Survey) -> Result<Selection, Self::Error> {
        let matches = survey.matches();
        let rows = matches
            .exact()
            .iter()
            .map(|track| Row::new(track, "exact"))
            .chain(
                matches
                    .approximate()
                    .iter()
                    .map(|track| Row::new(track, "approximate")),
            )
            .collect::<Vec<_>>();

        writeln!(self.writer, "{MATCHED_INSTRUCTIONS}\n\n{}", render(rows))?;

        match self.choose()? {
            Some(choice) => {
                if let Some(selection) = choice.resolve(survey.candidates()) {
                    return Ok(selection);
                }
            }
            None => return Ok(Selection::None),
        }

        let rows = survey
            .tracks()
            .iter()
            .map(|track| Row::new(track, ""))
            .collect::<Vec<_>>();

        writeln!(self.writer, "{ALL_INSTRUCTIONS}\n\n{}", render(rows))?;

        loop {
            match self.choose()? {
                Some(choice) => {
                    if let Some(selection) = choice.resolve(survey.tracks()) {
                        return Ok(selection);
                    }

                    writeln!(self.writer, "every track in the region is already shown")?;
                }
                None => return Ok(Selection::None),
            }
        }
    }
}
