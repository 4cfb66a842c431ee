use std::io::BufRead;

use nom::{
    bytes::complete::take_while1,
    character::complete::line_ending,
    multi::separated_list1,
    IResult,
};
use nom_locate::LocatedSpan;

use crate::{error::GridError, error::ParseError, grid::Grid};

type Span<'a> = LocatedSpan<&'a str>;

/// Parses rows up to the first blank line or the end of input.
///
/// # Errors
/// * [`ParseError::InvalidChar`] for a byte outside printable ASCII
/// * [`ParseError::Malformed`] when the rows do not form a grid
#[tracing::instrument(skip(input))]
pub fn parse_grid(input: &str) -> Result<Grid, ParseError> {
    let (rest, rows) = match parse_rows(Span::new(input)) {
        Ok(parsed) => parsed,
        Err(_) => return Err(first_row_error(input)),
    };

    if let Some(offset) = unparsed_offset(rest) {
        return Err(ParseError::InvalidChar {
            src: input.to_string(),
            span: (offset, 1).into(),
        });
    }

    tracing::debug!("Parsed {} rows", rows.len());

    Grid::from_lines(rows.iter().map(|row| row.fragment().as_bytes())).map_err(|cause| {
        let span = match &cause {
            GridError::RaggedRow { row, .. } => rows
                .get(*row)
                .map_or((0, 0), |row| (row.location_offset(), row.fragment().len())),
            _ => (0, 0),
        };
        ParseError::Malformed {
            src: input.to_string(),
            span: span.into(),
            cause,
        }
    })
}

/// Collects lines from `reader` up to and including the first blank line.
/// The blank line is kept so a leading one still reaches the parser.
pub fn read_grid_text<R: BufRead>(reader: R) -> std::io::Result<String> {
    let mut text = String::new();
    for line in reader.lines() {
        let line = line?;
        text.push_str(&line);
        text.push('\n');
        if line.is_empty() {
            break;
        }
    }
    Ok(text)
}

fn is_grid_char(c: char) -> bool {
    c.is_ascii() && !c.is_ascii_control()
}

fn parse_row(input: Span) -> IResult<Span, Span> {
    take_while1(is_grid_char)(input)
}

fn parse_rows(input: Span) -> IResult<Span, Vec<Span>> {
    separated_list1(line_ending, parse_row)(input)
}

fn starts_with_line_ending(input: Span) -> bool {
    line_ending::<_, nom::error::Error<Span>>(input).is_ok()
}

/// Where the rows stopped on something other than the end of input,
/// a trailing line ending or a blank line.
fn unparsed_offset(rest: Span) -> Option<usize> {
    if rest.fragment().is_empty() {
        return None;
    }
    match line_ending::<_, nom::error::Error<Span>>(rest) {
        Ok((after, _)) if after.fragment().is_empty() || starts_with_line_ending(after) => None,
        Ok((after, _)) => Some(after.location_offset()),
        Err(_) => Some(rest.location_offset()),
    }
}

fn first_row_error(input: &str) -> ParseError {
    let cause = if input.is_empty() {
        GridError::Empty
    } else if starts_with_line_ending(Span::new(input)) {
        GridError::EmptyRow
    } else {
        return ParseError::InvalidChar {
            src: input.to_string(),
            span: (0, 1).into(),
        };
    };

    ParseError::Malformed {
        src: input.to_string(),
        span: (0, 0).into(),
        cause,
    }
}
