use super::Angle;
use crate::error::{AngleError, FormatIssue};

/// Parse `D:M:S` or `D M S` (colons and whitespace may be mixed).
///
/// Leading and trailing whitespace is ignored, colons count as whitespace,
/// and runs of whitespace separate components. A separator at either end
/// (`"1:2:3:"`) leaves an empty component and fails.
pub fn parse_dms(text: &str) -> Result<Angle, AngleError> {
    let normalized = text.trim().replace(':', " ");
    if normalized.is_empty() {
        return Err(AngleError::format(text, FormatIssue::Empty));
    }
    let tokens = split_runs(&normalized);
    if tokens.len() != 3 {
        return Err(AngleError::format(text, FormatIssue::TokenCount(tokens.len())));
    }
    let mut parts = [0i64; 3];
    for (slot, tok) in parts.iter_mut().zip(&tokens) {
        *slot = tok
            .parse::<i64>()
            .map_err(|_| AngleError::format(text, FormatIssue::NotInteger(tok.to_string())))?;
    }
    let [d, m, s] = parts;
    Angle::new(d, m, s).map_err(|issue| AngleError::format(text, issue))
}

/// Parse an ordered list of input fields.
///
/// Failures are wrapped in [`AngleError::Field`] carrying the 1-based index of
/// the offending field. Stops at the first failure.
pub fn parse_angle_fields<I, S>(fields: I) -> Result<Vec<Angle>, AngleError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    fields
        .into_iter()
        .enumerate()
        .map(|(i, text)| {
            parse_dms(text.as_ref()).map_err(|e| AngleError::Field {
                index: i + 1,
                source: Box::new(e),
            })
        })
        .collect()
}

/// Split on whitespace runs. Interior runs collapse; an empty piece at either
/// end is kept so that dangling separators are reported.
fn split_runs(s: &str) -> Vec<&str> {
    let pieces: Vec<&str> = s.split(char::is_whitespace).collect();
    let last = pieces.len() - 1;
    pieces
        .into_iter()
        .enumerate()
        .filter(|(i, p)| !p.is_empty() || *i == 0 || *i == last)
        .map(|(_, p)| p)
        .collect()
}
