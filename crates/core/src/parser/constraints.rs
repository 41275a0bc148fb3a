use crate::types::ConstraintToken;

/// Parse a constraint list into xcodebuild filter flags
///
/// Newlines and commas are interchangeable separators. Blank entries are
/// dropped; everything else is passed through untouched with a leading `-`.
pub fn parse_constraints(raw: &str) -> Vec<ConstraintToken> {
    let tokens: Vec<ConstraintToken> = raw
        .lines()
        .flat_map(|line| line.split(','))
        .map(str::trim)
        .filter(|constraint| !constraint.is_empty())
        .map(ConstraintToken::from_raw)
        .collect();

    tracing::debug!("Parsed {} constraint(s) from {:?}", tokens.len(), raw);
    tokens
}
