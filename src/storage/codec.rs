//! Text encoding of a history record.
//!
//! Records are JSON arrays of `[human, engine]` code pairs:
//!
//! ```text
//! [["R","S"],["P","P"]]
//! ```
//!
//! The decoder also accepts the older tuple-literal layout
//! `[('R', 'S'), ('P', 'P')]`. Both go through the same typed deserializer,
//! so only well-formed rounds of the three codes can ever be produced.

use crate::core::History;
use crate::error::Result;

/// Encode a history as a record.
pub fn encode(history: &History) -> Result<String> {
    Ok(serde_json::to_string(history)?)
}

/// Decode a record into a history.
pub fn decode(text: &str) -> Result<History> {
    let text = text.trim();
    match serde_json::from_str::<History>(text) {
        Ok(history) => Ok(history),
        Err(err) => legacy_to_json(text)
            .and_then(|json| serde_json::from_str::<History>(&json).ok())
            .ok_or(err.into()),
    }
}

/// Rewrite tuple-literal syntax into JSON; `None` if the text cannot be one.
fn legacy_to_json(text: &str) -> Option<String> {
    if !text.starts_with('[') || text.contains('"') {
        return None;
    }
    let json = text
        .chars()
        .map(|c| match c {
            '(' => '[',
            ')' => ']',
            '\'' => '"',
            other => other,
        })
        .collect();
    Some(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Move, Round};

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode(&History::new()).unwrap(), "[]");
    }

    #[test]
    fn test_encode_rounds() {
        let history = History::from(vec![
            Round::new(Move::Rock, Move::Scissors),
            Round::new(Move::Paper, Move::Paper),
        ]);
        assert_eq!(encode(&history).unwrap(), r#"[["R","S"],["P","P"]]"#);
    }

    #[test]
    fn test_decode_json() {
        let history = decode(" [[\"S\",\"R\"]]\n").unwrap();
        assert_eq!(history.as_slice(), &[Round::new(Move::Scissors, Move::Rock)]);
    }

    #[test]
    fn test_decode_legacy_tuples() {
        let history = decode("[('R', 'S'),\n ('P', 'P'),\n ('S', 'R')]").unwrap();
        assert_eq!(
            history.as_slice(),
            &[
                Round::new(Move::Rock, Move::Scissors),
                Round::new(Move::Paper, Move::Paper),
                Round::new(Move::Scissors, Move::Rock),
            ]
        );
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode("").is_err());
        assert!(decode("hello").is_err());
        assert!(decode("[('R', 'X')]").is_err());
        assert!(decode("[('R',)]").is_err());
        assert!(decode("[[\"R\",\"S\",\"P\"]]").is_err());
        assert!(decode("__import__('os').system('true')").is_err());
        assert!(decode("{\"R\": \"S\"}").is_err());
    }
}
