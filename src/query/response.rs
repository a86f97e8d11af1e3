//! Parsing of the terminal's cursor position report (`CSI row ; col R`).

use crate::error::QueryError;

/// A cursor position as reported by the terminal, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CursorPosition {
    pub row: u16,
    pub column: u16,
}

/// vte saturates parameters that overflow `u16` to this value.
const SATURATED: u16 = u16::MAX;

/// Collects the first well-formed report from the vte state machine.
#[derive(Default)]
struct ReportCollector {
    position: Option<CursorPosition>,
}

impl vte::Perform for ReportCollector {
    fn csi_dispatch(
        &mut self,
        params: &vte::Params,
        intermediates: &[u8],
        ignore: bool,
        action: char,
    ) {
        if action != 'R' || ignore || !intermediates.is_empty() || self.position.is_some() {
            return;
        }

        let mut values = params.iter().map(|param| param.first().copied().unwrap_or(0));
        if let (Some(row), Some(column), None) = (values.next(), values.next(), values.next()) {
            if (1..SATURATED).contains(&row) && (1..SATURATED).contains(&column) {
                self.position = Some(CursorPosition { row, column });
            }
        }
    }
}

/// Find a cursor position report in a chunk of terminal input.
///
/// Bytes around the report (stray keystrokes typed during the query) are
/// ignored. Fails with [`QueryError::ResponseParse`] carrying the whole chunk
/// when no report is present.
pub fn parse_cursor_report(bytes: &[u8]) -> Result<CursorPosition, QueryError> {
    let mut parser: vte::Parser = vte::Parser::new();
    let mut collector = ReportCollector::default();
    parser.advance(&mut collector, bytes);

    collector.position.ok_or_else(|| QueryError::ResponseParse {
        raw: bytes.to_vec(),
    })
}
