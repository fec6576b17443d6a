/// Walks an NPC's scripted lines one at a time.
///
/// The cursor never moves past the last line. `shown` records that the
/// current conversation has been opened at least once since the last reset.
#[derive(Clone, Debug, Default)]
pub struct DialogueCursor {
    lines: Vec<String>,
    index: usize,
    shown: bool,
}

impl DialogueCursor {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines, index: 0, shown: false }
    }

    /// The line under the cursor, or `""` if there are no lines.
    pub fn current(&self) -> &str {
        self.lines.get(self.index).map(String::as_str).unwrap_or("")
    }

    /// Step to the next line. No-op on the last line.
    pub fn advance(&mut self) {
        if self.has_more() {
            self.index += 1;
        }
    }

    /// True while the cursor is before the last line.
    pub fn has_more(&self) -> bool {
        self.index + 1 < self.lines.len()
    }

    /// Rewind to the first line and clear the shown flag.
    pub fn reset(&mut self) {
        self.index = 0;
        self.shown = false;
    }

    pub fn index(&self) -> usize { self.index }
    pub fn len(&self) -> usize { self.lines.len() }
    pub fn is_empty(&self) -> bool { self.lines.is_empty() }

    pub fn is_shown(&self) -> bool { self.shown }
    pub fn set_shown(&mut self, shown: bool) { self.shown = shown; }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor(n: usize) -> DialogueCursor {
        DialogueCursor::new((0..n).map(|i| format!("line {i}")).collect())
    }

    #[test]
    fn current_starts_at_first_line() {
        assert_eq!(cursor(3).current(), "line 0");
    }

    #[test]
    fn empty_cursor_yields_empty_string() {
        let mut c = cursor(0);
        assert_eq!(c.current(), "");
        assert!(!c.has_more());
        c.advance();
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn single_line_has_no_more() {
        assert!(!cursor(1).has_more());
    }
}
