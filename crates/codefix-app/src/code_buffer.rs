//! Multi-line text buffer backing the code editor panel
//!
//! Cursor positions are in characters, not bytes. The buffer always holds at
//! least one (possibly empty) line.

/// Width of one indentation step inserted by Tab
const INDENT: &str = "    ";

/// Lines moved by PageUp/PageDown
const PAGE_LINES: usize = 10;

/// Single editing operation, produced by key handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorOp {
    Insert(char),
    Newline,
    Indent,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
    /// Delete everything
    Clear,
}

#[derive(Debug, Clone)]
pub struct CodeBuffer {
    lines: Vec<String>,
    row: usize,
    col: usize,
    /// First visible line, maintained by the view
    pub scroll: usize,
}

impl Default for CodeBuffer {
    fn default() -> Self {
        Self {
            lines: vec![String::new()],
            row: 0,
            col: 0,
            scroll: 0,
        }
    }
}

impl CodeBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer holding `text`, cursor at the end
    pub fn from_text(text: &str) -> Self {
        let mut buffer = Self::default();
        buffer.set_text(text);
        buffer
    }

    /// Replace all content; cursor moves to the end
    pub fn set_text(&mut self, text: &str) {
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        self.lines = normalized.split('\n').map(str::to_string).collect();
        if self.lines.is_empty() {
            self.lines.push(String::new());
        }
        self.row = self.lines.len() - 1;
        self.col = char_len(&self.lines[self.row]);
        self.scroll = 0;
    }

    /// Full content joined with `\n`
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// `(row, col)` in characters
    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// True when the buffer holds only whitespace
    pub fn is_blank(&self) -> bool {
        self.lines.iter().all(|l| l.trim().is_empty())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Insert text at the cursor, splitting on newlines. Tabs become spaces.
    pub fn insert_str(&mut self, text: &str) {
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        for c in normalized.chars() {
            match c {
                '\n' => self.split_line(),
                '\t' => self.insert_raw(INDENT),
                c if c.is_control() => {}
                c => self.insert_char(c),
            }
        }
    }

    pub fn apply(&mut self, op: EditorOp) {
        match op {
            EditorOp::Insert(c) => self.insert_char(c),
            EditorOp::Newline => self.newline(),
            EditorOp::Indent => self.insert_raw(INDENT),
            EditorOp::Backspace => self.backspace(),
            EditorOp::Delete => self.delete(),
            EditorOp::Left => self.move_left(),
            EditorOp::Right => self.move_right(),
            EditorOp::Up => self.move_vertical(-1),
            EditorOp::Down => self.move_vertical(1),
            EditorOp::Home => self.col = 0,
            EditorOp::End => self.col = char_len(&self.lines[self.row]),
            EditorOp::PageUp => self.move_vertical(-(PAGE_LINES as isize)),
            EditorOp::PageDown => self.move_vertical(PAGE_LINES as isize),
            EditorOp::Clear => self.clear(),
        }
    }

    /// Adjust `scroll` so the cursor row is within a viewport of `height` lines
    pub fn ensure_cursor_visible(&mut self, height: usize) {
        if height == 0 {
            return;
        }
        if self.row < self.scroll {
            self.scroll = self.row;
        } else if self.row >= self.scroll + height {
            self.scroll = self.row + 1 - height;
        }
    }

    fn insert_char(&mut self, c: char) {
        let line = &mut self.lines[self.row];
        let idx = byte_index(line, self.col);
        line.insert(idx, c);
        self.col += 1;
    }

    fn insert_raw(&mut self, text: &str) {
        let line = &mut self.lines[self.row];
        let idx = byte_index(line, self.col);
        line.insert_str(idx, text);
        self.col += char_len(text);
    }

    fn split_line(&mut self) {
        let line = &mut self.lines[self.row];
        let idx = byte_index(line, self.col);
        let rest = line.split_off(idx);
        self.lines.insert(self.row + 1, rest);
        self.row += 1;
        self.col = 0;
    }

    /// Newline carrying over the current line's leading whitespace
    fn newline(&mut self) {
        let indent: String = self.lines[self.row]
            .chars()
            .take(self.col)
            .take_while(|c| *c == ' ' || *c == '\t')
            .collect();
        self.split_line();
        self.insert_raw(&indent);
    }

    fn backspace(&mut self) {
        if self.col > 0 {
            let line = &mut self.lines[self.row];
            let idx = byte_index(line, self.col - 1);
            line.remove(idx);
            self.col -= 1;
        } else if self.row > 0 {
            let current = self.lines.remove(self.row);
            self.row -= 1;
            self.col = char_len(&self.lines[self.row]);
            self.lines[self.row].push_str(&current);
        }
    }

    fn delete(&mut self) {
        let len = char_len(&self.lines[self.row]);
        if self.col < len {
            let line = &mut self.lines[self.row];
            let idx = byte_index(line, self.col);
            line.remove(idx);
        } else if self.row + 1 < self.lines.len() {
            let next = self.lines.remove(self.row + 1);
            self.lines[self.row].push_str(&next);
        }
    }

    fn move_left(&mut self) {
        if self.col > 0 {
            self.col -= 1;
        } else if self.row > 0 {
            self.row -= 1;
            self.col = char_len(&self.lines[self.row]);
        }
    }

    fn move_right(&mut self) {
        if self.col < char_len(&self.lines[self.row]) {
            self.col += 1;
        } else if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = 0;
        }
    }

    fn move_vertical(&mut self, delta: isize) {
        let last = self.lines.len() - 1;
        let target = (self.row as isize + delta).clamp(0, last as isize) as usize;
        self.row = target;
        self.col = self.col.min(char_len(&self.lines[self.row]));
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}
