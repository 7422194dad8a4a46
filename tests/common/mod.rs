// Minimal VT100 screen model for checking rendered output
//
// Understands exactly what the launcher emits: RIS, G1 designation, SO/SI,
// CUP, relative cursor moves and cursor visibility. Line-drawing bytes are
// mapped to box-drawing characters so tests can compare pictures. An ESC
// arriving while SO is active panics: sequences must be sent in normal mode.

#![allow(dead_code)]

pub struct Screen {
    pub columns: usize,
    pub rows: usize,
    grid: Vec<Vec<char>>,
    column: usize,
    row: usize,
    line_drawing: bool,
    pub cursor_visible: bool,
    pub resets: usize,
}

impl Screen {
    pub fn new(columns: usize, rows: usize) -> Self {
        Screen {
            columns,
            rows,
            grid: vec![vec![' '; columns]; rows],
            column: 0,
            row: 0,
            line_drawing: false,
            cursor_visible: true,
            resets: 0,
        }
    }

    pub fn feed(&mut self, bytes: &[u8]) {
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                0x0e => self.line_drawing = true,
                0x0f => self.line_drawing = false,
                0x1b => {
                    assert!(
                        !self.line_drawing,
                        "control sequence in line-drawing mode at byte {}",
                        i
                    );
                    i = self.escape(bytes, i + 1);
                    continue;
                }
                byte => self.put(byte),
            }
            i += 1;
        }
    }

    /// Row `row` (1-based) with trailing blanks removed
    pub fn line(&self, row: usize) -> String {
        self.grid[row - 1]
            .iter()
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    /// Character at 1-based `(column, row)`
    pub fn cell(&self, column: usize, row: usize) -> char {
        self.grid[row - 1][column - 1]
    }

    /// All non-blank rows, with the common left margin removed
    pub fn picture(&self) -> Vec<String> {
        let lines: Vec<String> = (1..=self.rows)
            .map(|row| self.line(row))
            .filter(|line| !line.is_empty())
            .collect();
        let margin = lines
            .iter()
            .map(|line| line.chars().take_while(|c| *c == ' ').count())
            .min()
            .unwrap_or(0);
        lines
            .into_iter()
            .map(|line| line.chars().skip(margin).collect())
            .collect()
    }

    pub fn is_line_drawing(&self) -> bool {
        self.line_drawing
    }

    fn put(&mut self, byte: u8) {
        let ch = if self.line_drawing {
            match byte {
                b'l' => '┌',
                b'q' => '─',
                b'k' => '┐',
                b'x' => '│',
                b'm' => '└',
                b'j' => '┘',
                b'`' => '◆',
                other => other as char,
            }
        } else {
            byte as char
        };
        if self.row < self.rows && self.column < self.columns {
            self.grid[self.row][self.column] = ch;
        }
        self.column += 1;
    }

    /// Handle the sequence starting after ESC at `start`; returns the next index.
    fn escape(&mut self, bytes: &[u8], start: usize) -> usize {
        match bytes.get(start) {
            Some(b'c') => {
                *self = Screen {
                    resets: self.resets + 1,
                    ..Screen::new(self.columns, self.rows)
                };
                start + 1
            }
            Some(b')') => start + 2,
            Some(b'[') => {
                let mut end = start + 1;
                while end < bytes.len() && !(0x40..=0x7e).contains(&bytes[end]) {
                    end += 1;
                }
                let params = std::str::from_utf8(&bytes[start + 1..end]).unwrap();
                self.csi(params, bytes[end]);
                end + 1
            }
            other => panic!("Unexpected byte after ESC: {:?}", other),
        }
    }

    fn csi(&mut self, params: &str, command: u8) {
        let count = || params.parse::<usize>().unwrap_or(1).max(1);
        match (params, command) {
            ("?25", b'l') => self.cursor_visible = false,
            ("?25", b'h') => self.cursor_visible = true,
            (_, b'H') | (_, b'f') => {
                let mut parts = params.split(';');
                let row = parts.next().and_then(|p| p.parse().ok()).unwrap_or(1usize);
                let column = parts.next().and_then(|p| p.parse().ok()).unwrap_or(1usize);
                self.row = row.max(1) - 1;
                self.column = column.max(1) - 1;
            }
            (_, b'A') => self.row = self.row.saturating_sub(count()),
            (_, b'B') => self.row = (self.row + count()).min(self.rows - 1),
            (_, b'C') => self.column += count(),
            (_, b'D') => self.column = self.column.saturating_sub(count()),
            _ => panic!("Unsupported CSI sequence: {:?} {}", params, command as char),
        }
    }
}
