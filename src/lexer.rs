//! A module implementing lexical analysis for the command line: splitting
//! one raw input line into owned argument words.

/// Initial capacity of the argument vector; growth past it doubles.
const INITIAL_ARGV_CAPACITY: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexingState {
    Start,
    ReadingWord,
}

struct LexingFSM {
    input: Vec<char>,
    pos: usize,
    state: LexingState,
    buffer: String,
}

impl LexingFSM {
    fn new(line: &str) -> Self {
        LexingFSM {
            input: line.chars().collect(),
            pos: 0,
            state: LexingState::Start,
            buffer: String::new(),
        }
    }

    /// Walks the input once, emitting a word each time a run of
    /// non-delimiter characters ends. Space and tab are the only
    /// delimiters, and runs of them never produce empty words.
    fn make_tokens(&mut self) -> Vec<String> {
        let mut out = Vec::with_capacity(INITIAL_ARGV_CAPACITY);

        while let Some(ch) = self.read_char() {
            match self.state {
                LexingState::Start => self.handle_start(ch),
                LexingState::ReadingWord => self.handle_word(ch, &mut out),
            }
        }

        // Flush the word in progress, if any.
        if !self.buffer.is_empty() {
            out.push(std::mem::take(&mut self.buffer));
        }

        out
    }

    fn read_char(&mut self) -> Option<char> {
        let ch = self.input.get(self.pos).copied();
        if ch.is_some() {
            self.pos += 1;
        }
        ch
    }

    fn handle_start(&mut self, ch: char) {
        match ch {
            ' ' | '\t' => {}
            c => {
                self.buffer.push(c);
                self.state = LexingState::ReadingWord;
            }
        }
    }

    fn handle_word(&mut self, ch: char, out: &mut Vec<String>) {
        match ch {
            ' ' | '\t' => {
                out.push(std::mem::take(&mut self.buffer));
                self.state = LexingState::Start;
            }
            c => self.buffer.push(c),
        }
    }
}

/// Splits `line` into whitespace-delimited words.
///
/// Every returned word owns its storage independently of `line`, so the
/// words stay valid after the line buffer is dropped or reused.
pub(crate) fn split_into_tokens(line: &str) -> Vec<String> {
    let mut lexer = LexingFSM::new(line);
    lexer.make_tokens()
}
