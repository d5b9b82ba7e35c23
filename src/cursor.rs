/// One step of the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Forward,
    Back,
}

/// Circular index into a non-empty deck.
///
/// `index` always stays in `0..len`. Stepping past the last card returns to
/// the first one and stepping before the first card returns to the last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckCursor {
    index: usize,
    len: usize,
}

impl DeckCursor {
    /// Cursor at index 0, or `None` for an empty deck
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { index: 0, len })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn advance(&mut self) {
        self.index = (self.index + 1) % self.len;
    }

    pub fn retreat(&mut self) {
        self.index = (self.index + self.len - 1) % self.len;
    }

    pub fn step(&mut self, step: Step) {
        match step {
            Step::Forward => self.advance(),
            Step::Back => self.retreat(),
        }
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Index `ahead` cards after the current one
    pub fn peek(&self, ahead: usize) -> usize {
        (self.index + ahead) % self.len
    }

    /// Active card followed by the two upcoming ones
    pub fn relevant(&self) -> [usize; 3] {
        [self.peek(0), self.peek(1), self.peek(2)]
    }
}
