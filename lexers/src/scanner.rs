#![deny(warnings)]

/// A backtracking cursor over any iterator.
///
/// Items pulled from the source are buffered so the cursor can be moved back
/// with `set_pos`. `view` exposes everything consumed since the last
/// `ignore`/`extract`, which is how lexemes are cut out of the input.
pub struct Scanner<I: Iterator> where I::Item: Clone {
    src: I,
    buf: Vec<I::Item>,
    pos: isize,
}

impl<I> Iterator for Scanner<I> where I: Iterator, I::Item: Clone {
    type Item = I::Item;
    fn next(&mut self) -> Option<Self::Item> {
        self.pos += 1;
        self.prep_buffer();
        let blen = self.buf.len() as isize;
        if self.pos >= blen {
            self.pos = blen;
        }
        self.curr()
    }
}

impl<I> Scanner<I> where I: Iterator, I::Item: Clone {
    pub fn new(source: I) -> Scanner<I> {
        Scanner { src: source, buf: Vec::new(), pos: -1 }
    }

    pub fn pos(&self) -> isize { self.pos }

    pub fn set_pos(&mut self, pos: isize) -> bool {
        if pos < -1 || pos > (self.buf.len() as isize) {
            return false;
        }
        self.pos = pos;
        true
    }

    pub fn curr(&self) -> Option<I::Item> {
        if self.pos < 0 {
            return None;
        }
        self.buf.get(self.pos as usize).cloned()
    }

    // pull from the source until self.pos is backed by the buffer
    fn prep_buffer(&mut self) {
        while self.pos >= (self.buf.len() as isize) {
            match self.src.next() {
                Some(item) => self.buf.push(item),
                None => break,
            }
        }
    }

    pub fn peek(&mut self) -> Option<I::Item> {
        let backtrack = self.pos;
        let peeked = self.next();
        self.pos = backtrack;
        peeked
    }

    /// Items consumed since the last `ignore`.
    pub fn view(&self) -> &[I::Item] {
        let n = ((self.pos + 1) as usize).min(self.buf.len());
        &self.buf[..n]
    }

    /// Drop everything consumed so far, the next item starts a new lexeme.
    pub fn ignore(&mut self) {
        if self.pos >= 0 {
            let n = ((self.pos + 1) as usize).min(self.buf.len());
            self.buf = self.buf.split_off(n);
        }
        self.pos = -1;
    }

    pub fn extract(&mut self) -> Vec<I::Item> {
        let lexeme = self.view().to_vec();
        self.ignore();
        lexeme
    }
}

impl<I> Scanner<I> where I: Iterator, I::Item: Clone + PartialEq {
    pub fn accept(&mut self, what: &I::Item) -> Option<I::Item> {
        let backtrack = self.pos();
        if let Some(next) = self.next() {
            if &next == what { return Some(next); }
        }
        self.set_pos(backtrack);
        None
    }

    // Advance only if the next item is in the 'any' set,
    // self.curr() returns the matched item afterwards
    pub fn accept_any(&mut self, any: &[I::Item]) -> Option<I::Item> {
        let backtrack = self.pos();
        if let Some(next) = self.next() {
            if any.contains(&next) { return Some(next); }
        }
        self.set_pos(backtrack);
        None
    }

    // Skip over the 'over' set, returns whether the scanner advanced
    pub fn skip_all(&mut self, over: &[I::Item]) -> bool {
        let mut advanced = false;
        while self.accept_any(over).is_some() { advanced = true; }
        advanced
    }

    // Advance until an item in the 'any' set or EOF, returns whether the
    // scanner advanced. self.curr() is the last non-matching item
    pub fn until_any(&mut self, any: &[I::Item]) -> bool {
        let mut advanced = false;
        while let Some(next) = self.peek() {
            if any.contains(&next) { break; }
            self.next();
            advanced = true;
        }
        advanced
    }
}
