use crate::scanner::Scanner;

pub(crate) static WHITE: &[char] = &[' ', '\n', '\r', '\t'];
static DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];
static OPS: &[char] = &['+', '-', '*', '/', '%', '^', '(', ')'];
static ALPHA: &[char] = &['_',
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o',
    'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O',
    'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z'];
static ALNUM: &[char] = &['_',
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o',
    'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O',
    'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z'];

/*
 * The caller of these functions is expected to setup the scanner for a
 * clear start, ie: call scanner.ignore() to start fresh
 */
impl<I: Iterator<Item=char>> Scanner<I> {
    pub fn extract_string(&mut self) -> String {
        self.extract().into_iter().collect()
    }

    /// Discard any whitespace ahead and whatever was consumed before it.
    pub fn ignore_ws(&mut self) {
        self.skip_all(WHITE);
        self.ignore();
    }

    // scan unsigned numbers like ([0-9]+\.?[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?
    // a sign is never part of the lexeme, callers decide what '-' means
    pub fn scan_number(&mut self) -> Option<String> {
        let backtrack = self.pos();
        let integer = self.skip_all(DIGITS);
        // "5." and ".5" are numbers, a lone "." is not
        let fraction = self.accept(&'.').is_some() && self.skip_all(DIGITS);
        if !integer && !fraction {
            self.set_pos(backtrack);
            return None;
        }
        // check for exponent part
        let backtrack = self.pos();
        if self.accept_any(&['e', 'E']).is_some() {
            self.accept_any(&['+', '-']);
            if !self.skip_all(DIGITS) {
                self.set_pos(backtrack);
            }
        }
        Some(self.extract_string())
    }

    pub fn scan_math_op(&mut self) -> Option<String> {
        self.accept_any(OPS)?;
        Some(self.extract_string())
    }

    // scan [a-zA-Z_][a-zA-Z0-9_]*
    pub fn scan_identifier(&mut self) -> Option<String> {
        self.accept_any(ALPHA)?;
        self.skip_all(ALNUM);
        Some(self.extract_string())
    }

}

/// A whole word that reads as a number literal, with an optional leading '-'.
pub fn is_number_literal(word: &str) -> bool {
    let unsigned = word.strip_prefix('-').unwrap_or(word);
    let mut s = Scanner::new(unsigned.chars());
    match s.scan_number() {
        Some(num) => num.len() == unsigned.len(),
        None => false,
    }
}

pub fn is_identifier(word: &str) -> bool {
    let mut s = Scanner::new(word.chars());
    match s.scan_identifier() {
        Some(id) => id.len() == word.len(),
        None => false,
    }
}

///////////////////////////////////////////////////////////////////////////////
