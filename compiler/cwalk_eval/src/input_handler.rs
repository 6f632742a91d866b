//! Where the `GET` primitive reads integers from.
//!
//! Reads are whitespace-token based: a line holding several integers
//! satisfies several `GET` calls, and a read blocks for another line only
//! once the pending tokens run out.

use std::collections::VecDeque;
use std::io::BufRead;

/// Whitespace-separated tokens waiting to be consumed.
#[derive(Clone, Debug, Default)]
pub struct TokenQueue {
    pending: VecDeque<String>,
}

impl TokenQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue every token of `text`.
    pub fn push_text(&mut self, text: &str) {
        self.pending
            .extend(text.split_whitespace().map(str::to_owned));
    }

    fn next_token(&mut self) -> Option<String> {
        self.pending.pop_front()
    }

    fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Integer input source, dispatched by enum.
#[derive(Clone, Debug)]
pub enum InputHandler {
    /// Reads lines from the process's stdin on demand.
    Stdin(TokenQueue),
    /// Pre-loaded text, tokenized exactly like stdin.
    Text(TokenQueue),
    /// Pre-parsed integers (testing).
    Buffer(VecDeque<i64>),
}

impl InputHandler {
    pub fn stdin() -> Self {
        InputHandler::Stdin(TokenQueue::new())
    }

    pub fn text(text: &str) -> Self {
        let mut queue = TokenQueue::new();
        queue.push_text(text);
        InputHandler::Text(queue)
    }

    pub fn buffer(values: impl IntoIterator<Item = i64>) -> Self {
        InputHandler::Buffer(values.into_iter().collect())
    }

    /// Next integer, or `None` on end of input or an unparsable token.
    pub fn read_int(&mut self) -> Option<i64> {
        let token = match self {
            InputHandler::Buffer(values) => return values.pop_front(),
            InputHandler::Text(queue) => queue.next_token(),
            InputHandler::Stdin(queue) => {
                refill_from_stdin(queue);
                queue.next_token()
            }
        }?;
        match token.parse::<i64>() {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(%token, %err, "input token is not an integer");
                None
            }
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::stdin()
    }
}

/// Block until `queue` holds a token or stdin is exhausted.
fn refill_from_stdin(queue: &mut TokenQueue) {
    let stdin = std::io::stdin();
    let mut lock = stdin.lock();
    let mut line = String::new();
    while queue.is_empty() {
        line.clear();
        match lock.read_line(&mut line) {
            Ok(0) => return,
            Ok(_) => queue.push_text(&line),
            Err(err) => {
                tracing::warn!(%err, "failed to read stdin");
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests;
