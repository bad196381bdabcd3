//! Message bubbles: user messages hug the right edge of the panel,
//! assistant messages the left edge.

use eventease_core::{Message, Sender};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::constants::{BOT_LABEL, BUBBLE_WIDTH_PERCENT, MIN_BUBBLE_TEXT_WIDTH, USER_LABEL};

struct Frame {
    top_left: char,
    top_right: char,
    bottom_left: char,
    bottom_right: char,
    horizontal: char,
    vertical: char,
}

const USER_FRAME: Frame = Frame {
    top_left: '╭',
    top_right: '╮',
    bottom_left: '╰',
    bottom_right: '╯',
    horizontal: '─',
    vertical: '│',
};

const BOT_FRAME: Frame = Frame {
    top_left: '┌',
    top_right: '┐',
    bottom_left: '└',
    bottom_right: '┘',
    horizontal: '─',
    vertical: '│',
};

/// Renders one message as terminal lines for a panel `panel_width` columns wide.
pub fn render_bubble(message: &Message, panel_width: usize) -> Vec<String> {
    let (label, frame) = match message.sender() {
        Sender::User => (USER_LABEL, &USER_FRAME),
        Sender::Bot => (BOT_LABEL, &BOT_FRAME),
    };

    let max_text = (panel_width * BUBBLE_WIDTH_PERCENT / 100)
        .saturating_sub(4)
        .max(MIN_BUBBLE_TEXT_WIDTH);
    let lines = wrap(message.text(), max_text);
    let text_width = lines.iter().map(|line| line.width()).max().unwrap_or(0);
    let horizontal: String = std::iter::repeat(frame.horizontal)
        .take(text_width + 2)
        .collect();

    let mut block = Vec::with_capacity(lines.len() + 3);
    block.push(label.to_string());
    block.push(format!("{}{}{}", frame.top_left, horizontal, frame.top_right));
    for line in &lines {
        let fill = " ".repeat(text_width - line.width());
        block.push(format!(
            "{v} {line}{fill} {v}",
            v = frame.vertical,
            line = line,
            fill = fill
        ));
    }
    block.push(format!(
        "{}{}{}",
        frame.bottom_left, horizontal, frame.bottom_right
    ));

    if message.is_user() {
        block
            .into_iter()
            .map(|line| {
                let pad = panel_width.saturating_sub(line.width());
                format!("{}{}", " ".repeat(pad), line)
            })
            .collect()
    } else {
        block
    }
}

/// Greedy word wrap by display width. Explicit newlines are kept; words
/// longer than `max_width` are split.
fn wrap(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            if word_width > max_width {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                let mut pieces = split_by_width(word, max_width);
                current = pieces.pop().unwrap_or_default();
                current_width = current.width();
                lines.extend(pieces);
                continue;
            }

            let needed = if current.is_empty() {
                word_width
            } else {
                current_width + 1 + word_width
            };
            if needed > max_width {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
                current_width = word_width;
            } else {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(word);
                current_width = needed;
            }
        }
        lines.push(current);
    }

    lines
}

fn split_by_width(word: &str, max_width: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut piece_width = 0;
    for ch in word.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if piece_width + ch_width > max_width && !piece.is_empty() {
            pieces.push(std::mem::take(&mut piece));
            piece_width = 0;
        }
        piece.push(ch);
        piece_width += ch_width;
    }
    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_bubble_is_right_aligned() {
        let lines = render_bubble(&Message::user("hi there"), 40);

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].trim_start(), "you");
        assert_eq!(lines[2].trim_start(), "│ hi there │");
        for line in &lines {
            assert_eq!(line.width(), 40, "{line:?}");
        }
        assert!(lines[1].trim_start().starts_with('╭'));
    }

    #[test]
    fn bot_bubble_is_left_aligned() {
        let lines = render_bubble(&Message::bot("Party venues near you: ..."), 60);

        assert_eq!(
            lines,
            vec![
                "assistant".to_string(),
                "┌────────────────────────────┐".to_string(),
                "│ Party venues near you: ... │".to_string(),
                "└────────────────────────────┘".to_string(),
            ]
        );
    }

    #[test]
    fn long_text_wraps_within_bubble_width() {
        let text = "The keynote starts at nine in the main hall and lunch is served on the terrace";
        let lines = render_bubble(&Message::bot(text), 40);

        // 70% of 40 columns leaves 24 columns of text inside the frame.
        let body = &lines[2..lines.len() - 1];
        assert!(body.len() > 1);
        for line in body {
            assert!(line.width() <= 28, "{line:?}");
        }
        let rejoined: Vec<&str> = body
            .iter()
            .flat_map(|line| line.trim_matches('│').split_whitespace())
            .collect();
        assert_eq!(rejoined.join(" "), text);
    }

    #[test]
    fn wrap_keeps_newlines_and_splits_long_words() {
        assert_eq!(wrap("a\nb", 10), vec!["a", "b"]);
        assert_eq!(wrap("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
        assert_eq!(wrap("", 4), vec![""]);
    }

    #[test]
    fn wide_characters_count_double() {
        assert_eq!(wrap("会場会場会場", 4), vec!["会場", "会場", "会場"]);
    }
}
