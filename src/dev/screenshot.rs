/// Plain-text screenshots of the terminal, for bug reports and docs
use std::fs;
use std::io;
use std::path::Path;

use ratatui::buffer::Buffer;

/// Text of a buffer, one line per row, trailing blanks removed
pub fn buffer_to_text(buffer: &Buffer) -> String {
    let area = buffer.area();
    let mut text = String::new();
    for y in area.top()..area.bottom() {
        let line: String = (area.left()..area.right())
            .map(|x| buffer[(x, y)].symbol())
            .collect();
        text.push_str(line.trim_end());
        text.push('\n');
    }
    text
}

/// Save a rendered frame to `path`
pub fn save_screenshot(buffer: &Buffer, path: impl AsRef<Path>) -> io::Result<()> {
    fs::write(path, buffer_to_text(buffer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;
    use ratatui::style::Style;

    #[test]
    fn test_buffer_to_text() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 6, 2));
        buf.set_string(1, 0, "abc", Style::default());
        assert_eq!(buffer_to_text(&buf), " abc\n\n");
    }

    #[test]
    fn test_save_screenshot() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 3, 1));
        buf.set_string(0, 0, "ok", Style::default());
        let path = std::env::temp_dir().join(format!("scoreboard-shot-{}.txt", std::process::id()));
        save_screenshot(&buf, &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "ok\n");
        let _ = fs::remove_file(&path);
    }
}
