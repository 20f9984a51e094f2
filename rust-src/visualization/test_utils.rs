//! Helpers for testing views against a ratatui `TestBackend`.

#![cfg(test)]

use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};


pub fn test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).expect("failed to create test terminal")
}


/// All text on one row of the buffer.
pub fn row_text(buffer: &Buffer, row: u16) -> String {
    let area = buffer.area();
    if row >= area.height {
        return String::new();
    }
    (0..area.width)
        .map(|col| buffer.cell((col, row)).map(|cell| cell.symbol()).unwrap_or(" "))
        .collect()
}


/// First row containing `text`.
pub fn find_row_with_text(buffer: &Buffer, text: &str) -> Option<u16> {
    (0..buffer.area().height).find(|&row| row_text(buffer, row).contains(text))
}


/// Every row joined with newlines.
pub fn buffer_text(buffer: &Buffer) -> String {
    (0..buffer.area().height)
        .map(|row| row_text(buffer, row))
        .collect::<Vec<_>>()
        .join("\n")
}
