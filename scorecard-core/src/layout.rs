//! Record list geometry shared by the terminal and browser front-ends.
//!
//! Each record is drawn as a fixed-height card: metadata, text, then a row of
//! five stars. Pointer positions map back to a record and, on the star row,
//! to a rating.

use crate::model::Rating;

/// Lines per record card: metadata, text, stars
pub const CARD_HEIGHT: u16 = 3;
/// Column of the first star inside a card
pub const STAR_INDENT: u16 = 2;
/// Columns per star, glyph plus gap
pub const STAR_STRIDE: u16 = 2;

/// A rectangle of terminal cells
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Area {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Area {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.x
            && row >= self.y
            && u32::from(column) < u32::from(self.x) + u32::from(self.width)
            && u32::from(row) < u32::from(self.y) + u32::from(self.height)
    }
}

/// Where the pointer landed inside the record list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub index: usize,
    /// Set when the pointer is over one of the card's stars
    pub rating: Option<Rating>,
}

/// Scroll position of the record list plus the area of its last draw
#[derive(Debug, Clone, Default)]
pub struct ListView {
    pub offset: usize,
    area: Area,
}

impl ListView {
    pub fn reset(&mut self) {
        self.offset = 0;
    }

    pub fn area(&self) -> Area {
        self.area
    }

    /// Record where the list was drawn, keeping the offset within `len`
    pub fn set_area(&mut self, area: Area, len: usize) {
        self.area = area;
        self.offset = self.offset.min(len.saturating_sub(1));
    }

    /// Cards that fit in the list area
    pub fn visible(&self) -> usize {
        usize::from(self.area.height / CARD_HEIGHT).max(1)
    }

    /// Positions currently on screen
    pub fn visible_range(&self, len: usize) -> std::ops::Range<usize> {
        let end = (self.offset + self.visible()).min(len);
        self.offset.min(end)..end
    }

    /// Adjust the offset so that `index` is on screen
    pub fn scroll_into_view(&mut self, index: usize) {
        let visible = self.visible();
        if index < self.offset {
            self.offset = index;
        } else if index >= self.offset + visible {
            self.offset = index + 1 - visible;
        }
    }

    /// Map a cell to a record, and to a star if one is there
    pub fn hit(&self, column: u16, row: u16, len: usize) -> Option<Hit> {
        let area = self.area;
        if !area.contains(column, row) {
            return None;
        }

        let card = usize::from((row - area.y) / CARD_HEIGHT);
        if card >= self.visible() {
            return None;
        }
        let index = self.offset + card;
        if index >= len {
            return None;
        }

        let line = (row - area.y) % CARD_HEIGHT;
        let rating = if line == CARD_HEIGHT - 1 {
            (column - area.x)
                .checked_sub(STAR_INDENT)
                .and_then(|rel| u8::try_from(rel / STAR_STRIDE + 1).ok())
                .and_then(Rating::new)
        } else {
            None
        };

        Some(Hit { index, rating })
    }
}

/// Convert a pixel position to a cell, given the pixel size of the
/// surface and its size in cells.
pub fn cell_from_pixel(x: f64, y: f64, surface: (f64, f64), cells: (u16, u16)) -> Option<(u16, u16)> {
    let (width, height) = surface;
    let (columns, rows) = cells;
    if width <= 0.0 || height <= 0.0 || columns == 0 || rows == 0 || x < 0.0 || y < 0.0 {
        return None;
    }

    let column = (x / (width / f64::from(columns))).floor();
    let row = (y / (height / f64::from(rows))).floor();
    if column >= f64::from(columns) || row >= f64::from(rows) {
        return None;
    }
    Some((column as u16, row as u16))
}
