//! Image gallery - comma-delimited ASCII-art panels with an active cursor.
//!
//! Panel `i` is shown after `i` misses. The cursor starts on the first panel,
//! moves forward one panel per miss, and never moves past the last one.
//!
//! # File format
//!
//! Every panel is terminated by a `,`. Any `\n`/`\r` bytes directly after the
//! comma belong to the delimiter. A trailing segment with no terminating comma
//! is not a panel and is ignored.
//!
//! ```text
//!  +---+
//!      |
//!     ===,
//!  +---+
//!  O   |
//!     ===,
//! ```

use crate::text::TextBuffer;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageGallery {
    panels: Vec<TextBuffer>,
    active: usize,
}

impl ImageGallery {
    pub fn parse(raw: &[u8]) -> Self {
        let mut panels = Vec::new();
        let mut rest = raw;

        while let Some(comma) = rest.iter().position(|&b| b == b',') {
            panels.push(TextBuffer::from_bytes(&rest[..comma]));

            let after = &rest[comma + 1..];
            let skip = after
                .iter()
                .take_while(|&&b| b == b'\n' || b == b'\r')
                .count();
            rest = &after[skip..];
        }

        Self { panels, active: 0 }
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// The panel under the cursor, or `None` for an empty gallery.
    pub fn active(&self) -> Option<&TextBuffer> {
        self.panels.get(self.active)
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn is_last(&self) -> bool {
        self.active + 1 >= self.panels.len()
    }

    /// Move to the next panel. Returns `false` (and stays put) at the last panel.
    pub fn advance(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.active += 1;
        true
    }

    pub fn reset(&mut self) {
        self.active = 0;
    }

    pub fn panels(&self) -> &[TextBuffer] {
        &self.panels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel_strings(g: &ImageGallery) -> Vec<String> {
        g.panels().iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn splits_on_commas_and_eats_line_endings() {
        let g = ImageGallery::parse(b"head,\nbody,\r\nnoose,\n");
        assert_eq!(panel_strings(&g), vec!["head", "body", "noose"]);
        assert_eq!(g.active().unwrap().to_string(), "head");
    }

    #[test]
    fn multi_line_panels_keep_inner_newlines() {
        let g = ImageGallery::parse(b" +--+\n |\n===,\n +--+\n O  |\n===,\n");
        assert_eq!(g.len(), 2);
        assert_eq!(g.panels()[0].to_string(), " +--+\n |\n===");
        assert_eq!(g.panels()[1].to_string(), " +--+\n O  |\n===");
    }

    #[test]
    fn unterminated_tail_is_dropped() {
        let g = ImageGallery::parse(b"one,\ntwo,\nthree");
        assert_eq!(panel_strings(&g), vec!["one", "two"]);
    }

    #[test]
    fn no_comma_means_no_panels() {
        assert!(ImageGallery::parse(b"just some art\n").is_empty());
        assert!(ImageGallery::parse(b"").is_empty());
        assert!(ImageGallery::parse(b"").active().is_none());
    }

    #[test]
    fn consecutive_commas_give_empty_panels() {
        let g = ImageGallery::parse(b"a,,b,");
        assert_eq!(panel_strings(&g), vec!["a", "", "b"]);
    }

    #[test]
    fn cursor_stops_at_last_panel() {
        let mut g = ImageGallery::parse(b"a,b,c,");
        assert!(!g.is_last());
        assert!(g.advance());
        assert!(g.advance());
        assert!(g.is_last());
        assert!(!g.advance());
        assert_eq!(g.active_index(), 2);
        assert_eq!(g.active().unwrap().to_string(), "c");

        g.reset();
        assert_eq!(g.active_index(), 0);
    }

    #[test]
    fn single_panel_is_immediately_last() {
        let g = ImageGallery::parse(b"only,");
        assert!(g.is_last());
    }
}
