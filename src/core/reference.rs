//! Verse citation parsing
//!
//! Breaks a citation such as `"Song of Solomon 2:12"` into its book,
//! chapter and verse parts for display. Parsing is best effort: malformed
//! input yields empty fields rather than an error.

use serde::Serialize;

/// The parts of a verse citation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReferenceParts {
    pub book: String,
    pub chapter: String,
    /// Verse or verse range, kept literally (`"24-25"`)
    pub verse: String,
    pub book_and_chapter: String,
}

/// Split a citation of the form `Book Chapter:Verse[-Verse]`
pub fn parse_reference(citation: &str) -> ReferenceParts {
    let citation = citation.trim();
    if citation.is_empty() {
        return ReferenceParts::default();
    }

    // The last space separates the book (which may contain spaces) from
    // the chapter:verse token.
    let Some((book, tail)) = citation.rsplit_once(' ') else {
        return ReferenceParts {
            book: citation.to_string(),
            book_and_chapter: citation.to_string(),
            ..Default::default()
        };
    };

    let book = book.trim_end();
    let (chapter, verse) = tail.split_once(':').unwrap_or((tail, ""));

    let book_and_chapter = if chapter.is_empty() {
        book.to_string()
    } else {
        format!("{} {}", book, chapter)
    };

    ReferenceParts {
        book: book.to_string(),
        chapter: chapter.to_string(),
        verse: verse.to_string(),
        book_and_chapter,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_book() {
        let parts = parse_reference("1 Peter 5:7");
        assert_eq!(parts.book, "1 Peter");
        assert_eq!(parts.chapter, "5");
        assert_eq!(parts.verse, "7");
        assert_eq!(parts.book_and_chapter, "1 Peter 5");
    }

    #[test]
    fn test_verse_range_kept_literal() {
        let parts = parse_reference("Numbers 6:24-25");
        assert_eq!(parts.book, "Numbers");
        assert_eq!(parts.chapter, "6");
        assert_eq!(parts.verse, "24-25");
        assert_eq!(parts.book_and_chapter, "Numbers 6");
    }

    #[test]
    fn test_multi_word_book() {
        let parts = parse_reference("Song of Solomon 2:12");
        assert_eq!(parts.book, "Song of Solomon");
        assert_eq!(parts.book_and_chapter, "Song of Solomon 2");
    }

    #[test]
    fn test_missing_colon() {
        let parts = parse_reference("Psalm 23");
        assert_eq!(parts.book, "Psalm");
        assert_eq!(parts.chapter, "23");
        assert_eq!(parts.verse, "");
        assert_eq!(parts.book_and_chapter, "Psalm 23");
    }

    #[test]
    fn test_empty_citation() {
        assert_eq!(parse_reference(""), ReferenceParts::default());
        assert_eq!(parse_reference("   "), ReferenceParts::default());
    }

    #[test]
    fn test_book_only() {
        let parts = parse_reference("Genesis");
        assert_eq!(parts.book, "Genesis");
        assert_eq!(parts.chapter, "");
        assert_eq!(parts.verse, "");
        assert_eq!(parts.book_and_chapter, "Genesis");
    }

    #[test]
    fn test_surrounding_whitespace_ignored() {
        let parts = parse_reference("  John 3:16 ");
        assert_eq!(parts.book, "John");
        assert_eq!(parts.verse, "16");
    }
}
