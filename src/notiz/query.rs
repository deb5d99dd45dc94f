use crate::model::Note;

/// Notes shown per page.
pub const PAGE_SIZE: usize = 10;

/// A note paired with its 1-based shelf position. Positions are assigned
/// on the full shelf before filtering, so a note keeps its number no
/// matter which query found it.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayNote {
    pub index: usize,
    pub note: Note,
}

/// One page of the filtered shelf, plus the counts a caller needs to
/// render pagination.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage {
    pub items: Vec<DisplayNote>,
    /// The page actually selected, after clamping.
    pub page: usize,
    /// Number of pages the current matches span. Zero when nothing matches.
    pub page_count: usize,
    /// Notes matching the query.
    pub matching: usize,
    /// Notes on the shelf, ignoring the query.
    pub total: usize,
}

/// Case-insensitive substring match on title or content. An empty query
/// matches everything.
pub fn matches(note: &Note, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    note.title.to_lowercase().contains(&needle)
        || note.content.to_lowercase().contains(&needle)
}

/// Filters the shelf, then slices out one page. `page` is clamped into
/// the valid range, so a stale page number can never select an empty
/// window while matches exist.
pub fn build_page(notes: &[Note], query: &str, page: usize) -> ListPage {
    let matched: Vec<DisplayNote> = notes
        .iter()
        .enumerate()
        .filter(|(_, note)| matches(note, query))
        .map(|(idx, note)| DisplayNote {
            index: idx + 1,
            note: note.clone(),
        })
        .collect();

    let matching = matched.len();
    let total = notes.len();
    let page_count = matching.div_ceil(PAGE_SIZE);
    let page = page.clamp(1, page_count.max(1));

    let items = matched
        .into_iter()
        .skip((page - 1) * PAGE_SIZE)
        .take(PAGE_SIZE)
        .collect();

    ListPage {
        items,
        page,
        page_count,
        matching,
        total,
    }
}

impl ListPage {
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.page_count
    }

    /// 1-based rank of the first note on this page among the matches.
    /// Zero when nothing matches.
    pub fn start(&self) -> usize {
        if self.matching == 0 {
            0
        } else {
            (self.page - 1) * PAGE_SIZE + 1
        }
    }

    /// 1-based rank of the last note on this page among the matches.
    pub fn end(&self) -> usize {
        (self.page - 1) * PAGE_SIZE + self.items.len()
    }

    /// The shelf has no notes at all.
    pub fn shelf_is_empty(&self) -> bool {
        self.total == 0
    }

    /// Notes exist, but none match the query.
    pub fn nothing_matched(&self) -> bool {
        self.total > 0 && self.matching == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shelf(entries: &[(&str, &str)]) -> Vec<Note> {
        entries
            .iter()
            .map(|(title, content)| Note::new(title.to_string(), content.to_string()))
            .collect()
    }

    fn numbered_shelf(n: usize) -> Vec<Note> {
        (1..=n)
            .map(|i| Note::new(format!("Note {i}"), format!("body {i}")))
            .collect()
    }

    #[test]
    fn test_empty_query_matches_all() {
        let notes = numbered_shelf(3);
        let page = build_page(&notes, "", 1);
        assert_eq!(page.matching, 3);
        assert_eq!(page.total, 3);
    }

    #[test]
    fn test_match_is_case_insensitive_on_title_and_content() {
        let notes = shelf(&[
            ("Grocery List", "milk, eggs"),
            ("Reading", "the GROCERY aisle book"),
            ("Workout", "squats"),
        ]);

        let page = build_page(&notes, "gRoCeRy", 1);
        let titles: Vec<&str> = page
            .items
            .iter()
            .map(|item| item.note.title.as_str())
            .collect();
        assert_eq!(titles, ["Grocery List", "Reading"]);
    }

    #[test]
    fn test_filter_preserves_shelf_positions() {
        let notes = shelf(&[
            ("Alpha", "x"),
            ("Beta match", "x"),
            ("Gamma", "x"),
            ("Delta match", "x"),
        ]);

        let page = build_page(&notes, "match", 1);
        let positions: Vec<usize> = page.items.iter().map(|item| item.index).collect();
        assert_eq!(positions, [2, 4]);
    }

    #[test]
    fn test_first_page_holds_ten() {
        let notes = numbered_shelf(25);
        let page = build_page(&notes, "", 1);

        assert_eq!(page.items.len(), 10);
        assert_eq!(page.page_count, 3);
        assert_eq!(page.start(), 1);
        assert_eq!(page.end(), 10);
        assert!(!page.has_prev());
        assert!(page.has_next());
    }

    #[test]
    fn test_last_page_holds_remainder() {
        let notes = numbered_shelf(25);
        let page = build_page(&notes, "", 3);

        assert_eq!(page.items.len(), 5);
        assert_eq!(page.items[0].index, 21);
        assert_eq!(page.start(), 21);
        assert_eq!(page.end(), 25);
        assert!(page.has_prev());
        assert!(!page.has_next());
    }

    #[test]
    fn test_exact_multiple_has_no_phantom_page() {
        let notes = numbered_shelf(20);
        let page = build_page(&notes, "", 2);
        assert_eq!(page.page_count, 2);
        assert!(!page.has_next());
    }

    #[test]
    fn test_out_of_range_page_clamps_to_last() {
        let notes = numbered_shelf(12);
        let page = build_page(&notes, "", 9);

        assert_eq!(page.page, 2);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.start(), 11);
        assert_eq!(page.end(), 12);
    }

    #[test]
    fn test_pagination_follows_the_filtered_set() {
        let mut notes = numbered_shelf(30);
        // Make 12 of them match.
        for note in notes.iter_mut().take(12) {
            note.content.push_str(" special");
        }

        let page = build_page(&notes, "special", 2);
        assert_eq!(page.matching, 12);
        assert_eq!(page.page_count, 2);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total, 30);
    }

    #[test]
    fn test_concatenated_pages_rebuild_the_filtered_sequence() {
        let mut notes = numbered_shelf(34);
        for note in notes.iter_mut().step_by(2) {
            note.content.push_str(" keeper");
        }
        let expected: Vec<usize> = notes
            .iter()
            .enumerate()
            .filter(|(_, note)| matches(note, "keeper"))
            .map(|(idx, _)| idx + 1)
            .collect();

        let mut seen = Vec::new();
        let mut page = 1;
        loop {
            let current = build_page(&notes, "keeper", page);
            seen.extend(current.items.iter().map(|item| item.index));
            if !current.has_next() {
                break;
            }
            page += 1;
        }

        assert_eq!(seen, expected);
    }

    #[test]
    fn test_grocery_searches() {
        let notes = shelf(&[("Grocery List", "milk eggs")]);

        let hit = build_page(&notes, "milk", 1);
        assert_eq!(hit.matching, 1);
        assert_eq!(hit.items[0].note.title, "Grocery List");

        let miss = build_page(&notes, "bread", 1);
        assert_eq!(miss.matching, 0);
        assert!(miss.nothing_matched());
        assert!(!miss.shelf_is_empty());
    }

    #[test]
    fn test_empty_shelf_versus_no_matches() {
        let empty = build_page(&[], "", 1);
        assert!(empty.shelf_is_empty());
        assert!(!empty.nothing_matched());
        assert_eq!(empty.page_count, 0);
        assert_eq!(empty.start(), 0);
        assert_eq!(empty.end(), 0);

        let notes = shelf(&[("Workout", "squats")]);
        let no_match = build_page(&notes, "grocery", 1);
        assert!(!no_match.shelf_is_empty());
        assert!(no_match.nothing_matched());
        assert_eq!(no_match.items.len(), 0);
    }

    #[test]
    fn test_single_page_has_no_navigation() {
        let notes = numbered_shelf(4);
        let page = build_page(&notes, "", 1);
        assert_eq!(page.page_count, 1);
        assert!(!page.has_prev());
        assert!(!page.has_next());
    }
}
