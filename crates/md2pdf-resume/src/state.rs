//! List environment state for the résumé converter.
//!
//! The template nests two list environments: a sub-heading list opened per
//! section, holding entries, and an item list opened per entry, holding
//! bullets. [`ListState`] tracks both in a single value so that an item list
//! can never be open without its enclosing sub-heading list.

const SUB_LIST_START: &str = r"  \resumeSubHeadingListStart";
const SUB_LIST_END: &str = r"  \resumeSubHeadingListEnd";
const ITEM_LIST_START: &str = r"    \resumeItemListStart";
const ITEM_LIST_END: &str = r"    \resumeItemListEnd";

/// Which list environments are currently open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListState {
    /// No list open.
    #[default]
    Closed,
    /// Section sub-heading list open.
    SubList,
    /// Sub-heading list and an entry item list open.
    ItemList,
}

/// Mutable state of one conversion.
#[derive(Debug, Default)]
pub struct ParseState {
    section: String,
    lists: ListState,
}

impl ParseState {
    /// Create state for a fresh document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lower-cased title of the current section, empty before the first one.
    pub fn section(&self) -> &str {
        &self.section
    }

    /// Currently open list environments.
    pub fn lists(&self) -> ListState {
        self.lists
    }

    /// Whether bullets in the current section render without an item list.
    pub fn is_flat_section(&self) -> bool {
        self.section.contains("skill") || self.section.contains("co-curricular")
    }

    /// Whether entries in the current section use the compact layout.
    pub fn is_education_section(&self) -> bool {
        self.section.contains("education")
    }

    /// Start a new section: close everything, record its title and open
    /// its sub-heading list.
    pub fn enter_section(&mut self, title: &str, out: &mut Vec<String>) {
        self.close_sub_list(out);
        self.section = title.to_lowercase();
        self.open_sub_list(out);
    }

    /// Open the sub-heading list unless one is already open.
    pub fn open_sub_list(&mut self, out: &mut Vec<String>) {
        if self.lists == ListState::Closed {
            out.push(SUB_LIST_START.to_owned());
            self.lists = ListState::SubList;
        }
    }

    /// Open an item list, opening the enclosing sub-heading list first when
    /// needed. No-op if an item list is already open.
    pub fn open_items(&mut self, out: &mut Vec<String>) {
        self.open_sub_list(out);
        if self.lists == ListState::SubList {
            out.push(ITEM_LIST_START.to_owned());
            self.lists = ListState::ItemList;
        }
    }

    /// Close the item list if open.
    pub fn close_items(&mut self, out: &mut Vec<String>) {
        if self.lists == ListState::ItemList {
            out.push(ITEM_LIST_END.to_owned());
            self.lists = ListState::SubList;
        }
    }

    /// Close the item list and then the sub-heading list, whichever are open.
    pub fn close_sub_list(&mut self, out: &mut Vec<String>) {
        self.close_items(out);
        if self.lists == ListState::SubList {
            out.push(SUB_LIST_END.to_owned());
            self.lists = ListState::Closed;
        }
    }
}
