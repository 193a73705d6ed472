//! Access to events grouped by category.
//!
//! Services take an [`EventStore`] rather than reaching for shared state, so
//! any backing (the in-memory [`EventBook`], a database-loaded book, a test
//! fixture) can be passed in.

use crate::category::Category;
use crate::event::Event;

/// Lookup of events by category and position.
///
/// Indexes here are 0-based; user-facing 1-based indexes are converted by the
/// services.
pub trait EventStore {
    /// Events of one category in insertion order.
    fn events(&self, category: Category) -> &[Event];

    /// Mutable access to one event.
    fn event_mut(&mut self, category: Category, index: usize) -> Option<&mut Event>;
}

/// In-memory event lists, one per category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventBook {
    personal: Vec<Event>,
    timetable: Vec<Event>,
    zoom: Vec<Event>,
}

impl EventBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an event to its category's list and returns its 1-based index.
    pub fn add(&mut self, event: Event) -> usize {
        let list = self.list_mut(event.category());
        list.push(event);
        list.len()
    }

    /// Total number of events across categories.
    pub fn len(&self) -> usize {
        self.personal.len() + self.timetable.len() + self.zoom.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    const fn list_mut(&mut self, category: Category) -> &mut Vec<Event> {
        match category {
            Category::Personal => &mut self.personal,
            Category::Timetable => &mut self.timetable,
            Category::Zoom => &mut self.zoom,
        }
    }
}

impl EventStore for EventBook {
    fn events(&self, category: Category) -> &[Event] {
        match category {
            Category::Personal => &self.personal,
            Category::Timetable => &self.timetable,
            Category::Zoom => &self.zoom,
        }
    }

    fn event_mut(&mut self, category: Category, index: usize) -> Option<&mut Event> {
        self.list_mut(category).get_mut(index)
    }
}

impl FromIterator<Event> for EventBook {
    fn from_iter<I: IntoIterator<Item = Event>>(iter: I) -> Self {
        let mut book = Self::new();
        for event in iter {
            book.add(event);
        }
        book
    }
}
