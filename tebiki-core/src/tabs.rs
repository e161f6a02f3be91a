//! Tab-strip state machine.
//!
//! Ordered panel ids with a single active index. Keyboard handling follows
//! the roving-tabindex pattern: arrows and Home/End move focus without
//! activating, Enter and Space activate the focused header.

/// Focus or activation computed from a key press on a tab header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyIntent {
    /// Move focus to the header at this index without activating it.
    Focus(usize),
    /// Activate the header at this index.
    Activate(usize),
}

/// Record of a completed tab transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabChange {
    pub previous: String,
    pub active: String,
}

/// Ordered tab descriptors and the single active index.
///
/// The active index is always in range while any tabs exist, so exactly one
/// descriptor is active after every transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabStrip {
    ids: Vec<String>,
    active: usize,
}

impl TabStrip {
    /// Build a strip with the first tab active.
    #[must_use]
    pub fn new(ids: Vec<String>) -> Self {
        Self { ids, active: 0 }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active
    }

    #[must_use]
    pub fn active_id(&self) -> Option<&str> {
        self.ids.get(self.active).map(String::as_str)
    }

    #[must_use]
    pub fn is_active(&self, id: &str) -> bool {
        self.active_id() == Some(id)
    }

    #[must_use]
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.ids.iter().position(|candidate| candidate == id)
    }

    /// Activate a tab by id.
    ///
    /// Unknown ids are rejected and re-activating the current tab is a no-op;
    /// both return `None` and leave the strip untouched.
    pub fn activate(&mut self, id: &str) -> Option<TabChange> {
        let Some(index) = self.index_of(id) else {
            log::warn!("activate: unknown tab id '{id}'");
            return None;
        };
        if index == self.active {
            return None;
        }
        let previous = self.ids[self.active].clone();
        self.active = index;
        Some(TabChange {
            previous,
            active: self.ids[index].clone(),
        })
    }

    /// The fixed key rule table for tab headers.
    ///
    /// ArrowLeft/ArrowRight move one header with wraparound at both ends,
    /// Home/End jump to the first/last header, Enter and Space activate the
    /// header under focus. Every other key is ignored.
    #[must_use]
    pub fn key_intent(&self, key: &str, current: usize) -> Option<KeyIntent> {
        if self.ids.is_empty() {
            return None;
        }
        let last = self.ids.len() - 1;
        let current = current.min(last);
        match key {
            "ArrowLeft" => Some(KeyIntent::Focus(if current == 0 {
                last
            } else {
                current - 1
            })),
            "ArrowRight" => Some(KeyIntent::Focus(if current == last {
                0
            } else {
                current + 1
            })),
            "Home" => Some(KeyIntent::Focus(0)),
            "End" => Some(KeyIntent::Focus(last)),
            "Enter" | " " => Some(KeyIntent::Activate(current)),
            _ => None,
        }
    }
}
