//! In-memory admin tables for Book Now units and gallery projects.
//!
//! DESIGN
//! ======
//! Both tables share one editing model: the inline editor (while `editing`
//! names a row) and the "add" form below the table each own a draft. Rows
//! are only ever built from a validated draft.
//!
//! Nothing is persisted; a reload restores the seed rows.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use crate::state::gallery::placeholder_image;

/// A row type editable through [`AdminTable`].
pub trait AdminRow: Clone {
    type Draft: Clone + Default + PartialEq;

    fn id(&self) -> &str;
    fn to_draft(&self) -> Self::Draft;
    /// Build a row from `draft`, or `None` when a required field is blank.
    fn from_draft(id: String, draft: &Self::Draft) -> Option<Self>;
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AdminUnit {
    pub id: String,
    pub name: String,
    pub price: String,
    pub available: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UnitDraft {
    pub name: String,
    pub price: String,
    pub available: bool,
}

impl AdminRow for AdminUnit {
    type Draft = UnitDraft;

    fn id(&self) -> &str {
        &self.id
    }

    fn to_draft(&self) -> UnitDraft {
        UnitDraft { name: self.name.clone(), price: self.price.clone(), available: self.available }
    }

    fn from_draft(id: String, draft: &UnitDraft) -> Option<Self> {
        if draft.name.trim().is_empty() || draft.price.trim().is_empty() {
            return None;
        }
        Some(Self { id, name: draft.name.trim().to_owned(), price: draft.price.trim().to_owned(), available: draft.available })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AdminProject {
    pub id: String,
    pub title: String,
    pub category: String,
    pub image_url: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub category: String,
    pub image_url: String,
}

impl AdminRow for AdminProject {
    type Draft = ProjectDraft;

    fn id(&self) -> &str {
        &self.id
    }

    fn to_draft(&self) -> ProjectDraft {
        ProjectDraft { title: self.title.clone(), category: self.category.clone(), image_url: self.image_url.clone() }
    }

    fn from_draft(id: String, draft: &ProjectDraft) -> Option<Self> {
        let fields = [&draft.title, &draft.category, &draft.image_url];
        if fields.iter().any(|f| f.trim().is_empty()) {
            return None;
        }
        Some(Self {
            id,
            title: draft.title.trim().to_owned(),
            category: draft.category.trim().to_owned(),
            image_url: draft.image_url.trim().to_owned(),
        })
    }
}

/// Which editor a draft belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftSlot {
    /// The trailing "add" row.
    Add,
    /// The inline editor of the row being edited.
    Edit,
}

/// Editable table of `R` rows. The add row and the inline editor keep
/// separate drafts, so opening an editor never discards a pending addition.
#[derive(Clone, Debug)]
pub struct AdminTable<R: AdminRow> {
    rows: Vec<R>,
    editing: Option<String>,
    pub add_draft: R::Draft,
    pub edit_draft: R::Draft,
}

impl<R: AdminRow> AdminTable<R> {
    #[must_use]
    pub fn new(rows: Vec<R>) -> Self {
        Self { rows, editing: None, add_draft: R::Draft::default(), edit_draft: R::Draft::default() }
    }

    #[must_use]
    pub fn draft(&self, slot: DraftSlot) -> &R::Draft {
        match slot {
            DraftSlot::Add => &self.add_draft,
            DraftSlot::Edit => &self.edit_draft,
        }
    }

    pub fn draft_mut(&mut self, slot: DraftSlot) -> &mut R::Draft {
        match slot {
            DraftSlot::Add => &mut self.add_draft,
            DraftSlot::Edit => &mut self.edit_draft,
        }
    }

    #[must_use]
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    #[must_use]
    pub fn editing(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    #[must_use]
    pub fn is_editing(&self, id: &str) -> bool {
        self.editing.as_deref() == Some(id)
    }

    /// Load row `id` into the edit draft and open its inline editor.
    pub fn edit(&mut self, id: &str) {
        if let Some(row) = self.rows.iter().find(|r| r.id() == id) {
            self.edit_draft = row.to_draft();
            self.editing = Some(id.to_owned());
        }
    }

    /// Write the edit draft back to the row being edited. Returns `false` (and
    /// keeps editing) when the draft is incomplete.
    pub fn save(&mut self) -> bool {
        let Some(id) = self.editing.clone() else {
            return false;
        };
        let Some(updated) = R::from_draft(id.clone(), &self.edit_draft) else {
            return false;
        };
        if let Some(row) = self.rows.iter_mut().find(|r| r.id() == id) {
            *row = updated;
        }
        self.editing = None;
        self.edit_draft = R::Draft::default();
        true
    }

    pub fn cancel(&mut self) {
        self.editing = None;
        self.edit_draft = R::Draft::default();
    }

    /// Append the add draft as a new row with a fresh id. Refused while an
    /// inline editor is open.
    pub fn add(&mut self) -> bool {
        if self.editing.is_some() {
            return false;
        }
        let Some(row) = R::from_draft(new_row_id(), &self.add_draft) else {
            return false;
        };
        self.rows.push(row);
        self.add_draft = R::Draft::default();
        true
    }

    pub fn delete(&mut self, id: &str) {
        self.rows.retain(|r| r.id() != id);
        if self.is_editing(id) {
            self.cancel();
        }
    }
}

fn new_row_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Seed rows for the units tab.
#[must_use]
pub fn seed_units() -> Vec<AdminUnit> {
    vec![
        AdminUnit { id: "1".to_owned(), name: "Unit 1".to_owned(), price: "1000".to_owned(), available: true },
        AdminUnit { id: "2".to_owned(), name: "Unit 2".to_owned(), price: "1200".to_owned(), available: false },
    ]
}

/// Seed rows for the projects tab.
#[must_use]
pub fn seed_projects() -> Vec<AdminProject> {
    vec![
        AdminProject {
            id: "1".to_owned(),
            title: "Modern Kitchen".to_owned(),
            category: "Kitchen".to_owned(),
            image_url: placeholder_image(0),
        },
        AdminProject {
            id: "2".to_owned(),
            title: "Classic Bathroom".to_owned(),
            category: "Bathroom".to_owned(),
            image_url: placeholder_image(1),
        },
    ]
}

/// Admin dashboard tabs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdminTab {
    #[default]
    Projects,
    Units,
}

impl AdminTab {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Projects => "Projects",
            Self::Units => "Units (Book Now)",
        }
    }
}
