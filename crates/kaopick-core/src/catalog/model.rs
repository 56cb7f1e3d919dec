//! In-memory catalog tree and its flattened entry list.

use std::path::Path;

use crate::error::{CoreError, CoreResult};
use crate::i18n::Locales;
use crate::nfc_string;

/// The contents of a [`Category`].
///
/// Emoticons normally live in leaf groups. A branch may still carry its own
/// emoticons; those are visited before the branch's children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryBody {
    /// A group of emoticons with no subcategories (possibly empty).
    Leaf { emoticons: Vec<String> },
    /// A group with child categories, plus any emoticons of its own.
    Branch {
        emoticons: Vec<String>,
        children: Vec<Category>,
    },
}

/// A named node in the catalog tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    name: String,
    body: CategoryBody,
}

impl Category {
    /// Creates a leaf category holding `emoticons`.
    pub fn leaf(name: impl Into<String>, emoticons: Vec<String>) -> Self {
        Self {
            name: name.into(),
            body: CategoryBody::Leaf { emoticons },
        }
    }

    /// Creates a branch category with `children` and no emoticons of its own.
    pub fn branch(name: impl Into<String>, children: Vec<Category>) -> Self {
        Self {
            name: name.into(),
            body: CategoryBody::Branch {
                emoticons: Vec::new(),
                children,
            },
        }
    }

    pub(crate) fn with_body(name: String, body: CategoryBody) -> Self {
        Self { name, body }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn body(&self) -> &CategoryBody {
        &self.body
    }

    /// Emoticons held directly by this category (not its descendants).
    pub fn emoticons(&self) -> &[String] {
        match &self.body {
            CategoryBody::Leaf { emoticons } | CategoryBody::Branch { emoticons, .. } => emoticons,
        }
    }

    /// Child categories; empty for a leaf.
    pub fn children(&self) -> &[Category] {
        match &self.body {
            CategoryBody::Leaf { .. } => &[],
            CategoryBody::Branch { children, .. } => children,
        }
    }
}

/// A denormalised catalog record: one emoticon with its category path.
///
/// Built once by [`Catalog::new`] in depth-first document order. `index`
/// is dense (`0..len`) and equals the entry's position in
/// [`Catalog::entries`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatEntry {
    text: String,
    path: Vec<String>,
    /// ASCII-lowercased copy of `path`, for case-insensitive segment matching.
    folded_path: Vec<String>,
    /// ASCII-lowercased display labels of `path`; empty until [`Catalog::localized`].
    folded_labels: Vec<String>,
    index: usize,
}

impl FlatEntry {
    fn new(text: &str, path: &[String], index: usize) -> Self {
        let path: Vec<String> = path.iter().map(|s| nfc_string(s)).collect();
        let folded_path = path.iter().map(|s| s.to_ascii_lowercase()).collect();
        Self {
            text: nfc_string(text),
            path,
            folded_path,
            folded_labels: Vec::new(),
            index,
        }
    }

    /// The literal emoticon string.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Ancestor category names, root first.
    pub fn path(&self) -> &[String] {
        &self.path
    }

    pub(crate) fn folded_path(&self) -> &[String] {
        &self.folded_path
    }

    pub(crate) fn folded_labels(&self) -> &[String] {
        &self.folded_labels
    }

    /// Stable position in the catalog's traversal order.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Name of the innermost category containing this entry.
    pub fn category(&self) -> Option<&str> {
        self.path.last().map(String::as_str)
    }
}

/// The root of the catalog: top-level categories and their flattened entries.
///
/// Immutable after construction. Editing the catalog means editing the file
/// and restarting the picker.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    categories: Vec<Category>,
    entries: Vec<FlatEntry>,
}

impl Catalog {
    /// Builds a catalog from already-validated categories.
    pub fn new(categories: Vec<Category>) -> Self {
        let mut entries = Vec::new();
        let mut path = Vec::new();
        for category in &categories {
            flatten_into(category, &mut path, &mut entries);
        }
        Self {
            categories,
            entries,
        }
    }

    /// Reads and parses a catalog document from `path`.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotFound`] / [`CoreError::PermissionDenied`] if the file
    ///   cannot be read.
    /// - [`CoreError::MalformedCatalog`] if the document fails validation.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| CoreError::from_io(path, e))?;
        let catalog = super::loader::load_catalog(&content)?;
        tracing::info!(
            path = %path.display(),
            categories = catalog.categories.len(),
            entries = catalog.entries.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Records the display label of every category segment, so that a query
    /// typed against the translated name finds the same entries as the
    /// document name.
    pub fn localized(self, locales: &Locales) -> Self {
        let entries = self
            .entries
            .into_iter()
            .map(|entry| {
                let folded_labels = entry
                    .path
                    .iter()
                    .map(|name| nfc_string(locales.category_label(name)).to_ascii_lowercase())
                    .collect();
                FlatEntry {
                    folded_labels,
                    ..entry
                }
            })
            .collect();
        Self { entries, ..self }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// All emoticons in depth-first document order.
    pub fn entries(&self) -> &[FlatEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up an entry by its stable index.
    pub fn get(&self, index: usize) -> Option<&FlatEntry> {
        self.entries.get(index)
    }
}

fn flatten_into(category: &Category, path: &mut Vec<String>, out: &mut Vec<FlatEntry>) {
    path.push(category.name.clone());
    for text in category.emoticons() {
        let index = out.len();
        out.push(FlatEntry::new(text, path, index));
    }
    for child in category.children() {
        flatten_into(child, path, out);
    }
    path.pop();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn texts(catalog: &Catalog) -> Vec<&str> {
        catalog.entries().iter().map(|e| e.text()).collect()
    }

    #[test]
    fn empty_catalog_has_no_entries() {
        let catalog = Catalog::new(vec![]);
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert!(catalog.get(0).is_none());
    }

    #[test]
    fn flattens_top_level_leaves_in_document_order() {
        let catalog = Catalog::new(vec![
            Category::leaf("Happy", strings(&["(^_^)", "(*‿*)"])),
            Category::leaf("Sad", strings(&["(T_T)"])),
        ]);

        assert_eq!(texts(&catalog), vec!["(^_^)", "(*‿*)", "(T_T)"]);
        assert_eq!(catalog.entries()[2].path(), &["Sad".to_string()]);
    }

    #[test]
    fn indices_are_dense_and_match_position() {
        let catalog = Catalog::new(vec![
            Category::branch(
                "Positive",
                vec![
                    Category::leaf("Joy", strings(&["a", "b"])),
                    Category::leaf("Love", strings(&["c"])),
                ],
            ),
            Category::leaf("Other", strings(&["d"])),
        ]);

        for (pos, entry) in catalog.entries().iter().enumerate() {
            assert_eq!(entry.index(), pos);
        }
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn nested_entries_carry_root_first_path() {
        let catalog = Catalog::new(vec![Category::branch(
            "Positive",
            vec![Category::leaf("Love", strings(&["(ﾉ´ з `)ノ"]))],
        )]);

        let entry = &catalog.entries()[0];
        assert_eq!(entry.path(), &strings(&["Positive", "Love"]));
        assert_eq!(entry.category(), Some("Love"));
    }

    #[test]
    fn own_emoticons_come_before_children() {
        let mixed = Category::with_body(
            "Animals".to_string(),
            CategoryBody::Branch {
                emoticons: strings(&["own"]),
                children: vec![Category::leaf("Cats", strings(&["child"]))],
            },
        );
        let catalog = Catalog::new(vec![mixed]);

        assert_eq!(texts(&catalog), vec!["own", "child"]);
        assert_eq!(catalog.entries()[0].path(), &strings(&["Animals"]));
        assert_eq!(catalog.entries()[1].path(), &strings(&["Animals", "Cats"]));
    }

    #[test]
    fn empty_leaf_contributes_nothing() {
        let catalog = Catalog::new(vec![
            Category::leaf("Empty", vec![]),
            Category::leaf("Full", strings(&["x"])),
        ]);
        assert_eq!(texts(&catalog), vec!["x"]);
        assert_eq!(catalog.categories().len(), 2);
    }

    #[test]
    fn folded_path_is_ascii_lowercase() {
        let catalog = Catalog::new(vec![Category::leaf("LoVe", strings(&["x"]))]);
        assert_eq!(catalog.entries()[0].folded_path(), &strings(&["love"]));
    }

    #[test]
    fn constructors_normalize_to_nfc() {
        let catalog = Catalog::new(vec![Category::leaf(
            "Cafe\u{301}",
            strings(&["(e\u{301}_e\u{301})"]),
        )]);

        let entry = &catalog.entries()[0];
        assert_eq!(entry.text(), "(\u{e9}_\u{e9})");
        assert_eq!(entry.path(), &strings(&["Caf\u{e9}"]));
    }

    #[test]
    fn localized_records_translated_labels() {
        let catalog = Catalog::new(vec![Category::branch(
            "Positive",
            vec![Category::leaf("Love", strings(&["(♡‿♡)"]))],
        )])
        .localized(&Locales::builtin("tr"));

        let entry = &catalog.entries()[0];
        assert_eq!(entry.folded_labels(), &strings(&["olumlu", "sevgi"]));
        assert_eq!(entry.path(), &strings(&["Positive", "Love"]));
    }

    #[test]
    fn unlocalized_entries_have_no_labels() {
        let catalog = Catalog::new(vec![Category::leaf("Love", strings(&["x"]))]);
        assert!(catalog.entries()[0].folded_labels().is_empty());
    }

    #[test]
    fn leaf_has_no_children() {
        let leaf = Category::leaf("Joy", strings(&["a"]));
        assert!(leaf.children().is_empty());
        assert_eq!(leaf.emoticons(), &strings(&["a"]));
        assert!(matches!(leaf.body(), CategoryBody::Leaf { .. }));
    }
}
