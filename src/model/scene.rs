//! Scene of text objects and the current selection

use serde::Serialize;

use crate::text::is_vertical;

/// Kind of scene object. Only `Font` objects carry convertible text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    Font,
    Mesh,
    Curve,
    Empty,
}

/// Horizontal alignment of a text object's body
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAlign {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

/// A named object with a text body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextObject {
    pub name: String,
    pub kind: ObjectKind,
    pub body: String,
    pub align: HorizontalAlign,
}

impl TextObject {
    /// Create a left-aligned `Font` object
    pub fn font(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ObjectKind::Font,
            body: body.into(),
            align: HorizontalAlign::Left,
        }
    }

    /// Create a non-text object of the given kind
    pub fn other(name: impl Into<String>, kind: ObjectKind) -> Self {
        Self {
            name: name.into(),
            kind,
            body: String::new(),
            align: HorizontalAlign::Left,
        }
    }

    pub fn is_text(&self) -> bool {
        self.kind == ObjectKind::Font
    }

    pub fn is_vertical(&self) -> bool {
        is_vertical(&self.body)
    }

    pub fn status(&self) -> ObjectStatus {
        ObjectStatus {
            name: self.name.clone(),
            kind: self.kind,
            vertical: self.is_text() && self.is_vertical(),
            align: self.align,
        }
    }
}

/// Snapshot of an object's writing state, for reporting
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObjectStatus {
    pub name: String,
    pub kind: ObjectKind,
    pub vertical: bool,
    pub align: HorizontalAlign,
}

/// Objects in insertion order plus the indices of the selected ones
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub objects: Vec<TextObject>,
    /// Selected object indices, in selection order, without duplicates
    pub selected: Vec<usize>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object and return its index
    pub fn add_object(&mut self, object: TextObject) -> usize {
        self.objects.push(object);
        self.objects.len() - 1
    }

    /// Add `index` to the selection. Returns false if it does not exist.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.objects.len() {
            tracing::warn!(
                "Cannot select object {}: scene has {} objects",
                index,
                self.objects.len()
            );
            return false;
        }
        if !self.selected.contains(&index) {
            self.selected.push(index);
        }
        true
    }

    pub fn select_all(&mut self) {
        self.selected = (0..self.objects.len()).collect();
    }

    pub fn deselect_all(&mut self) {
        self.selected.clear();
    }

    /// Selected objects in selection order
    pub fn selected_objects(&self) -> impl Iterator<Item = &TextObject> {
        self.selected.iter().filter_map(|&i| self.objects.get(i))
    }

    pub fn object_by_name(&self, name: &str) -> Option<&TextObject> {
        self.objects.iter().find(|o| o.name == name)
    }

    pub fn object_by_name_mut(&mut self, name: &str) -> Option<&mut TextObject> {
        self.objects.iter_mut().find(|o| o.name == name)
    }
}
