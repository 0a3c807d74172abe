//! Generic entity editor model
//!
//! Framework-free half of the CRUD table and form components:
//! - [`FieldDescriptor`] / [`ColumnDescriptor`] bind a record type to the
//!   fields a form edits and the columns a table shows
//! - [`Draft`] is the transient copy of a record being edited
//! - [`EntityForm`] drives the draft lifecycle (edit, submit, cancel)
//! - [`upsert`] / [`remove_by_key`] apply submitted records to a caller list
//!
//! Descriptors are built with the [`field!`](crate::field) and
//! [`column!`](crate::column) macros, which read and write `record.<key>`
//! directly so a descriptor naming a missing field does not compile.

use std::collections::BTreeSet;
use std::hash::Hash;

/// Record editable by the CRUD components
pub trait Record: Clone + Default + Eq + Hash + Send + Sync + 'static {
    /// Unique identifying key; empty for records not yet created
    fn key(&self) -> &str;

    fn set_key(&mut self, key: String);
}

/// Kind of input rendered for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Tel,
    Date,
    Time,
    TextArea,
    /// Select with `(value, label)` options
    Select(&'static [(&'static str, &'static str)]),
}

impl InputKind {
    /// Value of the HTML `type` attribute for `<input>` based kinds
    pub fn input_type(&self) -> &'static str {
        match self {
            InputKind::Text | InputKind::TextArea | InputKind::Select(_) => "text",
            InputKind::Email => "email",
            InputKind::Tel => "tel",
            InputKind::Date => "date",
            InputKind::Time => "time",
        }
    }
}

/// Form field bound to one `String` field of `R`
pub struct FieldDescriptor<R> {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: InputKind,
    pub required: bool,
    get: fn(&R) -> String,
    set: fn(&mut R, String),
}

// Manual impls: derive would require `R: Clone`
impl<R> Clone for FieldDescriptor<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for FieldDescriptor<R> {}

impl<R> std::fmt::Debug for FieldDescriptor<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("kind", &self.kind)
            .field("required", &self.required)
            .finish()
    }
}

impl<R> FieldDescriptor<R> {
    pub fn new(
        key: &'static str,
        label: &'static str,
        kind: InputKind,
        get: fn(&R) -> String,
        set: fn(&mut R, String),
    ) -> Self {
        Self {
            key,
            label,
            kind,
            required: false,
            get,
            set,
        }
    }

    /// Mark the field as required (native form constraint)
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn read(&self, record: &R) -> String {
        (self.get)(record)
    }

    pub fn write(&self, record: &mut R, value: String) {
        (self.set)(record, value)
    }
}

/// Table column projecting a record to its cell text
pub struct ColumnDescriptor<R> {
    pub header: &'static str,
    cell: fn(&R) -> String,
}

impl<R> Clone for ColumnDescriptor<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for ColumnDescriptor<R> {}

impl<R> ColumnDescriptor<R> {
    pub fn new(header: &'static str, cell: fn(&R) -> String) -> Self {
        Self { header, cell }
    }

    pub fn cell(&self, record: &R) -> String {
        (self.cell)(record)
    }
}

/// Build a [`FieldDescriptor`] for a `String` field of a record type
#[macro_export]
macro_rules! field {
    ($record:ty, $key:ident, $label:expr, $kind:expr) => {
        $crate::core::editor::FieldDescriptor::<$record>::new(
            stringify!($key),
            $label,
            $kind,
            |record: &$record| record.$key.clone(),
            |record: &mut $record, value: String| record.$key = value,
        )
    };
}

/// Build a [`ColumnDescriptor`] showing one field of a record type
#[macro_export]
macro_rules! column {
    ($record:ty, $key:ident, $header:expr) => {
        $crate::core::editor::ColumnDescriptor::<$record>::new($header, |record: &$record| {
            record.$key.to_string()
        })
    };
}

/// One rendered table row
///
/// Carries the whole record, so two rows compare equal only when every field
/// matches, shown in a column or not.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableRow<R> {
    pub key: String,
    pub cells: Vec<String>,
    pub record: R,
}

/// Project records to rows, one per record in input order
pub fn table_rows<R: Record>(records: &[R], columns: &[ColumnDescriptor<R>]) -> Vec<TableRow<R>> {
    records
        .iter()
        .map(|record| TableRow {
            key: record.key().to_string(),
            cells: columns.iter().map(|column| column.cell(record)).collect(),
            record: record.clone(),
        })
        .collect()
}

/// Transient copy of a record being edited
#[derive(Debug, Clone, PartialEq)]
pub struct Draft<R> {
    original: R,
    working: R,
    touched: BTreeSet<&'static str>,
}

impl<R: Record> Draft<R> {
    pub fn new(initial: R) -> Self {
        Self {
            working: initial.clone(),
            original: initial,
            touched: BTreeSet::new(),
        }
    }

    /// Current value of a field; unset fields read as empty strings
    pub fn value(&self, field: &FieldDescriptor<R>) -> String {
        field.read(&self.working)
    }

    pub fn edit(&mut self, field: &FieldDescriptor<R>, value: String) {
        field.write(&mut self.working, value);
        self.touched.insert(field.key);
    }

    /// Keys of the fields edited so far
    pub fn touched(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.touched.iter().copied()
    }

    /// Whether the draft differs from the record it was seeded with
    pub fn is_dirty(&self) -> bool {
        self.working != self.original
    }

    pub fn original(&self) -> &R {
        &self.original
    }

    pub fn into_record(self) -> R {
        self.working
    }
}

/// Draft lifecycle for one form instance
///
/// The draft is dropped on submit or cancel; later events are ignored.
#[derive(Debug, Clone)]
pub struct EntityForm<R> {
    fields: Vec<FieldDescriptor<R>>,
    draft: Option<Draft<R>>,
}

impl<R: Record> EntityForm<R> {
    pub fn new(initial: R, fields: Vec<FieldDescriptor<R>>) -> Self {
        Self {
            fields,
            draft: Some(Draft::new(initial)),
        }
    }

    pub fn fields(&self) -> &[FieldDescriptor<R>] {
        &self.fields
    }

    /// Whether the form still holds a draft
    pub fn is_open(&self) -> bool {
        self.draft.is_some()
    }

    pub fn draft(&self) -> Option<&Draft<R>> {
        self.draft.as_ref()
    }

    /// Value of the field named `key`, empty when unknown or closed
    pub fn value(&self, key: &str) -> String {
        match (&self.draft, self.field(key)) {
            (Some(draft), Some(field)) => draft.value(field),
            _ => String::new(),
        }
    }

    /// Apply one keystroke to the draft; returns false when ignored
    pub fn edit(&mut self, key: &str, value: String) -> bool {
        let Some(field) = self.field(key).copied() else {
            return false;
        };
        match self.draft.as_mut() {
            Some(draft) => {
                draft.edit(&field, value);
                true
            }
            None => false,
        }
    }

    /// Take the edited record out of the form
    pub fn submit(&mut self) -> Option<R> {
        self.draft.take().map(Draft::into_record)
    }

    /// Discard the draft; returns false if it was already gone
    pub fn cancel(&mut self) -> bool {
        self.draft.take().is_some()
    }

    fn field(&self, key: &str) -> Option<&FieldDescriptor<R>> {
        self.fields.iter().find(|field| field.key == key)
    }
}

/// Insert `record` or replace the record with the same key
///
/// Records without a key get a fresh UUID. Returns the stored key.
pub fn upsert<R: Record>(records: &mut Vec<R>, mut record: R) -> String {
    if record.key().is_empty() {
        record.set_key(uuid::Uuid::new_v4().to_string());
    }
    let key = record.key().to_string();
    match records.iter_mut().find(|existing| existing.key() == key) {
        Some(existing) => *existing = record,
        None => records.push(record),
    }
    key
}

/// Remove the record with `key`; returns whether one was removed
pub fn remove_by_key<R: Record>(records: &mut Vec<R>, key: &str) -> bool {
    let before = records.len();
    records.retain(|record| record.key() != key);
    records.len() != before
}
