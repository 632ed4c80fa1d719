/// Value of a single record field, borrowed from the record.
///
/// Only `Text` and `TextList` carry displayable data. Everything else a record
/// may hold maps to `Other`, which renderers skip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    TextList(&'a [String]),
    Other,
}

impl FieldValue<'_> {
    /// Separator placed between `TextList` elements
    pub const LIST_SEPARATOR: &'static str = ", ";

    /// Display string for this value, or `None` for kinds that are not rendered.
    ///
    /// Empty text and empty lists both yield `Some("")`; callers decide
    /// whether an empty value is shown.
    pub fn display(&self) -> Option<String> {
        match self {
            FieldValue::Text(text) => Some((*text).to_string()),
            FieldValue::TextList(items) => Some(items.join(Self::LIST_SEPARATOR)),
            FieldValue::Other => None,
        }
    }

    /// True when the value would not produce any visible text
    pub fn is_empty(&self) -> bool {
        self.display().is_none_or(|text| text.is_empty())
    }
}

/// A named field paired with its current value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field<'a> {
    pub name: &'static str,
    pub value: FieldValue<'a>,
}

impl<'a> Field<'a> {
    pub fn new(name: &'static str, value: FieldValue<'a>) -> Self {
        Self { name, value }
    }
}

/// Maps a field's Rust type onto a [`FieldValue`] variant
pub trait AsFieldValue {
    fn as_field_value(&self) -> FieldValue<'_>;
}

impl AsFieldValue for String {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Text(self.as_str())
    }
}

impl AsFieldValue for Vec<String> {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::TextList(self.as_slice())
    }
}

impl<T> AsFieldValue for Option<T> {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Other
    }
}

macro_rules! impl_other_field_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl AsFieldValue for $ty {
                fn as_field_value(&self) -> FieldValue<'_> {
                    FieldValue::Other
                }
            }
        )*
    };
}

impl_other_field_value!(bool, char, u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);

/// A record whose fields can be enumerated in declaration order.
///
/// Implementations are normally generated by [`define_record!`](crate::define_record),
/// so the table always matches the struct definition.
pub trait Record {
    /// Field labels in declaration order
    fn field_names() -> &'static [&'static str]
    where
        Self: Sized;

    /// Every field with its current value, in declaration order
    fn fields(&self) -> Vec<Field<'_>>;

    /// True when no field holds a displayable, non-empty value
    fn is_blank(&self) -> bool {
        self.fields().iter().all(|field| field.value.is_empty())
    }
}
