/// Declares a record struct together with its [`Record`](crate::Record) table.
///
/// Each field is written as `"Label" => vis name: Type`. The label is what
/// human-readable output shows; the field name is what serde uses. Order of
/// declaration is the order of both.
///
/// ```
/// use habari_types::{define_record, Record};
///
/// define_record! {
///     #[derive(Debug, Default)]
///     pub struct Release {
///         "Title" => pub title: String,
///         "Genres" => pub genres: Vec<String>,
///     }
/// }
///
/// assert_eq!(Release::field_names(), &["Title", "Genres"]);
/// ```
#[macro_export]
macro_rules! define_record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $label:literal => $field_vis:vis $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $ty,
            )*
        }

        impl $crate::Record for $name {
            fn field_names() -> &'static [&'static str] {
                &[$($label),*]
            }

            fn fields(&self) -> ::std::vec::Vec<$crate::Field<'_>> {
                ::std::vec![
                    $(
                        $crate::Field::new(
                            $label,
                            $crate::AsFieldValue::as_field_value(&self.$field),
                        )
                    ),*
                ]
            }
        }
    };
}
