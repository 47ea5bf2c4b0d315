//! DRY macros for the questionnaire schema.
//!
//! - **`answer_fields!`** - Generates `AnswerSet`, the `AnswerField` key enum and
//!   the typed `FieldUpdate` enum from a single field list, so a new question is
//!   added in exactly one place and every `match` over fields stays exhaustive.
//! - **`labelled_options!`** - Generates a closed option enum whose serialized
//!   form is the option label shown to the operator.

/// Generates the answer record and its key/update companions.
///
/// Each entry is `field: Type => Variant, "label";`. The field name doubles as
/// the wire key.
macro_rules! answer_fields {
    ( $( $field:ident : $ty:ty => $variant:ident, $label:literal; )* ) => {
        /// Partial, incrementally built record of questionnaire responses.
        ///
        /// Every question is optional; absent keys are skipped on serialization.
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        pub struct AnswerSet {
            $(
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
        }

        /// Statically enumerable question keys.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum AnswerField {
            $( $variant, )*
        }

        impl AnswerField {
            /// Every field in questionnaire order.
            pub const ALL: &'static [AnswerField] = &[ $( AnswerField::$variant, )* ];

            /// Wire key of the field.
            pub fn key(&self) -> &'static str {
                match self {
                    $( AnswerField::$variant => stringify!($field), )*
                }
            }

            /// Operator-facing label.
            pub fn label(&self) -> &'static str {
                match self {
                    $( AnswerField::$variant => $label, )*
                }
            }

            /// Looks a field up by its wire key.
            pub fn from_key(key: &str) -> Option<Self> {
                match key {
                    $( stringify!($field) => Some(AnswerField::$variant), )*
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for AnswerField {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.key())
            }
        }

        // Serialized as the wire key.
        impl Serialize for AnswerField {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.key())
            }
        }

        /// A single typed edit. `None` retracts the answer.
        #[derive(Debug, Clone, PartialEq)]
        pub enum FieldUpdate {
            $( $variant(Option<$ty>), )*
        }

        impl FieldUpdate {
            /// The field this update targets.
            pub fn field(&self) -> AnswerField {
                match self {
                    $( FieldUpdate::$variant(_) => AnswerField::$variant, )*
                }
            }

            /// A retraction of `field`.
            pub fn clear(field: AnswerField) -> Self {
                match field {
                    $( AnswerField::$variant => FieldUpdate::$variant(None), )*
                }
            }
        }

        impl AnswerSet {
            /// Replaces one field with the update's value.
            pub fn apply(&mut self, update: FieldUpdate) {
                match update {
                    $( FieldUpdate::$variant(value) => self.$field = value, )*
                }
            }

            /// Removes the value stored for `field`.
            pub fn clear(&mut self, field: AnswerField) {
                self.apply(FieldUpdate::clear(field));
            }

            /// True when `field` holds a non-empty answer.
            pub fn has(&self, field: AnswerField) -> bool {
                match field {
                    $( AnswerField::$variant => self.$field.as_ref().is_some_and(Answer::is_answered), )*
                }
            }

            /// Display form of the stored answer, if any.
            pub fn display_value(&self, field: AnswerField) -> Option<String> {
                match field {
                    $(
                        AnswerField::$variant => self
                            .$field
                            .as_ref()
                            .filter(|value| Answer::is_answered(*value))
                            .map(Answer::display),
                    )*
                }
            }
        }
    };
}

/// Generates a closed option enum serialized as its label.
macro_rules! labelled_options {
    (
        $(#[$meta:meta])*
        $name:ident { $( $variant:ident => $label:literal, )* }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )*
        }

        impl $name {
            /// Options in the order they are offered.
            pub const ALL: &'static [$name] = &[ $( $name::$variant, )* ];

            /// Label as shown to the operator and sent on the wire.
            pub fn label(&self) -> &'static str {
                match self {
                    $( $name::$variant => $label, )*
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}
