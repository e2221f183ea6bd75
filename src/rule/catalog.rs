use super::ConditionValue;
use std::fmt;

/// How the editor collects a value for a given signal field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Text,
    Select,
    Boolean,
}

/// One selectable value of a `Select` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldOption {
    pub value: &'static str,
    pub label: &'static str,
}

impl FieldOption {
    const fn new(value: &'static str, label: &'static str) -> Self {
        Self { value, label }
    }
}

/// Master macro for the string-backed catalog enums.
///
/// Each known variant maps to exactly one wire string. Anything else lands in
/// `Other` so that stored data from older catalogs survives a decode/encode cycle.
macro_rules! define_catalog_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $( $variant:ident => $wire:literal ),* $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $variant, )*
            /// A value outside the known catalog, carried through verbatim.
            Other(String),
        }

        impl $name {
            /// Wire strings of all known variants, in display order.
            pub const KNOWN: &'static [&'static str] = &[ $( $wire, )* ];

            /// All known variants, in display order.
            pub fn known() -> impl Iterator<Item = $name> {
                Self::KNOWN.iter().map(|wire| $name::from(*wire))
            }

            pub fn as_str(&self) -> &str {
                match self {
                    $( $name::$variant => $wire, )*
                    $name::Other(raw) => raw.as_str(),
                }
            }

            pub fn is_known(&self) -> bool {
                !matches!(self, $name::Other(_))
            }

            pub fn is_empty(&self) -> bool {
                self.as_str().is_empty()
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                match raw {
                    $( $wire => $name::$variant, )*
                    other => $name::Other(other.to_string()),
                }
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                match $name::from(raw.as_str()) {
                    $name::Other(_) => $name::Other(raw),
                    known => known,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

define_catalog_enum! {
    /// A visitor or session attribute usable as the left-hand side of a condition.
    SignalField {
        Industry => "industry",
        Solution => "solution",
        ReturningVisitor => "returning_visitor",
        VisitIntent => "visit_intent",
        PageCategory => "page_category",
        ContentType => "content_type",
    }
}

define_catalog_enum! {
    /// A comparison operator, stored as the single key of an operator object.
    Operator {
        Eq => "$eq",
        Ne => "$ne",
        In => "$in",
        Nin => "$nin",
        Contains => "$contains",
        Gt => "$gt",
        Lt => "$lt",
        Gte => "$gte",
        Lte => "$lte",
    }
}

const INDUSTRY_OPTIONS: &[FieldOption] = &[
    FieldOption::new("pharma", "Pharma & Life Sciences"),
    FieldOption::new("logistics", "Logistics & Supply Chain"),
    FieldOption::new("food", "Food & Beverage"),
    FieldOption::new("retail", "Retail"),
    FieldOption::new("manufacturing", "Manufacturing"),
];

const SOLUTION_OPTIONS: &[FieldOption] = &[
    FieldOption::new("automation", "Automation"),
    FieldOption::new("digital", "Digital Solutions"),
    FieldOption::new("packaging", "Packaging"),
    FieldOption::new("supply_chain", "Supply Chain"),
];

const VISIT_INTENT_OPTIONS: &[FieldOption] = &[
    FieldOption::new("learn", "Learn"),
    FieldOption::new("explore", "Explore Solutions"),
    FieldOption::new("contact", "Contact Sales"),
];

const PAGE_CATEGORY_OPTIONS: &[FieldOption] = &[
    FieldOption::new("products", "Products"),
    FieldOption::new("solutions", "Solutions"),
    FieldOption::new("about", "About Us"),
    FieldOption::new("resources", "Resources"),
];

const CONTENT_TYPE_OPTIONS: &[FieldOption] = &[
    FieldOption::new("article", "Article"),
    FieldOption::new("case_study", "Case Study"),
    FieldOption::new("whitepaper", "Whitepaper"),
    FieldOption::new("video", "Video"),
];

impl Default for SignalField {
    fn default() -> Self {
        SignalField::Industry
    }
}

impl SignalField {
    /// Human-readable label. Unknown fields fall back to their raw string.
    pub fn label(&self) -> &str {
        match self {
            SignalField::Industry => "Industry",
            SignalField::Solution => "Solution Interest",
            SignalField::ReturningVisitor => "Returning Visitor",
            SignalField::VisitIntent => "Visit Intent",
            SignalField::PageCategory => "Page Category",
            SignalField::ContentType => "Content Type",
            SignalField::Other(raw) => raw.as_str(),
        }
    }

    pub fn value_kind(&self) -> ValueKind {
        match self {
            SignalField::ReturningVisitor => ValueKind::Boolean,
            SignalField::Other(_) => ValueKind::Text,
            _ => ValueKind::Select,
        }
    }

    /// Selectable values. Empty for boolean, text and unknown fields.
    pub fn options(&self) -> &'static [FieldOption] {
        match self {
            SignalField::Industry => INDUSTRY_OPTIONS,
            SignalField::Solution => SOLUTION_OPTIONS,
            SignalField::VisitIntent => VISIT_INTENT_OPTIONS,
            SignalField::PageCategory => PAGE_CATEGORY_OPTIONS,
            SignalField::ContentType => CONTENT_TYPE_OPTIONS,
            SignalField::ReturningVisitor | SignalField::Other(_) => &[],
        }
    }

    /// Looks up the label of one of this field's options.
    pub fn option_label(&self, value: &str) -> Option<&'static str> {
        self.options()
            .iter()
            .find(|option| option.value == value)
            .map(|option| option.label)
    }

    /// The value a condition gets when the user switches to this field.
    pub fn default_value(&self) -> ConditionValue {
        match self.value_kind() {
            ValueKind::Boolean => ConditionValue::Flag(true),
            ValueKind::Select => self
                .options()
                .first()
                .map(|option| ConditionValue::Text(option.value.to_string()))
                .unwrap_or_default(),
            ValueKind::Text => ConditionValue::default(),
        }
    }
}

impl Default for Operator {
    fn default() -> Self {
        Operator::Eq
    }
}

impl Operator {
    pub fn label(&self) -> &str {
        match self {
            Operator::Eq => "equals",
            Operator::Ne => "not equals",
            Operator::In => "is one of",
            Operator::Nin => "is not one of",
            Operator::Contains => "contains",
            Operator::Gt => "greater than",
            Operator::Lt => "less than",
            Operator::Gte => "greater or equal",
            Operator::Lte => "less or equal",
            Operator::Other(raw) => raw.as_str(),
        }
    }

    /// `$in` and `$nin` take a list of values (a multi-select in the editor).
    pub fn takes_list(&self) -> bool {
        matches!(self, Operator::In | Operator::Nin)
    }
}
