use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueSource {
    Computed,
    Override,
}

impl ValueSource {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Computed => "computed",
            Self::Override => "override",
        }
    }
}

/// A displayed value and whether the user typed it or the engine derived it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayValue {
    pub value: String,
    pub source: ValueSource,
}

impl DisplayValue {
    pub fn computed(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            source: ValueSource::Computed,
        }
    }

    /// Non-empty overrides win over the computed value.
    pub fn resolve(override_value: Option<&str>, computed: String) -> Self {
        match override_value {
            Some(value) => Self {
                value: value.to_string(),
                source: ValueSource::Override,
            },
            None => Self::computed(computed),
        }
    }

    pub fn is_override(&self) -> bool {
        self.source == ValueSource::Override
    }
}

/// What a host surface shows for the current lead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeadDisplay {
    pub email: DisplayValue,
    pub lead_score: DisplayValue,
    pub score_reason: DisplayValue,
    pub personalized_message: DisplayValue,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing_fields: Vec<&'static str>,
}
