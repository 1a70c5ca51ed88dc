#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub fn flipped(&self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Column sort selected by clicking table headers. `field` is the column
/// label as shown; callers map it to the backend field name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortState {
    pub field: Option<String>,
    pub direction: SortDirection,
}

impl SortState {
    /// Clicking the active column flips direction; any other column starts
    /// ascending.
    pub fn toggle(&mut self, field: &str) {
        if self.field.as_deref() == Some(field) {
            self.direction = self.direction.flipped();
        } else {
            self.field = Some(field.to_string());
            self.direction = SortDirection::Asc;
        }
    }

    pub fn is_active(&self, field: &str) -> bool {
        self.field.as_deref() == Some(field)
    }

    /// `sort` query value, `api_field,direction`, using `map` to translate
    /// the column label.
    pub fn query_value(&self, map: impl Fn(&str) -> Option<&'static str>) -> Option<String> {
        let api_field = map(self.field.as_deref()?)?;
        Some(format!("{api_field},{}", self.direction.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(label: &str) -> Option<&'static str> {
        match label {
            "Name" => Some("name"),
            "Technician" => Some("technician.name"),
            _ => None,
        }
    }

    #[test]
    fn same_column_flips_direction() {
        let mut sort = SortState::default();
        sort.toggle("Name");
        assert_eq!(sort.query_value(columns).as_deref(), Some("name,asc"));
        sort.toggle("Name");
        assert_eq!(sort.query_value(columns).as_deref(), Some("name,desc"));
        sort.toggle("Name");
        assert_eq!(sort.direction, SortDirection::Asc);
    }

    #[test]
    fn new_column_starts_ascending() {
        let mut sort = SortState::default();
        sort.toggle("Name");
        sort.toggle("Name");
        sort.toggle("Technician");
        assert!(sort.is_active("Technician"));
        assert_eq!(
            sort.query_value(columns).as_deref(),
            Some("technician.name,asc")
        );
    }

    #[test]
    fn unsorted_or_unmapped_sends_nothing() {
        let mut sort = SortState::default();
        assert_eq!(sort.query_value(columns), None);
        sort.toggle("Actions");
        assert_eq!(sort.query_value(columns), None);
    }
}
