use uuid::Uuid;

/// A product grouping, referenced weakly by products. Categories are
/// managed outside this service's HTTP surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
}

impl Category {
    pub fn from_repository(id: Uuid, name: String) -> Self {
        Self { id, name }
    }
}
