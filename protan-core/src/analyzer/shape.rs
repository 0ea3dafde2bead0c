/// Collapses a single-entry list to its only value; any other length stays a list.
///
/// Batch callers have historically received a bare value when exactly one
/// entry exists. Internal code keeps `Vec`s and converts only at the edge.
#[derive(Clone, Debug, PartialEq)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn collapse(items: Vec<T>) -> Self {
        match <[T; 1]>::try_from(items) {
            Ok([item]) => OneOrMany::One(item),
            Err(items) => OneOrMany::Many(items),
        }
    }

    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(item) => vec![item],
            OneOrMany::Many(items) => items,
        }
    }
}
