/// State of a list query as shown by a table.
///
/// `Empty` and `Error` are separate so "no rows" is never confused with
/// "the request failed".
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState<T> {
    #[default]
    Loading,
    Empty,
    Error(String),
    Loaded(Vec<T>),
}

impl<T> LoadState<T> {
    pub fn from_result<E: std::fmt::Display>(result: Result<Vec<T>, E>) -> Self {
        match result {
            Ok(rows) if rows.is_empty() => Self::Empty,
            Ok(rows) => Self::Loaded(rows),
            Err(e) => Self::Error(e.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Rows currently available (empty unless loaded)
    pub fn rows(&self) -> &[T] {
        match self {
            Self::Loaded(rows) => rows,
            _ => &[],
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> LoadState<U> {
        match self {
            Self::Loading => LoadState::Loading,
            Self::Empty => LoadState::Empty,
            Self::Error(e) => LoadState::Error(e),
            Self::Loaded(rows) => LoadState::Loaded(rows.into_iter().map(f).collect()),
        }
    }
}
