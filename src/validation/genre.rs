//! Splitting of the composite genre tag into classification items

const ITEM_SEPARATOR: &str = ", ";
const CATEGORY_PREFIX: &str = "cat";

/// One comma-separated item of the genre tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenreToken {
    /// A `catNN` item, with its numeric code.
    ///
    /// The suffix is read as an unsigned integer after trimming whitespace,
    /// so `cat 21` and `cat+43` are categories and `cat-5` is not.
    Category { code: u32, text: String },
    /// Anything else, including `cat` items without a numeric suffix.
    Plain(String),
}

impl GenreToken {
    /// The item as written in the tag.
    pub fn as_str(&self) -> &str {
        match self {
            GenreToken::Category { text, .. } | GenreToken::Plain(text) => text,
        }
    }

    fn classify(item: &str) -> Self {
        match item
            .strip_prefix(CATEGORY_PREFIX)
            .and_then(|code| code.trim().parse::<u32>().ok())
        {
            Some(code) => GenreToken::Category {
                code,
                text: item.to_string(),
            },
            None => GenreToken::Plain(item.to_string()),
        }
    }
}

/// Structure of a genre tag: its flattened items and where the category sits.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedGenre {
    pub tokens: Vec<GenreToken>,
    /// Index of the category item in `tokens`.
    ///
    /// Only the first item starting with `cat` is considered. When its code
    /// does not parse the tag has no category.
    pub category_index: Option<usize>,
}

impl ParsedGenre {
    pub fn category_code(&self) -> Option<u32> {
        match self.tokens.get(self.category_index?)? {
            GenreToken::Category { code, .. } => Some(*code),
            GenreToken::Plain(_) => None,
        }
    }

    /// Every item except the category one, in tag order.
    pub fn other_items(&self) -> impl Iterator<Item = &str> + '_ {
        self.tokens
            .iter()
            .enumerate()
            .filter(move |(i, _)| Some(*i) != self.category_index)
            .map(|(_, token)| token.as_str())
    }
}

/// Flattens the raw genre values into items and locates the category.
pub fn parse_genre<S: AsRef<str>>(values: &[S]) -> ParsedGenre {
    let tokens: Vec<GenreToken> = values
        .iter()
        .flat_map(|value| value.as_ref().split(ITEM_SEPARATOR))
        .map(GenreToken::classify)
        .collect();

    let category_index = tokens
        .iter()
        .position(|token| token.as_str().starts_with(CATEGORY_PREFIX))
        .filter(|&index| matches!(tokens[index], GenreToken::Category { .. }));

    ParsedGenre {
        tokens,
        category_index,
    }
}
