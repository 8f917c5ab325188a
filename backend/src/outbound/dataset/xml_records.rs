//! Streaming decoder for the XML user dataset.
//!
//! The document is a root element with one `<row>` group per user:
//!
//! ```text
//! <root>
//!   <row>
//!     <id>0</id>
//!     <age>22</age>
//!     <first_name>Boyd</first_name>
//!     <last_name>Wolf</last_name>
//!     <about>Nulla cillum enim.
//! </about>
//!     <gender>male</gender>
//!     <favoriteFruit>apple</favoriteFruit>
//!   </row>
//! </root>
//! ```
//!
//! Only the six recognised tags feed a record; anything else inside a row,
//! including the trailing `favoriteFruit` marker, is skipped. Text is read
//! verbatim (no whitespace trimming) so the biography keeps its exact content
//! up to the single trailing break removed here.

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::domain::UserRecord;

const ROW_TAG: &[u8] = b"row";

/// Depth of the root element, a row and a row field respectively.
const ROOT_DEPTH: usize = 1;
const ROW_DEPTH: usize = 2;
const FIELD_DEPTH: usize = 3;

/// Errors raised while decoding the dataset document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DatasetParseError {
    /// The document bytes are not UTF-8.
    #[error("dataset is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),
    /// The markup itself is broken.
    #[error("malformed markup near byte {position}: {message}")]
    Markup { position: u64, message: String },
    /// The document contains no root element.
    #[error("dataset has no root element")]
    MissingRoot,
    /// The document ended while elements were still open.
    #[error("dataset ends inside an open element")]
    Truncated,
    /// A numeric field holds something other than an integer.
    #[error("field `{field}` is not an integer: {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Id,
    Age,
    FirstName,
    LastName,
    About,
    Gender,
}

impl Field {
    fn from_tag(tag: &[u8]) -> Option<Self> {
        match tag {
            b"id" => Some(Self::Id),
            b"age" => Some(Self::Age),
            b"first_name" => Some(Self::FirstName),
            b"last_name" => Some(Self::LastName),
            b"about" => Some(Self::About),
            b"gender" => Some(Self::Gender),
            _ => None,
        }
    }
}

/// Raw text collected for one row before normalisation.
#[derive(Debug, Default)]
struct RowText {
    id: String,
    age: String,
    first_name: String,
    last_name: String,
    about: String,
    gender: String,
}

impl RowText {
    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Id => &mut self.id,
            Field::Age => &mut self.age,
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::About => &mut self.about,
            Field::Gender => &mut self.gender,
        }
    }

    /// A repeated tag replaces whatever an earlier occurrence left behind.
    fn open(&mut self, field: Field) {
        self.slot(field).clear();
    }

    /// Text and CDATA chunks of one element accumulate.
    fn push(&mut self, field: Field, text: &str) {
        self.slot(field).push_str(text);
    }

    fn into_record(self) -> Result<UserRecord, DatasetParseError> {
        let id = parse_integer("id", &self.id)?;
        let age = parse_integer("age", &self.age)?;
        let name = format!("{} {}", self.first_name, self.last_name);
        Ok(UserRecord::new(
            id,
            name,
            age,
            strip_trailing_break(self.about),
            self.gender,
        ))
    }
}

/// Absent or empty numeric fields decode as zero; anything else must be an
/// integer, optionally surrounded by whitespace.
fn parse_integer(field: &'static str, raw: &str) -> Result<i64, DatasetParseError> {
    if raw.is_empty() {
        return Ok(0);
    }
    raw.trim()
        .parse()
        .map_err(|_| DatasetParseError::InvalidNumber {
            field,
            value: raw.to_owned(),
        })
}

/// Remove exactly one trailing newline or space.
fn strip_trailing_break(mut about: String) -> String {
    if about.ends_with(['\n', ' ']) {
        about.pop();
    }
    about
}

/// Decode `document` into records in document order.
///
/// Decoding is all-or-nothing: any error discards the records read so far.
///
/// # Errors
///
/// Returns [`DatasetParseError`] for non-UTF-8 input, malformed or truncated
/// markup, a missing root element, or a non-integer `id`/`age`.
///
/// # Examples
/// ```
/// use user_search::outbound::dataset::parse_users;
///
/// let xml = b"<root><row><id>1</id><age>30</age><first_name>Ann</first_name>\
///     <last_name>Lee</last_name><about>Hi\n</about><gender>female</gender></row></root>";
/// let users = parse_users(xml).expect("well-formed dataset");
/// assert_eq!(users[0].name(), "Ann Lee");
/// assert_eq!(users[0].about(), "Hi");
/// ```
pub fn parse_users(document: &[u8]) -> Result<Vec<UserRecord>, DatasetParseError> {
    let text = std::str::from_utf8(document)?;
    let mut reader = Reader::from_str(text);

    let mut users = Vec::new();
    let mut depth = 0_usize;
    let mut seen_root = false;
    let mut row: Option<RowText> = None;
    let mut field: Option<Field> = None;

    loop {
        let event = reader.read_event().map_err(|err| DatasetParseError::Markup {
            position: reader.error_position().try_into().unwrap_or(u64::MAX),
            message: err.to_string(),
        })?;

        match event {
            Event::Start(start) => {
                depth += 1;
                seen_root = true;
                match depth {
                    ROW_DEPTH if start.name().as_ref() == ROW_TAG => {
                        row = Some(RowText::default());
                    }
                    FIELD_DEPTH => {
                        field = Field::from_tag(start.name().as_ref());
                        if let (Some(opened), Some(fields)) = (field, row.as_mut()) {
                            fields.open(opened);
                        }
                    }
                    _ => {}
                }
            }
            Event::Empty(start) => {
                seen_root = true;
                match depth {
                    ROOT_DEPTH if start.name().as_ref() == ROW_TAG => {
                        users.push(RowText::default().into_record()?);
                    }
                    ROW_DEPTH => {
                        if let (Some(emptied), Some(fields)) =
                            (Field::from_tag(start.name().as_ref()), row.as_mut())
                        {
                            fields.open(emptied);
                        }
                    }
                    _ => {}
                }
            }
            Event::End(_) => {
                match depth {
                    FIELD_DEPTH => field = None,
                    ROW_DEPTH => {
                        if let Some(fields) = row.take() {
                            users.push(fields.into_record()?);
                        }
                    }
                    _ => {}
                }
                depth = depth.saturating_sub(1);
            }
            Event::Text(content) if depth == FIELD_DEPTH => {
                if let (Some(active), Some(fields)) = (field, row.as_mut()) {
                    let unescaped = content.unescape().map_err(|err| DatasetParseError::Markup {
                        position: reader.buffer_position().try_into().unwrap_or(u64::MAX),
                        message: err.to_string(),
                    })?;
                    fields.push(active, &unescaped);
                }
            }
            Event::CData(content) if depth == FIELD_DEPTH => {
                if let (Some(active), Some(fields)) = (field, row.as_mut()) {
                    fields.push(active, std::str::from_utf8(&content)?);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if depth != 0 {
        return Err(DatasetParseError::Truncated);
    }
    if !seen_root {
        return Err(DatasetParseError::MissingRoot);
    }
    Ok(users)
}
