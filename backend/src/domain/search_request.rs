//! Query parameter validation.
//!
//! Inbound adapters hand over [`RawQueryParams`] exactly as received. Turning
//! them into a [`SearchRequest`] is the only place parameter errors are
//! raised; later stages receive typed, range-checked values.

use std::cmp::Ordering;
use std::fmt;
use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use super::{SearchError, UserRecord};

/// Untyped query parameters as they arrive on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawQueryParams {
    /// Page size; required, must parse as a positive integer.
    pub limit: Option<String>,
    /// Rows to skip; required, must parse as a non-negative integer.
    pub offset: Option<String>,
    /// Case-sensitive substring matched against name and about.
    pub query: Option<String>,
    /// `id`, `age` or `name`; empty or absent sorts by name.
    pub order_field: Option<String>,
    /// Required; `-1`, `0` or `1`.
    pub order_by: Option<String>,
}

/// Sortable record fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OrderField {
    /// Display name, compared lexicographically. Also used when no field is
    /// named.
    #[default]
    Name,
    /// Age, compared numerically.
    Age,
    /// Identifier, compared numerically.
    Id,
}

impl OrderField {
    /// Parse a wire field name; the empty string selects [`OrderField::Name`].
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "" | "name" => Some(Self::Name),
            "age" => Some(Self::Age),
            "id" => Some(Self::Id),
            _ => None,
        }
    }

    /// Wire name of the field.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Age => "age",
            Self::Id => "id",
        }
    }

    /// Ascending comparator for the field.
    pub fn comparator(self) -> fn(&UserRecord, &UserRecord) -> Ordering {
        match self {
            Self::Name => by_name,
            Self::Age => by_age,
            Self::Id => by_id,
        }
    }
}

fn by_name(a: &UserRecord, b: &UserRecord) -> Ordering {
    a.name().cmp(b.name())
}

fn by_age(a: &UserRecord, b: &UserRecord) -> Ordering {
    a.age().cmp(&b.age())
}

fn by_id(a: &UserRecord, b: &UserRecord) -> Ordering {
    a.id().cmp(&b.id())
}

impl fmt::Display for OrderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction: `-1` descending, `0` as-is, `1` ascending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OrderDirection {
    /// Largest first (`-1`).
    Descending,
    /// Document order, no sorting (`0`).
    #[default]
    AsIs,
    /// Smallest first (`1`).
    Ascending,
}

impl OrderDirection {
    /// Map the wire integer onto a direction.
    pub const fn from_wire(value: i64) -> Option<Self> {
        match value {
            -1 => Some(Self::Descending),
            0 => Some(Self::AsIs),
            1 => Some(Self::Ascending),
            _ => None,
        }
    }

    /// Wire integer for the direction.
    pub const fn as_wire(self) -> i8 {
        match self {
            Self::Descending => -1,
            Self::AsIs => 0,
            Self::Ascending => 1,
        }
    }
}

/// Validated search query.
///
/// ## Invariants
/// - `limit` is strictly positive.
/// - `order_field` and `order_by` come from closed sets.
///
/// # Examples
/// ```
/// use user_search::domain::{OrderDirection, OrderField, RawQueryParams, SearchRequest};
///
/// let raw = RawQueryParams {
///     limit: Some("5".into()),
///     offset: Some("0".into()),
///     query: None,
///     order_field: Some("age".into()),
///     order_by: Some("-1".into()),
/// };
/// let request = SearchRequest::try_from(raw).expect("valid params");
/// assert_eq!(request.order_field(), OrderField::Age);
/// assert_eq!(request.order_by(), OrderDirection::Descending);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchRequest {
    limit: NonZeroUsize,
    offset: usize,
    query: String,
    order_field: OrderField,
    order_by: OrderDirection,
}

impl SearchRequest {
    /// Build a request from already typed values.
    pub fn new(
        limit: NonZeroUsize,
        offset: usize,
        query: impl Into<String>,
        order_field: OrderField,
        order_by: OrderDirection,
    ) -> Self {
        Self {
            limit,
            offset,
            query: query.into(),
            order_field,
            order_by,
        }
    }

    /// Maximum number of records in the page.
    pub fn limit(&self) -> NonZeroUsize {
        self.limit
    }

    /// Records skipped after filtering and sorting.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Substring filter; empty means no filtering.
    pub fn query(&self) -> &str {
        self.query.as_str()
    }

    /// Field the records are sorted by.
    pub fn order_field(&self) -> OrderField {
        self.order_field
    }

    /// Sort direction; [`OrderDirection::AsIs`] keeps document order.
    pub fn order_by(&self) -> OrderDirection {
        self.order_by
    }

    /// Copy of this request with a different limit.
    pub fn with_limit(&self, limit: NonZeroUsize) -> Self {
        Self {
            limit,
            ..self.clone()
        }
    }
}

fn parse_integer(raw: Option<&str>) -> Result<i64, SearchError> {
    raw.ok_or(SearchError::MalformedParams)?
        .parse::<i64>()
        .map_err(|_| SearchError::MalformedParams)
}

impl TryFrom<RawQueryParams> for SearchRequest {
    type Error = SearchError;

    fn try_from(raw: RawQueryParams) -> Result<Self, Self::Error> {
        let limit = parse_integer(raw.limit.as_deref())?;
        let offset = parse_integer(raw.offset.as_deref())?;
        let order_by = parse_integer(raw.order_by.as_deref())?;

        let limit = usize::try_from(limit)
            .ok()
            .and_then(NonZeroUsize::new)
            .ok_or(SearchError::BadLimit)?;
        let offset = usize::try_from(offset).map_err(|_| SearchError::BadOffset)?;
        let order_field = OrderField::parse(raw.order_field.as_deref().unwrap_or_default())
            .ok_or(SearchError::BadOrderField)?;
        let order_by = OrderDirection::from_wire(order_by).ok_or(SearchError::BadOrderBy)?;

        Ok(Self {
            limit,
            offset,
            query: raw.query.unwrap_or_default(),
            order_field,
            order_by,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn valid() -> RawQueryParams {
        RawQueryParams {
            limit: Some("10".to_owned()),
            offset: Some("0".to_owned()),
            query: Some("Hall".to_owned()),
            order_field: Some("name".to_owned()),
            order_by: Some("1".to_owned()),
        }
    }

    fn with(mut raw: RawQueryParams, edit: impl FnOnce(&mut RawQueryParams)) -> RawQueryParams {
        edit(&mut raw);
        raw
    }

    #[rstest]
    fn accepts_well_formed_params(valid: RawQueryParams) {
        let request = SearchRequest::try_from(valid).expect("valid params");

        assert_eq!(request.limit().get(), 10);
        assert_eq!(request.offset(), 0);
        assert_eq!(request.query(), "Hall");
        assert_eq!(request.order_field(), OrderField::Name);
        assert_eq!(request.order_by(), OrderDirection::Ascending);
    }

    #[rstest]
    fn optional_params_default_to_empty(valid: RawQueryParams) {
        let raw = with(valid, |raw| {
            raw.query = None;
            raw.order_field = None;
        });
        let request = SearchRequest::try_from(raw).expect("valid params");

        assert_eq!(request.query(), "");
        assert_eq!(request.order_field(), OrderField::Name);
    }

    #[rstest]
    #[case::missing_limit(|raw: &mut RawQueryParams| raw.limit = None)]
    #[case::text_limit(|raw: &mut RawQueryParams| raw.limit = Some("ten".into()))]
    #[case::missing_offset(|raw: &mut RawQueryParams| raw.offset = None)]
    #[case::float_offset(|raw: &mut RawQueryParams| raw.offset = Some("1.5".into()))]
    #[case::missing_order_by(|raw: &mut RawQueryParams| raw.order_by = None)]
    #[case::blank_order_by(|raw: &mut RawQueryParams| raw.order_by = Some(String::new()))]
    fn unparsable_integers_are_malformed(
        valid: RawQueryParams,
        #[case] edit: fn(&mut RawQueryParams),
    ) {
        let error = SearchRequest::try_from(with(valid, edit)).expect_err("must fail");
        assert_eq!(error, SearchError::MalformedParams);
    }

    #[rstest]
    #[case::zero_limit(|raw: &mut RawQueryParams| raw.limit = Some("0".into()), SearchError::BadLimit)]
    #[case::negative_limit(|raw: &mut RawQueryParams| raw.limit = Some("-54".into()), SearchError::BadLimit)]
    #[case::negative_offset(|raw: &mut RawQueryParams| raw.offset = Some("-1".into()), SearchError::BadOffset)]
    #[case::unknown_field(|raw: &mut RawQueryParams| raw.order_field = Some("gender".into()), SearchError::BadOrderField)]
    #[case::field_case_matters(|raw: &mut RawQueryParams| raw.order_field = Some("Name".into()), SearchError::BadOrderField)]
    #[case::direction_two(|raw: &mut RawQueryParams| raw.order_by = Some("2".into()), SearchError::BadOrderBy)]
    #[case::direction_minus_two(|raw: &mut RawQueryParams| raw.order_by = Some("-2".into()), SearchError::BadOrderBy)]
    fn out_of_range_values_are_rejected(
        valid: RawQueryParams,
        #[case] edit: fn(&mut RawQueryParams),
        #[case] expected: SearchError,
    ) {
        let error = SearchRequest::try_from(with(valid, edit)).expect_err("must fail");
        assert_eq!(error, expected);
    }

    #[rstest]
    fn malformed_params_take_precedence_over_range_checks(valid: RawQueryParams) {
        let raw = with(valid, |raw| {
            raw.limit = Some("-1".into());
            raw.order_by = Some("x".into());
        });
        assert_eq!(
            SearchRequest::try_from(raw).expect_err("must fail"),
            SearchError::MalformedParams
        );
    }

    #[rstest]
    fn range_checks_run_in_fixed_order(valid: RawQueryParams) {
        let raw = with(valid, |raw| {
            raw.limit = Some("0".into());
            raw.offset = Some("-1".into());
            raw.order_field = Some("gender".into());
            raw.order_by = Some("5".into());
        });
        assert_eq!(
            SearchRequest::try_from(raw.clone()).expect_err("must fail"),
            SearchError::BadLimit
        );

        let raw = with(raw, |raw| raw.limit = Some("1".into()));
        assert_eq!(
            SearchRequest::try_from(raw.clone()).expect_err("must fail"),
            SearchError::BadOffset
        );

        let raw = with(raw, |raw| raw.offset = Some("0".into()));
        assert_eq!(
            SearchRequest::try_from(raw.clone()).expect_err("must fail"),
            SearchError::BadOrderField
        );

        let raw = with(raw, |raw| raw.order_field = Some("id".into()));
        assert_eq!(
            SearchRequest::try_from(raw).expect_err("must fail"),
            SearchError::BadOrderBy
        );
    }

    #[rstest]
    #[case(-1, Some(OrderDirection::Descending))]
    #[case(0, Some(OrderDirection::AsIs))]
    #[case(1, Some(OrderDirection::Ascending))]
    #[case(3, None)]
    fn direction_wire_values_round_trip(#[case] wire: i64, #[case] expected: Option<OrderDirection>) {
        let direction = OrderDirection::from_wire(wire);
        assert_eq!(direction, expected);
        if let Some(direction) = direction {
            assert_eq!(i64::from(direction.as_wire()), wire);
        }
    }
}
