//! Paging and sorting requests in the `page`, `size`, `sort=prop,dir` query
//! convention, and their translation to SeaORM ordering.

use sea_orm::{EntityTrait, Order, QueryOrder, Select};
use strum::{Display, EnumString};

use crate::error::{AppError, AppResult};

pub const DEFAULT_PAGE_SIZE: u64 = 20;
pub const MAX_PAGE_SIZE: u64 = 2000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl From<SortDirection> for Order {
    fn from(direction: SortDirection) -> Self {
        match direction {
            SortDirection::Asc => Order::Asc,
            SortDirection::Desc => Order::Desc,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOrder {
    pub property: String,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paging {
    /// Zero based page index.
    pub page: u64,
    pub size: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageRequest {
    /// `None` returns every matching row.
    pub paging: Option<Paging>,
    pub sort: Vec<SortOrder>,
}

impl PageRequest {
    /// Builds a request from raw query pairs. `sort` may repeat; unrelated
    /// keys are ignored.
    pub fn from_query(pairs: &[(String, String)]) -> AppResult<Self> {
        let mut page = None;
        let mut size = None;
        let mut sort = Vec::new();

        for (key, value) in pairs {
            match key.as_str() {
                "page" => page = Some(parse_number("page", value)?),
                "size" => {
                    let requested = parse_number("size", value)?;
                    if requested == 0 {
                        return Err(AppError::BadRequest("size must be at least 1".to_string()));
                    }
                    size = Some(requested.min(MAX_PAGE_SIZE));
                }
                "sort" => sort.extend(parse_sort(value)),
                _ => {}
            }
        }

        let paging = match (page, size) {
            (None, None) => None,
            (page, size) => {
                let paging = Paging {
                    page: page.unwrap_or(0),
                    size: size.unwrap_or(DEFAULT_PAGE_SIZE),
                };
                // The row offset is bound as a signed 64-bit value
                match paging.page.checked_mul(paging.size) {
                    Some(offset) if offset <= i64::MAX as u64 => Some(paging),
                    _ => {
                        return Err(AppError::BadRequest(format!(
                            "page {} is out of range for size {}",
                            paging.page, paging.size
                        )));
                    }
                }
            }
        };

        Ok(Self { paging, sort })
    }

    /// Applies the requested ordering, resolving each property through
    /// `resolve`. Falls back to `default` when no sort was requested.
    pub fn apply_sort<E, F>(
        &self,
        mut select: Select<E>,
        resolve: F,
        default: E::Column,
    ) -> AppResult<Select<E>>
    where
        E: EntityTrait,
        F: Fn(&str) -> Option<E::Column>,
    {
        if self.sort.is_empty() {
            return Ok(select.order_by(default, Order::Asc));
        }
        for order in &self.sort {
            let column = resolve(&order.property).ok_or_else(|| {
                AppError::BadRequest(format!("unknown sort property '{}'", order.property))
            })?;
            select = select.order_by(column, order.direction.into());
        }
        Ok(select)
    }
}

/// One slice of a listing plus the total row count.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub paging: Option<Paging>,
}

impl<T> Page<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            paging: self.paging,
        }
    }

    pub fn total_pages(&self) -> u64 {
        match self.paging {
            Some(paging) => self.total.div_ceil(paging.size),
            None => u64::from(self.total > 0),
        }
    }
}

fn parse_number(key: &str, value: &str) -> AppResult<u64> {
    value
        .trim()
        .parse()
        .map_err(|_| AppError::BadRequest(format!("{} must be a non-negative integer", key)))
}

/// `city,street,desc` sorts both properties descending; a lone token is a
/// property sorted ascending.
fn parse_sort(value: &str) -> Vec<SortOrder> {
    let tokens: Vec<&str> = value
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect();

    let (properties, direction) = match tokens.split_last() {
        Some((last, rest)) if !rest.is_empty() => match last.parse::<SortDirection>() {
            Ok(direction) => (rest, direction),
            Err(_) => (tokens.as_slice(), SortDirection::Asc),
        },
        _ => (tokens.as_slice(), SortDirection::Asc),
    };

    properties
        .iter()
        .map(|property| SortOrder {
            property: property.to_string(),
            direction,
        })
        .collect()
}
