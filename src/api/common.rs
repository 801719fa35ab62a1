// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Option fragments shared by several domains.
//!
//! Flatten these into a domain's option struct; unset fields serialize as
//! `null` and are never sent.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::http::QueryParam;

/// `page` / `per_page` pagination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl Page {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: Some(page),
            per_page: Some(per_page),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Inclusive `start_date` / `end_date` filter, sent as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl DateRange {
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start_date: Some(start),
            end_date: Some(end),
        }
    }
}

pub(crate) const PAGE: QueryParam = QueryParam::plain("page");
pub(crate) const PER_PAGE: QueryParam = QueryParam::plain("per_page");
pub(crate) const START_DATE: QueryParam = QueryParam::plain("start_date");
pub(crate) const END_DATE: QueryParam = QueryParam::plain("end_date");
pub(crate) const SORT_BY: QueryParam = QueryParam::plain("sort_by");
pub(crate) const SORT_ORDER: QueryParam = QueryParam::plain("sort_order");
pub(crate) const STATUS: QueryParam = QueryParam::plain("status");
pub(crate) const SEARCH: QueryParam = QueryParam::plain("search");
