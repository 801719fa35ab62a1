// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Domain API Modules
//!
//! One stateless handle per backend resource, borrowed from an [`ApiClient`]:
//!
//! ```no_run
//! # async fn demo() -> wealth_api_client::ApiResult<()> {
//! use wealth_api_client::{api::documents::DocumentListOptions, ApiClient};
//!
//! let client = ApiClient::from_env()?;
//! let page = client
//!     .documents()
//!     .list_documents(&DocumentListOptions {
//!         tags: vec!["tax".into()],
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("{}", page["data"]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! | Module | Resource |
//! |--------|----------|
//! | [`accounts`] | investment accounts, balances, activity |
//! | [`assets`] | held assets, valuations, asset documents |
//! | [`banking`] | linked bank accounts, bank transactions, transfers |
//! | [`compliance`] | KYC, accreditation, compliance checks |
//! | [`crm`] | advisor CRM: users, dashboard, updates feed |
//! | [`documents`] | document vault, uploads, downloads |
//! | [`investment`] | opportunities and commitments |
//! | [`marketplace`] | secondary-market listings and offers |
//! | [`payments`] | payments and payment methods |
//! | [`portfolio`] | summary, holdings, performance, allocation |
//! | [`reports`] | generated reports and tax documents |
//! | [`subscriptions`] | plans, subscription, invoices |
//! | [`trading`] | orders, quotes, order book, trades |
//!
//! Every operation returns the response with `data` camel-cased, or an
//! [`ApiError`](crate::ApiError) carrying the HTTP status.

use crate::auth::AuthApi;
use crate::http::ApiClient;

pub mod accounts;
pub mod assets;
pub mod banking;
pub mod common;
pub mod compliance;
pub mod crm;
pub mod documents;
pub mod investment;
pub mod marketplace;
pub mod payments;
pub mod portfolio;
pub mod reports;
pub mod subscriptions;
pub mod trading;

pub use accounts::AccountsApi;
pub use assets::AssetsApi;
pub use banking::BankingApi;
pub use common::{DateRange, Page, SortOrder};
pub use compliance::ComplianceApi;
pub use crm::CrmApi;
pub use documents::DocumentsApi;
pub use investment::InvestmentApi;
pub use marketplace::MarketplaceApi;
pub use payments::PaymentsApi;
pub use portfolio::PortfolioApi;
pub use reports::ReportsApi;
pub use subscriptions::SubscriptionsApi;
pub use trading::TradingApi;

impl ApiClient {
    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    pub fn accounts(&self) -> AccountsApi<'_> {
        AccountsApi::new(self)
    }

    pub fn assets(&self) -> AssetsApi<'_> {
        AssetsApi::new(self)
    }

    pub fn banking(&self) -> BankingApi<'_> {
        BankingApi::new(self)
    }

    pub fn compliance(&self) -> ComplianceApi<'_> {
        ComplianceApi::new(self)
    }

    pub fn crm(&self) -> CrmApi<'_> {
        CrmApi::new(self)
    }

    pub fn documents(&self) -> DocumentsApi<'_> {
        DocumentsApi::new(self)
    }

    pub fn investment(&self) -> InvestmentApi<'_> {
        InvestmentApi::new(self)
    }

    pub fn marketplace(&self) -> MarketplaceApi<'_> {
        MarketplaceApi::new(self)
    }

    pub fn payments(&self) -> PaymentsApi<'_> {
        PaymentsApi::new(self)
    }

    pub fn portfolio(&self) -> PortfolioApi<'_> {
        PortfolioApi::new(self)
    }

    pub fn reports(&self) -> ReportsApi<'_> {
        ReportsApi::new(self)
    }

    pub fn subscriptions(&self) -> SubscriptionsApi<'_> {
        SubscriptionsApi::new(self)
    }

    pub fn trading(&self) -> TradingApi<'_> {
        TradingApi::new(self)
    }
}
