// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Authentication Module
//!
//! Bearer-token session handling for the wealth-management backend.
//!
//! ## Auth Flow
//!
//! 1. `login` posts the credentials to `/auth/login`
//! 2. The backend answers with either:
//!    - `access_token` + `refresh_token` (+ `user`): persisted in one batch
//!    - a second-factor challenge: nothing is persisted, the caller follows
//!      up with `verify_otp` using the temporary token
//! 3. Every later request carries `Authorization: Bearer <access_token>`
//! 4. `refresh_token` swaps the pair; `logout` revokes it and clears storage
//!
//! ## Security
//!
//! - Tokens and passwords are never logged
//! - Roles on the cached [`UserSnapshot`] are advisory; the backend enforces access

pub mod models;
pub mod roles;
pub mod service;

pub use models::{
    AuthSession, ChangePasswordRequest, LoginOutcome, LoginRequest, OtpPurpose, OtpRequest,
    RegisterRequest, ResetPasswordRequest, SecondFactorChallenge, TokenPair, UserSnapshot,
    VerifyOtpRequest,
};
pub use roles::Role;
pub use service::AuthApi;
