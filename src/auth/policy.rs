// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 HealthTrack

//! Account-lifecycle policy checks.
//!
//! These predicates run against an already-loaded [`UserAccount`] and do no
//! I/O of their own. The failed-attempt counter and the lock-until timestamp
//! are owned by login-failure tracking in account management; this module
//! only reads them.

use chrono::{DateTime, Utc};

use crate::models::UserAccount;

/// Why an otherwise valid identity may not authenticate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyViolation {
    /// The account's active flag is false.
    Deactivated,
    /// The account's lock-until timestamp is in the future.
    Locked,
}

/// Lock predicate: true when a lock-until timestamp exists and is strictly
/// later than `now`.
pub fn is_locked(lock_until: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    lock_until.is_some_and(|until| until > now)
}

/// Evaluate account-lifecycle policy for an account resolved this request.
///
/// Deactivation is reported before lock state, so a deactivated account
/// reports deactivation even while a stale lock is still in place.
pub fn check_account(account: &UserAccount, now: DateTime<Utc>) -> Result<(), PolicyViolation> {
    if !account.is_active {
        return Err(PolicyViolation::Deactivated);
    }
    if is_locked(account.lock_until, now) {
        return Err(PolicyViolation::Locked);
    }
    Ok(())
}
