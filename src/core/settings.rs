use crate::core::rates::reapply_rates;
use crate::errors::{AppError, AppResult};
use crate::models::settings::{AppSettings, SettingsPatch};
use crate::store::{Store, audit};

pub struct SettingsLogic;

/// Outcome of a settings update.
#[derive(Debug)]
pub struct SettingsUpdate {
    pub settings: AppSettings,
    /// Number of entries re-priced, `None` when pricing inputs did not change.
    pub repriced: Option<usize>,
}

fn check_non_negative(label: &str, v: f64) -> AppResult<()> {
    if !v.is_finite() || v < 0.0 {
        return Err(AppError::Validation(format!("{label} must be >= 0, got {v}")));
    }
    Ok(())
}

impl SettingsLogic {
    /// Merge `patch` into `current`, validating every provided value.
    pub fn merge(current: &AppSettings, patch: &SettingsPatch) -> AppResult<AppSettings> {
        let mut next = current.clone();

        if let Some(r) = patch.hourly_rate {
            check_non_negative("hourly rate", r)?;
            next.hourly_rate = r;
        }
        if let Some(r) = patch.overtime_rate {
            check_non_negative("overtime rate", r)?;
            next.overtime_rate = r;
        }
        if let Some(l) = patch.daily_limit {
            if !l.is_finite() || l <= 0.0 {
                return Err(AppError::Validation(format!(
                    "daily limit must be > 0, got {l}"
                )));
            }
            next.daily_limit = l;
        }
        if let Some(f) = patch.expense_fund {
            check_non_negative("expense fund", f)?;
            next.expense_fund = f;
        }
        if let Some(c) = &patch.currency {
            let c = c.trim().to_uppercase();
            if c.len() != 3 || !c.chars().all(|ch| ch.is_ascii_alphabetic()) {
                return Err(AppError::Validation(format!(
                    "currency must be a 3-letter code, got '{c}'"
                )));
            }
            next.currency = c;
        }
        if let Some(n) = &patch.user_name {
            next.user_name = n.trim().to_string();
        }

        Ok(next)
    }

    /// Save the new settings. If a rate or the daily limit changed, every
    /// entry of the owner is re-priced and written in the same save, so
    /// settings and earnings never disagree.
    pub fn apply(
        store: &mut dyn Store,
        owner: &str,
        patch: &SettingsPatch,
    ) -> AppResult<SettingsUpdate> {
        let current = store.load_settings(owner)?;
        let next = Self::merge(&current, patch)?;

        let pricing_changed = next.hourly_rate != current.hourly_rate
            || next.overtime_rate != current.overtime_rate
            || next.daily_limit != current.daily_limit;

        let repriced = if pricing_changed {
            let entries = store.load_time_entries(owner)?;
            let updated = reapply_rates(
                &entries,
                next.hourly_rate,
                next.overtime_rate,
                next.daily_limit,
            );
            store.save_repricing(&next, &updated)?;
            Some(updated.len())
        } else {
            store.save_settings(&next)?;
            None
        };

        audit(
            store,
            "settings",
            owner,
            &format!(
                "rate={} overtime={} limit={} fund={} currency={}",
                next.hourly_rate,
                next.overtime_rate,
                next.daily_limit,
                next.expense_fund,
                next.currency
            ),
        );

        Ok(SettingsUpdate {
            settings: next,
            repriced,
        })
    }
}
