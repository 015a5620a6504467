use crate::errors::{AppError, AppResult};
use crate::models::advance::AdvanceEntry;
use crate::models::expense::{ExpenseCategory, ExpenseEntry};
use crate::models::settings::AppSettings;
use crate::models::time_entry::TimeEntry;
use crate::models::user::{Role, User};
use chrono::{NaiveDate, NaiveTime};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

fn conversion_error(col: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(col, rusqlite::types::Type::Text, Box::new(err))
}

fn get_date(row: &Row, col: &str) -> Result<NaiveDate> {
    let raw: String = row.get(col)?;
    NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
        .map_err(|_| conversion_error(0, AppError::InvalidDate(raw.clone())))
}

fn get_time(row: &Row, col: &str) -> Result<NaiveTime> {
    let raw: String = row.get(col)?;
    NaiveTime::parse_from_str(&raw, "%H:%M")
        .map_err(|_| conversion_error(0, AppError::InvalidTime(raw.clone())))
}

fn get_opt_time(row: &Row, col: &str) -> Result<Option<NaiveTime>> {
    let raw: Option<String> = row.get(col)?;
    match raw {
        Some(s) if !s.trim().is_empty() => NaiveTime::parse_from_str(&s, "%H:%M")
            .map(Some)
            .map_err(|_| conversion_error(0, AppError::InvalidTime(s.clone()))),
        _ => Ok(None),
    }
}

fn fmt_date(d: &NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

fn fmt_time(t: &NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

// ---------------------------
// Settings
// ---------------------------

pub fn load_settings(conn: &Connection, user_id: &str) -> AppResult<Option<AppSettings>> {
    let mut stmt = conn.prepare_cached(
        "SELECT user_id, hourly_rate, overtime_rate, daily_limit, currency, user_name, expense_fund
         FROM settings WHERE user_id = ?1",
    )?;

    let settings = stmt
        .query_row([user_id], |row| {
            Ok(AppSettings {
                user_id: row.get("user_id")?,
                hourly_rate: row.get("hourly_rate")?,
                overtime_rate: row.get("overtime_rate")?,
                daily_limit: row.get("daily_limit")?,
                currency: row.get("currency")?,
                user_name: row.get("user_name")?,
                expense_fund: row.get("expense_fund")?,
            })
        })
        .optional()?;

    Ok(settings)
}

pub fn upsert_settings(conn: &Connection, s: &AppSettings) -> AppResult<()> {
    conn.execute(
        "INSERT INTO settings (user_id, hourly_rate, overtime_rate, daily_limit, currency, user_name, expense_fund)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
         ON CONFLICT(user_id) DO UPDATE SET
            hourly_rate = excluded.hourly_rate,
            overtime_rate = excluded.overtime_rate,
            daily_limit = excluded.daily_limit,
            currency = excluded.currency,
            user_name = excluded.user_name,
            expense_fund = excluded.expense_fund",
        params![
            s.user_id,
            s.hourly_rate,
            s.overtime_rate,
            s.daily_limit,
            s.currency,
            s.user_name,
            s.expense_fund
        ],
    )?;
    Ok(())
}

// ---------------------------
// Time entries
// ---------------------------

pub fn map_time_entry(row: &Row) -> Result<TimeEntry> {
    Ok(TimeEntry {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        date: get_date(row, "date")?,
        start: get_time(row, "start_time")?,
        lunch_start: get_time(row, "lunch_start_time")?,
        lunch_end: get_time(row, "lunch_end_time")?,
        dinner_start: get_opt_time(row, "dinner_start_time")?,
        dinner_end: get_opt_time(row, "dinner_end_time")?,
        end: get_time(row, "end_time")?,
        description: row.get("description")?,
        is_holiday: row.get::<_, i32>("is_holiday")? == 1,
        total_hours: row.get("total_hours")?,
        regular_hours: row.get("regular_hours")?,
        overtime_hours: row.get("overtime_hours")?,
        earnings: row.get("earnings")?,
    })
}

pub fn load_time_entries(conn: &Connection, user_id: &str) -> AppResult<Vec<TimeEntry>> {
    let mut stmt = conn.prepare_cached(
        "SELECT * FROM time_entries
         WHERE user_id = ?1
         ORDER BY date ASC",
    )?;

    let rows = stmt.query_map([user_id], map_time_entry)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn upsert_time_entry(conn: &Connection, e: &TimeEntry, user_id: &str) -> AppResult<()> {
    conn.execute(
        "INSERT INTO time_entries (id, user_id, date, start_time, lunch_start_time, lunch_end_time,
                                   dinner_start_time, dinner_end_time, end_time, description,
                                   is_holiday, total_hours, regular_hours, overtime_hours, earnings)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)
         ON CONFLICT(id) DO UPDATE SET
            date = excluded.date,
            start_time = excluded.start_time,
            lunch_start_time = excluded.lunch_start_time,
            lunch_end_time = excluded.lunch_end_time,
            dinner_start_time = excluded.dinner_start_time,
            dinner_end_time = excluded.dinner_end_time,
            end_time = excluded.end_time,
            description = excluded.description,
            is_holiday = excluded.is_holiday,
            total_hours = excluded.total_hours,
            regular_hours = excluded.regular_hours,
            overtime_hours = excluded.overtime_hours,
            earnings = excluded.earnings",
        params![
            e.id,
            user_id,
            fmt_date(&e.date),
            fmt_time(&e.start),
            fmt_time(&e.lunch_start),
            fmt_time(&e.lunch_end),
            e.dinner_start.as_ref().map(fmt_time),
            e.dinner_end.as_ref().map(fmt_time),
            fmt_time(&e.end),
            e.description,
            if e.is_holiday { 1 } else { 0 },
            e.total_hours,
            e.regular_hours,
            e.overtime_hours,
            e.earnings,
        ],
    )?;
    Ok(())
}

pub fn delete_time_entry(conn: &Connection, id: &str) -> AppResult<bool> {
    let n = conn.execute("DELETE FROM time_entries WHERE id = ?1", [id])?;
    Ok(n > 0)
}

// ---------------------------
// Expenses
// ---------------------------

pub fn map_expense(row: &Row) -> Result<ExpenseEntry> {
    let raw_cat: String = row.get("category")?;
    let category = ExpenseCategory::from_db_str(&raw_cat)
        .ok_or_else(|| conversion_error(0, AppError::InvalidCategory(raw_cat.clone())))?;

    Ok(ExpenseEntry {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        date: get_date(row, "date")?,
        amount: row.get("amount")?,
        category,
        description: row.get("description")?,
        reference: row.get("reference")?,
    })
}

pub fn load_expenses(conn: &Connection, user_id: &str) -> AppResult<Vec<ExpenseEntry>> {
    let mut stmt = conn.prepare_cached(
        "SELECT * FROM expenses
         WHERE user_id = ?1
         ORDER BY date ASC",
    )?;

    let rows = stmt.query_map([user_id], map_expense)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn upsert_expense(conn: &Connection, e: &ExpenseEntry, user_id: &str) -> AppResult<()> {
    conn.execute(
        "INSERT INTO expenses (id, user_id, date, amount, category, description, reference)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
         ON CONFLICT(id) DO UPDATE SET
            date = excluded.date,
            amount = excluded.amount,
            category = excluded.category,
            description = excluded.description,
            reference = excluded.reference",
        params![
            e.id,
            user_id,
            fmt_date(&e.date),
            e.amount,
            e.category.to_db_str(),
            e.description,
            e.reference,
        ],
    )?;
    Ok(())
}

pub fn delete_expense(conn: &Connection, id: &str) -> AppResult<bool> {
    let n = conn.execute("DELETE FROM expenses WHERE id = ?1", [id])?;
    Ok(n > 0)
}

// ---------------------------
// Advances
// ---------------------------

pub fn map_advance(row: &Row) -> Result<AdvanceEntry> {
    Ok(AdvanceEntry {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        date: get_date(row, "date")?,
        amount: row.get("amount")?,
        description: row.get("description")?,
    })
}

pub fn load_advances(conn: &Connection, user_id: &str) -> AppResult<Vec<AdvanceEntry>> {
    let mut stmt = conn.prepare_cached(
        "SELECT * FROM advances
         WHERE user_id = ?1
         ORDER BY date ASC",
    )?;

    let rows = stmt.query_map([user_id], map_advance)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn upsert_advance(conn: &Connection, a: &AdvanceEntry, user_id: &str) -> AppResult<()> {
    conn.execute(
        "INSERT INTO advances (id, user_id, date, amount, description)
         VALUES (?1, ?2, ?3, ?4, ?5)
         ON CONFLICT(id) DO UPDATE SET
            date = excluded.date,
            amount = excluded.amount,
            description = excluded.description",
        params![a.id, user_id, fmt_date(&a.date), a.amount, a.description],
    )?;
    Ok(())
}

pub fn delete_advance(conn: &Connection, id: &str) -> AppResult<bool> {
    let n = conn.execute("DELETE FROM advances WHERE id = ?1", [id])?;
    Ok(n > 0)
}

// ---------------------------
// Users
// ---------------------------

pub fn map_user(row: &Row) -> Result<User> {
    let raw_role: String = row.get("role")?;
    let role = Role::from_db_str(&raw_role)
        .ok_or_else(|| conversion_error(0, AppError::Other(format!("Invalid role: {raw_role}"))))?;

    Ok(User {
        id: row.get("id")?,
        username: row.get("username")?,
        name: row.get("name")?,
        role,
        is_active: row.get::<_, i32>("is_active")? == 1,
    })
}

pub fn load_users(conn: &Connection) -> AppResult<Vec<User>> {
    let mut stmt = conn.prepare_cached("SELECT * FROM users ORDER BY username ASC")?;
    let rows = stmt.query_map([], map_user)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn upsert_user(conn: &Connection, u: &User) -> AppResult<()> {
    conn.execute(
        "INSERT INTO users (id, username, name, role, is_active)
         VALUES (?1, ?2, ?3, ?4, ?5)
         ON CONFLICT(id) DO UPDATE SET
            username = excluded.username,
            name = excluded.name,
            role = excluded.role,
            is_active = excluded.is_active",
        params![
            u.id,
            u.username,
            u.name,
            u.role.to_db_str(),
            if u.is_active { 1 } else { 0 }
        ],
    )?;
    Ok(())
}

pub fn delete_user(conn: &Connection, id: &str) -> AppResult<bool> {
    let n = conn.execute("DELETE FROM users WHERE id = ?1", [id])?;
    Ok(n > 0)
}
