use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists. It doubles as the audit trail and the
/// ledger of applied migrations.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20250101_0001_initial_schema",
        description: "Created settings, time_entries, expenses, advances and users tables",
        sql: r#"
        CREATE TABLE IF NOT EXISTS users (
            id         TEXT PRIMARY KEY,
            username   TEXT NOT NULL,
            name       TEXT NOT NULL,
            role       TEXT NOT NULL DEFAULT 'user' CHECK(role IN ('admin','user')),
            is_active  INTEGER NOT NULL DEFAULT 1
        );

        CREATE TABLE IF NOT EXISTS settings (
            user_id        TEXT PRIMARY KEY,
            hourly_rate    REAL NOT NULL DEFAULT 0,
            overtime_rate  REAL NOT NULL DEFAULT 8,
            daily_limit    REAL NOT NULL DEFAULT 8,
            currency       TEXT NOT NULL DEFAULT 'EUR',
            user_name      TEXT NOT NULL DEFAULT '',
            expense_fund   REAL NOT NULL DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS time_entries (
            id                TEXT PRIMARY KEY,
            user_id           TEXT NOT NULL,
            date              TEXT NOT NULL,
            start_time        TEXT NOT NULL,
            lunch_start_time  TEXT NOT NULL,
            lunch_end_time    TEXT NOT NULL,
            dinner_start_time TEXT,
            dinner_end_time   TEXT,
            end_time          TEXT NOT NULL,
            description       TEXT NOT NULL DEFAULT '',
            is_holiday        INTEGER NOT NULL DEFAULT 0,
            total_hours       REAL NOT NULL,
            regular_hours     REAL NOT NULL,
            overtime_hours    REAL NOT NULL,
            earnings          REAL NOT NULL
        );

        CREATE TABLE IF NOT EXISTS expenses (
            id           TEXT PRIMARY KEY,
            user_id      TEXT NOT NULL,
            date         TEXT NOT NULL,
            amount       REAL NOT NULL,
            category     TEXT NOT NULL,
            description  TEXT NOT NULL DEFAULT '',
            reference    TEXT
        );

        CREATE TABLE IF NOT EXISTS advances (
            id           TEXT PRIMARY KEY,
            user_id      TEXT NOT NULL,
            date         TEXT NOT NULL,
            amount       REAL NOT NULL,
            description  TEXT
        );
        "#,
    },
    Migration {
        version: "20250110_0002_owner_date_indexes",
        description: "Added (user_id, date) indexes",
        sql: r#"
        CREATE INDEX IF NOT EXISTS idx_time_entries_user_date ON time_entries(user_id, date);
        CREATE INDEX IF NOT EXISTS idx_expenses_user_date ON expenses(user_id, date);
        CREATE INDEX IF NOT EXISTS idx_advances_user_date ON advances(user_id, date);
        "#,
    },
];

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Public entry point: run all pending migrations, in order.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }

        conn.execute_batch(m.sql)?;

        conn.execute(
            "INSERT INTO log (date, operation, target, message)
             VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
            [m.version, m.description],
        )?;

        success(format!("Migration applied: {} → {}", m.version, m.description));
    }

    Ok(())
}

/// True when every known migration has been applied.
pub fn is_up_to_date(conn: &Connection) -> Result<bool> {
    ensure_log_table(conn)?;
    for m in MIGRATIONS {
        if !is_applied(conn, m.version)? {
            return Ok(false);
        }
    }
    Ok(true)
}
